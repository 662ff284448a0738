//! Unit tests for CLI types and conversions

use super::*;
use std::str::FromStr;

#[cfg(test)]
mod team_id_tests {
    use super::*;

    #[test]
    fn test_team_id_new() {
        let id = TeamId::new(12);
        assert_eq!(id.as_i64(), 12);
    }

    #[test]
    fn test_team_id_display() {
        let id = TeamId::new(7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_team_id_from_str_valid() {
        let id = TeamId::from_str("9").unwrap();
        assert_eq!(id, TeamId::new(9));
    }

    #[test]
    fn test_team_id_from_str_invalid() {
        assert!(TeamId::from_str("Duke").is_err());
    }

    #[test]
    fn test_ids_order_by_value() {
        assert!(PlayerId::new(112) < PlayerId::new(126));
        assert_eq!(StateId::new(1).max(StateId::new(3)), StateId::new(3));
    }
}

#[cfg(test)]
mod stat_range_tests {
    use super::*;

    #[test]
    fn test_int_range_parse() {
        let range = StatRange::<i64>::from_str("35:40").unwrap();
        assert_eq!(range, StatRange::new(35, 40));
    }

    #[test]
    fn test_float_range_parse() {
        let range = StatRange::<f64>::from_str("0.5:1.5").unwrap();
        assert_eq!(range.min, 0.5);
        assert_eq!(range.max, 1.5);
    }

    #[test]
    fn test_range_allows_whitespace_and_equal_bounds() {
        let range = StatRange::<i64>::from_str(" 10 : 10 ").unwrap();
        assert_eq!(range, StatRange::new(10, 10));
    }

    #[test]
    fn test_range_missing_separator() {
        let err = StatRange::<i64>::from_str("35-40").unwrap_err();
        assert!(err.to_string().contains("expected MIN:MAX"));
    }

    #[test]
    fn test_range_min_exceeds_max() {
        let err = StatRange::<i64>::from_str("40:35").unwrap_err();
        assert!(err.to_string().contains("min exceeds max"));
    }

    #[test]
    fn test_range_bad_number() {
        assert!(StatRange::<i64>::from_str("a:5").is_err());
        assert!(StatRange::<i64>::from_str("1.5:5").is_err());
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = StatRange::new(35, 40);
        assert!(range.contains(35));
        assert!(range.contains(40));
        assert!(!range.contains(34));
        assert!(!range.contains(41));
    }

    #[test]
    fn test_range_display() {
        assert_eq!(StatRange::new(1, 2).to_string(), "1:2");
    }
}
