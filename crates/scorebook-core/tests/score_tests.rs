//! Tests for score construction, equality and rendering through the public API.

use std::collections::HashSet;

use chrono::NaiveDate;
use scorebook_core::{Error, ScoreRecord, ScoreValue, Title, UniqueScoreList, parse_score};

fn create(name: &str, value: u32, date: &str) -> scorebook_core::Result<ScoreRecord> {
    ScoreRecord::new(Title::new(name)?, ScoreValue::new(value)?, date)
}

mod construction {
    use super::*;

    #[test]
    fn test_midterm_example() {
        let record = create("Midterm", 85, "2024-03-15 14:30").unwrap();

        assert_eq!(record.name(), &Title::new("Midterm").unwrap());
        assert_eq!(record.value(), ScoreValue::new(85).unwrap());
        assert_eq!(
            record.timestamp(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
        assert_eq!(
            record.to_string(),
            "Name: Midterm; Score: 85; Date: 2024-03-15T14:30"
        );
    }

    #[test]
    fn test_invalid_calendar_day() {
        let err = create("Quiz", 0, "2024-02-30 09:00").unwrap_err();
        assert!(matches!(err, Error::BadDate(_)));
    }

    #[test]
    fn test_pattern_mismatches() {
        for text in ["2024-13-01 10:00", "not-a-date", "2024-03-15"] {
            let err = create("Quiz", 0, text).unwrap_err();
            assert!(matches!(err, Error::BadDate(_)), "{:?} -> {:?}", text, err);
        }
    }

    #[test]
    fn test_every_minute_of_a_day_parses() {
        for hour in 0..24 {
            for minute in [0, 1, 29, 59] {
                let text = format!("2024-07-04 {:02}:{:02}", hour, minute);
                let record = create("Lab", 50, &text).unwrap();
                assert_eq!(
                    record.timestamp().format("%Y-%m-%d %H:%M").to_string(),
                    text
                );
            }
        }
    }

    #[test]
    fn test_missing_inputs() {
        let err = ScoreRecord::from_fields(None, None, None).unwrap_err();
        assert!(matches!(err, Error::NullArgument { field: "name" }));
        assert!(err.is_validation());
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_equal_inputs_give_equal_records() {
        let a = create("Final", 92, "2024-05-20 10:00").unwrap();
        let b = create("Final", 92, "2024-05-20 10:00").unwrap();

        assert_eq!(a, b);
        assert!(a.is_same_score(&b));
        assert_eq!(a.to_string(), b.to_string());

        let set: HashSet<ScoreRecord> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_same_score_matches_eq_across_pairs() {
        let records = [
            create("Final", 92, "2024-05-20 10:00").unwrap(),
            create("Final", 91, "2024-05-20 10:00").unwrap(),
            create("Final", 92, "2024-05-21 10:00").unwrap(),
            create("Quiz", 92, "2024-05-20 10:00").unwrap(),
        ];

        for a in &records {
            for b in &records {
                assert_eq!(a.is_same_score(b), a == b);
                assert_eq!(a.is_same_score(b), b.is_same_score(a));
            }
        }
    }
}

mod parsing_into_list {
    use super::*;

    #[test]
    fn test_parse_and_collect() {
        let lines = [
            "n/Quiz v/7 d/2024-03-01 09:00",
            "n/Midterm v/85 d/2024-03-15 14:30",
            "n/Quiz v/7 d/2024-03-01 09:00",
        ];

        let mut list = UniqueScoreList::new();
        let mut duplicates = 0;
        for line in lines {
            let record = parse_score(line).unwrap();
            match list.add(record) {
                Ok(()) => {}
                Err(Error::DuplicateScore(_)) => duplicates += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(list.len(), 2);
        assert_eq!(duplicates, 1);
    }
}
