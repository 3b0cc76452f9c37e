//! Tests for domain model types

use fundtrack::core::models::{
    AlumniFilter, FilterError, FundingStatus, ProjectStatus, SortColumn, StatusFilter,
};

mod funding_status {
    use super::*;

    #[test]
    fn display_matches_serialized_form() {
        for status in FundingStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn parses_every_canonical_label() {
        for status in FundingStatus::all() {
            let parsed: FundingStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("COMMITTED".parse::<FundingStatus>().unwrap(), FundingStatus::Committed);
    }

    #[test]
    fn parse_rejects_unknown_with_hint() {
        let err = "vip".parse::<FundingStatus>().unwrap_err();
        assert!(err.contains("active, potential, contacted, committed, inactive"));
    }
}

mod project_status {
    use super::*;

    #[test]
    fn roundtrips_through_serde() {
        for status in [ProjectStatus::Active, ProjectStatus::Completed, ProjectStatus::Planning] {
            let json = serde_json::to_string(&status).unwrap();
            let back: ProjectStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn parse_accepts_done_alias() {
        assert_eq!("done".parse::<ProjectStatus>().unwrap(), ProjectStatus::Completed);
    }
}

mod status_filter {
    use super::*;

    #[test]
    fn all_parses_and_serializes_as_all() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(serde_json::to_string(&StatusFilter::All).unwrap(), "\"all\"");
    }

    #[test]
    fn wraps_concrete_statuses() {
        let parsed: StatusFilter = "committed".parse().unwrap();
        assert_eq!(parsed, StatusFilter::Status(FundingStatus::Committed));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"committed\"");
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("everything".parse::<StatusFilter>().is_err());
    }
}

mod filter_state {
    use super::*;

    #[test]
    fn default_filter_is_empty_and_valid() {
        let filter = AlumniFilter::default();
        assert!(filter.is_empty());
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn inverted_year_range_fails_validation() {
        let filter = AlumniFilter { year_range: Some((2020, 2010)), ..Default::default() };
        assert_eq!(filter.validate(), Err(FilterError::InvertedYearRange(2020, 2010)));
    }

    #[test]
    fn equal_year_bounds_are_valid() {
        let filter = AlumniFilter { year_range: Some((2015, 2015)), ..Default::default() };
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn wildcard_only_filter_counts_as_empty() {
        let filter = AlumniFilter { status: Some(StatusFilter::All), ..Default::default() };
        assert!(filter.is_empty());
    }
}

mod sort_column {
    use super::*;

    #[test]
    fn parses_every_column_label() {
        for label in ["name", "company", "year", "status", "contributed", "location"] {
            let column: SortColumn = label.parse().unwrap();
            assert_eq!(column.to_string(), label);
        }
    }

    #[test]
    fn parse_rejects_unknown_with_hint() {
        let err = "email".parse::<SortColumn>().unwrap_err();
        assert!(err.contains("name, company, year, status, contributed, location"));
    }
}
