//! Tests for the alumni filter engine

use fundtrack::core::models::{Alumni, AlumniFilter, FundingStatus, StatusFilter};
use fundtrack::core::services::filter_alumni;
use fundtrack::registry::Registry;

use super::common::AlumniBuilder;

fn two_donors() -> Vec<Alumni> {
    vec![
        AlumniBuilder::new("1")
            .name("Sarah Chen")
            .company("TechCorp")
            .status(FundingStatus::Committed)
            .build(),
        AlumniBuilder::new("2")
            .name("James Okafor")
            .company("FinServ")
            .status(FundingStatus::Active)
            .build(),
    ]
}

mod search {
    use super::*;

    #[test]
    fn lowercase_search_matches_mixed_case_company() {
        let records = two_donors();
        let filter = AlumniFilter { search: Some("techcorp".to_string()), ..Default::default() };

        let result = filter_alumni(&records, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Sarah Chen");
    }

    #[test]
    fn absent_search_matches_everything() {
        let records = two_donors();
        let filter = AlumniFilter { search: None, ..Default::default() };
        assert_eq!(filter_alumni(&records, &filter).len(), 2);
    }

    #[test]
    fn empty_search_matches_everything() {
        let records = two_donors();
        let filter = AlumniFilter { search: Some(String::new()), ..Default::default() };
        assert_eq!(filter_alumni(&records, &filter).len(), 2);
    }

    #[test]
    fn unmatched_search_yields_empty() {
        let records = two_donors();
        let filter = AlumniFilter { search: Some("nonexistent".to_string()), ..Default::default() };
        assert!(filter_alumni(&records, &filter).is_empty());
    }
}

mod status {
    use super::*;

    #[test]
    fn wildcard_is_identity() {
        let records = two_donors();
        let filter = AlumniFilter { status: Some(StatusFilter::All), ..Default::default() };

        let result = filter_alumni(&records, &filter);
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn exact_status_match() {
        let records = two_donors();
        let filter = AlumniFilter {
            status: Some(StatusFilter::Status(FundingStatus::Committed)),
            ..Default::default()
        };

        let result = filter_alumni(&records, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }
}

mod properties {
    use super::*;

    /// Every filtered result must be an order-preserving subsequence of
    /// the input: record positions strictly increase.
    fn assert_subsequence(input: &[Alumni], output: &[&Alumni]) {
        let mut last_index = None;
        for record in output {
            let index = input
                .iter()
                .position(|a| a.id == record.id)
                .expect("result record must exist in input");
            if let Some(last) = last_index {
                assert!(index > last, "result order must preserve input order");
            }
            last_index = Some(index);
        }
    }

    #[test]
    fn filtered_seed_data_is_a_subsequence() {
        let registry = Registry::seeded();
        let filters = [
            AlumniFilter::default(),
            AlumniFilter { search: Some("a".to_string()), ..Default::default() },
            AlumniFilter {
                status: Some(StatusFilter::Status(FundingStatus::Committed)),
                ..Default::default()
            },
            AlumniFilter { year_range: Some((2012, 2017)), ..Default::default() },
            AlumniFilter {
                search: Some("c".to_string()),
                status: Some(StatusFilter::Status(FundingStatus::Potential)),
                year_range: Some((2010, 2020)),
            },
        ];

        for filter in filters {
            let result = filter_alumni(registry.alumni(), &filter);
            assert_subsequence(registry.alumni(), &result);
        }
    }

    #[test]
    fn invalid_filter_falls_back_to_unfiltered() {
        let registry = Registry::seeded();
        let filter = AlumniFilter {
            search: Some("techcorp".to_string()),
            year_range: Some((2030, 1950)),
            ..Default::default()
        };

        // The whole filter state is invalid, so even the search predicate
        // is dropped.
        let result = filter_alumni(registry.alumni(), &filter);
        assert_eq!(result.len(), registry.alumni().len());
    }
}
