//! Tests for the seeded record registry

use std::collections::HashSet;

use fundtrack::core::models::FundingStatus;
use fundtrack::registry::Registry;

use super::common::AlumniBuilder;

#[test]
fn seed_has_expected_counts() {
    let registry = Registry::seeded();
    assert_eq!(registry.alumni().len(), 10);
    assert_eq!(registry.projects().len(), 4);
}

#[test]
fn alumni_ids_are_unique() {
    let registry = Registry::seeded();
    let ids: HashSet<&str> = registry.alumni().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids.len(), registry.alumni().len());
}

#[test]
fn project_ids_are_unique() {
    let registry = Registry::seeded();
    let ids: HashSet<&str> = registry.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), registry.projects().len());
}

#[test]
fn seed_order_is_stable() {
    let registry = Registry::seeded();
    assert_eq!(registry.alumni()[0].name, "Sarah Chen");
    assert_eq!(registry.alumni()[9].name, "Raj Krishnamurthy");
    assert_eq!(registry.projects()[0].name, "Innovation Lab Fund");
}

#[test]
fn prospects_have_no_contributions() {
    let registry = Registry::seeded();
    for alumni in registry.alumni() {
        if alumni.funding_status == FundingStatus::Potential {
            assert_eq!(alumni.total_contributed, 0, "{} is only a prospect", alumni.name);
        }
    }
}

#[test]
fn next_ids_continue_the_sequence() {
    let registry = Registry::seeded();
    assert_eq!(registry.next_alumni_id(), "11");
    assert_eq!(registry.next_project_id(), "5");
}

#[test]
fn next_id_on_empty_registry_starts_at_one() {
    let registry = Registry::new();
    assert_eq!(registry.next_alumni_id(), "1");
    assert_eq!(registry.next_project_id(), "1");
}

#[test]
fn added_records_are_session_local_appends() {
    let mut registry = Registry::seeded();
    let before = registry.alumni().len();

    registry.add_alumni(AlumniBuilder::new("11").name("New Donor").build());

    assert_eq!(registry.alumni().len(), before + 1);
    assert_eq!(registry.alumni().last().unwrap().name, "New Donor");
    assert_eq!(registry.next_alumni_id(), "12");
}
