//! Tests for definition validation.

use chrono::NaiveDate;
use expc_model::{CheckType, ExperimentDefinition, Severity};
use expc_validate::Validator;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
}

fn validator() -> Validator {
    Validator::new().with_today(today())
}

fn definition(name: &str, expiry: &str) -> ExperimentDefinition {
    ExperimentDefinition::new(name, "A test experiment", "owner@example.com", expiry)
}

#[test]
fn well_formed_definition_passes_construction() {
    let report = validator().validate(&definition("tcp_frame_size_tuning", "2025-02-01"));
    assert!(report.issues.is_empty());
}

#[test]
fn every_missing_field_is_reported() {
    let empty = ExperimentDefinition::new("", "", "", "");
    let report = validator().validate(&empty);
    assert_eq!(report.error_count(), 4);
    assert!(report.has_check(CheckType::MissingName));
    assert!(report.has_check(CheckType::MissingDescription));
    assert!(report.has_check(CheckType::MissingOwner));
    assert!(report.has_check(CheckType::MissingExpiry));
}

#[test]
fn empty_owner_is_an_error() {
    let def = ExperimentDefinition::new("a", "desc", "", "2025-02-01");
    let report = validator().validate(&def);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].check_type, CheckType::MissingOwner);
    assert_eq!(report.issues[0].severity, Severity::Error);
}

#[test]
fn monitoring_experiment_must_never_expire() {
    let report = validator().validate(&definition("monitoring_experiment", "2025-02-01"));
    assert!(report.has_check(CheckType::MonitoringExpiry));
    assert!(!report.is_valid());

    let report = validator().validate(&definition("monitoring_experiment", "never-ever"));
    assert!(report.is_valid());
}

#[test]
fn monitoring_sentinel_skips_date_rules() {
    let def = definition("monitoring_experiment", "never-ever");
    assert!(validator().is_valid(&def, true));
}

#[test]
fn never_ever_is_not_a_date_for_other_experiments() {
    let report = validator().check(&definition("other", "never-ever"), false);
    assert!(report.has_check(CheckType::InvalidExpiryFormat));
}

#[test]
fn blackout_expiry_is_rejected() {
    let report = validator().check(&definition("a", "2025-12-01"), false);
    assert!(!report.is_valid());
    assert!(report.has_check(CheckType::ExpiryInBlackout));
}

#[test]
fn expiry_outside_blackout_is_valid() {
    assert!(validator().is_valid(&definition("a", "2025-02-01"), false));
}

#[test]
fn blackout_bounds_are_inclusive() {
    let v = validator();
    assert!(!v.is_valid(&definition("a", "2025-11-01"), false));
    assert!(!v.is_valid(&definition("a", "2026-01-15"), false));
    assert!(v.is_valid(&definition("a", "2025-10-31"), false));
    assert!(v.is_valid(&definition("a", "2026-01-16"), false));
}

#[test]
fn unparseable_expiry_is_rejected() {
    for expiry in ["2025/02/01", "next spring", "2025-02-30", "2025-02-01T00:00"] {
        let report = validator().check(&definition("a", expiry), false);
        assert!(
            report.has_check(CheckType::InvalidExpiryFormat),
            "{expiry} should not parse"
        );
    }
}

#[test]
fn past_expiry_warns_only_when_requested() {
    let def = definition("a", "2024-06-01");

    let quiet = validator().check(&def, false);
    assert!(quiet.issues.is_empty());

    let report = validator().check(&def, true);
    assert!(report.is_valid());
    assert_eq!(report.warning_count(), 1);
    assert!(report.has_check(CheckType::Expired));
}

#[test]
fn far_future_expiry_warns() {
    // 2025-01-20 + 180 days = 2025-07-19
    let v = validator();
    let near = v.check(&definition("a", "2025-07-19"), true);
    assert!(near.issues.is_empty());

    let far = v.check(&definition("a", "2025-07-20"), true);
    assert!(far.is_valid());
    assert!(far.has_check(CheckType::ExpiryTooFar));
}

#[test]
fn invalidated_definition_stays_invalid_at_query_time() {
    let mut def = definition("a", "2025-02-01");
    def.mark_invalid();
    let report = validator().check(&def, false);
    assert!(report.has_check(CheckType::DefinitionInvalid));
    assert!(!report.is_valid());
}

#[test]
fn accepts_matches_query_time_validity() {
    let v = validator();
    assert!(v.accepts(&definition("a", "2025-02-01")));
    assert!(v.accepts(&definition("a", "2024-06-01")));
    assert!(!v.accepts(&definition("a", "2025-12-01")));
    assert!(!v.accepts(&definition("a", "soon")));

    let mut def = definition("a", "2025-02-01");
    def.mark_invalid();
    assert!(!v.accepts(&def));
}
