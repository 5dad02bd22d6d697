use super::common::*;
use crate::engine::domain::OwnedProperty;

#[test]
fn strong_owner_gets_all_three_points() {
    let generator = why_now_generator();
    let justification = generator.generate(&ready_lead("strong"));

    assert_eq!(justification.points.len(), 3);
    assert!(!justification.is_empty());

    let sources: Vec<&str> = justification
        .points
        .iter()
        .map(|point| point.data_source.as_str())
        .collect();
    assert!(sources.iter().any(|s| s.starts_with("income_history: 2 entries")));
    assert!(sources.iter().any(|s| s.starts_with("property_snapshot:")));
    assert!(sources.iter().any(|s| s.starts_with("affordability_model:")));
    for point in &justification.points {
        assert!(!point.title.is_empty());
        assert!(!point.factual_statement.is_empty());
    }
}

#[test]
fn missing_data_yields_an_empty_summary_not_an_error() {
    let generator = why_now_generator();
    let mut sparse = lead("sparse");
    sparse.income_history.truncate(1);
    sparse.owned_property = None;

    let justification = generator.generate(&sparse);
    assert!(justification.is_empty());
}

#[test]
fn flat_income_never_claims_growth() {
    let generator = why_now_generator();
    let mut flat = ready_lead("flat");
    let first = flat.income_history[0].amount;
    for record in &mut flat.income_history {
        record.amount = first;
    }

    let justification = generator.generate(&flat);
    assert!(justification
        .points
        .iter()
        .all(|point| !point.data_source.starts_with("income_history")));
}

#[test]
fn exhausted_equity_never_claims_a_downpayment() {
    let generator = why_now_generator();
    let mut leveraged = lead("leveraged");
    leveraged.owned_property = Some(OwnedProperty {
        estimated_value: 300_000.0,
        outstanding_loan_balance: 295_000.0,
    });

    let justification = generator.generate(&leveraged);
    assert!(justification
        .points
        .iter()
        .all(|point| !point.data_source.starts_with("property_snapshot")));
}

#[test]
fn generation_is_pure_formatting() {
    let generator = why_now_generator();
    let snapshot = ready_lead("repeat");
    assert_eq!(generator.generate(&snapshot), generator.generate(&snapshot));
}
