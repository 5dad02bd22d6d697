use super::common::*;
use crate::engine::domain::{EmploymentKind, IncomeRecord, OwnedProperty};
use crate::engine::{ReadinessFactor, ReadinessState};

#[test]
fn equity_rich_owner_is_ready() {
    let scorer = readiness_scorer();
    let result = scorer.calculate(&ready_lead("ready"));

    assert!(result.score >= 70, "expected ready, got {}", result.score);
    assert_eq!(result.state, ReadinessState::Ready);
    let maxima: u32 = result.breakdown.iter().map(|c| u32::from(c.max)).sum();
    assert_eq!(maxima, 100);
    for component in &result.breakdown {
        assert!(component.score <= component.max);
        assert!(!component.reason.is_empty());
    }
}

#[test]
fn renter_with_growth_lands_in_monitoring() {
    let scorer = readiness_scorer();
    let result = scorer.calculate(&lead("renter"));

    // 30 growth + 0 equity + 14 debt + 15 employment + 10 credit.
    assert_eq!(result.score, 69);
    assert_eq!(result.state, ReadinessState::Monitoring);
}

#[test]
fn state_boundaries_are_inclusive_at_the_floors() {
    let scorer = readiness_scorer();

    // 0 growth + 0 equity + 14 debt + 15 employment + 10 credit = 39.
    let mut at_39 = lead("boundary-39");
    at_39.income_history.truncate(1);
    at_39.employment.tenure_months = 24;
    let result = scorer.calculate(&at_39);
    assert_eq!(result.score, 39);
    assert_eq!(result.state, ReadinessState::NotReady);

    // 10 growth + 0 equity + 20 debt + 0 employment + 10 credit = 40.
    let mut at_40 = lead("boundary-40");
    at_40.income_history = vec![
        IncomeRecord { amount: 6_000.0, recorded_on: date(2024, 1, 15) },
        IncomeRecord { amount: 6_300.0, recorded_on: date(2025, 6, 1) },
    ];
    at_40.existing_commitment_percent = 0.18;
    at_40.employment.kind = EmploymentKind::Unemployed;
    at_40.employment.tenure_months = 0;
    let result = scorer.calculate(&at_40);
    assert_eq!(result.score, 40);
    assert_eq!(result.state, ReadinessState::Monitoring);

    // 30 growth + 12 equity + 3 debt + 15 employment + 10 credit = 70.
    let mut at_70 = lead("boundary-70");
    at_70.owned_property = Some(OwnedProperty {
        estimated_value: 500_000.0,
        outstanding_loan_balance: 400_000.0,
    });
    at_70.existing_commitment_percent = 0.60;
    at_70.employment.tenure_months = 24;
    let result = scorer.calculate(&at_70);
    assert_eq!(result.score, 70);
    assert_eq!(result.state, ReadinessState::Ready);
}

#[test]
fn thin_income_history_skips_the_growth_component() {
    let scorer = readiness_scorer();

    let mut single_entry = lead("thin-history");
    single_entry.income_history.truncate(1);
    let result = scorer.calculate(&single_entry);
    let growth = result
        .breakdown
        .iter()
        .find(|c| c.factor == ReadinessFactor::IncomeGrowth)
        .expect("growth component present");
    assert_eq!(growth.score, 0);
    assert_eq!(growth.reason, "insufficient income history");

    let mut zero_baseline = lead("zero-baseline");
    zero_baseline.income_history = vec![
        IncomeRecord { amount: 0.0, recorded_on: date(2024, 1, 15) },
        IncomeRecord { amount: 5_000.0, recorded_on: date(2025, 6, 1) },
    ];
    let result = scorer.calculate(&zero_baseline);
    let growth = result
        .breakdown
        .iter()
        .find(|c| c.factor == ReadinessFactor::IncomeGrowth)
        .expect("growth component present");
    assert_eq!(growth.score, 0);
}

#[test]
fn missing_property_zeroes_the_equity_component_with_reason() {
    let scorer = readiness_scorer();
    let result = scorer.calculate(&lead("no-property"));
    let equity = result
        .breakdown
        .iter()
        .find(|c| c.factor == ReadinessFactor::Equity)
        .expect("equity component present");
    assert_eq!(equity.score, 0);
    assert!(equity.reason.contains("no owned property"));
}

#[test]
fn prior_rejection_takes_the_fixed_lower_credit_value() {
    let scorer = readiness_scorer();
    let mut rejected = ready_lead("rejected");
    rejected.previous_loan_rejection = true;

    let result = scorer.calculate(&rejected);
    let credit = result
        .breakdown
        .iter()
        .find(|c| c.factor == ReadinessFactor::CreditHistory)
        .expect("credit component present");
    assert_eq!(credit.score, 3);
}

#[test]
fn readiness_is_deterministic() {
    let scorer = readiness_scorer();
    let snapshot = ready_lead("repeat");
    assert_eq!(scorer.calculate(&snapshot), scorer.calculate(&snapshot));
}
