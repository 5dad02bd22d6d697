use super::common::*;
use crate::engine::domain::{IncomeRecord, OwnedProperty};
use crate::engine::TriggerKind;

#[test]
fn identical_snapshots_emit_nothing() {
    let detector = trigger_detector();
    let snapshot = lead("unchanged");

    let result = detector.detect(&snapshot, &snapshot, detected_at());

    assert!(result.triggers.is_empty());
    assert!(result.alerts.is_empty());
    assert_eq!(result.is_upgrade_ready, snapshot.is_upgrade_ready);

    // An already-ready lead stays ready without re-firing.
    let mut already_ready = ready_lead("already-ready");
    already_ready.is_upgrade_ready = true;
    let result = detector.detect(&already_ready, &already_ready, detected_at());
    assert!(result.triggers.is_empty());
    assert!(result.is_upgrade_ready);
}

#[test]
fn income_jump_past_the_threshold_fires_a_hard_trigger() {
    let detector = trigger_detector();
    let previous = lead("income-jump");
    let mut updated = previous.clone();
    updated.income_history.push(IncomeRecord {
        amount: 9_200.0,
        recorded_on: date(2025, 9, 1),
    });

    let result = detector.detect(&updated, &previous, detected_at());

    assert_eq!(result.triggers.len(), 1);
    assert_eq!(result.triggers[0].kind, TriggerKind::IncomeJump);
    assert_eq!(result.triggers[0].triggered_at, detected_at());
    assert!(result.is_upgrade_ready);
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.alerts[0].lead_id, updated.id);
}

#[test]
fn modest_income_rise_stays_silent() {
    let detector = trigger_detector();
    let previous = lead("income-steady");
    let mut updated = previous.clone();
    updated.income_history.push(IncomeRecord {
        amount: 8_000.0,
        recorded_on: date(2025, 9, 1),
    });

    let result = detector.detect(&updated, &previous, detected_at());
    assert!(result.triggers.is_empty());
    assert!(!result.is_upgrade_ready);
}

#[test]
fn paying_down_the_loan_crosses_an_equity_band() {
    let detector = trigger_detector();
    let mut previous = lead("equity");
    previous.owned_property = Some(OwnedProperty {
        estimated_value: 500_000.0,
        outstanding_loan_balance: 420_000.0,
    });
    let mut updated = previous.clone();
    updated.owned_property = Some(OwnedProperty {
        estimated_value: 500_000.0,
        outstanding_loan_balance: 380_000.0,
    });

    let result = detector.detect(&updated, &previous, detected_at());

    assert_eq!(result.triggers.len(), 1);
    assert_eq!(result.triggers[0].kind, TriggerKind::EquityBandCrossed);
    assert!(result.triggers[0].reason.contains("20%"));
    assert!(result.is_upgrade_ready);
}

#[test]
fn lease_entering_the_window_is_a_soft_signal() {
    let detector = trigger_detector();
    let previous = lead("lease");
    let mut updated = previous.clone();
    updated.lease_end = Some(today() + chrono::Duration::days(30));

    let result = detector.detect(&updated, &previous, detected_at());

    assert_eq!(result.triggers.len(), 1);
    assert_eq!(result.triggers[0].kind, TriggerKind::LeaseExpiring);
    assert!(!result.is_upgrade_ready, "soft signals never flip readiness");
    assert!(result.alerts.is_empty());
}

#[test]
fn new_milestones_each_emit_one_soft_trigger() {
    let detector = trigger_detector();
    let previous = lead("milestones");
    let mut updated = previous.clone();
    updated.milestones.push(milestone("second child born"));
    updated.milestones.push(milestone("promoted to manager"));

    let result = detector.detect(&updated, &previous, detected_at());

    assert_eq!(result.triggers.len(), 2);
    assert!(result
        .triggers
        .iter()
        .all(|trigger| trigger.kind == TriggerKind::LifeMilestone));
    assert!(!result.is_upgrade_ready);
}

#[test]
fn crossing_into_ready_fires_exactly_once() {
    let detector = trigger_detector();
    // 68 points: monitoring, with the property already on file so no
    // equity band moves.
    let mut previous = lead("readiness-edge");
    previous.owned_property = Some(OwnedProperty {
        estimated_value: 500_000.0,
        outstanding_loan_balance: 400_000.0,
    });
    previous.existing_commitment_percent = 0.60;
    previous.employment.tenure_months = 12;

    // Tenure reaches two years: 70 points, ready.
    let mut updated = previous.clone();
    updated.employment.tenure_months = 24;

    let result = detector.detect(&updated, &previous, detected_at());
    assert_eq!(result.triggers.len(), 1);
    assert_eq!(result.triggers[0].kind, TriggerKind::ReadinessAchieved);
    assert!(result.is_upgrade_ready);

    // Staying ready on the next recompute does not re-fire.
    let mut settled = updated.clone();
    settled.is_upgrade_ready = true;
    let repeat = detector.detect(&settled, &settled, detected_at());
    assert!(repeat.triggers.is_empty());
    assert!(repeat.is_upgrade_ready);
}

#[test]
fn notes_only_edits_never_trigger() {
    let detector = trigger_detector();
    let previous = lead("notes");
    let mut updated = previous.clone();
    updated.notes = "left a voicemail".to_string();

    let result = detector.detect(&updated, &previous, detected_at());
    assert!(result.triggers.is_empty());
    assert_eq!(result.is_upgrade_ready, previous.is_upgrade_ready);
}
