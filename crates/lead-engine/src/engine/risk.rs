use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::RiskConfig;
use crate::engine::domain::{FamilyAlignment, LeadSnapshot};

/// Severity of an execution risk; declaration order doubles as sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskKind {
    FamilyObjection,
    PriorLoanRejection,
    HighDebtRatio,
    LeaseExpiryUnmatched,
    StaleStage,
}

/// A transient risk flag; recomputed fresh on every call, never persisted
/// as a running list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealRiskFlag {
    pub kind: RiskKind,
    pub severity: RiskSeverity,
    pub reason: String,
    pub details: String,
}

type RiskRule = fn(&LeadSnapshot, &RiskConfig, NaiveDate) -> Option<DealRiskFlag>;

// Fixed rule table; declaration order is the tiebreak within a severity.
const RULES: &[RiskRule] = &[
    family_objection,
    prior_rejection,
    high_debt_ratio,
    lease_expiry_unmatched,
    stale_stage,
];

/// Stateless evaluator of the deal-risk rule table.
///
/// Idempotent: the same snapshot and date always yield identical flags.
#[derive(Debug, Clone)]
pub struct DealRiskAnalyzer {
    config: RiskConfig,
}

impl DealRiskAnalyzer {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Flags sorted by descending severity, then rule declaration order.
    pub fn analyze(&self, lead: &LeadSnapshot, today: NaiveDate) -> Vec<DealRiskFlag> {
        let mut flags: Vec<DealRiskFlag> = RULES
            .iter()
            .filter_map(|rule| rule(lead, &self.config, today))
            .collect();
        flags.sort_by_key(|flag| flag.severity);
        flags
    }
}

pub fn has_high_risk(flags: &[DealRiskFlag]) -> bool {
    flags.iter().any(|flag| flag.severity == RiskSeverity::High)
}

fn family_objection(
    lead: &LeadSnapshot,
    _config: &RiskConfig,
    _today: NaiveDate,
) -> Option<DealRiskFlag> {
    (lead.family_alignment == FamilyAlignment::Objection).then(|| DealRiskFlag {
        kind: RiskKind::FamilyObjection,
        severity: RiskSeverity::High,
        reason: "family objects to the move".to_string(),
        details: "deal is unlikely to close until the household is aligned".to_string(),
    })
}

fn prior_rejection(
    lead: &LeadSnapshot,
    _config: &RiskConfig,
    _today: NaiveDate,
) -> Option<DealRiskFlag> {
    lead.previous_loan_rejection.then(|| DealRiskFlag {
        kind: RiskKind::PriorLoanRejection,
        severity: RiskSeverity::Medium,
        reason: "prior loan rejection on record".to_string(),
        details: "financing may stall; pre-qualify with an alternate bank early".to_string(),
    })
}

fn high_debt_ratio(
    lead: &LeadSnapshot,
    config: &RiskConfig,
    _today: NaiveDate,
) -> Option<DealRiskFlag> {
    (lead.existing_commitment_percent > config.high_commitment_threshold).then(|| DealRiskFlag {
        kind: RiskKind::HighDebtRatio,
        severity: RiskSeverity::High,
        reason: format!(
            "commitments at {:.0}% of income exceed the {:.0}% threshold",
            lead.existing_commitment_percent * 100.0,
            config.high_commitment_threshold * 100.0
        ),
        details: "debt service leaves little room for a new installment".to_string(),
    })
}

fn lease_expiry_unmatched(
    lead: &LeadSnapshot,
    config: &RiskConfig,
    today: NaiveDate,
) -> Option<DealRiskFlag> {
    let lease_end = lead.lease_end?;
    let days_left = (lease_end - today).num_days();
    (!lead.matched_property && days_left >= 0 && days_left <= config.lease_warning_days).then(
        || DealRiskFlag {
            kind: RiskKind::LeaseExpiryUnmatched,
            severity: RiskSeverity::Low,
            reason: format!("lease ends in {days_left} day(s) with no matched property"),
            details: "client may renew elsewhere if no option is on the table".to_string(),
        },
    )
}

fn stale_stage(
    lead: &LeadSnapshot,
    config: &RiskConfig,
    today: NaiveDate,
) -> Option<DealRiskFlag> {
    let days_in_stage = (today - lead.stage_entered_on).num_days();
    (days_in_stage > config.stale_stage_days).then(|| DealRiskFlag {
        kind: RiskKind::StaleStage,
        severity: RiskSeverity::Medium,
        reason: format!("no stage movement for {days_in_stage} day(s)"),
        details: "momentum is fading; schedule a check-in".to_string(),
    })
}
