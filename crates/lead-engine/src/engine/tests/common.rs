use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::config::{CalculatorConfig, ScoringConfig};
use crate::engine::domain::{
    Employment, EmploymentKind, FamilyAlignment, IncomeRecord, Intent, LeadId, LeadSnapshot,
    LifeMilestone, MoneyRange, MoveTimeline, OwnedProperty, PricingRule,
};
use crate::engine::{
    AffordabilityCalculator, DealRiskAnalyzer, QualificationEngine, UpgradeReadinessScorer,
    UpgradeTriggerDetector, WhyNowGenerator,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn detected_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 15, 9, 0, 0).single().expect("valid timestamp")
}

pub(super) fn today() -> NaiveDate {
    detected_at().date_naive()
}

pub(super) fn calculator() -> AffordabilityCalculator {
    AffordabilityCalculator::new(CalculatorConfig::default())
}

pub(super) fn qualification_engine() -> QualificationEngine {
    QualificationEngine::new(ScoringConfig::default().qualification)
}

pub(super) fn readiness_scorer() -> UpgradeReadinessScorer {
    UpgradeReadinessScorer::new(ScoringConfig::default().readiness, CalculatorConfig::default())
}

pub(super) fn trigger_detector() -> UpgradeTriggerDetector {
    UpgradeTriggerDetector::new(ScoringConfig::default(), CalculatorConfig::default())
}

pub(super) fn risk_analyzer() -> DealRiskAnalyzer {
    DealRiskAnalyzer::new(ScoringConfig::default().risk)
}

pub(super) fn why_now_generator() -> WhyNowGenerator {
    WhyNowGenerator::new(CalculatorConfig::default())
}

pub(super) fn pricing_rules() -> Vec<PricingRule> {
    vec![
        PricingRule {
            city: "Kuala Lumpur".to_string(),
            area: "Cheras".to_string(),
            min_price: 300_000.0,
            max_price: 500_000.0,
            qualifying_income: 6_000.0,
            active: true,
        },
        PricingRule {
            city: "Kuala Lumpur".to_string(),
            area: "Wangsa Maju".to_string(),
            min_price: 250_000.0,
            max_price: 420_000.0,
            qualifying_income: 5_000.0,
            active: true,
        },
        PricingRule {
            city: "Kuala Lumpur".to_string(),
            area: "Mont Kiara".to_string(),
            min_price: 800_000.0,
            max_price: 1_500_000.0,
            qualifying_income: 18_000.0,
            active: true,
        },
        PricingRule {
            city: "Kuala Lumpur".to_string(),
            area: "Bangsar".to_string(),
            min_price: 700_000.0,
            max_price: 1_200_000.0,
            qualifying_income: 15_000.0,
            active: false,
        },
        PricingRule {
            city: "Penang".to_string(),
            area: "Bayan Lepas".to_string(),
            min_price: 350_000.0,
            max_price: 550_000.0,
            qualifying_income: 6_500.0,
            active: true,
        },
    ]
}

/// Healthy salaried buyer in Kuala Lumpur with a growing income.
pub(super) fn lead(suffix: &str) -> LeadSnapshot {
    LeadSnapshot {
        id: LeadId(format!("lead-{suffix}")),
        income_range: MoneyRange { lower: 7_000.0, upper: 9_000.0 },
        income_history: vec![
            IncomeRecord { amount: 6_000.0, recorded_on: date(2024, 1, 15) },
            IncomeRecord { amount: 7_800.0, recorded_on: date(2025, 6, 1) },
        ],
        existing_commitment_percent: 0.25,
        employment: Employment { kind: EmploymentKind::Salaried, tenure_months: 30 },
        previous_loan_rejection: false,
        age: 35,
        first_time_buyer: true,
        city: "Kuala Lumpur".to_string(),
        preferred_areas: vec!["Cheras".to_string()],
        intent: Intent::Buy,
        budget: MoneyRange { lower: 350_000.0, upper: 480_000.0 },
        timeline: MoveTimeline::WithinThreeMonths,
        owned_property: None,
        lease_end: None,
        matched_property: false,
        family_alignment: FamilyAlignment::Aligned,
        stage_entered_on: date(2025, 8, 20),
        milestones: Vec::new(),
        is_upgrade_ready: false,
        notes: String::new(),
    }
}

/// Owner-occupier with strong equity; scores into the ready state.
pub(super) fn ready_lead(suffix: &str) -> LeadSnapshot {
    let mut lead = lead(suffix);
    lead.first_time_buyer = false;
    lead.owned_property = Some(OwnedProperty {
        estimated_value: 500_000.0,
        outstanding_loan_balance: 250_000.0,
    });
    lead
}

pub(super) fn milestone(label: &str) -> LifeMilestone {
    LifeMilestone { label: label.to_string(), recorded_on: date(2025, 9, 10) }
}
