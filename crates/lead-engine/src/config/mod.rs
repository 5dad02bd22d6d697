//! Read-only configuration for the decision engine.
//!
//! Threshold and band tables are explicit, ordered structures rather than
//! inline conditionals so the rules stay auditable and independently
//! testable. The defaults mirror the product's conservative guidelines
//! (70% DSR cap, 20% equity buffer, Malaysian stamp-duty and legal-fee
//! schedules); deployments may override any of them by deserializing the
//! structs from configuration.

use serde::{Deserialize, Serialize};

/// Interest-rate profile selected by the caller for affordability math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateProfile {
    Conservative,
    Standard,
    Aggressive,
}

/// Annual interest rates per profile, as fractions (0.048 = 4.8% p.a.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRateTable {
    pub conservative: f64,
    pub standard: f64,
    pub aggressive: f64,
}

impl InterestRateTable {
    pub fn annual_rate(&self, profile: RateProfile) -> f64 {
        match profile {
            RateProfile::Conservative => self.conservative,
            RateProfile::Standard => self.standard,
            RateProfile::Aggressive => self.aggressive,
        }
    }
}

/// One tier of a progressive fee schedule. `up_to` is the cumulative price
/// ceiling for the tier; `None` marks the open-ended top tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTier {
    pub up_to: Option<f64>,
    pub rate: f64,
}

/// Financial constants used by the affordability and equity calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub interest_rates: InterestRateTable,
    /// Ceiling on installment as a fraction of disposable income.
    pub max_dsr_ratio: f64,
    pub retirement_age: u8,
    pub max_tenure_years: u8,
    pub first_time_downpayment_ratio: f64,
    pub repeat_downpayment_ratio: f64,
    /// Agency and incidental costs when disposing of a property.
    pub selling_cost_rate: f64,
    /// Fraction of gross equity withheld so usable equity stays conservative.
    pub equity_buffer_percent: f64,
    pub stamp_duty_tiers: Vec<FeeTier>,
    pub legal_fee_tiers: Vec<FeeTier>,
    /// Minimum ratio of affordable price to current value for an upgrade
    /// to be called feasible.
    pub min_upgrade_uplift_ratio: f64,
    /// Tolerated rise in monthly housing cost, as a fraction of gross income.
    pub max_monthly_increase_ratio: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            interest_rates: InterestRateTable {
                conservative: 0.048,
                standard: 0.043,
                aggressive: 0.039,
            },
            max_dsr_ratio: 0.70,
            retirement_age: 65,
            max_tenure_years: 35,
            first_time_downpayment_ratio: 0.10,
            repeat_downpayment_ratio: 0.20,
            selling_cost_rate: 0.03,
            equity_buffer_percent: 0.20,
            // Memorandum-of-transfer schedule: 1% to 100k, 2% to 500k,
            // 3% to 1M, 4% above.
            stamp_duty_tiers: vec![
                FeeTier { up_to: Some(100_000.0), rate: 0.01 },
                FeeTier { up_to: Some(500_000.0), rate: 0.02 },
                FeeTier { up_to: Some(1_000_000.0), rate: 0.03 },
                FeeTier { up_to: None, rate: 0.04 },
            ],
            legal_fee_tiers: vec![
                FeeTier { up_to: Some(500_000.0), rate: 0.01 },
                FeeTier { up_to: Some(1_000_000.0), rate: 0.008 },
                FeeTier { up_to: Some(3_000_000.0), rate: 0.007 },
                FeeTier { up_to: None, rate: 0.006 },
            ],
            min_upgrade_uplift_ratio: 1.20,
            max_monthly_increase_ratio: 0.15,
        }
    }
}

/// One row of an ordered score-band table.
///
/// Rows are declared best-first; lookup walks the table and the first row
/// whose threshold the value satisfies wins, otherwise the score is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub threshold: f64,
    pub points: u8,
}

/// First row whose threshold the value meets or exceeds.
pub fn score_at_least(bands: &[ScoreBand], value: f64) -> u8 {
    bands
        .iter()
        .find(|band| value >= band.threshold)
        .map_or(0, |band| band.points)
}

/// First row whose threshold the value stays at or below.
pub fn score_at_most(bands: &[ScoreBand], value: f64) -> u8 {
    bands
        .iter()
        .find(|band| value <= band.threshold)
        .map_or(0, |band| band.points)
}

/// Points per employment kind plus a tenure bonus table (months).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentScoring {
    pub salaried_points: u8,
    pub self_employed_points: u8,
    pub gig_points: u8,
    pub unemployed_points: u8,
    pub tenure_bands: Vec<ScoreBand>,
}

/// Weights and thresholds for lead qualification (maxima sum to 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationConfig {
    /// Bands over average income / rule qualifying income, scaled to 40.
    pub income_ratio_bands: Vec<ScoreBand>,
    /// Employment-kind and tenure contribution to the financing component.
    pub financing_employment: EmploymentScoring,
    /// Bands over existing commitment fraction (lower is better).
    pub financing_commitment_bands: Vec<ScoreBand>,
    pub financing_rejection_penalty: u8,
    pub urgency: UrgencyScoring,
    pub qualified_floor: u8,
    pub stretch_floor: u8,
    /// How far above the budget ceiling a price band may start and still
    /// be suggested as a stretch area (fraction of the ceiling).
    pub stretch_band_tolerance: f64,
}

/// Urgency points per move-in timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyScoring {
    pub immediate: u8,
    pub within_three_months: u8,
    pub within_six_months: u8,
    pub within_twelve_months: u8,
    pub exploring: u8,
}

/// Weights and thresholds for upgrade readiness (maxima sum to 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Bands over fractional income growth since the oldest history entry.
    pub income_growth_bands: Vec<ScoreBand>,
    /// Bands over gross equity as a fraction of property value.
    pub equity_percent_bands: Vec<ScoreBand>,
    /// Bands over existing commitment fraction (lower is better).
    pub debt_percent_bands: Vec<ScoreBand>,
    pub employment: EmploymentScoring,
    pub no_rejection_points: u8,
    pub prior_rejection_points: u8,
    pub ready_floor: u8,
    pub monitoring_floor: u8,
}

/// Thresholds for snapshot-diff trigger detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Minimum fractional rise between latest income records.
    pub income_jump_ratio: f64,
    /// Ascending equity-percentage bands; crossing upward into a band
    /// emits a trigger.
    pub equity_bands: Vec<f64>,
    /// Rolling window ahead of today within which a lease end fires.
    pub lease_window_days: i64,
}

/// Thresholds for the deal-risk rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Commitment fraction above which debt load is flagged high risk.
    pub high_commitment_threshold: f64,
    pub lease_warning_days: i64,
    pub stale_stage_days: i64,
}

/// Scoring weights, state thresholds, and rule tables for the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub qualification: QualificationConfig,
    pub readiness: ReadinessConfig,
    pub triggers: TriggerConfig,
    pub risk: RiskConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            qualification: QualificationConfig {
                income_ratio_bands: vec![
                    ScoreBand { threshold: 1.25, points: 40 },
                    ScoreBand { threshold: 1.00, points: 32 },
                    ScoreBand { threshold: 0.85, points: 24 },
                    ScoreBand { threshold: 0.70, points: 14 },
                    ScoreBand { threshold: 0.50, points: 6 },
                ],
                financing_employment: EmploymentScoring {
                    salaried_points: 8,
                    self_employed_points: 5,
                    gig_points: 3,
                    unemployed_points: 0,
                    tenure_bands: vec![
                        ScoreBand { threshold: 24.0, points: 6 },
                        ScoreBand { threshold: 12.0, points: 4 },
                        ScoreBand { threshold: 6.0, points: 2 },
                    ],
                },
                financing_commitment_bands: vec![
                    ScoreBand { threshold: 0.30, points: 6 },
                    ScoreBand { threshold: 0.45, points: 3 },
                ],
                financing_rejection_penalty: 4,
                urgency: UrgencyScoring {
                    immediate: 10,
                    within_three_months: 8,
                    within_six_months: 5,
                    within_twelve_months: 3,
                    exploring: 1,
                },
                qualified_floor: 70,
                stretch_floor: 45,
                stretch_band_tolerance: 0.15,
            },
            readiness: ReadinessConfig {
                income_growth_bands: vec![
                    ScoreBand { threshold: 0.25, points: 30 },
                    ScoreBand { threshold: 0.15, points: 20 },
                    ScoreBand { threshold: 0.05, points: 10 },
                ],
                equity_percent_bands: vec![
                    ScoreBand { threshold: 0.40, points: 25 },
                    ScoreBand { threshold: 0.30, points: 20 },
                    ScoreBand { threshold: 0.20, points: 12 },
                    ScoreBand { threshold: 0.10, points: 6 },
                ],
                debt_percent_bands: vec![
                    ScoreBand { threshold: 0.20, points: 20 },
                    ScoreBand { threshold: 0.35, points: 14 },
                    ScoreBand { threshold: 0.50, points: 8 },
                    ScoreBand { threshold: 0.65, points: 3 },
                ],
                employment: EmploymentScoring {
                    salaried_points: 9,
                    self_employed_points: 6,
                    gig_points: 3,
                    unemployed_points: 0,
                    tenure_bands: vec![
                        ScoreBand { threshold: 24.0, points: 6 },
                        ScoreBand { threshold: 12.0, points: 4 },
                        ScoreBand { threshold: 6.0, points: 2 },
                    ],
                },
                no_rejection_points: 10,
                prior_rejection_points: 3,
                ready_floor: 70,
                monitoring_floor: 40,
            },
            triggers: TriggerConfig {
                income_jump_ratio: 0.15,
                equity_bands: vec![0.20, 0.30, 0.40],
                lease_window_days: 90,
            },
            risk: RiskConfig {
                high_commitment_threshold: 0.55,
                lease_warning_days: 60,
                stale_stage_days: 45,
            },
        }
    }
}
