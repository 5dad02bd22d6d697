//! The decision engine: six cooperating, side-effect-free modules.
//!
//! Each module is a fresh transform of its arguments plus read-only
//! configuration, safe to invoke concurrently. Snapshot ordering for
//! trigger detection is the caller's responsibility.

pub mod domain;

mod affordability;
mod qualification;
mod readiness;
mod risk;
mod triggers;
mod why_now;

#[cfg(test)]
mod tests;

pub use affordability::{
    AffordabilityCalculator, AffordabilityResult, EquityResult, UpgradeAnalysis, UpgradeScenario,
};
pub use qualification::{
    AreaFit, AreaSuggestion, FinancingReadiness, QualificationComponent, QualificationEngine,
    QualificationFactor, QualificationResult, QualificationStatus,
};
pub use readiness::{
    ReadinessComponent, ReadinessFactor, ReadinessState, UpgradeReadinessResult,
    UpgradeReadinessScorer,
};
pub use risk::{has_high_risk, DealRiskAnalyzer, DealRiskFlag, RiskKind, RiskSeverity};
pub use triggers::{
    TriggerDetectionResult, TriggerKind, UpgradeAlert, UpgradeTrigger, UpgradeTriggerDetector,
};
pub use why_now::{JustificationPoint, WhyNowGenerator, WhyNowJustification};
