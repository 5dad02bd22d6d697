mod rules;

use serde::{Deserialize, Serialize};

use crate::config::QualificationConfig;
use crate::engine::domain::{LeadSnapshot, PricingRule};
use crate::EngineError;

/// Classification of a scored lead against the status thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualificationStatus {
    Qualified,
    Stretch,
    NotQualified,
}

/// Bank-approval outlook, derived from the financing sub-factors but
/// deliberately decoupled from the financing score so property matching
/// and loan prospects can diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancingReadiness {
    Strong,
    Moderate,
    Weak,
}

/// Weighted factors that make up the qualification score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualificationFactor {
    Income,
    Location,
    Financing,
    Urgency,
}

/// Discrete contribution to the qualification score, carrying its maximum
/// so presentation layers can render progress without re-deriving weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationComponent {
    pub factor: QualificationFactor,
    pub score: u8,
    pub max: u8,
    pub rationale: String,
}

/// How well a suggested area's price band fits the lead's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaFit {
    Perfect,
    Stretch,
    Alternative,
}

/// An area in the preferred city ranked by budget fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSuggestion {
    pub area: String,
    pub fit: AreaFit,
    pub band_floor: f64,
    pub band_ceiling: f64,
}

/// Full qualification verdict for a captured lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub score: u8,
    pub status: QualificationStatus,
    pub financing_readiness: FinancingReadiness,
    pub suggested_areas: Vec<AreaSuggestion>,
    pub breakdown: Vec<QualificationComponent>,
}

/// Stateless scorer applying the qualification rubric to a lead snapshot.
#[derive(Debug, Clone)]
pub struct QualificationEngine {
    config: QualificationConfig,
}

impl QualificationEngine {
    pub fn new(config: QualificationConfig) -> Self {
        Self { config }
    }

    /// Scores a lead against the active pricing rules.
    ///
    /// All inputs are best-effort scored; the only failure is the
    /// configuration precondition of having no active pricing rule at all.
    pub fn qualify(
        &self,
        lead: &LeadSnapshot,
        pricing_rules: &[PricingRule],
    ) -> Result<QualificationResult, EngineError> {
        let active: Vec<&PricingRule> =
            pricing_rules.iter().filter(|rule| rule.active).collect();
        if active.is_empty() {
            tracing::warn!(lead = %lead.id.0, "qualification requested without active pricing rules");
            return Err(EngineError::NoActivePricingRules);
        }

        let city_rules: Vec<&PricingRule> = active
            .iter()
            .copied()
            .filter(|rule| rule.city.eq_ignore_ascii_case(&lead.city))
            .collect();

        let breakdown = vec![
            rules::income_component(lead, &city_rules, &self.config),
            rules::location_component(lead, &city_rules),
            rules::financing_component(lead, &self.config),
            rules::urgency_component(lead, &self.config),
        ];
        let total: u32 = breakdown.iter().map(|component| u32::from(component.score)).sum();
        let score = total.min(100) as u8;

        let status = if score >= self.config.qualified_floor {
            QualificationStatus::Qualified
        } else if score >= self.config.stretch_floor {
            QualificationStatus::Stretch
        } else {
            QualificationStatus::NotQualified
        };

        Ok(QualificationResult {
            score,
            status,
            financing_readiness: rules::financing_readiness(lead, &self.config),
            suggested_areas: rules::suggest_areas(lead, &city_rules, &self.config),
            breakdown,
        })
    }
}
