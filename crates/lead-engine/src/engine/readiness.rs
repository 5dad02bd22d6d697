use serde::{Deserialize, Serialize};

use crate::config::{score_at_least, score_at_most, CalculatorConfig, ReadinessConfig};
use crate::engine::affordability::AffordabilityCalculator;
use crate::engine::domain::{EmploymentKind, LeadSnapshot};

const INCOME_GROWTH_MAX: u8 = 30;
const EQUITY_MAX: u8 = 25;
const DEBT_MAX: u8 = 20;
const EMPLOYMENT_MAX: u8 = 15;
const CREDIT_MAX: u8 = 10;

/// Where a client sits on the upgrade journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessState {
    NotReady,
    Monitoring,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessFactor {
    IncomeGrowth,
    Equity,
    DebtLevel,
    Employment,
    CreditHistory,
}

/// Discrete contribution to the readiness score with its reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessComponent {
    pub factor: ReadinessFactor,
    pub score: u8,
    pub max: u8,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeReadinessResult {
    pub score: u8,
    pub state: ReadinessState,
    pub breakdown: Vec<ReadinessComponent>,
}

/// Stateless scorer estimating whether a client is financially positioned
/// to move to a larger property.
///
/// Pure given a snapshot: it never consults prior state, so callers must
/// compare previous and new states themselves to detect the crossing into
/// `Ready`.
#[derive(Debug, Clone)]
pub struct UpgradeReadinessScorer {
    config: ReadinessConfig,
    calculator: AffordabilityCalculator,
}

impl UpgradeReadinessScorer {
    pub fn new(config: ReadinessConfig, calculator_config: CalculatorConfig) -> Self {
        Self {
            config,
            calculator: AffordabilityCalculator::new(calculator_config),
        }
    }

    pub fn calculate(&self, lead: &LeadSnapshot) -> UpgradeReadinessResult {
        let breakdown = vec![
            self.income_growth_component(lead),
            self.equity_component(lead),
            self.debt_component(lead),
            self.employment_component(lead),
            self.credit_component(lead),
        ];
        let total: u32 = breakdown.iter().map(|component| u32::from(component.score)).sum();
        let score = total.min(100) as u8;

        let state = if score >= self.config.ready_floor {
            ReadinessState::Ready
        } else if score >= self.config.monitoring_floor {
            ReadinessState::Monitoring
        } else {
            ReadinessState::NotReady
        };

        UpgradeReadinessResult { score, state, breakdown }
    }

    fn income_growth_component(&self, lead: &LeadSnapshot) -> ReadinessComponent {
        let (score, reason) = match (lead.income_history.first(), lead.income_history.last()) {
            (Some(oldest), Some(newest))
                if lead.income_history.len() >= 2 && oldest.amount > 0.0 =>
            {
                let growth = (newest.amount - oldest.amount) / oldest.amount;
                let score = score_at_least(&self.config.income_growth_bands, growth);
                (
                    score,
                    format!(
                        "income moved {:.0}% since {}",
                        growth * 100.0,
                        oldest.recorded_on
                    ),
                )
            }
            _ => (0, "insufficient income history".to_string()),
        };

        ReadinessComponent {
            factor: ReadinessFactor::IncomeGrowth,
            score: score.min(INCOME_GROWTH_MAX),
            max: INCOME_GROWTH_MAX,
            reason,
        }
    }

    fn equity_component(&self, lead: &LeadSnapshot) -> ReadinessComponent {
        let (score, reason) = match lead.owned_property {
            Some(property) if property.estimated_value > 0.0 => {
                let equity = self.calculator.calculate_equity(
                    property.estimated_value,
                    property.outstanding_loan_balance,
                    false,
                );
                let percent = equity.gross_equity / property.estimated_value;
                let score = score_at_least(&self.config.equity_percent_bands, percent);
                (
                    score,
                    format!(
                        "{:.0}% equity ({:.0} gross) in the current property",
                        percent * 100.0,
                        equity.gross_equity
                    ),
                )
            }
            _ => (0, "no owned property on file".to_string()),
        };

        ReadinessComponent {
            factor: ReadinessFactor::Equity,
            score: score.min(EQUITY_MAX),
            max: EQUITY_MAX,
            reason,
        }
    }

    fn debt_component(&self, lead: &LeadSnapshot) -> ReadinessComponent {
        let percent = lead.existing_commitment_percent;
        let score = score_at_most(&self.config.debt_percent_bands, percent);

        ReadinessComponent {
            factor: ReadinessFactor::DebtLevel,
            score: score.min(DEBT_MAX),
            max: DEBT_MAX,
            reason: format!("existing commitments at {:.0}% of income", percent * 100.0),
        }
    }

    fn employment_component(&self, lead: &LeadSnapshot) -> ReadinessComponent {
        let employment = &self.config.employment;
        let base = match lead.employment.kind {
            EmploymentKind::Salaried => employment.salaried_points,
            EmploymentKind::SelfEmployed => employment.self_employed_points,
            EmploymentKind::Gig => employment.gig_points,
            EmploymentKind::Unemployed => employment.unemployed_points,
        };
        let tenure_bonus = score_at_least(
            &employment.tenure_bands,
            f64::from(lead.employment.tenure_months),
        );

        ReadinessComponent {
            factor: ReadinessFactor::Employment,
            score: (base + tenure_bonus).min(EMPLOYMENT_MAX),
            max: EMPLOYMENT_MAX,
            reason: format!(
                "{:?} for {} month(s)",
                lead.employment.kind, lead.employment.tenure_months
            ),
        }
    }

    // A rejection takes a fixed lower value; there is no time decay.
    fn credit_component(&self, lead: &LeadSnapshot) -> ReadinessComponent {
        let (score, reason) = if lead.previous_loan_rejection {
            (
                self.config.prior_rejection_points,
                "prior loan rejection on record".to_string(),
            )
        } else {
            (
                self.config.no_rejection_points,
                "no prior loan rejection".to_string(),
            )
        };

        ReadinessComponent {
            factor: ReadinessFactor::CreditHistory,
            score: score.min(CREDIT_MAX),
            max: CREDIT_MAX,
            reason,
        }
    }
}
