use serde::{Deserialize, Serialize};

use crate::config::{CalculatorConfig, RateProfile};
use crate::engine::affordability::AffordabilityCalculator;
use crate::engine::domain::LeadSnapshot;

/// One factual talking point with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JustificationPoint {
    pub title: String,
    pub factual_statement: String,
    pub data_source: String,
}

/// Zero to three data-backed reasons why an upgrade conversation is
/// timely. Absence of supporting data yields an empty summary, not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyNowJustification {
    pub points: Vec<JustificationPoint>,
}

impl WhyNowJustification {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Transparency layer over the calculators' outputs.
///
/// Pure selection and formatting: every point is backed by stored data or
/// a calculation the other modules already perform, and nothing is ever
/// fabricated to fill the list.
#[derive(Debug, Clone)]
pub struct WhyNowGenerator {
    calculator: AffordabilityCalculator,
}

impl WhyNowGenerator {
    pub fn new(calculator_config: CalculatorConfig) -> Self {
        Self {
            calculator: AffordabilityCalculator::new(calculator_config),
        }
    }

    pub fn generate(&self, lead: &LeadSnapshot) -> WhyNowJustification {
        let mut points = Vec::new();

        if let Some(point) = self.income_growth_point(lead) {
            points.push(point);
        }
        if let Some(point) = self.equity_point(lead) {
            points.push(point);
        }
        if let Some(point) = self.affordability_point(lead) {
            points.push(point);
        }

        WhyNowJustification { points }
    }

    fn income_growth_point(&self, lead: &LeadSnapshot) -> Option<JustificationPoint> {
        if lead.income_history.len() < 2 {
            return None;
        }
        let oldest = lead.income_history.first()?;
        let newest = lead.income_history.last()?;
        if oldest.amount <= 0.0 || newest.amount <= oldest.amount {
            return None;
        }
        let growth = (newest.amount - oldest.amount) / oldest.amount;

        Some(JustificationPoint {
            title: "Income is growing".to_string(),
            factual_statement: format!(
                "Recorded income rose {:.0}% between {} and {}",
                growth * 100.0,
                oldest.recorded_on,
                newest.recorded_on
            ),
            data_source: format!("income_history: {} entries", lead.income_history.len()),
        })
    }

    fn equity_point(&self, lead: &LeadSnapshot) -> Option<JustificationPoint> {
        let property = lead.owned_property?;
        let equity = self.calculator.calculate_equity(
            property.estimated_value,
            property.outstanding_loan_balance,
            true,
        );
        if equity.usable_equity <= 0.0 {
            return None;
        }

        Some(JustificationPoint {
            title: "Usable equity is available".to_string(),
            factual_statement: format!(
                "Roughly {:.0} of equity is usable after selling costs and a {:.0}% buffer, enough downpayment for a property around {:.0}",
                equity.usable_equity,
                self.calculator.config().equity_buffer_percent * 100.0,
                equity.affordable_upgrade_property
            ),
            data_source: format!(
                "property_snapshot: value {:.0}, loan balance {:.0}",
                property.estimated_value, property.outstanding_loan_balance
            ),
        })
    }

    fn affordability_point(&self, lead: &LeadSnapshot) -> Option<JustificationPoint> {
        let property = lead.owned_property?;
        let affordability = self.calculator.calculate_affordability(
            lead.average_income(),
            lead.monthly_commitments(),
            lead.age,
            lead.first_time_buyer,
            RateProfile::Conservative,
        );
        let required =
            property.estimated_value * self.calculator.config().min_upgrade_uplift_ratio;
        if affordability.conservative_property_price < required {
            return None;
        }

        Some(JustificationPoint {
            title: "Borrowing capacity supports a larger home".to_string(),
            factual_statement: format!(
                "A conservative budget reaches {:.0}, clearing the {:.0} a meaningful upgrade needs",
                affordability.conservative_property_price, required
            ),
            data_source: "affordability_model: conservative rate profile".to_string(),
        })
    }
}
