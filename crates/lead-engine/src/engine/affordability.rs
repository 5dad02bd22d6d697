use serde::{Deserialize, Serialize};

use crate::config::{CalculatorConfig, FeeTier, RateProfile};

/// Conservative borrowing-capacity estimate for a buyer.
///
/// All fields are derived together; an implausible input (no disposable
/// income, no remaining tenure) produces the all-zero result rather than
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub conservative_property_price: f64,
    pub max_loan_amount: f64,
    pub monthly_installment: f64,
    pub tenure_months: u32,
    pub downpayment: f64,
    pub stamp_duty: f64,
    pub legal_fees: f64,
    pub total_upfront_cost: f64,
}

impl AffordabilityResult {
    pub(crate) fn zero() -> Self {
        Self {
            conservative_property_price: 0.0,
            max_loan_amount: 0.0,
            monthly_installment: 0.0,
            tenure_months: 0,
            downpayment: 0.0,
            stamp_duty: 0.0,
            legal_fees: 0.0,
            total_upfront_cost: 0.0,
        }
    }
}

/// Equity extractable from an owned property after guardrails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    pub gross_equity: f64,
    pub selling_costs: f64,
    pub safety_buffer: f64,
    pub usable_equity: f64,
    /// Property price the usable equity can support as a downpayment.
    pub affordable_upgrade_property: f64,
}

/// Inputs for a sell-and-buy feasibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeScenario {
    pub income: f64,
    pub existing_commitments: f64,
    pub current_monthly_housing_cost: f64,
    pub current_property_value: f64,
    pub outstanding_loan_balance: f64,
    pub age: u8,
    pub rate_profile: RateProfile,
}

/// Feasibility verdict with the figures that justify it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeAnalysis {
    pub feasible: bool,
    pub projected_installment: f64,
    pub monthly_payment_change: f64,
    pub reasons: Vec<String>,
    pub affordability: AffordabilityResult,
    pub equity: EquityResult,
}

/// Pure financial math over the configured lending guidelines.
#[derive(Debug, Clone)]
pub struct AffordabilityCalculator {
    config: CalculatorConfig,
}

impl AffordabilityCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Maximum property price a buyer can conservatively afford, with the
    /// upfront costs of reaching it.
    pub fn calculate_affordability(
        &self,
        income: f64,
        existing_commitments: f64,
        age: u8,
        first_time_buyer: bool,
        profile: RateProfile,
    ) -> AffordabilityResult {
        let disposable = income - existing_commitments;
        if disposable <= 0.0 {
            return AffordabilityResult::zero();
        }

        let tenure_years = i64::from(self.config.max_tenure_years)
            .min(i64::from(self.config.retirement_age) - i64::from(age));
        if tenure_years <= 0 {
            return AffordabilityResult::zero();
        }
        let tenure_months = (tenure_years * 12) as u32;

        let monthly_installment = disposable * self.config.max_dsr_ratio;
        let annual_rate = self.config.interest_rates.annual_rate(profile);
        let max_loan_amount = loan_principal(monthly_installment, annual_rate, tenure_months);

        let downpayment_ratio = if first_time_buyer {
            self.config.first_time_downpayment_ratio
        } else {
            self.config.repeat_downpayment_ratio
        };
        let conservative_property_price = max_loan_amount / (1.0 - downpayment_ratio);
        let downpayment = conservative_property_price * downpayment_ratio;
        let stamp_duty = tiered_fee(&self.config.stamp_duty_tiers, conservative_property_price);
        let legal_fees = tiered_fee(&self.config.legal_fee_tiers, conservative_property_price);

        AffordabilityResult {
            conservative_property_price,
            max_loan_amount,
            monthly_installment,
            tenure_months,
            downpayment,
            stamp_duty,
            legal_fees,
            total_upfront_cost: downpayment + stamp_duty + legal_fees,
        }
    }

    /// Usable equity in an owned property after selling costs and the
    /// configured safety buffer.
    pub fn calculate_equity(
        &self,
        property_value: f64,
        outstanding_loan_balance: f64,
        include_selling_costs: bool,
    ) -> EquityResult {
        let gross_equity = (property_value - outstanding_loan_balance).max(0.0);
        let selling_costs = if include_selling_costs {
            property_value.max(0.0) * self.config.selling_cost_rate
        } else {
            0.0
        };
        let safety_buffer = gross_equity * self.config.equity_buffer_percent;
        let usable_equity = (gross_equity - selling_costs - safety_buffer).max(0.0);
        let affordable_upgrade_property =
            usable_equity / self.config.first_time_downpayment_ratio;

        EquityResult {
            gross_equity,
            selling_costs,
            safety_buffer,
            usable_equity,
            affordable_upgrade_property,
        }
    }

    /// Composes affordability and equity into a sell-and-buy verdict.
    ///
    /// Feasible only when the conservative affordable price clears the
    /// configured uplift over the current property AND the monthly cost
    /// increase stays within tolerance.
    pub fn analyze_upgrade(&self, scenario: &UpgradeScenario) -> UpgradeAnalysis {
        let affordability = self.calculate_affordability(
            scenario.income,
            scenario.existing_commitments,
            scenario.age,
            false,
            scenario.rate_profile,
        );
        let equity = self.calculate_equity(
            scenario.current_property_value,
            scenario.outstanding_loan_balance,
            true,
        );

        let required_price =
            scenario.current_property_value * self.config.min_upgrade_uplift_ratio;
        let price_clears_uplift =
            affordability.conservative_property_price >= required_price;

        // Price the minimum meaningful upgrade, using usable equity as the
        // downpayment, rather than the full borrowing capacity.
        let financed_amount = (required_price - equity.usable_equity).max(0.0);
        let annual_rate = self.config.interest_rates.annual_rate(scenario.rate_profile);
        let projected_installment =
            monthly_payment(financed_amount, annual_rate, affordability.tenure_months);
        let monthly_payment_change =
            projected_installment - scenario.current_monthly_housing_cost;
        let tolerated_increase = scenario.income * self.config.max_monthly_increase_ratio;
        let change_within_tolerance = monthly_payment_change <= tolerated_increase;

        let mut reasons = Vec::new();
        if price_clears_uplift {
            reasons.push(format!(
                "affordable price {:.0} clears the {:.0} needed for a meaningful upgrade",
                affordability.conservative_property_price, required_price
            ));
        } else {
            reasons.push(format!(
                "affordable price {:.0} falls short of the {:.0} needed for a meaningful upgrade",
                affordability.conservative_property_price, required_price
            ));
        }
        if change_within_tolerance {
            reasons.push(format!(
                "monthly housing cost changes by {:.0}, within the {:.0} tolerance",
                monthly_payment_change, tolerated_increase
            ));
        } else {
            reasons.push(format!(
                "monthly housing cost rises by {:.0}, beyond the {:.0} tolerance",
                monthly_payment_change, tolerated_increase
            ));
        }
        if equity.usable_equity > 0.0 {
            reasons.push(format!(
                "{:.0} usable equity available toward the next downpayment",
                equity.usable_equity
            ));
        }

        UpgradeAnalysis {
            feasible: price_clears_uplift && change_within_tolerance,
            projected_installment,
            monthly_payment_change,
            reasons,
            affordability,
            equity,
        }
    }
}

/// Loan principal a fixed installment can service, by inverting the
/// standard amortization formula. A non-positive rate degrades to simple
/// division so the result is always finite.
pub(crate) fn loan_principal(
    monthly_installment: f64,
    annual_rate: f64,
    tenure_months: u32,
) -> f64 {
    if tenure_months == 0 {
        return 0.0;
    }
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate <= 0.0 {
        return monthly_installment * f64::from(tenure_months);
    }
    let factor = (1.0 + monthly_rate).powi(tenure_months as i32);
    monthly_installment * (factor - 1.0) / (monthly_rate * factor)
}

/// Fixed monthly installment servicing a principal, by the standard
/// amortization formula; degrades to simple division at a zero rate.
pub(crate) fn monthly_payment(principal: f64, annual_rate: f64, tenure_months: u32) -> f64 {
    if tenure_months == 0 || principal <= 0.0 {
        return 0.0;
    }
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate <= 0.0 {
        return principal / f64::from(tenure_months);
    }
    let factor = (1.0 + monthly_rate).powi(tenure_months as i32);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// Progressive fee over an ordered tier schedule.
pub(crate) fn tiered_fee(tiers: &[FeeTier], price: f64) -> f64 {
    let mut fee = 0.0;
    let mut previous_ceiling = 0.0;
    for tier in tiers {
        let ceiling = tier.up_to.unwrap_or(f64::INFINITY);
        if price <= previous_ceiling {
            break;
        }
        let portion = price.min(ceiling) - previous_ceiling;
        fee += portion * tier.rate;
        previous_ceiling = ceiling;
    }
    fee
}
