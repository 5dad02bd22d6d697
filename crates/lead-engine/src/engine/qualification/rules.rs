use super::{
    AreaFit, AreaSuggestion, FinancingReadiness, QualificationComponent, QualificationFactor,
};
use crate::config::{score_at_least, score_at_most, QualificationConfig};
use crate::engine::domain::{EmploymentKind, LeadSnapshot, MoneyRange, PricingRule};

pub(super) const INCOME_MAX: u8 = 40;
pub(super) const LOCATION_MAX: u8 = 30;
pub(super) const FINANCING_MAX: u8 = 20;
pub(super) const URGENCY_MAX: u8 = 10;

pub(super) fn income_component(
    lead: &LeadSnapshot,
    city_rules: &[&PricingRule],
    config: &QualificationConfig,
) -> QualificationComponent {
    // Judge against the most accessible band so a lead is not penalized
    // for a city that also carries luxury tiers.
    let entry_rule = city_rules.iter().min_by(|a, b| {
        a.qualifying_income
            .total_cmp(&b.qualifying_income)
    });

    let (score, rationale) = match entry_rule {
        Some(rule) if rule.qualifying_income > 0.0 => {
            let ratio = lead.average_income() / rule.qualifying_income;
            let score = score_at_least(&config.income_ratio_bands, ratio);
            (
                score,
                format!(
                    "average income {:.0} is {:.2}x the {} entry requirement of {:.0}",
                    lead.average_income(),
                    ratio,
                    rule.area,
                    rule.qualifying_income
                ),
            )
        }
        Some(rule) => (
            0,
            format!("pricing band for {} carries no qualifying income", rule.area),
        ),
        None => (
            0,
            format!("no active pricing band covers {}", lead.city),
        ),
    };

    QualificationComponent {
        factor: QualificationFactor::Income,
        score: score.min(INCOME_MAX),
        max: INCOME_MAX,
        rationale,
    }
}

pub(super) fn location_component(
    lead: &LeadSnapshot,
    city_rules: &[&PricingRule],
) -> QualificationComponent {
    let best = city_rules
        .iter()
        .map(|rule| (overlap_fraction(&lead.budget, rule), *rule))
        .max_by(|a, b| a.0.total_cmp(&b.0));

    let (score, rationale) = match best {
        Some((fraction, rule)) if fraction > 0.0 => {
            let score = (fraction * f64::from(LOCATION_MAX)).round() as u8;
            (
                score,
                format!(
                    "budget overlaps {:.0}% of the {} price band",
                    fraction * 100.0,
                    rule.area
                ),
            )
        }
        Some(_) => (
            0,
            format!("budget does not reach any price band in {}", lead.city),
        ),
        None => (
            0,
            format!("no active pricing band covers {}", lead.city),
        ),
    };

    QualificationComponent {
        factor: QualificationFactor::Location,
        score: score.min(LOCATION_MAX),
        max: LOCATION_MAX,
        rationale,
    }
}

pub(super) fn financing_component(
    lead: &LeadSnapshot,
    config: &QualificationConfig,
) -> QualificationComponent {
    let employment = &config.financing_employment;
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
    let commitment_points = score_at_most(
        &config.financing_commitment_bands,
        lead.existing_commitment_percent,
    );

    let subtotal = base + tenure_bonus + commitment_points;
    let score = if lead.previous_loan_rejection {
        subtotal.saturating_sub(config.financing_rejection_penalty)
    } else {
        subtotal
    };

    let mut rationale = format!(
        "{:?} for {} month(s), commitments at {:.0}% of income",
        lead.employment.kind,
        lead.employment.tenure_months,
        lead.existing_commitment_percent * 100.0
    );
    if lead.previous_loan_rejection {
        rationale.push_str("; prior loan rejection penalized");
    }

    QualificationComponent {
        factor: QualificationFactor::Financing,
        score: score.min(FINANCING_MAX),
        max: FINANCING_MAX,
        rationale,
    }
}

pub(super) fn urgency_component(
    lead: &LeadSnapshot,
    config: &QualificationConfig,
) -> QualificationComponent {
    use crate::engine::domain::MoveTimeline;

    let urgency = config.urgency;
    let (score, label) = match lead.timeline {
        MoveTimeline::Immediate => (urgency.immediate, "ready to move immediately"),
        MoveTimeline::WithinThreeMonths => (urgency.within_three_months, "moving within 3 months"),
        MoveTimeline::WithinSixMonths => (urgency.within_six_months, "moving within 6 months"),
        MoveTimeline::WithinTwelveMonths => {
            (urgency.within_twelve_months, "moving within 12 months")
        }
        MoveTimeline::Exploring => (urgency.exploring, "still exploring"),
    };

    QualificationComponent {
        factor: QualificationFactor::Urgency,
        score: score.min(URGENCY_MAX),
        max: URGENCY_MAX,
        rationale: label.to_string(),
    }
}

/// Bank-approval outlook from the financing sub-factors alone.
///
/// Intentionally not a copy of the financing score: a lead can match
/// inventory well while still being a weak loan candidate, and vice versa.
pub(super) fn financing_readiness(
    lead: &LeadSnapshot,
    config: &QualificationConfig,
) -> FinancingReadiness {
    let commitment_points = score_at_most(
        &config.financing_commitment_bands,
        lead.existing_commitment_percent,
    );
    let top_commitment = config
        .financing_commitment_bands
        .first()
        .map_or(0, |band| band.points);

    let over_committed = commitment_points == 0;
    if lead.employment.kind == EmploymentKind::Unemployed
        || over_committed
        || (lead.previous_loan_rejection && commitment_points < top_commitment)
    {
        return FinancingReadiness::Weak;
    }

    let stable_employment = match lead.employment.kind {
        EmploymentKind::Salaried => lead.employment.tenure_months >= 12,
        EmploymentKind::SelfEmployed | EmploymentKind::Gig => lead.employment.tenure_months >= 24,
        EmploymentKind::Unemployed => false,
    };
    if !lead.previous_loan_rejection && commitment_points == top_commitment && stable_employment {
        return FinancingReadiness::Strong;
    }

    FinancingReadiness::Moderate
}

pub(super) fn suggest_areas(
    lead: &LeadSnapshot,
    city_rules: &[&PricingRule],
    config: &QualificationConfig,
) -> Vec<AreaSuggestion> {
    let mut ranked: Vec<(f64, bool, AreaSuggestion)> = city_rules
        .iter()
        .map(|rule| {
            let fraction = overlap_fraction(&lead.budget, rule);
            let within_stretch = rule.min_price
                <= lead.budget.upper * (1.0 + config.stretch_band_tolerance);
            let fit = if fraction >= 0.6 {
                AreaFit::Perfect
            } else if fraction > 0.0 || within_stretch {
                AreaFit::Stretch
            } else {
                AreaFit::Alternative
            };
            let preferred = lead
                .preferred_areas
                .iter()
                .any(|area| area.eq_ignore_ascii_case(&rule.area));
            (
                fraction,
                preferred,
                AreaSuggestion {
                    area: rule.area.clone(),
                    fit,
                    band_floor: rule.min_price,
                    band_ceiling: rule.max_price,
                },
            )
        })
        .collect();

    // Best fit first; a lead's stated preference breaks ties.
    ranked.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.2.band_floor.total_cmp(&b.2.band_floor))
    });
    ranked.into_iter().map(|(_, _, suggestion)| suggestion).collect()
}

/// Fraction of the lead's budget range covered by the rule's price band.
fn overlap_fraction(budget: &MoneyRange, rule: &PricingRule) -> f64 {
    let span = budget.span();
    if span <= 0.0 {
        let point = budget.lower;
        return if point >= rule.min_price && point <= rule.max_price {
            1.0
        } else {
            0.0
        };
    }
    let overlap = budget.upper.min(rule.max_price) - budget.lower.max(rule.min_price);
    (overlap / span).clamp(0.0, 1.0)
}
