use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for CRM lead records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Inclusive monetary range (monthly income, purchase budget).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoneyRange {
    pub lower: f64,
    pub upper: f64,
}

impl MoneyRange {
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn span(&self) -> f64 {
        (self.upper - self.lower).max(0.0)
    }
}

/// One append-only income observation; histories are kept oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub amount: f64,
    pub recorded_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentKind {
    Salaried,
    SelfEmployed,
    Gig,
    Unemployed,
}

/// Employment situation as declared during intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    pub kind: EmploymentKind,
    pub tenure_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Rent,
    Buy,
}

/// Declared move-in horizon, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveTimeline {
    Immediate,
    WithinThreeMonths,
    WithinSixMonths,
    WithinTwelveMonths,
    Exploring,
}

/// Property the client already owns, used for equity math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwnedProperty {
    pub estimated_value: f64,
    pub outstanding_loan_balance: f64,
}

/// Whether the household has discussed and agreed on an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyAlignment {
    Aligned,
    Undiscussed,
    Objection,
}

/// A recorded life event (new child, promotion, marriage); append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeMilestone {
    pub label: String,
    pub recorded_on: NaiveDate,
}

/// Point-in-time snapshot of a lead's financial and preference data.
///
/// A new snapshot supersedes the previous one on the same lead record;
/// the engine never mutates a snapshot. `income_history` and `milestones`
/// are append-only logs owned by the caller. `notes` is free text and is
/// never consulted by any scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSnapshot {
    pub id: LeadId,
    pub income_range: MoneyRange,
    pub income_history: Vec<IncomeRecord>,
    /// Existing monthly commitments as a fraction of gross income (0..1).
    pub existing_commitment_percent: f64,
    pub employment: Employment,
    pub previous_loan_rejection: bool,
    pub age: u8,
    pub first_time_buyer: bool,
    pub city: String,
    pub preferred_areas: Vec<String>,
    pub intent: Intent,
    pub budget: MoneyRange,
    pub timeline: MoveTimeline,
    pub owned_property: Option<OwnedProperty>,
    pub lease_end: Option<NaiveDate>,
    pub matched_property: bool,
    pub family_alignment: FamilyAlignment,
    pub stage_entered_on: NaiveDate,
    pub milestones: Vec<LifeMilestone>,
    pub is_upgrade_ready: bool,
    pub notes: String,
}

impl LeadSnapshot {
    /// Average declared monthly income.
    pub fn average_income(&self) -> f64 {
        self.income_range.midpoint()
    }

    /// Monthly commitment amount implied by the declared fraction.
    pub fn monthly_commitments(&self) -> f64 {
        self.average_income() * self.existing_commitment_percent
    }
}

/// Externally configured price band for an area within a city.
///
/// Read-only at scoring time. Qualification fails with a configuration
/// precondition when no active rule exists; it never silently defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    pub city: String,
    pub area: String,
    pub min_price: f64,
    pub max_price: f64,
    /// Monthly income that comfortably services the band's entry price.
    pub qualifying_income: f64,
    pub active: bool,
}
