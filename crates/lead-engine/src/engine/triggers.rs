use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{CalculatorConfig, ScoringConfig, TriggerConfig};
use crate::engine::domain::{LeadId, LeadSnapshot, OwnedProperty};
use crate::engine::readiness::{ReadinessState, UpgradeReadinessScorer};

/// Categories of discrete upgrade events.
///
/// Hard kinds flip `is_upgrade_ready`; soft kinds only inform outreach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerKind {
    IncomeJump,
    EquityBandCrossed,
    LeaseExpiring,
    LifeMilestone,
    ReadinessAchieved,
}

impl TriggerKind {
    pub fn is_hard(self) -> bool {
        matches!(
            self,
            TriggerKind::IncomeJump | TriggerKind::EquityBandCrossed | TriggerKind::ReadinessAchieved
        )
    }
}

/// A timestamped event recorded when a snapshot comparison crosses a
/// threshold. Once persisted by the caller it is never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeTrigger {
    pub kind: TriggerKind,
    pub reason: String,
    pub triggered_at: DateTime<Utc>,
}

/// Notification payload for a hard trigger, ready for the caller's
/// alerting channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeAlert {
    pub lead_id: LeadId,
    pub kind: TriggerKind,
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerDetectionResult {
    pub triggers: Vec<UpgradeTrigger>,
    pub is_upgrade_ready: bool,
    pub alerts: Vec<UpgradeAlert>,
}

/// Diffs two lead snapshots and emits edge-triggered upgrade events.
///
/// The detector has no memory of what it previously emitted: callers must
/// invoke it once per persisted change and serialize snapshot reads and
/// writes per lead, or triggers will be lost or duplicated.
#[derive(Debug, Clone)]
pub struct UpgradeTriggerDetector {
    config: TriggerConfig,
    scorer: UpgradeReadinessScorer,
}

impl UpgradeTriggerDetector {
    pub fn new(scoring: ScoringConfig, calculator: CalculatorConfig) -> Self {
        Self {
            config: scoring.triggers.clone(),
            scorer: UpgradeReadinessScorer::new(scoring.readiness, calculator),
        }
    }

    /// Compares `updated` against `previous`; identical snapshots yield no
    /// triggers and leave `is_upgrade_ready` unchanged.
    pub fn detect(
        &self,
        updated: &LeadSnapshot,
        previous: &LeadSnapshot,
        detected_at: DateTime<Utc>,
    ) -> TriggerDetectionResult {
        let today = detected_at.date_naive();
        let mut triggers = Vec::new();

        if let Some(reason) = self.income_jump(updated, previous) {
            triggers.push(UpgradeTrigger {
                kind: TriggerKind::IncomeJump,
                reason,
                triggered_at: detected_at,
            });
        }

        if let Some(reason) = self.equity_band_crossed(updated, previous) {
            triggers.push(UpgradeTrigger {
                kind: TriggerKind::EquityBandCrossed,
                reason,
                triggered_at: detected_at,
            });
        }

        if !self.lease_in_window(previous.lease_end, today)
            && self.lease_in_window(updated.lease_end, today)
        {
            if let Some(lease_end) = updated.lease_end {
                triggers.push(UpgradeTrigger {
                    kind: TriggerKind::LeaseExpiring,
                    reason: format!(
                        "current lease ends {} within the {}-day window",
                        lease_end, self.config.lease_window_days
                    ),
                    triggered_at: detected_at,
                });
            }
        }

        for milestone in updated.milestones.iter().skip(previous.milestones.len()) {
            triggers.push(UpgradeTrigger {
                kind: TriggerKind::LifeMilestone,
                reason: format!("life milestone recorded: {}", milestone.label),
                triggered_at: detected_at,
            });
        }

        let previous_state = self.scorer.calculate(previous).state;
        let updated_state = self.scorer.calculate(updated).state;
        if updated_state == ReadinessState::Ready && previous_state != ReadinessState::Ready {
            triggers.push(UpgradeTrigger {
                kind: TriggerKind::ReadinessAchieved,
                reason: "upgrade readiness crossed into ready".to_string(),
                triggered_at: detected_at,
            });
        }

        let hard_trigger = triggers.iter().any(|trigger| trigger.kind.is_hard());
        let alerts = triggers
            .iter()
            .filter(|trigger| trigger.kind.is_hard())
            .map(|trigger| UpgradeAlert {
                lead_id: updated.id.clone(),
                kind: trigger.kind,
                headline: format!("Upgrade signal for lead {}: {}", updated.id.0, trigger.reason),
            })
            .collect();

        for trigger in &triggers {
            tracing::debug!(lead = %updated.id.0, kind = ?trigger.kind, "upgrade trigger emitted");
        }

        TriggerDetectionResult {
            triggers,
            is_upgrade_ready: previous.is_upgrade_ready || hard_trigger,
            alerts,
        }
    }

    fn income_jump(&self, updated: &LeadSnapshot, previous: &LeadSnapshot) -> Option<String> {
        let before = previous.income_history.last()?.amount;
        let after = updated.income_history.last()?.amount;
        if before <= 0.0 {
            return None;
        }
        let rise = (after - before) / before;
        if rise >= self.config.income_jump_ratio {
            Some(format!(
                "latest income {:.0} is up {:.0}% from {:.0}",
                after,
                rise * 100.0,
                before
            ))
        } else {
            None
        }
    }

    fn equity_band_crossed(
        &self,
        updated: &LeadSnapshot,
        previous: &LeadSnapshot,
    ) -> Option<String> {
        let before = self.equity_band(previous.owned_property);
        let after = self.equity_band(updated.owned_property);
        // Upward crossings only; falling out of a band is not an event.
        if after > before {
            let band = self.config.equity_bands.get(after - 1).copied().unwrap_or(0.0);
            Some(format!(
                "property equity crossed the {:.0}% band",
                band * 100.0
            ))
        } else {
            None
        }
    }

    /// Number of configured equity bands at or below the snapshot's equity
    /// percentage; zero when no property or no band reached.
    fn equity_band(&self, property: Option<OwnedProperty>) -> usize {
        let Some(property) = property else { return 0 };
        if property.estimated_value <= 0.0 {
            return 0;
        }
        let percent = (property.estimated_value - property.outstanding_loan_balance).max(0.0)
            / property.estimated_value;
        self.config
            .equity_bands
            .iter()
            .filter(|band| percent >= **band)
            .count()
    }

    fn lease_in_window(&self, lease_end: Option<NaiveDate>, today: NaiveDate) -> bool {
        lease_end.is_some_and(|end| {
            end >= today && (end - today).num_days() <= self.config.lease_window_days
        })
    }
}
