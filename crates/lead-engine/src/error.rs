/// Failures the engine can surface to its callers.
///
/// Implausible numeric input is never an error: the calculators clamp,
/// zero, or skip a sub-score with a reason string instead. The only
/// failure is a configuration precondition, which indicates a deployment
/// defect and must reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no active pricing rules configured; lead qualification requires at least one")]
    NoActivePricingRules,
}
