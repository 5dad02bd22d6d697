//! Deterministic decision engine for a real-estate CRM.
//!
//! The engine turns a client's financial and property data into lead
//! qualification scores, affordability and equity estimates, upgrade
//! readiness scores, discrete upgrade triggers, deal-risk flags, and
//! data-backed "why now" talking points. Every entry point is a pure
//! function of its arguments plus read-only configuration: no I/O, no
//! persistence, no hidden state. Callers own snapshot ordering and the
//! persistence of anything the engine returns.

pub mod config;
pub mod engine;

mod error;

pub use error::EngineError;
