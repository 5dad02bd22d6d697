mod common;

mod readiness;
mod triggers;
mod why_now;
