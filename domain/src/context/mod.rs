//! Context window construction policy

pub mod policy;

pub use policy::{ContextPolicy, SUMMARY_PREFIX, fallback_summary, summary_message};
