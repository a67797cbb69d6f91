//! # unbound-doctor
//!
//! Health checks for the Unbound DNS resolver, derived from the flat
//! key-value statistics dump of `unbound-control stats`.
//!
//! Unbound only exposes process-lifetime cumulative counters, so every
//! interesting figure (queries per second by answer code, cache hit and
//! miss rates, unwanted-reply rate) has to be derived between two
//! samples of the same counter. That derivation, with its persistent
//! per-counter baselines and its tolerance for daemon restarts, is the
//! heart of this crate; the checks on top classify the derived rates
//! against warn/crit thresholds.
//!
//! ## Architecture
//!
//! ```text
//! statistics dump ──▶ UnboundSection ──▶ checks ──▶ (CheckResult, Metric)
//!                                          │
//!                            ValueStore ◀──┘
//!                     (persistent counter baselines)
//! ```
//!
//! - **[`section`]**: parsing of the statistics dump into a snapshot
//! - **[`store`]**: persistent (timestamp, value) baseline per counter
//! - **[`rate`]**: per-second rates from cumulative counters, with
//!   reset/first-observation/stalled-clock handling
//! - **[`levels`]**: threshold classification into OK/WARN/CRIT plus
//!   result and metric records
//! - **[`config`]**: the typed check-parameter surface
//! - **[`checks`]**: the cache, answer-rcode, and unwanted-reply
//!   derivations
//! - **[`graphing`]**: display metadata for exported metrics
//!
//! ## Usage
//!
//! ```
//! use unbound_doctor::{check_cache, CheckParams, UnboundSection, ValueStore};
//!
//! let section = UnboundSection::parse(
//!     "total.num.cachehits=171\ntotal.num.cachemiss=34\ntime.now=1000.0\n",
//! );
//! let params = CheckParams::default();
//! let mut store = ValueStore::new();
//!
//! // First cycle seeds the baselines, the next cycles yield verdicts.
//! let results = check_cache(&params.cache, &section, &mut store);
//! assert!(results.is_empty());
//! ```

pub mod checks;
pub mod config;
pub mod graphing;
pub mod levels;
pub mod rate;
pub mod render;
pub mod section;
pub mod store;

pub use checks::{
    check_answers, check_cache, check_unwanted, discover_answers, discover_cache,
    discover_unwanted,
};
pub use config::{AnswerLevels, AnswerParams, CacheParams, CheckParams};
pub use levels::{check_levels, CheckResult, Levels, Metric, State, Visibility};
pub use rate::{counter_rate, RateError};
pub use section::UnboundSection;
pub use store::ValueStore;

/// One classified measurement: the operator-facing verdict plus the
/// quantitative record exported for graphing.
pub type CheckOutput = (CheckResult, Metric);
