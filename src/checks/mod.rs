//! The check routines derived from one statistics snapshot.
//!
//! Each routine is a pure composition over one [`UnboundSection`] and
//! the mutable [`ValueStore`](crate::store::ValueStore): it derives
//! rates for its counters, classifies them, and returns the verdicts in
//! a fixed order. A counter whose rate is unavailable this cycle drops
//! only its own entry; nothing here aborts a routine part-way.
//!
//! The discovery predicates mirror the monitoring host's service
//! discovery: a resolver that does not expose a counter family simply
//! has no such service.

mod answers;
mod cache;
mod unwanted;

pub use answers::{check_answers, ANSWER_RCODES};
pub use cache::check_cache;
pub use unwanted::check_unwanted;

use crate::section::UnboundSection;

/// Whether the cache check applies to this resolver.
pub fn discover_cache(section: &UnboundSection) -> bool {
    section.contains("total.num.cachehits") && section.contains("total.num.cachemiss")
}

/// Whether the answers check applies to this resolver.
pub fn discover_answers(section: &UnboundSection) -> bool {
    section.now().is_some() && section.contains("num.answer.rcode.SERVFAIL")
}

/// Whether the unwanted-replies check applies to this resolver.
pub fn discover_unwanted(section: &UnboundSection) -> bool {
    section.now().is_some() && section.contains("unwanted.replies")
}
