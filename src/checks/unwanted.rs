//! Unwanted-reply rate derivation.
//!
//! Replies that arrive without a matching outstanding query point at
//! spoofing attempts or severe network trouble. The thresholds are
//! fixed; any measurable rate deserves attention.

use tracing::debug;

use crate::levels::{check_levels, Levels, Visibility};
use crate::rate::counter_rate;
use crate::render;
use crate::section::UnboundSection;
use crate::store::ValueStore;
use crate::CheckOutput;

const UNWANTED_KEY: &str = "unwanted.replies";
const UNWANTED_LEVELS: Levels = Levels::Upper(10.0, 100.0);

/// Derive the unwanted-reply rate.
pub fn check_unwanted(section: &UnboundSection, store: &mut ValueStore) -> Vec<CheckOutput> {
    let (Some(now), Some(value)) = (section.now(), section.get(UNWANTED_KEY)) else {
        return Vec::new();
    };

    match counter_rate(store, "unbound_unwanted_replies", now, value) {
        Ok(rate) => vec![check_levels(
            rate,
            "unbound_unwanted_replies",
            Some(UNWANTED_LEVELS),
            "Unwanted Replies",
            render::qps,
            Visibility::Summary,
        )],
        Err(err) => {
            debug!(%err, "unwanted reply rate unavailable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::State;

    fn section_with_replies(replies: u64) -> UnboundSection {
        UnboundSection::parse(&format!("time.now=1000.0\nunwanted.replies={replies}\n"))
    }

    fn seeded_store() -> ValueStore {
        let mut store = ValueStore::new();
        store.set("unbound_unwanted_replies", 999.0, 0.0);
        store
    }

    #[test]
    fn quiet_resolver_is_ok() {
        let section = section_with_replies(0);
        let out = check_unwanted(&section, &mut seeded_store());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0.state, State::Ok);
        assert_eq!(out[0].0.message, "Unwanted Replies: 0.00/s");
        assert_eq!(out[0].0.visibility, Visibility::Summary);
        assert_eq!(out[0].1.name, "unbound_unwanted_replies");
        assert_eq!(out[0].1.value, 0.0);
        assert_eq!(out[0].1.levels, Some((10.0, 100.0)));
    }

    #[test]
    fn elevated_rate_warns() {
        let section = section_with_replies(15);
        let out = check_unwanted(&section, &mut seeded_store());
        assert_eq!(out[0].0.state, State::Warn);
        assert_eq!(
            out[0].0.message,
            "Unwanted Replies: 15.00/s (warn/crit at 10.00/s/100.00/s)"
        );
    }

    #[test]
    fn flood_goes_crit() {
        let section = section_with_replies(150);
        let out = check_unwanted(&section, &mut seeded_store());
        assert_eq!(out[0].0.state, State::Crit);
        assert_eq!(
            out[0].0.message,
            "Unwanted Replies: 150.00/s (warn/crit at 10.00/s/100.00/s)"
        );
        assert_eq!(out[0].1.value, 150.0);
    }

    #[test]
    fn missing_counter_yields_no_output() {
        let section = UnboundSection::parse("time.now=1000.0\n");
        assert!(check_unwanted(&section, &mut seeded_store()).is_empty());
    }

    #[test]
    fn first_cycle_yields_no_output() {
        let section = section_with_replies(150);
        let mut store = ValueStore::new();
        assert!(check_unwanted(&section, &mut store).is_empty());
        assert_eq!(store.get("unbound_unwanted_replies"), Some((1000.0, 150.0)));
    }
}
