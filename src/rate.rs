//! Rate derivation from monotonically increasing counters.
//!
//! Unbound's counters are process-lifetime totals sampled at irregular
//! intervals; they reset to zero when the daemon restarts. A rate is
//! only meaningful between two samples of the same counter epoch, so
//! the first observation, a stalled clock, and a counter reset all
//! yield a skip instead of a fabricated value.

use thiserror::Error;

use crate::store::ValueStore;

/// Why no rate could be derived for this cycle.
///
/// All variants mean the same thing to callers: drop this one
/// measurement and move on. Skipping one cycle after a daemon restart
/// keeps the rate series sane instead of reporting a huge negative
/// spike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RateError {
    /// First observation of this counter; the baseline was only seeded.
    #[error("counter has no baseline yet")]
    Uninitialized,

    /// The sample timestamp did not advance past the stored baseline.
    #[error("time did not advance since the last sample")]
    TimeNotAdvancing,

    /// The counter decreased: daemon restart or counter wrap.
    #[error("counter decreased since the last sample")]
    CounterReset,
}

/// Derive the per-second rate of a counter since its last observation.
///
/// The store is reseeded with `(now, value)` before anything else, so a
/// reset counter or a fresh key becomes the new baseline immediately
/// and the next cycle can produce a rate again.
pub fn counter_rate(
    store: &mut ValueStore,
    key: &str,
    now: f64,
    value: f64,
) -> Result<f64, RateError> {
    let previous = store.get(key);
    store.set(key, now, value);

    let (last_time, last_value) = previous.ok_or(RateError::Uninitialized)?;
    if now <= last_time {
        return Err(RateError::TimeNotAdvancing);
    }
    if value < last_value {
        return Err(RateError::CounterReset);
    }
    Ok((value - last_value) / (now - last_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_only_seeds_the_store() {
        let mut store = ValueStore::new();
        let result = counter_rate(&mut store, "unbound_cache_hits", 1000.0, 171.0);
        assert_eq!(result, Err(RateError::Uninitialized));
        assert_eq!(store.get("unbound_cache_hits"), Some((1000.0, 171.0)));
    }

    #[test]
    fn rate_is_delta_over_elapsed() {
        let mut store = ValueStore::new();
        store.set("unbound_cache_hits", 1000.0, 100.0);
        let rate = counter_rate(&mut store, "unbound_cache_hits", 1060.0, 400.0).unwrap();
        assert_eq!(rate, 5.0); // 300 more hits over 60 seconds
    }

    #[test]
    fn success_advances_the_baseline() {
        let mut store = ValueStore::new();
        store.set("unbound_cache_hits", 1000.0, 100.0);
        counter_rate(&mut store, "unbound_cache_hits", 1060.0, 400.0).unwrap();

        let rate = counter_rate(&mut store, "unbound_cache_hits", 1090.0, 430.0).unwrap();
        assert_eq!(rate, 1.0); // measured against (1060, 400), not (1000, 100)
    }

    #[test]
    fn unchanged_counter_is_a_zero_rate() {
        let mut store = ValueStore::new();
        store.set("unbound_answers_SERVFAIL", 1000.0, 17.0);
        let rate = counter_rate(&mut store, "unbound_answers_SERVFAIL", 1060.0, 17.0).unwrap();
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn stalled_clock_yields_no_rate() {
        let mut store = ValueStore::new();
        store.set("unbound_cache_hits", 1000.0, 100.0);
        let result = counter_rate(&mut store, "unbound_cache_hits", 1000.0, 150.0);
        assert_eq!(result, Err(RateError::TimeNotAdvancing));
    }

    #[test]
    fn backwards_clock_yields_no_rate() {
        let mut store = ValueStore::new();
        store.set("unbound_cache_hits", 1000.0, 100.0);
        let result = counter_rate(&mut store, "unbound_cache_hits", 990.0, 150.0);
        assert_eq!(result, Err(RateError::TimeNotAdvancing));
    }

    #[test]
    fn counter_reset_reseeds_with_the_lower_value() {
        let mut store = ValueStore::new();
        store.set("unbound_cache_hits", 1000.0, 100.0);

        // Daemon restarted: counter starts over near zero.
        let result = counter_rate(&mut store, "unbound_cache_hits", 1060.0, 3.0);
        assert_eq!(result, Err(RateError::CounterReset));
        assert_eq!(store.get("unbound_cache_hits"), Some((1060.0, 3.0)));

        // The cycle after the reset produces a rate again.
        let rate = counter_rate(&mut store, "unbound_cache_hits", 1120.0, 63.0).unwrap();
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn keys_do_not_share_baselines() {
        let mut store = ValueStore::new();
        store.set("unbound_cache_hits", 1000.0, 100.0);
        let result = counter_rate(&mut store, "unbound_cache_miss", 1060.0, 50.0);
        assert_eq!(result, Err(RateError::Uninitialized));
    }
}
