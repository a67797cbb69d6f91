//! Cache hit/miss health derivation.

use tracing::debug;

use crate::config::CacheParams;
use crate::levels::{check_levels, Levels, Visibility};
use crate::rate::counter_rate;
use crate::render;
use crate::section::UnboundSection;
use crate::store::ValueStore;
use crate::CheckOutput;

const CACHE_HITS_KEY: &str = "total.num.cachehits";
const CACHE_MISS_KEY: &str = "total.num.cachemiss";

/// Derive cache miss rate, hit rate, and hit ratio.
///
/// Output order is fixed: misses, hits, ratio. The miss and hit rates
/// skip independently when their counter has no usable baseline; the
/// ratio needs both and is omitted when either is missing. A resolver
/// without cache counters yields no output at all.
pub fn check_cache(
    params: &CacheParams,
    section: &UnboundSection,
    store: &mut ValueStore,
) -> Vec<CheckOutput> {
    let (Some(cumulative_hits), Some(cumulative_miss), Some(now)) = (
        section.get(CACHE_HITS_KEY),
        section.get(CACHE_MISS_KEY),
        section.now(),
    ) else {
        return Vec::new();
    };

    let hits = counter_rate(store, "unbound_cache_hits", now, cumulative_hits);
    let miss = counter_rate(store, "unbound_cache_miss", now, cumulative_miss);

    let mut out = Vec::new();

    match miss {
        Ok(rate) => out.push(check_levels(
            rate,
            "cache_misses_rate",
            params.cache_misses.map(|(warn, crit)| Levels::Upper(warn, crit)),
            "Cache Misses",
            render::qps,
            Visibility::Notice,
        )),
        Err(err) => debug!(%err, "cache miss rate unavailable"),
    }

    match hits {
        Ok(rate) => out.push(check_levels(
            rate,
            "cache_hit_rate",
            None,
            "Cache Hits",
            render::qps,
            Visibility::Notice,
        )),
        Err(err) => debug!(%err, "cache hit rate unavailable"),
    }

    if let (Ok(hits), Ok(miss)) = (hits, miss) {
        let total = hits + miss;
        let hit_ratio = if total == 0.0 { 100.0 } else { hits / total * 100.0 };
        out.push(check_levels(
            hit_ratio,
            "cache_hit_ratio",
            params.cache_hits.map(|(warn, crit)| Levels::Lower(warn, crit)),
            "Cache Hit Ratio",
            render::percent,
            Visibility::Summary,
        ));
    }

    out
}
