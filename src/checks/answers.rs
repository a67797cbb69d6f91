//! Answer-rcode rate derivation.

use tracing::debug;

use crate::config::{AnswerLevels, AnswerParams};
use crate::levels::{check_levels, Levels, Visibility};
use crate::rate::counter_rate;
use crate::render;
use crate::section::UnboundSection;
use crate::store::ValueStore;
use crate::CheckOutput;

/// Prefix of the per-rcode cumulative answer counters in the dump.
const ANSWER_KEY_PREFIX: &str = "num.answer.rcode.";

/// Canonical rcode order. Output follows this list, not snapshot order,
/// so graphs and detail views stay stable across cycles.
pub const ANSWER_RCODES: &[&str] = &[
    "NOERROR", "FORMERR", "SERVFAIL", "NXDOMAIN", "NOTIMPL", "REFUSED", "nodata",
];

/// Derive one answer rate per rcode present in the snapshot.
///
/// Canonical rcodes come first in their fixed order; any other rcode
/// the resolver reports is appended after them in sorted key order, so
/// future rcodes are still covered. Ratio-style levels are scaled into
/// absolute rates by the cumulative total of all answer counters. An
/// rcode with explicit levels reports with summary visibility.
pub fn check_answers(
    params: &AnswerParams,
    section: &UnboundSection,
    store: &mut ValueStore,
) -> Vec<CheckOutput> {
    let Some(now) = section.now() else {
        return Vec::new();
    };

    let total: f64 = section.with_prefix(ANSWER_KEY_PREFIX).map(|(_, value)| value).sum();

    let mut rcodes: Vec<&str> = ANSWER_RCODES
        .iter()
        .copied()
        .filter(|rcode| section.contains(&format!("{ANSWER_KEY_PREFIX}{rcode}")))
        .collect();
    for (key, _) in section.with_prefix(ANSWER_KEY_PREFIX) {
        let rcode = &key[ANSWER_KEY_PREFIX.len()..];
        if !ANSWER_RCODES.contains(&rcode) {
            rcodes.push(rcode);
        }
    }

    let mut out = Vec::new();
    for rcode in rcodes {
        let Some(value) = section.get(&format!("{ANSWER_KEY_PREFIX}{rcode}")) else {
            continue;
        };
        let metric_name = format!("unbound_answers_{rcode}");

        let rate = match counter_rate(store, &metric_name, now, value) {
            Ok(rate) => rate,
            Err(err) => {
                debug!(rcode, %err, "answer rate unavailable");
                continue;
            }
        };

        let configured = params.levels_for(rcode);
        let levels = configured.map(|levels| match levels {
            AnswerLevels::Rate(warn, crit) => Levels::Upper(warn, crit),
            AnswerLevels::Ratio(warn, crit) => Levels::Upper(warn * total, crit * total),
        });
        let visibility = if configured.is_some() {
            Visibility::Summary
        } else {
            Visibility::Notice
        };

        out.push(check_levels(rate, &metric_name, levels, rcode, render::qps, visibility));
    }

    out
}
