//! Parsing of the Unbound statistics dump.
//!
//! `unbound-control stats` emits one statistic per line as `key=value`.
//! Monitoring agents sometimes rewrite the separator to whitespace when
//! relaying the dump, so both forms are accepted.

use std::collections::BTreeMap;

use tracing::debug;

/// Key carrying the wall-clock timestamp of the dump.
pub const TIME_NOW_KEY: &str = "time.now";

/// A parsed statistics snapshot: statistic key to numeric value.
///
/// Values are integers or floats in the dump; both are held as `f64`.
/// The snapshot is immutable once parsed and owned by the caller of the
/// check routines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnboundSection {
    values: BTreeMap<String, f64>,
}

impl UnboundSection {
    /// Parse a statistics dump.
    ///
    /// Lines that do not look like a statistic are skipped with a debug
    /// log; a partially garbled dump still yields the parseable rest.
    pub fn parse(input: &str) -> Self {
        let mut values = BTreeMap::new();

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, raw)) = split_stat_line(line) else {
                debug!(line, "skipping line without a key/value separator");
                continue;
            };
            match parse_number(raw) {
                Some(value) => {
                    values.insert(key.to_string(), value);
                }
                None => debug!(key, raw, "skipping statistic with non-numeric value"),
            }
        }

        Self { values }
    }

    /// Look up a statistic by key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Check whether a statistic is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The wall-clock timestamp of the dump, if present.
    pub fn now(&self) -> Option<f64> {
        self.get(TIME_NOW_KEY)
    }

    /// Iterate statistics whose key starts with `prefix`, in sorted key
    /// order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, f64)> {
        self.values
            .iter()
            .filter(move |(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.as_str(), *value))
    }

    /// Number of parsed statistics.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dump yielded no statistics at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn split_stat_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .or_else(|| line.split_once(char::is_whitespace))
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Integer first, float second, like the dump itself distinguishes them.
fn parse_number(raw: &str) -> Option<f64> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(int as f64);
    }
    raw.parse::<f64>().ok()
}
