//! Check parameters.
//!
//! Thresholds are supplied as one JSON document, deserialized into
//! explicit types so that a malformed rule (wrong arity, unknown key,
//! wrong type) is rejected when the parameters load, before any check
//! runs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Parameters for the cache check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheParams {
    /// Upper levels on cache misses per second.
    pub cache_misses: Option<(f64, f64)>,
    /// Lower levels on the cache hit ratio, in percent.
    pub cache_hits: Option<(f64, f64)>,
}

/// Upper levels for one answer rcode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerLevels {
    /// Absolute thresholds in answers per second.
    Rate(f64, f64),
    /// Thresholds as a share of all answers; scaled by the cumulative
    /// answer total at check time.
    Ratio(f64, f64),
}

/// Per-rcode parameters for the answers check.
///
/// SERVFAIL and REFUSED spikes are the classic signs of a broken
/// upstream or a misdirected client population, so they carry default
/// levels; every other rcode is informational until configured.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnswerParams {
    pub noerror: Option<AnswerLevels>,
    pub formerr: Option<AnswerLevels>,
    pub servfail: Option<AnswerLevels>,
    pub nxdomain: Option<AnswerLevels>,
    pub notimpl: Option<AnswerLevels>,
    pub refused: Option<AnswerLevels>,
    pub nodata: Option<AnswerLevels>,
}

impl Default for AnswerParams {
    fn default() -> Self {
        Self {
            noerror: None,
            formerr: None,
            servfail: Some(AnswerLevels::Rate(10.0, 100.0)),
            nxdomain: None,
            notimpl: None,
            refused: Some(AnswerLevels::Rate(10.0, 100.0)),
            nodata: None,
        }
    }
}

impl AnswerParams {
    /// The configured levels for an answer rcode, if any.
    ///
    /// Unrecognized rcodes have no configuration surface and always
    /// report without levels.
    pub fn levels_for(&self, rcode: &str) -> Option<AnswerLevels> {
        match rcode {
            "NOERROR" => self.noerror,
            "FORMERR" => self.formerr,
            "SERVFAIL" => self.servfail,
            "NXDOMAIN" => self.nxdomain,
            "NOTIMPL" => self.notimpl,
            "REFUSED" => self.refused,
            "nodata" => self.nodata,
            _ => None,
        }
    }
}

/// All check parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckParams {
    pub cache: CacheParams,
    pub answers: AnswerParams,
}

impl CheckParams {
    /// Load parameters from a JSON file.
    ///
    /// Fails on any malformed document; partial recovery would silently
    /// run with thresholds the operator did not ask for.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read parameter file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse parameter file {}", path.display()))
    }
}
