//! Threshold classification of derived measurements.
//!
//! A measurement is classified against an optional (warn, crit) pair
//! into an ordinal state, producing the operator-facing verdict and the
//! quantitative record exported for graphing.

use serde::Serialize;

/// Ordinal check state. Ordering follows severity, so the worst state
/// of a result sequence is simply its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum State {
    Ok,
    Warn,
    Crit,
}

impl State {
    /// Short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            State::Ok => "OK",
            State::Warn => "WARN",
            State::Crit => "CRIT",
        }
    }

    /// Monitoring-plugin exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            State::Ok => 0,
            State::Warn => 1,
            State::Crit => 2,
        }
    }
}

/// A (warn, crit) threshold pair with a direction.
///
/// `Upper` degrades at or above the thresholds, `Lower` at or below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Levels {
    Upper(f64, f64),
    Lower(f64, f64),
}

impl Levels {
    /// Classify a value against the thresholds.
    pub fn classify(&self, value: f64) -> State {
        match *self {
            Levels::Upper(warn, crit) => {
                if value >= crit {
                    State::Crit
                } else if value >= warn {
                    State::Warn
                } else {
                    State::Ok
                }
            }
            Levels::Lower(warn, crit) => {
                if value <= crit {
                    State::Crit
                } else if value <= warn {
                    State::Warn
                } else {
                    State::Ok
                }
            }
        }
    }

    /// The (warn, crit) pair when these are upper levels.
    ///
    /// Graphing only draws upper thresholds, so lower pairs are never
    /// annotated on metrics.
    pub fn upper_pair(&self) -> Option<(f64, f64)> {
        match *self {
            Levels::Upper(warn, crit) => Some((warn, crit)),
            Levels::Lower(_, _) => None,
        }
    }

    fn annotation(&self, render: fn(f64) -> String) -> String {
        match *self {
            Levels::Upper(warn, crit) => {
                format!(" (warn/crit at {}/{})", render(warn), render(crit))
            }
            Levels::Lower(warn, crit) => {
                format!(" (warn/crit below {}/{})", render(warn), render(crit))
            }
        }
    }
}

/// Where a result surfaces in the host's output.
///
/// `Summary` results are always visible; `Notice` results belong to the
/// detail view and are escalated by the host when degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Summary,
    Notice,
}

/// The quantitative observation exported for graphing, independent of
/// the health verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    /// Upper (warn, crit) annotation, when upper levels applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<(f64, f64)>,
}

/// The operator-facing verdict for one measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub state: State,
    pub message: String,
    pub visibility: Visibility,
}

/// Classify one measurement and build its result and metric records.
///
/// Without levels the state is always `Ok` and the message is just
/// `"{label}: {rendered value}"`. With levels, a degraded state appends
/// the threshold annotation to the message.
pub fn check_levels(
    value: f64,
    metric_name: &str,
    levels: Option<Levels>,
    label: &str,
    render: fn(f64) -> String,
    visibility: Visibility,
) -> (CheckResult, Metric) {
    let state = levels.map_or(State::Ok, |levels| levels.classify(value));

    let mut message = format!("{}: {}", label, render(value));
    if state != State::Ok {
        // state != Ok implies levels are present
        if let Some(levels) = levels {
            message.push_str(&levels.annotation(render));
        }
    }

    let result = CheckResult {
        state,
        message,
        visibility,
    };
    let metric = Metric {
        name: metric_name.to_string(),
        value,
        levels: levels.and_then(|levels| levels.upper_pair()),
    };
    (result, metric)
}
