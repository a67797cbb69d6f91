//! Display metadata for exported metrics.
//!
//! Pure configuration data consumed by the JSON export: dashboards map
//! metric names to a title, unit, and palette color, and group related
//! lines into graphs.

/// Display attributes for one exported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
    pub color: &'static str,
}

/// A named group of metric lines drawn together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub metrics: &'static [&'static str],
}

pub const METRICS: &[MetricInfo] = &[
    MetricInfo {
        name: "unbound_answers_NOERROR",
        title: "Rate of NOERROR answers",
        unit: "1/s",
        color: "31/a",
    },
    MetricInfo {
        name: "unbound_answers_FORMERR",
        title: "Rate of FORMERR answers",
        unit: "1/s",
        color: "21/a",
    },
    MetricInfo {
        name: "unbound_answers_SERVFAIL",
        title: "Rate of SERVFAIL answers",
        unit: "1/s",
        color: "11/a",
    },
    MetricInfo {
        name: "unbound_answers_NXDOMAIN",
        title: "Rate of NXDOMAIN answers",
        unit: "1/s",
        color: "51/a",
    },
    MetricInfo {
        name: "unbound_answers_NOTIMPL",
        title: "Rate of NOTIMPL answers",
        unit: "1/s",
        color: "41/a",
    },
    MetricInfo {
        name: "unbound_answers_REFUSED",
        title: "Rate of REFUSED answers",
        unit: "1/s",
        color: "26/a",
    },
    MetricInfo {
        name: "unbound_answers_nodata",
        title: "Rate of answers without data",
        unit: "1/s",
        color: "52/a",
    },
    MetricInfo {
        name: "cache_hit_rate",
        title: "Cache hits per second",
        unit: "1/s",
        color: "26/a",
    },
    MetricInfo {
        name: "cache_misses_rate",
        title: "Cache misses per second",
        unit: "1/s",
        color: "21/a",
    },
    MetricInfo {
        name: "cache_hit_ratio",
        title: "Cache hit ratio",
        unit: "%",
        color: "31/a",
    },
    MetricInfo {
        name: "unbound_unwanted_replies",
        title: "Unwanted replies per second",
        unit: "1/s",
        color: "14/a",
    },
];

pub const GRAPHS: &[GraphInfo] = &[
    GraphInfo {
        name: "unbound_answers",
        title: "Rate of answers",
        metrics: &[
            "unbound_answers_NOERROR",
            "unbound_answers_FORMERR",
            "unbound_answers_SERVFAIL",
            "unbound_answers_NXDOMAIN",
            "unbound_answers_NOTIMPL",
            "unbound_answers_REFUSED",
            "unbound_answers_nodata",
        ],
    },
    GraphInfo {
        name: "cache_hit_misses",
        title: "Cache Hits and Misses",
        metrics: &["cache_hit_rate", "cache_misses_rate"],
    },
];

/// Look up display attributes for a metric name.
pub fn metric_info(name: &str) -> Option<&'static MetricInfo> {
    METRICS.iter().find(|info| info.name == name)
}
