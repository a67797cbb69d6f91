//! Numeric rendering for check messages.

/// Format a per-second rate, e.g. `34.00/s`.
pub fn qps(value: f64) -> String {
    format!("{value:.2}/s")
}

/// Format a percentage, e.g. `83.41%`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qps_renders_two_decimals() {
        assert_eq!(qps(34.0), "34.00/s");
        assert_eq!(qps(0.0), "0.00/s");
        assert_eq!(qps(12.345), "12.35/s");
    }

    #[test]
    fn percent_renders_two_decimals() {
        assert_eq!(percent(83.41463414634146), "83.41%");
        assert_eq!(percent(100.0), "100.00%");
    }
}
