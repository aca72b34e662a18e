//! crates/logging/src/verbosity.rs
//! Mapping from `-v` counts to tracing level filters.

use tracing_subscriber::filter::LevelFilter;

/// Verbosity selected on the command line.
///
/// Level `0` only reports warnings and leaves absorbed subtree failures to
/// the caller's own reporting, level `1` adds request summaries and
/// traversal warnings, level `2` adds per-directory traversal events, and
/// level `3` or higher enables per-entry tracing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verbosity {
    level: u8,
}

impl Verbosity {
    /// Creates a verbosity from the number of `-v` flags supplied.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self { level }
    }

    /// Returns the raw verbose level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Returns the level filter corresponding to this verbosity.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Returns the `EnvFilter` directive equivalent to this verbosity.
    ///
    /// At level `0` the `file_list::walk` target is limited to errors.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self.level {
            0 => "warn,file_list::walk=error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        let verbosity = Verbosity::default();
        assert_eq!(verbosity.level(), 0);
        assert_eq!(verbosity.level_filter(), LevelFilter::WARN);
        assert_eq!(verbosity.directive(), "warn,file_list::walk=error");
    }

    #[test]
    fn levels_map_to_increasing_filters() {
        let cases = [
            (0, LevelFilter::WARN),
            (1, LevelFilter::INFO),
            (2, LevelFilter::DEBUG),
            (3, LevelFilter::TRACE),
            (9, LevelFilter::TRACE),
        ];

        for (level, expected) in cases {
            assert_eq!(Verbosity::from_verbose_level(level).level_filter(), expected);
        }
    }

    #[test]
    fn walk_warnings_return_with_first_verbose_flag() {
        assert!(Verbosity::default().directive().contains("file_list::walk=error"));
        assert!(!Verbosity::from_verbose_level(1).directive().contains("file_list::walk"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn verbosity_round_trips_through_json() {
        let verbosity = Verbosity::from_verbose_level(2);
        let json = serde_json::to_string(&verbosity).expect("serialize");
        assert_eq!(json, r#"{"level":2}"#);
    }
}
