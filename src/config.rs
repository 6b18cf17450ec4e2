use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::model::{Severity, SeverityFilter, SortOrder};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl From<SeverityArg> for SeverityFilter {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::All => SeverityFilter::All,
            SeverityArg::Low => SeverityFilter::Only(Severity::Low),
            SeverityArg::Medium => SeverityFilter::Only(Severity::Medium),
            SeverityArg::High => SeverityFilter::Only(Severity::High),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Newest,
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::NewestFirst,
            SortArg::Oldest => SortOrder::OldestFirst,
        }
    }
}

/// Track and manage AI safety incidents.
#[derive(Clone, Debug, Parser)]
#[command(name = "incident-atlas", version, about)]
pub struct Config {
    /// Start with an empty store instead of the sample incidents.
    #[arg(long)]
    pub empty: bool,

    /// Initial severity filter for the dashboard.
    #[arg(long, value_enum, default_value_t = SeverityArg::All)]
    pub severity: SeverityArg,

    /// Initial sort order for the dashboard.
    #[arg(long, value_enum, default_value_t = SortArg::Newest)]
    pub sort: SortArg,

    /// How long notifications stay on screen, in seconds.
    #[arg(long, default_value_t = 4)]
    pub notice_secs: u64,

    /// Tracing filter directive. `RUST_LOG` takes precedence when set.
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            empty: false,
            severity: SeverityArg::default(),
            sort: SortArg::default(),
            notice_secs: 4,
            log_filter: "info".into(),
        }
    }
}

impl Config {
    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parsed_defaults() {
        let parsed = Config::parse_from(["incident-atlas"]);
        let default = Config::default();
        assert_eq!(parsed.empty, default.empty);
        assert_eq!(parsed.severity, default.severity);
        assert_eq!(parsed.sort, default.sort);
        assert_eq!(parsed.notice_secs, default.notice_secs);
        assert_eq!(parsed.log_filter, default.log_filter);
    }

    #[test]
    fn parses_view_flags() {
        let cfg = Config::parse_from([
            "incident-atlas",
            "--empty",
            "--severity",
            "high",
            "--sort",
            "oldest",
            "--notice-secs",
            "9",
        ]);
        assert!(cfg.empty);
        assert_eq!(
            SeverityFilter::from(cfg.severity),
            SeverityFilter::Only(Severity::High)
        );
        assert_eq!(SortOrder::from(cfg.sort), SortOrder::OldestFirst);
        assert_eq!(cfg.notice_lifetime(), Duration::from_secs(9));
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(Config::try_parse_from(["incident-atlas", "--severity", "critical"]).is_err());
    }
}
