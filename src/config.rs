use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "opreport",
    version,
    about = "Prints the most recent executed operations with masked account numbers"
)]
pub struct Config {
    /// Input file with a JSON array of operations
    #[arg(short = 'S', long = "src", env = "OPREPORT_SRC")]
    pub src: PathBuf,

    /// Number of most recent operations to print (all when omitted)
    #[arg(
        short = 'C',
        long = "count",
        env = "OPREPORT_COUNT",
        allow_negative_numbers = true
    )]
    pub count: Option<i64>,

    /// Also write warnings (skipped records) to this file
    #[arg(long = "error-log", env = "OPREPORT_ERROR_LOG")]
    pub error_log: Option<PathBuf>,
}

impl Config {
    /// How many operations the report may hold.
    pub fn limit(&self) -> i64 {
        self.count.unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let config = Config::try_parse_from(["opreport", "-S", "operations.json", "-C", "3"]).unwrap();

        assert_eq!(config.src, PathBuf::from("operations.json"));
        assert_eq!(config.count, Some(3));
        assert_eq!(config.limit(), 3);
        assert!(config.error_log.is_none());
    }

    #[test]
    fn test_omitted_count_selects_everything() {
        let config = Config::try_parse_from(["opreport", "--src", "operations.json"]).unwrap();
        assert_eq!(config.count, None);
        assert_eq!(config.limit(), i64::MAX);
    }

    #[test]
    fn test_negative_count_is_accepted() {
        let config =
            Config::try_parse_from(["opreport", "-S", "operations.json", "-C", "-2"]).unwrap();
        assert_eq!(config.limit(), -2);
    }

    #[test]
    fn test_non_numeric_count_is_rejected() {
        let result = Config::try_parse_from(["opreport", "-S", "operations.json", "-C", "five"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_log_path() {
        let config = Config::try_parse_from([
            "opreport",
            "-S",
            "operations.json",
            "--error-log",
            "errors.log",
        ])
        .unwrap();
        assert_eq!(config.error_log, Some(PathBuf::from("errors.log")));
    }
}
