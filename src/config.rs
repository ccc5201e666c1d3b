use clap::{Args, ValueEnum};
use std::path::PathBuf;

use api_client::DEFAULT_BASE_URL;

/// Settings shared by every front end, flattened into each binary's
/// argument parser.
#[derive(Args, Clone, Debug)]
pub struct ClientArgs {
    #[arg(
        long,
        env = "HEARTHSHELF_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the Google Books API"
    )]
    pub base_url: String,

    #[arg(short, long, help = "Log at debug level unless RUST_LOG says otherwise")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Plain, help = "Log line format")]
    pub log_format: LogFormat,

    #[arg(
        long,
        value_name = "FILE",
        env = "HEARTHSHELF_LOG_FILE",
        help = "Append log lines to this file"
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl ClientArgs {
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        client: ClientArgs,
    }

    #[test]
    fn defaults_point_at_google_books() {
        let cli = TestCli::try_parse_from(["test"]).expect("valid arguments");
        assert_eq!(cli.client.base_url, "https://www.googleapis.com");
        assert_eq!(cli.client.log_format, LogFormat::Plain);
        assert_eq!(cli.client.default_log_level(), "info");
        assert!(cli.client.log_file.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::try_parse_from([
            "test",
            "--base-url",
            "http://localhost:9000",
            "--verbose",
            "--log-format",
            "json",
            "--log-file",
            "/tmp/hearthshelf.log",
        ])
        .expect("valid arguments");
        assert_eq!(cli.client.base_url, "http://localhost:9000");
        assert_eq!(cli.client.log_format, LogFormat::Json);
        assert_eq!(cli.client.default_log_level(), "debug");
        assert_eq!(
            cli.client.log_file,
            Some(PathBuf::from("/tmp/hearthshelf.log"))
        );
    }
}
