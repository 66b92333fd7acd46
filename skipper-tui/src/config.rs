use std::path::PathBuf;

use clap::Parser;
use skipper_core::model::{DEFAULT_AREA, DEFAULT_POSTCODE, Location};
use skipper_provider_wewantwaste::BASE_URL;

/// Command line and environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "skipper",
    version,
    about = "Browse the skip sizes offered at a location and pick one"
)]
pub(crate) struct Cli {
    /// Postcode to list skips for.
    #[arg(long, env = "SKIPPER_POSTCODE", default_value = DEFAULT_POSTCODE)]
    pub postcode: String,

    /// Area name sent alongside the postcode.
    #[arg(long, env = "SKIPPER_AREA", default_value = DEFAULT_AREA)]
    pub area: String,

    /// Root of the skip listing API.
    #[arg(long, env = "SKIPPER_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// File diagnostics are written to; the terminal belongs to the UI.
    #[arg(long, env = "SKIPPER_LOG_FILE", default_value = "skipper.log")]
    pub log_file: PathBuf,
}

impl Cli {
    pub(crate) fn location(&self) -> Location {
        Location::new(self.postcode.trim(), self.area.trim())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "skipper",
            "--postcode",
            " IP1 ",
            "--area",
            "Ipswich",
            "--base-url",
            "http://localhost:8080/api",
            "--log-file",
            "/tmp/skipper-test.log",
        ])
        .expect("flags parse");

        assert_eq!(cli.location(), Location::new("IP1", "Ipswich"), "trimmed location");
        assert_eq!(cli.base_url, "http://localhost:8080/api", "base url flag");
        assert_eq!(
            cli.log_file,
            PathBuf::from("/tmp/skipper-test.log"),
            "log file flag"
        );
    }
}
