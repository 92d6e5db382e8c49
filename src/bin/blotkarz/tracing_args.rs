//! Logging setup for the CLI.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// CLI arguments for controlling tracing/logging output.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log output format: compact, pretty, or json
    #[arg(long = "log-format", default_value = "compact", global = true)]
    pub log_format: LogFormat,
}

/// Available log output formats.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line format (default)
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
}

impl TracingArgs {
    /// The filter directive for these flags when `RUST_LOG` isn't set.
    ///
    /// - `-q` (quiet): error
    /// - (default): warn
    /// - `-v`: info
    /// - `-vv`: debug
    /// - `-vvv`: trace, which logs every round
    pub fn directive(&self) -> String {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbosity {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        format!("{level},blotkarz={level}")
    }

    /// Initialize the tracing subscriber based on CLI arguments.
    ///
    /// `RUST_LOG` wins over the flags when it is set. Logs always go to
    /// stderr so stdout only carries the result.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.directive())
        };

        match self.log_format {
            LogFormat::Compact => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .init();
            }
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            }
        }
    }
}
