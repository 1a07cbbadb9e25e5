use stderrlog::{LogLevelNum, Timestamp};

/// Logging arg group; global, so the flags work after any subcommand.
///
/// The log level is `default + verbose`, where `default` is chosen by the
/// binary and each `-v` adds one step:
/// `0` off, `1` error, `2` warn, `3` info, `4` debug, `5+` trace.
/// `-q` silences everything regardless of the level.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise the log level one step per use (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level for a binary whose quiet-by-default level is `default`.
    pub fn level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        match default.saturating_add(self.verbose) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger at [`level`](Self::level)`(default)`.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level(default))
            .timestamp(timestamp)
            .init()?;
        Ok(())
    }
}
