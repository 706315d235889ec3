//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level`.
/// - `REFDECK_TRACE=1` enables TRACE level for per-key event logging.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("REFDECK_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::Args;

    #[test]
    /// What: Verbose wins over an explicit level.
    ///
    /// Inputs:
    /// - `--log-level warn -v`, then `--log-level warn`.
    ///
    /// Output:
    /// - "debug", then "warn".
    fn verbose_overrides_level() {
        let args = Args::try_parse_from(["refdeck", "--log-level", "warn", "-v"]).expect("args");
        assert_eq!(determine_log_level(&args), "debug");
        let args = Args::try_parse_from(["refdeck", "--log-level", "warn"]).expect("args");
        if std::env::var("REFDECK_TRACE").ok().as_deref() != Some("1") {
            assert_eq!(determine_log_level(&args), "warn");
        }
    }
}
