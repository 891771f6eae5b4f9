//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod estimate;
pub mod output;
pub mod paths;
pub mod serve;

use crate::infrastructure::config::logging::LoggingConfig;

/// Initialize tracing for a command.
///
/// `-v` raises the level to `debug` and `-vv` to `trace`. One-shot commands
/// pass `quiet_default` so provider warnings do not interleave with their
/// output unless asked for.
pub fn init_logging(logging: &LoggingConfig, quiet_default: bool) {
    match level_for(output::verbosity(), quiet_default) {
        Some(level) => logging.with_level(level).init(),
        None => logging.init(),
    }
}

fn level_for(verbose: u8, quiet_default: bool) -> Option<&'static str> {
    match verbose {
        0 if quiet_default => Some("error"),
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::level_for;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), None);
        assert_eq!(level_for(0, true), Some("error"));
        assert_eq!(level_for(1, true), Some("debug"));
        assert_eq!(level_for(3, false), Some("trace"));
    }
}
