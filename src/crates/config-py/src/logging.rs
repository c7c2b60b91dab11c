//! Diagnostic logging setup.

use anyhow::anyhow;
use tracing::level_filters::LevelFilter;

/// Install the global fmt subscriber, writing to stderr at `level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init(LevelFilter::WARN);
        assert!(init(LevelFilter::WARN).is_err());
    }
}
