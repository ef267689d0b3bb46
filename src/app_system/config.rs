use tracing::warn;

pub const BUFFER_SIZE_VAR: &str = "AGRI_MARKET_BUFFER_SIZE";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings for the marketplace system.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    /// Mailbox capacity of the marketplace service.
    pub buffer_size: usize,
    /// Load the seed users and products at startup.
    pub seed: bool,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            buffer_size: 100,
            seed: true,
        }
    }
}

impl MarketConfig {
    /// Reads overrides from the environment. Call after `setup_tracing` so a
    /// rejected value shows up in the log.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(BUFFER_SIZE_VAR) {
            match value.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(
                    key = BUFFER_SIZE_VAR,
                    value = %value,
                    default = config.buffer_size,
                    "Ignoring invalid buffer size, using default"
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let config = MarketConfig::from_lookup(|_| None);
        assert_eq!(config, MarketConfig::default());
        assert_eq!(config.buffer_size, 100);
        assert!(config.seed);
    }

    #[test]
    fn buffer_size_override() {
        let config = MarketConfig::from_lookup(|key| {
            (key == BUFFER_SIZE_VAR).then(|| " 8 ".to_string())
        });
        assert_eq!(config.buffer_size, 8);
    }

    #[test]
    fn zero_or_garbage_buffer_size_falls_back_to_default() {
        for bad in ["0", "lots", "-5"] {
            let config = MarketConfig::from_lookup(|_| Some(bad.to_string()));
            assert_eq!(config, MarketConfig::default());
        }
    }
}
