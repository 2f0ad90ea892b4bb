/// Environment variable overriding [`Config::max_request_len`].
pub const MAX_REQUEST_LEN_ENV: &str = "BYTEBRIDGE_MAX_REQUEST_LEN";

/// Runtime configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    max_request_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // A slice may not span more than isize::MAX bytes.
            max_request_len: isize::MAX as usize,
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// Recognized variables:
    /// - `BYTEBRIDGE_MAX_REQUEST_LEN`: maximum accepted request length in bytes.
    ///
    /// Unparseable values are ignored with a warning, and the default is used instead.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(MAX_REQUEST_LEN_ENV) {
            match value.trim().parse::<usize>() {
                Ok(len) => config = config.with_max_request_len(len),
                Err(e) => {
                    tracing::warn!("Ignoring {MAX_REQUEST_LEN_ENV}={value:?}: {e}");
                }
            }
        }
        config
    }

    /// Sets the maximum accepted request length, clamped to `isize::MAX`.
    #[must_use]
    pub fn with_max_request_len(mut self, len: usize) -> Self {
        self.max_request_len = len.min(isize::MAX as usize);
        self
    }

    /// The maximum accepted request length in bytes.
    pub fn max_request_len(&self) -> usize {
        self.max_request_len
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_default_allows_any_slice() {
        assert_eq!(Config::default().max_request_len(), isize::MAX as usize);
    }

    #[test]
    fn test_with_max_request_len_clamps() {
        let config = Config::default().with_max_request_len(usize::MAX);
        assert_eq!(config.max_request_len(), isize::MAX as usize);
        let config = Config::default().with_max_request_len(1024);
        assert_eq!(config.max_request_len(), 1024);
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(|key| {
            assert_eq!(key, MAX_REQUEST_LEN_ENV);
            Some(" 4096 ".to_string())
        });
        assert_eq!(config.max_request_len(), 4096);

        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[traced_test]
    #[test]
    fn test_from_lookup_invalid_value_warns() {
        let config = Config::from_lookup(|_| Some("lots".to_string()));
        assert_eq!(config, Config::default());
        assert!(logs_contain("Ignoring BYTEBRIDGE_MAX_REQUEST_LEN"));
    }
}
