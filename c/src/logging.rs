use std::sync::Once;

use log::LevelFilter;

/// Logging level for the bytebridge library.
///
/// Used with `rust_set_log_level`.
#[repr(u8)]
pub enum BytebridgeLoggingLevel {
    Off = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<BytebridgeLoggingLevel> for LevelFilter {
    fn from(level: BytebridgeLoggingLevel) -> Self {
        match level {
            BytebridgeLoggingLevel::Off => LevelFilter::Off,
            BytebridgeLoggingLevel::Debug => LevelFilter::Debug,
            BytebridgeLoggingLevel::Info => LevelFilter::Info,
            BytebridgeLoggingLevel::Warn => LevelFilter::Warn,
            BytebridgeLoggingLevel::Error => LevelFilter::Error,
        }
    }
}

/// Initialize library logging with the given severity level.
///
/// The library logs diagnostic messages to stderr. Any messages below the given level are not
/// logged.
///
/// This function should be called before the first `rust_request` to capture output from all
/// components. Subsequent calls will have no effect.
///
/// Log level may be overridden with the BYTEBRIDGE_LOG_LEVEL environment variable: "debug",
/// "info", "warn", "error", or "off". The default level is the one passed to this function.
///
/// Log styles (colors) may be configured with the BYTEBRIDGE_LOG_STYLE environment variable
/// "never", "always", or "auto" (default).
///
/// This is thread-safe, but only the first call to this function will have an effect.
#[unsafe(no_mangle)]
pub extern "C" fn rust_set_log_level(level: BytebridgeLoggingLevel) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let initial_level = LevelFilter::from(level).as_str().to_ascii_lowercase();

        let env = env_logger::Env::default()
            .filter_or("BYTEBRIDGE_LOG_LEVEL", initial_level)
            .write_style_or("BYTEBRIDGE_LOG_STYLE", "auto");

        // Another logger may already be installed by the host application.
        if let Err(e) = env_logger::Builder::from_env(env)
            .target(env_logger::Target::Stderr)
            .try_init()
        {
            eprintln!("[bytebridge] Logging not initialized: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_set_log_level_called_twice() {
        // env_logger panics if initialized twice; ensure we don't
        rust_set_log_level(BytebridgeLoggingLevel::Info);
        rust_set_log_level(BytebridgeLoggingLevel::Debug);
    }

    #[test]
    fn test_level_conversion() {
        assert_eq!(LevelFilter::from(BytebridgeLoggingLevel::Off), LevelFilter::Off);
        assert_eq!(
            LevelFilter::from(BytebridgeLoggingLevel::Warn),
            LevelFilter::Warn
        );
    }
}
