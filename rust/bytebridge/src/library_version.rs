//! Provides an identifier for the library, reported by the version request.
use std::sync::{LazyLock, OnceLock};

static COMPILED_HOST_LANGUAGE: LazyLock<String> = LazyLock::new(|| {
    option_env!("BYTEBRIDGE_HOST_LANGUAGE")
        .unwrap_or("rust")
        .to_string()
});

static CELL: OnceLock<&'static str> = OnceLock::new();

/// Sets the language of the binding in front of the library. This should be called as soon as
/// possible by a binding, otherwise the compiled language will be used when reporting the library
/// version.
pub fn set_host_language(language: &'static str) {
    CELL.get_or_init(|| language);
}

/// Returns an identifier for this library, such as `bytebridge-c/v0.3.0`.
///
/// Until `set_host_language` is called, the compiled language is reported.
pub fn library_version() -> String {
    let language = CELL
        .get()
        .copied()
        .unwrap_or(COMPILED_HOST_LANGUAGE.as_str());
    let version = env!("CARGO_PKG_VERSION");
    format!("bytebridge-{language}/v{version}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version_format() {
        let version = library_version();
        assert!(version.starts_with("bytebridge-"), "{version}");
        assert!(
            version.ends_with(&format!("/v{}", env!("CARGO_PKG_VERSION"))),
            "{version}"
        );
    }
}
