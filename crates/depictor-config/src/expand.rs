//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left as-is. `field` names the config key in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DEPICTOR_TEST_CDN", "cdn.example.com");
        }
        let result = expand_env("https://${DEPICTOR_TEST_CDN}/depictions", "depiction.api_url").unwrap();
        assert_eq!(result, "https://cdn.example.com/depictions");
        unsafe {
            std::env::remove_var("DEPICTOR_TEST_CDN");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DEPICTOR_TEST_UNSET");
        }
        let result = expand_env("${DEPICTOR_TEST_UNSET:-Donate}", "depiction.donate_text").unwrap();
        assert_eq!(result, "Donate");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DEPICTOR_TEST_MISSING");
        }
        let err = expand_env("${DEPICTOR_TEST_MISSING}", "depiction.donate_link").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DEPICTOR_TEST_MISSING"));
        assert!(err.to_string().contains("depiction.donate_link"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("plain", "f").unwrap(), "plain");
        assert_eq!(expand_env("$HOME/x", "f").unwrap(), "$HOME/x");
    }
}
