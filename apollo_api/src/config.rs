//! API key resolution.
//!
//! The key is normally handed to [`crate::Client::new`] directly. For callers
//! that keep it in the environment, [`resolve_api_key`] falls back to
//! `APOLLO_API_KEY`, loading a `.env` file from the working directory first
//! when one exists.

use crate::Error;

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "APOLLO_API_KEY";

const MISSING_KEY: &str = "Apollo API key must be provided via parameter or .env";

/// Returns `explicit` if given, otherwise the `APOLLO_API_KEY` value.
///
/// Fails with [`Error::Configuration`] when the resulting key is absent,
/// empty, or whitespace only.
pub fn resolve_api_key(explicit: Option<String>) -> Result<String, Error> {
    let from_env = match explicit {
        Some(_) => None,
        None => {
            if let Err(e) = dotenvy::dotenv() {
                if !e.not_found() {
                    tracing::warn!("Failed to load .env file: {}", e);
                }
            }
            std::env::var(API_KEY_ENV).ok()
        }
    };
    pick_key(explicit, from_env)
}

pub(crate) fn validate_api_key(key: &str) -> Result<(), Error> {
    if key.trim().is_empty() {
        return Err(Error::Configuration(MISSING_KEY.to_string()));
    }
    Ok(())
}

fn pick_key(explicit: Option<String>, from_env: Option<String>) -> Result<String, Error> {
    let key = explicit
        .or(from_env)
        .ok_or_else(|| Error::Configuration(MISSING_KEY.to_string()))?;
    validate_api_key(&key)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins_over_env() {
        let key = pick_key(Some("explicit".to_string()), Some("from-env".to_string())).unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn falls_back_to_env_value() {
        let key = pick_key(None, Some("from-env".to_string())).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn absent_key_is_configuration_error() {
        let err = pick_key(None, None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn empty_and_blank_keys_are_rejected() {
        assert!(matches!(
            pick_key(Some(String::new()), None),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            pick_key(Some("   ".to_string()), Some("from-env".to_string())),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn explicit_key_skips_environment() {
        let key = resolve_api_key(Some("abc123".to_string())).unwrap();
        assert_eq!(key, "abc123");
    }
}
