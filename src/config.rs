//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `STRIPE_SECRET` | unset | Stripe secret key. Unset means dev-mode payments. |
//! | `STRIPE_API_BASE` | `https://api.stripe.com` | Base URL for the Stripe REST API. |
//! | `STORE_BUFFER_SIZE` | `32` | Mailbox size of every store actor (minimum 1). |
//! | `SEED_DEMO_CATALOG` | on | `off`, `none`, `0` or `false` start with an empty catalog. |

use crate::payments::stripe::DEFAULT_API_BASE;

pub const ENV_STRIPE_SECRET: &str = "STRIPE_SECRET";
pub const ENV_STRIPE_API_BASE: &str = "STRIPE_API_BASE";
pub const ENV_STORE_BUFFER_SIZE: &str = "STORE_BUFFER_SIZE";
pub const ENV_SEED_DEMO_CATALOG: &str = "SEED_DEMO_CATALOG";

pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub stripe_secret: Option<String>,
    pub stripe_api_base: String,
    pub buffer_size: usize,
    pub seed_demo_catalog: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            stripe_secret: None,
            stripe_api_base: DEFAULT_API_BASE.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            seed_demo_catalog: true,
        }
    }
}

impl StorefrontConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            stripe_secret: non_empty(ENV_STRIPE_SECRET),
            stripe_api_base: non_empty(ENV_STRIPE_API_BASE)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            buffer_size: parse_usize(
                lookup(ENV_STORE_BUFFER_SIZE).as_deref(),
                DEFAULT_BUFFER_SIZE,
                1,
            ),
            seed_demo_catalog: parse_enabled_default_true(
                lookup(ENV_SEED_DEMO_CATALOG).as_deref(),
            ),
        }
    }

    /// Builder-style override used by tests and embedders.
    pub fn with_seed_demo_catalog(mut self, seed: bool) -> Self {
        self.seed_demo_catalog = seed;
        self
    }

    pub fn with_stripe_secret(mut self, secret: impl Into<String>) -> Self {
        self.stripe_secret = Some(secret.into());
        self
    }
}

#[must_use]
fn parse_usize(raw: Option<&str>, default_value: usize, min_value: usize) -> usize {
    raw.and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

#[must_use]
fn parse_enabled_default_true(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("off" | "none" | "0" | "false")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> StorefrontConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), StorefrontConfig::default());
    }

    #[test]
    fn test_blank_secret_means_dev_mode() {
        assert_eq!(config(&[(ENV_STRIPE_SECRET, "   ")]).stripe_secret, None);
        assert_eq!(
            config(&[(ENV_STRIPE_SECRET, " sk_test_123 ")]).stripe_secret.as_deref(),
            Some("sk_test_123")
        );
    }

    #[test]
    fn test_buffer_size_floor_and_garbage() {
        assert_eq!(config(&[(ENV_STORE_BUFFER_SIZE, "0")]).buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(config(&[(ENV_STORE_BUFFER_SIZE, "many")]).buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(config(&[(ENV_STORE_BUFFER_SIZE, " 128 ")]).buffer_size, 128);
    }

    #[test]
    fn test_seed_toggle() {
        assert!(config(&[(ENV_SEED_DEMO_CATALOG, "yes")]).seed_demo_catalog);
        assert!(!config(&[(ENV_SEED_DEMO_CATALOG, "OFF")]).seed_demo_catalog);
        assert!(!config(&[(ENV_SEED_DEMO_CATALOG, "0")]).seed_demo_catalog);
    }
}
