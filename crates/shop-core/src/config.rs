//! # Shop Configuration
//!
//! Plain configuration data for a [`Shop`](crate::shop::Shop). Loading it from
//! files or the environment is the binary's job; this crate only defines
//! the shape and the defaults.
//!
//! ## Defaults
//! | Field               | Default        |
//! |---------------------|----------------|
//! | `shop_name`         | `default_shop` |
//! | `default_user_name` | `default_user` |
//! | `unique_logins`     | `false`        |

use serde::{Deserialize, Serialize};

/// Name used when no shop name is configured.
pub const DEFAULT_SHOP_NAME: &str = "default_shop";

/// Login of the synthetic user installed when nobody is authenticated.
pub const DEFAULT_USER_NAME: &str = "default_user";

/// Shop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Display name of the shop. `None` falls back to [`DEFAULT_SHOP_NAME`].
    pub shop_name: Option<String>,

    /// Login given to the synthetic session user.
    pub default_user_name: String,

    /// Reject registrations whose login is already taken.
    /// Off by default: duplicates are kept and authentication picks the first.
    pub unique_logins: bool,
}

impl ShopConfig {
    /// Config for a shop with the given name and default everything else.
    pub fn named(name: impl Into<String>) -> Self {
        ShopConfig {
            shop_name: Some(name.into()),
            ..ShopConfig::default()
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            shop_name: None,
            default_user_name: DEFAULT_USER_NAME.to_string(),
            unique_logins: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.shop_name, None);
        assert_eq!(config.default_user_name, "default_user");
        assert!(!config.unique_logins);
    }

    #[test]
    fn test_partial_input_keeps_defaults() {
        let config: ShopConfig = serde_json::from_str(r#"{"unique_logins": true}"#).unwrap();
        assert!(config.unique_logins);
        assert_eq!(config.default_user_name, DEFAULT_USER_NAME);
    }
}
