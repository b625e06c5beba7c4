use crate::core::client::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{NovaPoshtaError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::env;
use std::fmt;

pub const API_KEY_VAR: &str = "NOVA_POST_API_KEY";
pub const ENDPOINT_VAR: &str = "NOVA_POST_API_ENDPOINT";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Clone, PartialEq)]
pub struct CarrierConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// 查詢包裹狀態時也附上 apiKey（預設不附）
    pub authenticate_tracking: bool,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            authenticate_tracking: false,
        }
    }
}

// apiKey 不得出現在日誌中
impl fmt::Debug for CarrierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarrierConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("authenticate_tracking", &self.authenticate_tracking)
            .finish()
    }
}

impl CarrierConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 以自訂查詢函式讀取變數（測試時不必改動行程環境）
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        Self {
            endpoint: lookup(ENDPOINT_VAR).unwrap_or_else(default_endpoint),
            api_key: lookup(API_KEY_VAR).filter(|key| !key.is_empty()),
            authenticate_tracking: false,
        }
    }
}

impl ConfigProvider for CarrierConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn authenticate_tracking(&self) -> bool {
        self.authenticate_tracking
    }
}

impl Validate for CarrierConfig {
    fn validate(&self) -> Result<()> {
        validate_url("carrier.endpoint", &self.endpoint)?;

        if let Some(key) = &self.api_key {
            validate_non_empty_string("carrier.api_key", key)?;
            if key.contains("${") {
                return Err(NovaPoshtaError::InvalidConfigValueError {
                    field: "carrier.api_key".to_string(),
                    value: key.clone(),
                    reason: "Unresolved environment variable placeholder".to_string(),
                });
            }
        }

        tracing::debug!("Carrier configuration validation passed");
        Ok(())
    }
}
