use crate::config::carrier::CarrierConfig;
use crate::utils::error::{NovaPoshtaError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub carrier: CarrierSection,
    pub logging: Option<LoggingConfig>,
}

/// `[carrier]` 表；未寫出的鍵沿用環境變數或預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarrierSection {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub authenticate_tracking: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NovaPoshtaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NovaPoshtaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NOVA_POST_API_KEY})；未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NovaPoshtaError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以檔案中有寫出的鍵覆寫 `base`
    pub fn carrier_config(&self, mut base: CarrierConfig) -> CarrierConfig {
        if let Some(endpoint) = &self.carrier.endpoint {
            base.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &self.carrier.api_key {
            base.api_key = Some(api_key.clone());
        }
        if let Some(authenticate_tracking) = self.carrier.authenticate_tracking {
            base.authenticate_tracking = authenticate_tracking;
        }
        base
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.carrier_config(CarrierConfig::default()).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::carrier::{API_KEY_VAR, ENDPOINT_VAR};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[carrier]
endpoint = "https://api.novaposhta.ua/v2.0/json/"
api_key = "abc123"
authenticate_tracking = true

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let carrier = config.carrier_config(CarrierConfig::default());

        assert_eq!(carrier.api_key.as_deref(), Some("abc123"));
        assert!(carrier.authenticate_tracking);
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let carrier = config.carrier_config(CarrierConfig::default());

        assert_eq!(carrier.endpoint, "https://api.novaposhta.ua/v2.0/json/");
        assert_eq!(carrier.api_key, None);
        assert!(!carrier.authenticate_tracking);
    }

    #[test]
    fn test_keys_absent_from_file_keep_environment_values() {
        let vars: HashMap<&str, &str> = [
            (ENDPOINT_VAR, "http://127.0.0.1:8080/"),
            (API_KEY_VAR, "env-key"),
        ]
        .into_iter()
        .collect();
        let from_env = CarrierConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        let config = TomlConfig::from_toml_str("[carrier]\napi_key = \"file-key\"\n").unwrap();
        let carrier = config.carrier_config(from_env);

        assert_eq!(carrier.endpoint, "http://127.0.0.1:8080/");
        assert_eq!(carrier.api_key.as_deref(), Some("file-key"));
        assert!(!carrier.authenticate_tracking);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NP_TOOLS_TEST_API_KEY", "from-env");

        let toml_content = r#"
[carrier]
api_key = "${NP_TOOLS_TEST_API_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.carrier.api_key.as_deref(), Some("from-env"));

        std::env::remove_var("NP_TOOLS_TEST_API_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[carrier]
api_key = "${NP_TOOLS_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.carrier.api_key.as_deref(),
            Some("${NP_TOOLS_TEST_UNSET_VARIABLE}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[carrier\napi_key = 1");
        assert!(matches!(result, Err(NovaPoshtaError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[carrier]
endpoint = "http://127.0.0.1:9000/"
api_key = "file-key"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.carrier.endpoint.as_deref(), Some("http://127.0.0.1:9000/"));
        assert_eq!(config.carrier.api_key.as_deref(), Some("file-key"));
    }
}
