use crate::core::{ConfigProvider, ServiceCatalog, ServiceCode};
use crate::domain::model::{ShippingMethodId, DEFAULT_CURRENCY};
use crate::domain::ports::ApiCredentials;
use crate::utils::error::{RatingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_METHOD_ID: &str = "flat_rate";
const API_MODES: [&str; 2] = ["test", "live"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub method: MethodConfig,
    pub services: ServicesConfig,
    pub api: Option<ApiConfig>,
    pub origin: Option<OriginConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodConfig {
    pub id: String,
    pub label: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub enabled: Vec<String>,
}

/// 運送商 API 憑證；計價邏輯不會讀取，只為了相容既有設定保留
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub customer_number: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OriginConfig {
    pub postal_code: Option<String>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            method: MethodConfig {
                id: DEFAULT_METHOD_ID.to_string(),
                label: None,
                currency: None,
            },
            services: ServicesConfig {
                enabled: ServiceCode::ALL.iter().map(|c| c.to_string()).collect(),
            },
            api: None,
            origin: None,
        }
    }
}

fn env_var_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RatingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| RatingError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        // 服務代碼在載入時就檢查，錯誤訊息才會指出是哪個代碼
        config.service_codes()?;
        Ok(config)
    }

    /// 解析啟用的服務代碼
    pub fn service_codes(&self) -> Result<Vec<ServiceCode>> {
        self.services.enabled.iter().map(|code| code.parse::<ServiceCode>()).collect()
    }

    /// 替換環境變數 (例如 ${CP_PASSWORD})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_regex()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("method.id", &self.method.id)?;

        if let Some(currency) = &self.method.currency {
            validation::validate_currency_code("method.currency", currency)?;
        }

        self.service_codes()?;
        if self.services.enabled.is_empty() {
            return Err(RatingError::ConfigValidationError {
                field: "services.enabled".to_string(),
                message: "At least one shipping service must be enabled".to_string(),
            });
        }

        if let Some(postal_code) = self.origin.as_ref().and_then(|o| o.postal_code.as_ref()) {
            validation::validate_postal_code("origin.postal_code", postal_code)?;
        }

        if let Some(api) = &self.api {
            if let Some(mode) = &api.mode {
                validation::validate_one_of("api.mode", mode, &API_MODES)?;
            }
            // 有帳號就必須有密碼
            if api.username.is_some() {
                validation::validate_required_field("api.password", &api.password)?;
            }
        }

        Ok(())
    }

    /// 取得顯示名稱，未設定時使用 id
    pub fn label(&self) -> &str {
        self.method.label.as_deref().unwrap_or(&self.method.id)
    }
}

impl ConfigProvider for TomlConfig {
    fn shipping_method_id(&self) -> ShippingMethodId {
        ShippingMethodId::new(self.method.id.trim())
    }

    fn services(&self) -> ServiceCatalog {
        // 未知代碼已在驗證時回報，這裡直接略過
        self.services
            .enabled
            .iter()
            .filter_map(|code| code.parse::<ServiceCode>().ok())
            .collect()
    }

    fn currency(&self) -> &str {
        self.method.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    fn origin_postal_code(&self) -> Option<&str> {
        self.origin.as_ref().and_then(|o| o.postal_code.as_deref())
    }

    fn api_credentials(&self) -> ApiCredentials {
        let api = self.api.clone().unwrap_or_default();
        ApiCredentials {
            customer_number: api.customer_number,
            username: api.username,
            password: api.password,
            mode: api.mode,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
