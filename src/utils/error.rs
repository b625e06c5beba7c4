use thiserror::Error;

#[derive(Error, Debug)]
pub enum NovaPoshtaError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API key is not configured but {called_method} requires it")]
    MissingApiKey { called_method: String },

    #[error("Malformed carrier response for {called_method}: {message}")]
    MalformedResponse {
        called_method: String,
        message: String,
    },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
}

impl NovaPoshtaError {
    /// 給終端使用者看的簡短訊息（烏克蘭語）
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => "Сервіс Нової Пошти недоступний, спробуйте пізніше".to_string(),
            Self::MalformedResponse { .. } | Self::SerializationError(_) => {
                "Нова Пошта повернула неочікувану відповідь".to_string()
            }
            Self::MissingApiKey { .. } => {
                "Не вказано API ключ (NOVA_POST_API_KEY)".to_string()
            }
            Self::UnknownTool { name } => format!("Невідомий інструмент: {}", name),
            Self::InvalidArguments { message, .. } => {
                format!("Некоректні параметри: {}", message)
            }
            Self::IoError(_)
            | Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => format!("Помилка конфігурації: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, NovaPoshtaError>;
