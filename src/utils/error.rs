use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Item not found: {name}")]
    ItemNotFound { name: String },

    #[error("Item already on the menu: {name}")]
    DuplicateItem { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input for a single request, e.g. an unknown item in an order.
    Low,
    /// The restaurant could not be set up from its configuration.
    High,
    /// The environment failed underneath us.
    Critical,
}

impl RestaurantError {
    pub fn item_not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound { name: name.into() }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigValueError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound { .. } | Self::DuplicateItem { .. } => ErrorSeverity::Low,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ItemNotFound { .. } => "Check the item name against the current menu",
            Self::DuplicateItem { .. } => "Remove the existing item first or pick a different name",
            Self::ConfigError { .. } => "Make sure the config file is valid TOML",
            Self::InvalidConfigValueError { .. } => {
                "Fix the highlighted field; times use HH:MM or HH:MM:SS"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Retry with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ItemNotFound { name } => format!("'{}' is not on the menu", name),
            Self::DuplicateItem { name } => format!("'{}' is already on the menu", name),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RestaurantError>;
