use crate::models::SupportedLocale;
use std::fmt;

/// Central error types for the app
#[derive(Debug)]
pub enum AppError {
    /// Translation strings for a locale could not be loaded or parsed
    LocaleAssetsUnavailable {
        locale: SupportedLocale,
        reason: String,
    },
    /// The browser side (storage, document) could not be reached
    Host(String),
    /// Data coming back from the browser had an unexpected shape
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::LocaleAssetsUnavailable { locale, reason } => {
                write!(f, "Locale assets unavailable for '{}': {}", locale, reason)
            }
            AppError::Host(msg) => write!(f, "Browser error: {}", msg),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e)
    }
}

/// User-friendly error messages for UI (untranslated)
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::LocaleAssetsUnavailable { locale, .. } => {
                format!("The '{}' language pack could not be loaded.", locale)
            }
            AppError::Host(_) => "Your browser did not accept the change.".to_string(),
            AppError::Serialization(_) => "Unexpected data from the browser.".to_string(),
        }
    }
}
