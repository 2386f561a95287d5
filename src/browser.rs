//! Bridge to the page the app runs in: local storage, the navigator language
//! and the document root. Every platform renderer (web, desktop and mobile
//! webviews) exposes these through `document::eval`.

use crate::config::LANGUAGE_STORAGE_KEY;
use crate::error::AppError;
use crate::models::SupportedLocale;
use dioxus::prelude::*;
use serde::Deserialize;

/// Locale related state living outside the app
pub trait LocaleHost {
    /// Preference saved by an earlier visit
    fn stored_language(&self) -> Option<String>;
    /// Language tag reported by the user agent, e.g. "fr-CA"
    fn browser_language(&self) -> Option<String>;
    fn persist_language(&mut self, locale: SupportedLocale) -> Result<(), AppError>;
    fn set_document_language(&mut self, locale: SupportedLocale) -> Result<(), AppError>;
}

/// Values read from the page once at startup
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrowserSnapshot {
    pub stored: Option<String>,
    pub browser: Option<String>,
}

impl BrowserSnapshot {
    pub async fn capture() -> Result<Self, AppError> {
        let js = format!(
            r#"
            let stored = null;
            let browser = null;
            try {{ stored = localStorage.getItem("{key}"); }} catch (e) {{}}
            try {{ browser = navigator.language || null; }} catch (e) {{}}
            return {{ stored: stored, browser: browser }};
            "#,
            key = LANGUAGE_STORAGE_KEY
        );
        let value = document::eval(&js)
            .await
            .map_err(|e| AppError::Host(format!("{:?}", e)))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// [`LocaleHost`] backed by the page running the app. Writes are sent as
/// scripts in call order; their failures are only logged.
#[derive(Debug, Clone, Default)]
pub struct WebviewHost {
    snapshot: BrowserSnapshot,
}

impl WebviewHost {
    pub fn new(snapshot: BrowserSnapshot) -> Self {
        Self { snapshot }
    }

    fn run(js: String) {
        spawn(async move {
            if let Err(e) = document::eval(&js).await {
                log::warn!("Browser script failed: {:?}", e);
            }
        });
    }
}

impl LocaleHost for WebviewHost {
    fn stored_language(&self) -> Option<String> {
        self.snapshot.stored.clone()
    }

    fn browser_language(&self) -> Option<String> {
        self.snapshot.browser.clone()
    }

    fn persist_language(&mut self, locale: SupportedLocale) -> Result<(), AppError> {
        Self::run(format!(
            r#"try {{ localStorage.setItem("{}", "{}"); }} catch (e) {{}}"#,
            LANGUAGE_STORAGE_KEY,
            locale.code()
        ));
        self.snapshot.stored = Some(locale.code().to_string());
        Ok(())
    }

    fn set_document_language(&mut self, locale: SupportedLocale) -> Result<(), AppError> {
        Self::run(format!(
            r#"document.documentElement.setAttribute("lang", "{}");"#,
            locale.code()
        ));
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory host standing in for the browser
    #[derive(Debug, Default)]
    pub struct MemoryHost {
        pub stored: Option<String>,
        pub browser: Option<String>,
        pub document_lang: Option<String>,
        pub writes: Vec<&'static str>,
    }

    impl MemoryHost {
        pub fn new(stored: Option<&str>, browser: Option<&str>) -> Self {
            Self {
                stored: stored.map(str::to_string),
                browser: browser.map(str::to_string),
                ..Default::default()
            }
        }
    }

    impl LocaleHost for MemoryHost {
        fn stored_language(&self) -> Option<String> {
            self.stored.clone()
        }

        fn browser_language(&self) -> Option<String> {
            self.browser.clone()
        }

        fn persist_language(&mut self, locale: SupportedLocale) -> Result<(), AppError> {
            self.writes.push("storage");
            self.stored = Some(locale.code().to_string());
            Ok(())
        }

        fn set_document_language(&mut self, locale: SupportedLocale) -> Result<(), AppError> {
            self.writes.push("document");
            self.document_lang = Some(locale.code().to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserializes_nulls() {
        let snapshot: BrowserSnapshot =
            serde_json::from_value(serde_json::json!({ "stored": null, "browser": "fr-CA" }))
                .unwrap();
        assert_eq!(snapshot.stored, None);
        assert_eq!(snapshot.browser.as_deref(), Some("fr-CA"));
    }

    #[test]
    fn test_webview_host_reads_snapshot() {
        let host = WebviewHost::new(BrowserSnapshot {
            stored: Some("fr".to_string()),
            browser: Some("en-US".to_string()),
        });
        assert_eq!(host.stored_language().as_deref(), Some("fr"));
        assert_eq!(host.browser_language().as_deref(), Some("en-US"));
    }
}
