use crate::browser::LocaleHost;
use crate::error::AppError;
use crate::i18n::{LanguageRuntime, TranslationSource};
use crate::models::SupportedLocale;

/// Picks the UI language from a stored preference or the browser language tag.
///
/// A non-empty stored value wins and is taken as is. Otherwise the browser tag
/// is cut at its first `-` ("en-US" becomes "en"). A candidate outside the
/// supported set yields [`SupportedLocale::DEFAULT`].
pub fn resolve_locale(stored: Option<&str>, browser: Option<&str>) -> SupportedLocale {
    let candidate = match stored.filter(|s| !s.is_empty()) {
        Some(stored) => Some(stored),
        None => browser.and_then(|tag| tag.split('-').next()),
    };

    candidate
        .and_then(SupportedLocale::from_code)
        .unwrap_or(SupportedLocale::DEFAULT)
}

/// Resolves the preferred locale from what the host reports
pub fn resolve_preferred_locale(host: &dyn LocaleHost) -> SupportedLocale {
    resolve_locale(
        host.stored_language().as_deref(),
        host.browser_language().as_deref(),
    )
}

/// Activates `locale`: loads its strings, switches the runtime, sets the
/// document language and saves the preference, in that order.
///
/// If the strings cannot be loaded nothing else happens and
/// [`AppError::LocaleAssetsUnavailable`] is returned.
pub fn set_language(
    runtime: &mut dyn LanguageRuntime,
    source: &dyn TranslationSource,
    host: &mut dyn LocaleHost,
    locale: SupportedLocale,
) -> Result<(), AppError> {
    source.load(locale)?;
    runtime.activate(locale);
    host.set_document_language(locale)?;
    host.persist_language(locale)?;

    log::info!("Language set to '{}'", locale);
    Ok(())
}

/// Activation at startup. Falls back to the default locale when the preferred
/// one cannot be loaded.
pub fn initialize(
    runtime: &mut dyn LanguageRuntime,
    source: &dyn TranslationSource,
    host: &mut dyn LocaleHost,
) -> Result<SupportedLocale, AppError> {
    let preferred = resolve_preferred_locale(host);
    match set_language(runtime, source, host, preferred) {
        Ok(()) => Ok(preferred),
        Err(e) if preferred != SupportedLocale::DEFAULT => {
            log::warn!("{}; falling back to '{}'", e, SupportedLocale::DEFAULT);
            set_language(runtime, source, host, SupportedLocale::DEFAULT)?;
            Ok(SupportedLocale::DEFAULT)
        }
        Err(e) => Err(e),
    }
}
