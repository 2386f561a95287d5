use crate::error::AppError;
use crate::models::SupportedLocale;
use fluent_bundle::FluentResource;
use std::borrow::Cow;

/// Where the Fluent text for a locale comes from
pub trait TranslationSource {
    fn load(&self, locale: SupportedLocale) -> Result<Cow<'static, str>, AppError>;
}

type Loader = fn() -> &'static str;

/// Loader per locale. Keyed by the enum so an unsupported code never gets here.
fn loader_for(locale: SupportedLocale) -> Loader {
    match locale {
        SupportedLocale::En => || include_str!("../../locales/en.ftl"),
        SupportedLocale::Fr => || include_str!("../../locales/fr.ftl"),
    }
}

/// Fluent text compiled into the binary for `locale`
pub fn bundled_ftl(locale: SupportedLocale) -> &'static str {
    loader_for(locale)()
}

/// Checks that `text` is usable Fluent for `locale`
pub fn check_translations(locale: SupportedLocale, text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::LocaleAssetsUnavailable {
            locale,
            reason: "translation file is empty".to_string(),
        });
    }

    FluentResource::try_new(text.to_string()).map_err(|(_, errors)| {
        AppError::LocaleAssetsUnavailable {
            locale,
            reason: format!("{} parse error(s), first: {:?}", errors.len(), errors.first()),
        }
    })?;
    Ok(())
}

/// Translations compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTranslations;

impl TranslationSource for BundledTranslations {
    fn load(&self, locale: SupportedLocale) -> Result<Cow<'static, str>, AppError> {
        let text = bundled_ftl(locale);
        check_translations(locale, text)?;
        Ok(Cow::Borrowed(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_valid_bundled_text() {
        for locale in SupportedLocale::ALL {
            let text = BundledTranslations.load(locale).unwrap();
            assert!(text.contains("app-title"), "{locale} is missing app-title");
        }
    }

    #[test]
    fn test_check_rejects_empty_text() {
        let result = check_translations(SupportedLocale::Fr, "  \n");
        assert!(matches!(
            result,
            Err(AppError::LocaleAssetsUnavailable {
                locale: SupportedLocale::Fr,
                ..
            })
        ));
    }

    #[test]
    fn test_check_rejects_invalid_fluent() {
        assert!(check_translations(SupportedLocale::En, "= broken").is_err());
        assert!(check_translations(SupportedLocale::En, "nav-map = Map").is_ok());
    }
}
