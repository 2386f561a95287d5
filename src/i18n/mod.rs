mod source;

pub use source::{bundled_ftl, BundledTranslations, TranslationSource};

use crate::browser::{BrowserSnapshot, WebviewHost};
use crate::models::SupportedLocale;
use crate::services::locale_service;
use dioxus::prelude::*;
use dioxus_i18n::prelude::*;

/// Initialize i18n configuration with every bundled locale and English as fallback.
pub fn init_i18n(initial: SupportedLocale) -> I18nConfig {
    SupportedLocale::ALL.into_iter().fold(
        I18nConfig::new(initial.langid()).with_fallback(SupportedLocale::DEFAULT.langid()),
        |config, locale| {
            config.with_locale(Locale::new_static(locale.langid(), bundled_ftl(locale)))
        },
    )
}

/// The language switching side of the i18n runtime
pub trait LanguageRuntime {
    fn current(&self) -> SupportedLocale;
    fn activate(&mut self, locale: SupportedLocale);
}

impl LanguageRuntime for I18n {
    fn current(&self) -> SupportedLocale {
        SupportedLocale::from_langid(&self.language()).unwrap_or_default()
    }

    fn activate(&mut self, locale: SupportedLocale) {
        self.set_language(locale.langid());
    }
}

/// Reads the browser preferences once and activates the preferred locale.
/// Children render once that is done. Expects `use_init_i18n` in an ancestor.
#[component]
pub fn LocaleBootstrap(children: Element) -> Element {
    let runtime = i18n();
    let mut host = use_context_provider(|| Signal::new(WebviewHost::default()));
    let mut ready = use_signal(|| false);
    let mut startup_error = use_signal(|| None::<String>);

    use_hook(move || {
        spawn(async move {
            let snapshot = match BrowserSnapshot::capture().await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    log::warn!("Could not read browser preferences: {}", e);
                    BrowserSnapshot::default()
                }
            };
            log::debug!("Browser preferences: {:?}", snapshot);
            host.set(WebviewHost::new(snapshot));

            let mut runtime = runtime;
            match locale_service::initialize(&mut runtime, &BundledTranslations, &mut *host.write())
            {
                Ok(_) => ready.set(true),
                Err(e) => {
                    log::error!("Localization unavailable: {}", e);
                    startup_error.set(Some(e.user_message()));
                }
            }
        });
    });

    if let Some(message) = startup_error() {
        return rsx! {
            p { class: "startup-error", "{message}" }
        };
    }

    if !ready() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
