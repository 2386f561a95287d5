use crate::browser::WebviewHost;
use crate::i18n::{BundledTranslations, LanguageRuntime};
use crate::models::SupportedLocale;
use crate::services::locale_service;
use dioxus::prelude::*;
use dioxus_i18n::{prelude::i18n, t};

#[component]
pub fn LanguageSwitcher() -> Element {
    let mut runtime = i18n();
    let mut host = use_context::<Signal<WebviewHost>>();
    let mut error = use_signal(|| None::<String>);

    let active = runtime.current();

    rsx! {
        div { class: "language-switcher",
            label { r#for: "language-select", {t!("language-label")} }
            select {
                id: "language-select",
                title: t!("language-current", language: active.native_name()),
                value: "{active.code()}",
                onchange: move |evt| {
                    let Some(locale) = SupportedLocale::from_code(&evt.value()) else {
                        log::warn!("Ignoring unknown language '{}'", evt.value());
                        return;
                    };
                    let result = locale_service::set_language(
                        &mut runtime,
                        &BundledTranslations,
                        &mut *host.write(),
                        locale,
                    );
                    match result {
                        Ok(()) => error.set(None),
                        Err(e) => {
                            log::error!("Switching language failed: {}", e);
                            error.set(Some(e.user_message()));
                        }
                    }
                },
                for locale in SupportedLocale::ALL {
                    option {
                        key: "{locale.code()}",
                        value: "{locale.code()}",
                        selected: locale == active,
                        "{locale.native_name()}"
                    }
                }
            }
            if let Some(message) = error() {
                span { class: "error", "{message}" }
            }
        }
    }
}
