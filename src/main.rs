use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use std::rc::Rc;

mod browser;
mod components;
mod config;
mod error;
mod i18n;
mod models;
mod routes;
mod services;

use i18n::LocaleBootstrap;
use models::SupportedLocale;
use routes::{Route, ViewCatalog};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(config::DEFAULT_LOG_LEVEL));

    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_max_level(config::DEFAULT_LOG_LEVEL.to_level_filter()),
    );

    #[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_LEVEL.as_str()),
    )
    .init();
}

#[component]
fn App() -> Element {
    use_init_i18n(|| i18n::init_i18n(SupportedLocale::DEFAULT));
    use_context_provider(|| Rc::new(ViewCatalog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LocaleBootstrap {
            Router::<Route> {}
        }
    }
}
