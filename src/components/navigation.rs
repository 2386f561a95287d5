use super::LanguageSwitcher;
use crate::routes::{Route, ViewCatalog};
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::rc::Rc;

/// Layout around every route: header with navigation and language choice
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                span { class: "app-title", {t!("app-title")} }
                NavigationBar {}
                LanguageSwitcher {}
            }
            main { class: "app-content", Outlet::<Route> {} }
        }
    }
}

/// One link per view
#[component]
pub fn NavigationBar() -> Element {
    let catalog = use_context::<Rc<ViewCatalog>>();

    rsx! {
        nav { class: "nav-bar",
            for entry in catalog.entries() {
                Link {
                    key: "{entry.name}",
                    class: "nav-link",
                    active_class: "active",
                    to: entry.kind.route(),
                    {t!(entry.label_key)}
                }
            }
        }
    }
}
