use super::ViewPage;
use crate::routes::{Route, ViewCatalog, ViewKind};
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::rc::Rc;

#[component]
pub fn About() -> Element {
    let catalog = use_context::<Rc<ViewCatalog>>();

    // first visit builds the view
    let Some(content) = catalog.view(ViewKind::About) else {
        return rsx! {};
    };

    rsx! {
        ViewPage { content,
            Link { class: "back-link", to: Route::ParisMap {}, {t!("nav-map")} }
        }
    }
}
