use super::ViewPage;
use crate::routes::{ViewCatalog, ViewKind};
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::rc::Rc;

#[component]
pub fn ParisMap() -> Element {
    let catalog = use_context::<Rc<ViewCatalog>>();

    let Some(content) = catalog.view(ViewKind::ParisMap) else {
        return rsx! {};
    };

    rsx! {
        ViewPage { content,
            div { id: "paris-map", class: "map",
                p { class: "map-placeholder", {t!("map-loading")} }
            }
        }
    }
}
