use crate::routes::ViewContent;
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::rc::Rc;

/// Title and paragraphs of a view, followed by the children
#[component]
pub fn ViewPage(content: Rc<ViewContent>, children: Element) -> Element {
    rsx! {
        section { class: "view-page",
            h1 { class: "view-title", {t!(content.title_key)} }
            for paragraph in content.paragraph_keys.iter().copied() {
                p { key: "{paragraph}", class: "view-paragraph", {t!(paragraph)} }
            }
            {children}
        }
    }
}
