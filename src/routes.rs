use crate::components::{About, AppShell, ParisMap};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Routes understood by the router
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[redirect("/", || Route::ParisMap {})]
        #[route("/paris-bien-etre-1886")]
        ParisMap {},
        #[route("/about")]
        About {},
}

/// Views a route can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    ParisMap,
    About,
}

impl ViewKind {
    pub fn route(&self) -> Route {
        match self {
            ViewKind::ParisMap => Route::ParisMap {},
            ViewKind::About => Route::About {},
        }
    }
}

/// Translation keys making up a view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContent {
    pub title_key: &'static str,
    pub paragraph_keys: Vec<&'static str>,
}

fn paris_map_view() -> ViewContent {
    ViewContent {
        title_key: "map-title",
        paragraph_keys: vec!["map-intro"],
    }
}

fn about_view() -> ViewContent {
    ViewContent {
        title_key: "about-title",
        paragraph_keys: vec!["about-body", "about-sources"],
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Loading {
    Eager,
    /// Built on first navigation
    Lazy,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewEntry {
    pub name: &'static str,
    pub kind: ViewKind,
    /// Translation key for navigation links
    pub label_key: &'static str,
    pub loading: Loading,
    pub loader: fn() -> ViewContent,
}

pub const VIEWS: [ViewEntry; 2] = [
    ViewEntry {
        name: "paris-bien-etre-1886",
        kind: ViewKind::ParisMap,
        label_key: "nav-map",
        loading: Loading::Eager,
        loader: paris_map_view,
    },
    ViewEntry {
        name: "about",
        kind: ViewKind::About,
        label_key: "nav-about",
        loading: Loading::Lazy,
        loader: about_view,
    },
];

/// The named views together with the content built from them so far
pub struct ViewCatalog {
    entries: &'static [ViewEntry],
    views: RefCell<HashMap<ViewKind, Rc<ViewContent>>>,
}

impl Default for ViewCatalog {
    fn default() -> Self {
        Self::new(&VIEWS)
    }
}

impl ViewCatalog {
    /// Builds every eager view right away
    pub fn new(entries: &'static [ViewEntry]) -> Self {
        let views = entries
            .iter()
            .filter(|entry| entry.loading == Loading::Eager)
            .map(|entry| (entry.kind, Rc::new((entry.loader)())))
            .collect();
        Self {
            entries,
            views: RefCell::new(views),
        }
    }

    pub fn entries(&self) -> &'static [ViewEntry] {
        self.entries
    }

    /// Content for `kind`, built on first use for lazy views
    pub fn view(&self, kind: ViewKind) -> Option<Rc<ViewContent>> {
        if let Some(content) = self.views.borrow().get(&kind) {
            return Some(content.clone());
        }

        let entry = self.entries.iter().find(|entry| entry.kind == kind)?;
        log::debug!("Loading view '{}'", entry.name);
        let content = Rc::new((entry.loader)());
        self.views.borrow_mut().insert(kind, content.clone());
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_map() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::ParisMap {});
        assert_eq!(
            "/".parse::<Route>().unwrap(),
            "/paris-bien-etre-1886".parse::<Route>().unwrap()
        );
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::ParisMap {}.to_string(), "/paris-bien-etre-1886");
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!("/about".parse::<Route>().unwrap(), Route::About {});
        assert!("/nowhere".parse::<Route>().is_err());
    }

    #[test]
    fn test_about_is_built_on_first_use() {
        let catalog = ViewCatalog::default();
        assert!(catalog.views.borrow().contains_key(&ViewKind::ParisMap));
        assert!(!catalog.views.borrow().contains_key(&ViewKind::About));

        let first = catalog.view(ViewKind::About).unwrap();
        assert!(catalog.views.borrow().contains_key(&ViewKind::About));
        let second = catalog.view(ViewKind::About).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unknown_view_is_none() {
        static ONLY_MAP: [ViewEntry; 1] = [VIEWS[0]];
        let catalog = ViewCatalog::new(&ONLY_MAP);
        assert!(catalog.view(ViewKind::About).is_none());
    }

    #[test]
    fn test_entries_name_each_route() {
        let catalog = ViewCatalog::default();
        let names: Vec<_> = catalog.entries().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["paris-bien-etre-1886", "about"]);
        for entry in catalog.entries() {
            assert_eq!(entry.kind.route().to_string().trim_start_matches('/'), entry.name);
        }
    }
}
