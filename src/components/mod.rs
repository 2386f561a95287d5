mod about;
mod language_switcher;
mod navigation;
mod paris_map;
mod view_page;

pub use about::About;
pub use language_switcher::LanguageSwitcher;
pub use navigation::AppShell;
pub use paris_map::ParisMap;
pub use view_page::ViewPage;
