//! Shared UI crate for KinoPulse. Cross-platform views, charts and the
//! box-office race engine live here.

pub mod charts;
pub mod core;
pub mod data;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod signal_card;
    pub use signal_card::SignalCard;

    pub mod stat_card;
    pub use stat_card::StatCard;
}
