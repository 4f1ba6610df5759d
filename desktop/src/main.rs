#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Cinemas, Geography, Movies, Overview, Signals};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Overview {},
    #[route("/movies")]
    Movies {},
    #[route("/signals")]
    Signals {},
    #[route("/cinemas")]
    Cinemas {},
    #[route("/geography")]
    Geography {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// /assets directory needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("KinoPulse – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Overview {}, "{label}" })
}
fn nav_movies(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Movies {}, "{label}" })
}
fn nav_signals(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Signals {}, "{label}" })
}
fn nav_cinemas(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Cinemas {}, "{label}" })
}
fn nav_geography(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Geography {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Global reactive language code signal (mirrors the web approach);
    // AppNavbar updates it via context on language selection.
    let lang_code = use_signal(|| "ru-RU".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        overview: nav_overview,
        movies: nav_movies,
        signals: nav_signals,
        cinemas: nav_cinemas,
        geography: nav_geography,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div forces a full remount on language change; the
        // hidden marker keeps an explicit reactive dependency on lang_code.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
