use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Cinemas, Geography, Movies, Overview, Signals};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

// Shared theme embedded from the ui crate so web and desktop stay in sync.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Overview {},
        "{label}"
    })
}
fn nav_movies(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Movies {},
        "{label}"
    })
}
fn nav_signals(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Signals {},
        "{label}"
    })
}
fn nav_cinemas(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Cinemas {},
        "{label}"
    })
}
fn nav_geography(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Geography {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            overview: nav_overview,
            movies: nav_movies,
            signals: nav_signals,
            cinemas: nav_cinemas,
            geography: nav_geography,
        });
    }

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(|| "ru-RU".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
