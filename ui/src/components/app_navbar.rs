use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n;
use crate::t;

// Navbar stylesheet (shared by all platforms; inlined for release native).
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements so `ui` never needs to know each platform's `Route` enum. Each
/// closure receives the localized label and returns a link that already
/// contains that label as its child.
///
/// Registration happens once, at the top of the platform's `App()`:
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     overview: |label| rsx!(Link { class: "navbar__link", to: Route::Overview {}, "{label}" }),
///     movies: |label| rsx!(Link { class: "navbar__link", to: Route::Movies {}, "{label}" }),
///     signals: |label| rsx!(Link { class: "navbar__link", to: Route::Signals {}, "{label}" }),
///     cinemas: |label| rsx!(Link { class: "navbar__link", to: Route::Cinemas {}, "{label}" }),
///     geography: |label| rsx!(Link { class: "navbar__link", to: Route::Geography {}, "{label}" }),
/// });
/// ```
pub struct NavBuilder {
    pub overview: fn(label: &str) -> Element,
    pub movies: fn(label: &str) -> Element,
    pub signals: fn(label: &str) -> Element,
    pub cinemas: fn(label: &str) -> Element,
    pub geography: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "ru-RU".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    // Internal localized nav when a NavBuilder is registered; raw children
    // otherwise (legacy passthrough).
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let overview = (b.overview)(&t!("nav-overview"));
        let movies = (b.movies)(&t!("nav-movies"));
        let signals = (b.signals)(&t!("nav-signals"));
        let cinemas = (b.cinemas)(&t!("nav-cinemas"));
        let geography = (b.geography)(&t!("nav-geography"));

        rsx! {
            nav { class: "navbar__links",
                {overview}
                {movies}
                {signals}
                {cinemas}
                {geography}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps this component re-rendering when the
            // global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "KinoPulse" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
