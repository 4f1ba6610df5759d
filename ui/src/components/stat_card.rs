use dioxus::prelude::*;

use crate::core::format;

/// One overview tile: a labelled counter with an optional trend against the
/// previous window.
#[component]
pub fn StatCard(
    title: String,
    value: u64,
    change: Option<f64>,
    accent: Option<String>,
) -> Element {
    let accent_class = accent
        .map(|a| format!("stat-card--{a}"))
        .unwrap_or_default();
    let count = format::format_count(value);

    rsx! {
        div { class: "card stat-card {accent_class}",
            span { class: "stat-card__title", "{title}" }
            strong { class: "stat-card__value", "{count}" }
            if let Some(change) = change {
                {
                    let trend_class = if change >= 0.0 {
                        "stat-card__trend stat-card__trend--up"
                    } else {
                        "stat-card__trend stat-card__trend--down"
                    };
                    let trend_text = format::format_signed_percent(change);
                    rsx! {
                        span { class: "{trend_class}", "{trend_text}" }
                    }
                }
            }
        }
    }
}
