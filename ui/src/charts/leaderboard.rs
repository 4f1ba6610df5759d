use dioxus::prelude::*;

use crate::core::format;
use crate::t;

/// How many movies the leaderboard shows at most.
const TOP_N: usize = 10;

/// Top movies by signal activity, as ranked horizontal bars scaled against
/// the busiest movie.
#[component]
pub fn MoviesLeaderboard(data: Vec<(String, u64)>, title: Option<String>) -> Element {
    let heading = title.unwrap_or_else(|| t!("leaderboard-title"));

    let mut rows = data;
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(TOP_N);

    let max_value = rows.first().map(|(_, v)| *v).unwrap_or(1).max(1);

    rsx! {
        section { class: "card leaderboard",
            header { class: "card__header",
                h2 { class: "card__title", "{heading}" }
            }
            if rows.is_empty() {
                p { class: "card__placeholder", {t!("common-no-data")} }
            } else {
                div { class: "leaderboard__rows",
                    for (position, (name, value)) in rows.iter().enumerate() {
                        {
                            let width_pct = *value as f64 / max_value as f64 * 100.0;
                            let count = format::format_count(*value);
                            rsx! {
                                div { key: "{name}", class: "leaderboard__row",
                                    span { class: "leaderboard__rank", "{position + 1}" }
                                    div { class: "leaderboard__body",
                                        span { class: "leaderboard__name", "🎬 {name}" }
                                        div { class: "leaderboard__track",
                                            div {
                                                class: "leaderboard__bar",
                                                style: "width: {width_pct}%;",
                                            }
                                        }
                                    }
                                    span { class: "leaderboard__count", "{count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
