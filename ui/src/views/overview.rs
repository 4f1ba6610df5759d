use dioxus::prelude::*;

use api::{Api, SignalQuery};

use crate::charts::{MovieRace, MoviesLeaderboard, SentimentGauge, SignalMix};
use crate::components::{SignalCard, StatCard};
use crate::data::mock;
use crate::t;

#[cfg(debug_assertions)]
fn log_overview_render(offline: bool) {
    // Lightweight render trace for diagnosing fetch fallback issues.
    println!("[overview] render (offline={offline})");
}

/// Landing page: stat tiles, the box-office race, sentiment and mix charts,
/// and the two signal feeds. Live data when the service answers, frozen demo
/// data otherwise.
#[component]
pub fn Overview() -> Element {
    // Re-render on language switch (signal provided by the platform crate).
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut stats_res = use_resource(|| async move { Api::default().overview_stats().await });
    let mut signals_res = use_resource(|| async move {
        Api::default()
            .signals(&SignalQuery {
                importance: Some("critical".to_string()),
                per_page: Some(5),
                ..Default::default()
            })
            .await
    });

    let stats_read = stats_res.read();
    let stats = match &*stats_read {
        Some(Ok(stats)) => stats.clone(),
        _ => mock::overview_stats(),
    };
    let offline = matches!(&*stats_read, Some(Err(_)));
    drop(stats_read);

    let critical = match &*signals_res.read() {
        Some(Ok(page)) => page.signals.clone(),
        _ => mock::signals()
            .into_iter()
            .filter(|s| s.importance.as_deref() == Some("critical"))
            .collect(),
    };
    let latest = mock::signals();

    #[cfg(debug_assertions)]
    log_overview_render(offline);

    let (race_movies, race_days) = mock::race_dataset();
    let sentiment_value = mock::positive_share(&stats);

    let mut by_type: Vec<(String, u64)> =
        stats.by_type.iter().map(|(k, v)| (k.clone(), *v)).collect();
    by_type.sort_by(|a, b| b.1.cmp(&a.1));
    let by_movie: Vec<(String, u64)> =
        stats.by_movie.iter().map(|(k, v)| (k.clone(), *v)).collect();
    let movies_tracked = stats.by_movie.len() as u64;

    rsx! {
        section { class: "page page-overview",
            header { class: "page__header",
                div {
                    h1 { {t!("overview-title")} }
                    p { class: "page__subtitle", {t!("overview-subtitle")} }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost page__refresh",
                    onclick: move |_| {
                        stats_res.restart();
                        signals_res.restart();
                    },
                    "⟳"
                }
            }

            if offline {
                p { class: "page__notice", {t!("common-offline")} }
            }

            div { class: "stat-grid",
                StatCard {
                    title: t!("stat-signals-7d"),
                    value: stats.signals_7d,
                    change: stats.trend_vs_previous,
                }
                StatCard {
                    title: t!("stat-critical"),
                    value: stats.critical_count,
                    accent: "critical".to_string(),
                }
                StatCard {
                    title: t!("stat-notable"),
                    value: stats.notable_count,
                }
                StatCard {
                    title: t!("stat-movies"),
                    value: movies_tracked,
                }
            }

            div { class: "page__hero-row",
                MovieRace {
                    movies: race_movies,
                    days: race_days,
                    title: "Гонка новогоднего проката".to_string(),
                    unit: "млн ₽".to_string(),
                }
                SentimentGauge {
                    value: sentiment_value,
                    quote: mock::sentiment_quote(),
                }
            }

            div { class: "page__charts-row",
                SignalMix { data: by_type }
                MoviesLeaderboard { data: by_movie }
            }

            div { class: "page__feeds-row",
                section { class: "card feed",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!("overview-critical-title")} }
                        a { class: "card__link", href: "/signals", {t!("overview-all-signals")} }
                    }
                    if critical.is_empty() {
                        p { class: "card__placeholder", {t!("common-no-data")} }
                    } else {
                        div { class: "feed__items",
                            for signal in critical.iter().take(5) {
                                SignalCard { key: "{signal.id}", signal: signal.clone(), compact: true }
                            }
                        }
                    }
                }

                section { class: "card feed",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!("overview-latest-title")} }
                    }
                    div { class: "feed__items",
                        for signal in latest.iter().take(5) {
                            SignalCard { key: "{signal.id}", signal: signal.clone(), compact: true }
                        }
                    }
                }
            }
        }
    }
}
