use dioxus::prelude::*;

use crate::core::format;
use crate::data::mock::{self, CinemaChain};
use crate::t;

/// Segment colors for the screening distribution bar; tracked movies keep
/// the colors they carry in the box-office race, the tail is "other".
const DISTRIBUTION_COLORS: [&str; 3] = ["#e11d48", "#0d9488", "#7c3aed"];
const OTHER_COLOR: &str = "#475569";

fn occupancy_class(pct: u8) -> &'static str {
    match pct {
        70.. => "occupancy--high",
        60..=69 => "occupancy--mid",
        _ => "occupancy--low",
    }
}

fn other_screenings(chain: &CinemaChain) -> u64 {
    let tracked: u64 = chain.screenings_by_movie.iter().map(|(_, n)| n).sum();
    chain.screenings_total.saturating_sub(tracked)
}

fn share_pct(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Cinema-chain comparison: market tiles, a comparison table and per-chain
/// detail cards with the screening split across the tracked releases.
#[component]
pub fn Cinemas() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let chains = mock::cinema_chains();

    let total_cinemas: u32 = chains.iter().map(|c| c.cinemas).sum();
    let total_screens: u32 = chains.iter().map(|c| c.screens).sum();
    let total_screenings: u64 = chains.iter().map(|c| c.screenings_total).sum();
    let avg_occupancy = (chains.iter().map(|c| c.avg_occupancy as u32).sum::<u32>()
        / chains.len().max(1) as u32) as u8;

    rsx! {
        section { class: "page page-cinemas",
            header { class: "page__header",
                div {
                    h1 { {t!("cinemas-title")} }
                    p { class: "page__subtitle", {t!("cinemas-subtitle")} }
                }
            }

            div { class: "stat-grid",
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Кинотеатров (топ-сети)" }
                    strong { class: "stat-card__value", "{total_cinemas}" }
                }
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Залов" }
                    strong { class: "stat-card__value", "{total_screens}" }
                }
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Сеансов за праздники" }
                    strong { class: "stat-card__value",
                        {format::format_count(total_screenings)}
                    }
                }
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Ср. заполняемость" }
                    strong { class: "stat-card__value", "{avg_occupancy}%" }
                }
            }

            section { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", {t!("cinemas-table-title")} }
                    span { class: "badge", "Январь 2026" }
                }
                div { class: "data-table__scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { class: "data-table__left", "Сеть" }
                                th { "Кинотеатры" }
                                th { "Залы" }
                                th { "Города" }
                                th { "Сеансы" }
                                th { "Заполняемость" }
                                th { "Ср. билет" }
                                th { "IMAX" }
                                th { "Dolby" }
                            }
                        }
                        tbody {
                            for chain in chains.iter() {
                                tr { key: "{chain.name}",
                                    td { class: "data-table__left",
                                        span { class: "data-table__logo", "{chain.logo}" }
                                        " {chain.name}"
                                    }
                                    td { "{chain.cinemas}" }
                                    td { "{chain.screens}" }
                                    td { "{chain.cities}" }
                                    td { class: "data-table__strong",
                                        {format::format_count(chain.screenings_total)}
                                    }
                                    td {
                                        span { class: "{occupancy_class(chain.avg_occupancy)}",
                                            "{chain.avg_occupancy}%"
                                        }
                                    }
                                    td { "{chain.avg_ticket_price} ₽" }
                                    td { "{chain.imax}" }
                                    td { "{chain.dolby_atmos}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("cinemas-details-title")} }
                div { class: "chain-list",
                    for chain in chains.iter() {
                        ChainCard { key: "{chain.name}", chain: chain.clone() }
                    }
                }
            }

            section { class: "card insights",
                header { class: "card__header",
                    h2 { class: "card__title", {t!("cinemas-insights-title")} }
                }
                p { class: "insights__item",
                    strong { "Каро" }
                    " лидирует по заполняемости (72%) и премиальным форматам (8 IMAX, 12 Dolby Atmos)."
                }
                p { class: "insights__item",
                    strong { "«Волшебник Изумрудного города»" }
                    " занимает около трети всех сеансов во всех сетях."
                }
                p { class: "insights__item",
                    strong { "Люксор" }
                    " держит самые доступные цены (450 ₽) при заполняемости ниже средней (58%)."
                }
            }
        }
    }
}

#[component]
fn ChainCard(chain: CinemaChain) -> Element {
    let leader_share = chain
        .screenings_by_movie
        .first()
        .map(|(_, n)| share_pct(*n, chain.screenings_total).round() as u8)
        .unwrap_or(0);
    let other = other_screenings(&chain);

    rsx! {
        article { class: "card chain-card",
            header { class: "chain-card__header",
                span { class: "chain-card__logo", "{chain.logo}" }
                div { class: "chain-card__identity",
                    h3 { class: "chain-card__name", "{chain.name}" }
                    span { class: "chain-card__meta",
                        "{chain.cinemas} кинотеатров · {chain.screens} залов · {chain.cities} городов"
                    }
                }
                div { class: "chain-card__formats",
                    if chain.imax > 0 {
                        span { class: "badge", "IMAX: {chain.imax}" }
                    }
                    if chain.dolby_atmos > 0 {
                        span { class: "badge", "Dolby Atmos: {chain.dolby_atmos}" }
                    }
                }
            }

            div { class: "chain-card__stats",
                div { class: "chain-card__stat",
                    strong { class: "chain-card__stat-value",
                        {format::format_count(chain.screenings_total)}
                    }
                    span { class: "chain-card__stat-label", "Всего сеансов" }
                }
                div { class: "chain-card__stat",
                    strong { class: "chain-card__stat-value {occupancy_class(chain.avg_occupancy)}",
                        "{chain.avg_occupancy}%"
                    }
                    span { class: "chain-card__stat-label", "Заполняемость" }
                }
                div { class: "chain-card__stat",
                    strong { class: "chain-card__stat-value", "{chain.avg_ticket_price} ₽" }
                    span { class: "chain-card__stat-label", "Средний билет" }
                }
                div { class: "chain-card__stat",
                    strong { class: "chain-card__stat-value", "{leader_share}%" }
                    span { class: "chain-card__stat-label", "Доля лидера проката" }
                }
            }

            div { class: "distribution",
                span { class: "distribution__label", "Распределение сеансов" }
                div { class: "distribution__bar",
                    for (index, (title, count)) in chain.screenings_by_movie.iter().enumerate() {
                        {
                            let color = DISTRIBUTION_COLORS[index % DISTRIBUTION_COLORS.len()];
                            let width = share_pct(*count, chain.screenings_total);
                            rsx! {
                                div {
                                    key: "{title}",
                                    class: "distribution__segment",
                                    style: "width: {width}%; background-color: {color};",
                                    title: "{title}",
                                }
                            }
                        }
                    }
                    div {
                        class: "distribution__segment",
                        style: "width: {share_pct(other, chain.screenings_total)}%; background-color: {OTHER_COLOR};",
                        title: "Другие",
                    }
                }
                div { class: "distribution__legend",
                    for (index, (title, _)) in chain.screenings_by_movie.iter().enumerate() {
                        span { key: "{title}", class: "distribution__legend-item",
                            span {
                                class: "legend-dot",
                                style: "background-color: {DISTRIBUTION_COLORS[index % DISTRIBUTION_COLORS.len()]};",
                            }
                            "{title}"
                        }
                    }
                    span { class: "distribution__legend-item",
                        span { class: "legend-dot", style: "background-color: {OTHER_COLOR};" }
                        "Другие"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_buckets_match_the_thresholds() {
        assert_eq!(occupancy_class(72), "occupancy--high");
        assert_eq!(occupancy_class(70), "occupancy--high");
        assert_eq!(occupancy_class(63), "occupancy--mid");
        assert_eq!(occupancy_class(58), "occupancy--low");
    }

    #[test]
    fn other_screenings_never_underflow() {
        for chain in mock::cinema_chains() {
            let other = other_screenings(&chain);
            let tracked: u64 = chain.screenings_by_movie.iter().map(|(_, n)| n).sum();
            assert_eq!(other + tracked, chain.screenings_total, "{}", chain.name);
        }
    }

    #[test]
    fn shares_are_zero_for_an_empty_total() {
        assert_eq!(share_pct(10, 0), 0.0);
        assert!((share_pct(1, 4) - 25.0).abs() < 1e-9);
    }
}
