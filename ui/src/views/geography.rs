use dioxus::prelude::*;

use crate::core::format;
use crate::data::mock;
use crate::t;

/// Fixed colors per federal district, matched by district code.
fn region_color(code: &str) -> &'static str {
    match code {
        "ЦФО" => "#3b82f6",
        "СЗФО" => "#8b5cf6",
        "ПФО" => "#10b981",
        "УрФО" => "#f59e0b",
        "СФО" => "#ef4444",
        "ЮФО" => "#06b6d4",
        "СКФО" => "#ec4899",
        "ДФО" => "#84cc16",
        _ => "#64748b",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeoView {
    Cities,
    Regions,
}

/// Revenue split by city and federal district: market tiles, the district
/// share bars, and a toggle between the city ranking and the district table.
#[component]
pub fn Geography() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut view_mode = use_signal(|| GeoView::Cities);

    let totals = mock::market_totals();
    let cities = mock::cities_box_office();
    let regions = mock::regions_box_office();
    let max_city_revenue = cities.first().map(|c| c.revenue_mln).unwrap_or(1.0);

    rsx! {
        section { class: "page page-geography",
            header { class: "page__header",
                div {
                    h1 { {t!("geography-title")} }
                    p { class: "page__subtitle", {t!("geography-subtitle")} }
                }
            }

            div { class: "stat-grid",
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Общие сборы" }
                    strong { class: "stat-card__value",
                        {format::format_millions(totals.revenue_bln)}
                        " млрд ₽"
                    }
                }
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Зрителей" }
                    strong { class: "stat-card__value",
                        {format::format_millions(totals.tickets_mln)}
                        " млн"
                    }
                }
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Кинотеатров" }
                    strong { class: "stat-card__value", {format::format_count(totals.cinemas as u64)} }
                }
                div { class: "card stat-card",
                    span { class: "stat-card__title", "Средний билет" }
                    strong { class: "stat-card__value", "{totals.avg_ticket} ₽" }
                }
            }

            section { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", {t!("geography-regions-title")} }
                }
                div { class: "region-shares",
                    for region in regions.iter() {
                        {
                            let color = region_color(&region.code);
                            rsx! {
                                div { key: "{region.code}", class: "region-shares__row",
                                    span {
                                        class: "region-swatch",
                                        style: "background-color: {color};",
                                    }
                                    span { class: "region-shares__code", "{region.code}" }
                                    div { class: "region-shares__track",
                                        div {
                                            class: "region-shares__bar",
                                            style: "width: {region.share_pct}%; background-color: {color};",
                                        }
                                    }
                                    span { class: "region-shares__value",
                                        "{region.share_pct}% · {format::format_count(region.revenue_mln)} млн"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "view-toggle",
                button {
                    r#type: "button",
                    class: if view_mode() == GeoView::Cities { "button button--primary" } else { "button button--ghost" },
                    onclick: move |_| view_mode.set(GeoView::Cities),
                    {t!("geography-by-cities")}
                }
                button {
                    r#type: "button",
                    class: if view_mode() == GeoView::Regions { "button button--primary" } else { "button button--ghost" },
                    onclick: move |_| view_mode.set(GeoView::Regions),
                    {t!("geography-by-regions")}
                }
            }

            if view_mode() == GeoView::Cities {
                section { class: "card",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!("geography-cities-title")} }
                        span { class: "badge", "Январь 2026" }
                    }
                    div { class: "geo-cities",
                        for (position, city) in cities.iter().enumerate() {
                            {
                                let width = city.revenue_mln / max_city_revenue * 100.0;
                                let region_badge_color = region_color(&city.region);
                                rsx! {
                                    div { key: "{city.city}", class: "geo-city",
                                        span { class: "geo-city__rank", "{position + 1}" }
                                        div { class: "geo-city__body",
                                            div { class: "geo-city__head",
                                                span { class: "geo-city__name", "{city.city}" }
                                                span {
                                                    class: "geo-city__region",
                                                    style: "color: {region_badge_color};",
                                                    "{city.region}"
                                                }
                                            }
                                            div { class: "geo-city__track",
                                                div {
                                                    class: "geo-city__bar",
                                                    style: "width: {width}%;",
                                                }
                                            }
                                        }
                                        div { class: "geo-city__col",
                                            strong { {format::format_millions(city.revenue_mln)} " млн" }
                                            span { {format::format_percent(city.share_pct / 100.0)} }
                                        }
                                        div { class: "geo-city__col",
                                            strong { "{city.viewers_k} тыс" }
                                            span { "зрителей" }
                                        }
                                        div { class: "geo-city__col",
                                            strong { "{city.avg_ticket} ₽" }
                                            span { "ср. билет" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                section { class: "card",
                    header { class: "card__header",
                        h2 { class: "card__title", "Федеральные округа" }
                        span { class: "badge", "Январь 2026" }
                    }
                    div { class: "data-table__scroll",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { class: "data-table__left", "Округ" }
                                    th { "Сборы (млн)" }
                                    th { "Доля" }
                                    th { "Зрители (тыс)" }
                                    th { "Кинотеатры" }
                                }
                            }
                            tbody {
                                for region in regions.iter() {
                                    tr { key: "{region.code}",
                                        td { class: "data-table__left",
                                            span {
                                                class: "region-swatch",
                                                style: "background-color: {region_color(&region.code)};",
                                            }
                                            " {region.full_name}"
                                        }
                                        td { class: "data-table__strong",
                                            {format::format_count(region.revenue_mln)}
                                        }
                                        td { "{region.share_pct}%" }
                                        td { {format::format_count(region.viewers_k)} }
                                        td { "{region.cinemas}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "card insights",
                header { class: "card__header",
                    h2 { class: "card__title", {t!("geography-insights-title")} }
                }
                p { class: "insights__item",
                    strong { "Москва и Санкт-Петербург" }
                    " дают свыше трети всех сборов при премиальных ценах (средний билет 610+ ₽)."
                }
                p { class: "insights__item",
                    strong { "Приволжье (ПФО)" }
                    " держит 14% сборов: Казань, Нижний Новгород, Самара и Уфа в топе городов."
                }
                p { class: "insights__item",
                    strong { "Регионы" }
                    " растут быстрее столиц: посещаемость заметно выше допандемийного уровня."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_districts_have_fixed_colors() {
        assert_eq!(region_color("ЦФО"), "#3b82f6");
        assert_eq!(region_color("ДФО"), "#84cc16");
    }

    #[test]
    fn unknown_district_falls_back_to_muted() {
        assert_eq!(region_color("ЛФО"), "#64748b");
    }

    #[test]
    fn every_mock_region_has_a_dedicated_color() {
        for region in mock::regions_box_office() {
            assert_ne!(region_color(&region.code), "#64748b", "{}", region.code);
        }
    }
}
