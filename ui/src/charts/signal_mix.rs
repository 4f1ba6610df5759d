use dioxus::prelude::*;

use crate::core::format;
use crate::t;

/// Palette for the per-type bars, cycled when there are more types.
const PALETTE: [&str; 6] = [
    "hsl(346, 77%, 50%)",
    "hsl(173, 58%, 39%)",
    "hsl(197, 37%, 44%)",
    "hsl(43, 74%, 56%)",
    "hsl(27, 87%, 57%)",
    "hsl(280, 65%, 60%)",
];

/// Human labels for the classifier's signal types; unknown types pass
/// through verbatim.
pub(crate) fn signal_type_label(kind: &str) -> &str {
    match kind {
        "review" => "Отзывы",
        "rating_change" => "Рейтинги",
        "screening" => "Сеансы",
        "news" => "Новости",
        "promotion" => "Реклама",
        "box_office" => "Сборы",
        other => other,
    }
}

/// Share of signals per type, rendered as labelled proportional bars.
#[component]
pub fn SignalMix(data: Vec<(String, u64)>) -> Element {
    let total: u64 = data.iter().map(|(_, v)| *v).sum();

    rsx! {
        section { class: "card signal-mix",
            header { class: "card__header",
                h2 { class: "card__title", {t!("signal-mix-title")} }
            }
            if total == 0 {
                p { class: "card__placeholder", {t!("common-no-data")} }
            } else {
                div { class: "signal-mix__rows",
                    for (index, (kind, value)) in data.iter().enumerate() {
                        {
                            let color = PALETTE[index % PALETTE.len()];
                            let share = *value as f64 / total as f64;
                            let width_pct = share * 100.0;
                            let label = signal_type_label(kind).to_string();
                            let share_text = format::format_percent(share);
                            rsx! {
                                div { key: "{kind}", class: "signal-mix__row",
                                    span { class: "signal-mix__swatch", style: "background-color: {color};" }
                                    span { class: "signal-mix__label", "{label}" }
                                    div { class: "signal-mix__track",
                                        div {
                                            class: "signal-mix__bar",
                                            style: "width: {width_pct}%; background-color: {color};",
                                        }
                                    }
                                    span { class: "signal-mix__share", "{share_text}" }
                                }
                            }
                        }
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
    fn known_types_get_russian_labels() {
        assert_eq!(signal_type_label("review"), "Отзывы");
        assert_eq!(signal_type_label("box_office"), "Сборы");
    }

    #[test]
    fn unknown_types_pass_through() {
        assert_eq!(signal_type_label("piracy"), "piracy");
    }
}
