use dioxus::prelude::*;

use crate::t;

/// Mood bucket for a 0..=100 positive-share reading.
pub(crate) fn mood_label(value: u8) -> &'static str {
    match value {
        0..=34 => "Негатив",
        35..=54 => "Смешанно",
        55..=74 => "Позитив",
        _ => "Восторг",
    }
}

fn mood_class(value: u8) -> &'static str {
    match value {
        0..=34 => "sentiment--negative",
        35..=54 => "sentiment--mixed",
        _ => "sentiment--positive",
    }
}

/// Share of positive sentiment across classified signals, as a simple meter
/// with an optional illustrative quote.
#[component]
pub fn SentimentGauge(value: u8, quote: Option<String>) -> Element {
    let value = value.min(100);
    let label = mood_label(value);
    let class = mood_class(value);

    rsx! {
        section { class: "card sentiment {class}",
            header { class: "card__header",
                h2 { class: "card__title", {t!("sentiment-title")} }
            }
            div { class: "sentiment__reading",
                strong { class: "sentiment__value", "{value}%" }
                span { class: "sentiment__mood", "{label}" }
            }
            div { class: "sentiment__meter",
                div { class: "sentiment__fill", style: "width: {value}%;" }
            }
            if let Some(quote) = quote {
                blockquote { class: "sentiment__quote", "«{quote}»" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_buckets_cover_the_scale() {
        assert_eq!(mood_label(0), "Негатив");
        assert_eq!(mood_label(40), "Смешанно");
        assert_eq!(mood_label(60), "Позитив");
        assert_eq!(mood_label(100), "Восторг");
    }
}
