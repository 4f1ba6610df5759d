use dioxus::prelude::*;

use crate::charts::signal_mix::signal_type_label;
use crate::core::format;

pub(crate) fn importance_label(importance: &str) -> &str {
    match importance {
        "critical" => "Критический",
        "notable" => "Заметный",
        "minor" => "Минорный",
        other => other,
    }
}

fn sentiment_glyph(sentiment: &str) -> &'static str {
    match sentiment {
        "positive" => "▲",
        "negative" => "▼",
        "mixed" => "◆",
        _ => "•",
    }
}

/// One signal in a feed: importance and type badges, title, movie/source
/// attribution and engagement counters. `compact` drops the summary line
/// for the dense overview lists.
#[component]
pub fn SignalCard(signal: api::Signal, compact: Option<bool>) -> Element {
    let compact = compact.unwrap_or(false);

    let importance = signal.importance.as_deref().unwrap_or("minor");
    let importance_class = format!("signal-card__importance--{importance}");
    let importance_text = importance_label(importance).to_string();
    let type_text = signal
        .signal_type
        .as_deref()
        .map(|t| signal_type_label(t).to_string());
    let sentiment = signal.sentiment.as_deref().unwrap_or("neutral");
    let sentiment_class = format!("signal-card__sentiment--{sentiment}");
    let glyph = sentiment_glyph(sentiment);

    let stamp = signal
        .published_at
        .as_deref()
        .unwrap_or(signal.created_at.as_str());
    let date_badge = format::format_date_badge(stamp);

    let views = signal.views_count.map(format::format_count);
    let likes = signal.likes_count.map(format::format_count);
    let comments = signal.comments_count.map(format::format_count);

    rsx! {
        article { class: if compact { "signal-card signal-card--compact" } else { "signal-card" },
            div { class: "signal-card__badges",
                span { class: "signal-card__importance {importance_class}", "{importance_text}" }
                if let Some(type_text) = type_text {
                    span { class: "signal-card__type", "{type_text}" }
                }
                span { class: "signal-card__sentiment {sentiment_class}", "{glyph}" }
                span { class: "signal-card__date", "{date_badge}" }
            }
            h3 { class: "signal-card__title",
                a { href: "{signal.source_url}", target: "_blank", rel: "noreferrer", "{signal.title}" }
            }
            if !compact {
                if let Some(summary) = &signal.summary {
                    p { class: "signal-card__summary", "{summary}" }
                }
            }
            div { class: "signal-card__meta",
                if let Some(movie) = &signal.movie_title {
                    span { class: "signal-card__movie", "🎬 {movie}" }
                }
                if let Some(source) = &signal.source_name {
                    span { class: "signal-card__source", "{source}" }
                }
                if let Some(views) = views {
                    span { class: "signal-card__counter", "👁 {views}" }
                }
                if let Some(likes) = likes {
                    span { class: "signal-card__counter", "♥ {likes}" }
                }
                if let Some(comments) = comments {
                    span { class: "signal-card__counter", "💬 {comments}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importance_labels_are_mapped() {
        assert_eq!(importance_label("critical"), "Критический");
        assert_eq!(importance_label("unheard_of"), "unheard_of");
    }
}
