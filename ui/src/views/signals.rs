use dioxus::prelude::*;

use api::{Api, SignalQuery};

use crate::charts::signal_mix::signal_type_label;
use crate::components::signal_card::importance_label;
use crate::components::SignalCard;
use crate::t;

const PER_PAGE: u32 = 20;

/// Classifier types offered in the filter dropdown.
const SIGNAL_TYPES: [&str; 6] = [
    "review",
    "news",
    "box_office",
    "rating_change",
    "screening",
    "promotion",
];

const IMPORTANCE_LEVELS: [&str; 3] = ["critical", "notable", "minor"];

fn matches_filters(signal: &api::Signal, kind: &str, importance: &str) -> bool {
    (kind.is_empty() || signal.signal_type.as_deref() == Some(kind))
        && (importance.is_empty() || signal.importance.as_deref() == Some(importance))
}

/// Signal feed with type/importance filters and pagination.
#[component]
pub fn Signals() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut kind = use_signal(String::new);
    let mut importance = use_signal(String::new);
    let mut page = use_signal(|| 1u32);

    let signals_res = use_resource(move || {
        let query = SignalQuery {
            signal_type: {
                let k = kind();
                (!k.is_empty()).then_some(k)
            },
            importance: {
                let i = importance();
                (!i.is_empty()).then_some(i)
            },
            page: Some(page()),
            per_page: Some(PER_PAGE),
            ..Default::default()
        };
        async move { Api::default().signals(&query).await }
    });

    let (signals, total) = match &*signals_res.read() {
        Some(Ok(page)) => (page.signals.clone(), page.total),
        _ => {
            let (k, i) = (kind(), importance());
            let filtered: Vec<api::Signal> = crate::data::mock::signals()
                .into_iter()
                .filter(|s| matches_filters(s, &k, &i))
                .collect();
            let total = filtered.len() as u64;
            (filtered, total)
        }
    };
    let offline = matches!(&*signals_res.read(), Some(Err(_)));

    let current_page = page();
    let last_page = total.div_ceil(PER_PAGE as u64).max(1) as u32;

    rsx! {
        section { class: "page page-signals",
            header { class: "page__header",
                div {
                    h1 { {t!("signals-title")} }
                    p { class: "page__subtitle", {t!("signals-subtitle")} }
                }
            }

            if offline {
                p { class: "page__notice", {t!("common-offline")} }
            }

            div { class: "filters",
                label { class: "filters__select",
                    {t!("signals-filter-type-label")}
                    select {
                        value: "{kind()}",
                        oninput: move |evt| {
                            kind.set(evt.value());
                            page.set(1);
                        },
                        option { value: "", {t!("signals-filter-any")} }
                        for t in SIGNAL_TYPES {
                            option { key: "{t}", value: "{t}", {signal_type_label(t).to_string()} }
                        }
                    }
                }
                label { class: "filters__select",
                    {t!("signals-filter-importance-label")}
                    select {
                        value: "{importance()}",
                        oninput: move |evt| {
                            importance.set(evt.value());
                            page.set(1);
                        },
                        option { value: "", {t!("signals-filter-any")} }
                        for level in IMPORTANCE_LEVELS {
                            option { key: "{level}", value: "{level}", {importance_label(level).to_string()} }
                        }
                    }
                }
            }

            if signals.is_empty() {
                p { class: "card__placeholder", {t!("signals-empty")} }
            } else {
                div { class: "feed__items feed__items--page",
                    for signal in signals.iter() {
                        SignalCard { key: "{signal.id}", signal: signal.clone() }
                    }
                }
            }

            div { class: "pager",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: current_page <= 1,
                    onclick: move |_| page.set(current_page.saturating_sub(1).max(1)),
                    {t!("signals-prev")}
                }
                span { class: "pager__status", "{current_page} / {last_page}" }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: current_page >= last_page,
                    onclick: move |_| page.set(current_page + 1),
                    {t!("signals-next")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    #[test]
    fn empty_filters_match_everything() {
        let signals = mock::signals();
        assert!(signals.iter().all(|s| matches_filters(s, "", "")));
    }

    #[test]
    fn filters_compose() {
        let signals = mock::signals();
        let hits: Vec<_> = signals
            .iter()
            .filter(|s| matches_filters(s, "rating_change", "critical"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "sig-002");
    }
}
