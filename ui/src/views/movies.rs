use dioxus::prelude::*;

use api::{Api, Movie, MovieQuery};

use crate::core::format;
use crate::t;

/// Local filter used for the demo dataset so search and the featured toggle
/// keep working while the service is down.
fn matches_filters(movie: &Movie, search: &str, featured_only: bool) -> bool {
    if featured_only && !movie.is_featured {
        return false;
    }
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    movie.title.to_lowercase().contains(&needle)
        || movie
            .original_title
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains(&needle))
}

/// Tracked releases with search and a featured-only toggle.
#[component]
pub fn Movies() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut search = use_signal(String::new);
    let mut featured_only = use_signal(|| false);

    let movies_res = use_resource(move || {
        let query = MovieQuery {
            search: {
                let s = search();
                (!s.trim().is_empty()).then_some(s)
            },
            featured: featured_only(),
            per_page: Some(24),
            ..Default::default()
        };
        async move { Api::default().movies(&query).await }
    });

    let movies = match &*movies_res.read() {
        Some(Ok(page)) => page.movies.clone(),
        _ => {
            let (s, f) = (search(), featured_only());
            crate::data::mock::movies()
                .into_iter()
                .filter(|m| matches_filters(m, &s, f))
                .collect()
        }
    };
    let offline = matches!(&*movies_res.read(), Some(Err(_)));

    rsx! {
        section { class: "page page-movies",
            header { class: "page__header",
                div {
                    h1 { {t!("movies-title")} }
                    p { class: "page__subtitle", {t!("movies-subtitle")} }
                }
            }

            if offline {
                p { class: "page__notice", {t!("common-offline")} }
            }

            div { class: "filters",
                input {
                    class: "filters__search",
                    r#type: "search",
                    placeholder: t!("movies-search-placeholder"),
                    value: "{search()}",
                    oninput: move |evt| search.set(evt.value()),
                }
                label { class: "filters__toggle",
                    input {
                        r#type: "checkbox",
                        checked: featured_only(),
                        oninput: move |evt| featured_only.set(evt.checked()),
                    }
                    {t!("movies-featured-only")}
                }
            }

            if movies.is_empty() {
                p { class: "card__placeholder", {t!("movies-empty")} }
            } else {
                div { class: "movie-grid",
                    for movie in movies.iter() {
                        {
                            let rating = movie.kinopoisk_rating.map(format::format_rating);
                            let sentiment = movie
                                .sentiment_score
                                .map(format::format_percent);
                            let signals = format::format_count(movie.signals_count);
                            let reviews = format::format_count(movie.reviews_count);
                            rsx! {
                                article { key: "{movie.id}", class: "card movie-card",
                                    header { class: "movie-card__header",
                                        h3 { class: "movie-card__title",
                                            if movie.is_featured {
                                                span { class: "movie-card__star", "★ " }
                                            }
                                            "{movie.title}"
                                        }
                                        if let Some(age) = &movie.age_rating {
                                            span { class: "badge", "{age}" }
                                        }
                                    }
                                    div { class: "movie-card__meta",
                                        if let Some(date) = &movie.release_date {
                                            span { "📅 {date}" }
                                        }
                                        if let Some(distributor) = &movie.distributor_name {
                                            span { "{distributor}" }
                                        }
                                    }
                                    div { class: "movie-card__stats",
                                        if let Some(rating) = rating {
                                            span { class: "movie-card__stat", "КП {rating}" }
                                        }
                                        span { class: "movie-card__stat", "Сигналов: {signals}" }
                                        span { class: "movie-card__stat", "Отзывов: {reviews}" }
                                        if let Some(sentiment) = sentiment {
                                            span { class: "movie-card__stat", "Позитив: {sentiment}" }
                                        }
                                    }
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
    use crate::data::mock;

    #[test]
    fn search_matches_case_insensitively() {
        let movies = mock::movies();
        let hits: Vec<_> = movies
            .iter()
            .filter(|m| matches_filters(m, "финист", false))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "finist-pervyi-bogatyr");
    }

    #[test]
    fn featured_toggle_narrows_the_list() {
        let movies = mock::movies();
        let all = movies.iter().filter(|m| matches_filters(m, "", false)).count();
        let featured = movies.iter().filter(|m| matches_filters(m, "", true)).count();
        assert!(featured < all);
        assert!(featured >= 1);
    }
}
