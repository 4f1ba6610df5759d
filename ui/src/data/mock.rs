//! Static demo datasets shown while the collection service is unreachable.
//!
//! Figures are frozen snapshots of the 2026 New Year theatrical window, so
//! the dashboard stays meaningful offline; they are never merged with live
//! data.

use api::{Movie, OverviewStats, Signal};

use crate::charts::RaceSeries;

/// Daily grosses (millions of rubles) for the holiday box-office race.
pub fn race_dataset() -> (Vec<RaceSeries>, Vec<String>) {
    let movies = vec![
        RaceSeries::new(
            "Волшебник Изумрудного города",
            "#e11d48",
            vec![312.0, 448.0, 395.0, 361.0, 330.0, 287.0, 243.0, 198.0],
        ),
        RaceSeries::new(
            "Финист. Первый богатырь",
            "#0d9488",
            vec![276.0, 402.0, 384.0, 352.0, 319.0, 274.0, 231.0, 187.0],
        ),
        RaceSeries::new(
            "Домовёнок Кузя",
            "#7c3aed",
            vec![148.0, 211.0, 196.0, 178.0, 154.0, 129.0, 104.0, 82.0],
        ),
        RaceSeries::new(
            "Небриллиантовая рука",
            "#d97706",
            vec![96.0, 142.0, 131.0, 117.0, 101.0, 84.0, 66.0, 51.0],
        ),
        RaceSeries::new(
            "Ёлки 12",
            "#2563eb",
            vec![74.0, 108.0, 97.0, 86.0, 72.0, 59.0, 45.0, 33.0],
        ),
    ];
    let days = (1..=8).map(|d| format!("{d} янв")).collect();
    (movies, days)
}

pub fn overview_stats() -> OverviewStats {
    OverviewStats {
        signals_24h: 142,
        signals_7d: 983,
        critical_count: 7,
        notable_count: 54,
        by_movie: [
            ("Волшебник Изумрудного города", 241),
            ("Финист. Первый богатырь", 198),
            ("Домовёнок Кузя", 116),
            ("Небриллиантовая рука", 87),
            ("Ёлки 12", 63),
            ("Злой город", 41),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect(),
        by_type: [
            ("review", 412),
            ("news", 218),
            ("box_office", 154),
            ("rating_change", 97),
            ("screening", 64),
            ("promotion", 38),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect(),
        by_sentiment: [("positive", 486), ("neutral", 301), ("negative", 143), ("mixed", 53)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        trend_vs_previous: 12.5,
    }
}

/// Positive share (0..=100) derived from the sentiment split.
pub fn positive_share(stats: &OverviewStats) -> u8 {
    let positive = *stats.by_sentiment.get("positive").unwrap_or(&0) as f64;
    let total: u64 = stats.by_sentiment.values().sum();
    if total == 0 {
        return 50;
    }
    (positive / total as f64 * 100.0).round() as u8
}

pub fn sentiment_quote() -> String {
    "Семейные франшизы снова вытащили новогодний прокат".to_string()
}

pub fn signals() -> Vec<Signal> {
    vec![
        signal(
            "sig-001",
            "Сборы «Волшебника» превысили 2 млрд за праздники",
            "box_office",
            "critical",
            "positive",
            Some("Волшебник Изумрудного города"),
            "Бюллетень кинопрокатчика",
            "2026-01-08T09:30:00Z",
            Some(48200),
            Some(1520),
        ),
        signal(
            "sig-002",
            "Рейтинг «Финиста» на Кинопоиске упал ниже 7.0",
            "rating_change",
            "critical",
            "negative",
            Some("Финист. Первый богатырь"),
            "Кинопоиск",
            "2026-01-07T18:12:00Z",
            Some(31400),
            Some(890),
        ),
        signal(
            "sig-003",
            "Сети увеличивают число сеансов «Домовёнка Кузи»",
            "screening",
            "notable",
            "positive",
            Some("Домовёнок Кузя"),
            "Афиша",
            "2026-01-07T11:05:00Z",
            Some(12700),
            Some(344),
        ),
        signal(
            "sig-004",
            "Волна отзывов о «Небриллиантовой руке»: зрители разделились",
            "review",
            "notable",
            "mixed",
            Some("Небриллиантовая рука"),
            "Отзовик",
            "2026-01-06T20:40:00Z",
            Some(9800),
            Some(412),
        ),
        signal(
            "sig-005",
            "Прокатчики подводят итоги каникул: рост к прошлому году",
            "news",
            "minor",
            "neutral",
            None,
            "Интерфакс",
            "2026-01-06T08:15:00Z",
            Some(5600),
            Some(120),
        ),
    ]
}

pub fn movies() -> Vec<Movie> {
    vec![
        movie(
            "mov-001",
            "Волшебник Изумрудного города",
            "volshebnik-izumrudnogo-goroda",
            "2025-12-18",
            Some(8.1),
            241,
            128,
            Some(0.72),
            true,
            "Централ Партнершип",
        ),
        movie(
            "mov-002",
            "Финист. Первый богатырь",
            "finist-pervyi-bogatyr",
            "2026-01-01",
            Some(6.9),
            198,
            104,
            Some(0.55),
            true,
            "НМГ Кинопрокат",
        ),
        movie(
            "mov-003",
            "Домовёнок Кузя",
            "domovyonok-kuzya",
            "2025-12-25",
            Some(7.4),
            116,
            67,
            Some(0.64),
            false,
            "Атмосфера кино",
        ),
        movie(
            "mov-004",
            "Небриллиантовая рука",
            "nebrilliantovaya-ruka",
            "2026-01-01",
            Some(6.2),
            87,
            51,
            Some(0.41),
            false,
            "Каро Прокат",
        ),
    ]
}

/// One cinema chain with its holiday-window screening stats.
#[derive(Debug, Clone, PartialEq)]
pub struct CinemaChain {
    pub name: String,
    pub logo: String,
    pub cinemas: u32,
    pub screens: u32,
    pub cities: u32,
    pub imax: u32,
    pub dolby_atmos: u32,
    pub screenings_total: u64,
    /// Screenings per tracked top release, dataset order fixed; the
    /// remainder up to `screenings_total` is "other" repertoire.
    pub screenings_by_movie: Vec<(String, u64)>,
    pub avg_occupancy: u8,
    pub avg_ticket_price: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityBoxOffice {
    pub city: String,
    pub region: String,
    pub revenue_mln: f64,
    pub share_pct: f64,
    pub viewers_k: u64,
    pub cinemas: u32,
    pub avg_ticket: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionBoxOffice {
    pub code: String,
    pub full_name: String,
    pub revenue_mln: u64,
    pub share_pct: u8,
    pub viewers_k: u64,
    pub cinemas: u32,
}

/// Country-wide totals for the holiday window.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketTotals {
    pub revenue_bln: f64,
    pub tickets_mln: f64,
    pub cinemas: u32,
    pub avg_ticket: u32,
}

pub fn market_totals() -> MarketTotals {
    MarketTotals {
        revenue_bln: 11.4,
        tickets_mln: 26.3,
        cinemas: 2260,
        avg_ticket: 434,
    }
}

pub fn cinema_chains() -> Vec<CinemaChain> {
    vec![
        chain("Синема Парк", "🎟", 78, 621, 37, 14, 9, 41_200, [14_100, 11_900, 6_300], 66, 540),
        chain("Каро", "🎬", 34, 289, 12, 8, 12, 21_400, [7_600, 6_100, 3_200], 72, 560),
        chain("Киномакс", "📽", 42, 318, 28, 5, 3, 19_700, [6_500, 5_600, 3_100], 63, 480),
        chain("Формула Кино", "🍿", 29, 233, 9, 4, 6, 16_800, [5_800, 4_900, 2_500], 70, 530),
        chain("Мираж Синема", "✨", 21, 174, 11, 2, 2, 11_600, [3_900, 3_400, 1_800], 64, 470),
        chain("Люксор", "🎫", 23, 162, 14, 0, 0, 10_900, [3_600, 3_100, 1_700], 58, 450),
    ]
}

/// Top cities of the holiday window, sorted descending by revenue.
pub fn cities_box_office() -> Vec<CityBoxOffice> {
    vec![
        city("Москва", "ЦФО", 2840.0, 24.9, 5900, 180, 650),
        city("Санкт-Петербург", "СЗФО", 1180.0, 10.4, 2600, 96, 610),
        city("Казань", "ПФО", 342.0, 3.0, 810, 34, 470),
        city("Екатеринбург", "УрФО", 318.0, 2.8, 760, 31, 490),
        city("Новосибирск", "СФО", 296.0, 2.6, 720, 29, 460),
        city("Краснодар", "ЮФО", 264.0, 2.3, 640, 26, 450),
        city("Нижний Новгород", "ПФО", 241.0, 2.1, 590, 24, 440),
        city("Самара", "ПФО", 218.0, 1.9, 540, 22, 430),
        city("Ростов-на-Дону", "ЮФО", 205.0, 1.8, 510, 21, 440),
        city("Уфа", "ПФО", 193.0, 1.7, 480, 20, 420),
    ]
}

/// Federal districts; shares sum to 100.
pub fn regions_box_office() -> Vec<RegionBoxOffice> {
    vec![
        region("ЦФО", "Центральный", 3990, 35, 8200, 520),
        region("ПФО", "Приволжский", 1596, 14, 3900, 380),
        region("СЗФО", "Северо-Западный", 1482, 13, 3300, 260),
        region("ЮФО", "Южный", 1254, 11, 3100, 290),
        region("СФО", "Сибирский", 1140, 10, 2800, 260),
        region("УрФО", "Уральский", 1026, 9, 2400, 210),
        region("ДФО", "Дальневосточный", 570, 5, 1400, 150),
        region("СКФО", "Северо-Кавказский", 342, 3, 900, 90),
    ]
}

#[allow(clippy::too_many_arguments)]
fn chain(
    name: &str,
    logo: &str,
    cinemas: u32,
    screens: u32,
    cities: u32,
    imax: u32,
    dolby_atmos: u32,
    screenings_total: u64,
    top_screenings: [u64; 3],
    avg_occupancy: u8,
    avg_ticket_price: u32,
) -> CinemaChain {
    let titles = [
        "Волшебник Изумрудного города",
        "Финист. Первый богатырь",
        "Домовёнок Кузя",
    ];
    CinemaChain {
        name: name.to_string(),
        logo: logo.to_string(),
        cinemas,
        screens,
        cities,
        imax,
        dolby_atmos,
        screenings_total,
        screenings_by_movie: titles
            .iter()
            .zip(top_screenings)
            .map(|(t, n)| (t.to_string(), n))
            .collect(),
        avg_occupancy,
        avg_ticket_price,
    }
}

fn city(
    name: &str,
    region: &str,
    revenue_mln: f64,
    share_pct: f64,
    viewers_k: u64,
    cinemas: u32,
    avg_ticket: u32,
) -> CityBoxOffice {
    CityBoxOffice {
        city: name.to_string(),
        region: region.to_string(),
        revenue_mln,
        share_pct,
        viewers_k,
        cinemas,
        avg_ticket,
    }
}

fn region(
    code: &str,
    full_name: &str,
    revenue_mln: u64,
    share_pct: u8,
    viewers_k: u64,
    cinemas: u32,
) -> RegionBoxOffice {
    RegionBoxOffice {
        code: code.to_string(),
        full_name: format!("{full_name} ФО"),
        revenue_mln,
        share_pct,
        viewers_k,
        cinemas,
    }
}

#[allow(clippy::too_many_arguments)]
fn signal(
    id: &str,
    title: &str,
    signal_type: &str,
    importance: &str,
    sentiment: &str,
    movie_title: Option<&str>,
    source_name: &str,
    published_at: &str,
    views: Option<u64>,
    likes: Option<u64>,
) -> Signal {
    Signal {
        id: id.to_string(),
        external_id: format!("demo-{id}"),
        title: title.to_string(),
        content: None,
        summary: None,
        source_url: format!("https://demo.kinopulse.ru/{id}"),
        image_url: None,
        author: None,
        signal_type: Some(signal_type.to_string()),
        importance: Some(importance.to_string()),
        sentiment: Some(sentiment.to_string()),
        sentiment_score: None,
        rating: None,
        platform_rating: None,
        views_count: views,
        likes_count: likes,
        comments_count: None,
        shares_count: None,
        published_at: Some(published_at.to_string()),
        created_at: published_at.to_string(),
        is_classified: true,
        is_published: true,
        is_featured: importance == "critical",
        movie_title: movie_title.map(str::to_string),
        source_name: Some(source_name.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    title: &str,
    slug: &str,
    release_date: &str,
    kinopoisk_rating: Option<f64>,
    signals_count: u64,
    reviews_count: u64,
    sentiment_score: Option<f64>,
    is_featured: bool,
    distributor: &str,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        original_title: None,
        slug: slug.to_string(),
        description: None,
        poster_url: None,
        release_date: Some(release_date.to_string()),
        year: Some(2026),
        runtime_minutes: None,
        age_rating: Some("6+".to_string()),
        kinopoisk_rating,
        kinopoisk_votes: None,
        imdb_rating: None,
        signals_count,
        reviews_count,
        sentiment_score,
        total_screenings: signals_count * 180,
        avg_occupancy: None,
        is_active: true,
        is_featured,
        distributor_name: Some(distributor.to_string()),
        created_at: "2025-12-01T00:00:00Z".to_string(),
        updated_at: "2026-01-08T00:00:00Z".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_dataset_is_consistent() {
        let (movies, days) = race_dataset();
        assert!(!movies.is_empty());
        for series in &movies {
            assert_eq!(series.values.len(), days.len(), "{}", series.name);
        }
    }

    #[test]
    fn positive_share_is_a_percentage() {
        let share = positive_share(&overview_stats());
        assert!(share <= 100);
        // 486 of 983 classified signals.
        assert_eq!(share, 49);
    }

    #[test]
    fn chain_screenings_split_fits_the_total() {
        for chain in cinema_chains() {
            let tracked: u64 = chain.screenings_by_movie.iter().map(|(_, n)| n).sum();
            assert!(
                tracked <= chain.screenings_total,
                "{}: tracked screenings exceed the total",
                chain.name
            );
        }
    }

    #[test]
    fn region_shares_sum_to_one_hundred() {
        let total: u32 = regions_box_office().iter().map(|r| r.share_pct as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn cities_are_sorted_by_revenue() {
        let cities = cities_box_office();
        for pair in cities.windows(2) {
            assert!(pair[0].revenue_mln >= pair[1].revenue_mln);
        }
    }
}
