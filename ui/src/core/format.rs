//! Formatting helpers for counters, money and timestamps shown on cards.

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Russian-style short month names for date badges.
const MONTHS_RU: [&str; 12] = [
    "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];

/// Group an integer count with thin spaces: `1234567` → `"1 234 567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(ch);
    }
    grouped
}

/// Money amounts in millions, decimal comma, one fraction digit when the
/// value is not whole: `103.0` → `"103"`, `41.25` → `"41,3"`.
pub fn format_millions(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = (value * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format_count(rounded.trunc().max(0.0) as u64)
    } else {
        format!("{rounded:.1}").replace('.', ",")
    }
}

/// Whole-percent display for a 0..=1 share; NaN renders as a dash.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "—".to_string();
    }
    format!("{:.0}%", fraction * 100.0)
}

/// Signed trend like `"+12%"` / `"−8%"` for the stat cards.
pub fn format_signed_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value >= 0.0 {
        format!("+{value:.0}%")
    } else {
        format!("−{:.0}%", value.abs())
    }
}

pub fn format_rating(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}")
    } else {
        "—".to_string()
    }
}

/// Compact badge like `"2 янв, 10:00"` from an RFC3339 timestamp. Falls back
/// to the raw date part when the timestamp doesn't parse.
pub fn format_date_badge(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(ts) => {
            let month = MONTHS_RU[ts.month() as usize - 1];
            format!("{} {month}, {:02}:{:02}", ts.day(), ts.hour(), ts.minute())
        }
        Err(_) => raw.split('T').next().unwrap_or(raw).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(983), "983");
        assert_eq!(format_count(1234), "1\u{202f}234");
        assert_eq!(format_count(1234567), "1\u{202f}234\u{202f}567");
    }

    #[test]
    fn millions_use_decimal_comma() {
        assert_eq!(format_millions(103.0), "103");
        assert_eq!(format_millions(41.25), "41,3");
        assert_eq!(format_millions(f64::NAN), "—");
    }

    #[test]
    fn signed_percent_keeps_sign() {
        assert_eq!(format_signed_percent(12.5), "+13%");
        assert_eq!(format_signed_percent(-8.0), "−8%");
    }

    #[test]
    fn date_badge_parses_rfc3339() {
        assert_eq!(format_date_badge("2026-01-02T10:05:00Z"), "2 янв, 10:05");
        assert_eq!(format_date_badge("2026-01-02"), "2026-01-02");
    }
}
