#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (especially
  the box-office race and the signal feeds) remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) builds.

If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__notice",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".badge",
    // Stat cards
    ".stat-grid",
    ".stat-card__value",
    ".stat-card__trend--up",
    ".stat-card__trend--down",
    // Box-office race
    ".race__rank--leader",
    ".race__track",
    ".race__bar",
    ".race__value--inside",
    ".race__value--outside",
    ".race__segment--filled",
    ".race__stats",
    // Leaderboard & mix charts
    ".leaderboard__bar",
    ".leaderboard__rank",
    ".signal-mix__swatch",
    ".signal-mix__bar",
    // Sentiment meter
    ".sentiment__meter",
    ".sentiment__fill",
    ".sentiment--negative",
    ".sentiment--positive",
    // Signal feed
    ".signal-card",
    ".signal-card__importance--critical",
    ".signal-card__importance--notable",
    ".signal-card__sentiment--positive",
    // Movies page
    ".movie-grid",
    ".movie-card__stats",
    ".filters__search",
    ".pager",
    // Cinemas page
    ".data-table",
    ".chain-card__stats",
    ".distribution__segment",
    ".occupancy--high",
    // Geography page
    ".region-shares__bar",
    ".geo-city__bar",
    ".view-toggle",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
