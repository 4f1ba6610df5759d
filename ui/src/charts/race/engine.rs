//! State machine behind the animated box-office race.
//!
//! The engine owns a fixed per-day revenue series for each movie and a
//! pointer into the shared timeline. Everything the view shows (cumulative
//! totals, rank order, leader gap) is recomputed from `(series,
//! current_period)` on every read, never cached across a pointer move. The
//! timer that drives automatic playback lives in the view; the engine only
//! exposes the `run_id` generation the view stamps into scheduled ticks so
//! stale wakeups can be discarded.

use std::cmp::Ordering;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RaceDataError {
    #[error("race needs at least one period label")]
    EmptyTimeline,
    #[error("series `{name}` has {actual} values, timeline has {expected}")]
    SeriesLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// One tracked movie: a label, a display color token and one revenue delta
/// per day of the shared timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl RaceSeries {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

/// A row of the ranked table at the current period.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub name: String,
    pub color: String,
    pub cumulative: f64,
    /// Share of the full-run maximum total, `0.0` for an all-zero dataset.
    /// Raw value; any minimum visible bar width is the view's business.
    pub fraction: f64,
}

/// Headline numbers for the summary strip under the race.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceSummary {
    pub leader: Option<Standing>,
    pub gap: f64,
    pub period_ordinal: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacePhase {
    Idle,
    Playing,
    Paused,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceEngine {
    series: Vec<RaceSeries>,
    period_labels: Vec<String>,
    /// Max full-run cumulative total across all series; fixed per dataset so
    /// bar widths are scaled against the final frame, not per-frame maxima.
    max_total: f64,
    current_period: usize,
    is_playing: bool,
    has_started: bool,
    run_id: u64,
}

impl RaceEngine {
    /// Builds an engine over a validated dataset. Every series must cover
    /// exactly one value per period label; an empty timeline or a length
    /// mismatch is rejected rather than silently truncated.
    pub fn new(
        series: Vec<RaceSeries>,
        period_labels: Vec<String>,
    ) -> Result<Self, RaceDataError> {
        if period_labels.is_empty() {
            return Err(RaceDataError::EmptyTimeline);
        }
        for s in &series {
            if s.values.len() != period_labels.len() {
                return Err(RaceDataError::SeriesLengthMismatch {
                    name: s.name.clone(),
                    expected: period_labels.len(),
                    actual: s.values.len(),
                });
            }
        }

        let max_total = series
            .iter()
            .map(|s| s.values.iter().sum::<f64>())
            .fold(0.0_f64, f64::max);

        Ok(Self {
            series,
            period_labels,
            max_total,
            current_period: 0,
            is_playing: false,
            has_started: false,
            run_id: 0,
        })
    }

    pub fn period_count(&self) -> usize {
        self.period_labels.len()
    }

    pub fn period_labels(&self) -> &[String] {
        &self.period_labels
    }

    pub fn current_period(&self) -> usize {
        self.current_period
    }

    pub fn current_label(&self) -> &str {
        &self.period_labels[self.current_period]
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Timer generation: a scheduled tick is only honored while the engine
    /// is still playing *and* still in the generation it was scheduled for.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn phase(&self) -> RacePhase {
        if self.is_playing {
            RacePhase::Playing
        } else if !self.has_started {
            RacePhase::Idle
        } else if self.current_period + 1 == self.period_count() {
            RacePhase::Finished
        } else {
            RacePhase::Paused
        }
    }

    /// Starts (or resumes) playback. A first-ever start rewinds to period 0.
    /// A start after the race has finished does not rewind: the next tick
    /// stops playback again, so pressing play at the end is a visible no-op
    /// until `reset`.
    pub fn play(&mut self) {
        if !self.has_started {
            self.has_started = true;
            self.current_period = 0;
        }
        if !self.is_playing {
            self.is_playing = true;
            self.run_id += 1;
        }
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the untouched initial state.
    pub fn reset(&mut self) {
        self.current_period = 0;
        self.is_playing = false;
        self.has_started = false;
    }

    /// Jump to a specific day. Scrubbing always pauses playback. The
    /// timeline control only produces valid indices; anything out of range
    /// is clamped to the last period as a guard, not an API.
    pub fn seek(&mut self, period: usize) {
        self.current_period = period.min(self.period_count() - 1);
        self.has_started = true;
        self.is_playing = false;
    }

    /// One automatic advance. No-op while paused; stops (without wrapping)
    /// once the pointer is at the last period.
    pub fn tick(&mut self) {
        if !self.is_playing {
            return;
        }
        if self.current_period + 1 < self.period_count() {
            self.current_period += 1;
        }
        if self.current_period + 1 == self.period_count() {
            self.is_playing = false;
        }
    }

    /// Running total for one series through the current period, inclusive.
    fn cumulative(&self, series: &RaceSeries) -> f64 {
        series.values[..=self.current_period].iter().sum()
    }

    /// Ranked rows for the current period: descending by cumulative total,
    /// ties keep the dataset order (stable sort).
    pub fn standings(&self) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .series
            .iter()
            .map(|s| {
                let cumulative = self.cumulative(s);
                let fraction = if self.max_total > 0.0 {
                    cumulative / self.max_total
                } else {
                    0.0
                };
                Standing {
                    name: s.name.clone(),
                    color: s.color.clone(),
                    cumulative,
                    fraction,
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            b.cumulative
                .partial_cmp(&a.cumulative)
                .unwrap_or(Ordering::Equal)
        });
        rows
    }

    /// Leader, runner-up gap and 1-based day ordinal for the summary strip.
    /// With fewer than two series the gap is 0; with none there is no leader.
    pub fn summary(&self) -> RaceSummary {
        let standings = self.standings();
        let gap = match standings.as_slice() {
            [first, second, ..] => first.cumulative - second.cumulative,
            _ => 0.0,
        };
        RaceSummary {
            leader: standings.first().cloned(),
            gap,
            period_ordinal: self.current_period + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday_race() -> RaceEngine {
        // Three movies with known daily grosses; C overtakes on day two.
        RaceEngine::new(
            vec![
                RaceSeries::new("A", "#e11d48", vec![100.0, 50.0, 30.0]),
                RaceSeries::new("B", "#0d9488", vec![20.0, 20.0, 20.0]),
                RaceSeries::new("C", "#7c3aed", vec![0.0, 200.0, 0.0]),
            ],
            vec!["d1".into(), "d2".into(), "d3".into()],
        )
        .expect("valid dataset")
    }

    #[test]
    fn construction_rejects_length_mismatch() {
        let err = RaceEngine::new(
            vec![RaceSeries::new("A", "#fff", vec![1.0, 2.0])],
            vec!["d1".into(), "d2".into(), "d3".into()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RaceDataError::SeriesLengthMismatch {
                name: "A".into(),
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn construction_rejects_empty_timeline() {
        let err = RaceEngine::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, RaceDataError::EmptyTimeline);
    }

    #[test]
    fn ranking_follows_cumulative_totals() {
        let mut race = holiday_race();

        let names: Vec<_> = race.standings().iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, ["A", "B", "C"]);

        race.seek(1);
        let rows = race.standings();
        let names: Vec<_> = rows.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(rows[0].cumulative, 200.0);
        assert_eq!(rows[1].cumulative, 150.0);
        assert_eq!(rows[2].cumulative, 40.0);
        assert_eq!(race.summary().gap, 50.0);

        race.seek(2);
        let rows = race.standings();
        let names: Vec<_> = rows.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(rows[1].cumulative, 180.0);
        assert_eq!(rows[2].cumulative, 60.0);
    }

    #[test]
    fn cumulative_totals_are_monotonic_for_non_negative_values() {
        let mut race = holiday_race();
        let mut previous = vec![f64::MIN; 3];
        for day in 0..race.period_count() {
            race.seek(day);
            let mut rows = race.standings();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            for (row, prev) in rows.iter().zip(previous.iter_mut()) {
                assert!(row.cumulative >= *prev, "{} regressed on day {day}", row.name);
                *prev = row.cumulative;
            }
        }
    }

    #[test]
    fn ties_keep_dataset_order() {
        let race = RaceEngine::new(
            vec![
                RaceSeries::new("First", "#111", vec![10.0]),
                RaceSeries::new("Second", "#222", vec![10.0]),
                RaceSeries::new("Third", "#333", vec![10.0]),
            ],
            vec!["d1".into()],
        )
        .expect("valid dataset");
        let names: Vec<_> = race.standings().iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn play_then_ticks_reach_the_end_and_stop() {
        let mut race = holiday_race();
        assert_eq!(race.phase(), RacePhase::Idle);

        race.play();
        assert_eq!(race.phase(), RacePhase::Playing);
        assert_eq!(race.current_period(), 0);

        race.tick();
        assert_eq!(race.current_period(), 1);
        assert!(race.is_playing());

        race.tick();
        assert_eq!(race.current_period(), 2);
        assert!(!race.is_playing());
        assert_eq!(race.phase(), RacePhase::Finished);

        // Idempotent once finished.
        race.tick();
        assert_eq!(race.current_period(), 2);
        assert!(!race.is_playing());
    }

    #[test]
    fn play_at_finish_is_a_visible_noop() {
        let mut race = holiday_race();
        race.play();
        race.tick();
        race.tick();
        assert_eq!(race.phase(), RacePhase::Finished);

        // No auto-rewind: the pointer stays put and the first tick stops
        // playback again without advancing.
        race.play();
        assert!(race.is_playing());
        assert_eq!(race.current_period(), 2);
        race.tick();
        assert_eq!(race.current_period(), 2);
        assert!(!race.is_playing());
    }

    #[test]
    fn seek_pauses_playback() {
        let mut race = holiday_race();
        race.play();
        race.seek(1);
        assert!(!race.is_playing());
        assert!(race.has_started());
        assert_eq!(race.current_period(), 1);
        assert_eq!(race.phase(), RacePhase::Paused);
    }

    #[test]
    fn seek_clamps_out_of_range_indices() {
        let mut race = holiday_race();
        race.seek(99);
        assert_eq!(race.current_period(), 2);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut race = holiday_race();
        race.play();
        race.tick();
        race.reset();
        let once = race.clone();
        race.reset();
        assert_eq!(race, once);
        assert_eq!(race.phase(), RacePhase::Idle);
        assert_eq!(race.current_period(), 0);
    }

    #[test]
    fn pause_keeps_position() {
        let mut race = holiday_race();
        race.play();
        race.tick();
        race.pause();
        assert_eq!(race.current_period(), 1);
        assert!(race.has_started());
        assert_eq!(race.phase(), RacePhase::Paused);
    }

    #[test]
    fn run_id_bumps_only_on_entering_playback() {
        let mut race = holiday_race();
        let initial = race.run_id();

        race.play();
        let first = race.run_id();
        assert_eq!(first, initial + 1);

        // Redundant play while already playing must not spawn a new chain.
        race.play();
        assert_eq!(race.run_id(), first);

        race.pause();
        assert_eq!(race.run_id(), first);
        race.play();
        assert_eq!(race.run_id(), first + 1);
    }

    #[test]
    fn empty_race_has_no_leader_and_zero_gap() {
        let race = RaceEngine::new(vec![], vec!["d1".into()]).expect("valid dataset");
        assert!(race.is_empty());
        assert!(race.standings().is_empty());
        let summary = race.summary();
        assert!(summary.leader.is_none());
        assert_eq!(summary.gap, 0.0);
        assert_eq!(summary.period_ordinal, 1);
    }

    #[test]
    fn single_series_has_zero_gap() {
        let race = RaceEngine::new(
            vec![RaceSeries::new("Solo", "#000", vec![5.0, 5.0])],
            vec!["d1".into(), "d2".into()],
        )
        .expect("valid dataset");
        let summary = race.summary();
        assert_eq!(summary.gap, 0.0);
        assert_eq!(summary.leader.as_ref().map(|l| l.name.as_str()), Some("Solo"));
    }

    #[test]
    fn all_zero_dataset_defines_fractions_as_zero() {
        let race = RaceEngine::new(
            vec![
                RaceSeries::new("A", "#111", vec![0.0, 0.0]),
                RaceSeries::new("B", "#222", vec![0.0, 0.0]),
            ],
            vec!["d1".into(), "d2".into()],
        )
        .expect("valid dataset");
        for row in race.standings() {
            assert_eq!(row.fraction, 0.0);
        }
    }

    #[test]
    fn fractions_scale_against_the_final_maximum() {
        let mut race = holiday_race();
        // Full-run max total is A's 180 vs C's 200 vs B's 60 → 200.
        race.seek(0);
        let rows = race.standings();
        let a = rows.iter().find(|r| r.name == "A").expect("A present");
        assert!((a.fraction - 0.5).abs() < 1e-9);
    }
}
