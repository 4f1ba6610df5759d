use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{format, platform, timing};
use crate::t;

use super::engine::{RaceDataError, RaceEngine, RacePhase, RaceSeries};

/// Cadence of automatic playback, one day per tick.
const TICK_INTERVAL_MS: u64 = 800;

/// Display-only floor so trailing movies stay visible; ranking and values
/// are untouched by it.
const MIN_BAR_WIDTH_PCT: f64 = 5.0;

#[derive(Debug, Clone)]
enum RaceEvent {
    TogglePlay,
    Reset,
    Seek(usize),
    Tick { run_id: u64 },
}

/// Animated ranked bar race over a fixed daily revenue timeline.
///
/// Playback is driven by one tick chain: entering play schedules a wakeup
/// stamped with the engine's current `run_id`; a wakeup whose generation or
/// playing flag no longer matches is dropped, so pause, reset, scrubbing,
/// finishing and unmount all retire the chain without a second timer ever
/// running.
#[component]
pub fn MovieRace(
    movies: Vec<RaceSeries>,
    days: Vec<String>,
    title: Option<String>,
    unit: Option<String>,
) -> Element {
    let engine = use_signal(move || RaceEngine::new(movies, days));

    let sender_slot: Rc<RefCell<Option<UnboundedSender<RaceEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let engine_ref = engine.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<RaceEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut engine_signal = engine_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    let next_wakeup = engine_signal.with_mut(|race| {
                        race.as_mut()
                            .ok()
                            .and_then(|race| apply_event(race, &event))
                    });
                    if let Some(run_id) = next_wakeup {
                        queue_tick(sender_slot.clone(), run_id);
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = {
        let coroutine = coroutine.clone();
        move |event: RaceEvent| {
            coroutine.send(event);
        }
    };

    let race = engine();
    let heading = title.unwrap_or_else(|| t!("race-default-title"));
    let unit = unit.unwrap_or_else(|| "млн ₽".to_string());

    let race = match race {
        Ok(race) => race,
        Err(err) => return render_invalid(&heading, &err),
    };

    if race.is_empty() {
        return rsx! {
            section { class: "card race race--empty",
                header { class: "race__header",
                    h2 { class: "race__title", "{heading}" }
                }
                p { class: "card__placeholder", {t!("race-empty")} }
            }
        };
    }

    let phase = race.phase();
    let phase_class = match phase {
        RacePhase::Playing => "race--playing",
        RacePhase::Finished => "race--finished",
        RacePhase::Idle | RacePhase::Paused => "",
    };
    let play_label = if race.is_playing() {
        t!("race-pause")
    } else {
        t!("race-play")
    };
    let play_glyph = if race.is_playing() { "❚❚" } else { "▶" };

    let standings = race.standings();
    let summary = race.summary();
    let current_day = race.current_period();
    let day_labels: Vec<String> = race.period_labels().to_vec();
    let first_label = day_labels.first().cloned().unwrap_or_default();
    let last_label = day_labels.last().cloned().unwrap_or_default();
    let current_label = race.current_label().to_string();

    let send_toggle = send_event.clone();
    let send_reset = send_event.clone();

    rsx! {
        section { class: "card race {phase_class}",
            header { class: "race__header",
                h2 { class: "race__title", "🏆 {heading}" }
                div { class: "race__controls",
                    span { class: "badge", "{current_label}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost race__play",
                        title: "{play_label}",
                        aria_label: "{play_label}",
                        onclick: move |_| send_toggle(RaceEvent::TogglePlay),
                        "{play_glyph}"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost race__reset",
                        title: t!("race-reset"),
                        onclick: move |_| send_reset(RaceEvent::Reset),
                        "↺"
                    }
                }
            }

            div { class: "race__bars",
                for (position, row) in standings.iter().enumerate() {
                    {
                        let width_pct = (row.fraction * 100.0).max(MIN_BAR_WIDTH_PCT);
                        let value_inside = row.fraction * 100.0 > 20.0;
                        let value_text = format::format_millions(row.cumulative);
                        let rank_class = if position == 0 {
                            "race__rank race__rank--leader"
                        } else {
                            "race__rank"
                        };
                        rsx! {
                            div { key: "{row.name}", class: "race__row",
                                div { class: "{rank_class}", "{position + 1}" }
                                div { class: "race__name", "{row.name}" }
                                div { class: "race__track",
                                    div {
                                        class: "race__bar",
                                        style: "width: {width_pct}%; background-color: {row.color};",
                                        if value_inside {
                                            span { class: "race__value race__value--inside", "{value_text}" }
                                        }
                                    }
                                    if !value_inside {
                                        span {
                                            class: "race__value race__value--outside",
                                            style: "color: {row.color};",
                                            "{value_text}"
                                        }
                                    }
                                }
                                div { class: "race__unit", "{unit}" }
                            }
                        }
                    }
                }
            }

            div { class: "race__timeline",
                div { class: "race__timeline-track",
                    for (index, day) in day_labels.iter().enumerate() {
                        {
                            let send_seek = send_event.clone();
                            let segment_class = if index <= current_day {
                                "race__segment race__segment--filled"
                            } else {
                                "race__segment"
                            };
                            rsx! {
                                button {
                                    key: "{day}",
                                    r#type: "button",
                                    class: "{segment_class}",
                                    title: "{day}",
                                    onclick: move |_| send_seek(RaceEvent::Seek(index)),
                                }
                            }
                        }
                    }
                }
                div { class: "race__timeline-labels",
                    span { "{first_label}" }
                    span { "{last_label}" }
                }
            }

            div { class: "race__stats",
                div { class: "race__stat",
                    if let Some(leader) = &summary.leader {
                        strong { class: "race__stat-value", style: "color: {leader.color};", "{leader.name}" }
                    } else {
                        strong { class: "race__stat-value", "—" }
                    }
                    span { class: "race__stat-label", {t!("race-leader")} }
                }
                div { class: "race__stat",
                    strong { class: "race__stat-value", {format::format_millions(summary.gap)} }
                    span { class: "race__stat-label", {t!("race-gap")} " ({unit})" }
                }
                div { class: "race__stat",
                    strong { class: "race__stat-value", "{summary.period_ordinal}" }
                    span { class: "race__stat-label", {t!("race-day")} }
                }
            }
        }
    }
}

fn render_invalid(heading: &str, err: &RaceDataError) -> Element {
    rsx! {
        section { class: "card race race--invalid",
            header { class: "race__header",
                h2 { class: "race__title", "{heading}" }
            }
            p { class: "card__error", "⚠️ {err}" }
        }
    }
}

/// Applies one playback event to the engine. Returns `Some(run_id)` when a
/// wakeup should be scheduled: entering play starts a tick chain, and a tick
/// that leaves the engine playing continues it. A tick stamped with a stale
/// generation, or arriving while paused, is discarded without touching the
/// engine.
fn apply_event(race: &mut RaceEngine, event: &RaceEvent) -> Option<u64> {
    match event {
        RaceEvent::TogglePlay => {
            let was_playing = race.is_playing();
            race.toggle_play_pause();
            (!was_playing && race.is_playing()).then(|| race.run_id())
        }
        RaceEvent::Reset => {
            race.reset();
            None
        }
        RaceEvent::Seek(day) => {
            race.seek(*day);
            None
        }
        RaceEvent::Tick { run_id } => {
            if race.run_id() != *run_id || !race.is_playing() {
                return None;
            }
            race.tick();
            race.is_playing().then_some(*run_id)
        }
    }
}

fn queue_tick(sender_slot: Rc<RefCell<Option<UnboundedSender<RaceEvent>>>>, run_id: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(TICK_INTERVAL_MS).await;
            let _ = sender.unbounded_send(RaceEvent::Tick { run_id });
        });
    }
}
