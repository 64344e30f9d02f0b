// One-shot viewport reveals: fade-in, typing and progress fill.

mod common;

use common::*;
use fx_core::*;
use RevealKind::{Fade, Progress, Typing};

const CARD_A: TargetId = TargetId(10);
const CARD_B: TargetId = TargetId(11);
const CARD_C: TargetId = TargetId(12);
const HEADLINE: TargetId = TargetId(20);
const BAR: TargetId = TargetId(30);

fn ready() -> Harness {
    let mut h = Harness::new();
    h.init(TargetRegistry {
        reveal: vec![CARD_A, CARD_B, CARD_C],
        typing: vec![(HEADLINE, "Hello".to_owned())],
        progress: vec![(BAR, "72%".to_owned())],
        ..Default::default()
    });
    h
}

fn visible(target: TargetId, ratio: f32) -> IntersectionEntry {
    IntersectionEntry::new(target, ratio, true)
}

#[test]
fn fade_targets_start_hidden() {
    let h = ready();
    assert_eq!(h.style(CARD_A, "opacity"), Some("0"));
    assert_eq!(h.style(CARD_A, "transform"), Some("translateY(30px)"));
    assert_eq!(h.engine.reveal().watched_count(), 5);
}

#[test]
fn fade_reveals_stagger_by_batch_position() {
    let mut h = ready();
    let fired = h.run(|e, out| {
        e.on_intersections(&[visible(CARD_A, 0.2), visible(CARD_B, 0.2), visible(CARD_C, 0.2)], out)
    });
    assert_eq!(fired, 3);
    assert_eq!(
        h.unobserved,
        vec![(CARD_A, Fade), (CARD_B, Fade), (CARD_C, Fade)]
    );

    h.advance(ms(0));
    assert_eq!(h.style(CARD_A, "opacity"), Some("1"));
    assert_eq!(h.style(CARD_B, "opacity"), Some("0"));

    h.advance(ms(100));
    assert_eq!(h.style(CARD_B, "opacity"), Some("1"));
    assert_eq!(h.style(CARD_C, "opacity"), Some("0"));

    h.advance(ms(100));
    assert_eq!(h.style(CARD_C, "opacity"), Some("1"));
    assert_eq!(h.style(CARD_C, "transform"), Some("translateY(0)"));
}

#[test]
fn below_threshold_or_not_intersecting_keeps_watching() {
    let mut h = ready();
    let fired = h.run(|e, out| {
        e.on_intersections(
            &[
                visible(CARD_A, 0.05),
                IntersectionEntry::new(CARD_B, 0.9, false),
                visible(HEADLINE, 0.3),
            ],
            out,
        )
    });
    assert_eq!(fired, 0);
    assert!(h.unobserved.is_empty());
    assert_eq!(h.engine.reveal().is_watched(CARD_A, Fade), Some(true));
    assert_eq!(h.engine.reveal().is_watched(HEADLINE, Typing), Some(true));
}

#[test]
fn reveal_fires_once_per_target() {
    let mut h = ready();
    h.run(|e, out| e.on_intersections(&[visible(CARD_A, 1.0)], out));
    h.advance(ms(10));
    // Scrolled out and back in.
    let left = h.run(|e, out| {
        e.on_intersections(&[IntersectionEntry::new(CARD_A, 0.0, false)], out)
    });
    let back = h.run(|e, out| e.on_intersections(&[visible(CARD_A, 1.0)], out));
    h.advance(ms(500));
    assert_eq!((left, back), (0, 0));
    assert_eq!(h.unobserved, vec![(CARD_A, Fade)]);
    let reveals = h
        .style_log
        .iter()
        .filter(|(_, t, p, v)| *t == CARD_A && *p == "opacity" && v == "1")
        .count();
    assert_eq!(reveals, 1);
    assert_eq!(h.engine.reveal().is_watched(CARD_A, Fade), Some(false));
}

#[test]
fn typing_target_is_emptied_then_typed_one_char_at_a_time() {
    let mut h = ready();
    assert_eq!(h.text(HEADLINE), Some(""));

    h.run(|e, out| e.on_intersections(&[visible(HEADLINE, 0.5)], out));
    assert_eq!(h.text(HEADLINE), Some("H"));

    h.advance(ms(50 * 4));
    assert_eq!(h.text(HEADLINE), Some("Hello"));
    let typed: Vec<&str> = h
        .text_log
        .iter()
        .filter(|(_, t, _)| *t == HEADLINE)
        .map(|(_, _, s)| s.as_str())
        .collect();
    assert_eq!(typed, vec!["", "H", "He", "Hel", "Hell", "Hello"]);

    // No further typing timers once the text is complete.
    h.advance(ms(1000));
    assert_eq!(h.pending_timers(), 0);
}

#[test]
fn typing_steps_are_spaced_by_the_interval() {
    let mut h = ready();
    h.run(|e, out| e.on_intersections(&[visible(HEADLINE, 1.0)], out));
    let start = h.now;
    h.advance(ms(1000));
    let times: Vec<_> = h
        .text_log
        .iter()
        .filter(|(_, t, s)| *t == HEADLINE && !s.is_empty())
        .map(|(at, _, _)| *at - start)
        .collect();
    assert_eq!(times, vec![ms(0), ms(50), ms(100), ms(150), ms(200)]);
}

#[test]
fn typing_handles_multibyte_text() {
    let mut writer = Typewriter::new("héllo ✨");
    let mut last = String::new();
    while let Some(text) = writer.advance() {
        last = text;
    }
    assert_eq!(last, "héllo ✨");
    assert_eq!(writer.len(), 7);
    assert!(writer.is_done());
}

#[test]
fn progress_bar_resets_then_fills_to_declared_width() {
    let mut h = ready();
    h.run(|e, out| e.on_intersections(&[visible(BAR, 0.6)], out));
    assert_eq!(h.style(BAR, "width"), Some("0%"));

    h.advance(ms(99));
    assert_eq!(h.style(BAR, "width"), Some("0%"));
    h.advance(ms(1));
    assert_eq!(h.style(BAR, "width"), Some("72%"));

    let widths: Vec<&str> = h
        .style_log
        .iter()
        .filter(|(_, t, p, _)| *t == BAR && *p == "width")
        .map(|(_, _, _, v)| v.as_str())
        .collect();
    assert_eq!(widths, vec!["0%", "72%"]);

    // Leaving and re-entering the viewport does not restart the fill.
    h.run(|e, out| e.on_intersections(&[IntersectionEntry::new(BAR, 0.0, false)], out));
    let again = h.run(|e, out| e.on_intersections(&[visible(BAR, 1.0)], out));
    h.advance(ms(500));
    assert_eq!(again, 0);
    assert_eq!(h.style(BAR, "width"), Some("72%"));
    assert_eq!(
        h.style_log
            .iter()
            .filter(|(_, t, p, _)| *t == BAR && *p == "width")
            .count(),
        2
    );
}

#[test]
fn unknown_targets_in_a_batch_are_skipped() {
    let mut h = ready();
    let fired = h.run(|e, out| e.on_intersections(&[visible(TargetId(999), 1.0)], out));
    assert_eq!(fired, 0);
    assert_eq!(h.engine.reveal().is_watched(TargetId(999), Fade), None);
    assert!(h.engine.reveal().kinds_of(TargetId(999)).is_empty());
}

#[test]
fn thresholds_follow_the_target_kind() {
    let h = ready();
    let reveal = h.engine.reveal();
    assert_eq!(reveal.threshold(RevealKind::Fade), 0.1);
    assert_eq!(reveal.threshold(RevealKind::Typing), 0.5);
    assert_eq!(reveal.kinds_of(BAR).as_slice(), &[Progress]);
    assert_eq!(reveal.kinds_of(HEADLINE).as_slice(), &[Typing]);
}

const TYPING_CARD: TargetId = TargetId(40);
const FADING_BAR: TargetId = TargetId(41);

fn overlapping() -> Harness {
    let mut h = Harness::new();
    h.init(TargetRegistry {
        reveal: vec![TYPING_CARD, FADING_BAR],
        typing: vec![(TYPING_CARD, "Hi".to_owned())],
        progress: vec![(FADING_BAR, "40%".to_owned())],
        ..Default::default()
    });
    h
}

#[test]
fn card_that_also_types_runs_both_reveals() {
    let mut h = overlapping();
    assert_eq!(h.engine.reveal().kinds_of(TYPING_CARD).as_slice(), &[Fade, Typing]);

    let fired = h.run(|e, out| e.on_intersections(&[visible(TYPING_CARD, 1.0)], out));
    h.advance(ms(2000));
    assert_eq!(fired, 2);
    assert_eq!(h.style(TYPING_CARD, "transform"), Some("translateY(0)"));
    assert_eq!(h.style(TYPING_CARD, "opacity"), Some("1"));
    assert_eq!(h.text(TYPING_CARD), Some("Hi"));
    assert_eq!(h.unobserved, vec![(TYPING_CARD, Fade), (TYPING_CARD, Typing)]);
}

#[test]
fn each_kind_waits_for_its_own_threshold() {
    let mut h = overlapping();
    // Past the fade threshold only: the card fades in but does not type yet.
    h.run(|e, out| e.on_intersections(&[visible(TYPING_CARD, 0.2)], out));
    h.advance(ms(100));
    assert_eq!(h.style(TYPING_CARD, "transform"), Some("translateY(0)"));
    assert_eq!(h.text(TYPING_CARD), Some(""));
    assert_eq!(h.unobserved, vec![(TYPING_CARD, Fade)]);
    assert_eq!(h.engine.reveal().is_watched(TYPING_CARD, Typing), Some(true));

    h.run(|e, out| e.on_intersections(&[visible(TYPING_CARD, 0.6)], out));
    h.advance(ms(100));
    assert_eq!(h.text(TYPING_CARD), Some("Hi"));
    assert_eq!(h.unobserved, vec![(TYPING_CARD, Fade), (TYPING_CARD, Typing)]);
    assert_eq!(h.engine.reveal().watched_count(), 2);
}

#[test]
fn progress_bar_inside_a_fade_target_fades_and_fills() {
    let mut h = overlapping();
    h.run(|e, out| e.on_intersections(&[visible(FADING_BAR, 0.8)], out));
    h.advance(ms(200));
    assert_eq!(h.style(FADING_BAR, "opacity"), Some("1"));
    assert_eq!(h.style(FADING_BAR, "transform"), Some("translateY(0)"));
    assert_eq!(h.style(FADING_BAR, "width"), Some("40%"));
}
