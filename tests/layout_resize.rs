use std::cell::Cell;

use egui::{Pos2, Rect, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sparkle_canvas::config::PaperConfig;
use sparkle_canvas::{CanvasConfig, CanvasSession, PaperLayout, RepaintScheduler, SurfaceMetrics};

#[derive(Default)]
struct TestScheduler {
    scheduled: Cell<u32>,
}

impl RepaintScheduler for TestScheduler {
    fn schedule_next(&self) {
        self.scheduled.set(self.scheduled.get() + 1);
    }
}

fn metrics(width: f32, height: f32) -> SurfaceMetrics {
    SurfaceMetrics::new(Rect::from_min_size(Pos2::ZERO, Vec2::new(width, height)), 1.0)
}

#[test]
fn test_spacing_is_monotonic_and_clamped() {
    let paper = PaperConfig::default();
    let mut previous: Option<PaperLayout> = None;
    for short_side in (0..4000).step_by(37) {
        let size = Vec2::new(short_side as f32 + 500.0, short_side as f32);
        let layout = PaperLayout::new(size, &paper);
        assert!(layout.line_spacing >= paper.min_line_spacing);
        assert!(layout.margin >= paper.min_margin);
        if let Some(previous) = previous {
            assert!(layout.line_spacing >= previous.line_spacing);
            assert!(layout.margin >= previous.margin);
        }
        previous = Some(layout);
    }
}

#[test]
fn test_spacing_depends_on_short_side_only() {
    let paper = PaperConfig::default();
    let wide = PaperLayout::new(Vec2::new(3000.0, 1200.0), &paper);
    let tall = PaperLayout::new(Vec2::new(1200.0, 3000.0), &paper);
    assert_eq!(wide.line_spacing, tall.line_spacing);
    assert_eq!(wide.margin, tall.margin);
}

#[test]
fn test_session_resize_round_trip() {
    let scheduler = TestScheduler::default();
    let mut session =
        CanvasSession::with_rng(CanvasConfig::default(), metrics(800.0, 600.0), SmallRng::seed_from_u64(1)).unwrap();
    let small = *session.layout();

    session.resize(metrics(2000.0, 1600.0), &scheduler);
    assert_eq!(session.layout().line_spacing, 40.0);
    assert_eq!(session.layout().margin, 100.0);

    session.resize(metrics(800.0, 600.0), &scheduler);
    assert_eq!(*session.layout(), small);
    assert_eq!(scheduler.scheduled.get(), 2);
}

#[test]
fn test_resize_to_same_metrics_does_not_repaint() {
    let scheduler = TestScheduler::default();
    let mut session =
        CanvasSession::with_rng(CanvasConfig::default(), metrics(800.0, 600.0), SmallRng::seed_from_u64(2)).unwrap();
    session.resize(metrics(800.0, 600.0), &scheduler);
    assert_eq!(scheduler.scheduled.get(), 0);
}
