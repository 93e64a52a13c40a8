use egui::{Event, Modifiers, PointerButton, Pos2, Rect, Vec2, pos2};
use sparkle_canvas::input::InputState;
use sparkle_canvas::{CanvasApp, CanvasConfig, SurfaceMetrics};

fn screen() -> Rect {
    Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
}

fn run_frame(ctx: &egui::Context, app: &mut CanvasApp, events: Vec<Event>) -> egui::FullOutput {
    let input = egui::RawInput {
        screen_rect: Some(screen()),
        events,
        ..Default::default()
    };
    ctx.run(input, |ctx| app.show(ctx))
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}

fn press(pos: Pos2) -> Vec<Event> {
    vec![Event::PointerMoved(pos), button(pos, true)]
}

fn release(pos: Pos2) -> Vec<Event> {
    vec![button(pos, false)]
}

// Run a few empty frames so the floating controls get laid out and placed
fn started_app(ctx: &egui::Context) -> CanvasApp {
    let mut app = CanvasApp::with_config(CanvasConfig::default());
    for _ in 0..3 {
        run_frame(ctx, &mut app, Vec::new());
    }
    app
}

fn clear_button_center(ctx: &egui::Context) -> Pos2 {
    ctx.memory(|mem| mem.area_rect(egui::Id::new("canvas_controls")))
        .expect("controls were laid out")
        .center()
}

fn draw_stroke(ctx: &egui::Context, app: &mut CanvasApp) {
    run_frame(ctx, app, press(pos2(100.0, 100.0)));
    run_frame(ctx, app, vec![Event::PointerMoved(pos2(150.0, 100.0))]);
    run_frame(ctx, app, vec![Event::PointerMoved(pos2(200.0, 100.0))]);
    run_frame(ctx, app, release(pos2(200.0, 100.0)));
}

#[test]
fn test_frames_draw_a_stroke() {
    let ctx = egui::Context::default();
    let mut app = started_app(&ctx);
    draw_stroke(&ctx, &mut app);

    let session = app.session().unwrap();
    assert!(session.is_running());
    assert_eq!(session.surface(), &SurfaceMetrics::new(screen(), ctx.pixels_per_point()));
    assert_eq!(session.strokes().strokes().len(), 1);
    assert_eq!(session.strokes().strokes()[0].points()[0], pos2(100.0, 100.0));
    assert_eq!(session.particles().len(), 7);
}

#[test]
fn test_press_on_clear_button_does_not_start_stroke() {
    let ctx = egui::Context::default();
    let mut app = started_app(&ctx);
    let target = clear_button_center(&ctx);

    run_frame(&ctx, &mut app, press(target));
    let session = app.session().unwrap();
    assert!(!session.strokes().is_drawing());
    assert_eq!(session.input_state(), InputState::Idle);
    assert!(session.particles().is_empty());

    // Moving while still pressed does not ink either
    run_frame(&ctx, &mut app, vec![Event::PointerMoved(target - Vec2::new(200.0, 200.0))]);
    assert!(app.session().unwrap().strokes().active().is_none());
}

#[test]
fn test_clear_button_empties_canvas_in_same_frame() {
    let ctx = egui::Context::default();
    let mut app = started_app(&ctx);
    draw_stroke(&ctx, &mut app);
    assert!(!app.session().unwrap().particles().is_empty());

    let target = clear_button_center(&ctx);
    run_frame(&ctx, &mut app, press(target));
    run_frame(&ctx, &mut app, release(target));

    let session = app.session().unwrap();
    assert!(session.strokes().strokes().is_empty());
    assert!(session.particles().is_empty());
    assert!(!session.strokes().is_drawing());
    assert!(session.is_running());
}

#[test]
fn test_unavailable_surface_is_never_retried() {
    let ctx = egui::Context::default();
    let mut app = CanvasApp::with_config(CanvasConfig::default());

    let empty = SurfaceMetrics::new(Rect::from_min_size(Pos2::ZERO, Vec2::ZERO), 1.0);
    assert!(app.session_for(empty, &ctx).is_none());
    assert!(app.is_unavailable());

    // A usable surface later does not bring the canvas back
    assert!(app.session_for(SurfaceMetrics::new(screen(), 1.0), &ctx).is_none());
    let output = run_frame(&ctx, &mut app, press(pos2(100.0, 100.0)));
    assert!(output.shapes.is_empty());
    assert!(app.session().is_none());
    assert!(app.is_unavailable());
}

#[test]
fn test_invalid_config_disables_canvas() {
    let ctx = egui::Context::default();
    let mut config = CanvasConfig::default();
    config.particles.palette.clear();
    let mut app = CanvasApp::with_config(config);

    run_frame(&ctx, &mut app, Vec::new());
    assert!(app.is_unavailable());
    assert!(app.session().is_none());

    let output = run_frame(&ctx, &mut app, Vec::new());
    assert!(output.shapes.is_empty());
}
