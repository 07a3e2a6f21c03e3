use bezier_spline_editor::{
    AppController, AppIntent, AppState, PointerButton, PointerState,
};
use glam::Vec2;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn fresh_state() -> AppState {
    let mut state = AppState::default();
    state.view.set_viewport_size([WIDTH, HEIGHT]);
    state
}

/// Rechnet normalisierte Koordinaten zurück in Fenster-Pixel.
fn to_pixels(normalized: Vec2) -> Vec2 {
    Vec2::new(
        (normalized.x + 1.0) / 2.0 * WIDTH,
        (1.0 - normalized.y) / 2.0 * HEIGHT,
    )
}

fn press(controller: &AppController, state: &mut AppState, normalized: Vec2) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                position: to_pixels(normalized),
                button: PointerButton::Primary,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

fn release(controller: &AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
}

fn move_to(controller: &AppController, state: &mut AppState, normalized: Vec2) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerMoved {
                position: to_pixels(normalized),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
}

#[test]
fn test_click_on_empty_canvas_appends_point() {
    let controller = AppController::new();
    let mut state = fresh_state();

    press(&controller, &mut state, Vec2::new(0.5, 0.5));
    release(&controller, &mut state);

    assert_eq!(state.point_count(), 1);
    let p = state.spline.points()[0];
    assert!((p - Vec2::new(0.5, 0.5)).length() < 1e-5);
}

#[test]
fn test_click_outside_viewport_is_ignored() {
    let controller = AppController::new();
    let mut state = fresh_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                position: Vec2::new(WIDTH, HEIGHT / 2.0),
                button: PointerButton::Primary,
            },
        )
        .expect("Intent sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 0);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_full_drag_lifecycle() {
    let controller = AppController::new();
    let mut state = fresh_state();

    press(&controller, &mut state, Vec2::ZERO);
    release(&controller, &mut state);
    assert_eq!(state.point_count(), 1);

    // Erneutes Drücken auf dem Punkt greift ihn
    press(&controller, &mut state, Vec2::ZERO);
    assert_eq!(state.selection.pointer_state(), PointerState::Dragging(0));

    move_to(&controller, &mut state, Vec2::new(0.3, -0.2));
    let p = state.spline.points()[0];
    assert!((p - Vec2::new(0.3, -0.2)).length() < 1e-5);

    release(&controller, &mut state);
    assert!(!state.is_dragging());
    // Der Zeiger steht noch auf dem Punkt, Hover bleibt erhalten
    assert_eq!(state.selection.pointer_state(), PointerState::Hovering(0));
}

#[test]
fn test_hover_follows_pointer_without_drag() {
    let controller = AppController::new();
    let mut state = fresh_state();

    press(&controller, &mut state, Vec2::new(-0.5, 0.0));
    release(&controller, &mut state);
    press(&controller, &mut state, Vec2::new(0.5, 0.0));
    release(&controller, &mut state);

    move_to(&controller, &mut state, Vec2::new(0.5, 0.0));
    assert_eq!(state.selection.pointer_state(), PointerState::Hovering(1));

    // 10 px Hover-Radius bei 800 px Breite entspricht 0.025 normalisiert
    move_to(&controller, &mut state, Vec2::new(0.5, 0.1));
    assert_eq!(state.selection.pointer_state(), PointerState::Idle);
}

#[test]
fn test_right_click_removes_point() {
    let controller = AppController::new();
    let mut state = fresh_state();

    press(&controller, &mut state, Vec2::new(0.2, 0.2));
    release(&controller, &mut state);
    assert_eq!(state.point_count(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                position: to_pixels(Vec2::new(0.2, 0.2)),
                button: PointerButton::Secondary,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 0);
}

#[test]
fn test_resize_updates_viewport_and_hover_radius() {
    let controller = AppController::new();
    let mut state = fresh_state();

    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: [400.0, 300.0] })
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.viewport.size(), Vec2::new(400.0, 300.0));
    // 10 px bei 400 px Breite sind 0.05 normalisiert
    let radius = state
        .view
        .viewport
        .pixels_to_normalized(state.options.hover_radius_px);
    assert!((radius - 0.05).abs() < 1e-6);
}

#[test]
fn test_scene_reflects_controller_state() {
    let controller = AppController::new();
    let mut state = fresh_state();

    for pos in [
        Vec2::new(-0.8, -0.8),
        Vec2::new(-0.4, 0.6),
        Vec2::new(0.4, 0.6),
        Vec2::new(0.8, -0.8),
    ] {
        press(&controller, &mut state, pos);
        release(&controller, &mut state);
    }

    let scene = bezier_spline_editor::app::build_render_scene(&state);
    assert_eq!(scene.control_points.len(), 4);
    assert_eq!(scene.curve.len(), 101);
    assert_eq!(scene.viewport_size, [WIDTH, HEIGHT]);
}
