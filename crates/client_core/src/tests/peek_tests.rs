use super::*;

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn eye() -> Rect {
    // 20x16 eye centered at (110, 108); pupil 8x8 leaves 4x2 of travel.
    Rect::from_min_size(Vec2::new(100.0, 100.0), Vec2::new(20.0, 16.0))
}

const PUPIL: Vec2 = Vec2::new(8.0, 8.0);

#[test]
fn idle_cursor_at_center_does_not_lean() {
    let state = PeekState::default();
    let lean = state.lean(500.0, 1000.0);
    assert!(approx(lean.angle_deg, 0.0));
    assert_eq!((lean.scale_x, lean.scale_y), (1.0, 1.0));
}

#[test]
fn cursor_offset_leans_proportionally_and_saturates() {
    let state = PeekState::default();
    assert!(approx(state.lean(750.0, 1000.0).angle_deg, 4.0));
    assert!(approx(state.lean(2000.0, 1000.0).angle_deg, 8.0));
    assert!(approx(state.lean(-500.0, 1000.0).angle_deg, -8.0));
}

#[test]
fn typing_and_peeking_clamp_at_the_upper_bound() {
    let mut state = PeekState::default();
    state.focus_password();
    assert!(state.is_peeking());
    // 6 (typing) + 8 (cursor at right edge) + 6 (peek) = 20, clamped.
    let lean = state.lean(1000.0, 1000.0);
    assert!(approx(lean.angle_deg, 14.0));
    assert_eq!((lean.scale_x, lean.scale_y), (1.02, 1.08));
}

#[test]
fn revealed_password_leans_away() {
    let mut state = PeekState::default();
    state.toggle_password_visibility();
    // -10 + 0 + 6 (forced peek)
    assert!(approx(state.lean(500.0, 1000.0).angle_deg, -4.0));
    // -10 - 8 + 6 = -12
    assert!(approx(state.lean(0.0, 1000.0).angle_deg, -12.0));
}

#[test]
fn zero_width_viewport_ignores_cursor() {
    let state = PeekState::default();
    assert!(approx(state.lean(300.0, 0.0).angle_deg, 0.0));
}

#[test]
fn blur_keeps_peek_only_while_password_is_visible() {
    let mut state = PeekState::default();
    state.focus_password();
    state.blur_password();
    assert!(!state.typing_password);
    assert!(!state.force_peek);

    state.toggle_password_visibility();
    state.focus_password();
    state.blur_password();
    assert!(state.force_peek);
}

#[test]
fn hiding_password_keeps_peek_while_typing() {
    let mut state = PeekState::default();
    state.focus_password();
    state.toggle_password_visibility();
    state.toggle_password_visibility();
    assert!(!state.password_visible);
    assert!(state.force_peek);

    state.blur_password();
    state.toggle_password_visibility();
    state.toggle_password_visibility();
    assert!(!state.force_peek);
}

#[test]
fn hover_alone_triggers_peek() {
    let mut state = PeekState::default();
    state.set_hover(true);
    assert!(state.is_peeking());
    state.set_hover(false);
    assert!(!state.is_peeking());
}

#[test]
fn idle_eyes_follow_the_cursor_within_bounds() {
    let state = PeekState::default();
    let password = Vec2::new(0.0, 500.0);

    let right = state.gaze(Vec2::new(400.0, 108.0), eye(), PUPIL, password);
    assert!(approx(right.x, 4.0));
    assert!(approx(right.y, 0.0));

    let below = state.gaze(Vec2::new(110.0, 400.0), eye(), PUPIL, password);
    assert!(approx(below.x, 0.0));
    assert!(approx(below.y, 2.0));
}

#[test]
fn typing_eyes_look_at_password_field() {
    let mut state = PeekState::default();
    state.focus_password();
    let offset = state.gaze(
        Vec2::new(0.0, 0.0),
        eye(),
        PUPIL,
        Vec2::new(110.0, 300.0),
    );
    assert!(approx(offset.x, 0.0));
    assert!(approx(offset.y, 2.0));
}

#[test]
fn revealed_password_mirrors_gaze_away_from_field() {
    let mut state = PeekState::default();
    state.focus_password();
    state.toggle_password_visibility();
    let offset = state.gaze(
        Vec2::new(0.0, 0.0),
        eye(),
        PUPIL,
        Vec2::new(110.0, 300.0),
    );
    assert!(approx(offset.x, 0.0));
    assert!(approx(offset.y, -2.0));
}

#[test]
fn gaze_stays_inside_the_elliptical_bound() {
    let state = PeekState::default();
    for i in 0..16 {
        let theta = i as f32 * std::f32::consts::PI / 8.0;
        let cursor = Vec2::new(110.0 + 50.0 * theta.cos(), 108.0 + 50.0 * theta.sin());
        let o = state.gaze(cursor, eye(), PUPIL, Vec2::default());
        let norm = (o.x / 4.0).powi(2) + (o.y / 2.0).powi(2);
        assert!(norm <= 1.0 + EPS, "offset {o:?} outside bound");
    }
}

#[test]
fn tiny_eye_pins_the_pupil_to_center() {
    let state = PeekState::default();
    let small = Rect::from_min_size(Vec2::new(0.0, 0.0), Vec2::new(6.0, 6.0));
    let offset = state.gaze(Vec2::new(100.0, 100.0), small, PUPIL, Vec2::default());
    assert_eq!(offset, Vec2::new(0.0, 0.0));
}
