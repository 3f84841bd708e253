//! Sign-in screen characters: lean angle and pupil gaze as pure functions of
//! cursor position and password-field state.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.size.x / 2.0,
            self.min.y + self.size.y / 2.0,
        )
    }
}

const VISIBLE_LEAN_DEG: f32 = -10.0;
const TYPING_LEAN_DEG: f32 = 6.0;
const CURSOR_LEAN_DEG: f32 = 8.0;
const PEEK_LEAN_DEG: f32 = 6.0;
const MAX_LEAN_DEG: f32 = 14.0;
const PEEK_SCALE: (f32, f32) = (1.02, 1.08);
const PUPIL_MARGIN: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lean {
    pub angle_deg: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeekState {
    pub password_visible: bool,
    pub typing_password: bool,
    pub hover_peek: bool,
    pub force_peek: bool,
}

impl PeekState {
    pub fn focus_password(&mut self) {
        self.typing_password = true;
        self.force_peek = true;
    }

    pub fn blur_password(&mut self) {
        self.typing_password = false;
        self.force_peek = self.password_visible;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
        self.force_peek = self.password_visible || self.typing_password;
    }

    pub fn set_hover(&mut self, hovering: bool) {
        self.hover_peek = hovering;
    }

    pub fn is_peeking(&self) -> bool {
        self.hover_peek || self.force_peek
    }

    pub fn lean(&self, cursor_x: f32, viewport_width: f32) -> Lean {
        let mut angle = if self.password_visible {
            VISIBLE_LEAN_DEG
        } else if self.typing_password {
            TYPING_LEAN_DEG
        } else {
            0.0
        };

        let half = viewport_width / 2.0;
        let normalized = if half > 0.0 {
            ((cursor_x - half) / half).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        angle += normalized * CURSOR_LEAN_DEG;

        let peeking = self.is_peeking();
        if peeking {
            angle += PEEK_LEAN_DEG;
        }

        let (scale_x, scale_y) = if peeking { PEEK_SCALE } else { (1.0, 1.0) };
        Lean {
            angle_deg: angle.clamp(-MAX_LEAN_DEG, MAX_LEAN_DEG),
            scale_x,
            scale_y,
        }
    }

    /// Pupil offset from the eye center. A revealed password makes the eyes
    /// look away from the field, typing makes them look at it, otherwise they
    /// follow the cursor.
    pub fn gaze(&self, cursor: Vec2, eye: Rect, pupil_size: Vec2, password_center: Vec2) -> Vec2 {
        let eye_center = eye.center();
        let target = if self.password_visible {
            Vec2::new(
                2.0 * eye_center.x - password_center.x,
                2.0 * eye_center.y - password_center.y,
            )
        } else if self.typing_password {
            password_center
        } else {
            cursor
        };

        let angle = (target.y - eye_center.y).atan2(target.x - eye_center.x);
        let max_x = (eye.size.x / 2.0 - pupil_size.x / 2.0 - PUPIL_MARGIN).max(0.0);
        let max_y = (eye.size.y / 2.0 - pupil_size.y / 2.0 - PUPIL_MARGIN).max(0.0);
        Vec2::new(angle.cos() * max_x, angle.sin() * max_y)
    }
}

#[cfg(test)]
#[path = "tests/peek_tests.rs"]
mod tests;
