//! Decorative sign-in screen. The characters lean toward the cursor and
//! react to the password field; signing in performs no authentication.

use client_core::peek::{self, PeekState};
use eframe::egui;

use crate::ui::app::{AppViewState, DesktopGuiApp};
use crate::ui::theme::{palette_for, ACCENT, ACCENT_SOFT};

const EYE_SIZE: egui::Vec2 = egui::vec2(14.0, 14.0);
const PUPIL_SIZE: egui::Vec2 = egui::vec2(6.0, 6.0);

#[derive(Debug, Clone, Default)]
pub struct SignInState {
    pub email: String,
    pub password: String,
    pub peek: PeekState,
    password_rect: Option<egui::Rect>,
}

struct Character {
    /// Offset of the body's bottom-center from the stage's bottom-center.
    base_offset: f32,
    size: egui::Vec2,
    color: egui::Color32,
    eye_height: f32,
}

const CHARACTERS: [Character; 3] = [
    Character {
        base_offset: -90.0,
        size: egui::vec2(90.0, 220.0),
        color: ACCENT,
        eye_height: 0.18,
    },
    Character {
        base_offset: 0.0,
        size: egui::vec2(80.0, 160.0),
        color: egui::Color32::from_rgb(31, 41, 55),
        eye_height: 0.22,
    },
    Character {
        base_offset: 85.0,
        size: egui::vec2(100.0, 120.0),
        color: ACCENT_SOFT,
        eye_height: 0.3,
    },
];

impl DesktopGuiApp {
    pub(crate) fn show_signin_screen(&mut self, ctx: &egui::Context) {
        let palette = palette_for(self.theme.mode);
        let hover = ctx.input(|input| input.pointer.hover_pos());
        self.signin.peek.set_hover(hover.is_some());

        egui::CentralPanel::default().show(ctx, |ui| {
            let full = ui.max_rect();
            let cursor = hover.unwrap_or(full.center());

            ui.columns(2, |columns| {
                let stage = columns[0].available_rect_before_wrap();
                let painter = columns[0].painter_at(stage);
                paint_characters(&painter, stage, &self.signin, cursor, full.width());

                let ui = &mut columns[1];
                ui.add_space(ui.available_height() * 0.2);
                egui::Frame::group(ui.style())
                    .fill(palette.card)
                    .inner_margin(20.0)
                    .show(ui, |ui| self.show_signin_form(ui));
            });
        });
    }

    fn show_signin_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Welcome back");
        ui.add_space(8.0);

        ui.label("Email");
        ui.add(
            egui::TextEdit::singleline(&mut self.signin.email)
                .hint_text("you@example.com")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);

        ui.label("Password");
        let visible = self.signin.peek.password_visible;
        ui.horizontal(|ui| {
            let password = ui.add(
                egui::TextEdit::singleline(&mut self.signin.password)
                    .password(!visible)
                    .desired_width(ui.available_width() - 40.0),
            );
            if password.gained_focus() {
                self.signin.peek.focus_password();
            }
            if password.lost_focus() {
                self.signin.peek.blur_password();
            }
            self.signin.password_rect = Some(password.rect);

            let eye = if visible { "🙈" } else { "👁" };
            if ui.button(eye).on_hover_text("Show/hide password").clicked() {
                self.signin.peek.toggle_password_visibility();
            }
        });

        ui.add_space(12.0);
        let sign_in = ui.add_sized(
            [ui.available_width(), 32.0],
            egui::Button::new(egui::RichText::new("Sign in").color(egui::Color32::WHITE))
                .fill(ACCENT),
        );
        if sign_in.clicked() {
            tracing::info!("entering inventory");
            self.view_state = AppViewState::Inventory;
        }
    }
}

fn to_peek(pos: egui::Pos2) -> peek::Vec2 {
    peek::Vec2::new(pos.x, pos.y)
}

fn rotate_about(point: egui::Pos2, pivot: egui::Pos2, radians: f32) -> egui::Pos2 {
    let (sin, cos) = radians.sin_cos();
    let d = point - pivot;
    pivot + egui::vec2(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

fn paint_characters(
    painter: &egui::Painter,
    stage: egui::Rect,
    state: &SignInState,
    cursor: egui::Pos2,
    viewport_width: f32,
) {
    let lean = state.peek.lean(cursor.x, viewport_width);
    let radians = lean.angle_deg.to_radians();
    let password_center = state
        .password_rect
        .map(|rect| rect.center())
        .unwrap_or(stage.right_center());

    for character in &CHARACTERS {
        let pivot = egui::pos2(stage.center().x + character.base_offset, stage.bottom() - 20.0);
        let size = egui::vec2(
            character.size.x * lean.scale_x,
            character.size.y * lean.scale_y,
        );
        let half = size.x / 2.0;
        let corners = [
            egui::pos2(pivot.x - half, pivot.y),
            egui::pos2(pivot.x + half, pivot.y),
            egui::pos2(pivot.x + half, pivot.y - size.y),
            egui::pos2(pivot.x - half, pivot.y - size.y),
        ];
        let body = corners
            .iter()
            .map(|corner| rotate_about(*corner, pivot, radians))
            .collect();
        painter.add(egui::Shape::convex_polygon(
            body,
            character.color,
            egui::Stroke::NONE,
        ));

        let eye_y = pivot.y - size.y * (1.0 - character.eye_height);
        for dx in [-size.x * 0.2, size.x * 0.2] {
            let center = rotate_about(egui::pos2(pivot.x + dx, eye_y), pivot, radians);
            let eye_rect = egui::Rect::from_center_size(center, EYE_SIZE);
            let offset = state.peek.gaze(
                to_peek(cursor),
                peek::Rect::from_min_size(
                    to_peek(eye_rect.min),
                    peek::Vec2::new(EYE_SIZE.x, EYE_SIZE.y),
                ),
                peek::Vec2::new(PUPIL_SIZE.x, PUPIL_SIZE.y),
                to_peek(password_center),
            );
            painter.add(egui::Shape::ellipse_filled(
                center,
                EYE_SIZE / 2.0,
                egui::Color32::WHITE,
            ));
            painter.add(egui::Shape::ellipse_filled(
                center + egui::vec2(offset.x, offset.y),
                PUPIL_SIZE / 2.0,
                egui::Color32::BLACK,
            ));
        }
    }
}
