use std::time::Instant;

use client_core::{
    view::{self, EMPTY_HINT, EMPTY_TITLE, LINK_DISPLAY_BUDGET},
    CardAction, FormMode, SubmitOutcome,
};
use eframe::egui;
use shared::domain::{ShoeRecord, SortKey};

use crate::ui::app::{AppViewState, DesktopGuiApp};
use crate::ui::theme::{palette_for, toggle_icon_glyph, Palette, ACCENT, ACCENT_SOFT};

const CARD_WIDTH: f32 = 260.0;

impl DesktopGuiApp {
    pub(crate) fn show_inventory_screen(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = palette_for(self.theme.mode);

        egui::TopBottomPanel::top("navbar")
            .frame(egui::Frame::default().fill(palette.navbar).inner_margin(8.0))
            .show(ctx, |ui| self.show_navbar(ui, now));

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::default().fill(palette.footer).inner_margin(6.0))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("StrideGear | {}", self.status))
                        .small()
                        .color(egui::Color32::from_gray(200)),
                );
            });

        egui::SidePanel::left("shoe_form")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.show_form(ui, now));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            self.show_alert(ui);
            self.show_toolbar(ui, palette);
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.show_cards(ui, palette));
        });

        self.show_delete_confirmation(ctx, now);
    }

    fn show_navbar(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("StrideGear").color(ACCENT).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Sign out").clicked() {
                    self.view_state = AppViewState::SignIn;
                }

                let glyph = toggle_icon_glyph(self.theme.toggle_icon);
                let size = match self.theme_transition.progress(now) {
                    // Icon swells briefly while the switch is in flight.
                    Some(progress) => 18.0 + 6.0 * (progress * std::f32::consts::PI).sin(),
                    None => 18.0,
                };
                let toggle = ui
                    .add(egui::Button::new(egui::RichText::new(glyph).size(size)))
                    .on_hover_text("Toggle theme");
                if toggle.clicked() {
                    self.on_theme_toggle_clicked(ui.ctx());
                }
            });
        });
    }

    fn show_alert(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.inventory.alert().message().map(str::to_owned) else {
            return;
        };
        egui::Frame::group(ui.style())
            .fill(egui::Color32::from_rgb(22, 101, 52))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            self.inventory.dismiss_alert();
                        }
                    });
                });
            });
        ui.add_space(6.0);
    }

    fn show_form(&mut self, ui: &mut egui::Ui, now: Instant) {
        let editing = matches!(self.inventory.form.mode(), FormMode::Editing(_));
        let title = if editing { "Edit Shoe" } else { "Add New Shoe" };
        let heading = ui.heading(title);
        if self.inventory.form.take_scroll_request() {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.add_space(8.0);

        let fields = &mut self.inventory.form.fields;
        labeled_input(ui, "Brand", "e.g. Nike", &mut fields.shoe_brand);
        labeled_input(ui, "Name", "e.g. Air Max 90", &mut fields.shoe_name);
        labeled_input(ui, "Size", "e.g. 10", &mut fields.shoe_size);
        labeled_input(ui, "Feet shape", "e.g. Wide", &mut fields.feet_shape);
        labeled_input(ui, "Source link", "https://...", &mut fields.source_link);

        ui.add_space(8.0);
        let label = if editing { "Update Shoe" } else { "Add Shoe" };
        let submit = ui.add_sized(
            [ui.available_width(), 32.0],
            egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE)).fill(ACCENT),
        );
        if submit.clicked() {
            match self.inventory.on_submit(now) {
                SubmitOutcome::Added(id) => tracing::info!(%id, "shoe added"),
                SubmitOutcome::Updated(id) => tracing::info!(%id, "shoe updated"),
                SubmitOutcome::NotFound(id) => {
                    tracing::warn!(%id, "edited shoe no longer exists; form reset")
                }
            }
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui, palette: Palette) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Your Collection").strong().size(18.0));
            let badge = format!("{}", self.inventory.count());
            egui::Frame::default()
                .fill(ACCENT_SOFT)
                .corner_radius(8.0)
                .inner_margin(egui::vec2(8.0, 2.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(badge).color(egui::Color32::WHITE));
                });
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.search_text)
                    .hint_text("Search by name or brand...")
                    .desired_width(260.0),
            );
            if search.changed() {
                self.inventory.on_search_input(self.search_text.clone());
            }

            let current = self.inventory.query().sort;
            let mut selected = current;
            egui::ComboBox::from_id_salt("sort_key")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for key in SortKey::ALL {
                        ui.selectable_value(&mut selected, key, key.label());
                    }
                });
            if selected != current {
                self.inventory.on_sort_change(selected);
            }
            ui.label(egui::RichText::new("Sort").color(palette.muted));
        });
    }

    fn show_cards(&mut self, ui: &mut egui::Ui, palette: Palette) {
        if self.inventory.view().is_empty {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(EMPTY_TITLE).size(18.0).strong());
                ui.label(egui::RichText::new(EMPTY_HINT).color(palette.muted));
            });
            return;
        }

        let mut pressed: Option<CardAction> = None;
        ui.horizontal_wrapped(|ui| {
            for record in self.inventory.visible() {
                if let Some(action) = shoe_card(ui, record, palette) {
                    pressed = Some(action);
                }
            }
        });

        if let Some(action) = pressed {
            tracing::debug!(?action, "card action");
            self.inventory.dispatch(action);
        }
    }

    fn show_delete_confirmation(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(pending) = self.inventory.pending_delete() else {
            return;
        };
        let mut answer: Option<bool> = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(pending.prompt());
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });
        if let Some(confirmed) = answer {
            if let Some(removed) = self.inventory.resolve_delete(confirmed, now) {
                tracing::info!(id = %removed.id, "shoe deleted");
            }
        }
    }
}

fn labeled_input(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}

fn shoe_card(ui: &mut egui::Ui, record: &ShoeRecord, palette: Palette) -> Option<CardAction> {
    let mut action = None;
    egui::Frame::group(ui.style())
        .fill(palette.card)
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, ACCENT);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    record.brand_initial(),
                    egui::FontId::proportional(16.0),
                    egui::Color32::WHITE,
                );
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&record.shoe_name).strong());
                    ui.label(egui::RichText::new(&record.shoe_brand).color(palette.muted));
                });
            });
            ui.add_space(6.0);
            ui.label(format!("Size: {}", record.shoe_size));
            ui.label(format!("Feet shape: {}", record.feet_shape));
            ui.hyperlink_to(
                view::truncate_link(&record.source_link, LINK_DISPLAY_BUDGET),
                &record.source_link,
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Edit").clicked() {
                    action = Some(CardAction::Edit(record.id));
                }
                if ui.button("Delete").clicked() {
                    action = Some(CardAction::Delete(record.id));
                }
            });
        });
    action
}
