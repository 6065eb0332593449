// LogTranslator - gui.rs
//
// Top-level eframe::App implementation.
// Wires the panels to the translator page and drives the translation poll.

use crate::app::page::TranslatorPage;
use crate::ui;
use crate::util::constants;
use std::time::Duration;

/// The LogTranslator application.
pub struct LogTranslatorApp {
    pub page: TranslatorPage,
    pub dark_mode: bool,
}

impl LogTranslatorApp {
    /// Create a new application instance around `page`.
    pub fn new(page: TranslatorPage, dark_mode: bool) -> Self {
        Self { page, dark_mode }
    }
}

impl eframe::App for LogTranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply anything the worker finished since the last frame.
        let had_messages = self.page.poll();

        // Handle flags set by the panels during the previous frame.
        self.page.process_requests();

        // Keep repainting while a translation is pending so the result shows
        // up without waiting for input.
        if had_messages {
            ctx.request_repaint();
        }
        if self.page.state.in_progress {
            ctx.request_repaint_after(Duration::from_millis(
                constants::TRANSLATION_POLL_INTERVAL_MS,
            ));
        }

        let state = &mut self.page.state;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    ui.add_enabled_ui(state.can_translate(), |ui| {
                        if ui.button("Translate").clicked() {
                            state.request_translate = true;
                            ui.close_menu();
                        }
                    });
                    ui.add_enabled_ui(state.can_copy_output(), |ui| {
                        if ui.button("Copy Translation").clicked() {
                            ctx.copy_text(state.output.clone());
                            state.status_message = "Copied translation to clipboard.".to_string();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    ui.add_enabled_ui(state.can_clear(), |ui| {
                        if ui.button("Clear All").clicked() {
                            state.request_clear = true;
                            ui.close_menu();
                        }
                    });
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !state.input.is_empty() {
                        ui.label(format!("{} chars", state.input.chars().count()));
                    }
                });
            });
        });

        // Left: static hero panel, 40% of the window width.
        let hero_width = (ctx.screen_rect().width() * ui::theme::HERO_WIDTH_FRACTION)
            .max(ui::theme::HERO_MIN_WIDTH);
        egui::SidePanel::left("hero")
            .resizable(false)
            .exact_width(hero_width)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::HERO_BG)
                    .inner_margin(egui::Margin::same(ui::theme::PANEL_MARGIN)),
            )
            .show(ctx, |ui| {
                ui::panels::hero::render(ui);
            });

        // Right: the interactive translator panel.
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::panel_bg(self.dark_mode))
                    .inner_margin(egui::Margin::same(ui::theme::PANEL_MARGIN)),
            )
            .show(ctx, |ui| {
                ui::panels::translator::render(ui, state);
            });

        let delay_ms = self.page.delay().as_millis() as u64;
        ui::panels::about::render(ctx, &mut self.page.state, delay_ms);
    }
}
