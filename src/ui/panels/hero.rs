// LogTranslator - ui/panels/hero.rs
//
// Static marketing panel on the left of the window.

use crate::ui::theme;

/// Render the hero panel contents.
pub fn render(ui: &mut egui::Ui) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        // Vertically centre the block in the available height.
        let spare = (ui.available_height() - 320.0).max(0.0);
        ui.add_space(spare / 2.0);

        ui.label(
            egui::RichText::new("Log Translator")
                .size(theme::HERO_TITLE_SIZE)
                .strong()
                .color(theme::HERO_TITLE),
        );
        ui.add_space(24.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new(
                    "Transform complex error logs into clear, understandable explanations \
                     with our intelligent log translator. Save time debugging and get back \
                     to building what matters.",
                )
                .size(18.0)
                .color(theme::HERO_TEXT),
            )
            .wrap(),
        );
        ui.add_space(40.0);
        ui.label(
            egui::RichText::new("\u{2728}  Powered by advanced AI translation")
                .color(theme::HERO_ACCENT),
        );
    });
}
