// LogTranslator - ui/panels/translator.rs
//
// Interactive panel: output region (or placeholder), input box, and the
// clear/translate controls. Button availability comes straight from the
// AppState predicates; clicks only set request flags.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the translator panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Ctrl/Cmd+Enter translates. Consume it before the TextEdit sees the
    // Enter so no newline is inserted.
    let shortcut =
        ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));
    if shortcut && state.can_translate() {
        state.request_translate = true;
    }

    let controls_height = ui.spacing().interact_size.y * 2.0
        + ui.text_style_height(&egui::TextStyle::Body) * theme::INPUT_ROWS as f32
        + 48.0;
    let output_height = (ui.available_height() - controls_height).max(theme::OUTPUT_MIN_HEIGHT);

    ui.allocate_ui(egui::vec2(ui.available_width(), output_height), |ui| {
        render_output(ui, state);
    });

    ui.add_space(16.0);

    ui.add(
        egui::TextEdit::multiline(&mut state.input)
            .hint_text(constants::INPUT_HINT)
            .desired_rows(theme::INPUT_ROWS)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        render_controls(ui, state);
    });
}

/// Output text, or the placeholder prompt when there is none.
fn render_output(ui: &mut egui::Ui, state: &AppState) {
    if state.shows_placeholder() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(constants::OUTPUT_PLACEHOLDER)
                    .size(theme::PLACEHOLDER_SIZE)
                    .strong()
                    .color(theme::PLACEHOLDER_TEXT),
            );
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("translated_output")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // Label rendering keeps line breaks and runs of spaces as-is.
            ui.add(egui::Label::new(egui::RichText::new(&state.output).monospace()).wrap());
        });
}

/// Translate and clear buttons, laid out right to left.
fn render_controls(ui: &mut egui::Ui, state: &mut AppState) {
    let translate_label = if state.in_progress {
        "Translating..."
    } else {
        "Translate \u{2192}"
    };
    let translate = egui::Button::new(
        egui::RichText::new(translate_label).color(egui::Color32::WHITE),
    )
    .fill(theme::TRANSLATE_FILL)
    .min_size(egui::vec2(theme::TRANSLATE_BUTTON_MIN_WIDTH, 0.0));

    if ui
        .add_enabled(state.can_translate(), translate)
        .on_hover_text("Ctrl+Enter")
        .clicked()
    {
        state.request_translate = true;
    }

    if state.in_progress {
        ui.add(egui::Spinner::new());
    }

    if ui
        .add_enabled(state.can_clear(), egui::Button::new("Clear"))
        .on_hover_text("Clear input and output")
        .clicked()
    {
        state.request_clear = true;
    }
}
