use crate::theme;
use eframe::egui::{self, RichText, TextEdit};
use prodraft_core::form::ProductForm;

pub struct EditorPane;

impl EditorPane {
    /// Renders the description editor. The pane's full text is the
    /// serialized document; every change event is offered to the form's
    /// bridge, which ignores non-changes.
    pub fn show(ui: &mut egui::Ui, form: &mut ProductForm) {
        ui.label(RichText::new("Content").strong());
        let response = ui.add(
            TextEdit::multiline(&mut form.editor_text)
                .hint_text("Enter some text...")
                .desired_width(f32::INFINITY)
                .desired_rows(theme::EDITOR_ROWS),
        );
        if response.changed() {
            form.editor_changed();
        }
    }
}
