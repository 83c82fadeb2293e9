use crate::theme;
use eframe::egui::{self, RichText, TextEdit};
use prodraft_core::form::PricingForm;
use prodraft_core::types::PublishState;
use prodraft_core::validate::Field;

pub struct PricingFormPanel;

impl PricingFormPanel {
    /// Renders the pricing form. Returns true if "Save" was clicked.
    pub fn show(ui: &mut egui::Ui, form: &mut PricingForm) -> bool {
        ui.label(RichText::new("Price").strong());
        ui.add(TextEdit::singleline(&mut form.price_text).desired_width(f32::INFINITY));
        if let Some(message) = form.error(Field::Price) {
            ui.colored_label(theme::ERROR_TEXT, message);
        }
        ui.add_space(theme::FIELD_SPACING);

        ui.label(RichText::new("Status").strong());
        egui::ComboBox::from_id_salt("publish-state")
            .selected_text(form.state.label())
            .show_ui(ui, |ui| {
                for state in PublishState::ALL {
                    ui.selectable_value(&mut form.state, state, state.label());
                }
            });
        ui.add_space(theme::FIELD_SPACING);

        ui.button("Save").clicked()
    }
}
