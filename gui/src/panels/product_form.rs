use super::attributes::AttributesGrid;
use super::editor::EditorPane;
use super::file_drop::FileDropArea;
use crate::theme;
use eframe::egui::{self, RichText, TextEdit};
use prodraft_core::form::ProductForm;
use prodraft_core::validate::Field;

pub struct ProductFormPanel;

impl ProductFormPanel {
    /// Renders the product form. Returns true if "Save draft" was
    /// clicked.
    pub fn show(
        ui: &mut egui::Ui,
        form: &mut ProductForm,
        pending_focus: &mut Option<String>,
    ) -> bool {
        let submit = ui.button("Save draft").clicked();
        ui.add_space(theme::FIELD_SPACING);

        Self::text_field(ui, "Link", &mut form.link);
        Self::error_line(ui, form, Field::Link);

        Self::text_field(ui, "Product code", &mut form.code);
        Self::error_line(ui, form, Field::Code);

        if Self::text_field(ui, "Product name", &mut form.name).changed() {
            form.name_changed();
        }
        Self::error_line(ui, form, Field::Name);

        if Self::text_field(ui, "Description", &mut form.description).changed() {
            form.description_changed();
        }
        Self::error_line(ui, form, Field::Description);

        if Self::text_field(ui, "SEO title", &mut form.seo_title).changed() {
            form.seo_title_changed();
        }
        Self::error_line(ui, form, Field::SeoTitle);

        if Self::text_field(ui, "SEO description", &mut form.seo_description).changed() {
            form.seo_description_changed();
        }
        Self::error_line(ui, form, Field::SeoDescription);

        ui.add_space(theme::FIELD_SPACING);
        FileDropArea::show(ui, form);

        ui.add_space(theme::FIELD_SPACING);
        AttributesGrid::show(ui, &mut form.attributes, pending_focus);

        ui.add_space(theme::FIELD_SPACING);
        EditorPane::show(ui, form);

        submit
    }

    fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String) -> egui::Response {
        ui.label(RichText::new(label).strong());
        let response = ui.add(TextEdit::singleline(value).desired_width(f32::INFINITY));
        ui.add_space(theme::FIELD_SPACING / 2.0);
        response
    }

    fn error_line(ui: &mut egui::Ui, form: &ProductForm, field: Field) {
        if let Some(message) = form.error(field) {
            ui.colored_label(theme::ERROR_TEXT, message);
        }
    }
}
