use crate::theme;
use eframe::egui::{self, RichText, TextEdit};
use prodraft_core::form::AttributeRows;

pub struct AttributesGrid;

impl AttributesGrid {
    /// Renders the key/value rows. Editing the last row grows the grid
    /// by one empty row; the new row's attribute input receives focus
    /// on the frame it first appears.
    pub fn show(ui: &mut egui::Ui, rows: &mut AttributeRows, pending_focus: &mut Option<String>) {
        ui.label(RichText::new("Specifications / Additional information").strong());

        egui::Frame::group(ui.style()).show(ui, |ui| {
            let mut edited: Option<String> = None;
            let mut removed: Option<String> = None;

            egui::Grid::new("attribute-rows")
                .num_columns(3)
                .spacing([theme::FIELD_SPACING, theme::FIELD_SPACING / 2.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Attribute").strong());
                    ui.label(RichText::new("Values").strong());
                    ui.label("");
                    ui.end_row();

                    for row in rows.rows_mut() {
                        let attribute_id = egui::Id::new(("attribute-input", row.id.as_str()));
                        let response =
                            ui.add(TextEdit::singleline(&mut row.attribute).id(attribute_id));
                        if pending_focus.as_deref() == Some(row.id.as_str()) {
                            response.request_focus();
                            *pending_focus = None;
                        }
                        if response.changed() {
                            edited = Some(row.id.clone());
                        }

                        if ui.add(TextEdit::singleline(&mut row.values)).changed() {
                            edited = Some(row.id.clone());
                        }

                        if ui.button("−").clicked() {
                            removed = Some(row.id.clone());
                        }
                        ui.end_row();
                    }
                });

            if ui.button("+").clicked() {
                rows.add();
            }

            if let Some(id) = edited {
                if let Some(new_id) = rows.note_edited(&id) {
                    *pending_focus = Some(new_id);
                }
            }
            if let Some(id) = removed {
                rows.remove(&id);
            }
        });
    }
}
