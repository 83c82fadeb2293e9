use crate::theme;
use eframe::egui::{self, RichText};
use prodraft_core::form::ProductForm;
use prodraft_core::validate::Field;
use std::path::Path;

/// Extensions accepted by the gallery drop area.
const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub struct FileDropArea;

impl FileDropArea {
    /// Renders the gallery selection: a drop hint plus the current
    /// files with per-file remove.
    pub fn show(ui: &mut egui::Ui, form: &mut ProductForm) {
        ui.label(RichText::new("Select file").strong());

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label("Drag and drop images anywhere in the window");
            ui.colored_label(theme::HINT_TEXT, "JPG, JPEG or PNG, up to 5 files, 4 MiB each");

            let mut removed = None;
            for (index, file) in form.files.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("{} ({})", file.name, format_size(file.size)));
                    if ui.small_button("−").clicked() {
                        removed = Some(index);
                    }
                });
            }
            if let Some(index) = removed {
                form.remove_file(index);
            }
        });

        for error in form.errors.iter().filter(|error| error.field == Field::Files) {
            ui.colored_label(theme::ERROR_TEXT, &error.message);
        }
    }

    /// Converts this frame's dropped files into references, keeping
    /// only supported image types. Unreadable entries are skipped.
    pub fn collect_dropped(ctx: &egui::Context) -> Vec<prodraft_core::types::FileRef> {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        let mut files = Vec::new();
        for file in dropped {
            let Some(path) = file.path else { continue };
            if !is_supported_image(&path) {
                continue;
            }
            match std::fs::metadata(&path) {
                Ok(metadata) => {
                    let name = path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or("file")
                        .to_string();
                    files.push(prodraft_core::types::FileRef {
                        name,
                        path,
                        size: metadata.len(),
                    });
                }
                Err(err) => tracing::warn!("ignoring dropped file: {err}"),
            }
        }
        files
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| extension.eq_ignore_ascii_case(accepted))
        })
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.0} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
