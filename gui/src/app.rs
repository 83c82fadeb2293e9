//! Top-level application state and frame loop.

use crate::notices::Notices;
use crate::panels::{FileDropArea, PricingFormPanel, ProductFormPanel};
use crate::theme;
use eframe::egui;
use prodraft_core::form::{PricingForm, ProductForm};
use prodraft_core::storage::JsonFileStorage;
use prodraft_core::store::DraftStore;
use prodraft_core::types::{AppConfig, Theme};
use serde::Serialize;
use std::path::PathBuf;

pub struct AdminApp {
    store: DraftStore<JsonFileStorage>,
    product_form: ProductForm,
    pricing_form: PricingForm,
    notices: Notices,
    config: AppConfig,
    data_dir: PathBuf,
    /// Attribute row whose input should grab focus on its first frame.
    pending_focus: Option<String>,
}

impl AdminApp {
    pub fn new(data_dir: PathBuf, config: AppConfig) -> Self {
        let store = DraftStore::open(JsonFileStorage::new(&data_dir));
        let product_form = ProductForm::new(&store);
        let pricing_form = PricingForm::new(&store);
        Self {
            store,
            product_form,
            pricing_form,
            notices: Notices::new(),
            config,
            data_dir,
            pending_focus: None,
        }
    }

    /// Clears the draft and remounts both forms over the fresh state.
    fn reset_draft(&mut self) {
        self.store.reset();
        self.product_form = ProductForm::new(&self.store);
        self.pricing_form = PricingForm::new(&self.store);
        self.pending_focus = None;
    }

    fn submit_product(&mut self) {
        if let Some(values) = self.product_form.submit(&mut self.store) {
            self.notify_saved(&values);
        }
    }

    fn submit_pricing(&mut self) {
        if let Some(values) = self.pricing_form.submit(&mut self.store) {
            self.notify_saved(&values);
        }
    }

    /// The merge has already happened when this runs; a failure here is
    /// logged and shown, never propagated.
    fn notify_saved<T: Serialize>(&mut self, values: &T) {
        match serde_json::to_string_pretty(values) {
            Ok(json) => self.notices.success("Draft saved", json),
            Err(err) => {
                tracing::error!("failed to render submitted values: {err}");
                self.notices
                    .error("Failed to submit the form. Please try again.");
            }
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.heading("Product admin");
            ui.separator();
            if ui.button("New draft").clicked() {
                self.reset_draft();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let before = self.config.theme;
                egui::ComboBox::from_id_salt("theme")
                    .selected_text(self.config.theme.to_string())
                    .show_ui(ui, |ui| {
                        for option in [Theme::Dark, Theme::Light, Theme::System] {
                            ui.selectable_value(&mut self.config.theme, option, option.to_string());
                        }
                    });
                if self.config.theme != before {
                    theme::apply_theme(ctx, self.config.theme);
                    if let Err(err) = self.config.save(&AppConfig::path(&self.data_dir)) {
                        tracing::warn!("failed to save config: {err}");
                    }
                }
            });
        });
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up writes the other form (or a reset) made last frame.
        self.product_form.sync(&self.store);
        self.pricing_form.sync(&self.store);

        let dropped = FileDropArea::collect_dropped(ctx);
        if !dropped.is_empty() {
            self.product_form.add_files(dropped);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.show_toolbar(ui, ctx));

        let pricing_submit = egui::SidePanel::right("pricing")
            .exact_width(theme::PRICING_PANEL_WIDTH)
            .show(ctx, |ui| PricingFormPanel::show(ui, &mut self.pricing_form))
            .inner;

        let product_submit = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        ProductFormPanel::show(ui, &mut self.product_form, &mut self.pending_focus)
                    })
                    .inner
            })
            .inner;

        if product_submit {
            self.submit_product();
        }
        if pricing_submit {
            self.submit_pricing();
        }

        self.notices.show(ctx);
    }
}
