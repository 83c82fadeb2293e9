mod attributes;
mod editor;
mod file_drop;
mod pricing_form;
mod product_form;

pub use file_drop::FileDropArea;
pub use pricing_form::PricingFormPanel;
pub use product_form::ProductFormPanel;
