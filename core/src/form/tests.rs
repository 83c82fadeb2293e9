use super::*;
use crate::storage::MemoryStorage;
use crate::types::Draft;

mod common {
    use super::*;

    pub(super) fn open_store() -> DraftStore<MemoryStorage> {
        DraftStore::open(MemoryStorage::new())
    }

    pub(super) fn fill_required(form: &mut ProductForm) {
        form.link = "ao-thun".to_string();
        form.code = "SP-001".to_string();
        form.set_name("Áo thun");
        form.set_description("Cotton tee");
    }
}

mod seo_autofill {
    use super::common::{fill_required, open_store};
    use super::*;

    #[test]
    fn test_seo_fields_follow_their_sources() {
        let store = open_store();
        let mut form = ProductForm::new(&store);

        form.set_name("Áo thun");
        form.set_description("Cotton tee");

        assert_eq!(form.seo_title, "Áo thun");
        assert_eq!(form.seo_description, "Cotton tee");
    }

    #[test]
    fn test_manual_edit_stops_auto_fill_for_that_field_only() {
        let store = open_store();
        let mut form = ProductForm::new(&store);
        form.set_name("Áo thun");

        form.set_seo_title("Áo thun Premium");
        form.set_name("Áo thun V2");
        form.set_description("Cotton tee");

        assert_eq!(form.seo_title, "Áo thun Premium");
        assert_eq!(form.seo_description, "Cotton tee");
    }

    #[test]
    fn test_scenario_from_empty_draft_to_kept_manual_title() {
        let store = open_store();
        let mut form = ProductForm::new(&store);

        form.set_name("Áo thun");
        assert_eq!(form.seo_title, "Áo thun");

        form.set_seo_title("Áo thun Premium");
        form.set_name("Áo thun V2");
        assert_eq!(form.seo_title, "Áo thun Premium");
    }

    #[test]
    fn test_a_fresh_mount_resumes_auto_fill() {
        let mut store = open_store();
        let mut form = ProductForm::new(&store);
        fill_required(&mut form);
        form.set_seo_title("Manual");
        form.submit(&mut store).unwrap();

        let mut remounted = ProductForm::new(&store);
        remounted.set_name("Áo thun V3");

        assert_eq!(remounted.seo_title, "Áo thun V3");
    }
}

mod product_submit {
    use super::common::{fill_required, open_store};
    use super::*;
    use crate::validate::Field;

    #[test]
    fn test_empty_form_fails_with_inline_errors_and_no_store_mutation() {
        let mut store = open_store();
        let mut form = ProductForm::new(&store);

        assert!(form.submit(&mut store).is_none());

        assert!(form.error(Field::Link).is_some());
        assert!(form.error(Field::Name).is_some());
        assert_eq!(store.revision(), 0);
        assert_eq!(store.get(), &Draft::default());
    }

    #[test]
    fn test_valid_form_merges_everything_as_one_patch() {
        let mut store = open_store();
        let mut form = ProductForm::new(&store);
        fill_required(&mut form);

        let submitted = form.submit(&mut store).unwrap();

        assert_eq!(store.revision(), 1);
        let draft = store.get();
        assert_eq!(draft.name, "Áo thun");
        assert_eq!(draft.seo_title, "Áo thun");
        assert_eq!(draft.attributes, submitted.attributes);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_editor_document_is_pushed_at_submit_time_only() {
        let mut store = open_store();
        let mut form = ProductForm::new(&store);
        fill_required(&mut form);

        form.editor_text = "A long description".to_string();
        assert!(form.editor_changed());
        assert_eq!(store.get().description_doc, "");

        form.submit(&mut store).unwrap();
        assert_eq!(store.get().description_doc, "A long description");
    }

    #[test]
    fn test_failed_submit_keeps_the_previous_draft_intact() {
        let mut store = open_store();
        let mut form = ProductForm::new(&store);
        fill_required(&mut form);
        form.submit(&mut store).unwrap();
        let saved = store.get().clone();

        form.link = String::new();
        assert!(form.submit(&mut store).is_none());

        assert_eq!(store.get(), &saved);
    }

    #[test]
    fn test_six_files_abort_the_submit() {
        let mut store = open_store();
        let mut form = ProductForm::new(&store);
        fill_required(&mut form);
        form.add_files((0..6).map(|i| FileRef {
            name: format!("{i}.png"),
            path: std::path::PathBuf::from(format!("/tmp/{i}.png")),
            size: 1024,
        }));

        assert!(form.submit(&mut store).is_none());
        assert_eq!(form.error(Field::Files), Some("maximum 5 files are allowed"));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_remove_file_drops_exactly_that_entry() {
        let store = open_store();
        let mut form = ProductForm::new(&store);
        form.add_files([
            FileRef {
                name: "a.png".to_string(),
                path: std::path::PathBuf::from("/tmp/a.png"),
                size: 10,
            },
            FileRef {
                name: "b.png".to_string(),
                path: std::path::PathBuf::from("/tmp/b.png"),
                size: 10,
            },
        ]);

        form.remove_file(0);

        assert_eq!(form.files.len(), 1);
        assert_eq!(form.files[0].name, "b.png");
    }
}

mod pricing_submit {
    use super::common::open_store;
    use super::*;
    use crate::validate::Field;

    #[test]
    fn test_valid_price_and_state_merge_into_the_store() {
        let mut store = open_store();
        let mut form = PricingForm::new(&store);
        form.price_text = "12.5".to_string();
        form.state = PublishState::Contact;

        let submitted = form.submit(&mut store).unwrap();

        assert_eq!(submitted.price, 12.5);
        assert_eq!(store.get().price, 12.5);
        assert_eq!(store.get().state, PublishState::Contact);
    }

    #[test]
    fn test_unparseable_price_fails_inline_without_store_mutation() {
        let mut store = open_store();
        let mut form = PricingForm::new(&store);
        form.price_text = "abc".to_string();

        assert!(form.submit(&mut store).is_none());

        assert_eq!(form.error(Field::Price), Some("price must be a number"));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_empty_price_coerces_to_zero() {
        let mut store = open_store();
        let mut form = PricingForm::new(&store);
        form.price_text = String::new();

        let submitted = form.submit(&mut store).unwrap();

        assert_eq!(submitted.price, 0.0);
    }
}

mod cross_form {
    use super::common::{fill_required, open_store};
    use super::*;

    #[test]
    fn test_a_pricing_write_leaves_product_fields_untouched() {
        let mut store = open_store();
        let mut product = ProductForm::new(&store);
        fill_required(&mut product);
        product.submit(&mut store).unwrap();

        let mut pricing = PricingForm::new(&store);
        pricing.price_text = "30".to_string();
        pricing.submit(&mut store).unwrap();
        product.sync(&store);

        assert_eq!(product.name, "Áo thun");
        assert_eq!(store.get().name, "Áo thun");
        assert_eq!(store.get().price, 30.0);
    }

    #[test]
    fn test_sync_replaces_in_progress_edits_with_the_shared_state() {
        let mut store = open_store();
        let mut product = ProductForm::new(&store);
        fill_required(&mut product);
        product.submit(&mut store).unwrap();

        let mut other = ProductForm::new(&store);
        other.set_name("Renamed");
        other.submit(&mut store).unwrap();

        product.sync(&store);
        assert_eq!(product.name, "Renamed");
    }

    #[test]
    fn test_sync_never_touches_the_editor_pane() {
        let mut store = open_store();
        let mut product = ProductForm::new(&store);
        fill_required(&mut product);
        product.editor_text = "typing in progress".to_string();
        product.editor_changed();

        let mut pricing = PricingForm::new(&store);
        pricing.price_text = "30".to_string();
        pricing.submit(&mut store).unwrap();
        product.sync(&store);

        assert_eq!(product.editor_text, "typing in progress");
    }
}
