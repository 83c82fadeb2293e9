use super::*;

#[test]
fn test_hydration_hands_out_the_saved_document_once() {
    let mut bridge = EditorBridge::new();

    assert_eq!(bridge.take_hydration("{\"root\":{}}").as_deref(), Some("{\"root\":{}}"));
    assert_eq!(bridge.take_hydration("{\"root\":{}}"), None);
}

#[test]
fn test_empty_saved_document_hydrates_nothing_but_still_consumes_the_shot() {
    let mut bridge = EditorBridge::new();

    assert_eq!(bridge.take_hydration(""), None);
    assert_eq!(bridge.take_hydration("{\"root\":{}}"), None);
}

#[test]
fn test_echoing_the_hydrated_document_is_not_a_change() {
    let mut bridge = EditorBridge::new();
    bridge.take_hydration("{\"root\":{}}");

    assert!(!bridge.record_change("{\"root\":{}}"));
}

#[test]
fn test_record_change_deduplicates() {
    let mut bridge = EditorBridge::new();

    assert!(bridge.record_change("a"));
    assert!(!bridge.record_change("a"));
    assert!(bridge.record_change("b"));
    assert!(!bridge.record_change("b"));
    assert_eq!(bridge.recorded(), Some("b"));
}

#[test]
fn test_nothing_recorded_before_any_activity() {
    let bridge = EditorBridge::new();

    assert_eq!(bridge.recorded(), None);
}
