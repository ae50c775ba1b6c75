use json_graft::{Collection, GraftError, UpdateMode, apply_mode};

fn collection(pairs: &[(&str, &str)]) -> Collection {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_set_replaces_base() {
    let base = collection(&[("k1", "v1")]);
    let input = collection(&[("k2", "v2")]);
    let result = apply_mode(UpdateMode::Set, Some(&input), Some(&base));
    assert_eq!(result, input);
}

#[test]
fn test_update_merges() {
    let base = collection(&[("k1", "v1")]);
    let input = collection(&[("k2", "v2")]);
    let result = apply_mode(UpdateMode::Update, Some(&input), Some(&base));
    assert_eq!(result, collection(&[("k1", "v1"), ("k2", "v2")]));
}

#[test]
fn test_update_override_wins() {
    let base = collection(&[("Accept", "text/html"), ("X-Id", "1")]);
    let input = collection(&[("Accept", "application/json")]);
    let result = apply_mode(UpdateMode::Update, Some(&input), Some(&base));
    assert_eq!(result["Accept"], "application/json");
    assert_eq!(result["X-Id"], "1");
    assert_eq!(result.len(), 2);
}

#[test]
fn test_delete_removes_named_keys() {
    let base = collection(&[("k1", "v1"), ("k2", "v2")]);
    let input = collection(&[("k1", "")]);
    let result = apply_mode(UpdateMode::Delete, Some(&input), Some(&base));
    assert_eq!(result, collection(&[("k2", "v2")]));
}

#[test]
fn test_delete_ignores_values_and_missing_keys() {
    let base = collection(&[("a", "1"), ("b", "2"), ("c", "3")]);
    let input = collection(&[("a", "anything"), ("zz", "x")]);
    let result = apply_mode(UpdateMode::Delete, Some(&input), Some(&base));
    let keys: Vec<_> = result.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "c"]);
}

#[test]
fn test_update_then_delete() {
    let merged = apply_mode(
        UpdateMode::Update,
        Some(&collection(&[("k2", "v2")])),
        Some(&collection(&[("k1", "v1")])),
    );
    assert_eq!(merged, collection(&[("k1", "v1"), ("k2", "v2")]));

    let result = apply_mode(UpdateMode::Delete, Some(&collection(&[("k1", "")])), Some(&merged));
    assert_eq!(result, collection(&[("k2", "v2")]));
}

#[test]
fn test_missing_input_returns_base_for_every_mode() {
    let base = collection(&[("k", "v")]);
    for mode in [UpdateMode::Set, UpdateMode::Update, UpdateMode::Delete] {
        assert_eq!(apply_mode(mode, None, Some(&base)), base, "mode {}", mode);
    }
}

#[test]
fn test_missing_base_is_empty() {
    let input = collection(&[("k", "v")]);
    assert_eq!(apply_mode(UpdateMode::Update, Some(&input), None), input);
    assert_eq!(apply_mode(UpdateMode::Set, Some(&input), None), input);
    assert!(apply_mode(UpdateMode::Delete, Some(&input), None).is_empty());
    assert!(apply_mode(UpdateMode::Update, None, None).is_empty());
}

#[test]
fn test_base_is_not_modified() {
    let base = collection(&[("k1", "v1"), ("k2", "v2")]);
    let snapshot = base.clone();
    let input = collection(&[("k1", "")]);
    let _ = apply_mode(UpdateMode::Delete, Some(&input), Some(&base));
    let _ = apply_mode(UpdateMode::Update, Some(&input), Some(&base));
    assert_eq!(base, snapshot);
}

#[test]
fn test_mode_round_trips_through_text() {
    for mode in [UpdateMode::Set, UpdateMode::Update, UpdateMode::Delete] {
        assert_eq!(mode.to_string().parse::<UpdateMode>().unwrap(), mode);
    }
    assert_eq!("Delete".parse::<UpdateMode>().unwrap(), UpdateMode::Delete);
}

#[test]
fn test_unsupported_mode() {
    let err = "replace".parse::<UpdateMode>().unwrap_err();
    assert!(matches!(err, GraftError::UnsupportedMode(ref m) if m == "replace"));
    assert!(err.to_string().contains("replace"));
}
