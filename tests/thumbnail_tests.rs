// Thumbnail selection: size preference, tie handling, payload rewrite

mod common;

use common::{file_with, thumb};
use printstate::models::FileMetadata;
use printstate::thumbnail::{SizePreference, select_thumbnail};

#[test]
fn test_absent_or_empty_thumbnails_return_none() {
    let absent = FileMetadata::default();
    assert!(select_thumbnail(&absent, SizePreference::Largest).is_none());

    let empty = file_with(vec![]);
    assert!(select_thumbnail(&empty, SizePreference::Largest).is_none());
    assert!(select_thumbnail(&empty, SizePreference::Smallest).is_none());
}

#[test]
fn test_largest_picks_max_size() {
    let file = file_with(vec![
        thumb(Some(1_000), Some("small")),
        thumb(Some(9_000), Some("large")),
        thumb(Some(4_000), Some("medium")),
    ]);
    let t = select_thumbnail(&file, SizePreference::Largest).unwrap();
    assert_eq!(t.data.as_deref(), Some("data:image/gif;base64,large"));
    assert_eq!(t.size, Some(9_000));
}

#[test]
fn test_smallest_picks_min_size() {
    let file = file_with(vec![
        thumb(Some(4_000), Some("medium")),
        thumb(Some(1_000), Some("small")),
        thumb(Some(9_000), Some("large")),
    ]);
    let t = select_thumbnail(&file, SizePreference::Smallest).unwrap();
    assert_eq!(t.data.as_deref(), Some("data:image/gif;base64,small"));
}

#[test]
fn test_equal_sizes_keep_first_entry() {
    let file = file_with(vec![
        thumb(Some(500), Some("first")),
        thumb(Some(500), Some("second")),
        thumb(Some(500), Some("third")),
    ]);
    for pref in [SizePreference::Largest, SizePreference::Smallest] {
        let t = select_thumbnail(&file, pref).unwrap();
        assert_eq!(t.data.as_deref(), Some("data:image/gif;base64,first"));
    }
}

#[test]
fn test_missing_size_keeps_accumulator() {
    let file = file_with(vec![
        thumb(Some(100), Some("sized")),
        thumb(None, Some("unsized")),
    ]);
    let t = select_thumbnail(&file, SizePreference::Largest).unwrap();
    assert_eq!(t.data.as_deref(), Some("data:image/gif;base64,sized"));

    let file = file_with(vec![
        thumb(None, Some("unsized")),
        thumb(Some(100), Some("sized")),
    ]);
    let t = select_thumbnail(&file, SizePreference::Largest).unwrap();
    assert_eq!(t.data.as_deref(), Some("data:image/gif;base64,unsized"));
}

#[test]
fn test_zero_size_is_a_real_size() {
    let file = file_with(vec![thumb(Some(10), Some("ten")), thumb(Some(0), Some("zero"))]);
    let t = select_thumbnail(&file, SizePreference::Smallest).unwrap();
    assert_eq!(t.data.as_deref(), Some("data:image/gif;base64,zero"));
}

#[test]
fn test_selected_without_payload_returns_none() {
    let file = file_with(vec![thumb(Some(10), Some("small")), thumb(Some(99), None)]);
    assert!(select_thumbnail(&file, SizePreference::Largest).is_none());
    assert!(select_thumbnail(&file, SizePreference::Smallest).is_some());
}

#[test]
fn test_other_fields_pass_through() {
    let json = r#"{
        "filename": "cube.gcode",
        "thumbnails": [
            {"width": 32, "height": 32, "size": 1200, "data": "AAA", "relative_path": ".thumbs/cube-32x32.png"},
            {"width": 300, "height": 300, "size": 24000, "data": "BBB", "relative_path": ".thumbs/cube-300x300.png", "format": "png"}
        ]
    }"#;
    let file: FileMetadata = serde_json::from_str(json).unwrap();
    let t = select_thumbnail(&file, SizePreference::Largest).unwrap();
    assert_eq!(t.width, Some(300));
    assert_eq!(t.height, Some(300));
    assert_eq!(t.relative_path.as_deref(), Some(".thumbs/cube-300x300.png"));
    assert_eq!(t.extra.get("format").and_then(|v| v.as_str()), Some("png"));
    assert_eq!(t.data.as_deref(), Some("data:image/gif;base64,BBB"));
}

#[test]
fn test_empty_payload_returns_none() {
    let file = file_with(vec![thumb(Some(10), Some(""))]);
    assert!(select_thumbnail(&file, SizePreference::Largest).is_none());

    // chosen entry is the empty one, so the smaller valid one is not used either
    let file = file_with(vec![thumb(Some(5), Some("small")), thumb(Some(50), Some(""))]);
    assert!(select_thumbnail(&file, SizePreference::Largest).is_none());
}

#[test]
fn test_null_payload_from_wire_returns_none() {
    let json = r#"{"thumbnails": [{"size": 10, "data": null}]}"#;
    let file: FileMetadata = serde_json::from_str(json).unwrap();
    assert!(select_thumbnail(&file, SizePreference::Largest).is_none());
}

#[test]
fn test_selection_is_idempotent() {
    let file = file_with(vec![thumb(Some(3), Some("a")), thumb(Some(7), Some("b"))]);
    let first = select_thumbnail(&file, SizePreference::Largest);
    let second = select_thumbnail(&file, SizePreference::Largest);
    assert_eq!(first, second);
    // input untouched
    assert_eq!(
        file.thumbnails.as_ref().unwrap()[1].data.as_deref(),
        Some("b")
    );
}
