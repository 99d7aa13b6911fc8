// Normalize file list change notifications into destination/source targets

use crate::models::{ChangeInfo, ChangeNotification, ChangeTarget};

/// Splits `path` at its last `/` into (directory, leaf). No `/` means an empty directory.
fn split_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(i) => (&path[..i], &path[i + 1..]),
        None => ("", path),
    }
}

fn notify_path(root: &str, dir: &str) -> String {
    if dir.is_empty() {
        root.to_string()
    } else {
        format!("{root}/{dir}")
    }
}

fn target(root: &str, path: &str) -> ChangeTarget {
    let (dir, leaf) = split_path(path);
    ChangeTarget {
        item: leaf.to_string(),
        path: dir.to_string(),
        notify_path: notify_path(root, dir),
    }
}

/// Source and destination share the destination's root; the server only reports
/// renames or moves within one root.
pub fn normalize_change_info(payload: &ChangeNotification) -> ChangeInfo {
    let root = payload.item.root.as_str();
    let mut info = ChangeInfo {
        root: root.to_string(),
        destination: target(root, &payload.item.path),
        source: None,
    };
    if let Some(source) = &payload.source_item {
        info.source = Some(target(root, &source.path));
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_path_cases() {
        assert_eq!(split_path("a/b/c.gcode"), ("a/b", "c.gcode"));
        assert_eq!(split_path("c.gcode"), ("", "c.gcode"));
        assert_eq!(split_path("dir/"), ("dir", ""));
        assert_eq!(split_path("/lead"), ("", "lead"));
        assert_eq!(split_path(""), ("", ""));
    }

    #[test]
    fn notify_path_collapses_to_root() {
        assert_eq!(notify_path("gcodes", ""), "gcodes");
        assert_eq!(notify_path("gcodes", "a/b"), "gcodes/a/b");
    }
}
