// File list change notification (in) and normalized change info (out)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What happened to the item; informational, normalization ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    CreateFile,
    CreateDir,
    DeleteFile,
    DeleteDir,
    MoveFile,
    MoveDir,
    ModifyFile,
    RootUpdate,
    #[serde(other)]
    Unknown,
}

/// A file or folder addressed as `root` + slash-delimited `path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub root: String,
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemRef {
    pub fn new(root: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<FileAction>,
    pub item: ItemRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_item: Option<ItemRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTarget {
    /// Leaf name (file or folder).
    pub item: String,
    /// Containing directory, relative to the root.
    pub path: String,
    /// Bare root when `path` is empty, else `root/path`.
    pub notify_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    pub root: String,
    pub destination: ChangeTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ChangeTarget>,
}
