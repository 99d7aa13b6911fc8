// Thumbnail selection: pick one preview by size and turn it into a data URI

use crate::models::{FileMetadata, Thumbnail};

const DATA_URI_PREFIX: &str = "data:image/gif;base64,";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizePreference {
    #[default]
    Largest,
    Smallest,
}

impl SizePreference {
    pub fn from_prefer_larger(prefer_larger: bool) -> Self {
        if prefer_larger {
            SizePreference::Largest
        } else {
            SizePreference::Smallest
        }
    }

    /// True when `challenger` should replace `current`. Both sizes must be known;
    /// ties keep `current`.
    fn prefers(self, current: Option<u64>, challenger: Option<u64>) -> bool {
        match (current, challenger) {
            (Some(a), Some(c)) => match self {
                SizePreference::Largest => c > a,
                SizePreference::Smallest => c < a,
            },
            _ => false,
        }
    }
}

/// Returns the preferred thumbnail with its payload rewritten to a `data:` URI.
///
/// Left fold over the list: the first entry seeds the choice and a later entry
/// only wins with a strictly better known size. A chosen entry with a missing or
/// empty payload yields `None`.
pub fn select_thumbnail(file: &FileMetadata, preference: SizePreference) -> Option<Thumbnail> {
    let thumbs = file.thumbnails.as_deref()?;
    let (first, rest) = thumbs.split_first()?;
    let chosen = rest.iter().fold(first, |acc, c| {
        if preference.prefers(acc.size, c.size) {
            c
        } else {
            acc
        }
    });

    let data = chosen.data.as_deref().filter(|d| !d.is_empty())?;
    Some(Thumbnail {
        data: Some(format!("{DATA_URI_PREFIX}{data}")),
        ..chosen.clone()
    })
}
