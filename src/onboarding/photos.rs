//! Ordered photo references with positional primacy.
//!
//! The photo at position 0 is the primary photo. There is no separate
//! "primary" flag: removing or promoting photos reorders the list instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of photos on a profile.
pub const MAX_PHOTOS: usize = 6;

/// Opaque reference to an already-uploaded photo (URL or local handle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PhotoRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered photo list, capped at [`MAX_PHOTOS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhotoCollection {
    photos: Vec<PhotoRef>,
}

impl PhotoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a photo. Returns false (and changes nothing) once the
    /// collection is full.
    pub fn add(&mut self, photo: PhotoRef) -> bool {
        if self.is_full() {
            debug!(photo = %photo, "Photo collection full, ignoring add");
            return false;
        }
        self.photos.push(photo);
        true
    }

    /// Remove the photo at `index`, shifting later photos down.
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<PhotoRef> {
        if index >= self.photos.len() {
            return None;
        }
        Some(self.photos.remove(index))
    }

    /// Swap the photo at `index` with the primary photo.
    ///
    /// The old primary moves to `index`. Returns false for index 0 or an
    /// out-of-range index.
    pub fn promote_to_primary(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.photos.len() {
            return false;
        }
        self.photos.swap(0, index);
        true
    }

    pub fn primary(&self) -> Option<&PhotoRef> {
        self.photos.first()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.photos.len() >= MAX_PHOTOS
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoRef> {
        self.photos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(refs: &[&str]) -> PhotoCollection {
        let mut photos = PhotoCollection::new();
        for r in refs {
            assert!(photos.add(PhotoRef::from(*r)));
        }
        photos
    }

    fn refs(photos: &PhotoCollection) -> Vec<&str> {
        photos.iter().map(PhotoRef::as_str).collect()
    }

    #[test]
    fn seventh_add_is_ignored() {
        let mut photos = collection(&["a", "b", "c", "d", "e", "f"]);
        assert!(photos.is_full());
        assert!(!photos.add(PhotoRef::from("g")));
        assert_eq!(photos.len(), MAX_PHOTOS);
        assert_eq!(refs(&photos), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn removing_primary_promotes_next() {
        let mut photos = collection(&["a", "b", "c"]);
        assert_eq!(photos.remove(0), Some(PhotoRef::from("a")));
        assert_eq!(photos.primary(), Some(&PhotoRef::from("b")));
        assert_eq!(refs(&photos), vec!["b", "c"]);
    }

    #[test]
    fn remove_middle_shifts_down() {
        let mut photos = collection(&["a", "b", "c", "d"]);
        photos.remove(1);
        assert_eq!(refs(&photos), vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut photos = collection(&["a"]);
        assert!(photos.remove(3).is_none());
        assert_eq!(photos.len(), 1);

        let mut empty = PhotoCollection::new();
        assert!(empty.remove(0).is_none());
    }

    #[test]
    fn promote_swaps_with_primary() {
        let mut photos = collection(&["a", "b", "c"]);
        assert!(photos.promote_to_primary(2));
        assert_eq!(refs(&photos), vec!["c", "b", "a"]);
    }

    #[test]
    fn promote_primary_or_out_of_range_is_noop() {
        let mut photos = collection(&["a", "b"]);
        assert!(!photos.promote_to_primary(0));
        assert!(!photos.promote_to_primary(5));
        assert_eq!(refs(&photos), vec!["a", "b"]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let photos = collection(&["https://cdn.example/1.jpg", "file:///tmp/2.jpg"]);
        let json = serde_json::to_value(&photos).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["https://cdn.example/1.jpg", "file:///tmp/2.jpg"])
        );
    }
}
