use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::{ImageKey, Label, SlotImage};

/// Published to subscribers after every change to the store
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelSnapshot {
    pub revision: u64,
    pub images: Vec<SlotImage>,
    pub previous_images: Vec<SlotImage>,
}

/// Holds the images currently displayed on the reel.
///
/// Order of `images` is display order and no operation reorders it.
/// Lookups are linear scans; a reel holds a handful of entries.
/// Misses are silent: nothing changes and nothing is published.
#[derive(Debug)]
pub struct SlotImageStore {
    images: Vec<SlotImage>,
    previous_images: Vec<SlotImage>,
    revision: u64,
    changes: watch::Sender<ReelSnapshot>,
}

impl Default for SlotImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotImageStore {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(ReelSnapshot::default());
        Self {
            images: Vec::new(),
            previous_images: Vec::new(),
            revision: 0,
            changes,
        }
    }

    /// Replace the whole reel with a copy of `images`
    pub fn initialize_images(&mut self, images: &[SlotImage]) {
        self.images = images.to_vec();
        self.publish();
    }

    /// Point the first entry matching `key` at a new asset.
    ///
    /// `id` and `type` are kept; `src` and `label` are replaced, so passing
    /// `None` clears an existing label.
    pub fn update_image(
        &mut self,
        key: impl Into<ImageKey>,
        src: impl Into<String>,
        label: Option<Label>,
    ) {
        let key = key.into();
        let Some(index) = self.images.iter().position(|img| key.matches(img)) else {
            return;
        };

        let slot = &mut self.images[index];
        *slot = SlotImage {
            id: slot.id,
            image_type: slot.image_type,
            src: src.into(),
            label,
        };
        self.publish();
    }

    /// Record the current reel as the restore point
    pub fn save_previous_images(&mut self) {
        self.previous_images = self.images.clone();
        self.publish();
    }

    /// Put the restore point back on the reel. No-op when nothing was saved.
    pub fn restore_previous_images(&mut self) {
        if self.previous_images.is_empty() {
            return;
        }
        self.images = self.previous_images.clone();
        self.publish();
    }

    pub fn images(&self) -> &[SlotImage] {
        &self.images
    }

    pub fn previous_images(&self) -> &[SlotImage] {
        &self.previous_images
    }

    pub fn find(&self, key: impl Into<ImageKey>) -> Option<&SlotImage> {
        let key = key.into();
        self.images.iter().find(|img| key.matches(img))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> ReelSnapshot {
        ReelSnapshot {
            revision: self.revision,
            images: self.images.clone(),
            previous_images: self.previous_images.clone(),
        }
    }

    /// Receive a snapshot after every change. The receiver starts at the
    /// current state.
    pub fn subscribe(&self) -> watch::Receiver<ReelSnapshot> {
        self.changes.subscribe()
    }

    fn publish(&mut self) {
        self.revision += 1;
        debug!(
            "Reel revision {} ({} images, {} saved)",
            self.revision,
            self.images.len(),
            self.previous_images.len()
        );
        // send_replace stores the value even when nobody is subscribed
        self.changes.send_replace(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageType;

    fn reel() -> Vec<SlotImage> {
        vec![
            SlotImage::new(1, ImageType::A, "a.jpg"),
            SlotImage::new(2, ImageType::J, "j.jpg"),
            SlotImage::new(3, ImageType::Gun, "gun.jpg").with_label(Label::Bonus),
            SlotImage::new(4, ImageType::J, "j.jpg"),
        ]
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SlotImageStore::new();
        assert!(store.is_empty());
        assert!(!store.is_initialized());
        assert!(store.previous_images().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_initialize_copies_in_order() {
        let mut source = reel();
        let mut store = SlotImageStore::new();
        store.initialize_images(&source);
        assert_eq!(store.images(), source.as_slice());

        // Later edits to the caller's vector do not leak into the store
        source[0].src = "changed.jpg".into();
        assert_eq!(store.images()[0].src, "a.jpg");
    }

    #[test]
    fn test_initialize_accepts_empty() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());
        store.initialize_images(&[]);
        assert!(store.is_empty());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_update_by_id_replaces_src_and_label() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());

        store.update_image(2, "new_j.jpg", Some(Label::Wild));

        let updated = store.find(2).unwrap();
        assert_eq!(updated.src, "new_j.jpg");
        assert_eq!(updated.label, Some(Label::Wild));
        assert_eq!(updated.image_type, ImageType::J);
        assert_eq!(store.len(), 4);

        let before = reel();
        for (i, img) in store.images().iter().enumerate() {
            if img.id != 2 {
                assert_eq!(img, &before[i]);
            }
        }
    }

    #[test]
    fn test_update_without_label_clears_it() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());

        store.update_image(3, "gun2.jpg", None);

        let updated = store.find(3).unwrap();
        assert_eq!(updated.src, "gun2.jpg");
        assert_eq!(updated.label, None);
    }

    #[test]
    fn test_update_by_type_hits_first_match_only() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());

        store.update_image(ImageType::J, "jack.jpg", None);

        assert_eq!(store.images()[1].src, "jack.jpg");
        assert_eq!(store.images()[1].id, 2);
        assert_eq!(store.images()[3].src, "j.jpg");
    }

    #[test]
    fn test_update_missing_key_is_noop() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());
        let revision = store.revision();

        store.update_image(999, "x", None);
        store.update_image(ImageType::Dog, "x", Some(Label::Wild));

        assert_eq!(store.images(), reel().as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_update_on_empty_store_is_noop() {
        let mut store = SlotImageStore::new();
        store.update_image(1, "x", None);
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_restore_with_empty_snapshot_is_noop() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());
        let revision = store.revision();

        store.restore_previous_images();

        assert_eq!(store.images(), reel().as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_save_then_restore() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());
        store.save_previous_images();

        store.update_image(1, "ace.jpg", None);
        store.update_image(3, "gun2.jpg", None);
        assert_ne!(store.images(), store.previous_images());

        store.restore_previous_images();
        assert_eq!(store.images(), reel().as_slice());
        assert_eq!(store.images(), store.previous_images());

        // Restored entries are a copy; the restore point stays as saved
        store.update_image(2, "jack.jpg", Some(Label::Wild));
        assert_eq!(store.previous_images(), reel().as_slice());
        assert_eq!(store.images()[1].src, "jack.jpg");
    }

    #[test]
    fn test_save_empty_clears_snapshot() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());
        store.save_previous_images();
        assert_eq!(store.previous_images().len(), 4);

        store.initialize_images(&[]);
        store.save_previous_images();
        assert!(store.previous_images().is_empty());

        let kept = vec![SlotImage::new(2, ImageType::K, "k.jpg")];
        store.initialize_images(&kept);
        let revision = store.revision();

        store.restore_previous_images();

        assert_eq!(store.images(), kept.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_subscriber_sees_each_change() {
        let mut store = SlotImageStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.initialize_images(&reel());
        assert!(rx.has_changed().unwrap());
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.revision, 1);
        assert_eq!(snap.images.len(), 4);

        // Misses don't notify
        store.update_image(42, "x", None);
        assert!(!rx.has_changed().unwrap());

        store.update_image(1, "ace.jpg", None);
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.revision, 2);
        assert_eq!(snap.images[0].src, "ace.jpg");
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut store = SlotImageStore::new();
        store.initialize_images(&reel());
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert!(json.get("previousImages").is_some());
        assert_eq!(json["revision"], 1);
        assert_eq!(json["images"][2]["label"], "bonus");
    }
}
