use crate::upload_form::core::PreviewRef;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Longest edge kept for a decoded preview.
pub const MAX_PREVIEW_SIZE: u32 = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

impl PreviewImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut image = image::load_from_memory(bytes)?;
        if image.width() > MAX_PREVIEW_SIZE || image.height() > MAX_PREVIEW_SIZE {
            image = image.thumbnail(MAX_PREVIEW_SIZE, MAX_PREVIEW_SIZE);
        }
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            size: [width as usize, height as usize],
            rgba: rgba.into_raw(),
        })
    }
}

#[derive(Debug, Default)]
struct Entries {
    images: HashMap<PreviewRef, Arc<PreviewImage>>,
    /// Refs below this were released and may not come back.
    retired_below: u64,
}

/// Decoded previews keyed by the reference handed out on selection.
///
/// Entries are inserted by the effect runner and read by the renderer, so
/// the map is shared behind a mutex. Refs only grow, so a decode that
/// finishes after its preview was released is dropped on insert.
#[derive(Debug, Clone, Default)]
pub struct PreviewStore {
    entries: Arc<Mutex<Entries>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Ok(false)` when the preview was already released.
    pub fn insert(
        &self,
        preview: PreviewRef,
        image: PreviewImage,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        if preview.0 < entries.retired_below {
            return Ok(false);
        }
        entries.images.insert(preview, Arc::new(image));
        Ok(true)
    }

    pub fn get(&self, preview: PreviewRef) -> Option<Arc<PreviewImage>> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.images.get(&preview).cloned())
    }

    pub fn release(&self, preview: PreviewRef) -> bool {
        self.entries
            .lock()
            .map(|mut entries| {
                entries.retired_below = entries.retired_below.max(preview.0 + 1);
                entries.images.remove(&preview).is_some()
            })
            .unwrap_or(false)
    }

    #[cfg(test)]
    pub fn contains(&self, preview: PreviewRef) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.images.contains_key(&preview))
            .unwrap_or(false)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .map(|entries| entries.images.len())
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub fn poison(&self) {
        let entries = self.entries.clone();
        let _ = std::thread::spawn(move || {
            let _guard = entries.lock().unwrap();
            panic!("poisoning preview store");
        })
        .join();
    }
}
