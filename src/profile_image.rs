use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

pub const PROFILE_IMAGE_KEY: &str = "profileImage";
/// Browsers cap `localStorage` at roughly five million characters per origin.
pub const STORAGE_QUOTA_CHARS: usize = 5_000_000;
/// Largest raw upload whose base64 data URL still fits under the quota.
pub const MAX_UPLOAD_BYTES: u64 = 3584 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Only image files can be used ({0} given)")]
    UnsupportedMediaType(String),
    #[error("Image is too large ({size} bytes, max {limit})")]
    TooLarge { size: u64, limit: u64 },
    #[error("Couldn't read the file: {0}")]
    ReadFailed(String),
    #[error("Couldn't save the image: {0}")]
    Storage(#[from] StorageError),
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// `data:<media type>;base64,<payload>`
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Checks that a persisted value is an encoded image we could have written.
pub fn is_image_data_url(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:") else {
        return false;
    };
    let Some((media_type, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    is_image_media_type(media_type) && STANDARD.decode(payload).is_ok()
}

/// Profile photo state for one mounted picture component.
#[derive(Debug, Clone)]
pub struct ImageStore<S> {
    storage: S,
    current: Option<String>,
    loading: bool,
    dragging: bool,
    dialog_open: bool,
    last_error: Option<UploadError>,
}

impl<S: KeyValueStore> ImageStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
            loading: false,
            dragging: false,
            dialog_open: false,
            last_error: None,
        }
    }

    pub fn load(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    pub fn hydrate(&mut self) {
        self.current = match self.storage.get(PROFILE_IMAGE_KEY) {
            Ok(Some(value)) if is_image_data_url(&value) => Some(value),
            Ok(Some(_)) => {
                log::warn!("ignoring malformed stored profile image");
                None
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("couldn't read profile image: {e}");
                None
            }
        };
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn last_error(&self) -> Option<&UploadError> {
        self.last_error.as_ref()
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.dragging = false;
        self.last_error = None;
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Validates a picked or dropped file and marks the read as pending.
    /// A rejected file leaves the image and storage alone.
    pub fn begin_upload(&mut self, media_type: &str, size: u64) -> Result<(), UploadError> {
        self.dragging = false;
        let check = if !is_image_media_type(media_type) {
            Err(UploadError::UnsupportedMediaType(media_type.to_string()))
        } else if size > MAX_UPLOAD_BYTES {
            Err(UploadError::TooLarge {
                size,
                limit: MAX_UPLOAD_BYTES,
            })
        } else {
            Ok(())
        };
        match check {
            Ok(()) => {
                self.loading = true;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                log::warn!("upload rejected: {e}");
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Completes a read started with [`ImageStore::begin_upload`].
    pub fn finish_upload(
        &mut self,
        media_type: &str,
        read: Result<Vec<u8>, String>,
    ) -> Result<(), UploadError> {
        self.loading = false;
        let bytes = match read {
            Ok(bytes) => bytes,
            Err(reason) => {
                let e = UploadError::ReadFailed(reason);
                log::warn!("{e}");
                self.last_error = Some(e.clone());
                return Err(e);
            }
        };
        let encoded = encode_data_url(media_type, &bytes);
        let persisted = self.storage.set(PROFILE_IMAGE_KEY, &encoded);
        log::debug!("profile image updated ({} bytes)", bytes.len());
        self.current = Some(encoded);
        match persisted {
            Ok(()) => {
                self.dialog_open = false;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                // still shown for this session, just not remembered
                log::warn!("couldn't persist profile image: {e}");
                let e = UploadError::from(e);
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Synchronous upload for callers that already hold the bytes.
    pub fn upload(&mut self, media_type: &str, bytes: Vec<u8>) -> Result<(), UploadError> {
        self.begin_upload(media_type, bytes.len() as u64)?;
        self.finish_upload(media_type, Ok(bytes))
    }

    pub fn remove(&mut self) {
        if let Err(e) = self.storage.remove(PROFILE_IMAGE_KEY) {
            log::warn!("couldn't remove profile image: {e}");
        }
        if self.current.take().is_some() {
            log::debug!("profile image removed");
        }
        self.dialog_open = false;
    }

    /// A write that the browser rejected after the upload finished. The image
    /// stays for this session and the dialog reopens to show why.
    pub fn record_storage_error(&mut self, error: StorageError) {
        log::warn!("couldn't persist profile image: {error}");
        self.last_error = Some(UploadError::Storage(error));
        self.dialog_open = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    struct FullStorage;

    impl KeyValueStore for FullStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected("QuotaExceededError".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("image/png", b"hi"),
            "data:image/png;base64,aGk="
        );
        assert!(is_image_data_url("data:image/png;base64,aGk="));
        assert!(!is_image_data_url("data:text/plain;base64,aGk="));
        assert!(!is_image_data_url("data:image/png;base64,***"));
        assert!(!is_image_data_url("https://example.com/me.png"));
    }

    #[test]
    fn test_upload_then_reload() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        assert!(!store.has_image());

        store.open_dialog();
        store.upload("image/png", PNG_BYTES.to_vec()).unwrap();
        let expected = encode_data_url("image/png", PNG_BYTES);
        assert_eq!(store.current(), Some(expected.as_str()));
        assert!(!store.is_dialog_open());
        assert!(!store.is_loading());

        let reloaded = ImageStore::load(&storage);
        assert_eq!(reloaded.current(), Some(expected.as_str()));
    }

    #[test]
    fn test_rejects_non_image() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        store.upload("image/png", PNG_BYTES.to_vec()).unwrap();
        let before = store.current().map(str::to_string);

        let res = store.upload("text/plain", b"hello".to_vec());
        assert_eq!(
            res,
            Err(UploadError::UnsupportedMediaType("text/plain".to_string()))
        );
        assert_eq!(store.current().map(str::to_string), before);
        assert_eq!(storage.get(PROFILE_IMAGE_KEY).unwrap(), before);
        assert!(!store.is_loading());
        assert!(store.last_error().is_some());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        let res = store.begin_upload("image/jpeg", MAX_UPLOAD_BYTES + 1);
        assert!(matches!(res, Err(UploadError::TooLarge { .. })));
        assert!(!store.is_loading());
        assert!(!storage.contains(PROFILE_IMAGE_KEY));
    }

    #[test]
    fn test_read_failure_keeps_previous_image() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        store.upload("image/png", PNG_BYTES.to_vec()).unwrap();
        let before = store.current().map(str::to_string);

        store.open_dialog();
        store.begin_upload("image/gif", 10).unwrap();
        assert!(store.is_loading());
        let res = store.finish_upload("image/gif", Err("permission denied".to_string()));
        assert!(matches!(res, Err(UploadError::ReadFailed(_))));
        assert!(!store.is_loading());
        assert_eq!(store.current().map(str::to_string), before);
        // dialog stays open so the error can be shown
        assert!(store.is_dialog_open());
    }

    #[test]
    fn test_persist_failure_keeps_image_for_session() {
        let mut store = ImageStore::load(FullStorage);
        let res = store.upload("image/png", PNG_BYTES.to_vec());
        assert!(matches!(res, Err(UploadError::Storage(_))));
        assert!(store.has_image());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_largest_upload_fits_storage_quota() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES as usize];
        assert!(encode_data_url("image/jpeg", &bytes).len() < STORAGE_QUOTA_CHARS);

        let mut store = ImageStore::load(MemoryStore::new());
        assert!(store.begin_upload("image/jpeg", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_late_storage_error_reopens_dialog() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        store.upload("image/png", PNG_BYTES.to_vec()).unwrap();
        assert!(!store.is_dialog_open());

        store.record_storage_error(StorageError::Rejected("QuotaExceededError".to_string()));
        assert!(store.has_image());
        assert!(store.is_dialog_open());
        assert!(matches!(store.last_error(), Some(UploadError::Storage(_))));

        store.close_dialog();
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_remove_clears_storage() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        store.upload("image/webp", PNG_BYTES.to_vec()).unwrap();
        store.open_dialog();

        store.remove();
        assert!(!store.has_image());
        assert!(!storage.contains(PROFILE_IMAGE_KEY));
        assert!(!store.is_dialog_open());

        // removing again is a no-op
        store.remove();
        assert!(!store.has_image());
    }

    #[test]
    fn test_drag_flags_do_not_touch_data() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        store.drag_over();
        assert!(store.is_dragging());
        store.drag_leave();
        assert!(!store.is_dragging());

        store.drag_over();
        // dropping goes through the same path as picking a file
        store.upload("image/png", PNG_BYTES.to_vec()).unwrap();
        assert!(!store.is_dragging());
        assert!(store.has_image());
    }

    #[test]
    fn test_malformed_stored_value_is_ignored() {
        let storage = MemoryStore::new();
        storage.set(PROFILE_IMAGE_KEY, "not an image").unwrap();
        let store = ImageStore::load(&storage);
        assert!(!store.has_image());
    }

    #[test]
    fn test_closing_dialog_clears_error() {
        let storage = MemoryStore::new();
        let mut store = ImageStore::load(&storage);
        store.open_dialog();
        let _ = store.begin_upload("application/pdf", 100);
        assert!(store.last_error().is_some());
        store.close_dialog();
        assert!(store.last_error().is_none());
    }
}
