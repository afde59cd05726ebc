use std::sync::Arc;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::storage::{KeyValueStore, StorageError};

/// A single `localStorage` entry mirrored into a signal.
///
/// The browser write happens in an effect after [`KeyValueStore::set`]
/// returns, so write failures arrive later on [`LocalStorageSlot::failure`].
#[derive(Clone)]
pub struct LocalStorageSlot {
    key: &'static str,
    value: Signal<String>,
    set_value: WriteSignal<String>,
    delete: Arc<dyn Fn() + Send + Sync>,
    failure: RwSignal<Option<StorageError>>,
}

impl LocalStorageSlot {
    pub fn new(key: &'static str) -> Self {
        let failure = RwSignal::new(None);
        let (value, set_value, delete) = use_local_storage_with_options::<String, FromToStringCodec>(
            key,
            UseStorageOptions::default().on_error(move |e| {
                log::warn!("local storage error on {key}: {e:?}");
                failure.set(Some(StorageError::Rejected(format!("{e:?}"))));
            }),
        );
        Self {
            key,
            value,
            set_value,
            delete: Arc::new(delete),
            failure,
        }
    }

    /// Changes whenever the entry is loaded, written or removed, including
    /// from another tab.
    pub fn value(&self) -> Signal<String> {
        self.value
    }

    pub fn failure(&self) -> Signal<Option<StorageError>> {
        self.failure.into()
    }

    fn check_key(&self, key: &str) -> Result<(), StorageError> {
        if key == self.key {
            Ok(())
        } else {
            Err(StorageError::UnknownKey(key.to_string()))
        }
    }
}

impl KeyValueStore for LocalStorageSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_key(key)?;
        let value = self.value.get_untracked();
        Ok((!value.is_empty()).then_some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_key(key)?;
        self.failure.set(None);
        self.set_value.set(value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_key(key)?;
        (self.delete)();
        Ok(())
    }
}
