pub(crate) mod file_storage;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::services::response::ServiceError;

pub use file_storage::FileStorage;

/// Device-local key-value store holding serialized text.
#[async_trait]
pub trait LocalStorage: Send + Sync {
	async fn get_item(
		&self,
		key: &str,
	) -> Result<Option<String>, ServiceError>;
	async fn set_item(
		&self,
		key: &str,
		value: &str,
	) -> Result<(), ServiceError>;
	async fn remove_item(
		&self,
		key: &str,
	) -> Result<(), ServiceError>;
}

/// Storage that lives only as long as the process.
#[derive(Default)]
pub struct MemoryStorage {
	items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl LocalStorage for MemoryStorage {
	async fn get_item(
		&self,
		key: &str,
	) -> Result<Option<String>, ServiceError> {
		Ok(self.items.read().await.get(key).cloned())
	}
	async fn set_item(
		&self,
		key: &str,
		value: &str,
	) -> Result<(), ServiceError> {
		self.items.write().await.insert(key.to_string(), value.to_string());
		Ok(())
	}
	async fn remove_item(
		&self,
		key: &str,
	) -> Result<(), ServiceError> {
		self.items.write().await.remove(key);
		Ok(())
	}
}

#[async_trait]
impl<S: LocalStorage + ?Sized> LocalStorage for std::sync::Arc<S> {
	async fn get_item(
		&self,
		key: &str,
	) -> Result<Option<String>, ServiceError> {
		(**self).get_item(key).await
	}
	async fn set_item(
		&self,
		key: &str,
		value: &str,
	) -> Result<(), ServiceError> {
		(**self).set_item(key, value).await
	}
	async fn remove_item(
		&self,
		key: &str,
	) -> Result<(), ServiceError> {
		(**self).remove_item(key).await
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[tokio::test]
	async fn test_memory_storage_roundtrip() {
		let storage = MemoryStorage::new();
		assert_eq!(storage.get_item("postd_user").await.unwrap(), None);

		storage.set_item("postd_user", "{}").await.unwrap();
		assert_eq!(storage.get_item("postd_user").await.unwrap().as_deref(), Some("{}"));

		storage.remove_item("postd_user").await.unwrap();
		storage.remove_item("postd_user").await.unwrap();
		assert_eq!(storage.get_item("postd_user").await.unwrap(), None);
	}
}
