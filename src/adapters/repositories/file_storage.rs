use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use super::LocalStorage;
use crate::services::response::{Notice, ServiceError};

/// One `<key>.json` file per entry under a directory.
pub struct FileStorage {
	dir: PathBuf,
}

impl FileStorage {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	fn path_for(
		&self,
		key: &str,
	) -> Result<PathBuf, ServiceError> {
		if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
			return Err(ServiceError::Validation(Notice::destructive(
				"Invalid storage key",
				format!("`{key}` cannot be used as a storage key."),
			)));
		}
		Ok(self.dir.join(format!("{key}.json")))
	}
}

#[async_trait]
impl LocalStorage for FileStorage {
	async fn get_item(
		&self,
		key: &str,
	) -> Result<Option<String>, ServiceError> {
		match tokio::fs::read_to_string(self.path_for(key)?).await {
			Ok(value) => Ok(Some(value)),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
			Err(err) => {
				tracing::error!("failed to read `{key}` from {:?}: {:?}", self.dir, err);
				Err(err.into())
			}
		}
	}

	async fn set_item(
		&self,
		key: &str,
		value: &str,
	) -> Result<(), ServiceError> {
		let path = self.path_for(key)?;
		tokio::fs::create_dir_all(&self.dir).await?;

		// Readers only ever see a complete record.
		let tmp = path.with_extension("json.tmp");
		tokio::fs::write(&tmp, value).await?;
		tokio::fs::rename(&tmp, &path).await.map_err(|err| {
			tracing::error!("failed to persist `{key}` to {:?}: {:?}", path, err);
			ServiceError::from(err)
		})
	}

	async fn remove_item(
		&self,
		key: &str,
	) -> Result<(), ServiceError> {
		match tokio::fs::remove_file(self.path_for(key)?).await {
			Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[tokio::test]
	async fn test_file_storage_persists_across_instances() {
		'_given: {
			let dir = tempfile::tempdir().unwrap();
			let storage = FileStorage::new(dir.path().join("state"));
			assert_eq!(storage.get_item("postd_user").await.unwrap(), None);

			'_when: {
				storage.set_item("postd_user", r#"{"name":"Jess"}"#).await.unwrap();

				let reopened = FileStorage::new(dir.path().join("state"));
				assert_eq!(reopened.get_item("postd_user").await.unwrap().as_deref(), Some(r#"{"name":"Jess"}"#));

				reopened.remove_item("postd_user").await.unwrap();
				assert_eq!(storage.get_item("postd_user").await.unwrap(), None);
				// Removing an absent key is not an error.
				reopened.remove_item("postd_user").await.unwrap();
			}
		}
	}

	#[tokio::test]
	async fn test_rejects_path_like_keys() {
		let dir = tempfile::tempdir().unwrap();
		let storage = FileStorage::new(dir.path());
		assert!(storage.set_item("../escape", "x").await.is_err());
		assert!(storage.get_item("").await.is_err());
	}
}
