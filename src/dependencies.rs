use std::sync::OnceLock;

use crate::{adapters::repositories::FileStorage, config::Config, services::response::ServiceError};

pub struct Dependency;
impl Dependency {
	pub fn config(&self) -> Result<&'static Config, ServiceError> {
		config()
	}

	/// File-backed local storage rooted at the configured directory.
	pub fn storage(&self) -> Result<FileStorage, ServiceError> {
		Ok(FileStorage::new(&self.config()?.storage_dir))
	}
}

/// Process-wide configuration, read from the environment on first use.
pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

pub fn dependency() -> &'static Dependency {
	static DEPENDENCY: OnceLock<Dependency> = OnceLock::new();
	DEPENDENCY.get_or_init(|| Dependency)
}
