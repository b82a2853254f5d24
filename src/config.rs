use std::path::PathBuf;

use crate::{
	domain::{event::MapKind, theme::Theme},
	services::response::ServiceError,
};

#[derive(Debug, Clone)]
pub struct Config {
	/// Which events we want to log
	pub log_level: String,

	/// Directory backing the device-local key-value store
	pub storage_dir: PathBuf,
	pub map_kind: MapKind,
	pub theme: Theme,
	/// Map-provider access token; without one the mock map is shown
	pub map_access_token: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: "info".to_string(),
			storage_dir: PathBuf::from(".postd"),
			map_kind: MapKind::default(),
			theme: Theme::default(),
			map_access_token: None,
		}
	}
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Config::from_vars(|key| std::env::var(key).ok())
	}

	/// Builds the config from any variable source; unset values take defaults.
	pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let defaults = Config::default();

		let log_level = var("LOG_LEVEL").unwrap_or(defaults.log_level);
		let storage_dir = var("POSTD_STORAGE_DIR").map(PathBuf::from).unwrap_or(defaults.storage_dir);
		let map_kind = match var("POSTD_MAP") {
			Some(kind) => kind.parse()?,
			None => defaults.map_kind,
		};
		let theme = match var("POSTD_THEME") {
			Some(theme) => theme.parse()?,
			None => defaults.theme,
		};
		let map_access_token = var("MAP_ACCESS_TOKEN").filter(|token| !token.trim().is_empty());

		Ok(Config {
			log_level,
			storage_dir,
			map_kind,
			theme,
			map_access_token,
		})
	}
}
