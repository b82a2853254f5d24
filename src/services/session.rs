use chrono::Utc;

use crate::{
	adapters::repositories::LocalStorage,
	domain::user::entity::{User, UserData},
	services::response::ServiceError,
};

/// Local-storage key the session user is kept under.
pub const SESSION_KEY: &str = "postd_user";

/// The authenticated user, mirrored to local storage.
///
/// A stored record is trusted as-is on restore: there is no credential
/// authority, so this is an offline/demo session.
pub struct SessionStore<S: LocalStorage> {
	storage: S,
	user: Option<User>,
}

impl<S: LocalStorage> SessionStore<S> {
	pub fn new(storage: S) -> Self {
		Self { storage, user: None }
	}

	pub fn user(&self) -> Option<&User> {
		self.user.as_ref()
	}

	/// Assigns identity, holds the user and persists it.
	pub async fn login(
		&mut self,
		data: UserData,
	) -> Result<&User, ServiceError> {
		let user = User::create(data, Utc::now());
		let serialized = serde_json::to_string(&user)?;
		self.storage.set_item(SESSION_KEY, &serialized).await?;

		tracing::info!(user_id = %user.id, "session started for {}", user.name);
		Ok(&*self.user.insert(user))
	}

	/// Loads the stored user, if any. Undecodable records are discarded.
	pub async fn restore(&mut self) -> Result<Option<&User>, ServiceError> {
		let Some(raw) = self.storage.get_item(SESSION_KEY).await? else {
			self.user = None;
			return Ok(None);
		};

		match serde_json::from_str::<User>(&raw) {
			Ok(user) => {
				tracing::info!(user_id = %user.id, "session restored for {}", user.name);
				Ok(Some(&*self.user.insert(user)))
			}
			Err(err) => {
				tracing::warn!("discarding unreadable session record: {}", err);
				self.storage.remove_item(SESSION_KEY).await?;
				self.user = None;
				Ok(None)
			}
		}
	}

	pub async fn logout(&mut self) -> Result<(), ServiceError> {
		self.storage.remove_item(SESSION_KEY).await?;
		if let Some(user) = self.user.take() {
			tracing::info!(user_id = %user.id, "session ended");
		}
		Ok(())
	}
}
