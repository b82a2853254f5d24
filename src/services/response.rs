use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{
	event::entity::Event,
	post::{entity::Post, schemas::PostDraft},
	tag::Tag,
	user::{entity::User, profile::Profile},
};
use crate::services::router::Screen;

/// Transient, dismissible message shown to the user after an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
	pub title: String,
	pub description: String,
	pub variant: NoticeVariant,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
	#[default]
	Default,
	Destructive,
}

impl Notice {
	pub fn info(
		title: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			variant: NoticeVariant::Default,
		}
	}
	pub fn destructive(
		title: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			variant: NoticeVariant::Destructive,
		}
	}
}

impl Display for Notice {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.title, self.description)
	}
}

#[derive(Debug, Serialize)]
pub enum ServiceResponse {
	Session { user: User, notice: Notice },
	Post { post: Post, notice: Notice },
	Draft { draft: PostDraft, suggestions: Vec<Tag> },
	Profile(Profile),
	Event(Event),
	Screen(Screen),
	Likes(i64),
	Empty(()),
}

impl From<Profile> for ServiceResponse {
	fn from(value: Profile) -> Self {
		ServiceResponse::Profile(value)
	}
}

impl From<Event> for ServiceResponse {
	fn from(value: Event) -> Self {
		ServiceResponse::Event(value)
	}
}

impl From<Screen> for ServiceResponse {
	fn from(value: Screen) -> Self {
		ServiceResponse::Screen(value)
	}
}

impl From<i64> for ServiceResponse {
	fn from(value: i64) -> Self {
		ServiceResponse::Likes(value)
	}
}

impl From<()> for ServiceResponse {
	fn from(_value: ()) -> Self {
		ServiceResponse::Empty(())
	}
}

#[derive(Debug, Error)]
pub enum ServiceError {
	/// User-correctable input problem; state is left unchanged.
	#[error("{0}")]
	Validation(Notice),

	#[error("{entity} {id} not found")]
	EntityNotFound { entity: &'static str, id: String },

	#[error("{0} is out of range")]
	OutOfRange(&'static str),

	#[error("no active session")]
	Unauthenticated,

	#[error("local storage error: {0}")]
	Storage(#[from] std::io::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("invalid configuration: {0}")]
	Config(String),
}

impl ServiceError {
	pub fn missing_information() -> Self {
		ServiceError::Validation(Notice::destructive("Missing information", "Please fill in all required fields."))
	}

	pub fn not_found(
		entity: &'static str,
		id: impl ToString,
	) -> Self {
		ServiceError::EntityNotFound { entity, id: id.to_string() }
	}

	/// The notice to surface for this error, if it is one the user can act on.
	pub fn notice(&self) -> Option<&Notice> {
		match self {
			ServiceError::Validation(notice) => Some(notice),
			_ => None,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_validation_error_exposes_notice() {
		let err = ServiceError::missing_information();
		let notice = err.notice().unwrap();
		assert_eq!(notice.title, "Missing information");
		assert_eq!(notice.variant, NoticeVariant::Destructive);
		assert_eq!(err.to_string(), "Missing information: Please fill in all required fields.");
	}

	#[test]
	fn test_not_found_has_no_notice() {
		let err = ServiceError::not_found("post", 42);
		assert!(err.notice().is_none());
		assert_eq!(err.to_string(), "post 42 not found");
	}
}
