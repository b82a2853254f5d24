use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{EventDetails, Post, MAX_CONTENT_CHARS};
use crate::domain::{
	tag::{add_tag, remove_tag, Tag, TagSet},
	user::{entity::User, profile::avatar_url},
};
use crate::services::response::{Notice, ServiceError};

pub const POPULAR_TAGS: [&str; 8] = ["Event", "Party", "overheard", "Study", "BollywoodSociety", "NonAlcoholic", "Sports", "Food"];

/// The "create post" form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub tags: TagSet,
	#[serde(default)]
	pub is_event: bool,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub event_time: String,
	#[serde(default)]
	pub event_details: String,
}

impl PostDraft {
	pub fn add_tag(
		&mut self,
		tag: Tag,
	) {
		self.tags = add_tag(std::mem::take(&mut self.tags), tag);
	}

	pub fn remove_tag(
		&mut self,
		tag: &Tag,
	) {
		self.tags = remove_tag(std::mem::take(&mut self.tags), tag);
	}

	/// Free-text tag from the custom input; trimmed, blank rejected.
	pub fn add_custom_tag(
		&mut self,
		input: &str,
	) -> Result<(), ServiceError> {
		self.add_tag(Tag::new(input)?);
		Ok(())
	}

	/// Popular tags not yet on the draft.
	pub fn suggestions(&self) -> Vec<Tag> {
		POPULAR_TAGS.iter().map(|t| Tag::from(*t)).filter(|t| !self.tags.contains(t)).collect()
	}

	pub fn remaining_chars(&self) -> i64 {
		MAX_CONTENT_CHARS as i64 - self.content.chars().count() as i64
	}

	pub fn validate(&self) -> Result<(), ServiceError> {
		if self.content.trim().is_empty() {
			return Err(ServiceError::Validation(Notice::destructive(
				"Content required",
				"Please write something for your post!",
			)));
		}
		if self.remaining_chars() < 0 {
			return Err(ServiceError::Validation(Notice::destructive(
				"Post too long",
				format!("Posts are limited to {MAX_CONTENT_CHARS} characters."),
			)));
		}
		Ok(())
	}

	/// Builds the post this draft describes; the draft itself is untouched.
	pub fn to_post(
		&self,
		id: i64,
		author: &User,
		now: DateTime<Utc>,
	) -> Result<Post, ServiceError> {
		self.validate()?;

		let event = self.is_event.then(|| EventDetails {
			location: self.location.trim().to_string(),
			time: self.event_time.trim().to_string(),
			details: Some(self.event_details.trim().to_string()).filter(|d| !d.is_empty()),
			host_rating: Some(author.host_rating),
		});

		Ok(Post {
			id,
			author: author.name.clone(),
			author_avatar: avatar_url(author.profile_picture.as_deref(), &author.name),
			content: self.content.clone(),
			tags: self.tags.clone(),
			likes: 0,
			comments: 0,
			timestamp: now,
			event,
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::domain::user::entity::UserData;

	fn author() -> User {
		User::create(
			UserData {
				name: "Jess".into(),
				email: "jess@uni.ac.uk".into(),
				age: None,
				university: None,
				profile_picture: None,
			},
			Utc::now(),
		)
	}

	#[test]
	fn test_empty_content_rejected() {
		let draft = PostDraft {
			content: "   ".into(),
			..Default::default()
		};
		let err = draft.to_post(1, &author(), Utc::now()).unwrap_err();
		assert_eq!(err.notice().unwrap().title, "Content required");
	}

	#[test]
	fn test_content_limit_counts_chars() {
		let mut draft = PostDraft {
			content: "☕".repeat(MAX_CONTENT_CHARS),
			..Default::default()
		};
		assert_eq!(draft.remaining_chars(), 0);
		assert!(draft.validate().is_ok());
		draft.content.push('!');
		assert!(draft.validate().is_err());
	}

	#[test]
	fn test_suggestions_exclude_selected() {
		let mut draft = PostDraft::default();
		draft.add_tag("Party".into());
		draft.add_custom_tag(" Freshers ").unwrap();
		draft.add_custom_tag("Freshers").unwrap();
		assert!(draft.add_custom_tag("").is_err());
		assert_eq!(draft.tags.len(), 2);

		let suggestions = draft.suggestions();
		assert_eq!(suggestions.len(), POPULAR_TAGS.len() - 1);
		assert!(!suggestions.contains(&Tag::from("Party")));

		draft.remove_tag(&"Party".into());
		assert_eq!(draft.suggestions().len(), POPULAR_TAGS.len());
	}

	#[test]
	fn test_event_draft_builds_event_post() {
		let draft = PostDraft {
			content: "Pre-drinks at Flat 12".into(),
			tags: [Tag::from("Event")].into_iter().collect(),
			is_event: true,
			location: " Student Village ".into(),
			event_time: "9:00 PM".into(),
			event_details: String::new(),
		};
		let post = draft.to_post(7, &author(), Utc::now()).unwrap();
		assert!(post.is_event());
		assert_eq!(post.likes, 0);
		assert_eq!(post.host_rating(), Some(5.0));
		let event = post.event.unwrap();
		assert_eq!(event.location, "Student Village");
		assert_eq!(event.details, None);
	}
}
