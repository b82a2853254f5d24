use std::{collections::HashSet, ops::Deref};

use self::entity::Post;
use crate::{
	domain::tag::{list_by_tag, tag_options, TagFilter},
	services::response::ServiceError,
};

pub mod entity;
pub mod schemas;

/// The feed: posts in display order plus the current tag selection.
#[derive(Default, Debug, Clone)]
pub struct PostFeed {
	posts: Vec<Post>,
	selected_tag: TagFilter,
}

impl PostFeed {
	/// Fails when two posts share an id.
	pub fn new(posts: Vec<Post>) -> Result<Self, ServiceError> {
		let mut seen = HashSet::new();
		if let Some(dup) = posts.iter().find(|post| !seen.insert(post.id)) {
			return Err(ServiceError::Config(format!("duplicate post id {}", dup.id)));
		}
		Ok(Self {
			posts,
			selected_tag: TagFilter::All,
		})
	}

	pub fn get(
		&self,
		post_id: i64,
	) -> Result<&Post, ServiceError> {
		self.posts.iter().find(|post| post.id == post_id).ok_or_else(|| ServiceError::not_found("post", post_id))
	}

	/// Adds one like and returns the new count.
	pub fn like(
		&mut self,
		post_id: i64,
	) -> Result<i64, ServiceError> {
		let post = self
			.posts
			.iter_mut()
			.find(|post| post.id == post_id)
			.ok_or_else(|| ServiceError::not_found("post", post_id))?;
		post.likes = post.likes.checked_add(1).ok_or(ServiceError::OutOfRange("like count"))?;
		Ok(post.likes)
	}

	pub fn list_by_tag(
		&self,
		filter: &TagFilter,
	) -> Vec<&Post> {
		list_by_tag(&self.posts, filter)
	}

	/// Posts matching the current selection.
	pub fn visible(&self) -> Vec<&Post> {
		self.list_by_tag(&self.selected_tag)
	}

	pub fn tag_options(&self) -> Vec<TagFilter> {
		tag_options(&self.posts)
	}

	pub fn select_tag(
		&mut self,
		filter: TagFilter,
	) {
		tracing::debug!("feed filter: {}", filter.label());
		self.selected_tag = filter;
	}

	pub fn selected_tag(&self) -> &TagFilter {
		&self.selected_tag
	}

	/// Id a newly drafted post would receive.
	pub fn next_id(&self) -> Result<i64, ServiceError> {
		self.posts.iter().map(|post| post.id).max().unwrap_or(0).checked_add(1).ok_or(ServiceError::OutOfRange("post id"))
	}
}

impl Deref for PostFeed {
	type Target = [Post];
	fn deref(&self) -> &Self::Target {
		&self.posts
	}
}

#[cfg(test)]
mod test {
	use chrono::Utc;
	use rand::Rng;

	use super::*;
	use crate::adapters::fixtures::sample_posts;
	use crate::domain::tag::Tag;

	fn feed() -> PostFeed {
		PostFeed::new(sample_posts(Utc::now())).unwrap()
	}

	#[test]
	fn test_like_twice_adds_two() {
		let mut feed = feed();
		let before = feed.get(2).unwrap().likes;
		feed.like(2).unwrap();
		assert_eq!(feed.like(2).unwrap(), before + 2);
		assert_eq!(feed.get(2).unwrap().likes, before + 2);
	}

	#[test]
	fn test_like_unknown_post_changes_nothing() {
		'_given: {
			let mut feed = feed();
			let snapshot: Vec<i64> = feed.iter().map(|p| p.likes).collect();

			'_when: {
				let mut rng = rand::thread_rng();
				let unknown = rng.gen_range(1_000..i64::MAX);
				let err = feed.like(unknown).unwrap_err();

				assert!(matches!(err, ServiceError::EntityNotFound { entity: "post", .. }));
				assert_eq!(feed.iter().map(|p| p.likes).collect::<Vec<_>>(), snapshot);
			}
		}
	}

	#[test]
	fn test_study_filter_returns_one_post() {
		let mut feed = feed();
		feed.select_tag(TagFilter::Tag(Tag::from("Study")));
		let visible = feed.visible();
		assert_eq!(visible.len(), 1);
		assert!(visible[0].tags.contains(&Tag::from("Academic")));

		feed.select_tag(TagFilter::All);
		assert_eq!(feed.visible().len(), feed.len());
	}

	#[test]
	fn test_feed_tag_options() {
		let options: Vec<String> = feed().tag_options().iter().map(TagFilter::label).collect();
		assert_eq!(
			options,
			vec![
				"All Posts",
				"#overheard",
				"#Food",
				"#Event",
				"#Party",
				"#BollywoodSociety",
				"#NonAlcoholic",
				"#Study",
				"#Academic"
			]
		);
	}

	#[test]
	fn test_duplicate_ids_rejected() {
		let mut posts = sample_posts(Utc::now());
		posts[1].id = posts[0].id;
		assert!(PostFeed::new(posts).is_err());
	}

	#[test]
	fn test_next_id() {
		assert_eq!(feed().next_id().unwrap(), 6);
		assert_eq!(PostFeed::default().next_id().unwrap(), 1);
	}

	#[test]
	fn test_counters_at_limit_do_not_wrap() {
		'_given: {
			let mut posts = sample_posts(Utc::now());
			posts[0].likes = i64::MAX;
			posts[1].id = i64::MAX;
			let mut feed = PostFeed::new(posts).unwrap();

			'_when: {
				let err = feed.like(1).unwrap_err();
				assert!(matches!(err, ServiceError::OutOfRange("like count")));
				assert_eq!(feed.get(1).unwrap().likes, i64::MAX);

				assert!(matches!(feed.next_id(), Err(ServiceError::OutOfRange("post id"))));
			}
		}
	}
}
