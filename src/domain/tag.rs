use std::{fmt::Display, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::services::response::{Notice, ServiceError};

/// Free-form, case-sensitive label attached to posts and events.
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
	/// Trims surrounding whitespace; blank labels are rejected.
	pub fn new(label: impl AsRef<str>) -> Result<Self, ServiceError> {
		let label = label.as_ref().trim();
		if label.is_empty() {
			return Err(ServiceError::Validation(Notice::destructive("Invalid tag", "Tags cannot be empty.")));
		}
		Ok(Self(label.to_string()))
	}
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

impl From<&str> for Tag {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl TryFrom<String> for Tag {
	type Error = ServiceError;
	fn try_from(value: String) -> Result<Self, Self::Error> {
		Tag::new(value)
	}
}

impl From<Tag> for String {
	fn from(value: Tag) -> Self {
		value.0
	}
}

impl PartialEq<str> for Tag {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

/// Insertion-ordered tag list with set semantics.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>")]
pub struct TagSet(Vec<Tag>);

impl TagSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` when the tag was not present before.
	pub fn add(
		&mut self,
		tag: Tag,
	) -> bool {
		if self.contains(&tag) {
			return false;
		}
		self.0.push(tag);
		true
	}

	/// Returns `true` when the tag was present.
	pub fn remove(
		&mut self,
		tag: &Tag,
	) -> bool {
		let before = self.0.len();
		self.0.retain(|t| t != tag);
		before != self.0.len()
	}
}

impl Deref for TagSet {
	type Target = [Tag];
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<Tag>> for TagSet {
	fn from(value: Vec<Tag>) -> Self {
		value.into_iter().collect()
	}
}

impl FromIterator<Tag> for TagSet {
	fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
		let mut set = TagSet::new();
		for tag in iter {
			set.add(tag);
		}
		set
	}
}

impl<'a> IntoIterator for &'a TagSet {
	type Item = &'a Tag;
	type IntoIter = std::slice::Iter<'a, Tag>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Union of `tags` and `tag`; adding a present tag is a no-op.
pub fn add_tag(
	mut tags: TagSet,
	tag: Tag,
) -> TagSet {
	tags.add(tag);
	tags
}

/// `tags` without `tag`.
pub fn remove_tag(
	mut tags: TagSet,
	tag: &Tag,
) -> TagSet {
	tags.remove(tag);
	tags
}

/// Single-valued filter selection: the sentinel or exactly one tag.
///
/// Serialized as a bare string, `"all"` for the sentinel.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TagFilter {
	#[default]
	All,
	Tag(Tag),
}

impl TagFilter {
	pub fn matches(
		&self,
		tags: &TagSet,
	) -> bool {
		match self {
			TagFilter::All => true,
			TagFilter::Tag(tag) => tags.contains(tag),
		}
	}

	/// Button label in the filter bar.
	pub fn label(&self) -> String {
		match self {
			TagFilter::All => "All Posts".to_string(),
			TagFilter::Tag(tag) => tag.to_string(),
		}
	}
}

impl FromStr for TagFilter {
	type Err = ServiceError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"all" | "All" => Ok(TagFilter::All),
			other => Ok(TagFilter::Tag(Tag::new(other)?)),
		}
	}
}

impl TryFrom<String> for TagFilter {
	type Error = ServiceError;
	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<TagFilter> for String {
	fn from(value: TagFilter) -> Self {
		match value {
			TagFilter::All => "all".to_string(),
			TagFilter::Tag(tag) => tag.into(),
		}
	}
}

impl From<Tag> for TagFilter {
	fn from(value: Tag) -> Self {
		TagFilter::Tag(value)
	}
}

/// Anything carrying a tag set that can be filtered.
pub trait Tagged {
	fn tags(&self) -> &TagSet;
}

/// Records whose tag set contains the filter's tag, or every record for the sentinel.
pub fn list_by_tag<'a, T: Tagged>(
	records: &'a [T],
	filter: &TagFilter,
) -> Vec<&'a T> {
	records.iter().filter(|record| filter.matches(record.tags())).collect()
}

/// The sentinel followed by every tag in order of first appearance.
pub fn tag_options<T: Tagged>(records: &[T]) -> Vec<TagFilter> {
	let union: TagSet = records.iter().flat_map(|record| record.tags().iter().cloned()).collect();
	std::iter::once(TagFilter::All).chain(union.iter().cloned().map(TagFilter::Tag)).collect()
}

#[cfg(test)]
mod test {
	use super::*;

	struct Record(TagSet);
	impl Tagged for Record {
		fn tags(&self) -> &TagSet {
			&self.0
		}
	}

	fn tags(labels: &[&str]) -> TagSet {
		labels.iter().map(|l| Tag::from(*l)).collect()
	}

	#[test]
	fn test_add_tag_is_idempotent() {
		let set = tags(&["Event", "Party"]);
		let added = add_tag(set.clone(), Tag::from("Party"));
		assert_eq!(added.len(), set.len());
		assert_eq!(added, set);
	}

	#[test]
	fn test_remove_then_add_restores_set_contents() {
		let set = tags(&["Event", "Party", "Food"]);
		let restored = add_tag(remove_tag(set.clone(), &Tag::from("Party")), Tag::from("Party"));
		assert_eq!(restored.len(), set.len());
		assert!(set.iter().all(|t| restored.contains(t)));
	}

	#[test]
	fn test_tags_are_case_sensitive() {
		let set = add_tag(tags(&["Study"]), Tag::from("study"));
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn test_blank_tag_rejected() {
		assert!(matches!(Tag::new("   "), Err(ServiceError::Validation(_))));
		assert_eq!(Tag::new("  Sports ").unwrap().as_str(), "Sports");
	}

	#[test]
	fn test_list_by_tag_subset_and_sentinel() {
		'_given: {
			let records = vec![
				Record(tags(&["Study", "Academic"])),
				Record(tags(&["Event", "Party"])),
				Record(tags(&["overheard"])),
			];

			'_when: {
				let study = list_by_tag(&records, &"Study".parse().unwrap());
				let all = list_by_tag(&records, &TagFilter::All);
				let none = list_by_tag(&records, &"Sports".parse().unwrap());

				assert_eq!(study.len(), 1);
				assert!(study[0].tags().contains(&Tag::from("Study")));
				assert_eq!(all.len(), records.len());
				assert!(none.is_empty());
			}
		}
	}

	#[test]
	fn test_tag_options_first_appearance_order() {
		let records = vec![Record(tags(&["overheard", "Food"])), Record(tags(&["Event", "Food"])), Record(tags(&["overheard"]))];
		let options = tag_options(&records);
		assert_eq!(
			options,
			vec![
				TagFilter::All,
				TagFilter::Tag("overheard".into()),
				TagFilter::Tag("Food".into()),
				TagFilter::Tag("Event".into()),
			]
		);
	}

	#[test]
	fn test_sentinel_parsing() {
		assert_eq!("all".parse::<TagFilter>().unwrap(), TagFilter::All);
		assert_eq!("All".parse::<TagFilter>().unwrap(), TagFilter::All);
		assert_eq!("ALL".parse::<TagFilter>().unwrap(), TagFilter::Tag("ALL".into()));
	}

	#[test]
	fn test_deserialized_tags_are_trimmed_and_checked() {
		let set: TagSet = serde_json::from_str(r#"[" Food ","Food","Study"]"#).unwrap();
		assert_eq!(set, tags(&["Food", "Study"]));

		assert!(serde_json::from_str::<TagSet>(r#"["Food","   "]"#).is_err());
		assert!(serde_json::from_str::<Tag>(r#""""#).is_err());
	}

	#[test]
	fn test_filter_serde_follows_sentinel() {
		assert_eq!(serde_json::from_str::<TagFilter>(r#""all""#).unwrap(), TagFilter::All);
		assert_eq!(serde_json::from_str::<TagFilter>(r#""All""#).unwrap(), TagFilter::All);
		assert_eq!(serde_json::from_str::<TagFilter>(r#"" Study ""#).unwrap(), TagFilter::Tag("Study".into()));
		assert!(serde_json::from_str::<TagFilter>(r#""  ""#).is_err());
		assert!(serde_json::from_str::<TagFilter>(r#"{"Tag":"all"}"#).is_err());

		assert_eq!(serde_json::to_string(&TagFilter::All).unwrap(), r#""all""#);
		assert_eq!(serde_json::to_string(&TagFilter::Tag("Study".into())).unwrap(), r#""Study""#);
	}

	#[test]
	fn test_deserialized_tag_set_drops_duplicates() {
		let set: TagSet = serde_json::from_str(r#"["Event","Event","Party"]"#).unwrap();
		assert_eq!(set, tags(&["Event", "Party"]));
	}
}
