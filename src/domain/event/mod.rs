use std::{collections::HashSet, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use self::entity::{Event, MapPosition};
use crate::{
	domain::{
		post::entity::Post,
		tag::{list_by_tag, tag_options, TagFilter},
	},
	services::response::ServiceError,
};

pub mod entity;

const CITY_PREVIEW_LEN: usize = 2;

/// Which map the map tab renders.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
	#[default]
	Campus,
	Heatmap,
}

impl FromStr for MapKind {
	type Err = ServiceError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"campus" => Ok(MapKind::Campus),
			"heatmap" => Ok(MapKind::Heatmap),
			other => Err(ServiceError::Config(format!("unknown map kind `{other}`"))),
		}
	}
}

/// Where map tiles come from; a provider token switches off the mock canvas.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub enum MapSource {
	Mock,
	Tiles { access_token: String },
}

impl MapSource {
	pub fn from_token(token: Option<&str>) -> Self {
		match token.map(str::trim).filter(|t| !t.is_empty()) {
			Some(token) => MapSource::Tiles {
				access_token: token.to_string(),
			},
			None => MapSource::Mock,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct CityGroup<'a> {
	pub city: &'a str,
	pub events: Vec<&'a Event>,
}

impl<'a> CityGroup<'a> {
	pub fn preview(&self) -> &[&'a Event] {
		&self.events[..self.events.len().min(CITY_PREVIEW_LEN)]
	}
}

#[derive(Debug, Clone)]
pub struct EventMap {
	kind: MapKind,
	source: MapSource,
	events: Vec<Event>,
	selected: Option<i64>,
}

impl EventMap {
	pub fn new(
		kind: MapKind,
		source: MapSource,
		events: Vec<Event>,
	) -> Result<Self, ServiceError> {
		let mut seen = HashSet::new();
		if let Some(dup) = events.iter().find(|event| !seen.insert(event.id)) {
			return Err(ServiceError::Config(format!("duplicate event id {}", dup.id)));
		}
		Ok(Self {
			kind,
			source,
			events,
			selected: None,
		})
	}

	pub fn kind(&self) -> MapKind {
		self.kind
	}

	pub fn source(&self) -> &MapSource {
		&self.source
	}

	pub fn get(
		&self,
		event_id: i64,
	) -> Result<&Event, ServiceError> {
		self.events
			.iter()
			.find(|event| event.id == event_id)
			.ok_or_else(|| ServiceError::not_found("event", event_id))
	}

	/// Opens the detail panel for an event.
	pub fn select(
		&mut self,
		event_id: i64,
	) -> Result<&Event, ServiceError> {
		let id = self.get(event_id)?.id;
		self.selected = Some(id);
		self.get(id)
	}

	pub fn clear_selection(&mut self) {
		self.selected = None;
	}

	pub fn selected(&self) -> Option<&Event> {
		self.selected.and_then(|id| self.events.iter().find(|event| event.id == id))
	}

	pub fn list_by_tag(
		&self,
		filter: &TagFilter,
	) -> Vec<&Event> {
		list_by_tag(&self.events, filter)
	}

	pub fn tag_options(&self) -> Vec<TagFilter> {
		tag_options(&self.events)
	}

	/// Heatmap points in display order.
	pub fn points(&self) -> Vec<(&Event, MapPosition)> {
		self.events.iter().enumerate().map(|(index, event)| (event, MapPosition::for_index(index))).collect()
	}

	/// Events grouped by area in order of first appearance.
	pub fn by_city(&self) -> Vec<CityGroup<'_>> {
		let mut groups: Vec<CityGroup<'_>> = Vec::new();
		for event in &self.events {
			match groups.iter_mut().find(|group| group.city == event.area()) {
				Some(group) => group.events.push(event),
				None => groups.push(CityGroup {
					city: event.area(),
					events: vec![event],
				}),
			}
		}
		groups
	}
}

impl Deref for EventMap {
	type Target = [Event];
	fn deref(&self) -> &Self::Target {
		&self.events
	}
}

/// Posts sharing at least one tag with the event.
pub fn related_posts<'a>(
	event: &Event,
	posts: &'a [Post],
) -> Vec<&'a Post> {
	posts.iter().filter(|post| post.tags.iter().any(|tag| event.tags.contains(tag))).collect()
}

#[cfg(test)]
mod test {
	use chrono::Utc;

	use super::*;
	use crate::adapters::fixtures::{campus_events, sample_posts, uk_events};
	use crate::domain::tag::Tag;

	fn heatmap() -> EventMap {
		EventMap::new(MapKind::Heatmap, MapSource::Mock, uk_events()).unwrap()
	}

	#[test]
	fn test_select_and_clear() {
		let mut map = heatmap();
		assert!(map.selected().is_none());
		assert_eq!(map.select(3).unwrap().title, "Manchester Music Night");
		assert_eq!(map.selected().unwrap().id, 3);

		let err = map.select(99).unwrap_err();
		assert!(matches!(err, ServiceError::EntityNotFound { entity: "event", .. }));
		assert_eq!(map.selected().unwrap().id, 3);

		map.clear_selection();
		assert!(map.selected().is_none());
	}

	#[test]
	fn test_by_city_groups_in_first_appearance_order() {
		let mut events = uk_events();
		let mut second_london = events[0].clone();
		second_london.id = 7;
		second_london.title = "Camden Gig".into();
		events.push(second_london.clone());
		second_london.id = 8;
		events.push(second_london);

		let map = EventMap::new(MapKind::Heatmap, MapSource::Mock, events).unwrap();
		let groups = map.by_city();
		let cities: Vec<&str> = groups.iter().map(|g| g.city).collect();
		assert_eq!(cities, vec!["London", "Edinburgh", "Manchester", "Birmingham", "Bristol", "Liverpool"]);
		assert_eq!(groups[0].events.len(), 3);
		assert_eq!(groups[0].preview().len(), 2);
		assert_eq!(groups[1].preview().len(), 1);
	}

	#[test]
	fn test_campus_events_group_by_venue() {
		let map = EventMap::new(MapKind::Campus, MapSource::Mock, campus_events()).unwrap();
		assert_eq!(map.by_city().len(), map.len());
	}

	#[test]
	fn test_event_tag_filter() {
		let map = heatmap();
		let culture = map.list_by_tag(&TagFilter::Tag(Tag::from("Culture")));
		assert_eq!(culture.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 5]);
		assert_eq!(map.list_by_tag(&TagFilter::All).len(), map.len());
	}

	#[test]
	fn test_seeded_intensities() {
		let map = heatmap();
		let high: Vec<i64> = map.iter().filter(|e| e.intensity() == entity::Intensity::High).map(|e| e.id).collect();
		assert_eq!(high, vec![1, 2, 6]);
	}

	#[test]
	fn test_related_posts_share_a_tag() {
		let posts = sample_posts(Utc::now());
		let map = EventMap::new(MapKind::Campus, MapSource::Mock, campus_events()).unwrap();
		let study_group = map.get(3).unwrap();
		let related: Vec<i64> = related_posts(study_group, &posts).iter().map(|p| p.id).collect();
		assert_eq!(related, vec![5]);
	}

	#[test]
	fn test_map_source_from_token() {
		assert_eq!(MapSource::from_token(None), MapSource::Mock);
		assert_eq!(MapSource::from_token(Some("  ")), MapSource::Mock);
		assert_eq!(
			MapSource::from_token(Some("pk.abc")),
			MapSource::Tiles {
				access_token: "pk.abc".into()
			}
		);
	}
}
