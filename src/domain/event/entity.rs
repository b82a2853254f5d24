use serde::{Deserialize, Serialize};

use crate::domain::tag::{TagSet, Tagged};

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	pub id: i64,
	pub title: String,
	pub location: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	pub time: String,
	pub tags: TagSet,
	pub host_rating: f64,
	pub attendees: u32,
	pub coordinates: Coordinates,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
	Low,
	Medium,
	High,
}

impl Intensity {
	pub fn from_attendees(attendees: u32) -> Self {
		match attendees {
			0..=50 => Intensity::Low,
			51..=100 => Intensity::Medium,
			_ => Intensity::High,
		}
	}

	pub fn marker(&self) -> &'static str {
		match self {
			Intensity::High => "🔥",
			Intensity::Medium => "✨",
			Intensity::Low => "•",
		}
	}
}

/// Percent offsets of a heatmap point within the mock map canvas.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct MapPosition {
	pub top: usize,
	pub left: usize,
}

impl MapPosition {
	pub fn for_index(index: usize) -> Self {
		Self {
			top: 20 + (index * 15) % 60,
			left: 25 + (index * 20) % 50,
		}
	}
}

impl Event {
	pub fn intensity(&self) -> Intensity {
		Intensity::from_attendees(self.attendees)
	}

	/// City when known, otherwise the venue.
	pub fn area(&self) -> &str {
		self.city.as_deref().unwrap_or(&self.location)
	}
}

impl Tagged for Event {
	fn tags(&self) -> &TagSet {
		&self.tags
	}
}
