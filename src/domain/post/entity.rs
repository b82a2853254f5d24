use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::tag::{TagSet, Tagged};

pub const MAX_CONTENT_CHARS: usize = 280;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: i64,
	pub author: String,
	pub author_avatar: String,
	pub content: String,
	pub tags: TagSet,
	pub likes: i64,
	pub comments: i64,
	pub timestamp: DateTime<Utc>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event: Option<EventDetails>,
}

/// Present only on event posts.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
	pub location: String,
	pub time: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub host_rating: Option<f64>,
}

impl Post {
	pub fn is_event(&self) -> bool {
		self.event.is_some()
	}

	/// Host rating is only shown for event posts that carry one.
	pub fn host_rating(&self) -> Option<f64> {
		self.event.as_ref().and_then(|event| event.host_rating)
	}

	pub fn relative_timestamp(
		&self,
		now: DateTime<Utc>,
	) -> String {
		relative_label(self.timestamp, now)
	}
}

impl Tagged for Post {
	fn tags(&self) -> &TagSet {
		&self.tags
	}
}

fn plural(
	n: i64,
	unit: &str,
) -> String {
	if n == 1 {
		format!("1 {unit} ago")
	} else {
		format!("{n} {unit}s ago")
	}
}

/// "just now", "5 minutes ago", "2 hours ago", "1 day ago", ...
pub fn relative_label(
	at: DateTime<Utc>,
	now: DateTime<Utc>,
) -> String {
	let elapsed = now.signed_duration_since(at);
	if elapsed < Duration::minutes(1) {
		"just now".to_string()
	} else if elapsed < Duration::hours(1) {
		plural(elapsed.num_minutes(), "minute")
	} else if elapsed < Duration::days(1) {
		plural(elapsed.num_hours(), "hour")
	} else {
		plural(elapsed.num_days(), "day")
	}
}
