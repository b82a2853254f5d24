use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_HOST_RATING: f64 = 5.0;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: Uuid,
	pub name: String,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub age: Option<u8>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub university: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub profile_picture: Option<String>,
	#[serde(default = "default_host_rating")]
	pub host_rating: f64,
	#[serde(default)]
	pub total_ratings: u32,
	pub joined_at: DateTime<Utc>,
}

fn default_host_rating() -> f64 {
	DEFAULT_HOST_RATING
}

/// Validated auth-form output, before the session assigns identity.
#[derive(Clone, PartialEq, Debug)]
pub struct UserData {
	pub name: String,
	pub email: String,
	pub age: Option<u8>,
	pub university: Option<String>,
	pub profile_picture: Option<String>,
}

impl User {
	pub(crate) fn create(
		data: UserData,
		joined_at: DateTime<Utc>,
	) -> Self {
		Self {
			id: Uuid::new_v4(),
			name: data.name,
			email: data.email,
			age: data.age,
			university: data.university,
			profile_picture: data.profile_picture,
			host_rating: DEFAULT_HOST_RATING,
			total_ratings: 0,
			joined_at,
		}
	}
}
