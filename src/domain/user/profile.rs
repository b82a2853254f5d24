use serde::Serialize;

use super::entity::User;

pub const TOP_HOST_RATING: f64 = 4.5;
const AVATAR_SEED_URL: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";

/// Read-only profile card derived from the session user.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Profile {
	pub name: String,
	pub email: String,
	pub avatar_url: String,
	pub initials: String,
	pub host_rating: f64,
	pub total_ratings: u32,
	pub age: Option<u8>,
	pub university: Option<String>,
	pub joined: String,
	pub badges: Vec<String>,
}

pub fn avatar_url(
	profile_picture: Option<&str>,
	name: &str,
) -> String {
	match profile_picture {
		Some(picture) => picture.to_string(),
		None => format!("{AVATAR_SEED_URL}{name}"),
	}
}

/// First two characters, upper-cased.
pub fn initials(name: &str) -> String {
	name.chars().take(2).collect::<String>().to_uppercase()
}

impl From<&User> for Profile {
	fn from(user: &User) -> Self {
		let mut badges = vec!["New Member".to_string()];
		if user.host_rating >= TOP_HOST_RATING {
			badges.push("Top Host".to_string());
		}
		if let Some(university) = &user.university {
			badges.push(format!("{university} Student"));
		}

		Self {
			name: user.name.clone(),
			email: user.email.clone(),
			avatar_url: avatar_url(user.profile_picture.as_deref(), &user.name),
			initials: initials(&user.name),
			host_rating: user.host_rating,
			total_ratings: user.total_ratings,
			age: user.age,
			university: user.university.clone(),
			joined: user.joined_at.format("%B %Y").to_string(),
			badges,
		}
	}
}

#[cfg(test)]
mod test {
	use chrono::{TimeZone, Utc};

	use super::*;
	use crate::domain::user::entity::UserData;

	fn user() -> User {
		User::create(
			UserData {
				name: "jess".into(),
				email: "jess@uni.ac.uk".into(),
				age: Some(20),
				university: Some("Leeds".into()),
				profile_picture: None,
			},
			Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
		)
	}

	#[test]
	fn test_profile_from_new_user() {
		let profile = Profile::from(&user());
		assert_eq!(profile.initials, "JE");
		assert_eq!(profile.avatar_url, "https://api.dicebear.com/7.x/initials/svg?seed=jess");
		assert_eq!(profile.joined, "October 2026");
		assert_eq!(profile.badges, vec!["New Member", "Top Host", "Leeds Student"]);
	}

	#[test]
	fn test_low_rated_host_has_no_top_badge() {
		let mut user = user();
		user.host_rating = 4.2;
		user.university = None;
		user.profile_picture = Some("https://example.com/me.png".into());
		let profile = Profile::from(&user);
		assert_eq!(profile.badges, vec!["New Member"]);
		assert_eq!(profile.avatar_url, "https://example.com/me.png");
	}
}
