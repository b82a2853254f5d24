use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use url::Url;

use super::entity::UserData;
use crate::services::response::{Notice, ServiceError};

pub const MIN_AGE: u8 = 16;
pub const MAX_AGE: u8 = 100;

/// Raw auth form fields exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthForm {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub age: String,
	#[serde(default)]
	pub university: String,
	#[serde(default)]
	pub profile_picture: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
	#[default]
	Login,
	Signup,
}

impl AuthMode {
	pub fn success_notice(&self) -> Notice {
		match self {
			AuthMode::Login => Notice::info("Welcome back!", "You've successfully logged in to POSTD."),
			AuthMode::Signup => Notice::info("Account created!", "Welcome to POSTD! Start sharing and discovering."),
		}
	}
}

fn filled(value: &str) -> Option<String> {
	let value = value.trim();
	(!value.is_empty()).then(|| value.to_string())
}

impl AuthForm {
	/// Login needs name and email; signup additionally needs age and university.
	pub fn validate(
		&self,
		mode: AuthMode,
	) -> Result<UserData, ServiceError> {
		let (Some(name), Some(email)) = (filled(&self.name), filled(&self.email)) else {
			return Err(ServiceError::missing_information());
		};
		if !EmailAddress::is_valid(&email) {
			return Err(ServiceError::Validation(Notice::destructive(
				"Invalid email",
				"Please enter a valid email address.",
			)));
		}

		let (age, university) = match mode {
			AuthMode::Login => (self.parse_age().ok().flatten(), filled(&self.university)),
			AuthMode::Signup => {
				let (Some(_), Some(university)) = (filled(&self.age), filled(&self.university)) else {
					return Err(ServiceError::missing_information());
				};
				(self.parse_age()?, Some(university))
			}
		};

		let profile_picture = match filled(&self.profile_picture) {
			Some(picture) => {
				Url::parse(&picture).map_err(|_| {
					ServiceError::Validation(Notice::destructive("Invalid profile picture", "Profile picture must be a full URL."))
				})?;
				Some(picture)
			}
			None => None,
		};

		Ok(UserData {
			name,
			email,
			age,
			university,
			profile_picture,
		})
	}

	fn parse_age(&self) -> Result<Option<u8>, ServiceError> {
		let Some(age) = filled(&self.age) else {
			return Ok(None);
		};
		match age.parse::<u8>() {
			Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(Some(age)),
			_ => Err(ServiceError::Validation(Notice::destructive(
				"Invalid age",
				format!("Age must be a number between {MIN_AGE} and {MAX_AGE}."),
			))),
		}
	}
}
