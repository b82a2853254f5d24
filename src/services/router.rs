use serde::{Deserialize, Serialize};

use crate::services::response::ServiceError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
	#[default]
	Feed,
	Map,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "screen", content = "tab", rename_all = "lowercase")]
pub enum Screen {
	#[default]
	Unauthenticated,
	Authenticated(Tab),
}

/// Which screen is rendered; gated by whether a session exists.
#[derive(Debug, Default)]
pub struct ViewRouter {
	screen: Screen,
}

impl ViewRouter {
	pub fn new(authenticated: bool) -> Self {
		let mut router = Self::default();
		if authenticated {
			router.authenticate();
		}
		router
	}

	pub fn screen(&self) -> Screen {
		self.screen
	}

	pub fn is_authenticated(&self) -> bool {
		matches!(self.screen, Screen::Authenticated(_))
	}

	/// Successful login or signup always lands on the feed.
	pub fn authenticate(&mut self) -> Screen {
		self.screen = Screen::Authenticated(Tab::Feed);
		self.screen
	}

	pub fn sign_out(&mut self) -> Screen {
		self.screen = Screen::Unauthenticated;
		self.screen
	}

	pub fn select_tab(
		&mut self,
		tab: Tab,
	) -> Result<Screen, ServiceError> {
		match self.screen {
			Screen::Unauthenticated => Err(ServiceError::Unauthenticated),
			Screen::Authenticated(_) => {
				tracing::debug!("tab selected: {:?}", tab);
				self.screen = Screen::Authenticated(tab);
				Ok(self.screen)
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_initial_screen_follows_session() {
		assert_eq!(ViewRouter::new(false).screen(), Screen::Unauthenticated);
		assert_eq!(ViewRouter::new(true).screen(), Screen::Authenticated(Tab::Feed));
	}

	#[test]
	fn test_tab_selection_idempotent() {
		let mut router = ViewRouter::new(true);
		assert_eq!(router.select_tab(Tab::Map).unwrap(), Screen::Authenticated(Tab::Map));
		assert_eq!(router.select_tab(Tab::Map).unwrap(), Screen::Authenticated(Tab::Map));
		assert_eq!(router.select_tab(Tab::Feed).unwrap(), Screen::Authenticated(Tab::Feed));
	}

	#[test]
	fn test_tabs_unreachable_without_session() {
		let mut router = ViewRouter::new(true);
		router.select_tab(Tab::Map).unwrap();
		router.sign_out();
		assert!(matches!(router.select_tab(Tab::Map), Err(ServiceError::Unauthenticated)));
		assert_eq!(router.screen(), Screen::Unauthenticated);

		// Re-authenticating resets to the feed.
		assert_eq!(router.authenticate(), Screen::Authenticated(Tab::Feed));
	}

	#[test]
	fn test_screen_representation() {
		assert_eq!(serde_json::to_string(&Screen::Authenticated(Tab::Map)).unwrap(), r#"{"screen":"authenticated","tab":"map"}"#);
		assert_eq!(serde_json::to_string(&Screen::Unauthenticated).unwrap(), r#"{"screen":"unauthenticated"}"#);
	}
}
