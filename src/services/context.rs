use chrono::Utc;

use crate::{
	adapters::{
		fixtures::{campus_events, sample_posts, uk_events},
		repositories::LocalStorage,
	},
	config::Config,
	domain::{
		event::{EventMap, MapKind, MapSource},
		post::{schemas::PostDraft, PostFeed},
		theme::Theme,
	},
	services::{response::ServiceError, router::ViewRouter, session::SessionStore},
};

const DEFAULT_CAMPUS: &str = "UK Campus";

/// Everything the views read and the handlers mutate, owned by the caller
/// and passed in explicitly.
pub struct AppContext<S: LocalStorage> {
	pub session: SessionStore<S>,
	pub router: ViewRouter,
	pub feed: PostFeed,
	pub draft: PostDraft,
	pub map: EventMap,
	pub theme: Theme,
}

impl<S: LocalStorage> AppContext<S> {
	/// Seeds the collections and restores any stored session.
	pub async fn init(
		config: &Config,
		storage: S,
	) -> Result<Self, ServiceError> {
		let feed = PostFeed::new(sample_posts(Utc::now()))?;
		let events = match config.map_kind {
			MapKind::Campus => campus_events(),
			MapKind::Heatmap => uk_events(),
		};
		let map = EventMap::new(config.map_kind, MapSource::from_token(config.map_access_token.as_deref()), events)?;

		let mut session = SessionStore::new(storage);
		let authenticated = session.restore().await?.is_some();

		tracing::info!(authenticated, map = ?config.map_kind, theme = ?config.theme, "app context initialised");
		Ok(Self {
			session,
			router: ViewRouter::new(authenticated),
			feed,
			draft: PostDraft::default(),
			map,
			theme: config.theme,
		})
	}

	/// Releases the context. The stored session survives for the next start.
	pub fn teardown(self) {
		tracing::info!(authenticated = self.router.is_authenticated(), "app context torn down");
	}

	/// Badge shown next to the app title.
	pub fn campus_label(&self) -> &str {
		self.session.user().and_then(|user| user.university.as_deref()).unwrap_or(DEFAULT_CAMPUS)
	}
}
