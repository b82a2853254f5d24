use chrono::Utc;

use postd::{
	adapters::repositories::LocalStorage,
	domain::{
		event::{related_posts, MapSource},
		post::schemas::PostDraft,
		tag::TagSet,
		theme::Theme,
	},
	services::{
		context::AppContext,
		router::{Screen, Tab},
	},
};

fn badges(
	theme: Theme,
	tags: &TagSet,
) -> String {
	tags.iter().map(|tag| format!("{tag}[{}]", theme.tag_style(tag))).collect::<Vec<_>>().join(" ")
}

fn feed<S: LocalStorage>(ctx: &AppContext<S>) -> Vec<String> {
	let now = Utc::now();
	let mut lines = vec![format!(
		"filter: {} | options: {}",
		ctx.feed.selected_tag().label(),
		ctx.feed.tag_options().iter().map(|option| option.label()).collect::<Vec<_>>().join(", ")
	)];
	for post in ctx.feed.visible() {
		let rating = post.host_rating().map(|rating| format!(" ⭐ {rating}")).unwrap_or_default();
		lines.push(format!("[{}] {}{} · {}", post.id, post.author, rating, post.relative_timestamp(now)));
		lines.push(format!("    {}", post.content));
		if let Some(event) = &post.event {
			lines.push(format!("    @ {} · {}", event.location, event.time));
		}
		lines.push(format!("    {} · ♥ {} · 💬 {}", badges(ctx.theme, &post.tags), post.likes, post.comments));
	}
	if ctx.draft != PostDraft::default() {
		let suggestions: Vec<String> = ctx.draft.suggestions().iter().map(ToString::to_string).collect();
		lines.push(format!(
			"draft ({} chars left): {} | suggested: {}",
			ctx.draft.remaining_chars(),
			badges(ctx.theme, &ctx.draft.tags),
			suggestions.join(" ")
		));
	}
	lines
}

fn map<S: LocalStorage>(ctx: &AppContext<S>) -> Vec<String> {
	let source = match ctx.map.source() {
		MapSource::Mock => "mock map",
		MapSource::Tiles { .. } => "map tiles",
	};
	let mut lines = vec![format!(
		"{:?} ({source}) | tags: {}",
		ctx.map.kind(),
		ctx.map.tag_options().iter().map(|option| option.label()).collect::<Vec<_>>().join(", ")
	)];
	for (event, position) in ctx.map.points() {
		let intensity = event.intensity();
		lines.push(format!(
			"{} [{}] {} at {}% / {}% ({} attending) [{}]",
			intensity.marker(),
			event.id,
			event.title,
			position.top,
			position.left,
			event.attendees,
			ctx.theme.intensity_style(intensity)
		));
	}
	for group in ctx.map.by_city() {
		let preview: Vec<&str> = group.preview().iter().map(|event| event.title.as_str()).collect();
		lines.push(format!("{}: {} event(s), {}", group.city, group.events.len(), preview.join(" / ")));
	}
	if let Some(event) = ctx.map.selected() {
		lines.push(format!(
			"selected: {} · {} · {} · ⭐ {} · {}",
			event.title,
			event.location,
			event.time,
			event.host_rating,
			badges(ctx.theme, &event.tags)
		));
		for post in related_posts(event, &ctx.feed) {
			lines.push(format!("    related: [{}] {}", post.id, post.content));
		}
	}
	lines
}

/// Plain-text rendering of whatever screen is active.
pub fn render<S: LocalStorage>(ctx: &AppContext<S>) -> String {
	let mut lines = vec![format!("POSTD · {}", ctx.campus_label())];
	match ctx.router.screen() {
		Screen::Unauthenticated => lines.push("Connect. Share. Discover. (login or signup to continue)".to_string()),
		Screen::Authenticated(Tab::Feed) => lines.extend(feed(ctx)),
		Screen::Authenticated(Tab::Map) => lines.extend(map(ctx)),
	}
	lines.join("\n")
}
