//! Sample posts and events the client starts with.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{
	event::entity::{Coordinates, Event},
	post::entity::{EventDetails, Post},
	tag::{Tag, TagSet},
	user::profile::avatar_url,
};

fn tags(labels: &[&str]) -> TagSet {
	labels.iter().map(|label| Tag::from(*label)).collect()
}

#[allow(clippy::too_many_arguments)]
fn post(
	id: i64,
	author: &str,
	seed: &str,
	content: &str,
	labels: &[&str],
	likes: i64,
	comments: i64,
	timestamp: DateTime<Utc>,
	event: Option<EventDetails>,
) -> Post {
	Post {
		id,
		author: author.to_string(),
		author_avatar: avatar_url(None, seed),
		content: content.to_string(),
		tags: tags(labels),
		likes,
		comments,
		timestamp,
		event,
	}
}

fn event_details(
	location: &str,
	time: &str,
	host_rating: f64,
) -> Option<EventDetails> {
	Some(EventDetails {
		location: location.to_string(),
		time: time.to_string(),
		details: None,
		host_rating: Some(host_rating),
	})
}

/// Feed posts, timestamped relative to `now`.
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
	vec![
		post(
			1,
			"Sarah M.",
			"SarahM",
			"Anyone else think the library coffee tastes like it's been brewing since 2019? ☕️😅",
			&["overheard", "Food"],
			23,
			8,
			now - Duration::hours(2),
			None,
		),
		post(
			2,
			"Alex K.",
			"AlexK",
			"Pre-drinks at Flat 12 before we hit the union! Bring your own snacks 🎉",
			&["Event", "Party"],
			45,
			12,
			now - Duration::hours(4),
			event_details("Student Village Block A", "9:00 PM", 4.8),
		),
		post(
			3,
			"Priya S.",
			"PriyaS",
			"Bollywood Society dance practice tonight! All levels welcome, no experience needed 💃",
			&["Event", "BollywoodSociety", "NonAlcoholic"],
			67,
			15,
			now - Duration::hours(6),
			event_details("Student Union Dance Studio", "7:30 PM", 4.9),
		),
		post(
			4,
			"Tom W.",
			"TomW",
			"Did anyone else see the guy in the dinosaur costume at the lecture today? Legend 🦕",
			&["overheard"],
			89,
			24,
			now - Duration::hours(8),
			None,
		),
		post(
			5,
			"Emma L.",
			"EmmaL",
			"Study group for Computer Science algorithms - Level 3 library, bring coffee!",
			&["Study", "Academic"],
			12,
			5,
			now - Duration::days(1),
			event_details("Library Level 3", "2:00 PM", 4.6),
		),
	]
}

#[allow(clippy::too_many_arguments)]
fn event(
	id: i64,
	title: &str,
	location: &str,
	city: Option<&str>,
	time: &str,
	labels: &[&str],
	host_rating: f64,
	attendees: u32,
	(lat, lng): (f64, f64),
) -> Event {
	Event {
		id,
		title: title.to_string(),
		location: location.to_string(),
		city: city.map(str::to_string),
		time: time.to_string(),
		tags: tags(labels),
		host_rating,
		attendees,
		coordinates: Coordinates { lat, lng },
	}
}

/// Events around a single campus.
pub fn campus_events() -> Vec<Event> {
	vec![
		event(1, "Flat 12 Pre's @ 9PM 🎉", "Student Village, Block A", None, "9:00 PM", &["Event", "Party"], 4.8, 15, (51.5074, -0.1278)),
		event(
			2,
			"Bollywood Society Dance Night",
			"Student Union Building",
			None,
			"7:30 PM",
			&["Event", "BollywoodSociety", "NonAlcoholic"],
			4.9,
			32,
			(51.5084, -0.1288),
		),
		event(3, "Study Group - Computer Science", "Library Level 3", None, "2:00 PM", &["Study", "Academic"], 4.6, 8, (51.5064, -0.1268)),
		event(4, "Football Match Viewing", "Sports Bar", None, "8:00 PM", &["Event", "Sports"], 4.7, 22, (51.5094, -0.1298)),
	]
}

/// Events across UK university cities.
pub fn uk_events() -> Vec<Event> {
	vec![
		event(
			1,
			"Freshers Week Kickoff",
			"University of London",
			Some("London"),
			"8:00 PM",
			&["Event", "Party", "Freshers"],
			4.8,
			150,
			(51.5074, -0.1278),
		),
		event(
			2,
			"Edinburgh Festival Fringe",
			"Royal Mile",
			Some("Edinburgh"),
			"7:00 PM",
			&["Event", "Arts", "Culture"],
			4.9,
			200,
			(55.9533, -3.1883),
		),
		event(
			3,
			"Manchester Music Night",
			"Northern Quarter",
			Some("Manchester"),
			"9:00 PM",
			&["Event", "Music", "Live"],
			4.7,
			85,
			(53.4808, -2.2426),
		),
		event(
			4,
			"Birmingham Comedy Show",
			"Birmingham Rep",
			Some("Birmingham"),
			"8:30 PM",
			&["Event", "Comedy"],
			4.6,
			60,
			(52.4862, -1.8904),
		),
		event(
			5,
			"Bristol Street Art Tour",
			"Stokes Croft",
			Some("Bristol"),
			"2:00 PM",
			&["Event", "Art", "Culture"],
			4.5,
			25,
			(51.4545, -2.5879),
		),
		event(
			6,
			"Liverpool Football Watch Party",
			"Cavern Club",
			Some("Liverpool"),
			"3:00 PM",
			&["Event", "Sports", "Social"],
			4.8,
			120,
			(53.4084, -2.9916),
		),
	]
}
