use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{event::entity::Intensity, tag::Tag};
use crate::services::response::ServiceError;

/// Badge palettes shared by the feed, campus map and heatmap views.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Stone,
	Campus,
	Heatmap,
}

type Palette = &'static [(&'static str, &'static str)];

const STONE: Palette = &[
	("Event", "bg-black text-white"),
	("Party", "bg-stone-800 text-white"),
	("overheard", "bg-stone-600 text-white"),
	("BollywoodSociety", "bg-stone-700 text-white"),
	("NonAlcoholic", "bg-stone-500 text-white"),
	("Study", "bg-stone-400 text-black"),
	("Academic", "bg-stone-300 text-black"),
	("Food", "bg-stone-200 text-black"),
];

const CAMPUS: Palette = &[
	("Event", "bg-red-900 text-red-100"),
	("Party", "bg-red-800 text-red-100"),
	("BollywoodSociety", "bg-amber-800 text-amber-100"),
	("NonAlcoholic", "bg-green-800 text-green-100"),
	("Study", "bg-blue-800 text-blue-100"),
	("Academic", "bg-indigo-800 text-indigo-100"),
	("Sports", "bg-orange-800 text-orange-100"),
];

const HEATMAP: Palette = &[
	("Event", "bg-stone-700 text-white"),
	("Party", "bg-stone-600 text-white"),
	("Freshers", "bg-stone-800 text-white"),
	("Arts", "bg-stone-600 text-white"),
	("Culture", "bg-stone-700 text-white"),
	("Music", "bg-stone-600 text-white"),
	("Live", "bg-stone-800 text-white"),
	("Comedy", "bg-stone-700 text-white"),
	("Art", "bg-stone-600 text-white"),
	("Sports", "bg-stone-700 text-white"),
	("Social", "bg-stone-600 text-white"),
];

impl Theme {
	fn palette(&self) -> (Palette, &'static str) {
		match self {
			Theme::Stone => (STONE, "bg-gray-800 text-white"),
			Theme::Campus => (CAMPUS, "bg-gray-800 text-gray-100"),
			Theme::Heatmap => (HEATMAP, "bg-stone-500 text-white"),
		}
	}

	pub fn tag_style(
		&self,
		tag: &Tag,
	) -> &'static str {
		let (palette, fallback) = self.palette();
		palette.iter().find(|(label, _)| tag == *label).map(|(_, style)| *style).unwrap_or(fallback)
	}

	pub fn intensity_style(
		&self,
		intensity: Intensity,
	) -> &'static str {
		match intensity {
			Intensity::High => "bg-red-500 w-6 h-6",
			Intensity::Medium => "bg-orange-500 w-5 h-5",
			Intensity::Low => "bg-yellow-500 w-4 h-4",
		}
	}
}

impl FromStr for Theme {
	type Err = ServiceError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"stone" => Ok(Theme::Stone),
			"campus" => Ok(Theme::Campus),
			"heatmap" => Ok(Theme::Heatmap),
			other => Err(ServiceError::Config(format!("unknown theme `{other}`"))),
		}
	}
}
