use serde::{Deserialize, Serialize};

use crate::domain::{
	post::schemas::PostDraft,
	tag::{Tag, TagFilter},
	user::schemas::AuthForm,
};
use crate::services::router::Tab;

/// Every user-interface action the app controller reacts to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
	Login { form: AuthForm },
	Signup { form: AuthForm },
	SignOut,
	ShowProfile,
	SelectTab { tab: Tab },
	SelectTag { filter: TagFilter },
	LikePost { post_id: i64 },
	/// Replaces the open draft, tags included.
	EditDraft { draft: PostDraft },
	AddTag { tag: Tag },
	RemoveTag { tag: Tag },
	AddCustomTag { input: String },
	/// Submits the open draft.
	SubmitPost,
	SelectEvent { event_id: i64 },
	ClearEvent,
}

impl Command {
	/// Commands that can be handled without an active session.
	pub(crate) fn is_public(&self) -> bool {
		matches!(self, Self::Login { .. } | Self::Signup { .. })
	}
}

#[test]
fn test_command_representation() {
	let command: Command = serde_json::from_str(r#"{"type":"like_post","post_id":3}"#).unwrap();
	assert!(matches!(command, Command::LikePost { post_id: 3 }));

	let command: Command = serde_json::from_str(r#"{"type":"select_tab","tab":"map"}"#).unwrap();
	assert!(matches!(command, Command::SelectTab { tab: Tab::Map }));

	let command: Command = serde_json::from_str(r#"{"type":"login","form":{"name":"Jess","email":"jess@uni.ac.uk"}}"#).unwrap();
	assert!(command.is_public());

	let command: Command = serde_json::from_str(r#"{"type":"select_tag","filter":"Study"}"#).unwrap();
	assert!(matches!(command, Command::SelectTag { filter: TagFilter::Tag(tag) } if tag.as_str() == "Study"));

	let command: Command = serde_json::from_str(r#"{"type":"select_tag","filter":"all"}"#).unwrap();
	assert!(matches!(command, Command::SelectTag { filter: TagFilter::All }));
	assert!(serde_json::from_str::<Command>(r#"{"type":"select_tag","filter":{"Tag":"all"}}"#).is_err());

	let command: Command = serde_json::from_str(r#"{"type":"submit_post"}"#).unwrap();
	assert!(matches!(command, Command::SubmitPost));
	assert!(!command.is_public());
}

#[test]
fn test_blank_tags_rejected_at_the_command_boundary() {
	let err = serde_json::from_str::<Command>(r#"{"type":"edit_draft","draft":{"content":"hi","tags":["   ",""," Food "]}}"#).unwrap_err();
	assert!(err.to_string().contains("Tags cannot be empty."));
	assert!(serde_json::from_str::<Command>(r#"{"type":"add_tag","tag":"  "}"#).is_err());

	let command: Command = serde_json::from_str(r#"{"type":"edit_draft","draft":{"content":"hi","tags":[" Food "]}}"#).unwrap();
	let Command::EditDraft { draft } = command else {
		panic!("expected edit_draft");
	};
	assert_eq!(draft.tags.iter().map(Tag::as_str).collect::<Vec<_>>(), vec!["Food"]);
}
