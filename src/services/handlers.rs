use chrono::Utc;

use crate::{
	adapters::repositories::LocalStorage,
	domain::{
		commands::Command,
		post::schemas::PostDraft,
		tag::TagFilter,
		user::{
			profile::Profile,
			schemas::{AuthForm, AuthMode},
		},
	},
	services::{
		context::AppContext,
		response::{Notice, ServiceError, ServiceResponse},
	},
};

pub struct AppHandler;
impl AppHandler {
	/// Applies one UI command to the context. Errors leave the context as it was.
	pub async fn handle<S: LocalStorage>(
		ctx: &mut AppContext<S>,
		command: Command,
	) -> Result<ServiceResponse, ServiceError> {
		if !command.is_public() && !ctx.router.is_authenticated() {
			tracing::warn!("rejected {:?} without a session", command);
			return Err(ServiceError::Unauthenticated);
		}

		let res: Result<ServiceResponse, ServiceError> = match command {
			Command::Login { form } => AppHandler::authenticate(ctx, form, AuthMode::Login).await,
			Command::Signup { form } => AppHandler::authenticate(ctx, form, AuthMode::Signup).await,
			Command::SignOut => AppHandler::sign_out(ctx).await,
			Command::ShowProfile => ctx
				.session
				.user()
				.map(|user| Profile::from(user).into())
				.ok_or(ServiceError::Unauthenticated),
			Command::SelectTab { tab } => ctx.router.select_tab(tab).map(Into::into),
			Command::SelectTag { filter } => {
				ctx.feed.select_tag(filter);
				Ok(().into())
			}
			Command::LikePost { post_id } => ctx.feed.like(post_id).map(Into::into),
			Command::EditDraft { draft } => {
				ctx.draft = draft;
				Ok(AppHandler::draft_view(&ctx.draft))
			}
			Command::AddTag { tag } => {
				ctx.draft.add_tag(tag);
				Ok(AppHandler::draft_view(&ctx.draft))
			}
			Command::RemoveTag { tag } => {
				ctx.draft.remove_tag(&tag);
				Ok(AppHandler::draft_view(&ctx.draft))
			}
			Command::AddCustomTag { input } => ctx.draft.add_custom_tag(&input).map(|_| AppHandler::draft_view(&ctx.draft)),
			Command::SubmitPost => AppHandler::submit_post(ctx),
			Command::SelectEvent { event_id } => ctx.map.select(event_id).map(|event| event.clone().into()),
			Command::ClearEvent => {
				ctx.map.clear_selection();
				Ok(().into())
			}
		};

		if let Err(ServiceError::Validation(notice)) = &res {
			tracing::warn!("validation failed: {}", notice);
		}
		res
	}

	async fn authenticate<S: LocalStorage>(
		ctx: &mut AppContext<S>,
		form: AuthForm,
		mode: AuthMode,
	) -> Result<ServiceResponse, ServiceError> {
		let data = form.validate(mode)?;
		let user = ctx.session.login(data).await?.clone();
		ctx.router.authenticate();

		Ok(ServiceResponse::Session {
			user,
			notice: mode.success_notice(),
		})
	}

	async fn sign_out<S: LocalStorage>(ctx: &mut AppContext<S>) -> Result<ServiceResponse, ServiceError> {
		ctx.session.logout().await?;
		ctx.draft = PostDraft::default();
		ctx.feed.select_tag(TagFilter::All);
		ctx.map.clear_selection();
		Ok(ctx.router.sign_out().into())
	}

	fn draft_view(draft: &PostDraft) -> ServiceResponse {
		ServiceResponse::Draft {
			draft: draft.clone(),
			suggestions: draft.suggestions(),
		}
	}

	/// Builds and logs the post, then clears the draft. The feed itself is not extended.
	fn submit_post<S: LocalStorage>(ctx: &mut AppContext<S>) -> Result<ServiceResponse, ServiceError> {
		let author = ctx.session.user().ok_or(ServiceError::Unauthenticated)?;
		let post = ctx.draft.to_post(ctx.feed.next_id()?, author, Utc::now())?;

		tracing::info!(
			post_id = post.id,
			is_event = post.is_event(),
			"new post: {}",
			serde_json::to_string(&post)?
		);
		ctx.draft = PostDraft::default();
		Ok(ServiceResponse::Post {
			post,
			notice: Notice::info("Post created!", "Your post has been shared with the community."),
		})
	}
}
