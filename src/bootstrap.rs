use crate::{
	adapters::repositories::FileStorage, dependencies::dependency, services::context::AppContext, services::response::ServiceError,
};

pub struct Bootstrap;
impl Bootstrap {
	/// Wires the configured storage into a freshly initialised context.
	pub async fn app_context() -> Result<AppContext<FileStorage>, ServiceError> {
		let dependency = dependency();
		AppContext::init(dependency.config()?, dependency.storage()?).await
	}
}
