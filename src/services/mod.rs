pub mod context;
pub mod handlers;
pub mod response;
pub mod router;
pub mod session;
