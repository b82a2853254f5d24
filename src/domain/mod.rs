pub mod commands;
pub mod event;
pub mod post;
pub mod tag;
pub mod theme;
pub mod user;
