pub mod entity;
pub mod profile;
pub mod schemas;
