pub mod auth;
pub mod courses;
pub mod items;
pub mod users;
