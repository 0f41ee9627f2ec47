pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod sitemap;
