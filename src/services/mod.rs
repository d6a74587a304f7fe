pub mod auth_service;
pub mod feed_service;
pub mod vote_service;
