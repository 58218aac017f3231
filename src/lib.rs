//! A minimal URL shortener: an in-memory [`store::UrlStore`] behind two
//! actix-web endpoints.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

pub use routes::configure;
pub use store::UrlStore;
