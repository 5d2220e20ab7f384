pub mod api;
pub mod currency;
pub mod date_utils;
pub mod logging;

pub use api::ApiClient;
