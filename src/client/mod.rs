use std::time::Duration;

pub mod controller;
pub mod enums;
pub mod errors;
pub mod form;
pub mod models;
pub mod rate_limiter;
pub mod state;
pub mod transport;

pub static REQUESTS_PER_MINUTE_LIMIT: usize = 10;
pub static RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);
pub static DEFAULT_PROXY_URL: &str = "http://localhost:3000/generate";
