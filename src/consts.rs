pub const API_VERSION_PREFIX: &str = "/api/v1";

pub const CSRF_TOKEN_HEADER_NAME: &str = "x-csrf-token";
pub const CSRF_COOKIE_HEADER_NAME: &str = "x-csrf-cookie";

pub const CSRF_TOKEN_TTL_SECONDS: i64 = chrono::TimeDelta::hours(4).num_seconds();
