//! URL constants and environment variable names for the Canvas SDK.

/// Path prefix appended to every instance base URL.
pub const API_PREFIX: &str = "/api/v1/";

/// Page size sent with the first request of every paginated list.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Environment variable holding the instance base URL (e.g. `https://school.instructure.com`).
pub const ENV_API_URL: &str = "CANVAS_API_URL";

/// Environment variable holding the API access token.
pub const ENV_API_KEY: &str = "CANVAS_API_KEY";
