// Env values used in imgproxy.

/// Env name of the imgproxy endpoint.
pub const IMGPROXY_ENDPOINT: &str = "IMGPROXY_ENDPOINT";
/// Env name of the hex encoded signing key.
pub const IMGPROXY_KEY: &str = "IMGPROXY_KEY";
/// Env name of the hex encoded salt.
pub const IMGPROXY_SALT: &str = "IMGPROXY_SALT";

/// Signature used when no key and salt are configured.
pub const INSECURE_SIGNATURE: &str = "insecure";
