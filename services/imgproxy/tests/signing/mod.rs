mod keyed;
mod legacy;

use imgsign_imgproxy::Builder;

use crate::{HOST, KEY, SALT};

/// Keyed builder with the shared test endpoint and credentials.
pub fn keyed_builder() -> Builder {
    crate::init_logger();

    Builder::keyed()
        .with_endpoint(HOST)
        .and_then(|b| b.with_credentials(KEY, SALT))
        .expect("keyed builder must be valid")
}

/// Legacy builder with the shared test endpoint and credentials.
pub fn legacy_builder() -> Builder {
    crate::init_logger();

    Builder::legacy()
        .with_endpoint(HOST)
        .and_then(|b| b.with_credentials(KEY, SALT))
        .expect("legacy builder must be valid")
}

/// Split a built URL into signature and path.
pub fn split_url(url: &str) -> (&str, &str) {
    let rest = url
        .strip_prefix(HOST)
        .and_then(|v| v.strip_prefix('/'))
        .expect("url must start with the test host");
    let idx = rest.find('/').expect("url must have a path");
    rest.split_at(idx)
}
