//! Model identifier codec.
//!
//! Identifiers such as `org/name` contain `/`, so they cannot be placed in a
//! single path segment as-is. Everything outside `[A-Za-z0-9-_.~]` is
//! percent-encoded; [`decode`] is the exact inverse.

use std::borrow::Cow;

use thiserror::Error;

/// Prefix of the detail route; the encoded identifier follows it.
pub const MODEL_ROUTE_PREFIX: &str = "/model/";

const HUB_BASE: &str = "https://huggingface.co";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    #[error("path segment is not valid percent-encoded utf-8: {0}")]
    Malformed(String),
    #[error("path segment decodes to an empty identifier")]
    Empty,
    #[error("{0:?} is a dot segment, not an identifier")]
    DotSegment(String),
}

/// Percent-encodes `id` for use as one path segment.
pub fn encode(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Checks that `id` can be placed in a path segment without being resolved away.
///
/// URL resolution treats `.` and `..` as dot segments whether or not they are
/// percent-encoded, so they can never address a model.
pub fn validate(id: &str) -> Result<(), IdentError> {
    if id.trim().is_empty() {
        return Err(IdentError::Empty);
    }
    if matches!(id, "." | "..") {
        return Err(IdentError::DotSegment(id.to_string()));
    }
    Ok(())
}

/// Decodes a path segment produced by [`encode`] (or any browser encoder).
pub fn decode(segment: &str) -> Result<String, IdentError> {
    let decoded = urlencoding::decode(segment)
        .map_err(|_| IdentError::Malformed(segment.to_string()))?;
    validate(&decoded)?;
    Ok(decoded.into_owned())
}

/// Route of the detail page for `id`, e.g. `/model/org%2Fname`.
pub fn model_route(id: &str) -> String {
    format!("{MODEL_ROUTE_PREFIX}{}", encode(id))
}

/// Extracts the still-encoded segment from a detail route.
pub fn route_segment(route: &str) -> Option<&str> {
    route
        .strip_prefix(MODEL_ROUTE_PREFIX)
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|segment| !segment.is_empty())
}

/// Public hub page for a model. The `/` in the id is a real path separator here.
pub fn hub_url(id: &str) -> String {
    format!("{HUB_BASE}/{id}")
}
