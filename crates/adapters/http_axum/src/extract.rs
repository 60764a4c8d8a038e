//! Request extractors.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use cookie::Cookie;

use handyhub_domain::access::AccessTier;

use crate::state::AccessGate;

/// Find the value of cookie `name` across every `Cookie` header.
///
/// Unparsable pairs are skipped. The first match wins.
#[must_use]
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

/// The caller's [`AccessTier`], resolved from the role cookie.
///
/// Never rejects: a missing cookie yields [`AccessTier::Guest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access(pub AccessTier);

impl<S> FromRequestParts<S> for Access
where
    S: Send + Sync,
    Arc<AccessGate>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let gate = Arc::<AccessGate>::from_ref(state);
        let role = cookie_value(&parts.headers, &gate.cookie_name);
        let tier = gate.policy.resolve(role.as_deref());
        tracing::trace!(role = ?role, %tier, "resolved access tier");
        Ok(Self(tier))
    }
}
