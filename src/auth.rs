use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

/// Cookie carrying the session token issued by the authentication service.
pub const TOKEN_COOKIE: &str = "token";

/// Cookie carrying the user's role (`employer` or `jobseeker`).
pub const ROLE_COOKIE: &str = "role";

/// SessionCookies
///
/// The two request attributes the route guard consumes, lifted out of the cookie
/// header into plain values. Neither is validated here: the token is only checked
/// for presence and the role is compared as a string by the guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl SessionCookies {
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self {
            token: cookie_value(jar, TOKEN_COOKIE),
            role: cookie_value(jar, ROLE_COOKIE),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

// Empty values are treated the same as a missing cookie.
fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// SessionCookies Extractor Implementation
///
/// Never rejects. A missing or unparsable Cookie header simply yields a session
/// with no token and no role, which the guard treats as unauthenticated.
impl<S> FromRequestParts<S> for SessionCookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self::from_jar(&jar))
    }
}
