//! Route Guard
//!
//! The access-control predicate that sits in front of the employer and jobseeker
//! areas. It only ever sees plain values (path, token, role) and produces a
//! `RouteDecision`; translating that decision into an HTTP response is the job of
//! the middleware in `lib.rs`.

/// ProtectedArea
///
/// One row of the guard table: a path prefix, the role allowed inside it, and
/// where to send an authenticated user holding any other role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedArea {
    pub prefix: &'static str,
    pub required_role: &'static str,
    pub fallback: &'static str,
}

/// Default table. Order matters: the first matching prefix classifies the path.
pub const DEFAULT_AREAS: &[ProtectedArea] = &[
    ProtectedArea {
        prefix: "/employer",
        required_role: "employer",
        fallback: "/jobseeker/dashboard",
    },
    ProtectedArea {
        prefix: "/jobseeker",
        required_role: "jobseeker",
        fallback: "/employer/dashboard",
    },
];

pub const LOGIN_PATH: &str = "/login";

/// RouteDecision
///
/// The only two outcomes the guard can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Forward the request unchanged.
    Continue,
    /// Send the client to another path instead.
    Redirect(&'static str),
}

impl RouteDecision {
    pub fn is_continue(&self) -> bool {
        matches!(self, RouteDecision::Continue)
    }

    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            RouteDecision::Continue => None,
            RouteDecision::Redirect(target) => Some(target),
        }
    }
}

/// RouteGuard
///
/// Immutable guard bound to a protected-area table at startup and shared by every
/// request through `AppState`. Cheap to clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    areas: &'static [ProtectedArea],
    login_path: &'static str,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(DEFAULT_AREAS, LOGIN_PATH)
    }
}

impl RouteGuard {
    pub fn new(areas: &'static [ProtectedArea], login_path: &'static str) -> Self {
        Self { areas, login_path }
    }

    pub fn areas(&self) -> &[ProtectedArea] {
        self.areas
    }

    pub fn login_path(&self) -> &str {
        self.login_path
    }

    /// classify
    ///
    /// Returns the first area whose prefix the path starts with, or `None` when the
    /// path is unprotected. Matching is a plain string prefix, so `/employer` and
    /// `/employer/42/edit` land in the same area.
    pub fn classify(&self, path: &str) -> Option<&ProtectedArea> {
        self.areas.iter().find(|area| path.starts_with(area.prefix))
    }

    /// evaluate
    ///
    /// Total over its inputs: every combination maps to exactly one decision.
    ///
    /// 1. Unprotected path: continue, no further checks.
    /// 2. Protected path without a token: redirect to the login page.
    /// 3. Protected path with a token but another role: redirect to the area's fallback.
    /// 4. Otherwise: continue.
    ///
    /// An empty token counts as absent. The role must match exactly; unknown or
    /// missing roles never satisfy any area.
    pub fn evaluate(&self, path: &str, token: Option<&str>, role: Option<&str>) -> RouteDecision {
        let Some(area) = self.classify(path) else {
            return RouteDecision::Continue;
        };

        if token.is_none_or(str::is_empty) {
            return RouteDecision::Redirect(self.login_path);
        }

        if role != Some(area.required_role) {
            return RouteDecision::Redirect(area.fallback);
        }

        RouteDecision::Continue
    }
}
