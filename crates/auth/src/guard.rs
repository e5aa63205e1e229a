//! Route guard: decides whether a navigation renders or redirects.

use crate::policy::Route;
use crate::session::{Session, SessionReader};

/// Why a navigation was bounced to the login route.
///
/// Both reasons resolve to the same redirect target; the distinction exists
/// for tracing only. The login screen does not reveal whether the requested
/// route exists for some other role.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DenialReason {
    NotAuthenticated,
    RoleNotPermitted,
}

/// Outcome of evaluating one navigation attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restoration still in flight; render a placeholder, decide
    /// nothing yet.
    Loading,
    /// Render the requested screen.
    Render(Route),
    /// Redirect to the public login route.
    RedirectToLogin(DenialReason),
}

impl RouteDecision {
    pub fn renders(&self) -> bool {
        matches!(self, RouteDecision::Render(_))
    }

    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            RouteDecision::RedirectToLogin(_) => Some(Route::Login),
            _ => None,
        }
    }
}

/// Pure decision function: session snapshot × requested route → outcome.
pub fn evaluate(session: &Session, route: Route) -> RouteDecision {
    if route.is_public() {
        return RouteDecision::Render(route);
    }
    if session.loading {
        return RouteDecision::Loading;
    }
    match session.identity.as_ref() {
        None => RouteDecision::RedirectToLogin(DenialReason::NotAuthenticated),
        Some(identity) if !route.permits(identity.role) => {
            RouteDecision::RedirectToLogin(DenialReason::RoleNotPermitted)
        }
        Some(_) => RouteDecision::Render(route),
    }
}

/// Route guard bound to a live session.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionReader,
}

impl RouteGuard {
    pub fn new(session: SessionReader) -> Self {
        Self { session }
    }

    /// Decide the current navigation.
    ///
    /// Re-evaluated from a fresh snapshot on every call, so a sign-out
    /// elsewhere in the UI takes effect on the next navigation.
    pub fn decide(&self, route: Route) -> RouteDecision {
        let snapshot = self.session.snapshot();
        let decision = evaluate(&snapshot, route);
        if let RouteDecision::RedirectToLogin(reason) = decision {
            tracing::debug!(route = route.path(), ?reason, "redirected to login");
        }
        decision
    }
}
