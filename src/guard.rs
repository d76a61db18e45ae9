//! Route-access guards.
//!
//! Each guard is a pure decision over the current session and the route's
//! declared role requirement. Guards never navigate; the host shell maps a
//! [`GuardDecision::Redirect`] to an actual route change. Nothing is retained
//! between calls — every decision re-derives its state from the token store.

use crate::session::Session;

/// Where a denied navigation should be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Home,
    Login,
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RedirectTarget),
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Guard for the login page itself: an already-authenticated visitor is sent
/// home instead.
#[must_use]
pub fn login_redirect(session: &Session) -> GuardDecision {
    if session.is_logged_in() {
        GuardDecision::Redirect(RedirectTarget::Home)
    } else {
        GuardDecision::Allow
    }
}

/// Guard for the authenticated area: anyone without a live session is sent to
/// the login page.
#[must_use]
pub fn require_auth(session: &Session) -> GuardDecision {
    if session.is_logged_in() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(RedirectTarget::Login)
    }
}

/// Guard for role-gated routes.
///
/// Unauthenticated visitors go to login. An empty `required` set declares no
/// restriction. An authenticated visitor holding none of the required roles is
/// sent home — there is no dedicated forbidden page.
#[must_use]
pub fn require_role<S: AsRef<str>>(session: &Session, required: &[S]) -> GuardDecision {
    if !session.is_logged_in() {
        return GuardDecision::Redirect(RedirectTarget::Login);
    }
    if required.is_empty() || session.has_any_role(required) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(RedirectTarget::Home)
    }
}
