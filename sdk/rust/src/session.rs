//! Page access rules for the three front-end routes.

use crate::types::SessionUser;

pub const LANDING_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const ADMIN_ROUTE: &str = "/admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Decides whether `path` may render for `user`.
///
/// `/admin` and everything below it needs a stored admin session; a missing
/// or non-admin session is sent to `/login`. Other paths are public.
pub fn guard(path: &str, user: Option<&SessionUser>) -> RouteDecision {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let is_admin_path = path == ADMIN_ROUTE
        || path
            .strip_prefix(ADMIN_ROUTE)
            .is_some_and(|rest| rest.starts_with('/'));

    if is_admin_path && !user.is_some_and(|u| u.is_admin) {
        return RouteDecision::Redirect(LOGIN_ROUTE);
    }
    RouteDecision::Allow
}
