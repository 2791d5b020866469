use dioxus::prelude::*;
use shared_types::UserRole;

use super::Route;
use crate::session::use_session;

/// Where a guarded route should send the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    ToLogin,
    ToDashboard(&'static str),
}

/// Dashboard root for a role. Unknown or missing roles land on login.
pub fn dashboard_path(role: Option<UserRole>) -> &'static str {
    match role {
        Some(UserRole::Student) => "/dashboard",
        Some(UserRole::Admin) => "/admin",
        Some(UserRole::Mentor) => "/mentor",
        None => "/login",
    }
}

/// Route equivalent of [`dashboard_path`], used for navigation.
pub fn dashboard_route(role: Option<UserRole>) -> Route {
    match role {
        Some(UserRole::Student) => Route::StudentHome {},
        Some(UserRole::Admin) => Route::AdminHome {},
        Some(UserRole::Mentor) => Route::MentorHome {},
        None => Route::Login {},
    }
}

/// Gate a route subtree: no token redirects to login; an authenticated
/// visitor with the wrong role is sent to their own dashboard root,
/// never to login.
pub fn resolve_access(
    token: Option<&str>,
    role: Option<UserRole>,
    required: Option<UserRole>,
) -> GuardDecision {
    let authenticated = token.map(str::trim).is_some_and(|t| !t.is_empty());
    if !authenticated {
        return GuardDecision::ToLogin;
    }
    match required {
        None => GuardDecision::Allow,
        Some(required) if role == Some(required) => GuardDecision::Allow,
        Some(_) => GuardDecision::ToDashboard(dashboard_path(role)),
    }
}

/// Layout guard for a role-specific subtree. While the session store has
/// not finished its initial storage read, nothing is rendered.
#[component]
pub fn RequireRole(required: UserRole, children: Element) -> Element {
    let session = use_session();

    if !(session.ready)() {
        return rsx! {};
    }

    let token = session.token.read().clone();
    let role = *session.role.read();

    match resolve_access(token.as_deref(), role, Some(required)) {
        GuardDecision::Allow => rsx! {
            {children}
        },
        GuardDecision::ToLogin => {
            navigator().replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::ToDashboard(_) => {
            navigator().replace(dashboard_route(role));
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_roles_resolve_to_login() {
        assert_eq!(dashboard_path(None), "/login");
        assert_eq!(UserRole::from_tag("wizard"), None);
        assert_eq!(dashboard_path(UserRole::from_tag("wizard")), "/login");
    }

    #[test]
    fn each_role_resolves_to_its_dashboard_root() {
        assert_eq!(dashboard_path(Some(UserRole::Student)), "/dashboard");
        assert_eq!(dashboard_path(Some(UserRole::Admin)), "/admin");
        assert_eq!(dashboard_path(Some(UserRole::Mentor)), "/mentor");
    }

    #[test]
    fn path_and_route_tables_agree() {
        for role in [
            None,
            Some(UserRole::Student),
            Some(UserRole::Admin),
            Some(UserRole::Mentor),
        ] {
            assert_eq!(format!("{}", dashboard_route(role)), dashboard_path(role));
        }
    }

    #[test]
    fn missing_token_always_redirects_to_login() {
        assert_eq!(
            resolve_access(None, Some(UserRole::Mentor), Some(UserRole::Mentor)),
            GuardDecision::ToLogin
        );
        assert_eq!(
            resolve_access(Some("  "), Some(UserRole::Mentor), None),
            GuardDecision::ToLogin
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            resolve_access(Some("tok"), Some(UserRole::Student), Some(UserRole::Student)),
            GuardDecision::Allow
        );
        // No role requirement only needs a token.
        assert_eq!(
            resolve_access(Some("tok"), None, None),
            GuardDecision::Allow
        );
    }

    #[test]
    fn wrong_role_goes_to_own_dashboard_never_login() {
        let decision = resolve_access(
            Some("tok"),
            Some(UserRole::Mentor),
            Some(UserRole::Student),
        );
        assert_eq!(decision, GuardDecision::ToDashboard("/mentor"));
    }

    #[test]
    fn authenticated_but_unknown_role_falls_back_to_login_path() {
        let decision = resolve_access(Some("tok"), None, Some(UserRole::Student));
        assert_eq!(decision, GuardDecision::ToDashboard("/login"));
    }
}
