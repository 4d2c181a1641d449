//! services/client/src/router.rs
//!
//! Route table and the auth guard. The guard is a pure function of the
//! destination and credential *presence*: an expired token still passes here
//! and only fails later at the gateway.

/// Every navigable view in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    DocumentList,
    DocumentDetail(i64),
    QaChat(i64),
    QaHistory,
    Exam,
    Statistics,
}

impl Route {
    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::DocumentList => "/documents".to_string(),
            Route::DocumentDetail(id) => format!("/document/{id}"),
            Route::QaChat(document_id) => format!("/qa/{document_id}"),
            Route::QaHistory => "/qa-history".to_string(),
            Route::Exam => "/exam".to_string(),
            Route::Statistics => "/statistics".to_string(),
        }
    }

    /// Parses a path back into a route. The bare root resolves to the
    /// documents landing view.
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" | "/documents" => Some(Route::DocumentList),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/qa-history" => Some(Route::QaHistory),
            "/exam" => Some(Route::Exam),
            "/statistics" => Some(Route::Statistics),
            _ => {
                if let Some(id) = path.strip_prefix("/document/") {
                    id.parse().ok().map(Route::DocumentDetail)
                } else if let Some(id) = path.strip_prefix("/qa/") {
                    id.parse().ok().map(Route::QaChat)
                } else {
                    None
                }
            }
        }
    }

    /// Whether this route is gated behind a credential.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

/// Outcome of the auth guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// The auth guard. Protected routes bounce to login without a credential;
/// login/register bounce to the landing route when one is already present.
pub fn resolve(destination: Route, has_credential: bool) -> Navigation {
    if destination.requires_auth() && !has_credential {
        Navigation::Redirect(Route::Login)
    } else if !destination.requires_auth() && has_credential {
        Navigation::Redirect(Route::DocumentList)
    } else {
        Navigation::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_redirect_to_login_without_credential() {
        for destination in [
            Route::DocumentList,
            Route::DocumentDetail(7),
            Route::QaChat(7),
            Route::QaHistory,
            Route::Exam,
            Route::Statistics,
        ] {
            assert_eq!(
                resolve(destination, false),
                Navigation::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn login_and_register_redirect_to_landing_with_credential() {
        assert_eq!(
            resolve(Route::Login, true),
            Navigation::Redirect(Route::DocumentList)
        );
        assert_eq!(
            resolve(Route::Register, true),
            Navigation::Redirect(Route::DocumentList)
        );
    }

    #[test]
    fn other_navigations_are_unaffected_by_credential_state() {
        assert_eq!(resolve(Route::Login, false), Navigation::Proceed);
        assert_eq!(resolve(Route::Register, false), Navigation::Proceed);
        assert_eq!(resolve(Route::DocumentList, true), Navigation::Proceed);
        assert_eq!(resolve(Route::Exam, true), Navigation::Proceed);
    }

    #[test]
    fn root_resolves_to_document_list() {
        assert_eq!(Route::parse("/"), Some(Route::DocumentList));
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Login,
            Route::Register,
            Route::DocumentList,
            Route::DocumentDetail(42),
            Route::QaChat(9),
            Route::QaHistory,
            Route::Exam,
            Route::Statistics,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::parse("/document/not-a-number"), None);
        assert_eq!(Route::parse("/nope"), None);
    }
}
