use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/location")]
    Location,
    #[at("/predict")]
    Predict,
    #[at("/assistant")]
    Assistant,
    #[at("/stays")]
    Stays,
    #[at("/emergency-contacts")]
    EmergencyContacts,
    #[at("/sos")]
    Sos,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Location
                | Route::Predict
                | Route::Assistant
                | Route::Stays
                | Route::EmergencyContacts
                | Route::Sos
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Replace the current history entry with this route
    Redirect(Route),
}

pub fn guard(route: Route, is_authenticated: bool) -> GuardDecision {
    if route.is_protected() && !is_authenticated {
        GuardDecision::Redirect(Route::Login)
    } else {
        GuardDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_visitors_go_to_login() {
        for route in [Route::Dashboard, Route::Sos, Route::EmergencyContacts, Route::Stays] {
            assert_eq!(guard(route, false), GuardDecision::Redirect(Route::Login));
            assert_eq!(guard(route, true), GuardDecision::Render);
        }
    }

    #[test]
    fn public_routes_always_render() {
        for route in [Route::Home, Route::Login, Route::Register, Route::NotFound] {
            assert_eq!(guard(route, false), GuardDecision::Render);
        }
    }

    #[test]
    fn paths_match_routes() {
        assert_eq!(Route::recognize("/emergency-contacts"), Some(Route::EmergencyContacts));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
        assert_eq!(Route::Sos.to_path(), "/sos");
    }
}
