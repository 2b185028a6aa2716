// ============================================================================
// USE SESSION HOOK - sesión compartida
// ============================================================================

use yew::prelude::*;

use crate::models::User;
use crate::stores::{SessionAction, SessionStore};
use super::app_context::use_app_context;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: UseReducerHandle<SessionStore>,
    pub login: Callback<(User, String)>,
    pub login_with_token: Callback<(String, String)>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state.token().map(str::to_string)
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_app_context().session;

    let login = {
        let state = state.clone();
        Callback::from(move |(user, token): (User, String)| {
            state.dispatch(SessionAction::Login { user, token });
        })
    };

    let login_with_token = {
        let state = state.clone();
        Callback::from(move |(token, email): (String, String)| {
            state.dispatch(SessionAction::LoginWithToken { token, email });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SessionAction::Logout))
    };

    UseSessionHandle {
        state,
        login,
        login_with_token,
        logout,
    }
}
