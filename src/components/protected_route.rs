use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::{guard, GuardDecision, Route};

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub route: Route,
    pub children: Children,
}

/// Renders its children only when the session may see `route`; otherwise replaces
/// the current history entry with the login page.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let decision = guard(props.route, session.is_authenticated());

    use_effect_with(decision, move |decision| {
        if let (GuardDecision::Redirect(target), Some(navigator)) = (*decision, navigator) {
            log::info!("🔒 Ruta protegida, redirigiendo a {}", target.to_path());
            navigator.replace(&target);
        }
        || ()
    });

    match decision {
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::Redirect(_) => html! {},
    }
}
