use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_session, use_theme};
use crate::routes::Route;
use crate::utils::display_name;

pub const NAV_ITEMS: [(Route, &str, &str); 6] = [
    (Route::Dashboard, "🏠", "Home"),
    (Route::Location, "📍", "Location"),
    (Route::Predict, "🧠", "Predict"),
    (Route::Assistant, "💬", "AI Chat"),
    (Route::Stays, "🏨", "Stays"),
    (Route::EmergencyContacts, "📞", "Contacts"),
];

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    /// Sidebar on desktop, bottom bar on mobile
    #[prop_or_default]
    pub bottom: bool,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let current = use_route::<Route>();
    let class = if props.bottom { "bottom-nav" } else { "sidebar-nav" };

    html! {
        <nav class={class}>
            { for NAV_ITEMS.iter().map(|(route, icon, label)| {
                let active = current == Some(*route);
                html! {
                    <Link<Route> to={*route} classes={classes!("nav-item", active.then_some("active"))}>
                        <span class="nav-icon">{*icon}</span>
                        <span class="nav-label">{*label}</span>
                    </Link<Route>>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let session = use_session();
    let theme = use_theme();
    let navigator = use_navigator();

    let email = session
        .state
        .user()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="dashboard-layout">
            <aside class="sidebar">
                <Link<Route> to={Route::Dashboard} classes={classes!("brand")}>
                    <span class="brand-icon">{"🛡️"}</span>
                    <span class="brand-name">{"SafeTravel AI"}</span>
                </Link<Route>>
                <Navigation />
                <Link<Route> to={Route::Sos} classes={classes!("sos-link")}>{"🆘 Emergency SOS"}</Link<Route>>
            </aside>

            <div class="main-column">
                <header class="app-header">
                    <Link<Route> to={Route::Dashboard} classes={classes!("brand", "mobile-only")}>
                        <span class="brand-icon">{"🛡️"}</span>
                        <span class="brand-name">{"SafeTravel AI"}</span>
                    </Link<Route>>
                    <div class="header-actions">
                        <button class="icon-button" title="Toggle theme" onclick={theme.toggle.reform(|_| ())}>
                            { if theme.is_dark { "☀️" } else { "🌙" } }
                        </button>
                        <div class="user-chip" title={email.clone()}>
                            <span class="user-name">{display_name(&email)}</span>
                            <span class="user-email">{email.clone()}</span>
                        </div>
                        <button class="btn-ghost danger" onclick={on_logout}>{"Sign out"}</button>
                    </div>
                </header>

                <main class="page">
                    {props.children.clone()}
                </main>

                <Navigation bottom=true />
            </div>
        </div>
    }
}
