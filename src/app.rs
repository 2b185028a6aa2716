// ============================================================================
// APP - contexto compartido + router
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Protected, ToastViewport};
use crate::hooks::AppContextProvider;
use crate::routes::Route;
use crate::views::{
    AssistantView, ContactsView, DashboardView, LandingView, LocationView, LoginView,
    NotFoundView, PredictView, RegisterView, SosView, StaysView,
};

fn page(route: &Route) -> Html {
    match route {
        Route::Home => html! { <LandingView /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Dashboard => html! { <DashboardView /> },
        Route::Location => html! { <LocationView /> },
        Route::Predict => html! { <PredictView /> },
        Route::Assistant => html! { <AssistantView /> },
        Route::Stays => html! { <StaysView /> },
        Route::EmergencyContacts => html! { <ContactsView /> },
        Route::Sos => html! { <SosView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

fn switch(route: Route) -> Html {
    if route.is_protected() {
        html! { <Protected route={route}>{ page(&route) }</Protected> }
    } else {
        page(&route)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppContextProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
                <ToastViewport />
            </BrowserRouter>
        </AppContextProvider>
    }
}
