// ============================================================================
// APP CONTEXT - stores compartidos vía ContextProvider
// ============================================================================
// Un solo provider en la raíz; el resto de hooks leen de aquí.
// ============================================================================

use yew::prelude::*;

use crate::stores::{LocationStore, SessionStore, ThemeStore, ToastQueue};
use crate::utils::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub session: UseReducerHandle<SessionStore>,
    pub location: UseReducerHandle<LocationStore>,
    pub theme: UseReducerHandle<ThemeStore>,
    pub toasts: UseReducerHandle<ToastQueue>,
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    let session = use_reducer(|| SessionStore::restore(BrowserStorage));
    let location = use_reducer(LocationStore::default);
    let theme = use_reducer(|| ThemeStore::restore(BrowserStorage));
    let toasts = use_reducer(ToastQueue::default);

    // `dark` class on <html> follows the theme store
    {
        let is_dark = theme.is_dark();
        use_effect_with(is_dark, move |is_dark| {
            apply_dark_class(*is_dark);
            || ()
        });
    }

    let context = AppContext {
        session,
        location,
        theme,
        toasts,
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

fn apply_dark_class(is_dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", is_dark) {
        log::warn!("⚠️ No se pudo aplicar el tema: {:?}", e);
    }
}

/// Only valid below `AppContextProvider`
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("use_app_context called outside AppContextProvider")
}
