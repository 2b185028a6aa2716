use yew::prelude::*;

use crate::stores::ThemeAction;
use super::app_context::use_app_context;

#[derive(Clone)]
pub struct UseThemeHandle {
    pub is_dark: bool,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> UseThemeHandle {
    let theme = use_app_context().theme;
    let is_dark = theme.is_dark();
    let toggle = Callback::from(move |_| theme.dispatch(ThemeAction::Toggle));
    UseThemeHandle { is_dark, toggle }
}
