use yew::prelude::*;

use crate::hooks::use_toast;

#[function_component(ToastViewport)]
pub fn toast_viewport() -> Html {
    let toast = use_toast();

    html! {
        <div class="toast-viewport" aria-live="polite">
            { for toast.queue.toasts().iter().map(|t| {
                let id = t.id.clone();
                let dismiss = toast.dismiss.reform(move |_: MouseEvent| id.clone());
                html! {
                    <div key={t.id.clone()} class={classes!("toast", t.notification.is_error().then_some("destructive"))}>
                        <div class="toast-body">
                            <p class="toast-title">{t.notification.title.clone()}</p>
                            <p class="toast-description">{t.notification.description.clone()}</p>
                        </div>
                        <button class="toast-close" onclick={dismiss}>{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
