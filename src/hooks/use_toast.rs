// ============================================================================
// USE TOAST HOOK - notificaciones con auto-cierre
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Notification;
use crate::stores::{Toast, ToastAction, ToastQueue};
use super::app_context::use_app_context;

#[derive(Clone)]
pub struct UseToastHandle {
    pub queue: UseReducerHandle<ToastQueue>,
    pub notify: Callback<Notification>,
    pub dismiss: Callback<String>,
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    let queue = use_app_context().toasts;

    let notify = {
        let queue = queue.clone();
        Callback::from(move |notification: Notification| {
            if notification.is_error() {
                log::warn!("🔔 {}: {}", notification.title, notification.description);
            } else {
                log::info!("🔔 {}: {}", notification.title, notification.description);
            }
            let toast = Toast::new(notification);
            let id = toast.id.clone();
            queue.dispatch(ToastAction::Push(toast));

            let queue = queue.clone();
            Timeout::new(CONFIG.toast_duration_ms, move || {
                queue.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: String| queue.dispatch(ToastAction::Dismiss(id)))
    };

    UseToastHandle {
        queue,
        notify,
        dismiss,
    }
}
