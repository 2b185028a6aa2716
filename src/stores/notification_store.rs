use std::rc::Rc;

use yew::Reducible;

use crate::models::Notification;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub notification: Notification,
}

impl Toast {
    pub fn new(notification: Notification) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            notification,
        }
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(String),
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.push(toast),
            ToastAction::Dismiss(id) => next.dismiss(&id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_dismiss_by_id() {
        let first = Toast::new(Notification::info("Saved", "ok"));
        let second = Toast::new(Notification::error("Oops", "bad"));
        assert_ne!(first.id, second.id);

        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(first.clone()))
            .reduce(ToastAction::Push(second))
            .reduce(ToastAction::Dismiss(first.id));
        assert_eq!(queue.toasts().len(), 1);
        assert!(queue.toasts()[0].notification.is_error());

        let unchanged = queue.clone().reduce(ToastAction::Dismiss("missing".to_string()));
        assert_eq!(unchanged.toasts().len(), 1);
    }
}
