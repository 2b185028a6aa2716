use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::DashboardLayout;
use crate::hooks::{use_session, use_toast};
use crate::models::{ContactField, Notification};
use crate::stores::{ContactAction, ContactBook, ContactError};
use crate::utils::{BrowserStorage, MAX_EMERGENCY_CONTACTS};
use crate::viewmodels::ContactsViewModel;

fn rejection(error: &ContactError) -> Notification {
    Notification::error(error.title(), error.to_string())
}

#[function_component(ContactsView)]
pub fn contacts_view() -> Html {
    let session = use_session();
    let toast = use_toast();
    let book = use_reducer(|| ContactBook::load(BrowserStorage));
    let saving = use_state(|| false);

    let on_add = {
        let book = book.clone();
        let notify = toast.notify.clone();
        Callback::from(move |_: MouseEvent| {
            if book.is_full() {
                notify.emit(rejection(&ContactError::LimitReached));
                return;
            }
            book.dispatch(ContactAction::Add);
        })
    };

    let on_save = {
        let book = book.clone();
        let token = session.token();
        let notify = toast.notify.clone();
        let saving = saving.clone();

        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            saving.set(true);

            let snapshot = (*book).clone();
            let token = token.clone();
            let notify = notify.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ContactsViewModel::new().save(&snapshot, token.as_deref()).await {
                    Ok(notification) => notify.emit(notification),
                    Err(e) => {
                        log::warn!("⚠️ Contactos no guardados: {}", e);
                        notify.emit(rejection(&e));
                    }
                }
                saving.set(false);
            });
        })
    };

    let rows = book.contacts().iter().enumerate().map(|(index, contact)| {
        let bind = |field: ContactField| {
            let book = book.clone();
            let id = contact.id.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                book.dispatch(ContactAction::Update(id.clone(), field, input.value()));
            })
        };

        let on_remove = {
            let book = book.clone();
            let notify = toast.notify.clone();
            let id = contact.id.clone();
            Callback::from(move |_: MouseEvent| {
                if book.contacts().len() <= 1 {
                    notify.emit(rejection(&ContactError::LastContact));
                    return;
                }
                book.dispatch(ContactAction::Remove(id.clone()));
            })
        };

        html! {
            <div key={contact.id.clone()} class="card contact-row">
                <span class="contact-index">{(index + 1).to_string()}</span>
                <div class="contact-fields">
                    <input
                        type="text"
                        placeholder="Name"
                        value={contact.name.clone()}
                        oninput={bind(ContactField::Name)}
                    />
                    <input
                        type="tel"
                        placeholder="+1 234 567 8900"
                        value={contact.phone.clone()}
                        oninput={bind(ContactField::Phone)}
                    />
                </div>
                <button class="icon-button danger" title="Remove contact" onclick={on_remove}>{"🗑️"}</button>
            </div>
        }
    });

    html! {
        <DashboardLayout>
            <section class="page-header">
                <h1>{"Emergency Contacts"}</h1>
                <p class="muted">
                    {format!("These people are alerted when you trigger SOS. Up to {} contacts.", MAX_EMERGENCY_CONTACTS)}
                </p>
            </section>

            <section class="contact-list">
                { for rows }
            </section>

            <div class="button-row">
                <button class="btn-outline" onclick={on_add} disabled={book.is_full()}>
                    {format!("+ Add contact ({}/{})", book.contacts().len(), MAX_EMERGENCY_CONTACTS)}
                </button>
                <button class="btn-primary" onclick={on_save} disabled={*saving}>
                    { if *saving { "Saving..." } else { "💾 Save contacts" } }
                </button>
            </div>
        </DashboardLayout>
    }
}
