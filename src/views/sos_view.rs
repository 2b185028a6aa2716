use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ConfirmDialog, DashboardLayout, Spinner};
use crate::hooks::{use_location, use_session, use_toast};
use crate::models::SosOutcome;
use crate::routes::Route;
use crate::stores::ContactBook;
use crate::utils::{format_coordinates, BrowserStorage};
use crate::viewmodels::SosViewModel;

fn outcome_panel(outcome: &SosOutcome, on_reset: Callback<MouseEvent>) -> Html {
    html! {
        <section class="card sos-outcome">
            <div class="row">
                <h2>{ if outcome.simulated { "⚠️ Local alert" } else { "✅ Alert sent" } }</h2>
                if outcome.simulated {
                    <span class="badge demo">{"Demonstration data"}</span>
                }
            </div>
            <p>{outcome.message.clone()}</p>

            <h3>{"Contacts notified"}</h3>
            <ul class="notified-list">
                { for outcome.emergency_contacts.iter().map(|contact| html! {
                    <li>
                        <span>{contact.name.clone()}</span>
                        <a class="mono" href={format!("tel:{}", contact.phone)}>{contact.phone.clone()}</a>
                    </li>
                }) }
            </ul>

            <h3>{"Message sent"}</h3>
            <pre class="sms-preview">{outcome.sms_content.clone()}</pre>

            <button class="btn-primary" onclick={on_reset}>{"I'm Safe Now"}</button>
        </section>
    }
}

#[function_component(SosView)]
pub fn sos_view() -> Html {
    let session = use_session();
    let location = use_location();
    let toast = use_toast();
    let confirming = use_state(|| false);
    let sending = use_state(|| false);
    let outcome = use_state(|| None::<SosOutcome>);

    let current = location.state.current;

    let on_press = {
        let confirming = confirming.clone();
        Callback::from(move |_: MouseEvent| confirming.set(true))
    };

    let on_cancel = {
        let confirming = confirming.clone();
        Callback::from(move |_| confirming.set(false))
    };

    let on_confirm = {
        let confirming = confirming.clone();
        let sending = sending.clone();
        let outcome = outcome.clone();
        let token = session.token();
        let notify = toast.notify.clone();

        Callback::from(move |_| {
            confirming.set(false);
            if *sending {
                return;
            }
            sending.set(true);
            log::warn!("🆘 SOS confirmado");

            let stored = ContactBook::load(BrowserStorage).contacts().to_vec();
            let sending = sending.clone();
            let outcome = outcome.clone();
            let token = token.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let report = SosViewModel::new().trigger(current, &stored, token.as_deref()).await;
                for notification in report.notifications {
                    notify.emit(notification);
                }
                outcome.set(report.outcome);
                sending.set(false);
            });
        })
    };

    let on_reset = {
        let outcome = outcome.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🙂 Usuario a salvo, SOS reiniciado");
            outcome.set(None);
        })
    };

    html! {
        <DashboardLayout>
            <section class="page-header">
                <h1>{"Emergency SOS"}</h1>
                <p class="muted">{"Alert your emergency contacts with your current location."}</p>
            </section>

            { match &*outcome {
                Some(result) => outcome_panel(result, on_reset),
                None => html! {
                    <section class="card sos-panel">
                        <button class="sos-button" onclick={on_press} disabled={*sending}>
                            { if *sending { "SENDING..." } else { "SOS" } }
                        </button>
                        if *sending {
                            <Spinner label={AttrValue::from("Alerting your contacts...")} />
                        }
                        <p class="muted">
                            { match current {
                                Some(c) => format!("Your location: {}", format_coordinates(c.latitude, c.longitude)),
                                None => "Location unknown. Your contacts will get an approximate alert.".to_string(),
                            } }
                        </p>
                        <Link<Route> to={Route::EmergencyContacts} classes={classes!("btn-ghost")}>
                            {"Manage emergency contacts"}
                        </Link<Route>>
                    </section>
                },
            } }

            <section class="card emergency-numbers">
                <h3>{"Local emergency numbers"}</h3>
                <p><a href="tel:911">{"📞 911"}</a>{" Emergency services"}</p>
            </section>

            <ConfirmDialog
                open={*confirming}
                title="Trigger emergency SOS?"
                description="Your emergency contacts will receive an alert with your current location."
                confirm_label="Send SOS"
                on_confirm={on_confirm}
                on_cancel={on_cancel}
            />
        </DashboardLayout>
    }
}
