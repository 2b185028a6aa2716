use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::DashboardLayout;
use crate::hooks::{use_session, use_toast};
use crate::models::demo::ASSISTANT_SUGGESTIONS;
use crate::models::{ChatMessage, Notification};
use crate::services::speech::{self, recognition_supported, synthesis_supported};
use crate::services::SpeechRecognizer;
use crate::viewmodels::{AssistantViewModel, ChatAction, ChatLog};

fn message_bubble(message: &ChatMessage) -> Html {
    let class = if message.is_from_user() { "chat-bubble user" } else { "chat-bubble assistant" };
    html! {
        <div key={message.id.clone()} class={class}>
            <p>{message.content.clone()}</p>
            <span class="chat-time">{message.timestamp.format("%H:%M").to_string()}</span>
        </div>
    }
}

#[function_component(AssistantView)]
pub fn assistant_view() -> Html {
    let session = use_session();
    let toast = use_toast();
    let chat = use_reducer(ChatLog::default);
    let input = use_state(String::new);
    let muted = use_state(|| false);
    let speaking = use_state(|| false);
    let listening = use_state(|| false);
    let recognizer = use_mut_ref(|| None::<SpeechRecognizer>);

    let send = {
        let chat = chat.clone();
        let input = input.clone();
        let token = session.token();
        let muted = *muted;
        let speaking = speaking.clone();

        Callback::from(move |text: String| {
            let question = text.trim().to_string();
            if question.is_empty() || chat.is_pending() {
                return;
            }
            chat.dispatch(ChatAction::Ask(question.clone()));
            input.set(String::new());

            let chat = chat.clone();
            let token = token.clone();
            let speaking = speaking.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let pick = |len: usize| (js_sys::Math::random() * len as f64) as usize;
                match AssistantViewModel::new().ask(&question, token.as_deref(), pick).await {
                    Ok(reply) => {
                        if !muted && synthesis_supported() {
                            speaking.set(true);
                            let done = speaking.clone();
                            if let Err(e) = speech::speak(&reply, move || done.set(false)) {
                                log::warn!("⚠️ {}", e);
                                speaking.set(false);
                            }
                        }
                        chat.dispatch(ChatAction::Reply(reply));
                    }
                    Err(e) => {
                        log::error!("❌ Asistente: {}", e);
                        chat.dispatch(ChatAction::Reply(
                            "Sorry, I'm having trouble connecting right now. Please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };

    let on_submit = {
        let send = send.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit((*input).clone());
        })
    };

    let on_toggle_mute = {
        let muted = muted.clone();
        let speaking = speaking.clone();
        Callback::from(move |_: MouseEvent| {
            if !*muted {
                speech::cancel_speech();
                speaking.set(false);
            }
            muted.set(!*muted);
        })
    };

    let on_stop_speaking = {
        let speaking = speaking.clone();
        Callback::from(move |_: MouseEvent| {
            speech::cancel_speech();
            speaking.set(false);
        })
    };

    let on_mic = {
        let listening = listening.clone();
        let recognizer = recognizer.clone();
        let input = input.clone();
        let notify = toast.notify.clone();

        Callback::from(move |_: MouseEvent| {
            if *listening {
                if let Some(active) = recognizer.borrow_mut().take() {
                    active.stop();
                }
                listening.set(false);
                return;
            }

            if !recognition_supported() {
                notify.emit(Notification::error("Not supported", "Voice input is not supported in your browser."));
                return;
            }

            let on_transcript = {
                let input = input.clone();
                move |text: String| input.set(text)
            };
            let on_end = {
                let listening = listening.clone();
                move || listening.set(false)
            };
            let on_error = {
                let notify = notify.clone();
                let listening = listening.clone();
                move |e: speech::SpeechError| {
                    listening.set(false);
                    notify.emit(Notification::error("Voice input failed", e.to_string()));
                }
            };

            match SpeechRecognizer::start(on_transcript, on_end, on_error) {
                Ok(active) => {
                    log::info!("🎙️ Escuchando...");
                    *recognizer.borrow_mut() = Some(active);
                    listening.set(true);
                }
                Err(e) => notify.emit(Notification::error("Not supported", e.to_string())),
            }
        })
    };

    html! {
        <DashboardLayout>
            <section class="page-header row">
                <div>
                    <h1>{"AI Safety Assistant"}</h1>
                    <p class="muted">{"Ask about safety, routes and emergencies."}</p>
                </div>
                <div class="button-row">
                    if *speaking {
                        <button class="btn-ghost" onclick={on_stop_speaking}>{"⏹ Stop"}</button>
                    }
                    <button class="icon-button" title="Toggle voice replies" onclick={on_toggle_mute}>
                        { if *muted { "🔇" } else { "🔊" } }
                    </button>
                </div>
            </section>

            <section class="card chat-card">
                <div class="chat-log">
                    { for chat.messages().iter().map(message_bubble) }
                    if chat.is_pending() {
                        <div class="chat-bubble assistant typing"><span>{"..."}</span></div>
                    }
                </div>

                <div class="suggestions">
                    { for ASSISTANT_SUGGESTIONS.iter().map(|suggestion| {
                        let input = input.clone();
                        let text = suggestion.to_string();
                        html! {
                            <button class="chip" onclick={Callback::from(move |_: MouseEvent| input.set(text.clone()))}>
                                {*suggestion}
                            </button>
                        }
                    }) }
                </div>

                <form class="chat-input" onsubmit={on_submit}>
                    <button
                        type="button"
                        class={classes!("icon-button", listening.then_some("recording"))}
                        title="Voice input"
                        onclick={on_mic}
                    >
                        { if *listening { "⏺" } else { "🎙️" } }
                    </button>
                    <input
                        type="text"
                        placeholder="Ask about travel safety..."
                        value={(*input).clone()}
                        oninput={on_input}
                        disabled={chat.is_pending()}
                    />
                    <button type="submit" class="btn-primary" disabled={chat.is_pending() || input.trim().is_empty()}>
                        {"Send"}
                    </button>
                </form>
            </section>
        </DashboardLayout>
    }
}
