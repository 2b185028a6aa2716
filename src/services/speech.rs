// ============================================================================
// SPEECH - síntesis (leer respuestas) y reconocimiento (dictado)
// ============================================================================

use js_sys::{Array, Function, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::SpeechSynthesisUtterance;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeechError {
    #[error("Speech is not supported in your browser.")]
    Unsupported,
    #[error("Speech failed: {0}")]
    Failed(String),
}

fn js_error(value: JsValue) -> SpeechError {
    SpeechError::Failed(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

fn window_has(name: &str) -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

pub fn synthesis_supported() -> bool {
    window_has("speechSynthesis")
}

pub fn recognition_supported() -> bool {
    window_has("SpeechRecognition") || window_has("webkitSpeechRecognition")
}

/// Read `text` aloud; `on_done` runs when it ends or fails.
pub fn speak(text: &str, on_done: impl Fn() + 'static) -> Result<(), SpeechError> {
    let synthesis = web_sys::window()
        .ok_or(SpeechError::Unsupported)?
        .speech_synthesis()
        .map_err(|_| SpeechError::Unsupported)?;
    let utterance = SpeechSynthesisUtterance::new_with_text(text).map_err(js_error)?;

    let done = Closure::<dyn Fn()>::new(on_done).into_js_value();
    utterance.set_onend(Some(done.unchecked_ref::<Function>()));
    utterance.set_onerror(Some(done.unchecked_ref::<Function>()));

    synthesis.speak(&utterance);
    Ok(())
}

pub fn cancel_speech() {
    if let Some(Ok(synthesis)) = web_sys::window().map(|w| w.speech_synthesis()) {
        synthesis.cancel();
    }
}

/// A running `SpeechRecognition` session. Handlers live as long as this value.
pub struct SpeechRecognizer {
    recognition: JsValue,
    _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl SpeechRecognizer {
    /// Single utterance, final results only.
    pub fn start(
        mut on_transcript: impl FnMut(String) + 'static,
        mut on_end: impl FnMut() + 'static,
        mut on_error: impl FnMut(SpeechError) + 'static,
    ) -> Result<Self, SpeechError> {
        let window = web_sys::window().ok_or(SpeechError::Unsupported)?;
        let constructor = ["SpeechRecognition", "webkitSpeechRecognition"]
            .iter()
            .filter_map(|name| Reflect::get(&window, &JsValue::from_str(name)).ok())
            .find(|value| value.is_function())
            .ok_or(SpeechError::Unsupported)?;

        let recognition = Reflect::construct(constructor.unchecked_ref::<Function>(), &Array::new())
            .map_err(js_error)?;
        let _ = Reflect::set(&recognition, &JsValue::from_str("continuous"), &JsValue::FALSE);
        let _ = Reflect::set(&recognition, &JsValue::from_str("interimResults"), &JsValue::FALSE);

        let handlers: Vec<(&str, Closure<dyn FnMut(JsValue)>)> = vec![
            (
                "onresult",
                Closure::new(move |event: JsValue| {
                    if let Some(text) = transcript(&event) {
                        log::debug!("🎙️ Dictado: {}", text);
                        on_transcript(text);
                    }
                }),
            ),
            ("onend", Closure::new(move |_: JsValue| on_end())),
            (
                "onerror",
                Closure::new(move |event: JsValue| {
                    let reason = Reflect::get(&event, &JsValue::from_str("error"))
                        .ok()
                        .and_then(|e| e.as_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    log::warn!("⚠️ Reconocimiento de voz falló: {}", reason);
                    on_error(SpeechError::Failed(reason));
                }),
            ),
        ];

        for (event, handler) in &handlers {
            Reflect::set(&recognition, &JsValue::from_str(event), handler.as_ref()).map_err(js_error)?;
        }
        call_method(&recognition, "start")?;

        Ok(Self {
            recognition,
            _handlers: handlers.into_iter().map(|(_, handler)| handler).collect(),
        })
    }

    pub fn stop(&self) {
        if let Err(e) = call_method(&self.recognition, "stop") {
            log::warn!("⚠️ {}", e);
        }
    }
}

fn call_method(target: &JsValue, name: &str) -> Result<(), SpeechError> {
    let method = Reflect::get(target, &JsValue::from_str(name)).map_err(js_error)?;
    method
        .dyn_into::<Function>()
        .map_err(js_error)?
        .call0(target)
        .map_err(js_error)?;
    Ok(())
}

/// `event.results[0][0].transcript`
fn transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}
