use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAudioElement};

use crate::animation::AudioCues;

/// Cues played through `<audio>` elements on the page. Either element may be
/// missing; playback rejections (autoplay policy etc.) are swallowed.
pub struct DomAudio {
    peg: Option<HtmlAudioElement>,
    slot: Option<HtmlAudioElement>,
    swallow: Closure<dyn FnMut(JsValue)>,
}

impl DomAudio {
    pub fn from_document(doc: &Document, peg_id: &str, slot_id: &str) -> Self {
        let find = |id: &str| {
            doc.get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
        };
        let peg = find(peg_id);
        let slot = find(slot_id);
        if peg.is_none() || slot.is_none() {
            gloo::console::log!("plinko: sound elements missing, cues partly muted");
        }
        Self {
            peg,
            slot,
            swallow: Closure::wrap(Box::new(|_err: JsValue| {}) as Box<dyn FnMut(JsValue)>),
        }
    }

    fn restart(&self, el: &Option<HtmlAudioElement>) {
        let Some(el) = el else { return };
        el.set_current_time(0.0);
        if let Ok(promise) = el.play() {
            let _ = promise.catch(&self.swallow);
        }
    }
}

impl AudioCues for DomAudio {
    fn peg_hit(&mut self) {
        self.restart(&self.peg);
    }

    fn slot_landing(&mut self) {
        self.restart(&self.slot);
    }
}
