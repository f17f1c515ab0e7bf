use crate::constants::*;
use bioscan_core::{
    AudioCue, CLICK_CUE_VOLUME, HOVER_CUE_VOLUME, RESET_CUE_VOLUME, SCAN_CUE_VOLUME,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `<audio>` elements for the scene's sound cues.
///
/// Playback is fire-and-forget. A rejected play promise is logged; when the
/// scan cue is rejected (autoplay blocked) every later cue is skipped.
pub struct AudioCues {
    click: Option<web::HtmlAudioElement>,
    hover: Option<web::HtmlAudioElement>,
    scan: Option<web::HtmlAudioElement>,
    enabled: Rc<Cell<bool>>,
}

fn audio_element(document: &web::Document, id: &str) -> Option<web::HtmlAudioElement> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
    if el.is_none() {
        log::warn!("[audio] missing #{}", id);
    }
    el
}

impl AudioCues {
    pub fn new(document: &web::Document) -> Self {
        Self {
            click: audio_element(document, SOUND_CLICK_ID),
            hover: audio_element(document, SOUND_HOVER_ID),
            scan: audio_element(document, SOUND_SCAN_ID),
            enabled: Rc::new(Cell::new(true)),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn play(&self, cue: AudioCue) {
        if !self.enabled.get() {
            return;
        }
        let (el, volume, rewind) = match cue {
            AudioCue::Click => (&self.click, CLICK_CUE_VOLUME, true),
            AudioCue::Reset => (&self.click, RESET_CUE_VOLUME, false),
            AudioCue::Hover => (&self.hover, HOVER_CUE_VOLUME, false),
            AudioCue::Scan => (&self.scan, SCAN_CUE_VOLUME, false),
        };
        let Some(el) = el else {
            return;
        };
        el.set_volume(volume as f64);
        if rewind {
            el.set_current_time(0.0);
        }
        let promise = match el.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play {:?} failed: {:?}", cue, e);
                return;
            }
        };
        let enabled = self.enabled.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] play {:?} prevented: {:?}", cue, e);
                if cue == AudioCue::Scan {
                    enabled.set(false);
                }
            }
        });
    }
}
