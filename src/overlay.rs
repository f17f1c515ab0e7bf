use crate::audio::AudioCues;
use crate::constants::*;
use crate::dom;
use bioscan_core::{
    ActiveTest, AudioCue, MeshId, OverlayPhase, ScanLabel, SceneHooks, StatusLevel, ZoneName,
    ZoneRegistry, OVERLAY_FADE_MS,
};
use fnv::FnvHashSet;
use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

const STATUS_CLASSES: [&str; 3] = ["text-green-400", "text-yellow-400", "text-red-400"];

fn status_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Ok => STATUS_CLASSES[0],
        StatusLevel::Warning => STATUS_CLASSES[1],
        StatusLevel::Error => STATUS_CLASSES[2],
    }
}

/// Show exactly one test panel, hiding the others.
pub fn show_test_panel(document: &web::Document, test: ActiveTest) {
    for t in ActiveTest::ALL {
        if let Some(el) = document.get_element_by_id(t.panel_id()) {
            let cl = el.class_list();
            if t == test {
                _ = cl.remove_1("hidden");
            } else {
                _ = cl.add_1("hidden");
            }
        }
    }
}

/// Forward a zone id to the page's `window.loadTest(id)` when it exists.
fn call_page_load_test(zone: ZoneName) {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(f) = js_sys::Reflect::get(&window, &JsValue::from_str("loadTest")) else {
        return;
    };
    if let Some(f) = f.dyn_ref::<js_sys::Function>() {
        if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_str(zone.as_str())) {
            log::warn!("[click] window.loadTest failed: {:?}", e);
        }
    }
}

/// DOM-backed presentation hooks: status line, tracker, loading overlay,
/// scan labels, info panel and sound cues. Missing elements are skipped.
pub struct DomHooks {
    document: web::Document,
    audio: AudioCues,
    zones: ZoneRegistry,
    status: Option<web::HtmlElement>,
    tracker: Option<web::HtmlElement>,
    overlay: Option<web::HtmlElement>,
    progress_bar: Option<web::HtmlElement>,
    loading_text: Option<web::HtmlElement>,
    info_content: Option<web::HtmlElement>,
    outlined: usize,
}

impl DomHooks {
    pub fn new(document: web::Document) -> Self {
        let audio = AudioCues::new(&document);
        Self {
            status: dom::html_element(&document, STATUS_ID),
            tracker: dom::html_element(&document, TRACKER_ID),
            overlay: dom::html_element(&document, LOADING_OVERLAY_ID),
            progress_bar: dom::html_element(&document, PROGRESS_BAR_ID),
            loading_text: dom::html_element(&document, LOADING_TEXT_ID),
            info_content: dom::html_element(&document, INFO_CONTENT_ID),
            document,
            audio,
            zones: ZoneRegistry::new(),
            outlined: 0,
        }
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    fn show_zone_info(&self, zone: ZoneName) {
        let Some(el) = &self.info_content else {
            return;
        };
        let z = self.zones.lookup(zone);
        el.set_inner_html(&format!(
            "<h3 class='zone-title'>{}</h3><p class='zone-system'>{}</p><p class='zone-desc'>{}</p>",
            z.display_name, z.system_label, z.description
        ));
    }
}

impl SceneHooks for DomHooks {
    fn highlight(&mut self, meshes: &FnvHashSet<MeshId>) {
        // The renderer reads the set from the controller each frame.
        self.outlined = meshes.len();
        log::info!("[click] outlining {} meshes", self.outlined);
    }

    fn highlight_cleared(&mut self) {
        self.outlined = 0;
    }

    fn selection_cleared(&mut self) {
        if let Some(el) = &self.info_content {
            el.set_inner_html("");
        }
        show_test_panel(&self.document, ActiveTest::Welcome);
    }

    fn zone_selected(&mut self, zone: ZoneName) {
        self.show_zone_info(zone);
        show_test_panel(&self.document, ActiveTest::from(zone));
        call_page_load_test(zone);
    }

    fn tracker_moved(&mut self, screen: Vec2) {
        if let Some(el) = &self.tracker {
            dom::set_style(el, "left", &format!("{:.1}px", screen.x));
            dom::set_style(el, "top", &format!("{:.1}px", screen.y));
            dom::set_style(el, "opacity", "1");
        }
    }

    fn tracker_hidden(&mut self) {
        if let Some(el) = &self.tracker {
            dom::set_style(el, "opacity", "0");
        }
    }

    fn play_cue(&mut self, cue: AudioCue) {
        self.audio.play(cue);
    }

    fn set_status(&mut self, level: StatusLevel, text: &str) {
        if let Some(el) = &self.status {
            el.set_text_content(Some(text));
            let cl = el.class_list();
            for c in STATUS_CLASSES {
                _ = cl.remove_1(c);
            }
            _ = cl.add_1(status_class(level));
        }
    }

    fn set_progress(&mut self, percent: f32, message: Option<&str>) {
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{:.0}%", percent));
        }
        if let (Some(el), Some(msg)) = (&self.loading_text, message) {
            el.set_text_content(Some(msg));
        }
    }

    fn reveal_label(&mut self, label: ScanLabel) {
        if let Some(el) = dom::html_element(&self.document, label.element_id()) {
            dom::set_style(&el, "opacity", "1");
        }
    }

    fn loading_overlay(&mut self, phase: OverlayPhase) {
        let Some(el) = &self.overlay else {
            return;
        };
        match phase {
            OverlayPhase::Fading => {
                dom::set_style(el, "transition", &format!("opacity {}ms", OVERLAY_FADE_MS));
                dom::set_style(el, "opacity", "0");
            }
            OverlayPhase::Hidden => dom::set_style(el, "display", "none"),
        }
    }
}
