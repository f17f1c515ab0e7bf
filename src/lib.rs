#![cfg(target_arch = "wasm32")]
use bioscan_core::{
    model, ActiveTest, InteractionController, SceneConfig, SceneResult, QUEUED_MODEL_DELAY_MS,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use events::pointer::SharedController;
use overlay::DomHooks;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Page entry point: show the test panel for `id` (a zone id such as
/// `"leftArm"`); unknown ids fall back to the welcome panel.
#[wasm_bindgen]
pub fn set_active_test(id: &str) {
    let test = ActiveTest::from_id(id);
    log::info!("[test] active test {:?} (id {:?})", test, id);
    if let Some(document) = dom::window_document() {
        overlay::show_test_panel(&document, test);
    }
}

/// Build the body and hand it to the controller; the frame loop's timeline
/// loads it once the scan progress has had time to play.
fn load_body(controller: &SharedController) -> SceneResult<()> {
    let body = model::mannequin()?;
    log::info!("[load] body built with {} nodes", body.len());
    controller
        .borrow_mut()
        .queue_model(body, Duration::from_millis(QUEUED_MODEL_DELAY_MS));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bioscan-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    let (css_w, css_h) = input::canvas_css_size(&canvas);

    let controller: SharedController = Rc::new(RefCell::new(InteractionController::new(
        SceneConfig::default(),
        DomHooks::new(document.clone()),
        css_w,
        css_h,
    )));
    controller.borrow_mut().begin_loading();

    events::wire_global_keydown(controller.clone());
    events::wire_panel_toggle(&document);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    // A failed build keeps the gate closed.
    if let Err(e) = load_body(&controller) {
        log::error!("[load] {}", e);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        canvas,
        gpu,
        last_instant: Instant::now(),
        model_uploaded: false,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
