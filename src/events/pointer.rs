use crate::constants::{DRAG_CLICK_SLOP_PX, ORBIT_RADIANS_PER_PX, WHEEL_ZOOM_PER_UNIT};
use crate::input;
use crate::overlay::DomHooks;
use bioscan_core::InteractionController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<InteractionController<DomHooks>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub controller: SharedController,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_click(&w);
    wire_dblclick(&w);
    wire_mousemove(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "click", move |ev: web::MouseEvent| {
        // The press that ended an orbit drag is not a selection click.
        if std::mem::take(&mut w.drag_state.borrow_mut().dragged) {
            return;
        }
        let Some(ndc) = input::pointer_ndc(&ev, &w.canvas) else {
            return;
        };
        if !w.controller.borrow_mut().handle_click(ndc) {
            log::debug!("[click] ignored, model not loaded");
        }
    });
}

fn wire_dblclick(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "dblclick", move |_ev: web::MouseEvent| {
        if w.controller.borrow_mut().handle_double_click() {
            log::info!("[view] reset to initial camera");
        }
    });
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "mousemove", move |ev: web::MouseEvent| {
        if w.drag_state.borrow().dragged {
            return;
        }
        let Some(ndc) = input::pointer_ndc(&ev, &w.canvas) else {
            return;
        };
        let hovering = {
            let mut c = w.controller.borrow_mut();
            c.handle_move(ndc) && c.hover().is_some()
        };
        let cursor = if hovering { "pointer" } else { "default" };
        _ = w.canvas.style().set_property("cursor", cursor);
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let mut ds = w.drag_state.borrow_mut();
        ds.down = true;
        ds.dragged = false;
        ds.start = pos;
        ds.last = pos;
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let delta = {
            let mut ds = w.drag_state.borrow_mut();
            if !ds.down {
                return;
            }
            if !ds.dragged && pos.distance(ds.start) > DRAG_CLICK_SLOP_PX {
                ds.dragged = true;
            }
            let d = pos - ds.last;
            ds.last = pos;
            if !ds.dragged {
                return;
            }
            d
        };
        let mut c = w.controller.borrow_mut();
        if c.is_ready() {
            c.camera_mut()
                .orbit(-delta.x * ORBIT_RADIANS_PER_PX, -delta.y * ORBIT_RADIANS_PER_PX);
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerup", move |ev: web::PointerEvent| {
        w.drag_state.borrow_mut().down = false;
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    });
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "wheel", move |ev: web::WheelEvent| {
        let mut c = w.controller.borrow_mut();
        if !c.is_ready() {
            return;
        }
        let factor = (ev.delta_y() as f32 * WHEEL_ZOOM_PER_UNIT).exp();
        c.camera_mut().zoom(factor);
        ev.prevent_default();
    });
}
