use glam::Vec2;
use web_sys as web;

/// Pointer press bookkeeping used to tell clicks from orbit drags.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub down: bool,
    pub dragged: bool,
    pub start: Vec2,
    pub last: Vec2,
}

/// Pointer position in CSS pixels relative to the canvas.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Normalised device coordinates (-1..1, y up) for a pointer event.
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let css = pointer_canvas_css(ev, canvas);
    Some(Vec2::new((css.x / w) * 2.0 - 1.0, -(css.y / h) * 2.0 + 1.0))
}

/// Canvas size in CSS pixels; the tracker overlay is positioned in these.
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width().max(1.0) as u32, rect.height().max(1.0) as u32)
}
