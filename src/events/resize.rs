use super::EventWiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps the canvas backing store, camera aspect and layout mode in step
/// with the window. The GPU surface follows the canvas size on the next frame.
pub fn wire_resize(w: &EventWiring) {
    let canvas = w.canvas.clone();
    let story = w.story.clone();

    let closure = Closure::wrap(Box::new(move || {
        let Some(wnd) = web::window() else {
            return;
        };
        let (width, height) = dom::viewport_size(&wnd);
        story.borrow_mut().on_resize(width, height);
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
