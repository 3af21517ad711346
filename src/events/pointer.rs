use super::EventWiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cursor position feeds the camera-rig parallax target.
pub fn wire_pointermove(w: &EventWiring) {
    let story = w.story.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        story.borrow_mut().on_pointer_move(x, y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
