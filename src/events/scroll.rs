use super::EventWiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll(w: &EventWiring) {
    let story = w.story.clone();
    let tweener = w.tweener.clone();

    let closure = Closure::wrap(Box::new(move || {
        let Some(wnd) = web::window() else {
            return;
        };
        let y = dom::scroll_y(&wnd);
        let mut animator = tweener.borrow_mut();
        if let Some(crossed) = story.borrow_mut().on_scroll(y, &mut *animator) {
            log::info!(
                "[scroll] entered section {} ({} tweens active)",
                crossed.to,
                animator.active_count()
            );
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
