pub mod pointer;
pub mod resize;
pub mod scroll;

use crate::core::{StoryController, Tweener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use pointer::wire_pointermove;
pub use resize::wire_resize;
pub use scroll::wire_scroll;

/// Shared handles every window listener needs.
#[derive(Clone)]
pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub story: Rc<RefCell<StoryController>>,
    pub tweener: Rc<RefCell<Tweener>>,
}

pub fn wire_window_events(w: EventWiring) {
    wire_pointermove(&w);
    wire_scroll(&w);
    wire_resize(&w);
}
