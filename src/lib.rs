#![cfg(target_arch = "wasm32")]
use crate::core::{StoryConfig, StoryController, Tweener, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-story starting");

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
    let canvas = dom::find_canvas(&document, constants::CANVAS_SELECTOR)?;
    dom::sync_canvas_backing_size(&canvas);

    let (width, height) = dom::viewport_size(&window);
    let story = StoryController::new(
        StoryConfig::default(),
        Viewport::new(width, height),
        dom::scroll_y(&window),
        Instant::now(),
    )?;
    log::info!(
        "[init] {} sections, layout {:?}",
        story.config().section_count(),
        story.layout()
    );
    let story = Rc::new(RefCell::new(story));
    let tweener = Rc::new(RefCell::new(Tweener::new()));

    events::wire_window_events(events::EventWiring {
        canvas: canvas.clone(),
        story: story.clone(),
        tweener: tweener.clone(),
    });

    // Scroll and resize may fire while the adapter request is pending
    let config = story.borrow().config().clone();
    let gpu = frame::init_gpu(&canvas, &config).await;

    let textures: assets::TextureQueue = Rc::new(RefCell::new(Vec::new()));
    if gpu.is_some() {
        assets::start_texture_loads(&config, &textures);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        story,
        tweener,
        canvas,
        gpu,
        textures,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
