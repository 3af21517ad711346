use crate::assets::TextureQueue;
use crate::core::{StoryConfig, StoryController, Tweener};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Frames slower than this are logged (tab switches, GPU stalls)
const LONG_FRAME_SEC: f32 = 0.25;

pub struct FrameContext<'a> {
    pub story: Rc<RefCell<StoryController>>,
    pub tweener: Rc<RefCell<Tweener>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub textures: TextureQueue,
}

impl<'a> FrameContext<'a> {
    /// One animation frame: advance story state and tweens, then draw.
    pub fn frame(&mut self) {
        let mut story = self.story.borrow_mut();
        let time = story.tick(Instant::now());
        if time.dt > LONG_FRAME_SEC {
            log::debug!("[frame] {:.3}s frame at t={:.1}s", time.dt, time.elapsed);
        }
        let mut tweener = self.tweener.borrow_mut();
        if !tweener.is_idle() {
            tweener.advance(time.dt, story.objects_mut());
        }
        drop(tweener);

        let Some(g) = &mut self.gpu else {
            return;
        };
        for loaded in self.textures.borrow_mut().drain(..) {
            g.upload_texture(loaded.object, loaded.slot, &loaded.image);
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        g.set_camera(&story.camera());
        match g.render(story.objects()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &StoryConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, config).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("GPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    // GPU setup time must not show up as the first frame's dt
    frame_ctx
        .borrow()
        .story
        .borrow_mut()
        .restart_clock(Instant::now());
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
