use crate::constants::ASSET_BASE_URL;
use crate::core::{StoryConfig, TextureSlot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// A decoded material map waiting for the frame loop to upload it.
pub struct LoadedTexture {
    pub object: usize,
    pub slot: TextureSlot,
    pub image: image::RgbaImage,
}

pub type TextureQueue = Rc<RefCell<Vec<LoadedTexture>>>;

/// Fetch every material map named by the config. Objects render with neutral
/// fallback texels until their maps arrive; a failed load keeps the fallback.
pub fn start_texture_loads(config: &StoryConfig, queue: &TextureQueue) {
    for (object, obj) in config.objects.iter().enumerate() {
        for (slot, path) in obj.material.maps() {
            let url = format!("{ASSET_BASE_URL}{path}");
            let queue = queue.clone();
            spawn_local(async move {
                match fetch_image(&url).await {
                    Ok(image) => {
                        log::info!(
                            "[assets] {} {}x{}",
                            url,
                            image.width(),
                            image.height()
                        );
                        queue.borrow_mut().push(LoadedTexture {
                            object,
                            slot,
                            image,
                        });
                    }
                    Err(e) => log::warn!("[assets] {} failed: {:?}", url, e),
                }
            });
        }
    }
}

async fn fetch_image(url: &str) -> anyhow::Result<image::RgbaImage> {
    let bytes = fetch_bytes(url).await?;
    let img = image::load_from_memory(&bytes)?.to_rgba8();
    Ok(img)
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let arr = js_sys::Uint8Array::new(&buf);
    let mut out = vec![0u8; arr.length() as usize];
    arr.copy_to(&mut out);
    Ok(out)
}
