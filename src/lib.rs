#![cfg(target_arch = "wasm32")]
use crate::core::{Portfolio, StarField};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod content;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

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

    let viewport = dom::window_viewport().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let mut rng = SmallRng::from_entropy();
    let field = StarField::with_defaults(&mut rng);
    let star_count = field.len();
    let content = content::load_registry(&document);
    let portfolio = Portfolio::new(field, viewport, content);

    let app = Rc::new(app::App::new(portfolio, rng, document, canvas.clone()));
    {
        let app_frame = app.clone();
        app.frame_loop.install(move || app_frame.frame());
    }
    events::wire_all(&app);

    let visited = dom::session_visited();
    let boot = app.portfolio.borrow_mut().boot(visited);
    app::apply_effects(&app, boot);
    log::info!("[intro] boot visited={}", visited);

    // Stars are drawn only once the device is ready; until then frames
    // still advance the simulation.
    let gpu = frame::init_gpu(&canvas, star_count).await;
    app.set_gpu(gpu);
    Ok(())
}
