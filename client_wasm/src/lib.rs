//! Browser client for Pong
//!
//! Draws onto a `<canvas>` through its 2D context, steers the player paddle
//! with the mouse and runs the game from `requestAnimationFrame`.
//! Note: only builds for the wasm32 target

#![cfg(target_arch = "wasm32")]

pub mod canvas;
mod game_loop;
pub mod input;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use game_core::{Config, GameState};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Route `tracing` output to the browser console
fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(EnvFilter::new("info"));

    // A second start() on the same page keeps the first subscriber
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

/// Start a game on the canvas with the given element id
///
/// The arena takes the canvas's size. Fails if the element is missing, is
/// not a canvas, or is too small to hold the paddles and ball.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_tracing();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{canvas_id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{canvas_id}' is not a canvas")))?;

    let config = Config::with_arena(canvas.width() as f32, canvas.height() as f32);
    let seed = js_sys::Date::now() as u64;
    let state = GameState::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let state = Rc::new(RefCell::new(state));

    let mut surface = CanvasSurface::from_canvas(&canvas)?;
    input::listen_pointer(&canvas, state.clone())?;

    tracing::info!(
        canvas_id,
        width = canvas.width(),
        height = canvas.height(),
        "pong started"
    );

    // First frame before the loop takes over
    state.borrow().render(&mut surface);
    game_loop::run(window, state, surface)
}
