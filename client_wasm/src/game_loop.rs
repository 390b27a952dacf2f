//! Frame driver: update then render on every animation frame

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{step, Events, GameState};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::canvas::CanvasSurface;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
    match callback.borrow().as_ref() {
        Some(closure) => window.request_animation_frame(closure.as_ref().unchecked_ref()),
        None => Err(JsValue::from_str("Frame callback not installed")),
    }
}

/// Start the loop; it reschedules itself until the page goes away
pub fn run(
    window: Window,
    state: Rc<RefCell<GameState>>,
    mut surface: CanvasSurface,
) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();
    let mut events = Events::new();
    let mut resets: u64 = 0;

    *callback.borrow_mut() = Some(Closure::new(move || {
        {
            let mut state = state.borrow_mut();
            step(&mut state, &mut events);
            state.render(&mut surface);
        }

        if events.ball_reset.is_some() {
            resets += 1;
            tracing::debug!(resets, "ball re-served");
        }

        if let Err(err) = request_frame(&frame_window, &next) {
            tracing::error!(?err, "failed to schedule next frame, loop stopped");
        }
    }));

    request_frame(&window, &callback)?;
    Ok(())
}
