//! Mouse input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::GameState;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Vertical pointer position relative to the top of the canvas
pub fn pointer_y(canvas: &HtmlCanvasElement, event: &MouseEvent) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (event.client_y() as f64 - rect.top()) as f32
}

/// Drive the player paddle from `mousemove` on the canvas
pub fn listen_pointer(
    canvas: &HtmlCanvasElement,
    state: Rc<RefCell<GameState>>,
) -> Result<(), JsValue> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let y = pointer_y(&target, &event);
        state.borrow_mut().on_pointer_move(y);
    });

    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_move.forget();
    Ok(())
}
