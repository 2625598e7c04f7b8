/// Small DOM helpers shared by both demos
use blocky_core::{CanvasRect, PointerEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let element = window()?
        .document()
        .ok_or("no document")?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("failed to retrieve the <canvas> element '{id}'")))?;
    Ok(element.dyn_into()?)
}

/// Replace the text of an element; a missing element is only logged.
pub fn set_text(id: &str, text: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => element.set_text_content(Some(text)),
        None => log::warn!("failed to get {} from HTML", id),
    }
}

/// Client-space offset of the canvas with its drawing-buffer size.
pub fn canvas_rect(canvas: &HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect::new(
        rect.left() as f32,
        rect.top() as f32,
        canvas.width() as f32,
        canvas.height() as f32,
    )
}

/// Seconds from `performance.now()`.
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now() / 1000.0)
}

/// Mouse event in the canvas's clip space.
pub fn pointer_event(canvas: &HtmlCanvasElement, kind: &str, ev: &MouseEvent) -> PointerEvent {
    let rect = canvas_rect(canvas);
    to_pointer(&rect, kind, ev.client_x() as f32, ev.client_y() as f32, ev.buttons())
}

/// DOM event name plus client position and `buttons` mask to a pointer event.
pub fn to_pointer(
    rect: &CanvasRect,
    kind: &str,
    client_x: f32,
    client_y: f32,
    buttons: u16,
) -> PointerEvent {
    let [x, y] = rect.to_ndc(client_x, client_y);
    match kind {
        "mousedown" => PointerEvent::Down { x, y },
        "mousemove" => PointerEvent::Move {
            x,
            y,
            primary_held: buttons & 1 == 1,
        },
        _ => PointerEvent::Up,
    }
}

/// Register `handler` for mousedown, mousemove and mouseup on the canvas.
pub fn on_pointer(
    canvas: &HtmlCanvasElement,
    handler: impl FnMut(PointerEvent) + 'static,
) -> Result<(), JsValue> {
    let handler = Rc::new(RefCell::new(handler));
    for kind in ["mousedown", "mousemove", "mouseup"] {
        let handler = handler.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
            let event = pointer_event(&target, kind, &ev);
            let mut handler = handler.borrow_mut();
            (*handler)(event);
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Call `frame` with the current time on every animation frame, forever.
pub fn animation_loop(mut frame: impl FnMut(f64) + 'static) -> Result<(), JsValue> {
    // The closure re-schedules itself, so it has to be reachable from inside.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame(now_seconds());
        if let Err(err) = request_frame(&f) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&g)
}

fn request_frame(f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Result<(), JsValue> {
    let slot = f.borrow();
    let closure = slot.as_ref().ok_or("animation closure missing")?;
    window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocky_core::{Painting, SceneConfig};

    fn rect() -> CanvasRect {
        CanvasRect::new(10.0, 20.0, 400.0, 400.0)
    }

    #[test]
    fn test_mousedown_at_canvas_center() {
        let event = to_pointer(&rect(), "mousedown", 210.0, 220.0, 1);
        assert_eq!(event, PointerEvent::Down { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_mousemove_reads_primary_button() {
        let held = to_pointer(&rect(), "mousemove", 410.0, 20.0, 1);
        assert_eq!(
            held,
            PointerEvent::Move {
                x: 1.0,
                y: 1.0,
                primary_held: true
            }
        );
        // secondary button only
        let hover = to_pointer(&rect(), "mousemove", 410.0, 20.0, 2);
        assert!(matches!(
            hover,
            PointerEvent::Move {
                primary_held: false,
                ..
            }
        ));
        assert_eq!(to_pointer(&rect(), "mouseup", 0.0, 0.0, 0), PointerEvent::Up);
    }

    #[test]
    fn test_dom_events_drive_painting() {
        let mut painting = Painting::new(&SceneConfig::default());
        let events = [
            ("mousemove", 0),
            ("mousedown", 1),
            ("mousemove", 1),
            ("mouseup", 0),
            ("mousemove", 0),
        ];
        for (kind, buttons) in events {
            painting.pointer(to_pointer(&rect(), kind, 110.0, 120.0, buttons));
        }
        assert_eq!(painting.len(), 2);
    }
}
