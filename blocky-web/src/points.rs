/// `ColoredPoints` handle exported to JavaScript
use crate::dom;
use crate::gl::{Program, WebGlRenderer};
use blocky_core::{BrushKind, Channel, FrameStats, Painting, Rgba, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

struct State {
    painting: Painting,
    renderer: WebGlRenderer,
    stats_id: String,
}

impl State {
    fn frame(&mut self) {
        let started = dom::now_seconds();
        let shapes = self.painting.render(&mut self.renderer);
        let stats = FrameStats {
            shapes,
            primitives: self.painting.primitive_count(),
            duration_ms: (dom::now_seconds() - started) * 1000.0,
        };
        dom::set_text(&self.stats_id, &format!("numdot: {} {}", shapes, stats));
    }
}

/// The 2D painter bound to one canvas.
#[wasm_bindgen]
pub struct ColoredPoints {
    canvas: HtmlCanvasElement,
    state: Rc<RefCell<State>>,
    started: bool,
}

#[wasm_bindgen]
impl ColoredPoints {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ColoredPoints, JsValue> {
        let canvas = dom::canvas(canvas_id)?;
        let renderer = WebGlRenderer::new(&canvas, Program::Paint).map_err(|err| {
            log::error!("ColoredPoints setup failed: {:?}", err);
            err
        })?;
        let state = State {
            painting: Painting::new(&SceneConfig::default()),
            renderer,
            stats_id: "numdot".to_string(),
        };
        Ok(ColoredPoints {
            canvas,
            state: Rc::new(RefCell::new(state)),
            started: false,
        })
    }

    /// "point", "triangle" or "circle".
    pub fn select(&self, kind: &str) -> Result<(), JsValue> {
        let kind = match kind {
            "point" => BrushKind::Point,
            "triangle" => BrushKind::Triangle,
            "circle" => BrushKind::Circle,
            other => return Err(JsValue::from_str(&format!("unknown brush '{other}'"))),
        };
        self.state.borrow_mut().painting.brush.kind = kind;
        Ok(())
    }

    /// Color buttons.
    pub fn set_color(&self, r: f32, g: f32, b: f32) {
        self.state.borrow_mut().painting.brush.color = Rgba::new(r, g, b, 1.0);
    }

    /// Channel sliders: "red", "green" or "blue" with a 0..=100 value.
    pub fn set_channel(&self, channel: &str, percent: f32) -> Result<(), JsValue> {
        let channel = match channel {
            "red" => Channel::Red,
            "green" => Channel::Green,
            "blue" => Channel::Blue,
            other => return Err(JsValue::from_str(&format!("unknown channel '{other}'"))),
        };
        self.state
            .borrow_mut()
            .painting
            .brush
            .set_channel(channel, percent);
        Ok(())
    }

    pub fn set_size(&self, size: f32) {
        self.state.borrow_mut().painting.brush.size = size;
    }

    pub fn set_segments(&self, segments: u32) {
        self.state.borrow_mut().painting.brush.circle_segments = segments;
    }

    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.painting.clear();
        state.frame();
    }

    pub fn portrait(&self) {
        let mut state = self.state.borrow_mut();
        state.painting.show_portrait();
        state.frame();
    }

    pub fn set_stats_element(&self, id: &str) {
        self.state.borrow_mut().stats_id = id.to_string();
    }

    /// Hook up click/drag painting and start the frame loop. Later calls do nothing.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.started {
            return Ok(());
        }
        self.started = true;

        let state = self.state.clone();
        dom::on_pointer(&self.canvas, move |event| {
            state.borrow_mut().painting.pointer(event);
        })?;

        let state = self.state.clone();
        dom::animation_loop(move |_| state.borrow_mut().frame())?;
        log::info!("ColoredPoints started");
        Ok(())
    }
}
