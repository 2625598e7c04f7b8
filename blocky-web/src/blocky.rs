/// `BlockyAnimal` handle exported to JavaScript
use crate::dom;
use crate::gl::{Program, WebGlRenderer};
use blocky_core::{BlockyScene, Joint, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

struct State {
    scene: BlockyScene,
    renderer: WebGlRenderer,
    stats_id: String,
}

impl State {
    /// Render without advancing the clock (slider feedback).
    fn redraw(&mut self) {
        self.scene.render(&mut self.renderer);
    }

    fn frame(&mut self, now_seconds: f64) {
        let started = dom::now_seconds();
        let stats = self.scene.frame(now_seconds, &mut self.renderer);
        let stats = stats.with_duration((dom::now_seconds() - started) * 1000.0);
        dom::set_text(&self.stats_id, &stats.to_string());
    }
}

fn joint(name: &str) -> Result<Joint, JsValue> {
    Joint::from_name(name).ok_or_else(|| JsValue::from_str(&format!("unknown joint '{name}'")))
}

/// The animated robot bound to one canvas.
#[wasm_bindgen]
pub struct BlockyAnimal {
    canvas: HtmlCanvasElement,
    state: Rc<RefCell<State>>,
    started: bool,
}

#[wasm_bindgen]
impl BlockyAnimal {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<BlockyAnimal, JsValue> {
        let canvas = dom::canvas(canvas_id)?;
        let renderer = WebGlRenderer::new(&canvas, Program::Rig).map_err(|err| {
            log::error!("BlockyAnimal setup failed: {:?}", err);
            err
        })?;
        let state = State {
            scene: BlockyScene::new(SceneConfig::default(), dom::now_seconds()),
            renderer,
            stats_id: "numdot".to_string(),
        };
        Ok(BlockyAnimal {
            canvas,
            state: Rc::new(RefCell::new(state)),
            started: false,
        })
    }

    /// Slider input in degrees, by joint name (e.g. "left_arm").
    pub fn set_joint(&self, name: &str, degrees: f32) -> Result<(), JsValue> {
        let joint = joint(name)?;
        let mut state = self.state.borrow_mut();
        state.scene.set_joint(joint, degrees);
        state.redraw();
        Ok(())
    }

    pub fn set_animation(&self, name: &str, on: bool) -> Result<(), JsValue> {
        let joint = joint(name)?;
        self.state.borrow_mut().scene.set_animated(joint, on);
        Ok(())
    }

    /// Swing of an animated joint, in degrees.
    pub fn set_amplitude(&self, name: &str, degrees: f32) -> Result<(), JsValue> {
        let joint = joint(name)?;
        self.state.borrow_mut().scene.set_amplitude(joint, degrees);
        Ok(())
    }

    pub fn set_all_animation(&self, on: bool) {
        self.state.borrow_mut().scene.set_all_animated(on);
    }

    pub fn set_zoom(&self, zoom: f32) {
        let mut state = self.state.borrow_mut();
        state.scene.set_zoom(zoom);
        state.redraw();
    }

    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.scene.clear();
        state.redraw();
    }

    /// Element id the "ms/fps" line is written to.
    pub fn set_stats_element(&self, id: &str) {
        self.state.borrow_mut().stats_id = id.to_string();
    }

    /// Hook up mouse orbiting and start the frame loop. Later calls do nothing.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.started {
            return Ok(());
        }
        self.started = true;

        let state = self.state.clone();
        dom::on_pointer(&self.canvas, move |event| {
            state.borrow_mut().scene.pointer(event);
        })?;

        let state = self.state.clone();
        dom::animation_loop(move |now| state.borrow_mut().frame(now))?;
        log::info!("BlockyAnimal started");
        Ok(())
    }
}
