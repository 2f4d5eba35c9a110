//! Browser host: binds a `WorldCore` to a canvas, its pointer events and
//! the animation-frame loop. Dropping the `Simulation` (or calling
//! `detach`) removes every listener and cancels the pending frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::domain::{EnvironmentMode, Preset, SceneKind};

use super::WorldCore;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Event listener that unregisters itself when dropped
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(target: &EventTarget, event: &'static str, f: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Pointer position relative to the canvas' top-left corner
fn canvas_point(canvas: &HtmlCanvasElement, event: &Event) -> Option<(f32, f32)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let rect = canvas.get_bounding_client_rect();
    Some((
        (mouse.client_x() as f64 - rect.left()) as f32,
        (mouse.client_y() as f64 - rect.top()) as f32,
    ))
}

/// Match the drawing buffer to the canvas' layout size
fn fit_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
    let w = canvas.client_width().max(0) as u32;
    let h = canvas.client_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f32, h as f32)
}

#[wasm_bindgen]
pub struct Simulation {
    world: Rc<RefCell<WorldCore>>,
    window: Window,
    frame_id: Rc<Cell<Option<i32>>>,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl Simulation {
    /// Size the canvas, build `scene` with `preset` and start animating
    pub fn attach(canvas: HtmlCanvasElement, preset: &str, scene: &str) -> Result<Simulation, JsValue> {
        let preset = Preset::from_name(preset).map_err(|e| JsValue::from_str(&e))?;
        let scene = SceneKind::from_name(scene).map_err(|e| JsValue::from_str(&e))?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let (w, h) = fit_canvas(&canvas);
        let mut core = WorldCore::with_preset(w, h, preset);
        core.init_scene(w, h, scene);
        let world = Rc::new(RefCell::new(core));

        let listeners = Self::bind_events(&window, &canvas, &world)?;
        let mut sim = Simulation {
            world,
            window,
            frame_id: Rc::new(Cell::new(None)),
            frame_callback: Rc::new(RefCell::new(None)),
            listeners,
        };
        sim.start_loop(ctx)?;
        console_log!("simulation attached: preset={} scene={:?}", preset.name(), scene);
        Ok(sim)
    }

    /// `true` for buoyant, `false` for gravity
    pub fn set_mode(&self, buoyant: bool) {
        let mode = if buoyant {
            EnvironmentMode::Buoyant
        } else {
            EnvironmentMode::Gravity
        };
        self.world.borrow_mut().set_mode(mode);
    }

    pub fn reset(&self) {
        self.world.borrow_mut().reset();
    }

    pub fn load_settings_json(&self, json: String) -> Result<(), JsValue> {
        self.world
            .borrow_mut()
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.world.borrow().body_count()
    }

    /// Stop animating and remove every listener
    pub fn detach(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The loop closure holds a handle to its own slot
        self.frame_callback.borrow_mut().take();
        self.listeners.clear();
    }
}

impl Simulation {
    fn bind_events(
        window: &Window,
        canvas: &HtmlCanvasElement,
        world: &Rc<RefCell<WorldCore>>,
    ) -> Result<Vec<Listener>, JsValue> {
        let mut listeners = Vec::with_capacity(5);

        let (w, c) = (world.clone(), canvas.clone());
        listeners.push(Listener::attach(canvas, "mousemove", move |e| {
            if let Some((x, y)) = canvas_point(&c, &e) {
                w.borrow_mut().pointer_move(x, y);
            }
        })?);

        let (w, c) = (world.clone(), canvas.clone());
        listeners.push(Listener::attach(canvas, "mousedown", move |e| {
            if let Some((x, y)) = canvas_point(&c, &e) {
                w.borrow_mut().pointer_down(x, y);
            }
        })?);

        for event in ["mouseup", "mouseout"] {
            let w = world.clone();
            listeners.push(Listener::attach(canvas, event, move |_| {
                w.borrow_mut().pointer_up();
            })?);
        }

        let (w, c) = (world.clone(), canvas.clone());
        listeners.push(Listener::attach(window, "resize", move |_| {
            let (width, height) = fit_canvas(&c);
            w.borrow_mut().resize(width, height);
        })?);

        Ok(listeners)
    }

    fn start_loop(&mut self, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let world = self.world.clone();
        let window = self.window.clone();
        let frame_id = self.frame_id.clone();
        let slot = self.frame_callback.clone();
        let mut ctx = ctx;

        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            {
                let mut core = world.borrow_mut();
                core.step(now);
                core.draw(&mut ctx);
            }
            if let Some(cb) = slot.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(_) => {
                        frame_id.set(None);
                        console_warn!("requestAnimationFrame failed; loop stopped");
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = match self.frame_callback.borrow().as_ref() {
            Some(cb) => self.window.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.frame_id.set(Some(id));
        Ok(())
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.detach();
    }
}
