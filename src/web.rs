//! Browser host: canvas surface, keyboard input and the animation-frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, window,
};

use crate::config::GameConfig;
use crate::engine::{GameEngine, Viewport};
use crate::rng::OsRandom;
use crate::surface::Surface;

/// `KeyboardEvent.code` that triggers a jump.
const JUMP_KEY: &str = "Space";

/// Canvas 2D context plus the two HUD elements.
pub struct BrowserSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    score_el: HtmlElement,
    progress_el: HtmlElement,
}

impl Surface for BrowserSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn set_background(&mut self, color: &str) {
        self.canvas
            .style()
            .set_property("background-color", color)
            .ok();
    }

    fn show_score(&mut self, text: &str) {
        self.score_el.set_inner_text(text);
    }

    fn show_progress(&mut self, width: &str) {
        self.progress_el.style().set_property("width", width).ok();
    }

    fn game_over(&mut self, message: &str) {
        if let Some(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }
}

struct Game {
    engine: GameEngine<OsRandom>,
    surface: BrowserSurface,
}

thread_local! {
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
}

pub(crate) fn launch(config: GameConfig) -> Result<(), JsValue> {
    if GAME.with(|cell| cell.borrow().is_some()) {
        return Err(JsValue::from_str("game already started"));
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Reuse the page's canvas if present, otherwise create one.
    let canvas: HtmlCanvasElement = match doc.get_element_by_id(&config.canvas_id) {
        Some(el) => el.dyn_into()?,
        None => {
            let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
            c.set_id(&config.canvas_id);
            c.set_attribute("style", "display:block;").ok();
            body(&doc)?.append_child(&c)?;
            c
        }
    };
    let width = win.inner_width()?.as_f64().unwrap_or(800.0);
    let height = win.inner_height()?.as_f64().unwrap_or(400.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let score_el = hud_element(
        &doc,
        &config.score_id,
        "position:fixed; top:10px; left:12px; font-family:monospace; font-size:16px; color:#fff; z-index:10;",
    )?;
    let progress_el = hud_element(
        &doc,
        &config.progress_id,
        "position:fixed; top:0; left:0; height:6px; width:0%; background:#ffd166; z-index:10;",
    )?;

    let mut surface = BrowserSurface {
        canvas,
        ctx,
        score_el,
        progress_el,
    };
    let viewport = Viewport {
        width: surface.canvas.width() as f64,
        height: surface.canvas.height() as f64,
    };
    let engine = GameEngine::new(config, viewport, OsRandom::new(), &mut surface)?;
    surface.show_score(&engine.score_text());
    console_log!(
        "level dash started on a {}x{} canvas",
        viewport.width,
        viewport.height
    );

    GAME.with(|cell| cell.replace(Some(Game { engine, surface })));

    // Space to jump; every other key is ignored.
    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            if !is_jump_key(&evt.code()) {
                return;
            }
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.engine.jump();
                }
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    start_frame_loop();
    Ok(())
}

/// Only the jump key reaches the engine; every other key is ignored.
pub(crate) fn is_jump_key(code: &str) -> bool {
    code == JUMP_KEY
}

fn body(doc: &Document) -> Result<HtmlElement, JsValue> {
    doc.body().ok_or_else(|| JsValue::from_str("no body"))
}

/// Look up a HUD element by id, creating a styled `div` when the page lacks it.
fn hud_element(doc: &Document, id: &str, style: &str) -> Result<HtmlElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return el.dyn_into::<HtmlElement>().map_err(JsValue::from);
    }
    let div: HtmlElement = doc.create_element("div")?.dyn_into()?;
    div.set_id(id);
    div.set_attribute("style", style).ok();
    body(doc)?.append_child(&div)?;
    Ok(div)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let running = GAME.with(|cell| match cell.borrow_mut().as_mut() {
            Some(game) => {
                game.engine.tick(&mut game.surface);
                game.engine.is_running()
            }
            None => false,
        });
        // A finished run never schedules another frame.
        if running {
            request_frame(&f);
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), callback.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
