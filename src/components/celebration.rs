//! Full-screen "code rain" overlay shown when the minigame is won.
//!
//! While active, a translucent fill each frame fades previous glyphs into
//! trails while every column drops a random glyph at its own speed. All
//! frame scheduling and the resize listener are torn down when the overlay
//! deactivates or unmounts.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const GLYPHS: &str = "{}[]()<>=+-*/&|!?:;#$%_0123456789abcdef";
const COLUMN_PX: f64 = 16.0;

#[derive(Properties, PartialEq, Clone)]
pub struct CelebrationOverlayProps {
    pub active: bool,
}

#[function_component(CelebrationOverlay)]
pub fn celebration_overlay(props: &CelebrationOverlayProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.active, move |&active| {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
            if active {
                if let Some(c) = start_rain(&canvas_ref) {
                    cleanup = c;
                }
            }
            move || cleanup()
        });
    }

    if !props.active {
        return html! {};
    }
    html! {
        <div class="fixed inset-0 z-[70] pointer-events-none">
            <canvas ref={canvas_ref} class="w-full h-full"></canvas>
        </div>
    }
}

/// Sizes the canvas, kicks off the animation loop, and returns the teardown.
fn start_rain(canvas_ref: &NodeRef) -> Option<Box<dyn FnOnce()>> {
    let window = web_sys::window()?;
    let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let apply_canvas_size = {
        let canvas = canvas.clone();
        let window = window.clone();
        move || {
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            canvas.set_width(w.max(0.0) as u32);
            canvas.set_height(h.max(0.0) as u32);
        }
    };
    apply_canvas_size();

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.set_fill_style_str("rgba(0,0,0,0.2)");
    ctx.fill_rect(0.0, 0.0, w, h);

    // One drop position per column, in glyph rows; negative values delay the
    // column's entry so the rain does not start as a solid line.
    let columns = (w / COLUMN_PX).floor() as usize;
    let drops: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(
        (0..columns)
            .map(|_| js_sys::Math::random() * -50.0)
            .collect(),
    ));

    let raf_id = Rc::new(RefCell::new(None::<i32>));
    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id = raf_id.clone();
        let closure_cell_inner = closure_cell.clone();
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let drops = drops.clone();
        let window_loop = window.clone();
        *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let w = canvas.width() as f64;
            let h = canvas.height() as f64;
            ctx.set_fill_style_str("rgba(0,0,0,0.08)");
            ctx.fill_rect(0.0, 0.0, w, h);
            ctx.set_font("16px ui-monospace, SFMono-Regular, Menlo, monospace");

            let mut drops = drops.borrow_mut();
            let columns = drops.len();
            for (i, drop) in drops.iter_mut().enumerate() {
                let x = i as f64 * COLUMN_PX + COLUMN_PX / 2.0;
                let y = *drop * COLUMN_PX;
                let glyph_idx =
                    (js_sys::Math::random() * GLYPHS.len() as f64).floor() as usize % GLYPHS.len();
                let glyph = &GLYPHS[glyph_idx..glyph_idx + 1];
                let hue = ((i as f64 / columns.max(1) as f64) * 360.0).floor();
                ctx.set_fill_style_str(&format!("hsl({hue}, 90%, 60%)"));
                let _ = ctx.fill_text(glyph, x, y);
                *drop += 1.0 + js_sys::Math::random() * 0.5;
                if y > h + 100.0 {
                    *drop = js_sys::Math::random() * -20.0;
                }
            }

            if let Some(cb) = closure_cell_inner.borrow().as_ref() {
                if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = closure_cell.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            *raf_id.borrow_mut() = Some(id);
        }
    }

    let resize_cb = {
        let apply_canvas_size = apply_canvas_size.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            apply_canvas_size();
        }) as Box<dyn FnMut(_)>)
    };
    let _ = window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

    Some(Box::new(move || {
        if let Some(id) = raf_id.borrow_mut().take() {
            let _ = window.cancel_animation_frame(id);
        }
        let _ =
            window.remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        // Dropping closure_cell here releases the frame callback last.
        drop(closure_cell);
    }))
}
