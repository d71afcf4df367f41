use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::particles::{FrameLoop, ParticleField};

type SharedField = Rc<RefCell<Option<ParticleField>>>;

fn read_viewport() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Particles need a non-empty area to be placed in.
fn usable_viewport(size: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match size {
        Some((width, height)) if width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0 => {
            Some((width, height))
        }
        Some((width, height)) => {
            warn!("Viewport is {}x{}, particle background paused", width, height);
            None
        }
        None => {
            warn!("Viewport size unreadable, particle background paused");
            None
        }
    }
}

fn viewport_size() -> Option<(f64, f64)> {
    usable_viewport(read_viewport())
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

// No canvas or no 2d context means no particles; the rest of the page is unaffected.
fn start_particles(canvas_ref: &NodeRef, field: SharedField) -> Option<FrameLoop> {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        warn!("Particle canvas not mounted, background disabled");
        return None;
    };
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        warn!("2d canvas context unavailable, background disabled");
        return None;
    };
    let (width, height) = viewport_size()?;
    fit_canvas(&canvas, width, height);

    let mut rng = SmallRng::from_entropy();
    *field.borrow_mut() = Some(ParticleField::initialize(
        &mut rng,
        width,
        height,
        config::PARTICLE_COUNT,
    ));
    info!("Starting particle background ({}x{})", width, height);

    Some(FrameLoop::start(move || {
        if let Some(field) = field.borrow_mut().as_mut() {
            field.step();
            field.render(&context);
        }
    }))
}

#[function_component]
pub fn ParticleCanvas() -> Html {
    let canvas_ref = use_node_ref();
    let field: SharedField = use_mut_ref(|| None);

    {
        let canvas_ref = canvas_ref.clone();
        let field = field.clone();
        use_effect_with_deps(
            move |_| {
                let frame_loop = start_particles(&canvas_ref, field);
                move || {
                    if let Some(frame_loop) = frame_loop {
                        frame_loop.cancel();
                        info!("Particle background stopped");
                    }
                }
            },
            (),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        let field = field.clone();
        use_event_with_window("resize", move |_: Event| {
            let Some((width, height)) = viewport_size() else {
                return;
            };
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                fit_canvas(&canvas, width, height);
            }
            if let Some(field) = field.borrow_mut().as_mut() {
                field.resize(width, height);
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="particles" class="particles" />
    }
}
