use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod motion {
    pub mod count_up;
    pub mod visibility;
}
mod charts {
    pub mod geometry;
}
mod components {
    pub mod count_up;
    pub mod decor;
    pub mod icons;
    pub mod mini_chart;
    pub mod ring_chart;
    pub mod stat_card;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

/// Last reported pointer coordinates, owned by the composition root and
/// read only by the background glow.
#[derive(Clone, Copy, PartialEq, Default)]
struct PointerPosition {
    x: f64,
    y: f64,
}

#[function_component]
fn App() -> Html {
    let pointer = use_state(PointerPosition::default);

    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let mousemove_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                    pointer.set(PointerPosition {
                        x: event.client_x() as f64,
                        y: event.client_y() as f64,
                    });
                }) as Box<dyn FnMut(MouseEvent)>);

                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        mousemove_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            mousemove_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let glow_style = format!(
        "background: radial-gradient(600px circle at {:.0}px {:.0}px, rgba(139, 92, 246, 0.15), transparent 40%);",
        pointer.x, pointer.y,
    );

    html! {
        <div class="site-root data-grid">
            <div class="cursor-glow" style={glow_style}></div>
            <Landing />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
