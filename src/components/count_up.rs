//! `use_count_up`: animate an integer from 0 to `target` once the element
//! holding it scrolls into view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::count_up::count_up_frame;
use crate::motion::visibility::{VisibilityLatch, VISIBILITY_THRESHOLD};

/// Returns the current value to display and the node ref to attach to the
/// element whose visibility should start the animation.
///
/// The observer subscription and any pending animation frame are released
/// when the owning component unmounts, whether or not the element ever
/// became visible.
#[hook]
pub fn use_count_up(target: u64, duration_ms: f64) -> (u64, NodeRef) {
    let count = use_state(|| 0u64);
    let visible = use_state(|| false);
    let node = use_node_ref();

    // Viewport observation, filtered through the one-shot latch.
    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut latch = VisibilityLatch::new();
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, _observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if latch.observe(entry.intersection_ratio(), VISIBILITY_THRESHOLD) {
                                visible.set(true);
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

                if let Some(element) = node.cast::<web_sys::Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    // Frame loop, started once by the latch flipping `visible`.
    {
        let count = count.clone();
        use_effect_with_deps(
            move |&is_visible: &bool| {
                let pending = Rc::new(Cell::new(None::<i32>));
                let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));

                if is_visible && target > 0 {
                    let start = Rc::new(Cell::new(None::<f64>));
                    let reschedule = frame_closure.clone();
                    let pending_inner = pending.clone();

                    *frame_closure.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        if start.get().is_none() {
                            start.set(Some(now));
                        }
                        let frame = count_up_frame(target, duration_ms, start.get().unwrap(), now);
                        count.set(frame.value);
                        if frame.done {
                            pending_inner.set(None);
                        } else {
                            let id = web_sys::window()
                                .unwrap()
                                .request_animation_frame(
                                    reschedule
                                        .borrow()
                                        .as_ref()
                                        .unwrap()
                                        .as_ref()
                                        .unchecked_ref(),
                                )
                                .unwrap();
                            pending_inner.set(Some(id));
                        }
                    })
                        as Box<dyn FnMut(f64)>));

                    let id = web_sys::window()
                        .unwrap()
                        .request_animation_frame(
                            frame_closure
                                .borrow()
                                .as_ref()
                                .unwrap()
                                .as_ref()
                                .unchecked_ref(),
                        )
                        .unwrap();
                    pending.set(Some(id));
                }
                // target == 0 settles at 0 with no frames scheduled

                move || {
                    if let Some(id) = pending.take() {
                        if let Some(window) = web_sys::window() {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                    // break the closure's self-reference so it is freed
                    frame_closure.borrow_mut().take();
                }
            },
            *visible,
        );
    }

    (*count, node)
}
