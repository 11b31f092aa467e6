use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement, MouseEvent, ResizeObserver, TouchEvent};
use yew::prelude::*;

use crate::state::{compute_constraints, corrected_pan, Dimensions, DragState, Pan, SNAP_EPSILON};
use crate::util::clog;

use super::zoom_slider::ZoomSlider;

/// Controlled pan/zoom photo viewport.
///
/// The component never owns the transform: `zoom` and `pan` arrive as props
/// and every change request leaves through `on_update`. The only state kept
/// here is the in-flight drag session and the two observed sizes; everything
/// emitted is clamped so the photo always covers the frame.
#[derive(Properties, PartialEq, Clone)]
pub struct DraggablePhotoProps {
    pub src: AttrValue,
    pub zoom: f64,
    pub pan: Pan,
    pub on_update: Callback<(f64, Pan)>,
    #[prop_or(true)]
    pub interactive: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[function_component(DraggablePhoto)]
pub fn draggable_photo(props: &DraggablePhotoProps) -> Html {
    let container_ref = use_node_ref();
    let container_size = use_state_eq(|| None::<Dimensions>);
    let image_size = use_state_eq(|| None::<Dimensions>);
    let dragging = use_state_eq(|| false);
    let hovering = use_state_eq(|| false);
    // The session lives in a ref so move events never force a render.
    let drag = use_mut_ref(DragState::default);

    // Derived fresh every render; None until both sizes are observed.
    let constraints = compute_constraints(*container_size, *image_size, props.zoom);
    let viewport = *container_size;

    // Size observer: first reading synchronously, then one per layout change.
    // A 0x0 reading means the element is not laid out yet and stays unknown.
    {
        let container_ref = container_ref.clone();
        let container_size = container_size.clone();
        use_effect_with((), move |_| {
            let observed = container_ref.cast::<HtmlElement>().and_then(|el| {
                let read_size: Rc<dyn Fn()> = {
                    let el = el.clone();
                    let container_size = container_size.clone();
                    Rc::new(move || {
                        let w = el.client_width() as f64;
                        let h = el.client_height() as f64;
                        container_size.set((w > 0.0 && h > 0.0).then(|| Dimensions::new(w, h)));
                    })
                };
                read_size();
                let cb = {
                    let read_size = read_size.clone();
                    Closure::wrap(Box::new(move |_entries: js_sys::Array| read_size())
                        as Box<dyn FnMut(js_sys::Array)>)
                };
                let observer = ResizeObserver::new(cb.as_ref().unchecked_ref()).ok()?;
                observer.observe(&el);
                Some((observer, cb))
            });
            move || {
                if let Some((observer, cb)) = observed {
                    observer.disconnect();
                    drop(cb);
                }
            }
        });
    }

    // Image metadata loader: natural size is unknown until decode completes.
    let on_image_load = {
        let image_size = image_size.clone();
        Callback::from(move |e: Event| {
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                let w = img.natural_width() as f64;
                let h = img.natural_height() as f64;
                if w > 0.0 && h > 0.0 {
                    clog(&format!("photo decoded at {w}x{h}"));
                    image_size.set(Some(Dimensions::new(w, h)));
                }
            }
        })
    };

    let begin_drag = {
        let drag = drag.clone();
        let dragging = dragging.clone();
        let pan = props.pan;
        let interactive = props.interactive;
        let constraints_known = constraints.is_some();
        move |x: f64, y: f64| {
            if !interactive || !constraints_known {
                return;
            }
            drag.borrow_mut().press(x, y, pan);
            dragging.set(true);
        }
    };

    let move_drag = {
        let drag = drag.clone();
        let on_update = props.on_update.clone();
        let zoom = props.zoom;
        let interactive = props.interactive;
        move |x: f64, y: f64| {
            if !interactive {
                return;
            }
            let (Some(viewport), Some(constraints)) = (viewport, constraints) else {
                return;
            };
            if let Some(pan) = drag.borrow().drag_to(x, y, viewport, &constraints) {
                on_update.emit((zoom, pan));
            }
        }
    };

    let end_drag = {
        let drag = drag.clone();
        let dragging = dragging.clone();
        move || {
            drag.borrow_mut().release();
            dragging.set(false);
        }
    };

    let on_mouse_down = {
        let begin_drag = begin_drag.clone();
        Callback::from(move |e: MouseEvent| begin_drag(e.client_x() as f64, e.client_y() as f64))
    };
    let on_mouse_move = {
        let move_drag = move_drag.clone();
        Callback::from(move |e: MouseEvent| move_drag(e.client_x() as f64, e.client_y() as f64))
    };
    let on_mouse_up = {
        let end_drag = end_drag.clone();
        Callback::from(move |_: MouseEvent| end_drag())
    };
    // Leaving the frame is a release, so a drag can never get stuck.
    let on_mouse_leave = {
        let end_drag = end_drag.clone();
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            end_drag();
            hovering.set(false);
        })
    };
    let on_mouse_enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };

    // Only the first touch point drives the gesture; extra fingers and
    // zero-touch events are ignored outright.
    let on_touch_start = {
        let begin_drag = begin_drag.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t) = e.touches().item(0) {
                begin_drag(t.client_x() as f64, t.client_y() as f64);
            }
        })
    };
    let on_touch_move = {
        let move_drag = move_drag.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t) = e.touches().item(0) {
                move_drag(t.client_x() as f64, t.client_y() as f64);
            }
        })
    };
    let on_touch_end = {
        let end_drag = end_drag.clone();
        Callback::from(move |_: TouchEvent| end_drag())
    };

    // Snap-back: whenever constraints, zoom, or pan change while idle, an
    // out-of-bounds pan gets one corrective emission. Re-running on the
    // corrected value emits nothing, so no update loop can form.
    {
        let on_update = props.on_update.clone();
        let zoom = props.zoom;
        let pan = props.pan;
        let interactive = props.interactive;
        let is_dragging = *dragging;
        use_effect_with(
            (zoom, pan, constraints, is_dragging, interactive),
            move |_| {
                if interactive && !is_dragging {
                    if let Some(constraints) = constraints {
                        if let Some(fixed) = corrected_pan(pan, &constraints, SNAP_EPSILON) {
                            on_update.emit((zoom, fixed));
                        }
                    }
                }
                || ()
            },
        );
    }

    let on_zoom = {
        let on_update = props.on_update.clone();
        let pan = props.pan;
        // Pan is forwarded untouched; clamping here would fight the slider
        // mid-drag. The snap-back effect settles it once the value lands.
        Callback::from(move |zoom: f64| on_update.emit((zoom, pan)))
    };

    let cursor = if !props.interactive {
        ""
    } else if *dragging {
        "cursor:grabbing;"
    } else {
        "cursor:grab;"
    };
    let container_style = format!(
        "position:relative; overflow:hidden; user-select:none; touch-action:none; {}{}",
        cursor,
        props.style.as_deref().unwrap_or("")
    );

    // Until both sizes are known the image renders cropped via CSS and no
    // transform math applies.
    let image_style = match (constraints, viewport) {
        (Some(c), Some(v)) => format!(
            "max-width:none; width:{}px; height:{}px; will-change:transform; \
             transform:translate({}px, {}px) scale({}); transition:{};",
            c.base_width,
            c.base_height,
            props.pan.x * v.width,
            props.pan.y * v.height,
            props.zoom,
            if *dragging { "none" } else { "transform 0.1s ease-out" },
        ),
        _ => format!(
            "width:100%; height:100%; object-fit:cover; transform:scale({});",
            props.zoom
        ),
    };

    html! {
        <div
            ref={container_ref}
            class={props.class.clone()}
            style={container_style}
            onmousedown={on_mouse_down}
            onmousemove={on_mouse_move}
            onmouseup={on_mouse_up}
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end.clone()}
            ontouchcancel={on_touch_end}
        >
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; pointer-events:none;">
                <img
                    src={props.src.clone()}
                    alt="Photo"
                    draggable="false"
                    onload={on_image_load}
                    style={image_style}
                />
            </div>
            if props.interactive {
                <ZoomSlider
                    zoom={props.zoom}
                    visible={*hovering || *dragging}
                    on_change={on_zoom}
                />
            }
        </div>
    }
}
