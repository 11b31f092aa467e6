use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

/// True while the device is in portrait orientation. Backed by a media query
/// listener so rotation updates arrive without polling.
#[hook]
pub fn use_orientation() -> bool {
    let portrait = use_state_eq(|| {
        query_portrait().map(|mql| mql.matches()).unwrap_or(false)
    });
    {
        let portrait = portrait.clone();
        use_effect_with((), move |_| {
            let listener = query_portrait().map(|mql| {
                let portrait = portrait.clone();
                let cb = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                    portrait.set(e.matches());
                }) as Box<dyn FnMut(_)>);
                let _ = mql.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
                (mql, cb)
            });
            move || {
                if let Some((mql, cb)) = listener {
                    let _ = mql
                        .remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
                }
            }
        });
    }
    *portrait
}

fn query_portrait() -> Option<MediaQueryList> {
    web_sys::window()?.match_media("(orientation: portrait)").ok()?
}
