use web_sys::{HtmlInputElement, MouseEvent, TouchEvent};
use yew::prelude::*;

/// Bounded zoom control overlaid on the photo. Emits the raw slider value;
/// pan correction is the viewport's problem, not the slider's.
#[derive(Properties, PartialEq, Clone)]
pub struct ZoomSliderProps {
    pub zoom: f64,
    pub visible: bool,
    pub on_change: Callback<f64>,
    #[prop_or(1.0)]
    pub min: f64,
    #[prop_or(3.0)]
    pub max: f64,
    #[prop_or(0.1)]
    pub step: f64,
}

#[function_component(ZoomSlider)]
pub fn zoom_slider(props: &ZoomSliderProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(zoom) = input.value().parse::<f64>() {
                    on_change.emit(zoom);
                }
            }
        })
    };
    // Keep slider interaction from starting a photo drag underneath.
    let swallow_mouse = Callback::from(|e: MouseEvent| e.stop_propagation());
    let swallow_touch = Callback::from(|e: TouchEvent| e.stop_propagation());

    let visibility = if props.visible {
        "opacity:1; pointer-events:auto;"
    } else {
        "opacity:0; pointer-events:none;"
    };
    html! {
        <div
            style={format!("position:absolute; bottom:10px; left:50%; transform:translateX(-50%); width:80%; max-width:140px; display:flex; align-items:center; gap:8px; background:rgba(0,0,0,0.35); backdrop-filter:blur(6px); border:1px solid rgba(255,255,255,0.25); border-radius:999px; padding:6px 12px; transition:opacity 0.3s; z-index:10; {visibility}")}
            onmousedown={swallow_mouse}
            ontouchstart={swallow_touch}
        >
            <span style="color:rgba(255,255,255,0.8); font-size:12px; flex-shrink:0;">{"🔍"}</span>
            <input
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.zoom.to_string()}
                oninput={on_input}
                style="flex:1; accent-color:#58a6ff;"
            />
        </div>
    }
}
