use yew::prelude::*;

use crate::hooks::use_orientation;
use crate::model::{EditorSettings, FrameShape, PhotoTransform};
use crate::state::Pan;

use super::draggable_photo::DraggablePhoto;

/// Owns the photo transform. The viewport component only proposes new
/// values through `on_update`; this view stores them and feeds them back.
#[derive(Properties, PartialEq, Clone)]
pub struct EditViewProps {
    pub src: AttrValue,
    pub on_back: Callback<()>,
}

#[function_component(EditView)]
pub fn edit_view(props: &EditViewProps) -> Html {
    let transform = use_state_eq(PhotoTransform::default);
    let settings = use_state_eq(EditorSettings::load);
    let portrait = use_orientation();

    // Persist preference changes (never the transform itself).
    {
        let snapshot = (*settings).clone();
        use_effect_with(snapshot, move |s| {
            s.save();
            || ()
        });
    }

    let on_update = {
        let transform = transform.clone();
        Callback::from(move |(zoom, pan): (f64, Pan)| {
            transform.set(PhotoTransform { zoom, pan });
        })
    };
    let on_reset = {
        let transform = transform.clone();
        Callback::from(move |_| transform.set(PhotoTransform::default()))
    };
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let frame_buttons = FrameShape::ALL
        .iter()
        .map(|shape| {
            let selected = settings.frame == *shape;
            let onclick = {
                let settings = settings.clone();
                let shape = *shape;
                Callback::from(move |_| {
                    settings.set(EditorSettings { frame: shape });
                })
            };
            let style = if selected {
                "background:#1f6feb; border:1px solid #58a6ff; color:#fff;"
            } else {
                "background:#21262d; border:1px solid #30363d; color:#c9d1d9;"
            };
            html! {
                <button {onclick} style={format!("{style} border-radius:6px; padding:6px 12px; cursor:pointer;")}>
                    { shape.label() }
                </button>
            }
        })
        .collect::<Html>();

    let layout = if portrait {
        "flex-direction:column;"
    } else {
        "flex-direction:row;"
    };
    let t = *transform;

    html! {
        <div style={format!("display:flex; {layout} gap:24px; align-items:center; justify-content:center; min-height:100vh; padding:24px;")}>
            <DraggablePhoto
                src={props.src.clone()}
                zoom={t.zoom}
                pan={t.pan}
                on_update={on_update}
                style={AttrValue::from(format!("{} border-radius:12px; background:#161b22; border:1px solid #30363d;", settings.frame.frame_style()))}
            />
            <div style="display:flex; flex-direction:column; gap:14px; min-width:200px;">
                <div style="display:flex; gap:8px;">{ frame_buttons }</div>
                <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; font-size:13px; display:flex; flex-direction:column; gap:6px;">
                    <div style="display:flex; justify-content:space-between;">
                        <span style="opacity:0.7;">{"Zoom"}</span>
                        <span style="font-variant-numeric:tabular-nums;">{ format!("{:.1}×", t.zoom) }</span>
                    </div>
                    <div style="display:flex; justify-content:space-between;">
                        <span style="opacity:0.7;">{"Pan"}</span>
                        <span style="font-variant-numeric:tabular-nums;">
                            { format!("{:+.2}, {:+.2}", t.pan.x, t.pan.y) }
                        </span>
                    </div>
                </div>
                <div style="display:flex; gap:8px;">
                    <button onclick={on_reset} style="flex:1; padding:6px 12px;">{"Reset"}</button>
                    <button onclick={on_back} style="flex:1; padding:6px 12px;">{"Pick another"}</button>
                </div>
            </div>
        </div>
    }
}
