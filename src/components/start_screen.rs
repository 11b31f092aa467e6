use web_sys::HtmlInputElement;
use yew::prelude::*;

const INTRO_SEEN_KEY: &str = "pb_intro_seen";

const SAMPLE_PHOTOS: [(&str, &str); 3] = [
    ("Landscape", "https://picsum.photos/seed/booth-wide/1600/900"),
    ("Portrait", "https://picsum.photos/seed/booth-tall/900/1400"),
    ("Square", "https://picsum.photos/seed/booth-square/1200/1200"),
];

/// Entry screen: the boundary where an image reference enters the editor.
/// Capture and upload pipelines live outside this app; anything resolvable
/// as an `<img>` source works.
#[derive(Properties, PartialEq, Clone)]
pub struct StartScreenProps {
    pub on_pick: Callback<AttrValue>,
}

#[function_component(StartScreen)]
pub fn start_screen(props: &StartScreenProps) -> Html {
    let url_ref = use_node_ref();
    let show_tip = use_state(|| {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                return store.get_item(INTRO_SEEN_KEY).ok().flatten().is_none();
            }
        }
        true
    });

    let dismiss_tip = {
        let show_tip = show_tip.clone();
        Callback::from(move |_| {
            show_tip.set(false);
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item(INTRO_SEEN_KEY, "1");
                }
            }
        })
    };

    let sample_buttons = SAMPLE_PHOTOS
        .iter()
        .map(|(label, url)| {
            let onclick = {
                let on_pick = props.on_pick.clone();
                let url = *url;
                Callback::from(move |_| on_pick.emit(AttrValue::from(url)))
            };
            html! {
                <button {onclick} style="padding:8px 16px; border-radius:8px; border:1px solid #30363d; background:#21262d; color:#c9d1d9; cursor:pointer;">
                    { *label }
                </button>
            }
        })
        .collect::<Html>();

    let use_url = {
        let on_pick = props.on_pick.clone();
        let url_ref = url_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = url_ref.cast::<HtmlInputElement>() {
                let url = input.value();
                if !url.trim().is_empty() {
                    on_pick.emit(AttrValue::from(url));
                }
            }
        })
    };

    html! {
        <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; padding:16px;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:14px; padding:28px 36px; max-width:460px; width:90%; display:flex; flex-direction:column; gap:16px;">
                <h2 style="margin:0; font-size:22px; color:#58a6ff; text-align:center;">{"Photo Booth"}</h2>
                <p style="margin:0; text-align:center; opacity:0.85;">{"Pick a photo, then drag to frame it and zoom to taste."}</p>
                if *show_tip {
                    <div style="background:rgba(56,139,253,0.1); border:1px solid #1f6feb; border-radius:8px; padding:10px 14px; font-size:13px; line-height:1.4;">
                        <p style="margin:0 0 8px 0;">{"The photo always fills its frame: drag stops at the edge and zooming back out snaps it into view."}</p>
                        <button onclick={dismiss_tip} style="padding:4px 10px;">{"Got it"}</button>
                    </div>
                }
                <div style="display:flex; gap:10px; justify-content:center;">
                    { sample_buttons }
                </div>
                <div style="display:flex; gap:8px;">
                    <input
                        ref={url_ref}
                        type="text"
                        placeholder="…or paste an image URL"
                        style="flex:1; padding:8px 10px; border-radius:8px; border:1px solid #30363d; background:#0d1117; color:#c9d1d9;"
                    />
                    <button onclick={use_url} style="padding:8px 14px;">{"Open"}</button>
                </div>
            </div>
        </div>
    }
}
