use yew::prelude::*;

use crate::util::clog;

use super::{edit_view::EditView, start_screen::StartScreen};

#[derive(PartialEq, Clone)]
enum View {
    Start,
    Edit(AttrValue),
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Start);

    let on_pick = {
        let view = view.clone();
        Callback::from(move |src: AttrValue| {
            clog(&format!("editing photo {src}"));
            view.set(View::Edit(src));
        })
    };
    let on_back = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Start))
    };

    html! {
        <div id="root">
            {
                match (*view).clone() {
                    View::Start => html! { <StartScreen on_pick={on_pick.clone()} /> },
                    View::Edit(src) => html! { <EditView {src} on_back={on_back.clone()} /> },
                }
            }
        </div>
    }
}
