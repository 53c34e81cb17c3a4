use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"OBJECT IDENTIFICATION"}</h1>
            <p class="subtitle">{"Upload an image or video to analyze objects in the media"}</p>
        </header>
    }
}
