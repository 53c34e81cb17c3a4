use super::super::{Model, Msg};
use super::utils::debounce;
use shared::MediaKind;
use yew::prelude::*;

pub fn render_preview(model: &Model) -> Html {
    let Some(media) = model.machine.selection() else {
        return html! {};
    };
    let url = media.handle.preview_url.to_string();

    html! {
        <div id="preview-container">
            {
                match media.kind {
                    MediaKind::Image => html! {
                        <img id="actual-image-preview" src={url} alt="Preview" />
                    },
                    MediaKind::Video => html! {
                        <video id="actual-video-preview" controls=true>
                            <source src={url} type={media.mime.clone()} />
                        </video>
                    },
                }
            }
            <p class="preview-filename">{ media.name.clone() }</p>
        </div>
    }
}

/// Remove and detect buttons, offered once a file is selected and no
/// detection is running.
pub fn render_actions(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.machine.shows_actions() {
        return html! {};
    }
    let Some(media) = model.machine.selection() else {
        return html! {};
    };

    let link = ctx.link().clone();

    html! {
        <div class="button-container">
            <button
                id="remove-file-btn"
                class="analyze-btn"
                style="background-color: var(--danger-color);"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::RemoveFile)
                })}
            >
                <i class="fa-solid fa-trash"></i>{" REMOVE FILE"}
            </button>
            <button
                id="detect-btn"
                class="analyze-btn"
                style="background-color: var(--primary-color);"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Detect)
                })}
            >
                <i class="fa-solid fa-magnifying-glass"></i>{ format!(" {}", media.kind.detect_label()) }
            </button>
        </div>
    }
}
