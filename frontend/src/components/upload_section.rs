use super::super::Model;
use super::super::Msg;
use super::utils::{FILE_INPUT_ID, debounce, files_from_list, open_file_picker};
use shared::media::accept_attribute;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

/// Drop target and file picker. Hidden once a file is selected.
pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    if model.machine.selection().is_some() {
        return html! {};
    }

    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files().map(|list| files_from_list(&list)).unwrap_or_default();

        input.set_value("");

        (!files.is_empty()).then(|| Msg::FilesAdded(files))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div class="upload-section">
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept={accept_attribute()}
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, open_file_picker)}
            >
                <div class="upload-placeholder">
                    <i class="fa-regular fa-image"></i>
                    <p>{"Drag and drop your image or video here"}</p>
                    <p>{"or click to select a file"}</p>
                    <p class="file-types">{"Supported: JPG, PNG, GIF, MP4, AVI, MOV"}</p>
                </div>
            </div>
        </div>
    }
}
