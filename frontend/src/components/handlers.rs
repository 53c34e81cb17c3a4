use super::super::{MediaHandle, Model, Msg};
use super::utils::{alert, files_from_list};
use crate::api::DetectionClient;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::media::first_accepted;
use shared::{DetectionOutcome, MediaKind, PendingUpload, RequestToken, SelectedMedia};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

/// Keeps the first acceptable file and drops the rest.
pub fn handle_files_added(model: &mut Model, files: Vec<GlooFile>) -> bool {
    let described: Vec<(String, String)> = files
        .iter()
        .map(|file| (file.name(), file.raw_mime_type()))
        .collect();
    let chosen = first_accepted(
        described
            .iter()
            .map(|(name, mime)| (name.as_str(), mime.as_str())),
    );

    for (index, (name, mime)) in described.iter().enumerate() {
        if chosen.map(|(picked, _)| picked) != Some(index) {
            log::warn!("Skipping file {} ({})", name, mime);
        }
    }

    let Some((index, kind)) = chosen else {
        return false;
    };
    let Some(file) = files.into_iter().nth(index) else {
        return false;
    };
    let (name, mime) = described.into_iter().nth(index).unwrap_or_default();

    let preview_url = ObjectUrl::from(file.clone());
    model.machine.select(SelectedMedia {
        name,
        mime,
        kind,
        handle: MediaHandle { file, preview_url },
    });
    true
}

pub fn handle_remove_file(model: &mut Model) -> bool {
    model.machine.remove();
    model.is_dragging = false;
    true
}

pub fn handle_detect(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.machine.begin_detection() {
        Ok(pending) => {
            send_detection_request(ctx, model.client.clone(), pending);
            true
        }
        Err(e) => {
            log::warn!("Detection requested without a file");
            alert(&e.to_string());
            false
        }
    }
}

pub fn handle_detection_finished(
    model: &mut Model,
    token: RequestToken,
    outcome: DetectionOutcome,
) -> bool {
    model.machine.complete(token, outcome)
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|data| data.files()) {
        process_file_list(ctx, &file_list);
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    // Pasting only picks a file while the drop zone is showing.
    if model.machine.selection().is_some() {
        return false;
    }

    if let Some(file_list) = event.clipboard_data().and_then(|data| data.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            process_file_list(ctx, &file_list);
        }
    }
    false
}

fn process_file_list(ctx: &Context<Model>, file_list: &FileList) {
    let files = files_from_list(file_list);
    if !files.is_empty() {
        ctx.link().send_message(Msg::FilesAdded(files));
    }
}

pub fn send_detection_request(
    ctx: &Context<Model>,
    client: DetectionClient,
    pending: PendingUpload<MediaHandle>,
) {
    let link = ctx.link().clone();

    spawn_local(async move {
        let PendingUpload { token, kind, handle } = pending;
        let file = &handle.file;

        let outcome = match kind {
            MediaKind::Image => client.upload_image(file).await.map(DetectionOutcome::Image),
            MediaKind::Video => client.upload_video(file).await.map(DetectionOutcome::Video),
        };

        let outcome = outcome.unwrap_or_else(|e| {
            log::error!("{} upload failed ({}): {}", kind, token, e);
            DetectionOutcome::UploadFailed
        });

        link.send_message(Msg::DetectionFinished(token, outcome));
    });
}
