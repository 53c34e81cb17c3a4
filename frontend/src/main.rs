mod api;
mod components;
mod config;

use api::DetectionClient;
use components::config_error::{ConfigErrorProps, ConfigErrorView};
use components::handlers;
use components::header::render_header;
use components::preview_area::{render_actions, render_preview};
use components::results::render_results;
use components::upload_section::render_upload_section;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ApiConfig, DetectionOutcome, RequestToken, UploadMachine};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

/// Browser-side handle of the selected file. The object URL backs the preview
/// and is revoked once the last clone is dropped.
#[derive(Clone)]
pub struct MediaHandle {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    // File operations
    FilesAdded(Vec<GlooFile>),
    RemoveFile,

    // Detection
    Detect,
    DetectionFinished(RequestToken, DetectionOutcome),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

#[derive(Properties, PartialEq)]
pub struct ModelProps {
    pub config: ApiConfig,
}

pub struct Model {
    machine: UploadMachine<MediaHandle>,
    client: DetectionClient,
    is_dragging: bool,
    _paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ModelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let paste_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        Self {
            machine: UploadMachine::new(),
            client: DetectionClient::new(ctx.props().config.clone()),
            is_dragging: false,
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FilesAdded(files) => handlers::handle_files_added(self, files),
            Msg::RemoveFile => handlers::handle_remove_file(self),

            Msg::Detect => handlers::handle_detect(self, ctx),
            Msg::DetectionFinished(token, outcome) => {
                handlers::handle_detection_finished(self, token, outcome)
            }

            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    <section class="results-column">
                        { render_results(self) }
                        { render_actions(self, ctx) }
                    </section>
                    <section class="media-column">
                        { render_preview(self) }
                        { render_upload_section(self, ctx) }
                    </section>
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");

    match config::load() {
        Ok(config) => {
            log::info!("Detection API at {}", config.base_url());
            yew::Renderer::<Model>::with_props(ModelProps { config }).render();
        }
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            yew::Renderer::<ConfigErrorView>::with_props(ConfigErrorProps {
                message: e.to_string(),
            })
            .render();
        }
    }
}
