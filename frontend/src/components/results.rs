use super::super::Model;
use shared::{DetectionResult, ResultPanel};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    html! {
        <div class="results-container">
            <div class="result-header">
                <h2>{"Detection Results"}</h2>
            </div>
            <div class="detailed-results">
                { render_panel(model.machine.panel()) }
            </div>
        </div>
    }
}

fn render_panel(panel: ResultPanel<'_>) -> Html {
    match panel {
        ResultPanel::NoResults => html! {
            <p class="no-results-message">{"No detection results."}</p>
        },
        ResultPanel::Loading => html! {
            <div class="loading-results">
                <i class="fa-solid fa-spinner fa-spin"></i>
                <p>{"Please wait, the model is loading..."}</p>
            </div>
        },
        ResultPanel::Error(message) => html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ message.to_owned() }</p>
            </div>
        },
        ResultPanel::Image(result) => html! {
            <div class="image-result">
                <div class="result-entity"><strong>{ result.label() }</strong></div>
                <div class="result-score">{ result.score_label() }</div>
            </div>
        },
        ResultPanel::Video(frames) => html! {
            <div class="frame-results">
                { for frames.iter().enumerate().map(|(index, frame)| render_frame(index, frame)) }
            </div>
        },
    }
}

fn render_frame(index: usize, frame: &DetectionResult) -> Html {
    html! {
        <div class="frame-item" key={index.to_string()}>
            <div class="frame-thumbnail">
                <div class="frame-number">{ format!("Frame {}:", index + 1) }</div>
                {
                    match &frame.url {
                        Some(url) => html! { <img src={url.clone()} alt="" width="80" /> },
                        None => html! {},
                    }
                }
            </div>
            <div class="frame-detection">
                <div class="result-entity">{ frame.label() }</div>
                <div class="result-score">{ frame.score_label() }</div>
            </div>
        </div>
    }
}
