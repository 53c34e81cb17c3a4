use super::header::render_header;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Shown instead of the upload screen when the API URL cannot be resolved.
#[function_component(ConfigErrorView)]
pub fn config_error_view(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="container">
            { render_header() }
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ props.message.clone() }</p>
            </div>
        </div>
    }
}
