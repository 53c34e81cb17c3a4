use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::FileList;
use yew::prelude::*;

pub const FILE_INPUT_ID: &str = "file-input";

// Debounce function to limit button events
pub fn debounce<E, F>(millis: u32, callback: F) -> Callback<E>
where
    E: 'static,
    F: Fn() + Clone + 'static,
{
    let pending = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut pending = pending.borrow_mut();
        if let Some(old_timeout) = pending.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *pending = Some(Timeout::new(millis, move || inner_callback()));
    })
}

pub fn files_from_list(file_list: &FileList) -> Vec<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(GlooFile::from)
        .collect()
}

/// Opens the native picker through the hidden file input.
pub fn open_file_picker() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FILE_INPUT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match input {
        Some(input) => input.click(),
        None => log::warn!("File input #{} not found", FILE_INPUT_ID),
    }
}

/// Blocking prompt for input errors that are not part of the normal flow.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}
