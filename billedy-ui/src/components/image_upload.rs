//! Image Upload Widget
//!
//! Pick an image, upload it to the section's asset folder and optionally
//! remove it again.

use leptos::*;
use wasm_bindgen::JsCast;

use super::{ProgressIndicator, SubmitButton};
use crate::api::{self, UploadedImage};
use crate::state::use_toasts;

const STEPS: usize = 2;

/// Steps completed so far: picking a file, then uploading it
fn completed_steps(has_file: bool, uploaded: bool) -> usize {
    match (has_file, uploaded) {
        (_, true) => 2,
        (true, false) => 1,
        (false, false) => 0,
    }
}

#[component]
pub fn ImageUpload(
    folder: &'static str,
) -> impl IntoView {
    let toasts = use_toasts();

    let (data_url, set_data_url) = create_signal(None::<String>);
    let (uploaded, set_uploaded) = create_signal(None::<UploadedImage>);
    let (pending, set_pending) = create_signal(false);

    let step = Signal::derive(move || {
        completed_steps(data_url.with(Option::is_some), uploaded.with(Option::is_some))
    });

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(file_reader) = web_sys::FileReader::new() else {
            toasts.error("File reading is not supported in this browser");
            return;
        };

        set_uploaded.set(None);

        let onload = {
            let file_reader = file_reader.clone();
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(result) = file_reader.result().ok().and_then(|r| r.as_string()) {
                    set_data_url.set(Some(result));
                }
            }) as Box<dyn FnMut(_)>)
        };

        file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if file_reader.read_as_data_url(&file).is_err() {
            toasts.error("Could not read the selected file");
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(data) = data_url.get_untracked() else {
            return;
        };

        set_pending.set(true);
        spawn_local(async move {
            match api::upload_image(&data, Some(folder)).await {
                Ok(image) => {
                    set_uploaded.set(Some(image));
                    toasts.success("Image uploaded");
                }
                Err(e) => toasts.error(&format!("Upload failed: {}", e)),
            }
            set_pending.set(false);
        });
    };

    let on_remove = move |_| {
        let Some(image) = uploaded.get_untracked() else {
            return;
        };

        spawn_local(async move {
            match api::delete_image_by_id(&image.public_id).await {
                Ok(_) => {
                    set_uploaded.set(None);
                    set_data_url.set(None);
                    toasts.info("Image removed");
                }
                Err(e) => toasts.error(&format!("Delete failed: {}", e)),
            }
        });
    };

    view! {
        <form class="bg-gray-800 rounded-xl p-6 space-y-4" on:submit=on_submit>
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold">"Image"</h2>
                <ProgressIndicator current=step total=STEPS />
            </div>

            <input
                type="file"
                accept="image/*"
                class="block w-full text-sm text-gray-300"
                on:change=on_file
            />

            {move || data_url.get().map(|src| view! {
                <img src=src alt="Selected image" class="h-32 w-32 object-cover rounded-lg" />
            })}

            {move || uploaded.get().map(|image| view! {
                <div class="flex items-center justify-between text-sm text-gray-400">
                    <span class="truncate">{image.public_id}</span>
                    <button type="button" class="text-red-400 hover:text-red-300" on:click=on_remove>
                        "Remove"
                    </button>
                </div>
            })}

            <SubmitButton
                is_pending=pending
                disabled=Signal::derive(move || data_url.with(Option::is_none))
                icon="↑"
            >
                "Upload"
            </SubmitButton>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_steps() {
        assert_eq!(completed_steps(false, false), 0);
        assert_eq!(completed_steps(true, false), 1);
        assert_eq!(completed_steps(true, true), STEPS);
    }
}
