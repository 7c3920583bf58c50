use contracts::domain::NewListing;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::icons::icon;
use crate::system::auth::use_session;

/// Modal form for posting a new listing.
///
/// On success it invokes `on_created` (the caller re-fetches the collection)
/// and closes; on failure it shows an inline error and stays open.
#[component]
#[allow(non_snake_case)]
pub fn CreateListingModal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_created: Callback<()>,
) -> impl IntoView {
    let session = StoredValue::new(use_session());

    let (title, set_title) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let reset_form = move || {
        set_title.set(String::new());
        set_price.set(String::new());
        set_image_url.set(String::new());
        set_description.set(String::new());
        set_error.set(None);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let title_value = title.get_untracked().trim().to_string();
        if title_value.is_empty() {
            set_error.set(Some("Title is required".to_string()));
            return;
        }
        let price_value = match price.get_untracked().trim().parse::<f64>() {
            Ok(v) if v >= 0.0 => v,
            _ => {
                set_error.set(Some("Price must be a non-negative number".to_string()));
                return;
            }
        };

        let image = image_url.get_untracked().trim().to_string();
        let desc = description.get_untracked().trim().to_string();
        let listing = NewListing {
            title: title_value,
            price: price_value,
            image_url: (!image.is_empty()).then_some(image),
            description: (!desc.is_empty()).then_some(desc),
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_listing(&session.get_value(), &listing).await {
                Ok(()) => {
                    set_saving.set(false);
                    reset_form();
                    on_created.run(());
                    on_close.run(());
                }
                Err(e) => {
                    set_saving.set(false);
                    set_error.set(Some(format!("Failed to create listing: {}", e)));
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div
                    class="modal create-listing"
                    on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                    <h2 class="modal__title">"Create Listing"</h2>

                    <Show when=move || error.get().is_some()>
                        <div class="error-message">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label for="listing-title">"Title"</label>
                            <input
                                type="text"
                                id="listing-title"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                                required
                                disabled=move || saving.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="listing-price">"Price"</label>
                            <input
                                type="text"
                                id="listing-price"
                                inputmode="decimal"
                                placeholder="0.00"
                                prop:value=move || price.get()
                                on:input=move |ev| set_price.set(event_target_value(&ev))
                                required
                                disabled=move || saving.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="listing-image">"Image URL (optional)"</label>
                            <input
                                type="url"
                                id="listing-image"
                                prop:value=move || image_url.get()
                                on:input=move |ev| set_image_url.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="listing-description">"Description (optional)"</label>
                            <textarea
                                id="listing-description"
                                rows="3"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                                disabled=move || saving.get()
                            ></textarea>
                        </div>

                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Posting..." } else { "Post listing" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
