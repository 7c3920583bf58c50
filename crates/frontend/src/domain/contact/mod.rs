use crate::shared::clipboard;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay showing a seller's email with a copy-to-clipboard action.
///
/// Visibility is entirely caller-controlled; the modal only reports a close
/// request via `on_close`.
#[component]
#[allow(non_snake_case)]
pub fn ContactModal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] email: Signal<String>,
    #[prop(into)] title: Signal<String>,
) -> impl IntoView {
    let (copied_message, set_copied_message) = signal(Option::<String>::None);

    // A different contact starts a fresh lifecycle for the confirmation, so
    // reopening the modal for another listing never shows a stale message.
    Effect::new(move |_| {
        email.track();
        title.track();
        set_copied_message.set(None);
    });

    let handle_copy = move |_| {
        let text = email.get_untracked();
        spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    set_copied_message.set(Some("Email copied to clipboard!".to_string()));
                }
                // Silent for the user; the copy button just does nothing.
                Err(e) => log::error!("Failed to copy email: {}", e),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div
                    class="modal contact-modal"
                    on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>

                    <h2 class="contact-modal__title">
                        {move || format!("Interested in {}?", title.get())}
                    </h2>
                    <p class="contact-modal__hint">
                        "Send the seller an email to arrange a pickup or for additional information!"
                    </p>

                    <div class="contact-modal__email-box">
                        <p class="contact-modal__label">"Seller Email"</p>
                        <p class="contact-modal__email">{move || email.get()}</p>
                        <button class="button button--primary" on:click=handle_copy>
                            {icon("copy")}
                            "Copy email"
                        </button>
                        {move || copied_message.get().map(|msg| view! {
                            <div class="contact-modal__copied">{msg}</div>
                        })}
                    </div>
                </div>
            </div>
        </Show>
    }
}
