use crate::domain::contact::ContactModal;
use crate::domain::listings::Listings;
use crate::system::auth::Session;
use contracts::domain::Product;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Every API call reads its bearer token through this session object.
    provide_context(Session::from_browser_storage());

    let (my_listings, set_my_listings) = signal(false);

    // Product picked from the grid; drives the contact modal.
    let selected = RwSignal::new(Option::<Product>::None);

    let contact_open = Signal::derive(move || selected.get().is_some());
    let contact_email = Signal::derive(move || {
        selected.get().map(|p| p.seller_email).unwrap_or_default()
    });
    let contact_title =
        Signal::derive(move || selected.get().map(|p| p.title).unwrap_or_default());

    view! {
        <div class="app">
            <header class="app__header">
                <h1 class="app__brand">"Marketplace"</h1>
                <nav class="app__nav">
                    <button
                        class="button"
                        class:button--active=move || !my_listings.get()
                        on:click=move |_| set_my_listings.set(false)
                    >
                        "Browse"
                    </button>
                    <button
                        class="button"
                        class:button--active=move || my_listings.get()
                        on:click=move |_| set_my_listings.set(true)
                    >
                        "My Listings"
                    </button>
                </nav>
            </header>

            <main class="app__content">
                <Listings
                    my_listings=my_listings
                    on_select=Callback::new(move |product| selected.set(Some(product)))
                />
            </main>

            <ContactModal
                open=contact_open
                on_close=Callback::new(move |_| selected.set(None))
                email=contact_email
                title=contact_title
            />
        </div>
    }
}
