pub mod api;
pub mod create_modal;
pub mod item_card;
pub mod state;

use self::create_modal::CreateListingModal;
use self::item_card::ItemCard;
use self::state::create_state;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_products, SortOption};
use crate::shared::shuffle::shuffle;
use crate::system::auth::use_session;
use contracts::domain::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Listings grid for the browse and owner ("my listings") views.
///
/// Fetches on mount and whenever the mode flag flips. Browse results are
/// shuffled client-side; owner results keep server order. A sort option
/// applied on top yields the displayed sequence.
#[component]
#[allow(non_snake_case)]
pub fn Listings(
    #[prop(into)] my_listings: Signal<bool>,
    on_select: Callback<Product>,
) -> impl IntoView {
    let session = StoredValue::new(use_session());
    let state = create_state();

    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (create_open, set_create_open) = signal(false);

    // Monotonic request generation. Responses from requests that are no
    // longer the newest are discarded, so a slow fetch cannot overwrite the
    // state of a later one after rapid mode toggling.
    let fetch_seq = StoredValue::new(0u64);

    let do_fetch = move || {
        fetch_seq.update_value(|v| *v += 1);
        let generation = fetch_seq.get_value();
        let owner_mode = my_listings.get_untracked();

        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_listings(&session.get_value(), owner_mode).await;
            if fetch_seq.get_value() != generation {
                return;
            }
            match result {
                Ok(mut items) => {
                    if !owner_mode {
                        shuffle(&mut items, js_sys::Math::random);
                    }
                    set_products.set(items);
                }
                // Silent by design: the browse grid shows no fetch errors.
                Err(e) => log::warn!("Failed to fetch listings: {}", e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        my_listings.track();
        do_fetch();
    });

    let displayed = Memo::new(move |_| {
        let mut items = products.get();
        sort_products(&mut items, state.get().sort_option);
        items
    });

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Are you sure you want to delete this listing?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_listing(&session.get_value(), id).await {
                Ok(()) => do_fetch(),
                Err(e) => {
                    log::error!("Error deleting listing {}: {}", id, e);
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Failed to delete listing");
                    }
                }
            }
        });
    };

    view! {
        <div class="listings">
            <div class="listings__header">
                <h1 class="listings__heading">
                    {move || if my_listings.get() { "My Listings" } else { "Browse Listings" }}
                </h1>

                <div class="listings__sort">
                    <p class="listings__sort-label">"Sort by:"</p>
                    <select
                        prop:value=move || state.get().sort_option.value().to_string()
                        on:change=move |ev| {
                            state.update(|s| {
                                s.sort_option = SortOption::from_value(&event_target_value(&ev));
                            });
                        }
                    >
                        <option value="">"Default"</option>
                        <option value="price-asc">"Price: Low to High"</option>
                        <option value="price-desc">"Price: High to Low"</option>
                        <option value="date-asc">"Date: Oldest first"</option>
                        <option value="date-desc">"Date: Newest first"</option>
                    </select>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="listings__loading">"Loading..."</div> }
            >
                <div class="listings__grid">
                    {move || {
                        let owner_mode = my_listings.get();
                        displayed.get().into_iter().map(|product| {
                            let image = product.image_url.clone().unwrap_or_else(|| {
                                format!("https://picsum.photos/seed/{}/400/400", product.id)
                            });
                            let title = product.title.clone();
                            let price = product.price.to_string();
                            let id = product.id;
                            let on_view = Callback::new(move |_| on_select.run(product.clone()));
                            let on_delete = owner_mode.then(|| Callback::new(handle_delete));
                            view! {
                                <ItemCard
                                    product_id=id
                                    image=image
                                    title=title
                                    price=price
                                    on_view=on_view
                                    on_delete=on_delete
                                />
                            }
                        }).collect_view()
                    }}

                    <Show when=move || my_listings.get()>
                        <button
                            class="listings__create-tile"
                            on:click=move |_| set_create_open.set(true)
                        >
                            {icon("plus")}
                            <span>"Create Listing"</span>
                        </button>
                    </Show>
                </div>
            </Show>

            <CreateListingModal
                open=create_open
                on_close=Callback::new(move |_| set_create_open.set(false))
                on_created=Callback::new(move |_| do_fetch())
            />
        </div>
    }
}
