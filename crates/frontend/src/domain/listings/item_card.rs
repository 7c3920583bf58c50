use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// A single product card in the listings grid.
///
/// Clicking the card fires `on_view`; the delete button (owner mode only)
/// fires `on_delete` without also triggering the view action.
#[component]
#[allow(non_snake_case)]
pub fn ItemCard(
    product_id: i64,
    image: String,
    title: String,
    price: String,
    on_view: Callback<()>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let alt = title.clone();

    view! {
        <div class="item-card" on:click=move |_| on_view.run(())>
            <img class="item-card__image" src=image alt=alt loading="lazy" />
            <div class="item-card__body">
                <p class="item-card__title">{title}</p>
                <p class="item-card__price">{format!("${}", price)}</p>
            </div>
            {on_delete.map(|on_delete| view! {
                <button
                    class="item-card__delete"
                    title="Delete listing"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        on_delete.run(product_id);
                    }
                >
                    {icon("delete")}
                </button>
            })}
        </div>
    }
}
