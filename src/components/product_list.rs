use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdFavorite, MdFavoriteBorder};

#[component]
pub fn ProductList(
    state: Signal<AppState>,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let (products, prompt_open) = {
        let state = state.read();
        let products = state
            .catalog
            .iter()
            .map(|p| {
                (
                    p.id.clone(),
                    p.name.clone(),
                    p.display_price(),
                    state.is_favorite(&p.id),
                )
            })
            .collect::<Vec<_>>();
        (products, state.pending_product_id.is_some())
    };

    rsx! {
        ul { class: "product-list",
            if products.is_empty() {
                li { class: "product-empty", "(No products)" }
            }
            for (id, name, price, is_favorite) in products {
                ProductRow {
                    key: "{id}",
                    product_id: id.clone(),
                    name: name,
                    price: price,
                    is_favorite: is_favorite,
                    disabled: prompt_open,
                    on_add: on_add,
                    on_remove: on_remove
                }
            }
        }
    }
}

#[component]
fn ProductRow(
    product_id: String,
    name: String,
    price: String,
    is_favorite: bool,
    disabled: bool,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    rsx! {
        li { class: "product-row",
            span { class: "product-name", "{name}" }
            span { class: "product-price", "{price}" }
            button {
                class: if is_favorite { "icon-button favorite" } else { "icon-button" },
                title: if is_favorite { "Remove from favorites" } else { "Add to favorites" },
                disabled: disabled,
                onclick: move |_| {
                    if is_favorite {
                        on_remove.call(product_id.clone());
                    } else {
                        on_add.call(product_id.clone());
                    }
                },
                if is_favorite {
                    Icon { width: 20, height: 20, icon: MdFavorite }
                } else {
                    Icon { width: 20, height: 20, icon: MdFavoriteBorder }
                }
            }
        }
    }
}
