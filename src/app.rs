use crate::components::*;
use crate::state::{AppState, Message};
use crate::wishlist::AppConfig;
use dioxus::prelude::*;
use tracing::warn;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let title = config.window.title.clone();
    let mut state = use_signal(move || AppState::new(config.catalog));

    let on_add = move |product_id: String| {
        let mut write_state = state.write();
        write_state.clear_message();
        if let Err(e) = write_state.request_favorite(&product_id) {
            warn!("Cannot add to favorites: {}", e);
            write_state.set_message(Message::error(e.to_string()));
        }
    };

    let on_remove = move |product_id: String| {
        let mut write_state = state.write();
        write_state.clear_message();
        write_state.remove_favorite(&product_id);
    };

    let on_confirm = move |_| {
        state.write().confirm_pending();
    };

    let on_dismiss = move |_| {
        state.write().dismiss_pending();
    };

    let (favorite_count, pending_name) = {
        let read_state = state.read();
        (
            read_state.favorites.len(),
            read_state.pending_product().map(|p| p.name.clone()),
        )
    };

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header { title: title, favorite_count: favorite_count }
            div { class: "content",
                ProductList {
                    state: state,
                    on_add: on_add,
                    on_remove: on_remove
                }
            }
            StatusBar { state: state }
        }
        if let Some(name) = pending_name {
            div { class: "dialog-overlay",
                div { class: "wishlist-dialog",
                    h3 { "{name}" }
                    AddToWishlistPrompt {
                        on_confirm: on_confirm,
                        on_dismiss: on_dismiss
                    }
                }
            }
        }
    }
}
