use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatusBar(state: Signal<AppState>) -> Element {
    let message = state.read().message.clone();
    let favorites = state
        .read()
        .favorite_products()
        .into_iter()
        .map(|(f, p)| (f.id, p.name.clone()))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "status-bar",
            if let Some(msg) = message {
                div {
                    class: if msg.is_error { "message error" } else { "message success" },
                    "{msg.text}"
                }
            }

            div { class: "status-section",
                div { class: "status-label", "Favorites:" }
                div { class: "status-value",
                    if favorites.is_empty() {
                        "None yet"
                    }
                    for (id, name) in favorites {
                        span { key: "{id}", class: "favorite-chip", "{name}" }
                    }
                }
            }
        }
    }
}
