use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdFavorite;

#[component]
pub fn Header(title: String, favorite_count: usize) -> Element {
    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdFavorite
            }
            h1 { "{title}" }
            span { class: "favorite-count", "{favorite_count} saved" }
        }
    }
}
