use dioxus::prelude::*;

pub const PROMPT_TEXT: &str = "Do you want to add to favorites?";

/// The two decisions the prompt offers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub const ALL: [Answer; 2] = [Answer::Yes, Answer::No];

    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }

    /// Runs exactly one of the handlers: `on_confirm` for `Yes`, `on_dismiss` for `No`.
    pub fn dispatch(self, on_confirm: impl FnOnce(), on_dismiss: impl FnOnce()) {
        match self {
            Answer::Yes => on_confirm(),
            Answer::No => on_dismiss(),
        }
    }
}

#[component]
pub fn AddToWishlistPrompt(on_confirm: EventHandler<()>, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        span { class: "wishlist-prompt",
            "{PROMPT_TEXT}"
            for answer in Answer::ALL {
                button {
                    key: "{answer.label()}",
                    onclick: move |_| answer.dispatch(|| on_confirm.call(()), || on_dismiss.call(())),
                    "{answer.label()}"
                }
            }
        }
    }
}
