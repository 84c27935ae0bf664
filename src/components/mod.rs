mod add_to_wishlist_prompt;
mod header;
mod product_list;
mod status_bar;

pub use add_to_wishlist_prompt::AddToWishlistPrompt;
pub use header::Header;
pub use product_list::ProductList;
pub use status_bar::StatusBar;
