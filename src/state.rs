use crate::wishlist::{Favorite, Product};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WishlistError {
    #[error("Unknown product \"{0}\"")]
    UnknownProduct(String),
    #[error("\"{0}\" is already in your favorites")]
    AlreadyFavorite(String),
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Vec<Product>,
    pub favorites: Vec<Favorite>,
    /// Product waiting for a yes/no answer. The prompt is shown while set.
    pub pending_product_id: Option<String>,
    pub message: Option<Message>,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            favorites: Vec::new(),
            pending_product_id: None,
            message: None,
        }
    }

    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == product_id)
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.iter().any(|f| f.product_id == product_id)
    }

    pub fn pending_product(&self) -> Option<&Product> {
        self.pending_product_id
            .as_deref()
            .and_then(|id| self.find_product(id))
    }

    pub fn favorite_products(&self) -> Vec<(&Favorite, &Product)> {
        self.favorites
            .iter()
            .filter_map(|f| self.find_product(&f.product_id).map(|p| (f, p)))
            .collect()
    }

    pub fn request_favorite(&mut self, product_id: &str) -> Result<(), WishlistError> {
        let product = self
            .find_product(product_id)
            .ok_or_else(|| WishlistError::UnknownProduct(product_id.to_string()))?;

        if self.is_favorite(product_id) {
            return Err(WishlistError::AlreadyFavorite(product.name.clone()));
        }

        debug!(product_id, "Asking to add product to favorites");
        self.pending_product_id = Some(product_id.to_string());
        Ok(())
    }

    /// Adds the pending product to the favorites and closes the prompt.
    pub fn confirm_pending(&mut self) -> Option<&Favorite> {
        let product_id = self.pending_product_id.take()?;
        let name = self.find_product(&product_id)?.name.clone();

        if self.is_favorite(&product_id) {
            return None;
        }

        info!(%product_id, "Added to favorites");
        self.favorites.push(Favorite::new(product_id));
        self.set_message(Message::success(format!("Added \"{}\" to favorites", name)));
        self.favorites.last()
    }

    pub fn dismiss_pending(&mut self) {
        if let Some(product_id) = self.pending_product_id.take() {
            debug!(%product_id, "Favorite prompt dismissed");
        }
    }

    pub fn remove_favorite(&mut self, product_id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.product_id != product_id);
        let removed = self.favorites.len() != before;

        if removed {
            info!(product_id, "Removed from favorites");
            if let Some(name) = self.find_product(product_id).map(|p| p.name.clone()) {
                self.set_message(Message::success(format!(
                    "Removed \"{}\" from favorites",
                    name
                )));
            }
        }
        removed
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(vec![
            Product::new("mug", "Camp Mug", 1_450),
            Product::new("lamp", "Desk Lamp", 6_900),
        ])
    }

    #[test]
    fn test_request_opens_prompt() {
        let mut state = state();
        assert!(state.pending_product().is_none());

        state.request_favorite("mug").unwrap();
        assert_eq!(state.pending_product().unwrap().name, "Camp Mug");
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_request_unknown_product() {
        let mut state = state();
        assert_eq!(
            state.request_favorite("kettle"),
            Err(WishlistError::UnknownProduct("kettle".to_string()))
        );
        assert!(state.pending_product_id.is_none());
    }

    #[test]
    fn test_confirm_adds_favorite_once() {
        let mut state = state();
        state.request_favorite("lamp").unwrap();

        let favorite = state.confirm_pending().cloned().unwrap();
        assert_eq!(favorite.product_id, "lamp");
        assert!(state.is_favorite("lamp"));
        assert!(state.pending_product_id.is_none());
        assert!(!state.message.as_ref().unwrap().is_error);

        assert!(state.confirm_pending().is_none());
        assert_eq!(state.favorites.len(), 1);
    }

    #[test]
    fn test_dismiss_closes_without_adding() {
        let mut state = state();
        state.request_favorite("mug").unwrap();
        state.dismiss_pending();

        assert!(state.pending_product_id.is_none());
        assert!(!state.is_favorite("mug"));
        assert!(state.message.is_none());
    }

    #[test]
    fn test_request_existing_favorite() {
        let mut state = state();
        state.request_favorite("mug").unwrap();
        state.confirm_pending();

        assert_eq!(
            state.request_favorite("mug"),
            Err(WishlistError::AlreadyFavorite("Camp Mug".to_string()))
        );
        assert!(state.pending_product_id.is_none());
    }

    #[test]
    fn test_remove_favorite() {
        let mut state = state();
        state.request_favorite("mug").unwrap();
        state.confirm_pending();
        state.clear_message();

        assert!(state.remove_favorite("mug"));
        assert!(!state.is_favorite("mug"));
        assert!(state.message.is_some());
        assert!(!state.remove_favorite("mug"));
    }

    #[test]
    fn test_favorite_products_keep_insertion_order() {
        let mut state = state();
        for id in ["lamp", "mug"] {
            state.request_favorite(id).unwrap();
            state.confirm_pending();
        }

        let favorites = state.favorite_products();
        let names: Vec<_> = favorites.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["Desk Lamp", "Camp Mug"]);

        let ids: Vec<_> = favorites.iter().map(|(f, _)| f.id).collect();
        assert_eq!(ids, state.favorites.iter().map(|f| f.id).collect::<Vec<_>>());
        assert_ne!(ids[0], ids[1]);
    }
}
