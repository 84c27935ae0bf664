use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price_cents: u64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_cents,
        }
    }

    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Favorite {
    pub id: Uuid,
    pub product_id: String,
}

impl Favorite {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product_id.into(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    pub const MIN_WIDTH: u32 = 360;
    pub const MIN_HEIGHT: u32 = 320;

    /// Inner size in logical pixels, never below the minimum.
    pub fn clamped_size(&self) -> (u32, u32) {
        (
            self.width.max(Self::MIN_WIDTH),
            self.height.max(Self::MIN_HEIGHT),
        )
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wishlist".to_string(),
            width: 480,
            height: 560,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub log_level: String,
    pub catalog: Vec<Product>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::INFO)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_level: "info".to_string(),
            catalog: default_catalog(),
        }
    }
}

fn default_catalog() -> Vec<Product> {
    vec![
        Product::new("mug", "Enamel Camp Mug", 1_450),
        Product::new("notebook", "Dot Grid Notebook", 1_200),
        Product::new("lamp", "Brass Desk Lamp", 6_900),
        Product::new("scarf", "Merino Scarf", 3_875),
    ]
}
