use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Facilitator, Image};
use crate::{ComputedPrice, ContentId, calculate_price};

/// A store item: a game or training kit sold through an external platform.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    /// Base price. Always finite and non-negative.
    pub price: f64,
    /// Discount percentage in `[0, 100]`, `None` when the item is not on sale.
    pub discount: Option<f64>,
    pub best_seller: bool,
    pub cover_image: Option<Image>,
    pub images: Vec<Image>,
    pub features: Vec<Feature>,
    pub reviews: Vec<Review>,
    pub facilitator: Option<Facilitator>,
    /// Outbound checkout link on the sales platform.
    pub purchase_url: Option<String>,
}

impl Game {
    /// Title shown when the source carries none.
    pub const PLACEHOLDER_TITLE: &'static str = "Sin título";

    /// Display price for this item.
    #[must_use]
    pub fn computed_price(&self) -> ComputedPrice {
        calculate_price(self.price, self.discount)
    }

    #[must_use]
    pub fn has_purchase_link(&self) -> bool {
        self.purchase_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Review {
    pub text: String,
    pub rating: f64,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(price: f64, discount: Option<f64>) -> Game {
        Game {
            id: ContentId::Numeric(1),
            title: "Quiz Master".into(),
            description: String::new(),
            price,
            discount,
            best_seller: false,
            cover_image: None,
            images: Vec::new(),
            features: Vec::new(),
            reviews: Vec::new(),
            facilitator: None,
            purchase_url: None,
        }
    }

    #[test]
    fn computed_price_uses_discount() {
        let price = game(200.0, Some(25.0)).computed_price();
        assert!(price.has_discount);
        assert!((price.final_price - 150.0).abs() < 1e-9);
    }

    #[test]
    fn empty_purchase_url_is_not_a_link() {
        let mut g = game(10.0, None);
        assert!(!g.has_purchase_link());
        g.purchase_url = Some(String::new());
        assert!(!g.has_purchase_link());
        g.purchase_url = Some("https://pay.hotmart.com/X1".into());
        assert!(g.has_purchase_link());
    }
}
