//! Presentational card for a single product.
//!
//! A card holds no state and performs no I/O. Its two triggers return a
//! `CardIntent` value that the page consumes.

use std::fmt;

use crate::types::{Product, ProductId};

/// What the user asked for on a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardIntent {
    Edit(Product),
    Delete(ProductId),
}

#[derive(Debug, Clone, Copy)]
pub struct ProductCard<'a> {
    product: &'a Product,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self { product }
    }

    pub fn edit(&self) -> CardIntent {
        CardIntent::Edit(self.product.clone())
    }

    pub fn delete(&self) -> CardIntent {
        CardIntent::Delete(self.product.id.clone())
    }
}

impl fmt::Display for ProductCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.product.name)?;
        writeln!(f, "  ${}", self.product.price)?;
        writeln!(f, "  {}", self.product.description)?;
        write!(f, "  [Edit] [Delete]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn widget() -> Product {
        Product {
            id: ProductId::Number(5),
            name: "Widget".to_string(),
            price: Price::new(9.9),
            description: "A small widget".to_string(),
        }
    }

    #[test]
    fn renders_name_price_and_description() {
        let product = widget();
        let text = ProductCard::new(&product).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Widget");
        assert_eq!(lines[1], "  $9.90");
        assert_eq!(lines[2], "  A small widget");
        assert!(lines[3].contains("Edit"));
        assert!(lines[3].contains("Delete"));
    }

    #[test]
    fn edit_carries_the_whole_product() {
        let product = widget();
        assert_eq!(ProductCard::new(&product).edit(), CardIntent::Edit(product.clone()));
    }

    #[test]
    fn delete_carries_only_the_id() {
        let product = widget();
        assert_eq!(
            ProductCard::new(&product).delete(),
            CardIntent::Delete(ProductId::Number(5))
        );
    }
}
