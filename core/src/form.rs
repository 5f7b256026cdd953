//! Create/edit form state.
//!
//! Fields are kept exactly as typed. Conversion to a `ProductInput` happens
//! on submit, and only the price is checked client side; everything else is
//! left for the server to judge.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;
use crate::types::{Price, Product, ProductInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Description,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "price" => Ok(FormField::Price),
            "description" | "desc" => Ok(FormField::Description),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
        }
    }

    pub fn to_input(&self) -> Result<ProductInput, ApiError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| ApiError::validation("Price must be a number."))?;
        Ok(ProductInput {
            name: self.name.clone(),
            price: Price::new(price),
            description: self.description.clone(),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
        }
    }
}

impl fmt::Display for ProductForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  name:        {}", self.name)?;
        writeln!(f, "  price:       {}", self.price)?;
        write!(f, "  description: {}", self.description)
    }
}
