use crate::forms::rules::{self, FieldErrors, Input};
use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

/// Body of `POST /products`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductForm {
    #[serde(default)]
    #[validate(custom(|v| rules::required(v, "name")))]
    #[validate(custom(|v| rules::string(v, "name")))]
    #[validate(max_length = 255, message = "The name field must not be greater than 255 characters.")]
    pub name: Input<String>,
    #[serde(default)]
    #[validate(custom(|v| rules::string(v, "description")))]
    pub description: Input<String>,
    #[serde(default)]
    #[validate(custom(|v| rules::required(v, "price")))]
    #[validate(custom(|v| rules::numeric(v, "price")))]
    #[validate(minimum = 0.0, message = "The price field must be at least 0.")]
    pub price: Input<f64>,
    #[serde(default)]
    #[validate(custom(|v| rules::required(v, "stock")))]
    #[validate(custom(|v| rules::numeric(v, "stock")))]
    #[validate(minimum = 0.0, message = "The stock field must be at least 0.")]
    pub stock: Input<f64>,
}

impl ProductForm {
    pub fn from_body(body: &[u8]) -> Result<Self, FieldErrors> {
        let form: Self = rules::parse_body(body);
        form.validate()?;
        Ok(form)
    }
}

impl From<ProductForm> for models::NewProduct {
    fn from(form: ProductForm) -> Self {
        models::NewProduct {
            name: form.name.into_value().unwrap_or_default(),
            description: form.description.into_value(),
            price: form.price.into_value().unwrap_or_default(),
            stock: form.stock.into_value().unwrap_or_default(),
        }
    }
}

/// Body of `PUT /products/{id}`. Stock is neither validated nor applied.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductUpdateForm {
    #[serde(default)]
    #[validate(custom(|v| rules::required(v, "name")))]
    #[validate(custom(|v| rules::string(v, "name")))]
    #[validate(max_length = 255, message = "The name field must not be greater than 255 characters.")]
    pub name: Input<String>,
    #[serde(default)]
    #[validate(custom(|v| rules::string(v, "description")))]
    pub description: Input<String>,
    #[serde(default)]
    #[validate(custom(|v| rules::required(v, "price")))]
    #[validate(custom(|v| rules::numeric(v, "price")))]
    #[validate(minimum = 0.0, message = "The price field must be at least 0.")]
    pub price: Input<f64>,
}

impl ProductUpdateForm {
    pub fn from_body(body: &[u8]) -> Result<Self, FieldErrors> {
        let form: Self = rules::parse_body(body);
        form.validate()?;
        Ok(form)
    }
}

impl From<ProductUpdateForm> for models::ProductChanges {
    fn from(form: ProductUpdateForm) -> Self {
        // absent keeps the stored description, null clears it
        let description = match form.description {
            Input::Missing => None,
            other => Some(other.into_value()),
        };

        models::ProductChanges {
            name: form.name.into_value().unwrap_or_default(),
            description,
            price: form.price.into_value().unwrap_or_default(),
        }
    }
}
