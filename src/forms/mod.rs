pub mod product;
pub mod rules;

pub use product::{ProductForm, ProductUpdateForm};
pub use rules::{FieldErrors, Input};
