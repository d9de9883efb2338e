//! Request payloads for the product endpoints and their validation.
//!
//! Bodies are read field by field as raw JSON so that an absent field, an
//! explicit `null` and a falsy value such as `stock: 0` stay distinguishable.
//! Type checks happen here, value checks go through [`validator`], and the
//! result is expressed in domain types.

use chrono::Utc;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, ProductPatch};
use crate::domain::types::{
    CategoryName, ImageUrl, ProductDescription, ProductName, ProductPrice, ProductStock,
    TypeConstraintError,
};

/// Fields a create request must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "price", "stock"];

/// Marks a field as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductFormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid data type: {0}")]
    InvalidType(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::InvalidValue(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::InvalidValue(value.to_string())
    }
}

/// Field values after type extraction, checked by `validator` before they are
/// turned into domain types. Absent fields are skipped.
#[derive(Debug, Default, Validate)]
struct ProductValues {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    name: Option<String>,
    #[validate(length(min = 1, message = "description cannot be empty"))]
    description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    price: Option<f64>,
    #[validate(range(min = 0, max = 2147483647, message = "stock must be between 0 and 2147483647"))]
    stock: Option<i64>,
}

fn text(value: Value, field: &'static str) -> Result<String, ProductFormError> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        _ => Err(ProductFormError::InvalidType(format!(
            "{field} must be a string"
        ))),
    }
}

/// Create-mode text: absent, null and blank all count as missing.
fn required_text(value: Option<Value>, field: &'static str) -> Result<String, ProductFormError> {
    match value {
        None | Some(Value::Null) => Err(ProductFormError::MissingField(field)),
        Some(value) => {
            let s = text(value, field)?;
            if s.is_empty() {
                Err(ProductFormError::MissingField(field))
            } else {
                Ok(s)
            }
        }
    }
}

fn number(value: Value, field: &'static str) -> Result<f64, ProductFormError> {
    value
        .as_f64()
        .ok_or_else(|| ProductFormError::InvalidType(format!("{field} must be a number")))
}

/// Whole numbers only. Whole numbers beyond `i64` are a value error, not a
/// type error.
fn integer(value: Value, field: &'static str) -> Result<i64, ProductFormError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    let n = number(value, field)?;
    if n.fract() != 0.0 || !n.is_finite() {
        return Err(ProductFormError::InvalidType(format!(
            "{field} must be an integer"
        )));
    }
    if n.abs() >= i64::MAX as f64 {
        return Err(ProductFormError::InvalidValue(format!(
            "{field} must be between 0 and {}",
            i32::MAX
        )));
    }
    Ok(n as i64)
}

/// Absent, null and blank image URLs all mean "no image".
fn image_url(value: Value) -> Result<Option<ImageUrl>, ProductFormError> {
    match value {
        Value::Null => Ok(None),
        value => Ok(ImageUrl::new(text(value, "imageUrl")?).ok()),
    }
}

/// Null and blank categories fall back to the default category.
fn category(value: Value) -> Result<CategoryName, ProductFormError> {
    match value {
        Value::Null => Ok(CategoryName::general()),
        value => Ok(CategoryName::new(text(value, "category")?).unwrap_or_default()),
    }
}

/// Boolean coercion by truthiness.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Body of `POST /api/products`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductForm {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub stock: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub is_active: Option<Value>,
}

/// Validated create request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductPayload {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub stock: ProductStock,
    pub image_url: Option<ImageUrl>,
    pub category: CategoryName,
    pub is_active: bool,
}

impl CreateProductPayload {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image_url: self.image_url,
            category: self.category,
            is_active: self.is_active,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<CreateProductForm> for CreateProductPayload {
    type Error = ProductFormError;

    fn try_from(form: CreateProductForm) -> Result<Self, Self::Error> {
        let name = required_text(form.name, "name")?;
        let description = required_text(form.description, "description")?;
        let price = form.price.ok_or(ProductFormError::MissingField("price"))?;
        let stock = form.stock.ok_or(ProductFormError::MissingField("stock"))?;

        let values = ProductValues {
            name: Some(name),
            description: Some(description),
            price: Some(number(price, "price")?),
            stock: Some(integer(stock, "stock")?),
        };
        values.validate()?;

        Ok(Self {
            name: ProductName::new(values.name.unwrap_or_default())?,
            description: ProductDescription::new(values.description.unwrap_or_default())?,
            price: ProductPrice::new(values.price.unwrap_or_default())?,
            stock: ProductStock::new(values.stock.unwrap_or_default() as i32)?,
            image_url: form.image_url.map(image_url).transpose()?.flatten(),
            category: form.category.map(category).transpose()?.unwrap_or_default(),
            is_active: form.is_active.as_ref().is_none_or(truthy),
        })
    }
}

/// Body of `PUT /api/products/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductForm {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub stock: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub is_active: Option<Value>,
}

impl TryFrom<UpdateProductForm> for ProductPatch {
    type Error = ProductFormError;

    fn try_from(form: UpdateProductForm) -> Result<Self, Self::Error> {
        let values = ProductValues {
            name: form.name.map(|v| text(v, "name")).transpose()?,
            description: form
                .description
                .map(|v| text(v, "description"))
                .transpose()?,
            price: form.price.map(|v| number(v, "price")).transpose()?,
            stock: form.stock.map(|v| integer(v, "stock")).transpose()?,
        };
        values.validate()?;

        Ok(Self {
            name: values.name.map(ProductName::new).transpose()?,
            description: values
                .description
                .map(ProductDescription::new)
                .transpose()?,
            price: values.price.map(ProductPrice::new).transpose()?,
            stock: values
                .stock
                .map(|stock| ProductStock::new(stock as i32))
                .transpose()?,
            image_url: form.image_url.map(image_url).transpose()?,
            category: form.category.map(category).transpose()?,
            is_active: form.is_active.as_ref().map(truthy),
        })
    }
}

/// Query string of the product listing endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQueryParams {
    pub category: Option<String>,
    pub is_active: Option<String>,
}

impl ProductsQueryParams {
    /// Parse the `isActive` flag. Only `"true"` and `"false"` are recognised.
    pub fn active_flag(&self) -> Option<bool> {
        match self.is_active.as_deref()? {
            "true" => Some(true),
            "false" => Some(false),
            other => {
                log::warn!("Ignoring unrecognised isActive filter value: {other:?}");
                None
            }
        }
    }
}
