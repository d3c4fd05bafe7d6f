use rust_decimal::Decimal;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::ProductError;

/// Largest price a NUMERIC(14,2) column can hold, exclusive.
const PRICE_LIMIT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0); // 10^12

/// Product categories.
///
/// Serialized by name in upper case, and stored in the PostgreSQL enum type
/// `category` with the same labels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Category {
    #[default]
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
    #[sea_orm(string_value = "CLOTHS")]
    Cloths,
    #[sea_orm(string_value = "FOOD")]
    Food,
    #[sea_orm(string_value = "HOUSEWARES")]
    Housewares,
    #[sea_orm(string_value = "AUTOMOTIVE")]
    Automotive,
    #[sea_orm(string_value = "TOOLS")]
    Tools,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Exact, case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_string() == name)
    }
}

/// A catalog product as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by storage on create
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hammer")]
    pub name: String,
    #[schema(example = "Claw hammer with fibreglass handle")]
    pub description: Option<String>,
    /// Decimal encoded as a string to keep exact cents
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    pub fn from_new(id: i32, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            available: input.available,
            category: input.category,
        }
    }

    /// Full replace of every field except `id`.
    pub fn apply(&mut self, input: NewProduct) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.available = input.available;
        self.category = input.category;
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("negative_price")
            .with_message("price must not be negative".into()));
    }
    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("price_precision")
            .with_message("price must have at most 2 decimal places".into()));
    }
    if *price >= PRICE_LIMIT {
        return Err(ValidationError::new("price_too_large")
            .with_message("price must be below 1000000000000".into()));
    }
    Ok(())
}

/// Body of create and update requests.
///
/// `id` is never read from the body; any value sent is ignored. The price
/// is accepted either as a string (`"12.50"`) or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Hammer", min_length = 1, max_length = 100)]
    pub name: String,

    #[validate(length(max = 250))]
    #[serde(default)]
    #[schema(max_length = 250)]
    pub description: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,

    pub available: bool,

    pub category: Category,
}

/// Which products a listing returns. At most one criterion applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductFilter {
    #[default]
    All,
    Name(String),
    Category(Category),
    Available(bool),
}

/// Raw query string of `GET /products`.
///
/// When several parameters are given only one is used, in the order
/// `name`, `category`, `available`. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact product name
    pub name: Option<String>,
    /// Category name, e.g. `TOOLS`
    pub category: Option<String>,
    /// `true` or `false`, case-insensitive
    pub available: Option<String>,
}

impl TryFrom<ProductQuery> for ProductFilter {
    type Error = ProductError;

    fn try_from(query: ProductQuery) -> Result<Self, Self::Error> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        if let Some(name) = present(query.name) {
            return Ok(ProductFilter::Name(name));
        }

        if let Some(raw) = present(query.category) {
            let category = Category::from_name(&raw).ok_or_else(|| {
                let expected: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
                ProductError::InvalidFilter(format!(
                    "Invalid category '{}'. Expected one of: {}",
                    raw,
                    expected.join(", ")
                ))
            })?;
            return Ok(ProductFilter::Category(category));
        }

        if let Some(raw) = present(query.available) {
            let available = raw.to_ascii_lowercase().parse::<bool>().map_err(|_| {
                ProductError::InvalidFilter(format!(
                    "Invalid value '{}' for available. Must be true or false.",
                    raw
                ))
            })?;
            return Ok(ProductFilter::Available(available));
        }

        Ok(ProductFilter::All)
    }
}
