use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Category, NewProduct, Product};

/// Sea-ORM entity for the `products` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Model {
    /// OpenAPI tag shared by every product route.
    pub const TAG: &'static str = "Products";
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            available: model.available,
            category: model.category,
        }
    }
}

/// Insert model; the id is left to the database sequence.
impl From<NewProduct> for ActiveModel {
    fn from(input: NewProduct) -> Self {
        Self {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            available: Set(input.available),
            category: Set(input.category),
        }
    }
}

/// Full-replace update model for the row `id`.
pub fn replacement(id: i32, input: NewProduct) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        ..ActiveModel::from(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn hammer() -> NewProduct {
        NewProduct {
            name: "Hammer".into(),
            description: None,
            price: Decimal::from_str("12.50").unwrap(),
            available: true,
            category: Category::Tools,
        }
    }

    #[test]
    fn test_insert_model_leaves_id_unset() {
        let active: ActiveModel = hammer().into();
        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Hammer".to_string()));
        assert_eq!(active.category, Set(Category::Tools));
    }

    #[test]
    fn test_replacement_sets_id() {
        let active = replacement(7, hammer());
        assert_eq!(active.id, Set(7));
        assert_eq!(active.available, Set(true));
    }

    #[test]
    fn test_model_into_product() {
        let model = Model {
            id: 3,
            name: "Soup".into(),
            description: Some("Tomato".into()),
            price: Decimal::from_str("1.99").unwrap(),
            available: false,
            category: Category::Food,
        };
        let product: Product = model.into();
        assert_eq!(product.id, 3);
        assert_eq!(product.description.as_deref(), Some("Tomato"));
        assert_eq!(product.category, Category::Food);
    }
}
