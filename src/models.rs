use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Wishlist {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct WishlistProduct {
    pub wishlist_id: i32,
    pub product_id: i32,
}

/// One row of the wishlist_products/products join: the owning wishlist id
/// plus the referenced product's full columns.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct WishlistProductRow {
    pub wishlist_id: i32,
    #[sqlx(flatten)]
    pub product: Product,
}
