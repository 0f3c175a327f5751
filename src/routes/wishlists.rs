use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    aggregate::{WishlistWithProducts, attach_products},
    db::DbPool,
    error::{AppError, AppResult},
    models::{Wishlist, WishlistProduct, WishlistProductRow},
    response::{ApiResponse, Meta},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct WishlistListQuery {
    pub user_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWishlistRequest {
    pub name: String,
    pub user_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddWishlistProductRequest {
    pub wishlist_id: i32,
    pub product_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistList {
    pub items: Vec<WishlistWithProducts>,
}

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/wishlists", get(list_wishlists).post(create_wishlist))
        .route("/wishlist_products", post(add_wishlist_product))
}

#[utoipa::path(
    get,
    path = "/api/wishlists",
    params(
        ("user_id" = i32, Query, description = "Owner of the wishlists")
    ),
    responses(
        (status = 200, description = "List wishlists with their products", body = ApiResponse<WishlistList>),
        (status = 400, description = "user_id missing")
    ),
    tag = "Wishlists"
)]
pub async fn list_wishlists(
    State(pool): State<DbPool>,
    Query(query): Query<WishlistListQuery>,
) -> AppResult<Json<ApiResponse<WishlistList>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id required".into()))?;

    let wishlists =
        sqlx::query_as::<_, Wishlist>("SELECT * FROM wishlists WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&pool)
            .await?;

    let ids: Vec<i32> = wishlists.iter().map(|w| w.id).collect();
    let rows = sqlx::query_as::<_, WishlistProductRow>(
        r#"
        SELECT wp.wishlist_id, p.id, p.name, p.price
        FROM wishlist_products wp
        JOIN products p ON p.id = wp.product_id
        WHERE wp.wishlist_id = ANY($1)
        ORDER BY p.id
        "#,
    )
    .bind(ids)
    .fetch_all(&pool)
    .await?;

    let items = attach_products(wishlists, rows);

    let meta = Meta::total(items.len() as i64);
    let data = WishlistList { items };
    Ok(Json(ApiResponse::success("Wishlists", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/wishlists",
    request_body = CreateWishlistRequest,
    responses(
        (status = 201, description = "Create wishlist", body = ApiResponse<Wishlist>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Wishlists"
)]
pub async fn create_wishlist(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateWishlistRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Wishlist>>)> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name required".into()));
    }

    let user_exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
        .bind(payload.user_id)
        .fetch_optional(&pool)
        .await?;

    if user_exists.is_none() {
        return Err(AppError::BadRequest("User not found".into()));
    }

    let wishlist = sqlx::query_as::<_, Wishlist>(
        "INSERT INTO wishlists (name, user_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(payload.name)
    .bind(payload.user_id)
    .fetch_one(&pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Wishlist created",
            wishlist,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/wishlist_products",
    request_body = AddWishlistProductRequest,
    responses(
        (status = 201, description = "Added product to wishlist", body = ApiResponse<WishlistProduct>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Wishlists"
)]
pub async fn add_wishlist_product(
    State(pool): State<DbPool>,
    Json(payload): Json<AddWishlistProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<WishlistProduct>>)> {
    let wishlist_exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM wishlists WHERE id = $1")
        .bind(payload.wishlist_id)
        .fetch_optional(&pool)
        .await?;

    if wishlist_exists.is_none() {
        return Err(AppError::BadRequest("Wishlist not found".into()));
    }

    let product_exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
        .bind(payload.product_id)
        .fetch_optional(&pool)
        .await?;

    if product_exists.is_none() {
        return Err(AppError::BadRequest("Product not found".into()));
    }

    // Duplicates are allowed; the join table has no uniqueness constraint.
    let entry = sqlx::query_as::<_, WishlistProduct>(
        r#"
        INSERT INTO wishlist_products (wishlist_id, product_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(payload.wishlist_id)
    .bind(payload.product_id)
    .fetch_one(&pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Added product to wishlist",
            entry,
            Some(Meta::empty()),
        )),
    ))
}
