use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}

pub fn router() -> Router<DbPool> {
    Router::new().route("/", get(list_users).post(create_user))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List users", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(pool): State<DbPool>) -> AppResult<Json<ApiResponse<UserList>>> {
    let items = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(&pool)
        .await?;

    let meta = Meta::total(items.len() as i64);
    let data = UserList { items };
    Ok(Json(ApiResponse::success("Users", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Create user", body = ApiResponse<User>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    if payload.email.trim().is_empty() {
        return Err(AppError::BadRequest("email required".into()));
    }

    let user = sqlx::query_as::<_, User>("INSERT INTO users (email) VALUES ($1) RETURNING *")
        .bind(payload.email)
        .fetch_one(&pool)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created", user, Some(Meta::empty()))),
    ))
}
