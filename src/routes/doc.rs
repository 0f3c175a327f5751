use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    aggregate::WishlistWithProducts,
    models::{Product, User, Wishlist, WishlistProduct},
    response::{ApiResponse, Meta},
    routes::{health, products, users, wishlists},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::create_user,
        products::list_products,
        products::create_product,
        wishlists::list_wishlists,
        wishlists::create_wishlist,
        wishlists::add_wishlist_product
    ),
    components(
        schemas(
            User,
            Product,
            Wishlist,
            WishlistProduct,
            WishlistWithProducts,
            users::UserList,
            users::CreateUserRequest,
            products::ProductList,
            products::CreateProductRequest,
            wishlists::WishlistList,
            wishlists::CreateWishlistRequest,
            wishlists::AddWishlistProductRequest,
            Meta,
            ApiResponse<User>,
            ApiResponse<Product>,
            ApiResponse<Wishlist>,
            ApiResponse<users::UserList>,
            ApiResponse<products::ProductList>,
            ApiResponse<wishlists::WishlistList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Wishlists", description = "Wishlist endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
