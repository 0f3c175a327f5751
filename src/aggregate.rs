//! Groups flat wishlist/product join rows into nested wishlist responses.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Product, Wishlist, WishlistProductRow};

/// A wishlist decorated with the products its join rows reference.
///
/// `products` is always present in the serialized form; a wishlist without
/// any join rows carries an empty array rather than a missing or null field.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WishlistWithProducts {
    #[serde(flatten)]
    pub wishlist: Wishlist,
    pub products: Vec<Product>,
}

/// Attach each wishlist's products from pre-joined rows.
///
/// `rows` must already be filtered to the given wishlists and sorted in the
/// order the products should appear (the callers order by product id); this
/// function only groups, it never sorts. Output preserves the order of
/// `wishlists`, and per-wishlist product order follows `rows`. A row whose
/// `wishlist_id` matches none of the wishlists is dropped.
pub fn attach_products(
    wishlists: Vec<Wishlist>,
    rows: Vec<WishlistProductRow>,
) -> Vec<WishlistWithProducts> {
    let mut grouped: HashMap<i32, Vec<Product>> = HashMap::new();
    for row in rows {
        grouped.entry(row.wishlist_id).or_default().push(row.product);
    }

    wishlists
        .into_iter()
        .map(|wishlist| {
            let products = grouped.remove(&wishlist.id).unwrap_or_default();
            WishlistWithProducts { wishlist, products }
        })
        .collect()
}
