use rust_decimal::Decimal;

use axum_wishlist_api::{config::AppConfig, db::create_pool};

const PRODUCTS: &[(&str, i64)] = &[
    ("Nintendo Switch", 1000),
    ("PS4", 400),
    ("Xbox", 500),
    ("Flour", 5),
];

const USERS: &[&str] = &[
    "bob@example.com",
    "karen@example.com",
    "dwight@example.com",
];

const WISHLISTS: &[(&str, &str, &[&str])] = &[
    (
        "Bobs Quarantine Wishlist",
        "bob@example.com",
        &["Nintendo Switch", "Flour"],
    ),
    ("Bobs Videogame List", "bob@example.com", &["PS4"]),
    ("Karens Top Food List", "karen@example.com", &["Xbox"]),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    clear_tables(&pool).await?;
    seed_products(&pool).await?;
    seed_users(&pool).await?;
    seed_wishlists(&pool).await?;

    println!("Seed completed");
    Ok(())
}

// Children before parents, per the foreign keys.
async fn clear_tables(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM wishlist_products").execute(pool).await?;
    sqlx::query("DELETE FROM wishlists").execute(pool).await?;
    sqlx::query("DELETE FROM users").execute(pool).await?;
    sqlx::query("DELETE FROM products").execute(pool).await?;
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for (name, price) in PRODUCTS {
        sqlx::query("INSERT INTO products (name, price) VALUES ($1, $2)")
            .bind(name)
            .bind(Decimal::from(*price))
            .execute(pool)
            .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_users(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for email in USERS {
        sqlx::query("INSERT INTO users (email) VALUES ($1)")
            .bind(email)
            .execute(pool)
            .await?;
    }

    println!("Seeded users");
    Ok(())
}

async fn seed_wishlists(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for (name, owner_email, product_names) in WISHLISTS {
        let (user_id,): (i32,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(owner_email)
            .fetch_one(pool)
            .await?;

        let (wishlist_id,): (i32,) = sqlx::query_as(
            "INSERT INTO wishlists (name, user_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        for product_name in *product_names {
            let (product_id,): (i32,) = sqlx::query_as("SELECT id FROM products WHERE name = $1")
                .bind(product_name)
                .fetch_one(pool)
                .await?;

            sqlx::query("INSERT INTO wishlist_products (wishlist_id, product_id) VALUES ($1, $2)")
                .bind(wishlist_id)
                .bind(product_id)
                .execute(pool)
                .await?;
        }
    }

    println!("Seeded wishlists");
    Ok(())
}
