use tienda_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_categories(&pool).await?;
    seed_products(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_categories(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for name in ["Apparel", "Mugs", "Stickers", "Books"] {
        sqlx::query("INSERT INTO categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(pool)
            .await?;
    }

    println!("Seeded categories");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let products = vec![
        ("Axum Hoodie", "Warm hoodie for Rustaceans", 550000_i64, "Apparel"),
        ("Ferris Mug", "Coffee tastes better with Ferris", 120000, "Mugs"),
        ("Rust Sticker Pack", "Decorate your laptop", 50000, "Stickers"),
        ("E-book: Async Rust", "Learn async Rust patterns", 250000, "Books"),
    ];

    for (name, desc, price, category) in products {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, price, category_id)
            SELECT $1, $2, $3, c.id FROM categories c WHERE c.name = $4
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(desc)
        .bind(price)
        .bind(category)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
