use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use tienda_api::{
    db::{create_orm_conn, create_pool},
    entity::{categories::ActiveModel as CategoryActive, products::ActiveModel as ProductActive},
    error::AppError,
    services::{category_service, product_service},
    state::AppState,
};

// Integration flow: seed a small catalog, then exercise the listing and
// detail queries, including the missing-id case.
#[tokio::test]
async fn catalog_listing_and_detail_flow() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };

    let books = create_category(&state, "Books").await?;
    let mugs = create_category(&state, "Mugs").await?;

    let novel = create_product(&state, "Novel", 1500, books).await?;
    let cookbook = create_product(&state, "Cookbook", 2500, books).await?;
    let mug = create_product(&state, "Plain Mug", 900, mugs).await?;

    // Every seeded row comes back exactly once.
    let categories = category_service::list_categories(&state)
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(categories.len(), 2);
    assert!(categories.iter().any(|c| c.id == books && c.name == "Books"));
    assert!(categories.iter().any(|c| c.id == mugs && c.name == "Mugs"));

    let products = product_service::list_products(&state)
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(products.len(), 3);
    for id in [novel, cookbook, mug] {
        assert_eq!(products.iter().filter(|p| p.id == id).count(), 1);
    }

    // Categories come embedded via the eager load.
    let listed_novel = products.iter().find(|p| p.id == novel).unwrap();
    assert_eq!(listed_novel.category.as_ref().unwrap().name, "Books");

    let found = product_service::get_product(&state, mug).await?.data.unwrap();
    assert_eq!(found.name, "Plain Mug");
    assert_eq!(found.category.as_ref().unwrap().id, mugs);

    let err = product_service::get_product(&state, mug + 1000)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

async fn setup_state() -> anyhow::Result<Option<AppState>> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration tests."
                );
                return Ok(None);
            }
        };

    let pool = create_pool(&database_url).await?;
    let orm = create_orm_conn(&database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs
    sqlx::query(
        "TRUNCATE TABLE wishlist_items, wishlists, audit_logs, products, categories RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(Some(AppState { pool, orm }))
}

async fn create_category(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let category = CategoryActive {
        id: NotSet,
        name: Set(name.to_string()),
    }
    .insert(&state.orm)
    .await?;

    Ok(category.id)
}

async fn create_product(
    state: &AppState,
    name: &str,
    price: i64,
    category_id: i32,
) -> anyhow::Result<i32> {
    let product = ProductActive {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(None),
        price: Set(price),
        category_id: Set(category_id),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(product.id)
}
