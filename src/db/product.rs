use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i64) -> Result<Option<models::Product>, String> {
    tracing::info!("Fetch product {}", id);
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM products WHERE id = $1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch product, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM products ORDER BY id"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn search_by_name(pool: &PgPool, needle: &str) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Search products by name.", needle = %needle);
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT
            *
        FROM products
        WHERE name LIKE '%' || $1 || '%' ESCAPE '\'
        ORDER BY id
        "#,
    )
    .bind(escape_like(needle))
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to search products, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    product: models::NewProduct,
) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO products (
        name,
        description,
        price,
        stock,
        created_at,
        updated_at
        )
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(product.name)
    .bind(product.description)
    .bind(product.price)
    .bind(product.stock)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|product| {
        tracing::info!("New product {} has been saved", product.id);
        product
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    changes: models::ProductChanges,
) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Updating product", id);
    let replace_description = changes.description.is_some();
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE products
        SET
            name=$2,
            price=$3,
            description=CASE WHEN $4 THEN $5 ELSE description END,
            updated_at=NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(changes.name)
    .bind(changes.price)
    .bind(replace_description)
    .bind(changes.description.flatten())
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete product.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, String> {
    tracing::info!("Delete product {}", id);
    sqlx::query::<sqlx::Postgres>("DELETE FROM products WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product: {:?}", err);
            "Failed to delete product".to_string()
        })
}

// Makes `%`, `_` and `\` match literally inside LIKE.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
