use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Order record in the database. `total` is stored exactly as the client
/// supplied it; the server never recomputes it from quantity and price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub film_title: String,
    pub film_id: Option<i32>,
    pub format: String,
    pub quantity: i32,
    pub price: Decimal,
    pub total: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Fields of a new order, owner excluded; the owner id always comes from
/// the verified session claims.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub film_title: String,
    pub film_id: Option<i32>,
    pub format: String,
    pub quantity: i32,
    pub price: Decimal,
    pub total: Decimal,
}

impl Order {
    /// All orders owned by the user, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: i32) -> anyhow::Result<Vec<Order>> {
        let rows = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, film_title, film_id, format, quantity, price, total, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, user_id: i32, order: NewOrder) -> anyhow::Result<Order> {
        let row = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, film_title, film_id, format, quantity, price, total)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, film_title, film_id, format, quantity, price, total, created_at
            "#,
        )
        .bind(user_id)
        .bind(&order.film_title)
        .bind(order.film_id)
        .bind(&order.format)
        .bind(order.quantity)
        .bind(order.price)
        .bind(order.total)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_with_decimal_money() {
        let order = Order {
            id: 1,
            user_id: 42,
            film_title: "Solaris".into(),
            film_id: Some(593),
            format: "IMAX".into(),
            quantity: 2,
            price: Decimal::new(1250, 2),
            total: Decimal::new(2500, 2),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["film_title"], "Solaris");
        assert_eq!(json["price"], "12.50");
        assert_eq!(json["total"], "25.00");
    }

    #[test]
    fn optional_film_id_serializes_as_null() {
        let order = Order {
            id: 2,
            user_id: 42,
            film_title: "Local premiere".into(),
            film_id: None,
            format: "2D".into(),
            quantity: 1,
            price: Decimal::new(900, 2),
            total: Decimal::new(900, 2),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json["film_id"].is_null());
    }
}
