use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::orders::repo::{NewOrder, Order};

/// Request body for creating an order. The wire format keeps the storefront's
/// camelCase field names. Everything but `filmId` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub film_title: Option<String>,
    #[serde(default)]
    pub film_id: Option<i32>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub total: Option<Decimal>,
}

impl CreateOrderRequest {
    /// First failing presence rule wins; a zero or negative quantity counts
    /// as missing. `total` is taken verbatim, never derived.
    pub fn into_new_order(self) -> Result<NewOrder, &'static str> {
        let film_title = self
            .film_title
            .filter(|s| !s.trim().is_empty())
            .ok_or("Fill in all order fields")?;
        let format = self
            .format
            .filter(|s| !s.trim().is_empty())
            .ok_or("Fill in all order fields")?;
        let quantity = self
            .quantity
            .filter(|q| *q > 0)
            .ok_or("Fill in all order fields")?;
        let price = self.price.ok_or("Fill in all order fields")?;
        let total = self.total.ok_or("Fill in all order fields")?;

        Ok(NewOrder {
            film_title,
            film_id: self.film_id,
            format,
            quantity,
            price,
            total,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
pub struct CreatedOrderResponse {
    pub success: bool,
    pub order: Order,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> serde_json::Value {
        serde_json::json!({
            "filmTitle": "Stalker",
            "filmId": 1398,
            "format": "IMAX",
            "quantity": 2,
            "price": "12.50",
            "total": "25.00"
        })
    }

    #[test]
    fn accepts_a_complete_body() {
        let req: CreateOrderRequest = serde_json::from_value(full_body()).unwrap();
        let order = req.into_new_order().expect("valid order");
        assert_eq!(order.film_title, "Stalker");
        assert_eq!(order.film_id, Some(1398));
        assert_eq!(order.quantity, 2);
        assert_eq!(order.total, Decimal::new(2500, 2));
    }

    #[test]
    fn film_id_is_optional() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("filmId");
        let req: CreateOrderRequest = serde_json::from_value(body).unwrap();
        let order = req.into_new_order().expect("valid order");
        assert_eq!(order.film_id, None);
    }

    #[test]
    fn rejects_each_missing_required_field() {
        for field in ["filmTitle", "format", "quantity", "price", "total"] {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(field);
            let req: CreateOrderRequest = serde_json::from_value(body).unwrap();
            assert!(req.into_new_order().is_err(), "missing {field} must fail");
        }
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut body = full_body();
        body["quantity"] = serde_json::json!(0);
        let req: CreateOrderRequest = serde_json::from_value(body).unwrap();
        assert!(req.into_new_order().is_err());
    }

    #[test]
    fn rejects_blank_title() {
        let mut body = full_body();
        body["filmTitle"] = serde_json::json!("   ");
        let req: CreateOrderRequest = serde_json::from_value(body).unwrap();
        assert!(req.into_new_order().is_err());
    }
}
