use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected, Visitor},
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_quantity() -> u64 {
    1
}

struct PositiveIntegerVisitor;

impl Visitor<'_> for PositiveIntegerVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a positive integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    // JSON has a single number type, so `3.0` is the integer 3.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        if v.fract() == 0.0 && v >= 0.0 && v < u64::MAX as f64 {
            Ok(v as u64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

/// Accepts any JSON number with an integral value that fits in `u64`.
/// Zero passes here and is left to the `range(min = 1)` check.
fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    deserializer.deserialize_any(PositiveIntegerVisitor)
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(deserialize_with = "integer")]
    #[validate(range(min = 1, message = "productVariantId must be a positive integer"))]
    #[schema(minimum = 1)]
    pub product_variant_id: u64,

    /// Defaults to 1 when omitted.
    #[serde(default = "default_quantity", deserialize_with = "integer")]
    #[validate(range(min = 1, message = "quantity must be a positive integer"))]
    #[schema(default = 1, minimum = 1)]
    pub quantity: u64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    #[serde(deserialize_with = "integer")]
    #[validate(range(min = 1, message = "quantity must be a positive integer"))]
    #[schema(minimum = 1)]
    pub quantity: u64,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Path)]
pub struct CartItemPath {
    /// Cart item identifier
    #[validate(range(min = 1, message = "itemId must be a positive integer"))]
    pub item_id: u64,
}

/// The accepted cart change, echoed back to the caller.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItemChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_variant_id: Option<u64>,
    pub quantity: u64,
}

impl From<AddToCartRequest> for CartItemChange {
    fn from(req: AddToCartRequest) -> Self {
        Self {
            item_id: None,
            product_variant_id: Some(req.product_variant_id),
            quantity: req.quantity,
        }
    }
}

impl CartItemChange {
    pub fn updated(item_id: u64, req: UpdateCartItemRequest) -> Self {
        Self {
            item_id: Some(item_id),
            product_variant_id: None,
            quantity: req.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::field_errors;
    use serde_json::json;

    fn add(value: serde_json::Value) -> Result<AddToCartRequest, String> {
        let req: AddToCartRequest = serde_json::from_value(value).map_err(|e| e.to_string())?;
        req.validate().map_err(|e| e.to_string())?;
        Ok(req)
    }

    #[test]
    fn accepts_positive_integers() {
        for q in [1, 2, 17, 999, i64::MAX as u64, u64::MAX] {
            let req = add(json!({ "productVariantId": 42, "quantity": q })).unwrap();
            assert_eq!(req.product_variant_id, 42);
            assert_eq!(req.quantity, q);
        }
    }

    #[test]
    fn accepts_integers_beyond_i64() {
        let req = add(json!({ "productVariantId": 9223372036854775808u64 })).unwrap();
        assert_eq!(req.product_variant_id, 9_223_372_036_854_775_808);
    }

    #[test]
    fn accepts_integral_floats() {
        let req = add(json!({ "productVariantId": 3.0, "quantity": 1.0 })).unwrap();
        assert_eq!(req.product_variant_id, 3);
        assert_eq!(req.quantity, 1);
    }

    #[test]
    fn quantity_defaults_to_one() {
        let req = add(json!({ "productVariantId": 5 })).unwrap();
        assert_eq!(req.quantity, 1);
    }

    #[test]
    fn rejects_non_positive_values() {
        for (p, q) in [(0, 1), (-3, 1), (1, 0), (1, -1)] {
            assert!(add(json!({ "productVariantId": p, "quantity": q })).is_err());
        }
        assert!(add(json!({ "productVariantId": -1.0, "quantity": 1 })).is_err());
    }

    #[test]
    fn rejects_non_integer_values() {
        for body in [
            json!({ "productVariantId": 1.5, "quantity": 1 }),
            json!({ "productVariantId": "1", "quantity": 1 }),
            json!({ "productVariantId": 1, "quantity": 2.5 }),
            json!({ "productVariantId": 1, "quantity": true }),
            json!({ "productVariantId": 1, "quantity": null }),
            json!({ "productVariantId": 1e30, "quantity": 1 }),
            json!({ "quantity": 1 }),
        ] {
            assert!(add(body.clone()).is_err(), "accepted {body}");
        }
    }

    #[test]
    fn validation_reports_json_field_names() {
        let req: AddToCartRequest =
            serde_json::from_value(json!({ "productVariantId": 0, "quantity": 0 })).unwrap();
        let errors = req.validate().unwrap_err();
        let fields: Vec<String> = field_errors(&errors).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["productVariantId", "quantity"]);

        let path = CartItemPath { item_id: 0 };
        let errors = path.validate().unwrap_err();
        assert_eq!(field_errors(&errors)[0].field, "itemId");
    }

    #[test]
    fn update_requires_positive_quantity() {
        let ok: UpdateCartItemRequest = serde_json::from_value(json!({ "quantity": 3 })).unwrap();
        assert!(ok.validate().is_ok());

        let bad: UpdateCartItemRequest = serde_json::from_value(json!({ "quantity": 0 })).unwrap();
        assert!(bad.validate().is_err());

        assert!(serde_json::from_value::<UpdateCartItemRequest>(json!({})).is_err());
    }

    #[test]
    fn change_serializes_only_known_fields() {
        let change = CartItemChange::updated(9, UpdateCartItemRequest { quantity: 4 });
        assert_eq!(
            serde_json::to_value(change).unwrap(),
            json!({ "itemId": 9, "quantity": 4 })
        );
    }
}
