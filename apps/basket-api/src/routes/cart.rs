//! # Cart Routes
//!
//! HTTP bindings for the cart engine. Every route works on the configured
//! user key and answers with a [`CartView`] (or a checkout summary).
//!
//! ```text
//! POST /api/cart/add                  { "productId": 2, "quantity": 3 }
//! POST /api/cart/remove/:productId    ?quantity=1 (default)
//! GET  /api/cart
//! POST /api/cart/checkout
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::{Extension, Json};
use basket_core::validation::validate_quantity;
use basket_core::{
    Cart, CartLineItem, CheckoutSummary, CoreError, Money, ProductId, ValidationError,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::DEFAULT_REMOVE_QUANTITY;
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Body of `POST /api/cart/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl AddToCartRequest {
    /// Rejects non-positive quantities before the engine is reached.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_quantity(self.quantity)
    }
}

/// Query string of `POST /api/cart/remove/:productId`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveParams {
    #[serde(default = "default_remove_quantity")]
    pub quantity: i64,
}

fn default_remove_quantity() -> i64 {
    DEFAULT_REMOVE_QUANTITY
}

// =============================================================================
// Response Types
// =============================================================================

/// A cart as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItemView>,
    pub totals: CartTotals,
}

/// A line item plus its derived subtotal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    #[serde(flatten)]
    pub item: CartLineItem,
    pub subtotal: Money,
}

/// Aggregates derived from the cart's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
}

impl TryFrom<Cart> for CartView {
    type Error = CoreError;

    fn try_from(cart: Cart) -> Result<Self, Self::Error> {
        let totals = CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.total()?,
        };

        let items = cart
            .into_items()
            .into_iter()
            .map(|item| {
                let subtotal = item.subtotal().ok_or(CoreError::AmountOverflow {
                    what: "line subtotal",
                })?;
                Ok(LineItemView { item, subtotal })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(CartView { items, totals })
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /api/cart/add`
pub async fn add_to_cart(
    Extension(state): Extension<AppState>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<CartView>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    request.validate()?;

    let cart = state
        .cart_service
        .add_to_cart(&state.user_key, request.product_id, request.quantity)?;

    Ok(Json(CartView::try_from(cart)?))
}

/// `POST /api/cart/remove/:productId`
pub async fn remove_from_cart(
    Extension(state): Extension<AppState>,
    path: Result<Path<ProductId>, PathRejection>,
    query: Result<Query<RemoveParams>, QueryRejection>,
) -> Result<Json<CartView>, ApiError> {
    let Path(product_id) = path.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let Query(params) = query.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    let cart = state
        .cart_service
        .remove_from_cart(&state.user_key, product_id, params.quantity)?;

    Ok(Json(CartView::try_from(cart)?))
}

/// `GET /api/cart`
pub async fn get_cart(Extension(state): Extension<AppState>) -> Result<Json<CartView>, ApiError> {
    let cart = state.cart_service.get_cart(&state.user_key)?;
    Ok(Json(CartView::try_from(cart)?))
}

/// `POST /api/cart/checkout`
pub async fn checkout(
    Extension(state): Extension<AppState>,
) -> Result<Json<CheckoutSummary>, ApiError> {
    let summary = state.cart_service.checkout(&state.user_key)?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ErrorCode;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn state() -> AppState {
        AppState::new(&ApiConfig::default()).unwrap()
    }

    fn add_request(product_id: ProductId, quantity: i64) -> Result<Json<AddToCartRequest>, JsonRejection> {
        Ok(Json(AddToCartRequest {
            product_id,
            quantity,
        }))
    }

    fn remove_query(quantity: i64) -> Result<Query<RemoveParams>, QueryRejection> {
        Ok(Query(RemoveParams { quantity }))
    }

    #[test]
    fn test_request_validation() {
        let ok = AddToCartRequest {
            product_id: 1,
            quantity: 1,
        };
        let zero = AddToCartRequest {
            product_id: 1,
            quantity: 0,
        };

        assert!(ok.validate().is_ok());
        assert_eq!(
            zero.validate().unwrap_err().to_string(),
            "Quantity must be positive."
        );
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: AddToCartRequest =
            serde_json::from_str(r#"{"productId": 4, "quantity": 2}"#).unwrap();
        assert_eq!(request.product_id, 4);
        assert_eq!(request.quantity, 2);
    }

    #[test]
    fn test_remove_params_default_quantity() {
        let params: RemoveParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.quantity, 1);
    }

    #[tokio::test]
    async fn test_add_returns_view_with_totals() {
        let state = state();

        let Json(first) = add_to_cart(Extension(state.clone()), add_request(1, 1))
            .await
            .unwrap();
        assert_eq!(first.totals.subtotal, Money::from_cents(120_000));

        let Json(view) = add_to_cart(Extension(state.clone()), add_request(2, 2))
            .await
            .unwrap();

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.totals.item_count, 2);
        assert_eq!(view.totals.total_quantity, 3);
        assert_eq!(view.totals.subtotal, Money::from_cents(125_100));
        assert_eq!(view.items[1].subtotal, Money::from_cents(5_100));
    }

    #[tokio::test]
    async fn test_add_rejects_bad_input() {
        let state = state();

        let err = add_to_cart(Extension(state.clone()), add_request(1, 0))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(Extension(state.clone()), add_request(999, 1))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product with ID 999 not found.");

        let Json(view) = get_cart(Extension(state)).await.unwrap();
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn test_remove_decrements_then_drops_line() {
        let state = state();
        let Json(view) = add_to_cart(Extension(state.clone()), add_request(3, 2))
            .await
            .unwrap();
        assert_eq!(view.totals.total_quantity, 2);

        let Json(view) = remove_from_cart(Extension(state.clone()), Ok(Path(3)), remove_query(1))
            .await
            .unwrap();
        assert_eq!(view.totals.total_quantity, 1);

        let Json(view) = remove_from_cart(Extension(state.clone()), Ok(Path(3)), remove_query(5))
            .await
            .unwrap();
        assert!(view.items.is_empty());
        assert_eq!(view.totals.subtotal, Money::zero());
    }

    #[tokio::test]
    async fn test_remove_absent_product_is_noop() {
        let state = state();
        let Json(before) = add_to_cart(Extension(state.clone()), add_request(5, 1))
            .await
            .unwrap();

        let Json(view) = remove_from_cart(Extension(state.clone()), Ok(Path(2)), remove_query(1))
            .await
            .unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].item, before.items[0].item);
        assert_eq!(view.totals, before.totals);
    }

    #[tokio::test]
    async fn test_remove_rejects_non_positive_quantity() {
        let err = remove_from_cart(Extension(state()), Ok(Path(1)), remove_query(0))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_checkout_clears_cart() {
        let state = state();
        let Json(view) = add_to_cart(Extension(state.clone()), add_request(4, 2))
            .await
            .unwrap();
        assert_eq!(view.totals.subtotal, Money::from_cents(60_150));

        let Json(summary) = checkout(Extension(state.clone())).await.unwrap();
        assert_eq!(summary.total_cost, Money::from_cents(60_150));
        assert_eq!(summary.confirmation_message, "Payment Successful. Order processed.");

        let Json(view) = get_cart(Extension(state)).await.unwrap();
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_checkout_response() {
        let err = checkout(Extension(state())).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INVALID_STATE");
        assert_eq!(body["message"], "Cannot checkout with an empty cart.");
    }

    #[tokio::test]
    async fn test_view_serialization() {
        let state = state();
        let Json(view) = add_to_cart(Extension(state), add_request(2, 2))
            .await
            .unwrap();

        let json = serde_json::to_value(&view).unwrap();
        let line = &json["items"][0];
        assert_eq!(line["productId"], 2);
        assert_eq!(line["productName"], "Mouse");
        assert_eq!(line["priceAtAdd"], 25.5);
        assert_eq!(line["subtotal"], 51.0);
        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["totals"]["totalQuantity"], 2);
        assert_eq!(json["totals"]["subtotal"], 51.0);
    }
}
