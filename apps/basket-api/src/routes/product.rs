//! Product catalog routes.

use axum::{Extension, Json};
use basket_core::Product;

use crate::state::AppState;

/// `GET /api/products` - the whole catalog, in seed order.
pub async fn list_products(Extension(state): Extension<AppState>) -> Json<Vec<Product>> {
    Json(state.cart_service.catalog().list_all().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[tokio::test]
    async fn test_list_products_in_seed_order() {
        let state = AppState::new(&ApiConfig::default()).unwrap();

        let Json(products) = list_products(Extension(state)).await;

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Mouse", "Keyboard", "Monitor", "Webcam"]);
        assert_eq!(products[3].price.cents(), 30_075);
    }
}
