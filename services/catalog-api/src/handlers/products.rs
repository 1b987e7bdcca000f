//! Product handlers (list, get, create, update, delete)

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_db::ProductRepository;
use catalog_types::{MessageResponse, Product, ProductFields, ProductId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body for create and full update
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(
        required(message = "Name field is required"),
        length(min = 1, max = 50, message = "Name must be between 1 and 50 characters")
    )]
    pub name: Option<String>,

    #[validate(required(message = "Price field is required"))]
    pub price: Option<i64>,
}

impl ProductRequest {
    fn into_fields(self) -> ApiResult<ProductFields> {
        match (self.name, self.price) {
            (Some(name), Some(price)) => Ok(ProductFields { name, price }),
            // validate() has already rejected missing fields
            _ => Err(ApiError::invalid_body("incomplete product")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductMessageResponse {
    pub message: &'static str,
    pub product: Product,
}

/// Non-integer ids never match a product
fn product_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<ProductId> {
    path.map(|Path(id)| ProductId(id))
        .map_err(|_| ApiError::NotFound("Product"))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.products.list().await?;
    Ok(Json(products.into_iter().map(Product::from).collect()))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = product_id(path)?;

    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(product.into()))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductMessageResponse>)> {
    let product = state.products.create(req.into_fields()?).await?;
    tracing::info!(product_id = product.id, by = %user.username, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductMessageResponse {
            message: "Product created successfully",
            product: product.into(),
        }),
    ))
}

/// PUT /products/{id}
///
/// A missing product is reported before the body is looked at.
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    user: AuthUser,
    body: Result<ValidatedJson<ProductRequest>, ApiError>,
) -> ApiResult<Json<ProductMessageResponse>> {
    let id = product_id(path)?;

    if state.products.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("Product"));
    }
    let ValidatedJson(req) = body?;

    let product = state
        .products
        .update(id, req.into_fields()?)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    tracing::info!(product_id = product.id, by = %user.username, "Product updated");

    Ok(Json(ProductMessageResponse {
        message: "Product updated successfully",
        product: product.into(),
    }))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    user: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let id = product_id(path)?;

    if !state.products.delete(id).await? {
        return Err(ApiError::NotFound("Product"));
    }
    tracing::info!(product_id = %id, by = %user.username, "Product deleted");

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
    use catalog_types::MAX_PRODUCT_NAME_LEN;

    use super::*;

    fn request(name: Option<&str>, price: Option<i64>) -> ProductRequest {
        ProductRequest {
            name: name.map(String::from),
            price,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(request(Some("Widget"), Some(10)).validate().is_ok());
        let longest = "x".repeat(MAX_PRODUCT_NAME_LEN);
        assert!(request(Some(&longest), Some(0)).validate().is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        let too_long = "x".repeat(MAX_PRODUCT_NAME_LEN + 1);
        for name in ["", too_long.as_str()] {
            let errors = request(Some(name), Some(1)).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("name"), "{name:?}");
        }
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let errors = request(None, None).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
    }
}
