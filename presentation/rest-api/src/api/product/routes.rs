use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::clear::ClearInventoryUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::extract::{
    ExtractProductInfoParams, ExtractProductInfoUseCase,
};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ExtractProductInfoRequest, ExtractedProductInfoResponse,
    InventoryItemResponse, ProductResponse,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    clear_use_case: Arc<dyn ClearInventoryUseCase>,
    extract_use_case: Arc<dyn ExtractProductInfoUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        clear_use_case: Arc<dyn ClearInventoryUseCase>,
        extract_use_case: Arc<dyn ExtractProductInfoUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
            clear_use_case,
            extract_use_case,
        }
    }
}

/// Product inventory API
///
/// Endpoints for adding, listing and removing perishable products.
#[OpenApi]
impl ProductApi {
    /// Add a product
    ///
    /// Validates the product and adds it to the inventory.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            batch_id: body.0.batch_id,
            quantity: body.0.quantity,
            mfg_date: body.0.mfg_date,
            exp_date: body.0.exp_date,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Returns every product ordered by expiry date, soonest first, with its
    /// freshness status as of today.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        /// Only return products that are near expiry
        near_expiry_only: Query<Option<bool>>,
    ) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            near_expiry_only: near_expiry_only.0.unwrap_or(false),
        };

        let items = self.get_all_use_case.execute(params).await;
        GetAllProductsResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
    }

    /// Remove a product
    ///
    /// Removes the product with the given id. Unknown ids are ignored.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let params = DeleteProductParams {
            id: ProductId::new(id.0),
        };

        self.delete_use_case.execute(params).await;
        DeleteProductResponse::NoContent
    }

    /// Clear the inventory
    ///
    /// Removes every product.
    #[oai(path = "/products", method = "delete", tag = "ApiTags::Products")]
    async fn clear_inventory(&self) -> ClearInventoryResponse {
        self.clear_use_case.execute().await;
        ClearInventoryResponse::NoContent
    }

    /// Extract product details from a label photo
    ///
    /// Reads name, batch and dates off the label. Nothing is stored; the
    /// result is meant to prefill the product form.
    #[oai(path = "/products/extract", method = "post", tag = "ApiTags::Products")]
    async fn extract_product_info(
        &self,
        body: Json<ExtractProductInfoRequest>,
    ) -> ExtractProductInfoResponse {
        let params = ExtractProductInfoParams {
            image_data_uri: body.0.image_data_uri,
        };

        match self.extract_use_case.execute(params).await {
            Ok(info) => ExtractProductInfoResponse::Ok(Json(info.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ExtractProductInfoResponse::BadRequest(json),
                    422 => ExtractProductInfoResponse::UnprocessableEntity(json),
                    _ => ExtractProductInfoResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<InventoryItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearInventoryResponse {
    #[oai(status = 204)]
    NoContent,
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExtractProductInfoResponse {
    #[oai(status = 200)]
    Ok(Json<ExtractedProductInfoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
