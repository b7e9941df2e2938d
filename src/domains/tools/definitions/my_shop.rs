//! Self-service shop tools (authenticated).
//!
//! The profile write endpoints (`PUT`/`PATCH /api/my_shop/`) always send a
//! multipart body so the optional image can ride along; assembly lives in
//! `api::multipart`. Coupon management is plain JSON CRUD. When an `id` is
//! accepted next to body fields it is stripped from the body and used only
//! in the path.

use std::fmt;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{error_result, json_result, plain_error, route, text_result, tool_model};
use crate::api::{ApiClient, ApiRequest, shop_profile_form};

/// Language used to write description and comments about the products.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "fr")]
    Fr,
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Fr => "fr",
        })
    }
}

/// Postal address configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 128))]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 128))]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 12))]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 128))]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

// ============================================================================
// myshop_retrieve
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyShopRetrieveParams {}

pub struct MyShopRetrieveTool;

impl MyShopRetrieveTool {
    pub const NAME: &'static str = "myshop_retrieve";

    pub const DESCRIPTION: &'static str = "Retrieve your shop data";

    pub async fn execute(_params: &MyShopRetrieveParams, client: &ApiClient) -> CallToolResult {
        match client.send(ApiRequest::get("/api/my_shop/")).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopRetrieveParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: MyShopRetrieveParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// myshop_update / myshop_partial_update
// ============================================================================

/// Full-replace shop profile fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MyShopUpdateParams {
    #[schemars(description = "Name of the shop", length(max = 128))]
    pub name: String,

    #[schemars(description = "Full HTML description of the shop")]
    pub description: String,

    #[schemars(description = "Shop city for hand delivery", length(max = 128))]
    pub city: String,

    #[schemars(
        description = "The shop image. Can be a public URL or a Base64 encoded string. The server will handle the multipart upload for you."
    )]
    pub image: String,

    pub language_code: LanguageCode,

    #[schemars(description = "IBAN for transfers", length(max = 34))]
    pub bank_account_iban: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "BIC for transfers", length(max = 11))]
    pub bank_account_bic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Full postal address object")]
    pub postaladdress: Option<PostalAddress>,

    #[schemars(description = "MondialRelay code", regex(pattern = r"^[A-Za-z]{2}-[0-9]{6}$"))]
    pub parcelshop_code: String,
}

/// Partial shop profile fields; only supplied entries are sent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MyShopPartialUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Name of the shop", length(max = 128))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Full HTML description of the shop")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Shop city for hand delivery", length(max = 128))]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "The shop image. Can be a public URL or a Base64 encoded string. The server will handle the multipart upload for you."
    )]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "IBAN for transfers", length(max = 34))]
    pub bank_account_iban: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "BIC for transfers", length(max = 11))]
    pub bank_account_bic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Full postal address object")]
    pub postaladdress: Option<PostalAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "MondialRelay code", regex(pattern = r"^[A-Za-z]{2}-[0-9]{6}$"))]
    pub parcelshop_code: Option<String>,
}

/// Serialize params into the field map consumed by the form builder.
fn profile_fields(params: &impl Serialize) -> Result<serde_json::Map<String, Value>, CallToolResult> {
    match serde_json::to_value(params) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(error_result("Error: invalid shop profile fields".to_string())),
    }
}

/// Shared write path for the profile endpoints: build the multipart form
/// (fetching the image first when one is referenced), then issue the write.
/// An image failure aborts before the write request is sent.
async fn write_profile(
    request: ApiRequest,
    fields: &serde_json::Map<String, Value>,
    client: &ApiClient,
) -> CallToolResult {
    let form = match shop_profile_form(fields, client.media()).await {
        Ok(form) => form,
        Err(err) => return plain_error(&err),
    };

    match client.send(request.multipart(form)).await {
        Ok(body) => json_result(&body),
        Err(err) => plain_error(&err),
    }
}

pub struct MyShopUpdateTool;

impl MyShopUpdateTool {
    pub const NAME: &'static str = "myshop_update";

    pub const DESCRIPTION: &'static str = "Update your shop info";

    pub async fn execute(params: &MyShopUpdateParams, client: &ApiClient) -> CallToolResult {
        let fields = match profile_fields(params) {
            Ok(fields) => fields,
            Err(result) => return result,
        };
        write_profile(ApiRequest::put("/api/my_shop/"), &fields, client).await
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopUpdateParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: MyShopUpdateParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

pub struct MyShopPartialUpdateTool;

impl MyShopPartialUpdateTool {
    pub const NAME: &'static str = "myshop_partial_update";

    pub const DESCRIPTION: &'static str = "Partially update your shop information";

    pub async fn execute(
        params: &MyShopPartialUpdateParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let fields = match profile_fields(params) {
            Ok(fields) => fields,
            Err(result) => return result,
        };
        write_profile(ApiRequest::patch("/api/my_shop/"), &fields, client).await
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopPartialUpdateParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyShopPartialUpdateParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

// ============================================================================
// Coupons
// ============================================================================

/// Discount type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percent,
    Amount,
    Week,
    Month,
}

/// Minimal rental duration condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub enum MinimalRentalDuration {
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "2W")]
    TwoWeeks,
    #[serde(rename = "3W")]
    ThreeWeeks,
    #[serde(rename = "1M")]
    OneMonth,
}

/// Coupon fields shared by create and full update.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CouponFields {
    #[schemars(description = "Coupon code", length(min = 6, max = 16))]
    pub code: String,

    #[schemars(description = "Discount value", range(min = 1))]
    pub discount_value: u32,

    pub discount_type: DiscountType,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Usage count")]
    pub usage_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum global usage count")]
    pub max_usage_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Validity end date (YYYY-MM-DD)")]
    pub validity_end: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Internal ID of a set to restrict this coupon to")]
    pub restrict_to_product: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Minimal rental duration condition")]
    pub minimal_rental_duration: Option<MinimalRentalDuration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Private comment")]
    pub comment: Option<String>,

    #[schemars(description = "Publicly visible coupon?")]
    pub is_visible: bool,
}

/// Coupon fields for partial update; only supplied entries are sent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CouponPatchFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Coupon code", length(min = 6, max = 16))]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Discount value", range(min = 1))]
    pub discount_value: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Usage count")]
    pub usage_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum global usage count")]
    pub max_usage_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Validity end date (YYYY-MM-DD)")]
    pub validity_end: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Internal ID of a set to restrict this coupon to")]
    pub restrict_to_product: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Minimal rental duration condition")]
    pub minimal_rental_duration: Option<MinimalRentalDuration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Private comment")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Publicly visible coupon?")]
    pub is_visible: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyShopListCouponsParams {}

pub struct MyShopListCouponsTool;

impl MyShopListCouponsTool {
    pub const NAME: &'static str = "myshop_list_coupons";

    pub const DESCRIPTION: &'static str = "List all coupons in your shop";

    pub async fn execute(_params: &MyShopListCouponsParams, client: &ApiClient) -> CallToolResult {
        match client.send(ApiRequest::get("/api/my_shop/coupons/")).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopListCouponsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyShopListCouponsParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

pub struct MyShopCreateCouponTool;

impl MyShopCreateCouponTool {
    pub const NAME: &'static str = "myshop_create_coupon";

    pub const DESCRIPTION: &'static str = "Register a new coupon set in your shop";

    pub async fn execute(params: &CouponFields, client: &ApiClient) -> CallToolResult {
        let body = match serde_json::to_value(params) {
            Ok(body) => body,
            Err(e) => return error_result(format!("Error: {e}")),
        };
        match client
            .send(ApiRequest::post("/api/my_shop/coupons/").json(body))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<CouponFields>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: CouponFields, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyShopRetrieveCouponParams {
    #[schemars(description = "A unique integer value identifying this coupon.")]
    pub id: u64,
}

pub struct MyShopRetrieveCouponTool;

impl MyShopRetrieveCouponTool {
    pub const NAME: &'static str = "myshop_retrieve_coupon";

    pub const DESCRIPTION: &'static str = "Retrieve a coupon from your shop";

    pub async fn execute(
        params: &MyShopRetrieveCouponParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!("/api/my_shop/coupons/{}/", params.id);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopRetrieveCouponParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyShopRetrieveCouponParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

/// Full coupon update: the id rides in the path, the rest in the body.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyShopUpdateCouponParams {
    #[schemars(description = "A unique integer value identifying this coupon.")]
    pub id: u64,

    #[serde(flatten)]
    pub coupon: CouponFields,
}

pub struct MyShopUpdateCouponTool;

impl MyShopUpdateCouponTool {
    pub const NAME: &'static str = "myshop_update_coupon";

    pub const DESCRIPTION: &'static str = "Update a coupon in your shop";

    pub async fn execute(params: &MyShopUpdateCouponParams, client: &ApiClient) -> CallToolResult {
        let body = match serde_json::to_value(&params.coupon) {
            Ok(body) => body,
            Err(e) => return error_result(format!("Error: {e}")),
        };
        let path = format!("/api/my_shop/coupons/{}/", params.id);
        match client.send(ApiRequest::put(path).json(body)).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopUpdateCouponParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyShopUpdateCouponParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyShopPartialUpdateCouponParams {
    #[schemars(description = "A unique integer value identifying this coupon.")]
    pub id: u64,

    #[serde(flatten)]
    pub coupon: CouponPatchFields,
}

pub struct MyShopPartialUpdateCouponTool;

impl MyShopPartialUpdateCouponTool {
    pub const NAME: &'static str = "myshop_partial_update_coupon";

    pub const DESCRIPTION: &'static str = "Partially update a coupon in your shop";

    pub async fn execute(
        params: &MyShopPartialUpdateCouponParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let body = match serde_json::to_value(&params.coupon) {
            Ok(body) => body,
            Err(e) => return error_result(format!("Error: {e}")),
        };
        let path = format!("/api/my_shop/coupons/{}/", params.id);
        match client.send(ApiRequest::patch(path).json(body)).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopPartialUpdateCouponParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyShopPartialUpdateCouponParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyShopDeleteCouponParams {
    #[schemars(description = "A unique integer value identifying this coupon.")]
    pub id: u64,
}

pub struct MyShopDeleteCouponTool;

impl MyShopDeleteCouponTool {
    pub const NAME: &'static str = "myshop_delete_coupon";

    pub const DESCRIPTION: &'static str = "Remove a coupon from your shop";

    pub async fn execute(params: &MyShopDeleteCouponParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/my_shop/coupons/{}/", params.id);
        match client.send(ApiRequest::delete(path)).await {
            Ok(_) => text_result(format!("Coupon {} deleted successfully.", params.id)),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyShopDeleteCouponParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyShopDeleteCouponParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::testing::{client_for, text_of};
    use super::*;
    use httpmock::Method::{DELETE, GET, PATCH, PUT};
    use httpmock::MockServer;
    use serde_json::json;

    fn partial_params(value: Value) -> MyShopPartialUpdateParams {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_partial_update_sends_multipart_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/api/my_shop/")
                    .header_matches("content-type", "^multipart/form-data")
                    .body_includes("Brick Corner")
                    .body_includes(r#"{"city":"Lyon"}"#);
                then.status(200).json_body(json!({"name": "Brick Corner"}));
            })
            .await;

        let client = client_for(&server);
        let params = partial_params(json!({
            "name": "Brick Corner",
            "postaladdress": { "city": "Lyon" }
        }));
        let result = MyShopPartialUpdateTool::execute(&params, &client).await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_update_fetches_image_url_before_write() {
        let server = MockServer::start_async().await;
        let image_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/logo.jpg");
                then.status(200).body(b"\xff\xd8jpeg");
            })
            .await;
        let write_mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/my_shop/")
                    .header_matches("content-type", "^multipart/form-data")
                    .body_includes("filename=\"image.jpg\"");
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;

        let client = client_for(&server);
        let params = MyShopUpdateParams {
            name: "Brick Corner".to_string(),
            description: "<p>Bricks</p>".to_string(),
            city: "Lyon".to_string(),
            image: format!("{}/logo.jpg", server.base_url()),
            language_code: LanguageCode::Fr,
            bank_account_iban: "FR7630006000011234567890189".to_string(),
            bank_account_bic: None,
            postaladdress: None,
            parcelshop_code: "FR-123456".to_string(),
        };
        let result = MyShopUpdateTool::execute(&params, &client).await;

        image_mock.assert_async().await;
        write_mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_image_fetch_failure_skips_write() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/broken.jpg");
                then.status(500);
            })
            .await;
        let write_mock = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/api/my_shop/");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = client_for(&server);
        let params = partial_params(json!({
            "name": "Brick Corner",
            "image": format!("{}/broken.jpg", server.base_url())
        }));
        let result = MyShopPartialUpdateTool::execute(&params, &client).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Image download failed"));
        write_mock.assert_calls_async(0).await;
    }

    #[tokio::test]
    async fn test_data_uri_image_never_fetched() {
        let server = MockServer::start_async().await;
        let fetch_mock = server
            .mock_async(|when, then| {
                when.method(GET).path_matches(".*jpg.*");
                then.status(200);
            })
            .await;
        let write_mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/api/my_shop/")
                    .body_includes("filename=\"image.jpg\"");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = client_for(&server);
        let params = partial_params(json!({
            "image": "data:image/jpeg;base64,aGVsbG8="
        }));
        MyShopPartialUpdateTool::execute(&params, &client).await;

        fetch_mock.assert_calls_async(0).await;
        write_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_coupon_strips_id_from_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/my_shop/coupons/5/")
                    .json_body(json!({
                        "code": "SUMMER24",
                        "discount_value": 10,
                        "discount_type": "percent",
                        "is_visible": true
                    }));
                then.status(200).json_body(json!({"id": 5, "code": "SUMMER24"}));
            })
            .await;

        let client = client_for(&server);
        let params: MyShopUpdateCouponParams = serde_json::from_value(json!({
            "id": 5,
            "code": "SUMMER24",
            "discount_value": 10,
            "discount_type": "percent",
            "is_visible": true
        }))
        .unwrap();
        let result = MyShopUpdateCouponTool::execute(&params, &client).await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_partial_update_coupon_sends_subset() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/api/my_shop/coupons/5/")
                    .json_body(json!({ "is_visible": false }));
                then.status(200).json_body(json!({"id": 5, "is_visible": false}));
            })
            .await;

        let client = client_for(&server);
        let params: MyShopPartialUpdateCouponParams =
            serde_json::from_value(json!({ "id": 5, "is_visible": false })).unwrap();
        MyShopPartialUpdateCouponTool::execute(&params, &client).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_coupon_fixed_confirmation() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/my_shop/coupons/9/");
                // Even with a body in the response, only the confirmation is returned.
                then.status(200).json_body(json!({"id": 9, "code": "GONE"}));
            })
            .await;

        let client = client_for(&server);
        let params = MyShopDeleteCouponParams { id: 9 };
        let result = MyShopDeleteCouponTool::execute(&params, &client).await;

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Coupon 9 deleted successfully.");
    }

    #[tokio::test]
    async fn test_retrieve_error_family_format() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/my_shop/");
                then.status(401)
                    .json_body(json!({"message": "Authentication required"}));
            })
            .await;

        let client = client_for(&server);
        let result = MyShopRetrieveTool::execute(&MyShopRetrieveParams {}, &client).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error: LocaBriques API Error [401]: Authentication required"
        );
    }
}
