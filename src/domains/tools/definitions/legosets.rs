//! LEGO set database tools.
//!
//! The set database only contains sets previously integrated by a user;
//! `legoset_register` imports a new one from the brickset catalog. Its error
//! handling is deliberately special-cased: a 500 means the import pipeline
//! already escalated to the team, so the message must not invite a retry.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::common::{error_result, json_result, prefixed_error, route, tool_model};
use crate::api::{ApiClient, ApiRequest, Query};

// ============================================================================
// legoset_search
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LegosetSearchParams {
    #[schemars(description = "A page number within the paginated result set.")]
    pub page: Option<u32>,

    #[schemars(
        description = "Search sets by name, description, headline or LEGO® identifier. Only sets matching the whole string will be returned."
    )]
    pub search: Option<String>,
}

pub struct LegosetSearchTool;

impl LegosetSearchTool {
    pub const NAME: &'static str = "legoset_search";

    pub const DESCRIPTION: &'static str = "Search sets in our LEGO® sets database. This database only contains sets that have been previously integrated by a user.";

    pub async fn execute(params: &LegosetSearchParams, client: &ApiClient) -> CallToolResult {
        let query = Query::new()
            .push("page", &params.page)
            .push("search", &params.search);

        match client
            .send(ApiRequest::get("/api/legosets/").query(query))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => prefixed_error("Could not search LEGO sets", &err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<LegosetSearchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: LegosetSearchParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// legoset_retrieve
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LegosetRetrieveParams {
    #[schemars(description = "A unique integer value identifying this lego set.")]
    pub id: u64,
}

pub struct LegosetRetrieveTool;

impl LegosetRetrieveTool {
    pub const NAME: &'static str = "legoset_retrieve";

    pub const DESCRIPTION: &'static str = "Retrieve a LEGO® set from our database.";

    pub async fn execute(params: &LegosetRetrieveParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/legosets/{}/", params.id);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => {
                let message = if err.status() == Some(404) {
                    format!("LEGO set with id '{}' not found", params.id)
                } else {
                    format!(
                        "Could not retrieve LEGO set '{}': {}",
                        params.id,
                        err.message()
                    )
                };
                error_result(message)
            }
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<LegosetRetrieveParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: LegosetRetrieveParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

// ============================================================================
// legoset_register
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LegosetRegisterParams {
    #[schemars(description = "Set identifier in brickset database")]
    pub brickset_set_id: u64,
}

pub struct LegosetRegisterTool;

impl LegosetRegisterTool {
    pub const NAME: &'static str = "legoset_register";

    pub const DESCRIPTION: &'static str = "Register a new set in our LEGO® sets database, based on brickset API. Given a brickset id, we call the API, retrieve set data, and register it in our database. As we need some mandatory info, this call can fail in case some is missing. In this case, our team is automatically informed and will register the set manually (so no need to retry).";

    pub async fn execute(params: &LegosetRegisterParams, client: &ApiClient) -> CallToolResult {
        // The only endpoint without a trailing slash.
        let request = ApiRequest::post("/api/legosets/register_from_brickset")
            .json(json!({ "brickset_set_id": params.brickset_set_id }));

        match client.send(request).await {
            Ok(body) => json_result(&body),
            Err(err) => {
                let message = match err.status() {
                    Some(400) => {
                        let detail = err
                            .data()
                            .and_then(|d| d.get("detail"))
                            .and_then(|d| d.as_str())
                            .map(str::to_string)
                            .unwrap_or_else(|| err.message().to_string());
                        format!("Bad request when registering set: {detail}")
                    }
                    Some(500) => {
                        "Import has failed for some reason. Team has been informed.".to_string()
                    }
                    _ => format!(
                        "Could not register LEGO set from brickset: {}",
                        err.message()
                    ),
                };
                error_result(message)
            }
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<LegosetRegisterParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: LegosetRegisterParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}
