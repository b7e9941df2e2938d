//! User search tool.
//!
//! On failure this tool prefers the pretty-printed response body over the
//! normalized message, so validation errors reach the agent field by field.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{error_result, json_result, route, tool_model};
use crate::api::{ApiClient, ApiRequest, Query};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserListParams {
    #[schemars(
        description = "part of username to look for. At least 3 chars.",
        length(min = 3)
    )]
    pub searched_string: String,

    #[schemars(description = "A page number within the paginated result set.")]
    pub page: Option<u32>,

    #[schemars(description = "Number of results to return per page.")]
    pub page_size: Option<u32>,
}

pub struct UserListTool;

impl UserListTool {
    pub const NAME: &'static str = "user_list";

    pub const DESCRIPTION: &'static str =
        "List all users registered on LocaBriques whose username matches 'searched_string'";

    pub async fn execute(params: &UserListParams, client: &ApiClient) -> CallToolResult {
        let query = Query::new()
            .set("searched_string", &params.searched_string)
            .push("page", &params.page)
            .push("page_size", &params.page_size);

        match client.send(ApiRequest::get("/api/users/").query(query)).await {
            Ok(body) => json_result(&body),
            Err(err) => {
                let detail = match err.data() {
                    Some(data) => serde_json::to_string_pretty(data)
                        .unwrap_or_else(|_| data.to_string()),
                    None => err.message().to_string(),
                };
                error_result(format!("Could not fetch users: {detail}"))
            }
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<UserListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: UserListParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}
