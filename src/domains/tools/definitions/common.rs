//! Shared helpers for LocaBriques tool definitions.
//!
//! Success envelopes carry the remote payload pretty-printed as JSON text.
//! Failure formatting is deliberately NOT unified: each resource family keeps
//! the exact message shape its consumers have always seen, so there is one
//! formatter per family here rather than a single canonical one.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::api::{ApiClient, ApiError};

/// Success envelope: the remote body pretty-printed (2-space indent).
pub fn json_result(body: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Success envelope with a fixed confirmation message (delete tools).
pub fn text_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message.into())])
}

/// Error envelope with a pre-formatted message.
pub fn error_result(message: String) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Catalog/legoset/shop family: `<prefix>: <message>`.
pub fn prefixed_error(prefix: &str, err: &ApiError) -> CallToolResult {
    error_result(format!("{}: {}", prefix, err.message()))
}

/// Public inventory family: `Error: [<status|Unknown>] - <data|message>`,
/// with the response body compact-serialized when one was returned.
pub fn status_data_error(err: &ApiError) -> CallToolResult {
    let status = err
        .status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let detail = match err.data() {
        Some(data) => data.to_string(),
        None => err.message().to_string(),
    };
    error_result(format!("Error: [{}] - {}", status, detail))
}

/// Theme family: `Error: [<status|Unknown>] - <message>`.
pub fn status_error(err: &ApiError) -> CallToolResult {
    let status = err
        .status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    error_result(format!("Error: [{}] - {}", status, err.message()))
}

/// My-shop / my-inventory family: `Error: <message>`.
pub fn plain_error(err: &ApiError) -> CallToolResult {
    error_result(format!("Error: {}", err.message()))
}

/// My-account family: the bare message, no prefix.
pub fn bare_error(err: &ApiError) -> CallToolResult {
    error_result(err.message().to_string())
}

/// Build the Tool metadata model for a parameter type.
pub fn tool_model<P: JsonSchema + DeserializeOwned + 'static>(
    name: &'static str,
    description: &'static str,
) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute wiring deserialized params and the shared client into
/// an async handler. Deserialization failures become protocol-level invalid
/// params; everything past that point is the handler's to absorb.
pub fn route<S, P, F, Fut>(tool: Tool, client: Arc<ApiClient>, handler: F) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    F: Fn(P, Arc<ApiClient>) -> Fut + Send + Sync + Clone + 'static,
    Fut: std::future::Future<Output = CallToolResult> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        let handler = handler.clone();
        async move {
            let params: P = serde_json::from_value(Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(handler(params, client).await)
        }
        .boxed()
    })
}
