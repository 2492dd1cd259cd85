//! MCP server exposing SurveyMars survey generation as a tool.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo, Tool},
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
    ServiceExt,
};

use crate::client::{ClientError, SurveyClient};
use crate::models::{SurveyCreateRequest, SurveyOutcome};

/// Text returned for every unsuccessful survey creation.
pub const SURVEY_CREATE_FAILED: &str = "Survey create failed";

#[derive(Clone)]
pub struct McpServer {
    client: SurveyClient,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(client: SurveyClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Turn the client result into tool output.
    ///
    /// Success is the payload as pretty-printed JSON; anything else is the
    /// fixed failure text.
    pub fn render_outcome(
        result: Result<SurveyOutcome, ClientError>,
    ) -> Result<CallToolResult, McpError> {
        let data = match result {
            Ok(outcome) => outcome.into_data(),
            Err(e) => {
                tracing::error!(error = %e, "[survey create] request failed");
                None
            }
        };

        let text = match data {
            Some(data) => serde_json::to_string_pretty(&data)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?,
            None => SURVEY_CREATE_FAILED.to_string(),
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    async fn run_survey_create(&self, args: SurveyCreateArgs) -> Result<CallToolResult, McpError> {
        let request = SurveyCreateRequest::from(args);
        let result = self.client.create_survey(&request).await;
        Self::render_outcome(result)
    }

    // ============================================================
    // Test helpers - expose tool logic for testing
    // ============================================================

    pub async fn test_survey_create(
        &self,
        args: SurveyCreateArgs,
    ) -> Result<CallToolResult, McpError> {
        self.run_survey_create(args).await
    }

    pub fn test_list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    pub fn test_has_tool(&self, name: &str) -> bool {
        self.tool_router.has_route(name)
    }
}

#[tool_router]
impl McpServer {
    #[tool(
        description = "Create survey with SurveyMars, Returns a set of links to the generated survey. With this AI-powered survey generator, you can enter essential details like target audience, brand, and research objectives, and I will produce a personalized questionnaire for you. The more specific your input, the more precise the questionnaire content will be."
    )]
    async fn survey_create(
        &self,
        params: Parameters<SurveyCreateArgs>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tokio::select! {
            result = self.run_survey_create(params.0) => result,
            _ = context.ct.cancelled() => {
                tracing::info!("[survey create] cancelled by client");
                Err(McpError::internal_error("Survey create cancelled", None))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "surveymars-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            instructions: Some(
                "SurveyMars generates questionnaires with AI. Call survey_create with a title and a detailed purpose; generation takes up to a couple of minutes and returns links to the new survey."
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(client: SurveyClient) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(client);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
