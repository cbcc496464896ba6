use indexmap::IndexMap;

use crate::claude_mcp::McpServerConfig;
use crate::mcp::transform::DEFAULT_API_KEY_PLACEHOLDER;

/// ace-tool 服务器在 mcpServers 中的键名
pub const ACE_TOOL_SERVER_NAME: &str = "ace-tool";

/// ace-tool Token 写入的环境变量名
pub const ACE_TOOL_TOKEN_ENV: &str = "ACE_TOOL_TOKEN";

/// ace-tool MCP 服务器模板：Token 经 env 注入
pub fn ace_tool_template() -> McpServerConfig {
    let mut env = IndexMap::new();
    env.insert(
        ACE_TOOL_TOKEN_ENV.to_string(),
        DEFAULT_API_KEY_PLACEHOLDER.to_string(),
    );
    McpServerConfig {
        server_type: Some("stdio".into()),
        command: Some("npx".into()),
        args: Some(vec!["-y".into(), "@ace-tool/mcp-server".into()]),
        env: Some(env),
        ..McpServerConfig::default()
    }
}

/// context7 文档检索服务器模板：无需密钥
pub fn context7_template() -> McpServerConfig {
    McpServerConfig {
        server_type: Some("stdio".into()),
        command: Some("npx".into()),
        args: Some(vec!["-y".into(), "@upstash/context7-mcp".into()]),
        ..McpServerConfig::default()
    }
}

/// init 默认安装的服务器集合（名称 → 模板）
pub fn default_servers() -> Vec<(&'static str, McpServerConfig)> {
    vec![
        (ACE_TOOL_SERVER_NAME, ace_tool_template()),
        ("context7", context7_template()),
    ]
}
