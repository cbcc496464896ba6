use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

use crate::config::{
    copy_file, get_backup_dir, get_claude_code_config_path, read_json_file, write_json_file,
};
use crate::error::AppError;

/// MCP 服务器连接定义（~/.claude.json mcpServers 条目）
///
/// stdio 条目以 `command`/`args` 启动本地子进程，sse 条目通过 `url` 连接。
/// 未识别的字段收进 `extra`，读改写过程中原样保留。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct McpServerConfig {
    /// 传输类型标识（"stdio" / "sse"），缺省按 stdio 处理
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_timeout_ms: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Claude Code 配置文档（~/.claude.json）
///
/// 只对 mcpServers 做类型化视图，其余顶层字段全部收进 `extra`，
/// 保证读改写不丢失任何未识别的键。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClaudeCodeConfig {
    #[serde(rename = "mcpServers", default, skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<IndexMap<String, McpServerConfig>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaudeCodeConfig {
    /// mcpServers 是否缺失或为空
    pub fn has_no_servers(&self) -> bool {
        self.mcp_servers.as_ref().map_or(true, IndexMap::is_empty)
    }
}

/// 读取 ~/.claude.json
///
/// 文件不存在返回 `Ok(None)`；存在但无法解析时错误向上传播，不做降级。
pub fn read_claude_code_config() -> Result<Option<ClaudeCodeConfig>, AppError> {
    let path = get_claude_code_config_path();
    if !path.exists() {
        return Ok(None);
    }

    let config: ClaudeCodeConfig = read_json_file(&path)?;
    Ok(Some(config))
}

/// 整体写回 ~/.claude.json（多行缩进格式，原子替换）
pub fn write_claude_code_config(config: &ClaudeCodeConfig) -> Result<(), AppError> {
    write_json_file(&get_claude_code_config_path(), config)
}

/// 备份 ~/.claude.json 到备份目录，返回备份文件路径
///
/// 无可备份文件时返回 `Ok(None)`，不产生任何目录副作用。
pub fn backup_claude_code_config() -> Result<Option<PathBuf>, AppError> {
    let config_path = get_claude_code_config_path();
    if !config_path.exists() {
        return Ok(None);
    }

    let backup_dir = get_backup_dir();
    fs::create_dir_all(&backup_dir).map_err(|e| AppError::io(&backup_dir, e))?;

    // 文件名内嵌可排序时间戳，冒号和句点替换为连字符保证跨平台合法
    let timestamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    let backup_path = backup_dir.join(format!("claude-config-{timestamp}.json"));

    copy_file(&config_path, &backup_path)?;
    Ok(Some(backup_path))
}
