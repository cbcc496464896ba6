use std::path::Path;

use thiserror::Error;

/// 应用统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("MCP 配置校验失败: {0}")]
    McpValidation(String),

    #[error("读写文件失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    IoContext {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("解析 JSON 失败 ({path}): {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("序列化 JSON 失败: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    /// 构造带路径上下文的 IO 错误
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// 构造带路径上下文的 JSON 解析错误
    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        AppError::Json {
            path: path.display().to_string(),
            source,
        }
    }
}
