use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::RwLock;

use crate::config::{get_ccg_config_path, write_json_file};
use crate::error::AppError;

/// 协作中可调度的模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Claude,
    Codex,
    Gemini,
}

impl ModelKind {
    pub fn as_str(&self) -> &str {
        match self {
            ModelKind::Claude => "claude",
            ModelKind::Codex => "codex",
            ModelKind::Gemini => "gemini",
        }
    }
}

impl FromStr for ModelKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "claude" => Ok(ModelKind::Claude),
            "codex" => Ok(ModelKind::Codex),
            "gemini" => Ok(ModelKind::Gemini),
            other => Err(AppError::InvalidInput(format!(
                "不支持的模型标识: '{other}'。可选值: claude, codex, gemini。"
            ))),
        }
    }
}

/// 多模型协作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationMode {
    Parallel,
    #[default]
    Smart,
    Sequential,
}

impl CollaborationMode {
    pub fn as_str(&self) -> &str {
        match self {
            CollaborationMode::Parallel => "parallel",
            CollaborationMode::Smart => "smart",
            CollaborationMode::Sequential => "sequential",
        }
    }
}

impl FromStr for CollaborationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "parallel" => Ok(CollaborationMode::Parallel),
            "smart" => Ok(CollaborationMode::Smart),
            "sequential" => Ok(CollaborationMode::Sequential),
            other => Err(AppError::InvalidInput(format!(
                "不支持的协作模式: '{other}'。可选值: parallel, smart, sequential。"
            ))),
        }
    }
}

/// CCG 自身设置（~/.ccg/config.json）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CcgSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    /// 前端（面向用户交互）模型，按优先级排列
    #[serde(default = "default_frontend")]
    pub frontend: Vec<ModelKind>,
    /// 后端（执行任务）模型，按优先级排列
    #[serde(default = "default_backend")]
    pub backend: Vec<ModelKind>,
    #[serde(default)]
    pub mode: CollaborationMode,
    /// 已安装的工作流名称
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<String>,
    /// Claude 配置目录覆盖（默认 ~/.claude）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claude_config_dir: Option<String>,
}

fn default_version() -> u32 {
    1
}

fn default_frontend() -> Vec<ModelKind> {
    vec![ModelKind::Claude]
}

fn default_backend() -> Vec<ModelKind> {
    vec![ModelKind::Codex, ModelKind::Gemini]
}

impl Default for CcgSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            frontend: default_frontend(),
            backend: default_backend(),
            mode: CollaborationMode::default(),
            workflows: Vec::new(),
            claude_config_dir: None,
        }
    }
}

impl CcgSettings {
    fn normalize_paths(&mut self) {
        self.claude_config_dir = self
            .claude_config_dir
            .as_ref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
    }

    fn load_from_file() -> Self {
        let path = get_ccg_config_path();
        if let Ok(content) = std::fs::read_to_string(&path) {
            match serde_json::from_str::<CcgSettings>(&content) {
                Ok(mut settings) => {
                    settings.normalize_paths();
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "解析设置文件失败，将使用默认设置。路径: {}, 错误: {}",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }
}

static SETTINGS_STORE: Lazy<RwLock<CcgSettings>> =
    Lazy::new(|| RwLock::new(CcgSettings::load_from_file()));

fn resolve_override_path(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(stripped) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    } else if let Some(stripped) = raw.strip_prefix("~\\") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    PathBuf::from(raw)
}

/// 设置文件是否已存在（init 覆盖确认用）
pub fn settings_file_exists() -> bool {
    get_ccg_config_path().exists()
}

pub fn get_settings() -> CcgSettings {
    SETTINGS_STORE.read().expect("读取设置锁失败").clone()
}

/// 持久化并更新内存缓存
pub fn update_settings(mut new_settings: CcgSettings) -> Result<(), AppError> {
    new_settings.normalize_paths();
    write_json_file(&get_ccg_config_path(), &new_settings)?;

    let mut guard = SETTINGS_STORE.write().expect("写入设置锁失败");
    *guard = new_settings;
    Ok(())
}

/// 从磁盘重新加载设置到内存缓存（测试切换 HOME 后使用）
pub fn reload_settings() {
    let fresh = CcgSettings::load_from_file();
    let mut guard = SETTINGS_STORE.write().expect("写入设置锁失败");
    *guard = fresh;
}

pub fn get_claude_override_dir() -> Option<PathBuf> {
    let settings = SETTINGS_STORE.read().ok()?;
    settings
        .claude_config_dir
        .as_ref()
        .map(|p| resolve_override_path(p))
}
