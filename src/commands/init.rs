use std::str::FromStr;

use console::{style, Term};
use indexmap::IndexMap;

use super::{prompt, prompt_or};
use crate::claude_mcp::{
    backup_claude_code_config, read_claude_code_config, write_claude_code_config,
};
use crate::cli::InitArgs;
use crate::config::get_ccg_config_path;
use crate::error::AppError;
use crate::mcp::presets::{default_servers, ACE_TOOL_SERVER_NAME, ACE_TOOL_TOKEN_ENV};
use crate::mcp::{build_mcp_server_config, merge_mcp_servers, validate_server_entry};
use crate::platform::Platform;
use crate::settings::{
    settings_file_exists, update_settings, CcgSettings, CollaborationMode, ModelKind,
};

/// 可供安装的内置工作流
pub const AVAILABLE_WORKFLOWS: &[&str] = &["code-review", "refactor", "test-gen"];

/// `ccg init` / `ccg i`
pub fn run(args: &InitArgs) -> Result<(), AppError> {
    let term = Term::stdout();
    println!();
    println!("  {}", style("🚀 初始化 CCG 多模型协作系统").cyan().bold());
    println!();

    if settings_file_exists() && !args.force {
        if args.skip_prompt {
            return Err(AppError::Config(
                "配置已存在，使用 --force 覆盖".into(),
            ));
        }
        let answer = prompt_or(&term, "检测到已有配置，是否覆盖？(y/N)", "n")?;
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            println!("  {}", style("已取消初始化").yellow());
            println!();
            return Ok(());
        }
    }

    let defaults = CcgSettings::default();

    let frontend = match args.frontend.as_deref() {
        Some(raw) => parse_model_list(raw)?,
        None if args.skip_prompt => defaults.frontend.clone(),
        None => parse_model_list(&prompt_or(&term, "前端模型（逗号分隔）", "claude")?)?,
    };
    let backend = match args.backend.as_deref() {
        Some(raw) => parse_model_list(raw)?,
        None if args.skip_prompt => defaults.backend.clone(),
        None => parse_model_list(&prompt_or(&term, "后端模型（逗号分隔）", "codex,gemini")?)?,
    };
    let mode = match args.mode.as_deref() {
        Some(raw) => CollaborationMode::from_str(raw)?,
        None if args.skip_prompt => defaults.mode,
        None => CollaborationMode::from_str(&prompt_or(
            &term,
            "协作模式 (parallel/smart/sequential)",
            "smart",
        )?)?,
    };
    let workflows = match args.workflows.as_deref() {
        Some(raw) => parse_workflows(raw)?,
        None if args.skip_prompt => parse_workflows("all")?,
        None => parse_workflows(&prompt_or(&term, "安装工作流（逗号分隔或 all）", "all")?)?,
    };

    let settings = CcgSettings {
        frontend,
        backend,
        mode,
        workflows,
        claude_config_dir: args.install_dir.clone(),
        ..CcgSettings::default()
    };
    update_settings(settings)?;
    println!(
        "  {}",
        style(format!("✅ 已写入 {}", get_ccg_config_path().display())).green()
    );

    if !args.skip_mcp {
        configure_mcp_servers(&term, args)?;
    }

    println!();
    println!("  {}", style("初始化完成 🎉").cyan().bold());
    println!();
    Ok(())
}

/// 备份现有 Claude 配置并合并内置 MCP 服务器
fn configure_mcp_servers(term: &Term, args: &InitArgs) -> Result<(), AppError> {
    let platform = Platform::current();

    let token = if args.skip_prompt {
        std::env::var(ACE_TOOL_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
    } else {
        let raw = prompt(term, "ace-tool MCP Token（留空跳过）")?;
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    };

    if let Some(path) = backup_claude_code_config()? {
        println!(
            "  {}",
            style(format!("已备份现有配置: {}", path.display())).dim()
        );
    }

    let mut servers = IndexMap::new();
    for (name, template) in default_servers() {
        let entry = if name == ACE_TOOL_SERVER_NAME {
            build_mcp_server_config(
                &template,
                token.as_deref(),
                None,
                Some(ACE_TOOL_TOKEN_ENV),
                platform,
            )
        } else {
            build_mcp_server_config(&template, None, None, None, platform)
        };
        validate_server_entry(name, &entry)?;
        servers.insert(name.to_string(), entry);
    }

    let merged = merge_mcp_servers(read_claude_code_config()?, servers);
    write_claude_code_config(&merged)?;
    println!(
        "  {}",
        style("✅ MCP 服务器已写入 ~/.claude.json").green()
    );
    Ok(())
}

fn parse_model_list(raw: &str) -> Result<Vec<ModelKind>, AppError> {
    let models = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ModelKind::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if models.is_empty() {
        return Err(AppError::InvalidInput("模型列表不能为空".into()));
    }
    Ok(models)
}

fn parse_workflows(raw: &str) -> Result<Vec<String>, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(AVAILABLE_WORKFLOWS.iter().map(|w| w.to_string()).collect());
    }

    let mut selected = Vec::new();
    for name in trimmed.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !AVAILABLE_WORKFLOWS.contains(&name) {
            return Err(AppError::InvalidInput(format!(
                "未知工作流: '{name}'。可选值: {}",
                AVAILABLE_WORKFLOWS.join(", ")
            )));
        }
        if !selected.iter().any(|s| s == name) {
            selected.push(name.to_string());
        }
    }
    Ok(selected)
}
