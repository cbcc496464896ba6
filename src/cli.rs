use clap::{Args, Parser, Subcommand};

const AFTER_HELP: &str = "\
示例:
  # 显示交互式菜单
  ccg

  # 运行完整初始化
  ccg init
  ccg i

  # 自定义模型
  ccg i --frontend gemini,codex --backend codex,gemini

  # 并行模式、非交互
  ccg i --mode parallel --skip-prompt
";

/// CCG - Claude + Codex + Gemini 多模型协作配置工具
#[derive(Parser)]
#[command(name = "ccg", version, about, after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 初始化 CCG 多模型协作系统
    #[command(alias = "i")]
    Init(InitArgs),

    /// 诊断 MCP 配置问题
    #[command(name = "diagnose-mcp")]
    DiagnoseMcp,

    /// 修复 Windows MCP 配置问题
    #[command(name = "fix-mcp")]
    FixMcp,

    /// 配置 CCG 设置
    Config {
        #[command(subcommand)]
        target: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// 配置 ace-tool MCP Token
    Mcp(ConfigMcpArgs),
}

#[derive(Args)]
pub struct ConfigMcpArgs {
    /// 直接指定 Token（跳过交互输入）
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Args, Default)]
pub struct InitArgs {
    /// 强制覆盖现有配置
    #[arg(short, long)]
    pub force: bool,

    /// 跳过所有交互式提示（非交互模式）
    #[arg(short = 's', long)]
    pub skip_prompt: bool,

    /// 跳过 MCP 配置（更新时使用）
    #[arg(long)]
    pub skip_mcp: bool,

    /// 前端模型（逗号分隔: gemini,codex,claude）
    #[arg(short = 'F', long, value_name = "MODELS")]
    pub frontend: Option<String>,

    /// 后端模型（逗号分隔: codex,gemini,claude）
    #[arg(short = 'B', long, value_name = "MODELS")]
    pub backend: Option<String>,

    /// 协作模式 (parallel, smart, sequential)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// 要安装的工作流（逗号分隔或 "all"）
    #[arg(short, long, value_name = "LIST")]
    pub workflows: Option<String>,

    /// 安装目录（默认: ~/.claude）
    #[arg(short = 'd', long, value_name = "PATH")]
    pub install_dir: Option<String>,
}
