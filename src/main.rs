//! # CodeSnap — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与输出格式。
//! 识别逻辑分布在库的各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use codesnap::commit::{CommitPlan, RepoRef};
use codesnap::config::load_config_from_path;
use codesnap::snippet::SnippetSource;
use codesnap::{DetectionInput, DetectionPipeline, SnapConfig, SnapError, Suggestion};

/// Suggest a repository path and commit message for a captured code snippet
#[derive(Parser, Debug)]
#[command(name = "codesnap", version, about)]
struct CliArgs {
    #[arg(long, value_name = "URL", help = "URL of the page the snippet was copied from")]
    url: Option<String>,

    #[arg(long, value_name = "TITLE", help = "Title of the page the snippet was copied from")]
    title: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        conflicts_with = "clipboard",
        help = "Read the snippet from a file instead of stdin"
    )]
    file: Option<PathBuf>,

    #[arg(long, help = "Read the snippet from the system clipboard")]
    clipboard: bool,

    #[arg(
        long,
        value_name = "OWNER/NAME",
        help = "Target repository; prints the contents API request as well"
    )]
    repo: Option<String>,

    #[arg(long, value_name = "PATH", help = "JSON settings file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print JSON instead of human-readable text")]
    json: bool,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    suggestion: &'a Suggestion,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<CommitPlan>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), SnapError> {
    let config = args
        .config
        .as_deref()
        .map(load_config_from_path)
        .unwrap_or_else(SnapConfig::default);
    let pipeline = DetectionPipeline::new(config);

    let source = if args.clipboard {
        SnippetSource::Clipboard
    } else if let Some(path) = &args.file {
        SnippetSource::File(path.clone())
    } else {
        SnippetSource::Stdin
    };
    let text = source.read()?;

    let mut input = DetectionInput::new(text);
    if let Some(title) = &args.title {
        input = input.with_page_title(title.clone());
    }
    if let Some(url) = &args.url {
        input = input.with_page_url(url.clone());
    }

    let suggestion = match pipeline.detect(&input) {
        Ok(suggestion) => suggestion,
        Err(err @ SnapError::InvalidUrl { .. }) => {
            log::warn!("{err}，忽略页面 URL 继续识别");
            input.page_url = None;
            pipeline.detect(&input)?
        }
        Err(err) => return Err(err),
    };

    log::info!(
        "✅ 识别完成 - 路径: {} 语言: {}",
        suggestion.file_path,
        suggestion.detected_language.language_id
    );

    let commit = args
        .repo
        .as_deref()
        .map(RepoRef::parse)
        .transpose()?
        .map(|repo| CommitPlan::from_suggestion(&repo, &suggestion, &input.raw_text));

    if args.json {
        let report = Report {
            suggestion: &suggestion,
            commit,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| SnapError::Serialize(e.to_string()))?;
        println!("{json}");
    } else {
        print_human(&suggestion, commit.as_ref());
    }
    Ok(())
}

fn print_human(suggestion: &Suggestion, commit: Option<&CommitPlan>) {
    let platform = suggestion
        .detected_platform
        .as_ref()
        .map_or("unknown", |p| p.display_name);

    println!("File path:      {}", suggestion.file_path);
    println!("Commit message: {}", suggestion.commit_message);
    println!("Platform:       {platform}");
    println!(
        "Language:       {} (score {})",
        suggestion.detected_language.language_id, suggestion.detected_language.score
    );
    println!("Difficulty:     {:?}", suggestion.difficulty);
    if let Some(plan) = commit {
        println!("Commit to:      {} (PUT {})", plan.repo, plan.api_path);
    }
}
