//! Funcprobe CLI - locate functions, extract parameters, plan input forms

#![deny(warnings)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use funcprobe_core::config;
use funcprobe_core::{
    analyze_request_with_config, function_names, plan_form, render_form_json, render_json,
    render_names_json, render_names_text, render_text, AnalysisRequest, Language,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "funcprobe")]
#[command(
    about = "Locate function definitions and extract parameter lists (Python, JavaScript, Java, C++)"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate a function and extract its parameters
    Analyze {
        /// Path to the source file
        path: PathBuf,

        /// Name of the function to locate
        #[arg(long)]
        function: String,

        /// Language tag (default: from file extension, then config)
        #[arg(long)]
        language: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List candidate function names in a source file
    Functions {
        /// Path to the source file
        path: PathBuf,

        /// Language tag (default: from file extension, then config)
        #[arg(long)]
        language: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the input-form plan for a function as JSON
    Form {
        /// Path to the source file
        path: PathBuf,

        /// Name of the function to plan a form for
        #[arg(long)]
        function: String,

        /// Language tag (default: from file extension, then config)
        #[arg(long)]
        language: Option<String>,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate or show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running analysis
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            function,
            language,
            format,
            config: config_path,
        } => {
            let resolved = load_config(config_path.as_deref())?;
            let source = read_source(&path)?;
            let tag = resolve_tag(&path, language.as_deref(), &resolved);

            let request = AnalysisRequest::new(source, tag, function);
            let report = analyze_request_with_config(&request, &resolved)?;

            match format {
                OutputFormat::Text => print!("{}", render_text(&report)),
                OutputFormat::Json => println!("{}", render_json(&report)),
            }
        }
        Commands::Functions {
            path,
            language,
            format,
            config: config_path,
        } => {
            let resolved = load_config(config_path.as_deref())?;
            let source = read_source(&path)?;
            let tag = resolve_tag(&path, language.as_deref(), &resolved);

            let names = function_names(&source, Language::from_tag(&tag));

            match format {
                OutputFormat::Text => {
                    if names.is_empty() {
                        eprintln!("no functions found");
                    } else {
                        print!("{}", render_names_text(&names));
                    }
                }
                OutputFormat::Json => println!("{}", render_names_json(&names)),
            }
        }
        Commands::Form {
            path,
            function,
            language,
            config: config_path,
        } => {
            let resolved = load_config(config_path.as_deref())?;
            let source = read_source(&path)?;
            let tag = resolve_tag(&path, language.as_deref(), &resolved);

            let request = AnalysisRequest::new(source, tag, function);
            let report = analyze_request_with_config(&request, &resolved)?;
            let plan = plan_form(&report.parameters);

            println!("{}", render_form_json(&plan));
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let cwd = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&cwd, path.as_deref())?;
                match resolved.config_path {
                    Some(config_path) => println!("Config valid: {}", config_path.display()),
                    None => println!("No config file found. Using defaults."),
                }
            }
            ConfigAction::Show { path } => {
                let cwd = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&cwd, path.as_deref())?;
                println!("brace_fallback_lines: {}", resolved.brace_fallback_lines);
                println!(
                    "default_language: {}",
                    resolved
                        .default_language
                        .map(|lang| lang.tag())
                        .unwrap_or("(none)")
                );
                match resolved.config_path {
                    Some(config_path) => println!("config file: {}", config_path.display()),
                    None => println!("config file: (defaults)"),
                }
            }
        },
    }

    Ok(())
}

/// Load config from an explicit path or auto-discover in the working directory
fn load_config(explicit: Option<&Path>) -> anyhow::Result<config::ResolvedConfig> {
    let cwd = std::env::current_dir()?;
    let resolved =
        config::load_and_resolve(&cwd, explicit).context("failed to load configuration")?;

    if let Some(ref config_path) = resolved.config_path {
        eprintln!("Using config: {}", config_path.display());
    }

    Ok(resolved)
}

/// Resolve the language tag: flag, then file extension, then config default
///
/// An unresolvable language passes through as-is; downstream the locator
/// falls back to its generic pattern and extraction yields nothing.
fn resolve_tag(path: &Path, flag: Option<&str>, config: &config::ResolvedConfig) -> String {
    if let Some(tag) = flag {
        return tag.to_string();
    }
    if let Some(lang) = Language::from_path(path) {
        return lang.tag().to_string();
    }
    if let Some(lang) = config.default_language {
        return lang.tag().to_string();
    }
    String::new()
}

/// Read the source file to analyze
fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read source file: {}", path.display()))
}
