//! Command-line interface using Clap v4.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum, builder::PossibleValuesParser};
use example_programs::SAMPLE_NAMES;
use regform::{
    LayoutStyle, PrefilledPolicy, RenderContext, UserType, group_sections, render_preview,
};
use regform_doc_html::{HtmlOptions, to_html};
use regform_preview_ratatui::{RatatuiError, RatatuiPreview};

use crate::config;

/// Preview participant registration forms before publishing a program
#[derive(Parser, Debug)]
#[command(name = "regform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the registration form preview for a program
    Preview {
        /// Program configuration (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Field catalogue (TOML); the standard catalogue when omitted
        #[arg(long)]
        catalogue: Option<PathBuf>,

        /// Override the configured layout (single-column, two-column, question-by-question)
        #[arg(short, long)]
        layout: Option<String>,

        /// Preview as an existing participant
        #[arg(long)]
        existing: bool,

        /// Question to show in question-by-question layout (1-based)
        #[arg(short, long, default_value = "1")]
        question: usize,

        /// Leave prefilled fields out instead of showing them read-only
        #[arg(long)]
        hide_prefilled: bool,

        /// Output format
        #[arg(short, long, default_value = "html")]
        format: OutputFormat,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a program configuration and summarize its form
    Check {
        /// Program configuration (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Field catalogue (TOML); the standard catalogue when omitted
        #[arg(long)]
        catalogue: Option<PathBuf>,
    },

    /// Print a sample program configuration as TOML
    Sample {
        /// Sample name
        #[arg(value_parser = PossibleValuesParser::new(SAMPLE_NAMES))]
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Tui,
}

/// Options of the preview subcommand.
struct PreviewArgs<'a> {
    config: &'a Path,
    catalogue: Option<&'a Path>,
    layout: Option<&'a str>,
    existing: bool,
    question: usize,
    hide_prefilled: bool,
    format: OutputFormat,
    output: Option<&'a Path>,
}

/// Main CLI entry point
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Preview {
            config,
            catalogue,
            layout,
            existing,
            question,
            hide_prefilled,
            format,
            output,
        } => preview(PreviewArgs {
            config: &config,
            catalogue: catalogue.as_deref(),
            layout: layout.as_deref(),
            existing,
            question,
            hide_prefilled,
            format,
            output: output.as_deref(),
        }),
        Commands::Check { config, catalogue } => check(&config, catalogue.as_deref()),
        Commands::Sample { name } => sample(&name),
    }
}

fn preview(args: PreviewArgs<'_>) -> Result<()> {
    let program = config::load_config(args.config)?;
    let catalogue = config::load_catalogue(args.catalogue)?;
    let context = build_context(&program, &args)?;

    match args.format {
        OutputFormat::Html => {
            let tree = render_preview(&program, &catalogue, &context);
            let html = to_html(&tree, &HtmlOptions::new());
            match args.output {
                Some(path) => {
                    fs::write(path, html)
                        .with_context(|| format!("Failed to write preview: {:?}", path))?;
                    tracing::info!(?path, "wrote HTML preview");
                }
                None => print!("{html}"),
            }
        }
        OutputFormat::Tui => {
            let preview = RatatuiPreview::new().with_title(program.program_name.clone());
            match preview.run(&program, &catalogue, context) {
                Ok(last) => tracing::info!(
                    user = last.user_type.label(),
                    layout = %last.layout_style,
                    "preview closed"
                ),
                Err(RatatuiError::Cancelled) => tracing::info!("preview cancelled"),
                Err(e) => return Err(e).context("Terminal preview failed"),
            }
        }
    }

    Ok(())
}

fn build_context(
    program: &regform::ProgramConfiguration,
    args: &PreviewArgs<'_>,
) -> Result<RenderContext> {
    let mut context = RenderContext::from_config(program)
        .with_question_index(args.question.saturating_sub(1));

    if let Some(layout) = args.layout {
        context.layout_style = layout.parse::<LayoutStyle>()?;
    }
    if args.existing {
        context.user_type = UserType::Existing;
    }
    if args.hide_prefilled {
        context.prefilled_policy = PrefilledPolicy::Hide;
    }

    Ok(context)
}

fn check(config_path: &Path, catalogue_path: Option<&Path>) -> Result<()> {
    let program = config::load_config(config_path)?;
    program
        .check()
        .with_context(|| format!("{:?} is not ready to publish", config_path))?;
    let catalogue = config::load_catalogue(catalogue_path)?;

    println!("{} ({} mode)", program.program_name, program.mode);
    if let Some(program_type) = program.program_type {
        println!("  {}: {}", program_type.name(), program_type.description());
    }
    for user_type in [UserType::New, UserType::Existing] {
        let context = RenderContext::new(user_type, program.layout_style);
        let grouped = group_sections(&catalogue, &program, &context);
        let sections: Vec<_> = grouped.sections().iter().map(|g| g.section.heading()).collect();
        println!(
            "  {}: {} fields in {}",
            user_type.label(),
            grouped.total_fields(),
            sections.join(", ")
        );
    }

    Ok(())
}

fn sample(name: &str) -> Result<()> {
    let program =
        example_programs::by_name(name).ok_or_else(|| anyhow!("Unknown sample: {name}"))?;
    print!("{}", config::to_toml(&program)?);
    Ok(())
}
