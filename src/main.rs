use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use dochub::catalog::{self, Category, Tool, ToolCatalog};
use dochub::clipboard::Osc52Clipboard;
use dochub::config::{Config, SimulationConfig};
use dochub::filter::{Tag, filter};
use dochub::session::{CompletionRule, Phase, SessionController, SimulatedPolicy, UploadedFile};
use dochub::tui::{self, App, TuiRunner};

fn setup_logging(default_level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dochub")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("dochub.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(default_level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => run_tui(config).await,
        Some(Commands::List { category, tag }) => handle_list_command(category.as_deref(), tag.as_deref()),
        Some(Commands::Show { id }) => handle_show_command(id, config),
        Some(Commands::Run {
            id,
            file,
            text,
            instant,
            json,
        }) => {
            let simulation = if *instant {
                SimulationConfig::instant()
            } else {
                config.simulation.clone()
            };
            handle_run_command(id, file.as_deref(), text.as_deref(), simulation, *json).await
        }
    }
}

async fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let controller = SessionController::new(Arc::new(SimulatedPolicy::new(config.simulation.clone())));
    let app = App::new(controller, Box::new(Osc52Clipboard::stdout()));

    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, app, config.tui.tick_rate_ms);
    let result = runner.run().await;

    // Restore even when the loop failed
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

fn print_tool(tool: &Tool) {
    println!("  {:<18} {}", tool.id.cyan(), tool.title.bold());
    println!("  {:<18} {}", "", tool.description.dimmed());
}

fn handle_list_command(category: Option<&str>, tag: Option<&str>) -> Result<()> {
    let category: Option<Category> = category.map(str::parse).transpose()?;
    let tag: Option<Tag> = tag.map(str::parse).transpose()?;
    info!("Listing tools - category: {:?}, tag: {:?}", category, tag);

    let catalog = ToolCatalog::builtin();
    let tools = filter(catalog.list_all(), category, tag);

    if tools.is_empty() {
        println!("{}", "No matching tools found.".yellow());
        println!("  Run {} to view all tools", "dochub list".cyan());
        return Ok(());
    }

    let heading = match (category, tag) {
        (None, None) => "All tools".to_string(),
        (Some(c), None) => c.label().to_string(),
        (None, Some(t)) => format!("Tag: {}", t.label()),
        (Some(c), Some(t)) => format!("{} / tag {}", c.label(), t.label()),
    };
    println!("{} ({})", heading.green().bold(), tools.len());
    for tool in tools {
        print_tool(tool);
    }
    Ok(())
}

fn handle_show_command(id: &str, config: &Config) -> Result<()> {
    let tool = ToolCatalog::builtin().require(id)?;
    let rule = CompletionRule::for_tool(tool);
    info!("Showing tool: {}", id);

    println!("{} {}", tool.title.green().bold(), format!("({})", tool.id).dimmed());
    println!("  {}", tool.description);
    println!("  {:<12} {}", "Category:".cyan(), tool.category.label());
    println!("  {:<12} {}", "Interaction:".cyan(), tool.interaction);
    println!("  {:<12} {:?}", "Input:".cyan(), tool.input_widget());
    if let Some(hint) = tool.accepts_hint() {
        println!("  {:<12} {}", "Accepts:".cyan(), hint);
    }
    println!("  {:<12} {}", "Action:".cyan(), tool.action_label());
    println!(
        "  {:<12} {} after {}ms",
        "Produces:".cyan(),
        rule.describe(),
        rule.latency(&config.simulation).as_millis()
    );
    Ok(())
}

async fn handle_run_command(
    id: &str,
    file: Option<&Path>,
    text: Option<&str>,
    simulation: SimulationConfig,
    json: bool,
) -> Result<()> {
    let tool = ToolCatalog::builtin().require(id)?.clone();
    info!("Running {} headless", tool.id);

    let mut controller = SessionController::new(Arc::new(SimulatedPolicy::new(simulation)));
    controller.open(tool);

    if let Some(path) = file {
        let upload = UploadedFile::from_path(path).with_context(|| format!("Cannot read {}", path.display()))?;
        controller.supply_file(upload)?;
        if let Some(warning) = controller.take_notice() {
            eprintln!("{} {}", "Warning:".yellow(), warning);
        }
    }
    if let Some(text) = text {
        controller.set_text(text)?;
    }

    controller.act()?;
    if !json {
        println!("{}", "Processing...".cyan());
    }

    match controller.wait_for_completion().await? {
        Phase::Result => {}
        _ => {
            let notice = controller.take_notice().unwrap_or_default();
            return Err(eyre!("{}", notice));
        }
    }

    let record = controller
        .session()
        .and_then(|s| s.record())
        .ok_or_else(|| eyre!("session finished without a result"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else if record.kind == "file" {
        println!("{}", "Processing Complete".green().bold());
        println!("  Download {}", record.payload.bold());
    } else {
        println!("{}", record.payload);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    catalog::validate_builtin().context("Built-in catalog is inconsistent")?;

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
