use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail, eyre};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use toolhub::browser::{self, SystemOpener};
use toolhub::catalog::Catalog;
use toolhub::config::Config;
use toolhub::domain::{LinkKind, Pricing, Tool};
use toolhub::query::{self, FilterState, SortKey};
use toolhub::submission::{self, Notification, SimulatedSubmitter, SubmissionForm};
use toolhub::tui::{self, App, TuiRunner};

mod cli;

use cli::Cli;
use cli::commands::{Commands, SubmitArgs};

fn setup_logging(config: &Config) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolhub")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolhub.log");

    // Log to a file so the TUI owns the terminal
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path = cli.catalog.as_ref().or(config.catalog.path.as_ref());
    let catalog = match path {
        Some(path) => Catalog::from_file(path).context(format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Failed to load built-in catalog")?,
    };
    info!(
        "Catalog ready: {} tools in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok(catalog)
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let catalog = load_catalog(cli, config)?;

    match &cli.command {
        None => run_tui(catalog, config).await,
        Some(Commands::Categories) => handle_categories_command(&catalog),
        Some(Commands::Tags) => handle_tags_command(&catalog),
        Some(Commands::Featured) => handle_featured_command(&catalog),
        Some(Commands::Search {
            query,
            category,
            pricing,
            tag,
            sort,
            json,
        }) => handle_search_command(&catalog, query.as_deref(), category.as_deref(), pricing, tag, sort, *json),
        Some(Commands::Show { id, json }) => handle_show_command(&catalog, id, *json),
        Some(Commands::Open { id, target }) => handle_open_command(&catalog, id, target),
        Some(Commands::Submit(args)) => handle_submit_command(&catalog, args, config).await,
    }
}

async fn run_tui(catalog: Catalog, config: &Config) -> Result<()> {
    info!("Launching TUI mode");

    let app = App::new(catalog, config.tui.clone(), config.submission.clone());
    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, app, config.submission.delay_ms);

    let result = runner.run().await;
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

fn print_tool_line(tool: &Tool) {
    let featured = if tool.featured { " ★".yellow().to_string() } else { String::new() };
    println!(
        "{:>4}  {}{}  {} {}  {}",
        tool.id.dimmed(),
        tool.name.bold(),
        featured,
        format!("{:.1}", tool.rating).yellow(),
        tool.pricing.label().cyan(),
        tool.description
    );
}

fn handle_categories_command(catalog: &Catalog) -> Result<()> {
    for category in catalog.categories() {
        let count = catalog.tools_in_category(&category.id).len();
        println!(
            "{} {:<20} {:>3} tools  {}  {}",
            category.glyph(),
            category.name.bold(),
            count,
            category.id.dimmed(),
            category.description
        );
    }
    Ok(())
}

fn handle_tags_command(catalog: &Catalog) -> Result<()> {
    for tag in catalog.all_tags() {
        println!("#{}", tag);
    }
    Ok(())
}

fn handle_featured_command(catalog: &Catalog) -> Result<()> {
    println!("{}", "Featured Tools".green().bold());
    for tool in catalog.featured() {
        print_tool_line(tool);
    }
    Ok(())
}

/// Turn search arguments into a filter state the way the browser would build it
fn build_filter(
    text: Option<&str>,
    category: Option<&str>,
    pricing: &[String],
    tags: &[String],
    sort: &str,
) -> Result<FilterState> {
    let pricing = pricing
        .iter()
        .map(|p| Pricing::parse(p).ok_or_else(|| eyre!("Unknown pricing tier '{}' (free, freemium, paid)", p)))
        .collect::<Result<Vec<_>>>()?;

    if SortKey::parse(sort).is_none() {
        warn!("Unknown sort key '{}', using relevance", sort);
    }

    let mut filter = FilterState {
        search: text.unwrap_or("").to_string(),
        pricing,
        tags: tags.to_vec(),
        sort: SortKey::parse_or_default(sort),
        ..Default::default()
    };
    filter.set_category(category.map(str::to_string));
    Ok(filter)
}

fn handle_search_command(
    catalog: &Catalog,
    text: Option<&str>,
    category: Option<&str>,
    pricing: &[String],
    tags: &[String],
    sort: &str,
    json: bool,
) -> Result<()> {
    let filter = build_filter(text, category, pricing, tags, sort)?;

    if let Some(id) = filter.category.as_deref()
        && !catalog.has_category(id)
    {
        warn!("Search with unknown category: {}", id);
        eprintln!("{} unknown category '{}'", "Warning:".yellow(), id);
    }

    let results = query::search(catalog, &filter);
    info!("Search returned {} tools", results.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&results).context("Failed to serialize results")?);
        return Ok(());
    }

    if filter.is_filtered() {
        println!("{} tools found (sorted by {})", results.len(), filter.sort.label());
    } else {
        println!("Browse {}+ AI tools (sorted by {})", catalog.len(), filter.sort.label());
    }

    if results.is_empty() {
        println!("{}", "No tools found".yellow());
        println!("{}", "Try adjusting your search or filters".dimmed());
    }
    for tool in results {
        print_tool_line(tool);
    }
    Ok(())
}

fn handle_show_command(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let tool = catalog.require_tool(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(tool).context("Failed to serialize tool")?);
        return Ok(());
    }

    let category = catalog.category(&tool.category).map_or(tool.category.as_str(), |c| c.name.as_str());
    println!("{}", tool.name.bold());
    println!(
        "{}  {}  {} {}  {} users  since {}",
        category.cyan(),
        tool.pricing.label(),
        "★".yellow(),
        tool.rating,
        tool.users,
        tool.display_year()
    );
    println!();
    println!("{}", tool.long_description());

    for (heading, items) in [("Key Features", &tool.features), ("Use Cases", &tool.use_cases)] {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("{}", heading.green());
        for item in items {
            println!("  • {}", item);
        }
    }

    if !tool.tags.is_empty() {
        println!();
        let tags: Vec<String> = tool.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{} {}", "Tags:".green(), tags.join(" "));
    }

    println!();
    for (kind, url) in tool.links() {
        println!("{:<10} {}", kind.label().bold(), url);
    }
    Ok(())
}

fn handle_open_command(catalog: &Catalog, id: &str, target: &str) -> Result<()> {
    let kind = LinkKind::parse(target).ok_or_else(|| eyre!("Unknown link target '{}' (website, github, docs)", target))?;
    let tool = catalog.require_tool(id)?;
    let url = browser::open_link(&SystemOpener, tool, kind)?;
    println!("{} {}", "Opened".green(), url);
    Ok(())
}

async fn handle_submit_command(catalog: &Catalog, args: &SubmitArgs, config: &Config) -> Result<()> {
    let mut form = SubmissionForm {
        name: args.name.clone(),
        description: args.description.clone(),
        category: args.category.clone(),
        website: args.website.clone(),
        pricing: args.pricing.clone(),
        submitter_name: args.submitter_name.clone().unwrap_or_default(),
        submitter_email: args.submitter_email.clone().unwrap_or_default(),
        ..Default::default()
    };
    for tag in &args.tags {
        if !form.add_tag(tag, config.submission.max_tags) {
            warn!("Dropped tag '{}'", tag);
            eprintln!("{} skipped tag '{}'", "Warning:".yellow(), tag);
        }
    }

    println!("{}", "Submitting...".cyan());
    let submitter = SimulatedSubmitter::new(config.submission.delay_ms);
    let outcome = submission::submit_form(&mut form, catalog, &submitter).await;
    let notification = Notification::from_outcome(&outcome);

    match outcome {
        Ok(ack) => {
            println!("{}", notification.title.green().bold());
            println!("{}", notification.body);
            println!("Reference: {}", ack.reference.dimmed());
            Ok(())
        }
        Err(e) => {
            println!("{}", notification.title.red().bold());
            println!("{}", notification.body);
            bail!(e)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config comes first so its log level can seed the logger
    let (config, skipped) = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;

    for problem in &skipped {
        warn!("{}", problem);
        eprintln!("{} {}", "Warning:".yellow(), problem);
    }

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
