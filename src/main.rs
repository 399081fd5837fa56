use clap::Parser;
use program_builder::config::{BuildArgs, Command, LookupArgs, OutputFormat, SnapshotArgs};
use program_builder::core::{lookup, render, Program, Storage};
use program_builder::utils::error::{ErrorSeverity, Result};
use program_builder::utils::{logger, validation::Validate};
use program_builder::{
    decode, encode, CliConfig, LocalStorage, ProgramBuilder, ProgramConfig, SnapshotStore,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(config.command).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build(args).await,
        Command::Lookup(args) => lookup_code(args).await,
        Command::Encode { number } => {
            println!("{}", encode(number));
            Ok(())
        }
        Command::Decode { code } => {
            println!("{}", decode(code.trim())?);
            Ok(())
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

async fn build_program(
    storage: &LocalStorage,
    source: &SnapshotArgs,
    capacity: Option<u32>,
) -> Result<Program> {
    let program_config = source.program_config()?;
    let store = SnapshotStore::load(storage, &source.snapshot).await?;
    let builder = ProgramBuilder::new(&store, &store, &store, program_config.capacity_policy());
    builder
        .build_with_capacity(&source.edition(), capacity)
        .await
}

async fn build(args: BuildArgs) -> Result<()> {
    let storage = LocalStorage::new(".");
    let program = build_program(&storage, &args.source, args.capacity).await?;

    let rendered = match args.format {
        OutputFormat::Text => render::to_text(&program),
        OutputFormat::Csv => render::to_csv(&program)?,
        OutputFormat::Json => serde_json::to_string_pretty(&program)?,
    };

    match &args.output {
        Some(path) => {
            storage.write_file(path, rendered.as_bytes()).await?;
            tracing::info!("📁 Program saved to: {}", path);
            println!("📁 Program saved to: {}", path);
        }
        None => print!("{}", rendered),
    }

    let summary = program.summary();
    for slot in &summary.slots {
        tracing::info!(
            "{} #{}: {} placed ({} by chair override)",
            slot.series,
            slot.number_in_series,
            slot.placed,
            slot.overrides
        );
    }
    tracing::info!("✅ {} performances, {} waitlisted", summary.total, summary.waitlisted);

    Ok(())
}

async fn lookup_code(args: LookupArgs) -> Result<()> {
    let storage = LocalStorage::new(".");
    let program = build_program(&storage, &args.source, None).await?;

    for entry in lookup::find_by_code(&program, &args.code)? {
        let when = match (entry.assignment.number_in_series, entry.start_time) {
            (Some(number), Some(start)) => format!(
                "{} #{} at {}",
                entry.assignment.resolved_series,
                number,
                start.format("%a %Y-%m-%d %H:%M")
            ),
            _ => entry.assignment.resolved_series.clone(),
        };
        println!("{}: {}", entry.details.performer_name, when);
    }

    Ok(())
}

fn check_config(path: &str) -> Result<()> {
    let config = ProgramConfig::from_file(path)?;
    config.validate()?;

    let policy = config.capacity_policy();
    println!("📋 Configuration Summary:");
    println!("  Default capacity: {}", policy.default_capacity());
    println!("  Waitlist series: {}", policy.waitlist_series());
    for name in policy.series_names() {
        println!(
            "  {}: {:?} (capacity {})",
            name,
            policy.policy_for(name),
            policy.capacity_for(name)
        );
    }
    println!("✅ Configuration is valid");

    Ok(())
}
