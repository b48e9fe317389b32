mod cli;

use clap::Parser;
use cli::Args;
use license_inventory::adapters::outbound::console::StderrProgressReporter;
use license_inventory::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use license_inventory::adapters::outbound::formatters::CsvReportFormatter;
use license_inventory::adapters::outbound::network::{
    GitHubLicenseRepository, PyPiRegistryClient,
};
use license_inventory::application::dto::InventoryRequest;
use license_inventory::application::use_cases::GenerateInventoryUseCase;
use license_inventory::config::{self, ConfigFile, Settings};
use license_inventory::ports::outbound::{OutputPresenter, ReportFormatter};
use license_inventory::shared::error::ExitCode;
use license_inventory::shared::Result;
use std::process;

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::from_config(load_config(&args)?);
    let source_url_policy = settings.source_url_policy()?;

    // Create adapters (Dependency Injection)
    let package_registry = PyPiRegistryClient::with_base_url(&settings.registry_url)?;
    let license_repository = GitHubLicenseRepository::with_api_url(
        &settings.hosting_api_url,
        settings.api_token(),
        &settings.token_env,
    )?;

    let use_case = GenerateInventoryUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        package_registry,
        license_repository,
        StderrProgressReporter::new(),
        source_url_policy,
    );

    let mut builder = InventoryRequest::builder()
        .requirements_path(&args.requirements)
        .overrides_path(&args.overrides)
        .extras_path(&args.extras);
    if let Some(manual) = args.manual_entries() {
        builder = builder.manual_entries_path(manual);
    }

    let response = use_case.execute(builder.build()?)?;

    eprintln!("📝 Writing CSV report...");
    let formatted_output = CsvReportFormatter::new().format(&response.rows)?;

    let presenter: Box<dyn OutputPresenter> = match args.output() {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` wins; otherwise look for the default file in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => Ok(Some(config::load_config_from_path(path)?)),
        None => config::discover_config(&std::env::current_dir()?),
    }
}
