mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, Settings};
use npm_org_sizes::adapters::outbound::console::StderrProgressReporter;
use npm_org_sizes::adapters::outbound::filesystem::NpmrcReader;
use npm_org_sizes::adapters::outbound::network::NpmRegistryClient;
use npm_org_sizes::application::dto::SizeReportRequest;
use npm_org_sizes::application::factories::{PresenterFactory, PresenterType};
use npm_org_sizes::application::use_cases::ReportPackageSizesUseCase;
use npm_org_sizes::shared::error::ExitCode;
use npm_org_sizes::shared::Result;
use npm_org_sizes::size_reporting::domain::OrgName;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse command-line arguments (clap exits with code 2 on usage errors)
    let args = Args::parse_args();

    let org = match OrgName::new(args.org.as_str()) {
        Ok(org) => org,
        Err(e) => {
            eprintln!("error: invalid value '{}' for '<ORG>': {}", args.org, e);
            process::exit(ExitCode::InvalidArguments.as_i32());
        }
    };

    if let Err(e) = run(args, org).await {
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

async fn run(args: Args, org: OrgName) -> Result<()> {
    // Load configuration (explicit path wins over auto-discovery)
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(&args, config)?;

    // Create adapters (Dependency Injection)
    let credentials_provider = NpmrcReader::new(
        resolve_npmrc_path(settings.npmrc.clone())?,
        settings.registry.clone(),
    );
    let registry = NpmRegistryClient::new(settings.registry.clone(), settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ReportPackageSizesUseCase::new(credentials_provider, registry, progress_reporter);

    // Execute use case
    let request = SizeReportRequest::new(org, settings.concurrency)?;
    let response = use_case.execute(request).await?;

    // Present output: CSV first, then the console table
    let csv = PresenterFactory::create(PresenterType::Csv(settings.output.clone()));
    csv.present(&response.packages)?;
    println!("CSV file created: {}", settings.output.display());

    if settings.show_table {
        let table = PresenterFactory::create(PresenterType::ConsoleTable);
        table.present(&response.packages)?;
    }

    Ok(())
}

/// Uses the configured credentials file, falling back to `$HOME/.npmrc`
fn resolve_npmrc_path(configured: Option<PathBuf>) -> Result<PathBuf> {
    match configured {
        Some(path) => Ok(path),
        None => NpmrcReader::default_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_npmrc_path_prefers_configured_path() {
        let path = resolve_npmrc_path(Some(PathBuf::from("/etc/npmrc"))).unwrap();
        assert_eq!(path, PathBuf::from("/etc/npmrc"));
    }

    #[test]
    fn test_resolve_npmrc_path_defaults_to_home() {
        if let Ok(home) = std::env::var("HOME") {
            let path = resolve_npmrc_path(None).unwrap();
            assert_eq!(path, PathBuf::from(home).join(".npmrc"));
        }
    }
}
