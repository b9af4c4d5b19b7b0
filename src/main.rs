use clap::Parser;
use growth_check::utils::logger::{self, LogFormat};
use growth_check::utils::validation::Validate;
use growth_check::{renderer_for, CliConfig, GrowthEngine, GrowthError};
use std::path::Path;

fn run(config: &CliConfig) -> Result<(), GrowthError> {
    config.validate()?;
    let request = config.resolve()?;
    tracing::debug!("Resolved request: {:?}", request);

    let report = GrowthEngine::new().evaluate(&request.input)?;
    let rendered = renderer_for(request.format, request.pretty).render(&report)?;

    match &request.output {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, rendered)?;
            tracing::info!("📁 Result saved to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flag(config.log_json), config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
        tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
