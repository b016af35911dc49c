use clap::Parser;
use strutil::utils::error::{ErrorSeverity, StrUtilError};
use strutil::utils::{logger, validation::Validate};
use strutil::{AnalysisEngine, CliConfig, LocalStorage, TextPipeline};

fn exit_code(e: &StrUtilError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(stage: &str, e: &StrUtilError) {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let code = exit_code(e);
    if code > 0 {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    let file_config = config.load_file_config();
    let log_level = file_config
        .as_ref()
        .ok()
        .and_then(|c| c.as_ref())
        .and_then(|c| c.log_level());
    logger::init_cli_logger(config.verbose, log_level);

    tracing::info!("Starting strutil");

    match file_config {
        Ok(Some(file_config)) => {
            tracing::debug!("Loaded configuration file: {:?}", config.config);
            file_config.apply_to(&mut config);
        }
        Ok(None) => {}
        Err(e) => {
            report_failure("Loading configuration", &e);
            return Ok(());
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        report_failure("Configuration validation", &e);
        return Ok(());
    }

    let pipeline = TextPipeline::new(LocalStorage::default(), config);
    let engine = AnalysisEngine::new(pipeline);

    match engine.run().await {
        Ok(target) => {
            if target != strutil::core::pipeline::STDOUT_TARGET {
                tracing::info!("📁 Report saved to: {}", target);
            }
        }
        Err(e) => report_failure("Analysis", &e),
    }

    Ok(())
}
