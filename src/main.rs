use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitlog::config::{Config, ReportFormat};
use fitlog::dataset::{DatasetReport, DatasetValidator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables first so RUST_LOG can come from .env
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitlog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_dataset_arg(std::env::args().nth(1));

    tracing::info!(
        "Validating {} with {} workers",
        config.dataset_path.display(),
        config.concurrency
    );

    let validator = DatasetValidator::new(config.concurrency);
    let report = validator.validate_file(&config.dataset_path).await?;

    match config.report_format {
        ReportFormat::Text => print_text(&report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_clean() {
        anyhow::bail!(
            "{} of {} documents are invalid ({} violations)",
            report.invalid_count(),
            report.documents.len(),
            report.violation_count()
        );
    }

    Ok(())
}

fn print_text(report: &DatasetReport) {
    for document in report.invalid() {
        let id = document.id.as_deref().unwrap_or("<no id>");
        for violation in &document.violations {
            println!(
                "line {} {} {}: {}",
                document.line,
                document.kind.as_str(),
                id,
                violation
            );
        }
    }
}
