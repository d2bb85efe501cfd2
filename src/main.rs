use anyhow::Context;
use clap::Parser;
use line_insert::utils::{logger, validation::Validate};
use line_insert::{CliConfig, InsertError, LinePrepender, LocalFileStore, ReportFormat, RunReport};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting line-insert");
    tracing::debug!("CLI config: {:?}", cli);

    // 合併並驗證配置
    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if settings.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no file will be written");
    }

    let prepender = LinePrepender::new(LocalFileStore::new(), &settings);

    let (report, error) = prepender.run_with_report();

    // 中止時仍輸出已處理的檔案；目錄無法列出時則無報告可輸出
    if error.is_none() || report.candidates > 0 {
        print_report(&report, cli.report)?;
    }
    if let Some(e) = error {
        exit_with(&e);
    }

    if !report.is_success() {
        tracing::error!("❌ {} of {} file(s) failed", report.failed.len(), report.candidates);
        std::process::exit(1);
    }

    tracing::info!("✅ Done");
    Ok(())
}

fn exit_with(e: &InsertError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

fn print_report(report: &RunReport, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => {
            let json = report.to_json().context("serializing run report")?;
            println!("{}", json);
        }
        ReportFormat::Text => {
            let verb = if report.dry_run { "Would modify" } else { "Modified" };
            println!(
                "📋 {} {} of {} file(s) ending in '{}' in {}",
                verb,
                report.modified.len(),
                report.candidates,
                report.suffix,
                report.directory.display()
            );
            for outcome in &report.modified {
                println!("  ✅ {}", outcome.path.display());
            }
            for failure in &report.failed {
                println!("  ❌ {}: {}", failure.path.display(), failure.message);
            }
            if report.aborted {
                println!("  ⏹️ Stopped early; remaining files were not processed");
            }
        }
    }
    Ok(())
}
