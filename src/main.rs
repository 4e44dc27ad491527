use clap::Parser;
use portfolio_render::utils::logger;
use portfolio_render::{render_site, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting portfolio-render");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(".".to_string());

    match render_site(&storage, &settings).await {
        Ok(report) if report.is_complete() => {
            println!("✅ Rendered {} into all regions", settings.output_path());
        }
        Ok(report) => {
            for failure in report.failures() {
                eprintln!("⚠️ {}", failure);
            }
            eprintln!(
                "⚠️ Rendered {}/3 regions into {}",
                report.rendered_count(),
                settings.output_path()
            );
            std::process::exit(3);
        }
        Err(e) => {
            tracing::error!("❌ Rendering failed: {}", e);
            eprintln!("❌ {}", e);
            // 擷取/解析失敗與設定/IO 錯誤使用不同的退出碼
            let exit_code = if e.is_document_error() { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
