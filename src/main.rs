use anyhow::Context;
use clap::Parser;
use iso_duration::utils::{logger, validation::Validate};
use iso_duration::{CliConfig, OutputFormat, Report};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let inputs = config
        .inputs()
        .with_context(|| format!("Failed to read durations from {:?}", config.file))?;

    let mut failures = 0usize;
    for input in &inputs {
        let report = Report::from_input(input);
        if report.is_error() {
            failures += 1;
        }

        match config.format {
            OutputFormat::Text => println!("{}", report.render_text()),
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }
    }

    tracing::info!("Processed {} durations, {} rejected", inputs.len(), failures);

    if failures > 0 {
        if let Some(e) = inputs
            .iter()
            .find_map(|input| iso_duration::parse(input).err())
        {
            eprintln!("💡 {}", e.recovery_suggestion());
        }
        std::process::exit(1);
    }

    Ok(())
}
