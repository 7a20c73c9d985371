mod config;
mod error;
mod generate;
mod geometry;
mod render;
mod style;

use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    log::debug!("writing {:?} into {}", config.sizes, config.output_dir.display());

    println!("Generating shield icons...\n");
    let report = generate::generate_all(&config);

    if report.is_success() {
        println!("\n✅ All {} icons generated successfully!", report.written.len());
        return ExitCode::SUCCESS;
    }

    eprintln!(
        "\n{} of {} icons failed:",
        report.failures.len(),
        config.sizes.len()
    );
    for (size, e) in &report.failures {
        eprintln!("  {}x{}: {}", size, size, e);
    }
    if report.failures.iter().any(|(_, e)| e.is_io()) {
        eprintln!("Check that {} exists and is writable.", config.output_dir.display());
    }
    ExitCode::FAILURE
}
