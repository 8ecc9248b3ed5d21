use std::path::PathBuf;

use anyhow::Context;
use argh::FromArgs;
use chrono::Local;

#[derive(FromArgs)]
/// Render the weather-station dashboard to a PNG.
struct Args {
    /// path to the TOML config file
    #[argh(option, short = 'c', default = "PathBuf::from(\"config.toml\")")]
    config: PathBuf,

    /// override the output path from the config
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args: Args = argh::from_env();

    let now = Local::now();
    log::info!("rendering panel for {}", now.format("%Y-%m-%d %H:%M"));
    weather_panel::run(&args.config, args.output.as_deref(), now)
        .with_context(|| format!("rendering with config {}", args.config.display()))?;
    Ok(())
}
