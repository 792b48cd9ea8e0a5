use anyhow::Context;

use dex_prep::analyzer;
use dex_prep::app;
use dex_prep::config::AnalyzerConfig;
use dex_prep::state::ViewerState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AnalyzerConfig::from_env();
    let analysis = analyzer::run(&config)
        .with_context(|| format!("analyzing {}", config.input.display()))?;

    if config.show_viewer {
        app::show(ViewerState::from_analysis(&analysis, &config.image_path))?;
    } else {
        log::info!("No display available; skipping the viewer window");
    }
    Ok(())
}
