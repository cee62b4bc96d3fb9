use std::path::PathBuf;

use anyhow::Context;
use sketchtile::{
    designer_settings, init_logging, Config, DesignerCommand, DesignerState, DrawingMode,
    PointerEvent, BUILD_DATE, VERSION,
};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("SketchTile {} (built {})", VERSION, BUILD_DATE);

    let config = load_config()?;
    let mut state = DesignerState::new(designer_settings(&config));

    // Generating before anything is drawn reports the empty canvas.
    if let Err(e) = state.generate_pattern() {
        info!("{}", e);
    }

    sketch_demo(&mut state)?;

    let tiling = state.generate_pattern()?;
    info!(
        copies = tiling.total_copies(),
        cell_size = tiling.cell_size,
        scale_factor = tiling.scale_factor,
        output_items = state.output_surface().len(),
        "pattern ready"
    );

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match Config::default_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("{}; using default settings", e);
                return Ok(Config::default());
            }
        },
    };

    let config = Config::load_or_default(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    config.validate()?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Draws a wave with free draw and a triangle with click points.
fn sketch_demo(state: &mut DesignerState) -> anyhow::Result<()> {
    state.apply(DesignerCommand::SelectMode(DrawingMode::FreeDraw))?;

    state.apply(DesignerCommand::Pointer(PointerEvent::down(60.0, 200.0)))?;
    for step in 1..=56 {
        let x = 60.0 + f64::from(step) * 5.0;
        let y = 200.0 + 40.0 * (f64::from(step) / 6.0).sin();
        state.apply(DesignerCommand::Pointer(PointerEvent::moved(x, y)))?;
    }
    state.apply(DesignerCommand::Pointer(PointerEvent::up(340.0, 200.0)))?;

    state.apply(DesignerCommand::SelectMode(DrawingMode::PathDraw))?;
    for (x, y) in [(150.0, 80.0), (250.0, 80.0), (200.0, 160.0), (150.0, 80.0)] {
        state.apply(DesignerCommand::Pointer(PointerEvent::down(x, y)))?;
    }
    if let Some(cmd) = DesignerCommand::from_key("Enter") {
        state.apply(cmd)?;
    }

    if !state.spiral_visible() {
        state.apply(DesignerCommand::ToggleSpiral)?;
    }
    info!(
        curves = state.canvas().shape_store().len(),
        input_items = state.input_surface().len(),
        "sketch finished"
    );
    Ok(())
}
