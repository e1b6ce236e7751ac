use anyhow::Context;
use trirast::{rasterize, rasterize_parallel, RasterConfig, RasterStats};
use trirast_ppm::{save_ppm, Frame, Quantize};
use trirast_scenes::REFERENCE_SCENE;

use crate::args;

pub fn render_command(args: &args::Args) -> anyhow::Result<RasterStats> {
    let scene = &REFERENCE_SCENE;
    let width = args.width.unwrap_or(scene.width);
    let height = args.height.unwrap_or(scene.height);
    let quantize = if args.clamp {
        Quantize::Clamp
    } else {
        Quantize::Truncate
    };

    let mut frame = Frame::new(width, height, scene.background);
    let config = RasterConfig::default();
    let stats = if args.parallel {
        rasterize_parallel(&scene.triangle, &mut frame, &config)
    } else {
        rasterize(&scene.triangle, &mut frame, &config)
    };

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    save_ppm(&args.output, &frame, quantize)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!(
        "wrote {}x{} image to {}",
        width,
        height,
        args.output.display()
    );
    Ok(stats)
}
