extern crate color_eyre;
extern crate panorama;

use color_eyre::eyre::Result;
use flexi_logger::Logger;
use std::path::Path;

use panorama::image::Image;
use panorama::panorama::panorama_runtime_parameters::PanoramaRuntimeParameters;
use panorama::visualize::find_and_draw_matches;

fn main() -> Result<()> {
    color_eyre::install()?;
    let _logger = Logger::try_with_env_or_str("debug")?.start()?;

    let image_folder = "images/";
    let image_out_folder = "output/";
    let image_a = Image::open(Path::new(&format!("{}{}", image_folder, "rainier1.png")))?;
    let image_b = Image::open(Path::new(&format!("{}{}", image_folder, "rainier2.png")))?;

    let runtime_parameters = PanoramaRuntimeParameters::default();
    let matches = find_and_draw_matches(&image_a, &image_b, runtime_parameters.sigma, runtime_parameters.corner_threshold, runtime_parameters.nms_window);
    matches.save(Path::new(&format!("{}{}", image_out_folder, "matches.png")))?;

    Ok(())
}
