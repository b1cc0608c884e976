extern crate color_eyre;
extern crate panorama;

use color_eyre::eyre::Result;
use flexi_logger::Logger;
use log::info;
use std::path::Path;

use panorama::image::Image;
use panorama::panorama::{panorama_image, panorama_runtime_parameters::PanoramaRuntimeParameters};
use panorama::panorama::cylindrical::cylindrical_project;

fn main() -> Result<()> {
    color_eyre::install()?;
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let image_folder = "images/";
    let image_out_folder = "output/";
    let focal_length = 500.0;

    let image_a = Image::open(Path::new(&format!("{}{}", image_folder, "field1.jpg")))?;
    let image_b = Image::open(Path::new(&format!("{}{}", image_folder, "field2.jpg")))?;

    cylindrical_project(&image_a, focal_length).save(Path::new(&format!("{}{}", image_out_folder, "field1_cylindrical.png")))?;

    let runtime_parameters = PanoramaRuntimeParameters {
        cylindrical_focal_length: Some(focal_length),
        ..PanoramaRuntimeParameters::default()
    };
    let panorama = panorama_image(&image_a, &image_b, &runtime_parameters)?;
    info!("{} inliers of {} matches", panorama.inlier_count, panorama.matches.len());
    panorama.image.save(Path::new(&format!("{}{}", image_out_folder, "field_panorama.png")))?;

    Ok(())
}
