extern crate color_eyre;
extern crate panorama;

use color_eyre::eyre::Result;
use flexi_logger::Logger;
use log::info;
use std::path::Path;

use panorama::image::Image;
use panorama::image::interpolation::bilinear_resize;
use panorama::panorama::{panorama_image, prepare_image, panorama_runtime_parameters::PanoramaRuntimeParameters};
use panorama::visualize::draw_inliers;

const MAX_INPUT_WIDTH: usize = 800;

fn downscale(image: Image) -> Image {
    match image.width() > MAX_INPUT_WIDTH {
        true => {
            let height = image.height()*MAX_INPUT_WIDTH/image.width();
            bilinear_resize(&image, MAX_INPUT_WIDTH, height.max(1))
        },
        false => image
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let args = std::env::args().collect::<Vec<String>>();
    let image_folder = "images/";
    let image_out_folder = "output/";
    let image_a_path = args.get(1).cloned().unwrap_or(format!("{}{}", image_folder, "rainier1.png"));
    let image_b_path = args.get(2).cloned().unwrap_or(format!("{}{}", image_folder, "rainier2.png"));

    let runtime_parameters = match args.get(3) {
        Some(config_path) => PanoramaRuntimeParameters::load(Path::new(config_path))?,
        None => PanoramaRuntimeParameters::default()
    };
    info!("{:?}", runtime_parameters);

    let image_a = downscale(Image::open(Path::new(&image_a_path))?);
    let image_b = downscale(Image::open(Path::new(&image_b_path))?);

    let panorama = panorama_image(&image_a, &image_b, &runtime_parameters)?;
    let panorama_out_path = format!("{}{}", image_out_folder, "panorama.png");
    panorama.image.save(Path::new(&panorama_out_path))?;
    info!("wrote {}x{} panorama to {}", panorama.image.width(), panorama.image.height(), panorama_out_path);

    if let Some(h) = panorama.homography {
        info!("homography:{}", h);
        let prepared_a = prepare_image(&image_a, &runtime_parameters);
        let prepared_b = prepare_image(&image_b, &runtime_parameters);
        let inliers = draw_inliers(&prepared_a, &prepared_b, &h, &panorama.matches, runtime_parameters.inlier_threshold);
        inliers.save(Path::new(&format!("{}{}", image_out_folder, "inliers.png")))?;
    }

    Ok(())
}
