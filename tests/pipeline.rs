extern crate panorama;

use panorama::{Float, PanoramaError};
use panorama::image::{Image, image_encoding::ImageEncoding};
use panorama::panorama::{find_matches, panorama_image, panorama_runtime_parameters::PanoramaRuntimeParameters};

const WIDTH: usize = 44;
const HEIGHT: usize = 32;
const SHIFT: Float = 2.0;
/// (x, y, amplitude) of gaussian blobs well inside both views
const BLOBS: [(Float, Float, Float); 6] = [
    (12.0, 10.0, 0.9),
    (22.0, 9.0, 0.6),
    (30.0, 20.0, 0.8),
    (15.0, 21.0, 0.5),
    (25.0, 15.0, 0.7),
    (33.0, 11.0, 0.4)
];

fn scene(x: Float, y: Float) -> Float {
    0.1 + BLOBS.iter().map(|&(cx, cy, amplitude)| amplitude*(-((x - cx).powi(2) + (y - cy).powi(2))/(2.0*1.5*1.5)).exp()).sum::<Float>()
}

/**
 * View of the scene whose pixel (x,y) shows scene point (x - shift_x, y).
 */
fn view(shift_x: Float, channels: usize) -> Image {
    let mut image = Image::empty(WIDTH, HEIGHT, channels, ImageEncoding::F64);
    for channel in 0..channels {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                image.set_pixel(x as isize, y as isize, channel, scene(x as Float - shift_x, y as Float));
            }
        }
    }
    image
}

fn parameters() -> PanoramaRuntimeParameters {
    PanoramaRuntimeParameters {
        sigma: 2.0,
        corner_threshold: 1e-2,
        nms_window: 3,
        inlier_threshold: 2.0,
        ransac_iterations: 1000,
        ..PanoramaRuntimeParameters::default()
    }
}

#[test]
fn blob_corners_match_under_translation() {
    let a = view(0.0, 1);
    let b = view(SHIFT, 1);

    let feature_matches = find_matches(&a, &b, &parameters());

    assert_eq!(feature_matches.descriptors_a.len(), BLOBS.len());
    assert_eq!(feature_matches.descriptors_b.len(), BLOBS.len());
    assert_eq!(feature_matches.matches.len(), BLOBS.len());
    for m in feature_matches.matches.iter() {
        assert_eq!((m.q.x - m.p.x, m.q.y - m.p.y), (SHIFT, 0.0));
        assert!(m.distance < 1e-9);
    }
}

#[test]
fn translated_views_stitch_side_by_side() {
    let a = view(0.0, 1);
    let b = view(SHIFT, 1);

    let panorama = panorama_image(&a, &b, &parameters()).unwrap();

    let h = panorama.homography.expect("homography");
    assert!((h[(0, 2)] - SHIFT).abs() < 1e-3);
    assert!(h[(1, 2)].abs() < 1e-3);
    assert_eq!(panorama.inlier_count, BLOBS.len());
    assert_eq!((panorama.image.width(), panorama.image.height()), (WIDTH + 2, HEIGHT));

    for y in 0..HEIGHT as isize {
        for x in (2..WIDTH as isize).chain(WIDTH as isize + 1..WIDTH as isize + 2) {
            let expected = scene(x as Float - SHIFT, y as Float);
            assert!((panorama.image.get_pixel(x, y, 0) - expected).abs() < 1e-6, "({},{})", x, y);
        }
    }
}

#[test]
fn stitching_ignores_brightness_difference() {
    let a = view(0.0, 1);
    let b = view(SHIFT, 1).add_scalar(0.05);

    let panorama = panorama_image(&a, &b, &parameters()).unwrap();

    let h = panorama.homography.expect("homography");
    assert!((h[(0, 2)] - SHIFT).abs() < 1e-3);
    assert_eq!(panorama.image.width(), WIDTH + 2);
}

#[test]
fn color_views_stitch() {
    let a = view(0.0, 3);
    let b = view(SHIFT, 3);
    // three identical channels scale the response by 81
    let color_parameters = PanoramaRuntimeParameters { corner_threshold: 1.0, ..parameters() };

    let panorama = panorama_image(&a, &b, &color_parameters).unwrap();

    assert!(panorama.homography.is_some());
    assert_eq!((panorama.image.width(), panorama.image.height(), panorama.image.channels()), (WIDTH + 2, HEIGHT, 3));
}

#[test]
fn same_seed_same_panorama() {
    let a = view(0.0, 1);
    let b = view(SHIFT, 1);

    let first = panorama_image(&a, &b, &parameters()).unwrap();
    let second = panorama_image(&a, &b, &parameters()).unwrap();

    assert_eq!(first.homography, second.homography);
    assert_eq!(first.matches, second.matches);
    assert_eq!(first.image, second.image);
}

#[test]
fn featureless_images_fall_back_to_first_image() {
    let a = Image::from_vec(16, 12, 1, vec![0.3; 192], ImageEncoding::F64);
    let b = Image::from_vec(16, 12, 1, vec![0.6; 192], ImageEncoding::F64);

    let panorama = panorama_image(&a, &b, &parameters()).unwrap();

    assert!(panorama.homography.is_none());
    assert!(panorama.matches.is_empty());
    assert_eq!(panorama.image, a);
}

#[test]
fn featureless_cylindrical_images_fall_back_to_unprojected_first_image() {
    let a = Image::from_vec(16, 12, 1, vec![0.3; 192], ImageEncoding::F64);
    let b = Image::from_vec(16, 12, 1, vec![0.6; 192], ImageEncoding::F64);
    let cylindrical = PanoramaRuntimeParameters { cylindrical_focal_length: Some(5.0), ..parameters() };

    let panorama = panorama_image(&a, &b, &cylindrical).unwrap();

    assert!(panorama.homography.is_none());
    assert_eq!(panorama.image, a);
}

#[test]
fn single_pixel_corners_are_too_few_for_a_homography() {
    let mut a = Image::empty(4, 4, 1, ImageEncoding::F64);
    let mut b = Image::empty(4, 4, 1, ImageEncoding::F64);
    a.set_pixel(1, 1, 0, 1.0);
    b.set_pixel(3, 1, 0, 1.0);
    let tiny = PanoramaRuntimeParameters { corner_threshold: 1e-6, nms_window: 1, ..parameters() };

    let panorama = panorama_image(&a, &b, &tiny).unwrap();

    assert_eq!(panorama.matches.len(), 1);
    assert!(panorama.homography.is_none());
    assert_eq!(panorama.inlier_count, 0);
    assert_eq!(panorama.image, a);
}

#[test]
fn channel_mismatch_fails_fast() {
    let a = view(0.0, 1);
    let b = view(SHIFT, 3);
    assert!(matches!(panorama_image(&a, &b, &parameters()), Err(PanoramaError::ChannelMismatch { a: 1, b: 3 })));
}

#[test]
fn invalid_parameters_fail_fast() {
    let a = view(0.0, 1);
    let invalid = PanoramaRuntimeParameters { sigma: 0.0, ..parameters() };
    assert!(matches!(panorama_image(&a, &a, &invalid), Err(PanoramaError::InvalidParams(_))));
}

#[test]
fn cylindrical_preprocessing_keeps_image_height() {
    let a = view(0.0, 1);
    let b = view(SHIFT, 1);
    let cylindrical = PanoramaRuntimeParameters { cylindrical_focal_length: Some(200.0), ..parameters() };

    let panorama = panorama_image(&a, &b, &cylindrical).unwrap();

    assert!(panorama.image.height() >= HEIGHT);
    assert!(panorama.image.width() >= WIDTH);
}
