extern crate panorama;

use panorama::image::{Image, image_encoding::ImageEncoding};
use panorama::image::features::{descriptor::Descriptor, geometry::point::Point, matches::Match};
use panorama::panorama::homography::translation_homography;
use panorama::visualize::{both_images, draw_inliers, draw_matches, find_and_draw_matches, mark_corners};

fn gray(width: usize, height: usize, value: f64) -> Image {
    Image::from_vec(width, height, 1, vec![value; width*height], ImageEncoding::F64)
}

fn is_color(image: &Image, x: isize, y: isize, color: [f64; 3]) -> bool {
    (0..3).all(|c| image.get_pixel(x, y, c) == color[c])
}

#[test]
fn side_by_side_canvas() {
    let a = gray(10, 6, 0.25);
    let b = gray(7, 9, 0.75);

    let canvas = both_images(&a, &b);

    assert_eq!((canvas.width(), canvas.height(), canvas.channels()), (17, 9, 3));
    assert!(is_color(&canvas, 9, 5, [0.25; 3]));
    assert!(is_color(&canvas, 9, 7, [0.0; 3]));
    assert!(is_color(&canvas, 10, 8, [0.75; 3]));
}

#[test]
fn corners_are_marked_with_crosses() {
    let image = gray(30, 30, 0.5);
    let corner = Descriptor { location: Point::new(15.0, 12.0), data: vec![0.0; 25] };

    let marked = mark_corners(&image, &[corner]);

    assert_eq!(marked.channels(), 3);
    assert!(is_color(&marked, 15 - 9, 12, [1.0, 0.0, 1.0]));
    assert!(is_color(&marked, 15, 12 + 9, [1.0, 0.0, 1.0]));
    assert!(is_color(&marked, 15 + 10, 12, [0.5; 3]));
    assert!(is_color(&marked, 16, 13, [0.5; 3]));
    assert_eq!(image.channels(), 1);
}

#[test]
fn matches_are_colored_by_inlier_prefix() {
    let a = gray(20, 20, 0.0);
    let b = gray(20, 20, 0.0);
    let matches = vec![
        Match::new(0, 0, Point::new(2.0, 3.0), Point::new(2.0, 3.0), 0.0),
        Match::new(1, 1, Point::new(5.0, 15.0), Point::new(5.0, 15.0), 0.0)
    ];

    let canvas = draw_matches(&a, &b, &matches, 1);

    assert_eq!((canvas.width(), canvas.height()), (40, 20));
    assert!(is_color(&canvas, 2, 3, [0.0, 1.0, 0.0]));
    assert!(is_color(&canvas, 22, 3, [0.0, 1.0, 0.0]));
    assert!(is_color(&canvas, 12, 3, [0.0, 1.0, 0.0]));
    assert!(is_color(&canvas, 5, 15, [1.0, 0.0, 0.0]));
    assert!(is_color(&canvas, 25, 15, [1.0, 0.0, 0.0]));
}

#[test]
fn inliers_are_drawn_green() {
    let a = gray(20, 20, 0.0);
    let b = gray(20, 20, 0.0);
    let matches = vec![
        Match::new(0, 0, Point::new(2.0, 2.0), Point::new(12.0, 17.0), 0.0),
        Match::new(1, 1, Point::new(4.0, 8.0), Point::new(5.0, 8.0), 0.0)
    ];

    let canvas = draw_inliers(&a, &b, &translation_homography(1.0, 0.0), &matches, 2.0);

    assert!(is_color(&canvas, 4, 8, [0.0, 1.0, 0.0]));
    assert!(is_color(&canvas, 2, 2, [1.0, 0.0, 0.0]));
    assert_eq!(matches[0].ai, 0);
}

#[test]
fn matches_between_identical_images_are_horizontal() {
    let mut image = gray(30, 30, 0.0);
    for y in 10..20 {
        for x in 10..20 {
            image.set_pixel(x, y, 0, 1.0);
        }
    }

    let canvas = find_and_draw_matches(&image, &image, 1.0, 0.5, 3);

    assert_eq!((canvas.width(), canvas.height(), canvas.channels()), (60, 30, 3));
    // a red line runs from every corner to its copy in b
    assert!(is_color(&canvas, 30, 10, [1.0, 0.0, 0.0]));
    assert!(is_color(&canvas, 30, 19, [1.0, 0.0, 0.0]));
}
