//! Renders a carousel into the raster surface and round-trips it through a
//! PNG on disk.

use glide_core::{
    Carousel, CarouselConfig, Color, RasterSlide, RasterSurface, Size,
};
use image::{DynamicImage, Rgba, RgbaImage};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn solid(rgba: [u8; 4]) -> RasterSlide {
    RasterSlide::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        8,
        4,
        Rgba(rgba),
    )))
}

fn carousel() -> Carousel<RasterSlide> {
    let config =
        CarouselConfig::new(0.5).with_background(Color::from_rgb8(0, 255, 0));
    let mut carousel =
        Carousel::init(config, Some(Size::new(40.0, 0.0))).unwrap();
    carousel.set_slides(vec![solid(RED), solid(BLUE)]);
    carousel
}

#[test]
fn settled_frame_is_filled_by_the_first_slide() {
    let carousel = carousel();
    let mut surface = RasterSurface::new(40, 20).unwrap();
    carousel.draw(&mut surface);

    assert_eq!(surface.pixels().get_pixel(0, 0).0, RED);
    assert_eq!(surface.pixels().get_pixel(20, 10).0, RED);
    assert_eq!(surface.pixels().get_pixel(39, 19).0, RED);
}

#[test]
fn snapshot_survives_a_png_round_trip() {
    let mut carousel = carousel();
    carousel.set_current_slide(1);
    for _ in 0..100 {
        carousel.tick(std::time::Duration::from_millis(16));
    }
    assert_eq!(carousel.current_slide_in_middle(), 1);

    let mut surface = RasterSurface::new(40, 20).unwrap();
    assert!(carousel.present(&mut surface));
    assert!(!carousel.present(&mut surface));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    surface.save(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (40, 20));
    assert_eq!(decoded.get_pixel(20, 10).0, BLUE);
}

#[test]
fn missing_slide_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let err = RasterSlide::open(&path).unwrap_err();
    assert!(err.to_string().contains("missing.png"));
}
