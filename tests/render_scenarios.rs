use mandelbrot_explorer::{Complex, ComplexRegion, Point, ViewportController, render};
use mandelbrot_explorer::PixelSize;

fn classic_region() -> ComplexRegion {
    ComplexRegion::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap()
}

#[test]
fn classic_view_interior_and_exterior() {
    let grid = render(classic_region(), 100, 67, 50).unwrap();

    assert_eq!(grid.width(), 100);
    assert_eq!(grid.height(), 67);
    assert_eq!(grid.counts().len(), 100 * 67);

    // c = (-1.01, 0.015) sits inside the period-two bulb
    assert_eq!(grid.get(Point::new(33, 34)), Some(50));
    // c = (0.97, 0.015) leaves within a couple of iterations
    assert!(grid.get(Point::new(99, 34)).unwrap() < 5);
}

#[test]
fn counts_never_exceed_max_cycles() {
    let grid = render(classic_region(), 64, 48, 30).unwrap();

    assert!(grid.counts().iter().all(|&count| count <= 30));
    assert!(grid.counts().contains(&30));
}

#[test]
fn renders_are_deterministic() {
    let first = render(classic_region(), 80, 60, 200).unwrap();
    let second = render(classic_region(), 80, 60, 200).unwrap();

    assert_eq!(first, second);
}

#[test]
fn zero_sized_or_zero_budget_renders_fail() {
    assert!(render(classic_region(), 0, 10, 50).is_err());
    assert!(render(classic_region(), 10, 0, 50).is_err());
    assert!(render(classic_region(), 10, 10, 0).is_err());
}

#[test]
fn full_frame_selection_keeps_the_region() {
    let size = PixelSize::new(120, 80).unwrap();
    let region = ComplexRegion::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
    let mut viewport = ViewportController::new(size, region);

    viewport.press(Point::new(0, 0));
    viewport.release(Point::new(120, 80)).unwrap();

    let zoomed = viewport.region();
    assert!((zoomed.bottom_left().real - -2.0).abs() < 1e-12);
    assert!((zoomed.top_right().real - 1.0).abs() < 1e-12);
    assert!((zoomed.bottom_left().imag - -1.0).abs() < 1e-12);
    assert!((zoomed.top_right().imag - 1.0).abs() < 1e-12);
}

#[test]
fn wheel_zoom_in_then_out_restores_the_region() {
    let size = PixelSize::new(300, 200).unwrap();
    let mut viewport = ViewportController::new(size, classic_region());

    viewport.apply_wheel_zoom(-200, Point::new(10, 10)).unwrap();
    assert!((viewport.region().width() - 1.5).abs() < 1e-12);

    viewport.apply_wheel_zoom(200, Point::new(290, 190)).unwrap();
    let region = viewport.region();
    assert!((region.width() - 3.0).abs() < 1e-12);
    assert!((region.center().real - -0.5).abs() < 1e-12);
    assert!(region.center().imag.abs() < 1e-12);
}

#[test]
fn zoomed_render_stays_within_budget() {
    let size = PixelSize::new(40, 30).unwrap();
    let mut viewport = ViewportController::new(size, classic_region());

    viewport.press(Point::new(5, 5));
    viewport.release(Point::new(25, 20)).unwrap();

    let region = viewport.region();
    let grid = render(region, size.width(), size.height(), 100).unwrap();

    assert_eq!(grid.size(), size);
    assert!(grid.counts().iter().all(|&count| count <= 100));
}
