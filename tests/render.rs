use sketchpad::backend::SketchSurface;
use sketchpad::draw::{BLACK, Color, StrokeStyle, WHITE};
use sketchpad::input::{InputState, MouseButton, Tool};

const WIDTH: u32 = 120;
const HEIGHT: u32 = 80;

fn make_surface() -> SketchSurface {
    SketchSurface::new(
        WIDTH,
        HEIGHT,
        WHITE,
        StrokeStyle {
            color: BLACK,
            thickness: 2.0,
        },
    )
    .unwrap()
}

/// Reads the pixel at (x, y) as (b, g, r, a) bytes (Cairo ARGB32 little-endian).
fn pixel(surface: &mut SketchSurface, x: usize, y: usize) -> [u8; 4] {
    let image = surface.image();
    image.flush();
    let stride = image.stride() as usize;
    let data = image.data().expect("surface data");
    let offset = y * stride + x * 4;
    [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
}

fn is_dark(px: [u8; 4]) -> bool {
    px[0] < 128 && px[1] < 128 && px[2] < 128 && px[3] == 255
}

fn is_background(px: [u8; 4]) -> bool {
    px == [255, 255, 255, 255]
}

#[test]
fn empty_canvas_is_filled_with_background() {
    let mut surface = make_surface();
    surface.render(&[]).unwrap();
    assert!(is_background(pixel(&mut surface, 60, 40)));
    assert!(is_background(pixel(&mut surface, 0, 0)));
}

#[test]
fn rectangle_outline_is_stroked_and_interior_left_clear() {
    let mut surface = make_surface();
    let mut input = InputState::new(Tool::Rectangle);
    input.on_mouse_press(MouseButton::Left, 20.0, 20.0);
    input.on_mouse_motion(80.0, 60.0);
    input.on_mouse_release(MouseButton::Left, 80.0, 60.0);
    surface.present(&mut input).unwrap();

    assert!(is_dark(pixel(&mut surface, 50, 20)));
    assert!(is_dark(pixel(&mut surface, 20, 40)));
    assert!(is_background(pixel(&mut surface, 50, 40)));
}

#[test]
fn moved_line_is_painted_at_new_position() {
    let mut surface = make_surface();
    let mut input = InputState::new(Tool::Line);
    input.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    input.on_mouse_motion(50.0, 10.0);
    input.on_mouse_release(MouseButton::Left, 50.0, 10.0);
    surface.present(&mut input).unwrap();
    assert!(is_dark(pixel(&mut surface, 30, 10)));

    input.set_tool(Tool::Selection);
    input.on_mouse_press(MouseButton::Left, 30.0, 10.0);
    input.on_mouse_motion(20.0, 50.0);
    input.on_mouse_release(MouseButton::Left, 20.0, 50.0);
    surface.present(&mut input).unwrap();

    assert!(is_background(pixel(&mut surface, 30, 10)));
    assert!(is_dark(pixel(&mut surface, 40, 50)));
}

#[test]
fn custom_background_color_is_used() {
    let mut surface = SketchSurface::new(
        16,
        16,
        Color::new(0.0, 0.0, 1.0, 1.0),
        StrokeStyle {
            color: BLACK,
            thickness: 1.0,
        },
    )
    .unwrap();
    surface.render(&[]).unwrap();
    assert_eq!(pixel(&mut surface, 8, 8), [255, 0, 0, 255]);
}
