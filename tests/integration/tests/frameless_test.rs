//! Integration tests for the frameless controller
//!
//! These tests verify:
//! - Moving the window from its body
//! - Resizing from edges and corners, including the minimum-size guards
//! - Cursor feedback and drag reset on release
//! - The surface calls made on attach

use frameless_chrome::window::{
    CursorShape, DragState, FramelessController, Geometry, InputObserver, InteractiveSurface,
    MouseButton, Point, ResizeEdge, Size, SurfaceId,
};
use frameless_chrome_integration_tests::mock_events::{feed, resized, Pointer};
use frameless_chrome_integration_tests::{headless_window, WINDOW_ID};
use mockall::mock;
use std::sync::Arc;

const TARGET: SurfaceId = SurfaceId(WINDOW_ID);
const WINDOW: Geometry = Geometry::new(100, 100, 400, 300);
const MINIMUM: Size = Size::new(200, 150);

fn setup() -> (
    FramelessController,
    Arc<frameless_chrome::window::HeadlessSurface>,
    Pointer,
) {
    let window = headless_window(WINDOW, MINIMUM);
    let mut controller = FramelessController::new();
    controller.attach(window.clone());
    controller.on_input(TARGET, &resized(WINDOW.width, WINDOW.height));
    (controller, window, Pointer::at(WINDOW.x, WINDOW.y))
}

#[test]
fn test_body_drag_moves_window() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press(200, 150));
    assert_eq!(controller.drag_state(), DragState::Move);

    controller.on_input(TARGET, &pointer.hover(210, 160));
    controller.on_input(TARGET, &pointer.hover(215, 160));
    assert_eq!(window.geometry(), Geometry::new(115, 110, 400, 300));

    controller.on_input(TARGET, &pointer.release(215, 160));
    assert_eq!(controller.drag_state(), DragState::Idle);
}

#[test]
fn test_left_edge_drag_grows_window() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press(2, 150));
    assert_eq!(controller.drag_state(), DragState::Resize(ResizeEdge::Left));

    controller.on_input(TARGET, &pointer.hover(2, 140));
    assert_eq!(window.geometry(), WINDOW);

    controller.on_input(TARGET, &pointer.hover(-8, 140));
    assert_eq!(window.geometry(), Geometry::new(90, 100, 410, 300));
}

#[test]
fn test_left_edge_stops_at_minimum_width() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press(2, 150));
    controller.on_input(TARGET, &pointer.hover(212, 150));

    // 400 - 210 would drop below the 200 pixel minimum
    assert_eq!(window.geometry(), WINDOW);
    assert_eq!(window.geometry_requests(), 0);
}

#[test]
fn test_top_left_corner_guards_each_axis() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press(2, 2));
    assert_eq!(controller.drag_state(), DragState::Resize(ResizeEdge::TopLeft));

    // Width still fits, height would drop to 140
    controller.on_input(TARGET, &pointer.hover(52, 162));
    assert_eq!(window.geometry(), Geometry::new(150, 100, 350, 300));
}

#[test]
fn test_right_edge_uses_press_snapshot() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press(398, 150));
    assert_eq!(controller.drag_state(), DragState::Resize(ResizeEdge::Right));

    controller.on_input(TARGET, &pointer.hover(408, 150));
    assert_eq!(window.geometry(), Geometry::new(100, 100, 410, 300));

    // Each step is applied to the press-time size, not accumulated
    controller.on_input(TARGET, &pointer.hover(418, 150));
    assert_eq!(window.geometry(), Geometry::new(100, 100, 410, 300));
}

#[test]
fn test_bottom_right_ignores_minimum() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press(398, 298));
    assert_eq!(controller.drag_state(), DragState::Resize(ResizeEdge::BottomRight));

    controller.on_input(TARGET, &pointer.hover(98, 148));
    assert_eq!(window.geometry(), Geometry::new(100, 100, 100, 150));
}

#[test]
fn test_cursor_follows_hot_zones() {
    let (mut controller, window, pointer) = setup();

    let cases = [
        ((2, 150), CursorShape::HorizontalResize),
        ((398, 150), CursorShape::HorizontalResize),
        ((200, 2), CursorShape::VerticalResize),
        ((200, 298), CursorShape::VerticalResize),
        ((2, 2), CursorShape::DiagonalNwSe),
        ((398, 298), CursorShape::DiagonalNwSe),
        ((398, 2), CursorShape::DiagonalNeSw),
        ((2, 298), CursorShape::DiagonalNeSw),
        ((200, 150), CursorShape::Arrow),
    ];

    for ((x, y), expected) in cases {
        controller.on_input(TARGET, &pointer.hover(x, y));
        assert_eq!(window.cursor(), expected, "hover at ({}, {})", x, y);
    }
}

#[test]
fn test_release_resets_drag_and_cursor() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press(2, 2));
    controller.on_input(TARGET, &pointer.hover(2, 2));
    assert_eq!(window.cursor(), CursorShape::DiagonalNwSe);

    controller.on_input(TARGET, &pointer.release(2, 2));
    assert!(controller.drag_state().is_idle());
    assert_eq!(window.cursor(), CursorShape::Arrow);

    // Motion after release changes nothing
    let before = window.geometry();
    controller.on_input(TARGET, &pointer.hover(50, 50));
    assert_eq!(window.geometry(), before);
}

#[test]
fn test_right_button_does_not_start_drag() {
    let (mut controller, window, pointer) = setup();

    controller.on_input(TARGET, &pointer.press_with(200, 150, MouseButton::Right));
    assert_eq!(controller.drag_state(), DragState::Idle);

    controller.on_input(TARGET, &pointer.hover(250, 150));
    assert_eq!(window.geometry(), WINDOW);
}

#[test]
fn test_disabled_move_and_resize() {
    let (mut controller, window, pointer) = setup();
    controller.set_move_enabled(false);
    controller.set_resize_enabled(false);

    let events = pointer.drag(Point::new(200, 150), Point::new(260, 190), 3);
    assert_eq!(feed(&mut controller, TARGET, &events), 0);

    let events = pointer.drag(Point::new(2, 150), Point::new(-40, 150), 3);
    feed(&mut controller, TARGET, &events);

    assert_eq!(window.geometry(), WINDOW);
}

#[test]
fn test_events_for_other_windows_are_ignored() {
    let (mut controller, window, pointer) = setup();

    let events = pointer.drag(Point::new(200, 150), Point::new(260, 190), 2);
    feed(&mut controller, SurfaceId(WINDOW_ID + 1), &events);

    assert_eq!(window.geometry(), WINDOW);
    assert_eq!(controller.drag_state(), DragState::Idle);
}

#[test]
fn test_oversized_padding_survives_resize() {
    let (mut controller, window, pointer) = setup();

    controller.set_padding(u32::MAX);
    controller.on_input(TARGET, &resized(WINDOW.width, WINDOW.height));
    controller.on_input(TARGET, &pointer.hover(200, 150));

    // The clamped corner squares now cover the whole window
    assert_eq!(window.cursor(), CursorShape::DiagonalNwSe);
    assert_eq!(controller.padding(), 4096);
}

#[test]
fn test_controller_never_consumes_events() {
    let (mut controller, _window, pointer) = setup();

    let events = pointer.drag(Point::new(2, 150), Point::new(-20, 150), 4);
    assert_eq!(feed(&mut controller, TARGET, &events), 0);
}

mock! {
    pub Surface {}

    impl InteractiveSurface for Surface {
        fn id(&self) -> SurfaceId;
        fn title(&self) -> String;
        fn geometry(&self) -> Geometry;
        fn minimum_size(&self) -> Size;
        fn set_geometry(&self, geometry: Geometry);
        fn move_to(&self, position: Point);
        fn set_cursor(&self, cursor: frameless_chrome::window::CursorShape);
        fn set_hover_tracking(&self, enabled: bool);
        fn is_maximized(&self) -> bool;
        fn show_maximized(&self);
        fn show_normal(&self);
        fn show_minimized(&self);
    }
}

#[test]
fn test_attach_enables_hover_tracking_once() {
    let mut first = MockSurface::new();
    first.expect_id().return_const(TARGET);
    first
        .expect_set_hover_tracking()
        .withf(|enabled| *enabled)
        .times(1)
        .return_const(());

    let mut second = MockSurface::new();
    second.expect_id().return_const(SurfaceId(WINDOW_ID + 1));
    second.expect_set_hover_tracking().times(0);

    let mut controller = FramelessController::new();
    controller.attach(Arc::new(first));
    controller.attach(Arc::new(second));

    assert!(controller.is_attached());
}

#[test]
fn test_move_goes_through_move_to() {
    let mut surface = MockSurface::new();
    surface.expect_id().return_const(TARGET);
    surface.expect_set_hover_tracking().return_const(());
    surface.expect_set_cursor().return_const(());
    surface.expect_geometry().return_const(WINDOW);
    surface
        .expect_move_to()
        .withf(|position| *position == Point::new(105, 103))
        .times(1)
        .return_const(());
    surface.expect_set_geometry().times(0);

    let pointer = Pointer::at(WINDOW.x, WINDOW.y);
    let mut controller = FramelessController::new();
    controller.attach(Arc::new(surface));
    controller.on_input(TARGET, &resized(WINDOW.width, WINDOW.height));
    controller.on_input(TARGET, &pointer.press(200, 150));
    controller.on_input(TARGET, &pointer.hover(205, 153));
}
