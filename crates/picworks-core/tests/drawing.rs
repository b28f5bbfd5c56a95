//! End-to-end drawing gestures on a canvas.

use kurbo::{Point, Rect};
use picworks_core::{
    Canvas, CanvasConfig, CanvasEvent, EditPhase, LineStroke, MouseButton, PointerEvent, Project,
    SerializableColor, Shape, ShapeKind, ToolKind,
};

fn canvas_with_unit(unit: u32) -> Canvas {
    let project = Project::with_color("Scene", 640, 480, SerializableColor::white(), unit).unwrap();
    Canvas::new(project, CanvasConfig::default()).unwrap()
}

fn drag(canvas: &mut Canvas, points: &[Point]) {
    let (first, rest) = points.split_first().unwrap();
    canvas.handle_pointer_event(PointerEvent::Down {
        position: *first,
        button: MouseButton::Left,
    });
    for p in rest {
        canvas.handle_pointer_event(PointerEvent::Move { position: *p });
    }
    let last = *points.last().unwrap();
    canvas.handle_pointer_event(PointerEvent::Up {
        position: last,
        button: MouseButton::Left,
    });
}

#[test]
fn rectangle_drag_adds_one_rectangle() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool(ToolKind::Rectangle);

    drag(
        &mut canvas,
        &[Point::new(10.0, 10.0), Point::new(30.0, 25.0), Point::new(50.0, 40.0)],
    );

    assert!(!canvas.is_drawing());
    assert_eq!(canvas.display_list().len(), 1);
    let element = canvas.display_list().elements_ordered()[0];
    assert_eq!(element.kind(), ShapeKind::Rectangle);
    assert_eq!(element.phase(), EditPhase::Finalized);
    assert_eq!(element.bounds(), Rect::new(10.0, 10.0, 50.0, 40.0));
    assert_eq!(element.z_value(), 1);
    assert!(element.antialiasing());
}

#[test]
fn gesture_event_sequence() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool(ToolKind::Line);
    let (a, b) = (Point::new(1.0, 1.0), Point::new(9.0, 9.0));

    drag(&mut canvas, &[a, b]);

    assert_eq!(
        canvas.poll_events(),
        vec![
            CanvasEvent::DrawingChanged(true),
            CanvasEvent::Forwarded(PointerEvent::Down {
                position: a,
                button: MouseButton::Left
            }),
            CanvasEvent::Forwarded(PointerEvent::Move { position: b }),
            CanvasEvent::DrawingChanged(false),
            CanvasEvent::RedrawRequested,
            CanvasEvent::Forwarded(PointerEvent::Up {
                position: b,
                button: MouseButton::Left
            }),
        ]
    );
    assert!(canvas.poll_events().is_empty());
}

#[test]
fn unknown_tool_draws_nothing() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool_by_action("picworks.action.draw.star");

    drag(&mut canvas, &[Point::new(5.0, 5.0), Point::new(50.0, 50.0)]);

    assert!(canvas.display_list().is_empty());
    assert!(!canvas.is_drawing());
    assert!(canvas.is_current_registered());
    let events = canvas.poll_events();
    assert!(!events.contains(&CanvasEvent::DrawingChanged(true)));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, CanvasEvent::Forwarded(_)))
            .count(),
        3
    );
}

#[test]
fn unknown_then_known_tool_draws() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool(ToolKind::None);
    drag(&mut canvas, &[Point::ZERO, Point::new(5.0, 5.0)]);

    canvas.set_tool(ToolKind::Ellipse);
    drag(&mut canvas, &[Point::ZERO, Point::new(20.0, 10.0)]);

    assert_eq!(canvas.display_list().len(), 1);
    assert_eq!(
        canvas.display_list().elements_ordered()[0].kind(),
        ShapeKind::Ellipse
    );
}

#[test]
fn each_gesture_makes_a_new_element() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool(ToolKind::Curve);

    drag(&mut canvas, &[Point::ZERO, Point::new(3.0, 4.0), Point::new(6.0, 8.0)]);
    drag(&mut canvas, &[Point::new(50.0, 50.0), Point::new(60.0, 50.0)]);

    let ordered = canvas.display_list().elements_ordered();
    assert_eq!(ordered.len(), 2);
    assert_ne!(ordered[0].id(), ordered[1].id());
    assert!(ordered.iter().all(|e| e.is_finalized()));
    match ordered[0].shape() {
        Shape::Curve(curve) => assert_eq!(curve.len(), 3),
        other => panic!("expected curve, got {:?}", other.kind()),
    }
}

#[test]
fn moves_keep_kind_and_layer() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_layer_index(4);
    canvas.set_tool(ToolKind::Polygon);
    canvas.on_pointer_down(Point::ZERO, MouseButton::Left);

    for i in 1..20 {
        let p = Point::new(i as f64 * 3.0, (i % 4) as f64 * 5.0);
        canvas.on_pointer_move(p);
        canvas.on_pointer_move(p);
        let current = canvas.current_element().unwrap();
        assert_eq!(current.kind(), ShapeKind::Polygon);
        assert_eq!(current.z_value(), 4);
        assert_eq!(current.phase(), EditPhase::Editing);
    }
    canvas.on_pointer_up(Point::new(60.0, 0.0), MouseButton::Left);
    assert_eq!(canvas.display_list().len(), 1);
}

#[test]
fn layer_index_not_advanced_between_shapes() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool(ToolKind::RoundedRect);
    drag(&mut canvas, &[Point::ZERO, Point::new(40.0, 40.0)]);
    drag(&mut canvas, &[Point::new(10.0, 10.0), Point::new(60.0, 60.0)]);

    let ordered = canvas.display_list().elements_ordered();
    assert!(ordered.iter().all(|e| e.z_value() == 1));
    // Later shape is on top.
    let hits = canvas
        .display_list()
        .elements_at_point(Point::new(20.0, 20.0), canvas.config().hit_tolerance);
    assert_eq!(hits.first(), Some(&ordered[1].id()));
}

#[test]
fn release_without_press_changes_nothing() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool(ToolKind::Text);
    canvas.on_pointer_move(Point::new(3.0, 3.0));
    canvas.on_pointer_up(Point::new(3.0, 3.0), MouseButton::Left);

    assert!(canvas.display_list().is_empty());
    assert!(!canvas
        .poll_events()
        .iter()
        .any(|e| matches!(e, CanvasEvent::DrawingChanged(_))));
}

#[test]
fn text_content_set_after_drawing() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_tool(ToolKind::Text);
    drag(&mut canvas, &[Point::new(10.0, 10.0)]);

    let id = canvas.display_list().elements_ordered()[0].id();
    let element = canvas.element_mut(id).unwrap();
    if let Shape::Text(text) = element.shape_mut() {
        text.set_content("Hello".to_string());
    }
    match canvas.display_list().get(id).unwrap().shape() {
        Shape::Text(text) => assert_eq!(text.content(), "Hello"),
        other => panic!("expected text, got {:?}", other.kind()),
    }
}

#[test]
fn grid_unit_20_and_toggle_off() {
    let mut canvas = canvas_with_unit(20);
    canvas.set_grid_visible(true);

    let tile = canvas.grid().unwrap();
    assert_eq!(tile.size, 20);
    assert_eq!(tile.offsets(LineStroke::Solid), vec![19]);
    assert_eq!(tile.offsets(LineStroke::Dotted), vec![3, 7, 11, 15]);
    assert_eq!(tile.color, SerializableColor::new(204, 204, 204, 255));

    canvas.set_grid_visible(false);
    assert!(canvas.grid().is_none());
    assert!(!canvas.grid_visible());
}

#[test]
fn config_shapes_new_elements() {
    let config = CanvasConfig::from_json(r#"{ "corner_radius": 3.0, "layer_index": 7 }"#).unwrap();
    let project = Project::with_color("Scene", 100, 100, SerializableColor::white(), 72).unwrap();
    let mut canvas = Canvas::new(project, config).unwrap();
    canvas.set_tool(ToolKind::RoundedRect);
    drag(&mut canvas, &[Point::ZERO, Point::new(30.0, 30.0)]);

    let element = canvas.display_list().elements_ordered()[0];
    assert_eq!(element.z_value(), 7);
    match element.shape() {
        Shape::RoundedRect(rr) => assert!((rr.corner_radius - 3.0).abs() < f64::EPSILON),
        other => panic!("expected rounded rect, got {:?}", other.kind()),
    }
}
