use moodlet_floorplan::{EntityId, FloorplanState, Point, Segment, ROTATION_STEP_DEG};
use moodlet_settings::Config;

fn state_with_wall(from: (f64, f64), to: (f64, f64)) -> (FloorplanState, EntityId) {
    let mut state = FloorplanState::new();
    let id = state
        .store
        .add_wall(Point::new(from.0, from.1), Point::new(to.0, to.1));
    (state, id)
}

#[test]
fn test_rescale_keeps_start_and_direction() {
    let (mut state, id) = state_with_wall((10.0, 10.0), (110.0, 10.0));
    state.select_wall(id);
    assert_eq!(state.wall_length_input(), 50.0);

    assert!(state.apply_wall_length(100.0));
    let wall = state.store.wall(id).unwrap();
    assert_eq!((wall.x1, wall.y1), (10.0, 10.0));
    assert_eq!((wall.x2, wall.y2), (210.0, 10.0));
    assert_eq!(state.wall_length_cm(id), Some(100.0));
}

#[test]
fn test_rescale_rejects_invalid_targets() {
    let (mut state, id) = state_with_wall((0.0, 0.0), (100.0, 0.0));
    state.select_wall(id);

    assert!(!state.apply_wall_length(0.0));
    assert!(!state.apply_wall_length(-20.0));
    assert!(!state.apply_wall_length(f64::INFINITY));
    assert!(!state.apply_wall_length(f64::NAN));
    assert_eq!(state.store.wall(id).unwrap().x2, 100.0);
}

#[test]
fn test_rescale_degenerate_wall_is_noop() {
    let (mut state, id) = state_with_wall((5.0, 5.0), (5.0, 5.0));
    state.select_wall(id);
    assert_eq!(state.wall_length_input(), 0.0);
    assert!(!state.apply_wall_length(100.0));
    assert!(state.store.wall(id).unwrap().is_degenerate());
}

#[test]
fn test_window_width_keeps_position() {
    let (mut state, wall) = state_with_wall((0.0, 0.0), (400.0, 0.0));
    let window = state.store.add_window(wall, 0.3, 120.0);
    state.select_window(window);

    assert!(state.set_window_width(150.0));
    assert!(!state.set_window_width(-1.0));
    let window = state.store.window(window).unwrap();
    assert_eq!(window.width_cm, 150.0);
    assert_eq!(window.pos_t, 0.3);
}

#[test]
fn test_door_rotation_accumulates() {
    let mut state = FloorplanState::new();
    let door = state.store.add_door(Point::new(0.0, 0.0), 80.0);
    state.select_door(door);

    for _ in 0..4 {
        assert!(state.rotate_selected());
    }
    assert_eq!(state.store.door(door).unwrap().rotation, 360.0);
}

#[test]
fn test_door_rotation_normalized_when_configured() {
    let mut config = Config::default();
    config.drawing.normalize_rotation = true;
    let mut state = FloorplanState::with_config(config);
    let door = state.store.add_door(Point::new(0.0, 0.0), 80.0);
    state.select_door(door);

    for _ in 0..4 {
        state.rotate_selected();
    }
    assert_eq!(state.store.door(door).unwrap().rotation, 0.0);
}

#[test]
fn test_rotation_step_ignores_settings_override() {
    // Older settings files carried a step size; it no longer has any effect.
    let config: Config =
        serde_json::from_str(r#"{ "drawing": { "rotation_step_deg": 45 } }"#).unwrap();
    let mut state = FloorplanState::with_config(config);
    let closet = state.store.add_closet(Point::new(0.0, 0.0));
    state.select_closet(closet);

    assert!(state.rotate_selected());
    assert_eq!(state.store.closet(closet).unwrap().rotation, ROTATION_STEP_DEG);
    assert_eq!(ROTATION_STEP_DEG, 90.0);

    for _ in 0..3 {
        state.rotate_selected();
    }
    assert_eq!(state.store.closet(closet).unwrap().rotation, 360.0);
}

#[test]
fn test_rotate_without_selection_is_noop() {
    let mut state = FloorplanState::new();
    assert!(!state.rotate_selected());
}

#[test]
fn test_window_follows_host_wall_on_drag() {
    let (mut state, wall) = state_with_wall((0.0, 0.0), (0.0, 400.0));
    let window = state.store.add_window(wall, 0.5, 120.0);

    assert!(state.drag_window(window, Point::new(30.0, 100.0)));
    let w = state.store.window(window).unwrap();
    assert_eq!(w.pos_t, 0.25);
    assert_eq!(state.window_center(window), Some(Point::new(0.0, 100.0)));
    assert!((state.window_angle(window).unwrap() - 90.0).abs() < 1e-9);

    assert!(state.drag_window(window, Point::new(0.0, 9000.0)));
    assert_eq!(state.store.window(window).unwrap().pos_t, 0.95);
}

#[test]
fn test_drag_dangling_window_is_noop() {
    let mut state = FloorplanState::new();
    let window = state.store.add_window(EntityId(99), 0.5, 120.0);
    assert!(!state.drag_window(window, Point::new(1.0, 1.0)));
    assert_eq!(state.store.window(window).unwrap().pos_t, 0.5);
    assert_eq!(state.window_center(window), None);
}

#[test]
fn test_move_door_and_closet() {
    let mut state = FloorplanState::new();
    let door = state.store.add_door(Point::new(0.0, 0.0), 80.0);
    let closet = state.store.add_closet(Point::new(0.0, 0.0));

    assert!(state.move_door(door, Point::new(12.0, 34.0)));
    assert!(state.move_closet(closet, Point::new(56.0, 78.0)));
    assert!(!state.move_door(closet, Point::new(1.0, 1.0)));

    assert_eq!(state.store.door(door).unwrap().anchor(), Point::new(12.0, 34.0));
    assert_eq!(state.store.closet(closet).unwrap().anchor(), Point::new(56.0, 78.0));
}

#[test]
fn test_pick_does_not_change_selection() {
    let (mut state, wall) = state_with_wall((0.0, 0.0), (100.0, 0.0));
    let door = state.store.add_door(Point::new(300.0, 300.0), 80.0);
    state.select_door(door);

    assert_eq!(
        state.pick(Point::new(50.0, 2.0)),
        moodlet_floorplan::Selection::Wall(wall)
    );
    assert_eq!(state.selection(), moodlet_floorplan::Selection::Door(door));
}
