use moodlet_floorplan::{EntityId, FloorplanState, Point, PointerOutcome, Selection, Tool};
use moodlet_settings::Config;

fn draw_wall(state: &mut FloorplanState, from: (f64, f64), to: (f64, f64)) -> EntityId {
    state.set_tool(Tool::Wall);
    state.pointer_down(Point::new(from.0, from.1));
    state.pointer_move(Point::new(to.0, to.1));
    state.pointer_up().expect("wall should be committed")
}

#[test]
fn test_new_state_defaults() {
    let state = FloorplanState::new();
    assert_eq!(state.tool(), Tool::Select);
    assert!(state.store.is_empty());
    assert!(state.draft().is_none());
    assert!(state.selection().is_none());
    assert!(!state.is_modified);
}

#[test]
fn test_wall_drag_commits_wall() {
    let mut state = FloorplanState::new();
    state.set_tool(Tool::Wall);

    let outcome = state.pointer_down(Point::new(10.0, 20.0));
    let PointerOutcome::DraftStarted(id) = outcome else {
        panic!("expected a draft, got {:?}", outcome);
    };
    assert!(state.pointer_move(Point::new(50.0, 20.0)));
    assert!(state.pointer_move(Point::new(110.0, 20.0)));

    let draft = state.draft().unwrap();
    assert_eq!((draft.x2, draft.y2), (110.0, 20.0));
    assert!(state.store.walls().is_empty());

    assert_eq!(state.pointer_up(), Some(id));
    assert!(state.draft().is_none());
    let wall = state.store.wall(id).unwrap();
    assert_eq!((wall.x1, wall.y1, wall.x2, wall.y2), (10.0, 20.0, 110.0, 20.0));
    assert!(state.is_modified);
}

#[test]
fn test_pointer_move_without_draft_is_noop() {
    let mut state = FloorplanState::new();
    assert!(!state.pointer_move(Point::new(1.0, 1.0)));
    assert_eq!(state.pointer_up(), None);
}

#[test]
fn test_zero_length_wall_is_committed_by_default() {
    let mut state = FloorplanState::new();
    state.set_tool(Tool::Wall);
    state.pointer_down(Point::new(5.0, 5.0));
    let id = state.pointer_up().unwrap();

    let wall = state.store.wall(id).unwrap();
    assert_eq!((wall.x1, wall.y1), (wall.x2, wall.y2));
}

#[test]
fn test_zero_length_wall_discarded_when_configured() {
    let mut config = Config::default();
    config.drawing.discard_degenerate_walls = true;
    let mut state = FloorplanState::with_config(config);

    state.set_tool(Tool::Wall);
    state.pointer_down(Point::new(5.0, 5.0));
    assert_eq!(state.pointer_up(), None);
    assert!(state.store.walls().is_empty());
}

#[test]
fn test_tool_switch_discards_draft_and_selection() {
    let mut state = FloorplanState::new();
    let wall = draw_wall(&mut state, (0.0, 0.0), (100.0, 0.0));
    state.select_wall(wall);

    state.set_tool(Tool::Wall);
    assert!(state.selection().is_none());

    state.pointer_down(Point::new(0.0, 50.0));
    state.pointer_move(Point::new(80.0, 50.0));
    state.set_tool(Tool::Door);

    assert!(state.draft().is_none());
    assert_eq!(state.pointer_up(), None);
    assert_eq!(state.store.walls().len(), 1);
}

#[test]
fn test_door_and_closet_placement() {
    let mut state = FloorplanState::new();

    state.set_tool(Tool::Door);
    let PointerOutcome::Created(door) = state.pointer_down(Point::new(30.0, 40.0)) else {
        panic!("door not created");
    };
    let door = state.store.door(door).unwrap();
    assert_eq!((door.x, door.y, door.rotation, door.width_cm), (30.0, 40.0, 0.0, 80.0));

    state.set_tool(Tool::Closet);
    let PointerOutcome::Created(closet) = state.pointer_down(Point::new(70.0, 80.0)) else {
        panic!("closet not created");
    };
    let closet = state.store.closet(closet).unwrap();
    assert_eq!((closet.x, closet.y, closet.rotation), (70.0, 80.0, 0.0));
}

#[test]
fn test_window_needs_a_wall() {
    let mut state = FloorplanState::new();
    state.set_tool(Tool::Window);
    assert_eq!(state.pointer_down(Point::new(10.0, 10.0)), PointerOutcome::Ignored);
    assert!(state.store.windows().is_empty());
}

#[test]
fn test_window_attaches_to_nearest_wall_with_clamp() {
    let mut state = FloorplanState::new();
    let top = draw_wall(&mut state, (0.0, 0.0), (200.0, 0.0));
    let bottom = draw_wall(&mut state, (0.0, 100.0), (200.0, 100.0));

    state.set_tool(Tool::Window);
    let PointerOutcome::Created(near_bottom) = state.pointer_down(Point::new(50.0, 90.0)) else {
        panic!("window not created");
    };
    let window = state.store.window(near_bottom).unwrap();
    assert_eq!(window.wall_id, bottom);
    assert_eq!(window.pos_t, 0.25);
    assert_eq!(window.width_cm, 120.0);

    let PointerOutcome::Created(past_end) = state.pointer_down(Point::new(500.0, -3.0)) else {
        panic!("window not created");
    };
    let window = state.store.window(past_end).unwrap();
    assert_eq!(window.wall_id, top);
    assert_eq!(window.pos_t, 0.95);
}

#[test]
fn test_window_tie_goes_to_first_wall() {
    let mut state = FloorplanState::new();
    let first = draw_wall(&mut state, (0.0, 0.0), (100.0, 0.0));
    draw_wall(&mut state, (0.0, 40.0), (100.0, 40.0));

    state.set_tool(Tool::Window);
    let PointerOutcome::Created(id) = state.pointer_down(Point::new(50.0, 20.0)) else {
        panic!("window not created");
    };
    assert_eq!(state.store.window(id).unwrap().wall_id, first);
}

#[test]
fn test_select_tool_creates_nothing() {
    let mut state = FloorplanState::new();
    assert_eq!(state.pointer_down(Point::new(1.0, 1.0)), PointerOutcome::Ignored);
    assert!(state.store.is_empty());
}

#[test]
fn test_selection_is_exclusive() {
    let mut state = FloorplanState::new();
    let wall = draw_wall(&mut state, (0.0, 0.0), (100.0, 0.0));
    let door = state.store.add_door(Point::new(10.0, 10.0), 80.0);

    state.select_wall(wall);
    state.select_door(door);
    assert_eq!(state.selection(), Selection::Door(door));

    state.clear_selection();
    assert!(state.selection().is_none());
}

#[test]
fn test_tool_index_fallback() {
    let mut state = FloorplanState::new();
    state.set_tool_index(3);
    assert_eq!(state.tool(), Tool::Window);
    state.set_tool_index(17);
    assert_eq!(state.tool(), Tool::Select);
}

#[test]
fn test_resize_stage() {
    let mut state = FloorplanState::new();
    assert_eq!(state.stage().width, 1200);
    state.resize_stage(1440, 900);
    assert_eq!((state.stage().width, state.stage().height), (1200, 890));
}

#[test]
fn test_ids_are_unique_across_kinds() {
    let mut state = FloorplanState::new();
    let wall = draw_wall(&mut state, (0.0, 0.0), (100.0, 0.0));
    state.set_tool(Tool::Door);
    let PointerOutcome::Created(door) = state.pointer_down(Point::new(0.0, 0.0)) else {
        panic!("door not created");
    };
    state.set_tool(Tool::Window);
    let PointerOutcome::Created(window) = state.pointer_down(Point::new(50.0, 0.0)) else {
        panic!("window not created");
    };

    assert_ne!(wall, door);
    assert_ne!(door, window);
    assert_ne!(wall, window);
}
