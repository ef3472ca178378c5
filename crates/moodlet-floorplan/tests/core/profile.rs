use moodlet_floorplan::{EntityId, FloorplanState, Point};
use moodlet_settings::Config;

/// Draws a closed 400 x 300 cm rectangle (800 x 600 px).
fn rectangle_room(state: &mut FloorplanState) -> [EntityId; 4] {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(800.0, 0.0),
        Point::new(800.0, 600.0),
        Point::new(0.0, 600.0),
    ];
    let mut ids = [EntityId::default(); 4];
    for (i, id) in ids.iter_mut().enumerate() {
        *id = state.store.add_wall(corners[i], corners[(i + 1) % 4]);
    }
    ids
}

#[test]
fn test_rectangle_room_area() {
    let mut state = FloorplanState::new();
    let walls = rectangle_room(&mut state);

    let profile = state.room_profile();
    assert_eq!(profile.room.area_m2, 12.0);
    assert_eq!(profile.walls.len(), 4);
    assert_eq!(profile.walls[0].id, walls[0]);
    assert_eq!(profile.walls[0].start, [0.0, 0.0]);
    assert_eq!(profile.walls[0].end, [400.0, 0.0]);
    assert_eq!(profile.walls[0].length_cm, 400.0);
    assert_eq!(profile.walls[1].length_cm, 300.0);
    assert_eq!(
        profile.room.outline_cm,
        vec![[0.0, 0.0], [400.0, 0.0], [400.0, 300.0], [0.0, 300.0]]
    );
}

#[test]
fn test_open_outline_has_no_area() {
    let mut state = FloorplanState::new();
    state
        .store
        .add_wall(Point::new(0.0, 0.0), Point::new(800.0, 0.0));
    state
        .store
        .add_wall(Point::new(800.0, 0.0), Point::new(800.0, 600.0));
    state
        .store
        .add_wall(Point::new(800.0, 600.0), Point::new(0.0, 600.0));

    let profile = state.room_profile();
    assert_eq!(profile.room.area_m2, 0.0);
    assert!(profile.room.outline_cm.is_empty());
}

#[test]
fn test_fewer_than_three_walls_has_no_area() {
    let mut state = FloorplanState::new();
    state
        .store
        .add_wall(Point::new(0.0, 0.0), Point::new(800.0, 0.0));
    assert_eq!(state.room_profile().room.area_m2, 0.0);
}

#[test]
fn test_near_miss_closes_only_with_tolerance() {
    let build = |tolerance: Option<f64>| {
        let mut config = Config::default();
        config.export.endpoint_tolerance_px = tolerance;
        let mut state = FloorplanState::with_config(config);
        state
            .store
            .add_wall(Point::new(0.0, 0.0), Point::new(800.0, 0.0));
        state
            .store
            .add_wall(Point::new(800.5, 0.0), Point::new(800.0, 600.0));
        state
            .store
            .add_wall(Point::new(800.0, 600.0), Point::new(0.0, 600.0));
        state
            .store
            .add_wall(Point::new(0.0, 600.0), Point::new(0.0, 0.0));
        state.room_profile().room.area_m2
    };

    assert_eq!(build(None), 0.0);
    assert_eq!(build(Some(1.0)), 12.0);
}

#[test]
fn test_windows_and_doors_are_attached() {
    let mut state = FloorplanState::new();
    let walls = rectangle_room(&mut state);
    let window = state.store.add_window(walls[0], 0.5, 120.0);
    let door = state.store.add_door(Point::new(790.0, 300.0), 90.0);

    let profile = state.room_profile();

    assert_eq!(profile.windows.len(), 1);
    assert_eq!(profile.windows[0].id, window);
    assert_eq!(profile.windows[0].center, [200.0, 0.0]);
    assert_eq!(profile.windows[0].width_cm, 120.0);
    assert_eq!(profile.windows[0].attached_wall, walls[0]);

    assert_eq!(profile.doors.len(), 1);
    assert_eq!(profile.doors[0].center, [395.0, 150.0]);
    assert_eq!(profile.doors[0].width_cm, 90.0);
    assert_eq!(profile.doors[0].attached_wall, Some(walls[1]));
}

#[test]
fn test_door_without_walls_is_unattached() {
    let mut state = FloorplanState::new();
    state.store.add_door(Point::new(10.0, 10.0), 80.0);
    let profile = state.room_profile();
    assert_eq!(profile.doors[0].attached_wall, None);
}

#[test]
fn test_dangling_window_is_omitted() {
    let mut state = FloorplanState::new();
    let walls = rectangle_room(&mut state);
    state.store.add_window(walls[2], 0.5, 120.0);
    state.store.add_window(EntityId(404), 0.5, 120.0);

    let profile = state.room_profile();
    assert_eq!(profile.windows.len(), 1);
    assert_eq!(profile.windows[0].attached_wall, walls[2]);
}

#[test]
fn test_closets_pass_through_in_px() {
    let mut state = FloorplanState::new();
    let closet = state.store.add_closet(Point::new(100.0, 60.0));

    let profile = state.room_profile();
    assert_eq!(profile.closets.len(), 1);
    assert_eq!(profile.closets[0].id, closet);
    assert_eq!((profile.closets[0].x, profile.closets[0].y), (100.0, 60.0));
}

#[test]
fn test_closets_converted_when_configured() {
    let mut config = Config::default();
    config.export.convert_closets_to_cm = true;
    let mut state = FloorplanState::with_config(config);
    state.store.add_closet(Point::new(100.0, 60.0));

    let profile = state.room_profile();
    assert_eq!((profile.closets[0].x, profile.closets[0].y), (50.0, 30.0));
}

#[test]
fn test_profile_does_not_mutate_state() {
    let mut state = FloorplanState::new();
    rectangle_room(&mut state);
    let before = state.snapshot();
    let first = state.room_profile();
    let second = state.room_profile();
    assert_eq!(first, second);
    assert_eq!(state.snapshot(), before);
}
