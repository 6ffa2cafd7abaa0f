use warden::Manager;

#[derive(Debug, PartialEq, Eq)]
struct Position {
    x: i32,
    y: i32,
}

#[test]
fn creation_and_versioning() {
    let mut m = Manager::new();
    let e1 = m.create_entity();
    let e2 = m.create_entity();
    let e3 = m.create_entity();
    m.refresh();

    assert_eq!(m.entity_count(), 3);
    assert!(e1.is_valid(&m));
    assert!(e2.is_valid(&m));
    assert!(e3.is_valid(&m));
    assert_ne!(e1.handle_index(), e2.handle_index());
    assert_ne!(e2.handle_index(), e3.handle_index());
    assert_ne!(e1.handle_index(), e3.handle_index());
}

#[test]
fn destroy_then_refresh() {
    let mut m = Manager::new();
    let e1 = m.create_entity();
    m.add_component(e1, Position { x: 1, y: 2 });

    e1.destroy(&mut m);

    // Before refresh: the handle is still valid and the component is still
    // queryable — refresh is the membership boundary, not `destroy` itself.
    assert!(e1.is_valid(&m));
    assert!(e1.has_component::<Position>(&m));

    m.refresh();

    assert!(!e1.is_valid(&m));
    assert_eq!(m.entity_count(), 0);
}

#[test]
fn version_reuse_does_not_collide() {
    let mut m = Manager::new();
    let e1 = m.create_entity();
    e1.destroy(&mut m);
    m.refresh();

    let e2 = m.create_entity();

    assert_ne!(e1, e2);
    assert!(!e1.is_valid(&m));
    assert!(e2.is_valid(&m));
}

#[test]
fn null_handle_never_validates() {
    let m = Manager::new();
    let null = warden::Entity::null();
    assert!(null.is_null());
    assert!(!null.is_valid(&m));
}

#[test]
#[should_panic(expected = "invalid")]
fn destroying_a_reclaimed_handle_panics() {
    let mut m = Manager::new();
    let e = m.create_entity();
    e.destroy(&mut m);
    m.refresh();
    e.destroy(&mut m);
}
