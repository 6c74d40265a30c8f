// Host-side tests for the per-object animation engine.

use flow3d::{
    Bounds, FollowSource, ObjectParams, Phase, Sizes, UpdateInfo, VisualObject3D,
};
use glam::Vec2;

const VIEW: f32 = 1000.0;

fn frame() -> UpdateInfo {
    UpdateInfo::from_dt_ms(1000.0 / 60.0)
}

fn make_object(order: u32) -> VisualObject3D {
    VisualObject3D::new(ObjectParams {
        order,
        bounds: Bounds::new(0.0, 0.0, 100.0, 100.0),
        child_bounds: Bounds::new(10.0, 10.0, 40.0, 40.0),
        viewport: Sizes::new(VIEW, VIEW),
        follow_source: FollowSource::Scroll,
        seed: 7,
    })
}

#[test]
fn strength_target_is_never_negative() {
    let mut object = make_object(1);
    object.set_scroll_target(Vec2::new(-300.0, 250.0));
    for _ in 0..20 {
        object.update(&frame());
        assert!(object.mouse().strength.target >= 0.0);
        assert!(object.mouse().strength.current >= 0.0 - 1e-6);
    }
}

#[test]
fn deeper_stacking_order_eases_more_slowly() {
    let mut front = make_object(1);
    let mut back = make_object(4);
    front.set_scroll_target(Vec2::new(500.0, 0.0));
    back.set_scroll_target(Vec2::new(500.0, 0.0));
    for _ in 0..10 {
        front.update(&frame());
        back.update(&frame());
    }
    assert!(front.mouse().current.x > back.mouse().current.x);
}

#[test]
fn stacking_order_sets_base_depth() {
    let object = make_object(3);
    assert!((object.position().z + 0.3).abs() < 1e-6);
}

#[test]
fn wrap_around_shifts_extra_by_one_content_cycle() {
    let mut object = make_object(1);
    // converge far enough left that the trailing edge crosses the threshold
    object.set_scroll_target(Vec2::new(600.0, 0.0));

    let expected_shift = (VIEW + 100.0) * 1.03;
    let mut wrapped = false;
    for _ in 0..600 {
        object.update(&frame());
        if object.extra().x != 0.0 {
            wrapped = true;
            assert!((object.extra().x + expected_shift).abs() < 1e-3);
            break;
        }
    }
    assert!(wrapped, "object never wrapped");

    // a bounded target wraps exactly once
    for _ in 0..600 {
        object.update(&frame());
    }
    assert!((object.extra().x + expected_shift).abs() < 1e-3);

    // settled position sits back inside the visible bound
    let half = object.scale().x / 2.0;
    assert!(object.position().x + half <= (VIEW / 2.0) * 1.03);
    assert!(object.position().x - half >= (-VIEW / 2.0) * 1.03);
}

#[test]
fn wrap_around_randomizes_rotation() {
    let mut object = make_object(1);
    object.set_scroll_target(Vec2::new(600.0, 0.0));
    let before = object.rotation_z();
    for _ in 0..600 {
        object.update(&frame());
        if object.extra().x != 0.0 {
            break;
        }
    }
    assert!(object.extra().x != 0.0);
    assert_ne!(object.rotation_z(), before);
}

#[test]
fn wrap_around_is_suppressed_while_dropping_out() {
    let mut object = make_object(1);
    object.set_scroll_target(Vec2::new(600.0, 0.0));
    object.animate_drop_out(0.0);
    for _ in 0..600 {
        object.update(&frame());
        if !object.is_dropping_out() {
            break;
        }
        assert_eq!(object.extra().x, 0.0);
    }
}

#[test]
fn enter_then_exit_destroys_exactly_once() {
    let mut object = make_object(1);
    object.animate_in();
    assert_eq!(object.phase(), Phase::Entering);
    for _ in 0..5 {
        object.update(&frame());
    }

    object.animate_out();
    // the in-flight enter tween is stopped, not left to fight the exit
    assert_eq!(object.phase(), Phase::Exiting);

    let mut frames = 0;
    while !object.is_destroyed() {
        object.update(&frame());
        frames += 1;
        assert!(frames < 200, "exit transition never completed");
    }
    // exit collapsed the scale to the child rectangle
    assert!((object.scale().x - 40.0).abs() < 1e-3);
    assert!((object.scale().y - 40.0).abs() < 1e-3);

    // terminal state: lifecycle calls are no-ops
    object.animate_in();
    object.animate_out();
    object.destroy();
    assert_eq!(object.phase(), Phase::Destroyed);
}

#[test]
fn enter_completion_returns_to_idle_at_full_opacity() {
    let mut object = make_object(1);
    object.animate_in();
    for _ in 0..200 {
        object.update(&frame());
    }
    assert_eq!(object.phase(), Phase::Idle);
    assert!((object.opacity() - 1.0).abs() < 1e-3);
    assert!((object.scale().x - 100.0).abs() < 1e-3);
}

#[test]
fn drop_out_is_idempotent_while_running() {
    let mut object = make_object(1);
    object.animate_drop_out(0.0);
    object.update(&UpdateInfo::from_dt_ms(400.0));
    let mid_rotation = object.rotation_z();
    assert!(mid_rotation != 0.0);

    // re-entrant call must not restart the turn
    object.animate_drop_out(0.0);
    assert_eq!(object.rotation_z(), mid_rotation);

    object.update(&UpdateInfo::from_dt_ms(2000.0));
    assert!(!object.is_dropping_out());
    // rotation resets to its pre-drop value on completion
    assert_eq!(object.rotation_z(), 0.0);
}

#[test]
fn drop_out_squashes_then_releases() {
    let mut object = make_object(1);
    object.animate_drop_out(0.0);
    object.update(&UpdateInfo::from_dt_ms(800.0));
    // mid-turn the y squash is at its deepest, pushing the position up
    let squashed = object.position().y;
    object.update(&UpdateInfo::from_dt_ms(2000.0));
    assert!(object.position().y != squashed);
}

#[test]
fn target_mouse_is_ignored_while_exiting() {
    let mut object = VisualObject3D::new(ObjectParams {
        order: 1,
        bounds: Bounds::new(0.0, 0.0, 100.0, 100.0),
        child_bounds: Bounds::new(10.0, 10.0, 40.0, 40.0),
        viewport: Sizes::new(VIEW, VIEW),
        follow_source: FollowSource::Pointer,
        seed: 7,
    });
    object.target_mouse(200.0, 200.0);
    let moving = object.mouse().target;
    assert!(moving != Vec2::ZERO);

    object.animate_out();
    object.target_mouse(-500.0, -500.0);
    assert_eq!(object.mouse().target, moving);
}

#[test]
fn auto_speed_drifts_the_target_without_input() {
    let mut object = make_object(1);
    object.set_auto_speed(Vec2::new(0.5, 0.0));
    for _ in 0..10 {
        object.update(&frame());
    }
    assert!((object.mouse().target.x - 5.0).abs() < 1e-4);
}

#[test]
fn destroyed_objects_stop_updating() {
    let mut object = make_object(1);
    object.set_scroll_target(Vec2::new(300.0, 0.0));
    object.update(&frame());
    object.destroy();
    let position = object.position();
    object.update(&frame());
    assert_eq!(object.position(), position);
}
