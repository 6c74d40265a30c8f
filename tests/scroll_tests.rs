// Host-side tests for the scroll physics engine.

use flow3d::{
    PointerKind, Scroll, ScrollDelta, ScrollError, ScrollMode, Sizes, UpdateInfo, WheelDelta,
    WheelUnit,
};

fn frame() -> UpdateInfo {
    UpdateInfo::from_dt_ms(1000.0 / 60.0)
}

fn vertical_scroll() -> Scroll {
    Scroll::new(
        ScrollMode::Vertical,
        Sizes::new(1000.0, 4000.0),
        Sizes::new(1000.0, 1000.0),
    )
    .unwrap()
}

#[test]
fn mode_parses_from_config_strings() {
    assert_eq!("vertical".parse::<ScrollMode>().unwrap(), ScrollMode::Vertical);
    assert_eq!(
        "horizontal".parse::<ScrollMode>().unwrap(),
        ScrollMode::Horizontal
    );
    assert!(matches!(
        "diagonal".parse::<ScrollMode>(),
        Err(ScrollError::InvalidMode(_))
    ));
}

#[test]
fn construction_rejects_degenerate_bounds() {
    let bad = Scroll::new(
        ScrollMode::Vertical,
        Sizes::new(0.0, 0.0),
        Sizes::new(1000.0, 1000.0),
    );
    assert!(matches!(bad, Err(ScrollError::InvalidBounds)));

    let nan = Scroll::new(
        ScrollMode::Vertical,
        Sizes::new(1000.0, f32::NAN),
        Sizes::new(1000.0, 1000.0),
    );
    assert!(matches!(nan, Err(ScrollError::InvalidBounds)));
}

#[test]
fn drag_offset_sign_matches_drag_direction() {
    let mut scroll = vertical_scroll();
    scroll.on_pointer_down(0.0, 0.0);
    scroll.on_pointer_move(0.0, -50.0, PointerKind::Touch);
    assert!(scroll.target().y < 0.0);

    let mut scroll = vertical_scroll();
    scroll.on_pointer_down(0.0, 0.0);
    scroll.on_pointer_move(0.0, 80.0, PointerKind::Touch);
    assert!(scroll.target().y > 0.0);
}

#[test]
fn mouse_drags_are_amplified_touch_drags_are_not() {
    let mut touch = vertical_scroll();
    touch.on_pointer_down(0.0, 0.0);
    touch.on_pointer_move(0.0, 10.0, PointerKind::Touch);

    let mut mouse = vertical_scroll();
    mouse.on_pointer_down(0.0, 0.0);
    mouse.on_pointer_move(0.0, 10.0, PointerKind::Mouse);

    assert!((touch.target().y - 10.0).abs() < 1e-6);
    assert!(mouse.target().y > touch.target().y);
}

#[test]
fn move_without_active_drag_is_ignored() {
    let mut scroll = vertical_scroll();
    scroll.on_pointer_move(0.0, 300.0, PointerKind::Touch);
    assert_eq!(scroll.target().y, 0.0);
}

#[test]
fn momentum_decays_strictly_after_release() {
    let mut scroll = vertical_scroll();
    scroll.on_pointer_down(0.0, 0.0);
    scroll.on_pointer_move(0.0, -60.0, PointerKind::Touch);
    scroll.on_pointer_up();

    let mut previous = scroll.touch_momentum().abs();
    assert!(previous > 0.0);

    let mut ticks = 0;
    loop {
        scroll.update(&frame());
        let magnitude = scroll.touch_momentum().abs();
        if magnitude == 0.0 {
            break;
        }
        assert!(magnitude < previous, "momentum did not decay on tick {}", ticks);
        previous = magnitude;
        ticks += 1;
        assert!(ticks < 200, "momentum never reached the stop epsilon");
    }
}

#[test]
fn coasting_keeps_advancing_the_target() {
    let mut scroll = vertical_scroll();
    scroll.on_pointer_down(0.0, 0.0);
    scroll.on_pointer_move(0.0, -60.0, PointerKind::Touch);
    let released_target = scroll.target().y;
    scroll.on_pointer_up();

    scroll.update(&frame());
    scroll.update(&frame());
    assert!(scroll.target().y < released_target);
}

#[test]
fn wheel_input_is_sign_inverted_and_normalized() {
    let mut scroll = vertical_scroll();
    scroll.on_wheel(WheelDelta {
        delta_x: 0.0,
        delta_y: 100.0,
        unit: WheelUnit::Pixel,
    });
    assert!((scroll.target().y + 100.0).abs() < 1e-6);

    let mut by_line = vertical_scroll();
    by_line.on_wheel(WheelDelta {
        delta_x: 0.0,
        delta_y: 3.0,
        unit: WheelUnit::Line,
    });
    assert!((by_line.target().y + 120.0).abs() < 1e-6);
}

#[test]
fn current_chases_target_and_reports_progress() {
    let mut scroll = vertical_scroll();
    scroll.apply_scroll(ScrollDelta {
        horizontal_px: 0.0,
        vertical_px: 1500.0,
    });
    for _ in 0..600 {
        scroll.update(&frame());
    }
    assert!((scroll.current().y - 1500.0).abs() < 1.0);
    // max offset is 3000, so 1500 is halfway
    assert!((scroll.progress() - 0.5).abs() < 1e-2);
}

#[test]
fn progress_is_clamped_to_unit_range() {
    let mut scroll = vertical_scroll();
    scroll.apply_scroll(ScrollDelta {
        horizontal_px: 0.0,
        vertical_px: -500.0,
    });
    for _ in 0..300 {
        scroll.update(&frame());
    }
    assert_eq!(scroll.progress(), 0.0);
}

#[test]
fn resize_reseeds_offsets_from_current_progress() {
    let mut scroll = vertical_scroll();
    scroll.apply_scroll(ScrollDelta {
        horizontal_px: 0.0,
        vertical_px: 1500.0,
    });
    for _ in 0..600 {
        scroll.update(&frame());
    }
    let progress = scroll.progress();

    scroll
        .on_resize(Sizes::new(1000.0, 3000.0), Sizes::new(1000.0, 1000.0))
        .unwrap();
    // same progress mapped onto the new 2000px range, inactive axis zeroed
    assert!((scroll.current().y - progress * 2000.0).abs() < 1.0);
    assert_eq!(scroll.current().x, 0.0);
    assert_eq!(scroll.target(), scroll.current());
}

#[test]
fn horizontal_mode_uses_the_x_axis() {
    let mut scroll = Scroll::new(
        ScrollMode::Horizontal,
        Sizes::new(4000.0, 1000.0),
        Sizes::new(1000.0, 1000.0),
    )
    .unwrap();
    scroll.on_pointer_down(0.0, 0.0);
    scroll.on_pointer_move(40.0, 0.0, PointerKind::Touch);
    assert!(scroll.target().x > 0.0);
    assert_eq!(scroll.target().y, 0.0);
}

#[test]
fn seek_animates_target_to_destination_progress() {
    let mut scroll = vertical_scroll();
    scroll.seek_to(1.0, 100.0);
    scroll.update(&UpdateInfo::from_dt_ms(200.0));
    assert!((scroll.target().y - 3000.0).abs() < 1e-3);
}

#[test]
fn pointer_down_cancels_an_inflight_seek() {
    let mut scroll = vertical_scroll();
    scroll.seek_to(1.0, 1000.0);
    scroll.update(&frame());
    let mid = scroll.target().y;
    assert!(mid > 0.0 && mid < 3000.0);

    scroll.on_pointer_down(0.0, 0.0);
    scroll.on_pointer_up();
    scroll.update(&frame());
    // without the seek the target only moves by leftover momentum (none here)
    assert!((scroll.target().y - mid).abs() < 1e-3);
}
