use std::time::Duration;

use micro_interactions::{
    DebounceOptions, HoverAnimationDebouncer, InlineStyle, MenuToggle, NavUnderline, Phase,
    PointerEvent,
};
use serde_json::{json, Value};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn event(client_x: f32, client_y: f32) -> PointerEvent {
    let value = json!({
        "clientX": client_x,
        "clientY": client_y,
        "offsetLeft": 10,
        "offsetTop": 20
    });
    PointerEvent::from_value(&value).expect("valid event")
}

#[test]
fn test_quick_hover_card_cycle() {
    let mut card = HoverAnimationDebouncer::attach(
        ".bg",
        Some(InlineStyle::new()),
        DebounceOptions::default(),
    )
    .expect("surface attached");

    card.on_pointer_enter(ms(0), event(50.0, 60.0));
    assert_eq!(
        Value::Object(card.sink().properties.clone()),
        json!({
            "animation": "out 0.5s ease-out forwards",
            "top": "40px",
            "left": "40px"
        })
    );

    card.on_pointer_leave(ms(200), event(55.0, 65.0));
    assert_eq!(card.phase(), Phase::Idle);

    // frame loop at ~60 fps, the reverse must not show up before 500ms
    let mut time = 200;
    while time < 500 {
        card.update(ms(time));
        assert_eq!(card.sink().get("animation"), Some("out 0.5s ease-out forwards"));
        time += 16;
    }
    card.update(ms(time));
    assert_eq!(
        card.sink().to_css(),
        "animation: in 0.5s ease-in forwards; left: 45px; top: 45px;"
    )
}

#[test]
fn test_slow_hover_card_cycle() {
    let mut card = HoverAnimationDebouncer::new(InlineStyle::new(), DebounceOptions::default())
        .expect("valid options");
    card.on_pointer_enter(ms(0), event(50.0, 60.0));
    card.on_pointer_leave(ms(700), event(30.0, 30.0));
    assert_eq!(card.next_deadline(), None);
    assert_eq!(card.sink().get("animation"), Some("in 0.5s ease-in forwards"));
    assert_eq!(card.sink().get("left"), Some("20px"));
    assert_eq!(card.sink().get("top"), Some("10px"))
}

#[test]
fn test_configured_min_visible_duration() {
    let options = DebounceOptions::from_json(r#"{"minVisibleMs": 300, "durationMs": 300}"#)
        .expect("valid options");
    let mut card = HoverAnimationDebouncer::new(InlineStyle::new(), options).expect("valid options");
    card.on_pointer_enter(ms(1000), event(10.0, 20.0));
    card.on_pointer_leave(ms(1100), event(10.0, 20.0));
    assert_eq!(card.next_deadline(), Some(ms(1300)));
    assert_eq!(card.update(ms(1300)), 1);
    assert_eq!(card.sink().get("animation"), Some("in 0.3s ease-in forwards"))
}

#[test]
fn test_missing_surface() {
    let result =
        HoverAnimationDebouncer::<InlineStyle>::attach(".bg", None, DebounceOptions::default());
    let error = result.err().expect("attach must fail");
    assert_eq!(error.to_string(), "surface .bg not found")
}

#[test]
fn test_nav_and_menu_clicks() {
    let mut nav = NavUnderline::new(5);
    let style = nav.click("3").expect("valid item");
    assert_eq!(style.transform, "translate3d(3em, 0, 0)");
    assert!(nav.is_active(3));
    assert_eq!(nav.click("x"), None);

    let mut menu = MenuToggle::new();
    let collapsed = menu.click("iconfont icon-x").expect("toggle clicked");
    assert_eq!((collapsed.width, collapsed.buttons_display), (".4rem", "none"));
    let expanded = menu.click("iconfont icon-menu").expect("toggle clicked");
    assert_eq!((expanded.width, expanded.buttons_display), ("3.5rem", "block"));
    assert_eq!(menu.click("btn"), None)
}
