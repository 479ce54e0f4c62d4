//! Browser bindings, enabled with the `web` feature.
//!
//! Each binding looks its elements up once, fails fast when one is missing
//! and then forwards DOM events to the matching host-agnostic component.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::Function;
use log::{error, Level};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::{
    Animation, AnimationSink, DebounceOptions, HoverAnimationDebouncer, InteractionError,
    MenuToggle, NavUnderline, PointerEvent,
};

type SharedHover = Rc<RefCell<HoverAnimationDebouncer<HtmlElement>>>;

impl AnimationSink for HtmlElement {
    fn apply_animation(&mut self, animation: &Animation, origin: [f32; 2]) {
        let [x, y] = origin;
        let style = self.style();
        let properties = [
            ("animation", animation.shorthand()),
            ("top", format!("{y}px")),
            ("left", format!("{x}px")),
        ];
        for (property, value) in properties {
            if let Err(error) = style.set_property(property, &value) {
                error!("unable to set style {property}: {value}, {error:?}");
            }
        }
    }
}

#[wasm_bindgen]
pub fn init_logging() {
    if let Err(error) = console_log::init_with_level(Level::Debug) {
        error!("unable to init console logging, {error}");
    }
}

/// Binds the hover ripple of `card` to its `background` child.
#[wasm_bindgen]
pub fn hover_card(card: &str, background: &str, options: Option<String>) -> Result<(), JsValue> {
    let document = document()?;
    let options = match options {
        Some(json) => DebounceOptions::from_json(&json).map_err(to_js)?,
        None => DebounceOptions::default(),
    };
    let card = query(&document, card).ok_or_else(|| not_found(card))?;
    bind_hover(&card, query(&document, background), background, options).map_err(to_js)
}

#[wasm_bindgen]
pub fn nav_underline(nav: &str, border: &str, items: &str) -> Result<(), JsValue> {
    let document = document()?;
    let nav = query(&document, nav).ok_or_else(|| not_found(nav))?;
    let border = query(&document, border).ok_or_else(|| not_found(border))?;
    bind_nav(&document, &nav, border, items).map_err(to_js)
}

#[wasm_bindgen]
pub fn menu_toggle(list: &str, buttons: &str) -> Result<(), JsValue> {
    let document = document()?;
    let list = query(&document, list).ok_or_else(|| not_found(list))?;
    bind_menu(&document, list, buttons).map_err(to_js)
}

pub fn bind_hover(
    card: &HtmlElement,
    background: Option<HtmlElement>,
    selector: &str,
    options: DebounceOptions,
) -> Result<(), InteractionError> {
    let hover: SharedHover = Rc::new(RefCell::new(HoverAnimationDebouncer::attach(
        selector, background, options,
    )?));

    let enter = {
        let hover = hover.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if let Some(pointer) = pointer_event(&event) {
                hover.borrow_mut().on_pointer_enter(now(), pointer);
            }
        })
    };
    listen(card, "mouseenter", enter.as_ref().unchecked_ref())?;
    enter.forget();

    let leave = {
        let hover = hover.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if let Some(pointer) = pointer_event(&event) {
                let time = now();
                let deadline = hover.borrow_mut().on_pointer_leave(time, pointer);
                if let Some(deadline) = deadline {
                    schedule_update(&hover, time, deadline);
                }
            }
        })
    };
    listen(card, "mouseleave", leave.as_ref().unchecked_ref())?;
    leave.forget();
    Ok(())
}

pub fn bind_nav(
    document: &Document,
    nav: &HtmlElement,
    border: HtmlElement,
    items: &str,
) -> Result<(), InteractionError> {
    let document = document.clone();
    let items = items.to_string();
    let count = document
        .query_selector_all(&items)
        .map(|list| list.length() as usize)
        .unwrap_or(0);
    let mut underline = NavUnderline::new(count);
    let click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let Some(target) = event_target(&event) else {
            return;
        };
        let Some(index) = target.dataset().get("index") else {
            return;
        };
        if let Some(style) = underline.click(&index) {
            for (position, item) in elements(&document, &items).iter().enumerate() {
                let result = if position + 1 == style.active {
                    item.class_list().add_1("active")
                } else {
                    item.class_list().remove_1("active")
                };
                if let Err(error) = result {
                    error!("unable to update active nav item, {error:?}");
                }
            }
            if let Err(error) = border.style().set_property("transform", &style.transform) {
                error!("unable to move nav underline, {error:?}");
            }
        }
    });
    listen(nav, "click", click.as_ref().unchecked_ref())?;
    click.forget();
    Ok(())
}

pub fn bind_menu(
    document: &Document,
    list: HtmlElement,
    buttons: &str,
) -> Result<(), InteractionError> {
    let document = document.clone();
    let buttons = buttons.to_string();
    let mut menu = MenuToggle::new();
    let target_list = list.clone();
    let click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let Some(target) = event_target(&event) else {
            return;
        };
        if let Some(style) = menu.click(&target.class_name()) {
            for button in elements(&document, &buttons) {
                if let Err(error) = button.style().set_property("display", style.buttons_display)
                {
                    error!("unable to toggle menu button, {error:?}");
                }
            }
            let classes = target.class_list();
            if let Err(error) = classes
                .remove_1(style.remove_class)
                .and_then(|_| classes.add_1(style.add_class))
            {
                error!("unable to swap menu icon, {error:?}");
            }
            if let Err(error) = target_list.style().set_property("width", style.width) {
                error!("unable to resize menu, {error:?}");
            }
        }
    });
    listen(&list, "click", click.as_ref().unchecked_ref())?;
    click.forget();
    Ok(())
}

/// Arms one timer per deferred reverse animation, at that animation's deadline.
fn schedule_update(hover: &SharedHover, time: Duration, deadline: Duration) {
    let Some(window) = web_sys::window() else {
        error!("unable to schedule reverse animation, no global window");
        return;
    };
    let delay = deadline.saturating_sub(time).as_millis() as i32;
    let hover = hover.clone();
    let callback = Closure::once_into_js(move || {
        // timers may resolve a fraction of a millisecond before the deadline
        hover.borrow_mut().update(now().max(deadline));
    });
    if let Err(error) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        error!("unable to schedule reverse animation, {error:?}");
    }
}

fn pointer_event(event: &MouseEvent) -> Option<PointerEvent> {
    let target = event_target(event)?;
    Some(PointerEvent::new(
        [event.client_x() as f32, event.client_y() as f32],
        [target.offset_left() as f32, target.offset_top() as f32],
    ))
}

fn event_target(event: &MouseEvent) -> Option<HtmlElement> {
    event.target()?.dyn_into::<HtmlElement>().ok()
}

fn listen(
    element: &HtmlElement,
    event: &str,
    callback: &Function,
) -> Result<(), InteractionError> {
    element
        .add_event_listener_with_callback(event, callback)
        .map_err(|error| {
            error!("unable to add {event} listener, {error:?}");
            InteractionError::Host(format!("{event} listener rejected"))
        })
}

fn elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(error) => {
            error!("unable to query {selector}, {error:?}");
            return vec![];
        }
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn now() -> Duration {
    let millis = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0);
    Duration::from_secs_f64(millis.max(0.0) / 1000.0)
}

fn not_found(selector: &str) -> JsValue {
    let error = InteractionError::SurfaceNotFound(selector.to_string());
    error!("unable to bind interaction, {error}");
    to_js(error)
}

fn to_js(error: InteractionError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
