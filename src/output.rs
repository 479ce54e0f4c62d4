use serde_json::{Map, Value};

use crate::Animation;

/// Effect boundary of the hover debouncer, implemented by the host UI layer.
pub trait AnimationSink {
    fn apply_animation(&mut self, animation: &Animation, origin: [f32; 2]);
}

/// Inline style of an animated surface, the properties a host must write
/// to the element `style` attribute.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InlineStyle {
    pub properties: Map<String, Value>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).and_then(Value::as_str)
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.properties
            .insert(property.to_string(), Value::String(value.into()));
    }

    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .filter_map(|(property, value)| {
                value.as_str().map(|value| format!("{property}: {value};"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AnimationSink for InlineStyle {
    fn apply_animation(&mut self, animation: &Animation, origin: [f32; 2]) {
        let [x, y] = origin;
        self.set("animation", animation.shorthand());
        self.set("top", format!("{y}px"));
        self.set("left", format!("{x}px"));
    }
}

impl<S: AnimationSink + ?Sized> AnimationSink for &mut S {
    fn apply_animation(&mut self, animation: &Animation, origin: [f32; 2]) {
        (**self).apply_animation(animation, origin)
    }
}
