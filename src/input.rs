use serde_json::Value;

use crate::InteractionError;

/// Pointer event payload as delivered by the host on mouse enter or leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Cursor position in viewport coordinates.
    pub client: [f32; 2],
    /// Layout offset of the event target.
    pub offset: [f32; 2],
}

impl PointerEvent {
    pub fn new(client: [f32; 2], offset: [f32; 2]) -> Self {
        Self { client, offset }
    }

    /// Cursor position relative to the target element.
    pub fn origin(&self) -> [f32; 2] {
        [
            self.client[0] - self.offset[0],
            self.client[1] - self.offset[1],
        ]
    }

    pub fn is_well_formed(&self) -> bool {
        self.client
            .iter()
            .chain(self.offset.iter())
            .all(|value| value.is_finite())
    }

    /// Reads `{"clientX", "clientY", "offsetLeft", "offsetTop"}` event payload.
    pub fn from_value(value: &Value) -> Result<Self, InteractionError> {
        let field = |name: &str| -> Result<f32, InteractionError> {
            value
                .get(name)
                .and_then(Value::as_f64)
                .map(|number| number as f32)
                .filter(|number| number.is_finite())
                .ok_or_else(|| InteractionError::MalformedEvent(name.to_string()))
        };
        Ok(Self {
            client: [field("clientX")?, field("clientY")?],
            offset: [field("offsetLeft")?, field("offsetTop")?],
        })
    }
}
