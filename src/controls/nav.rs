use log::error;

pub const NAV_STEP_EM: f32 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct NavStyle {
    /// 1-based index of the item now carrying the `active` class.
    pub active: usize,
    /// Underline `transform` value.
    pub transform: String,
}

/// Navigation bar with an underline border sliding under the clicked item.
pub struct NavUnderline {
    items: usize,
    step: f32,
    active: Option<usize>,
}

impl NavUnderline {
    pub fn new(items: usize) -> Self {
        Self {
            items,
            step: NAV_STEP_EM,
            active: None,
        }
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Handles click on menu item with the given `data-index` attribute.
    pub fn click(&mut self, data_index: &str) -> Option<NavStyle> {
        let index = match data_index.trim().parse::<usize>() {
            Ok(index) => index,
            Err(error) => {
                error!("unable to move nav underline, invalid index {data_index:?}, {error}");
                return None;
            }
        };
        if index == 0 || index > self.items {
            error!(
                "unable to move nav underline, index {index} out of 1..={}",
                self.items
            );
            return None;
        }
        self.active = Some(index);
        let left = self.step * (index - 1) as f32;
        Some(NavStyle {
            active: index,
            transform: format!("translate3d({left}em, 0, 0)"),
        })
    }
}
