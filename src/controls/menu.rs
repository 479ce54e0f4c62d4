use log::debug;

pub const ICON_CLOSE: &str = "icon-x";
pub const ICON_MENU: &str = "icon-menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Expanded,
    Collapsed,
}

impl MenuState {
    /// Class of the toggle icon shown in this state.
    pub fn icon(&self) -> &'static str {
        match self {
            MenuState::Expanded => ICON_CLOSE,
            MenuState::Collapsed => ICON_MENU,
        }
    }

    pub fn width(&self) -> &'static str {
        match self {
            MenuState::Expanded => "3.5rem",
            MenuState::Collapsed => ".4rem",
        }
    }

    /// `display` value of the menu buttons.
    pub fn buttons_display(&self) -> &'static str {
        match self {
            MenuState::Expanded => "block",
            MenuState::Collapsed => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    pub remove_class: &'static str,
    pub add_class: &'static str,
    pub width: &'static str,
    pub buttons_display: &'static str,
}

/// Collapsible side menu toggled by its icon.
pub struct MenuToggle {
    state: MenuState,
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuToggle {
    pub fn new() -> Self {
        Self {
            state: MenuState::Expanded,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Handles a click on an element of the menu with the given class list.
    pub fn click(&mut self, classes: &str) -> Option<MenuStyle> {
        let icon = self.state.icon();
        if !classes.split_whitespace().any(|class| class == icon) {
            debug!("menu click ignored, target is not the {icon} toggle");
            return None;
        }
        let next = match self.state {
            MenuState::Expanded => MenuState::Collapsed,
            MenuState::Collapsed => MenuState::Expanded,
        };
        self.state = next;
        Some(MenuStyle {
            remove_class: icon,
            add_class: next.icon(),
            width: next.width(),
            buttons_display: next.buttons_display(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_collapse_and_expand() {
        let mut menu = MenuToggle::new();
        let style = menu.click("iconfont icon-x").expect("toggle clicked");
        assert_eq!(
            style,
            MenuStyle {
                remove_class: "icon-x",
                add_class: "icon-menu",
                width: ".4rem",
                buttons_display: "none",
            }
        );
        assert_eq!(menu.state(), MenuState::Collapsed);

        let style = menu.click("iconfont icon-menu").expect("toggle clicked");
        assert_eq!(style.add_class, "icon-x");
        assert_eq!(style.width, "3.5rem");
        assert_eq!(style.buttons_display, "block");
        assert_eq!(menu.state(), MenuState::Expanded)
    }

    #[test]
    pub fn test_unrelated_element_ignored() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.click("btn"), None);
        assert_eq!(menu.click(""), None);
        assert_eq!(menu.state(), MenuState::Expanded)
    }

    #[test]
    pub fn test_stale_icon_ignored() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.click("icon-menu"), None);
        assert_eq!(menu.state(), MenuState::Expanded)
    }

    #[test]
    pub fn test_class_must_match_whole_word() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.click("icon-x-large"), None)
    }
}
