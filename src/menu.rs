//! Main menu system with settings configuration

use crate::settings::{Settings, VisualSettings};

/// Menu screens
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen {
    Main,
    Settings,
}

/// Menu state
#[derive(Debug, Clone)]
pub struct Menu {
    pub screen: MenuScreen,
    pub selected: usize,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub item_type: MenuItemType,
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum MenuItemType {
    /// Simple button that triggers an action
    Button(MenuAction),
    /// Toggle boolean setting
    Toggle { key: SettingKey, value: bool },
    /// Cycle through options
    Cycle {
        key: SettingKey,
        options: Vec<String>,
        current: usize,
    },
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    StartSession,
    GoToScreen(MenuScreen),
    Back,
    Quit,
}

/// Setting keys for identifying which setting to modify
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingKey {
    PieceStyle,
    ShowIds,
}

impl Menu {
    pub fn new() -> Self {
        Self::main_menu()
    }

    pub fn main_menu() -> Self {
        Self {
            screen: MenuScreen::Main,
            selected: 0,
            items: vec![
                MenuItem {
                    label: "Start".to_string(),
                    item_type: MenuItemType::Button(MenuAction::StartSession),
                },
                MenuItem {
                    label: "Settings".to_string(),
                    item_type: MenuItemType::Button(MenuAction::GoToScreen(MenuScreen::Settings)),
                },
                MenuItem {
                    label: "Quit".to_string(),
                    item_type: MenuItemType::Button(MenuAction::Quit),
                },
            ],
        }
    }

    pub fn settings_menu(settings: &Settings) -> Self {
        let styles: Vec<String> = VisualSettings::styles()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let current_style = styles
            .iter()
            .position(|s| s == &settings.visual.piece_style)
            .unwrap_or(0);

        Self {
            screen: MenuScreen::Settings,
            selected: 0,
            items: vec![
                MenuItem {
                    label: "Piece Style".to_string(),
                    item_type: MenuItemType::Cycle {
                        key: SettingKey::PieceStyle,
                        options: styles,
                        current: current_style,
                    },
                },
                MenuItem {
                    label: "Show Ids".to_string(),
                    item_type: MenuItemType::Toggle {
                        key: SettingKey::ShowIds,
                        value: settings.visual.show_ids,
                    },
                },
                MenuItem {
                    label: "Back".to_string(),
                    item_type: MenuItemType::Button(MenuAction::Back),
                },
            ],
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn move_down(&mut self) {
        if self.selected < self.items.len() - 1 {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
    }

    /// Handle left/right for toggles and cycles
    pub fn adjust_left(&mut self, settings: &mut Settings) {
        if let Some(item) = self.items.get_mut(self.selected) {
            match &mut item.item_type {
                MenuItemType::Toggle { key, value } => {
                    *value = !*value;
                    apply_setting(settings, key, &SettingValue::Bool(*value));
                }
                MenuItemType::Cycle {
                    key,
                    options,
                    current,
                } => {
                    *current = if *current == 0 {
                        options.len() - 1
                    } else {
                        *current - 1
                    };
                    apply_setting(settings, key, &SettingValue::String(options[*current].clone()));
                }
                _ => {}
            }
        }
    }

    pub fn adjust_right(&mut self, settings: &mut Settings) {
        if let Some(item) = self.items.get_mut(self.selected) {
            match &mut item.item_type {
                MenuItemType::Toggle { key, value } => {
                    *value = !*value;
                    apply_setting(settings, key, &SettingValue::Bool(*value));
                }
                MenuItemType::Cycle {
                    key,
                    options,
                    current,
                } => {
                    *current = (*current + 1) % options.len();
                    apply_setting(settings, key, &SettingValue::String(options[*current].clone()));
                }
                _ => {}
            }
        }
    }

    /// Get the action for the current selection (for Button types)
    pub fn select(&self) -> Option<&MenuAction> {
        if let Some(item) = self.items.get(self.selected) {
            if let MenuItemType::Button(action) = &item.item_type {
                return Some(action);
            }
        }
        None
    }

    pub fn go_to(&mut self, screen: MenuScreen, settings: &Settings) {
        *self = match screen {
            MenuScreen::Main => Self::main_menu(),
            MenuScreen::Settings => Self::settings_menu(settings),
            _ => Self::main_menu(),
        };
    }

    /// Go back to previous screen
    pub fn go_back(&mut self, settings: &Settings) {
        let prev = match self.screen {
            MenuScreen::Main => MenuScreen::Main,
            MenuScreen::Settings => MenuScreen::Main,
            _ => MenuScreen::Main,
        };
        self.go_to(prev, settings);
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper enum for setting values
enum SettingValue {
    Bool(bool),
    String(String),
}

/// Apply a setting change to the Settings struct
fn apply_setting(settings: &mut Settings, key: &SettingKey, value: &SettingValue) {
    match (key, value) {
        (SettingKey::PieceStyle, SettingValue::String(v)) => {
            settings.visual.piece_style = v.clone();
        }
        (SettingKey::ShowIds, SettingValue::Bool(v)) => {
            settings.visual.show_ids = *v;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut menu = Menu::main_menu();
        menu.move_up();
        assert_eq!(menu.selected, menu.items.len() - 1);
        menu.move_down();
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_select_returns_button_action() {
        let menu = Menu::main_menu();
        assert_eq!(menu.select(), Some(&MenuAction::StartSession));
    }

    #[test]
    fn test_cycle_writes_through_to_settings() {
        let mut settings = Settings::default();
        let mut menu = Menu::settings_menu(&settings);
        menu.adjust_right(&mut settings);
        assert_eq!(settings.visual.piece_style, "round");
        menu.adjust_left(&mut settings);
        menu.adjust_left(&mut settings);
        assert_eq!(settings.visual.piece_style, "angle");
    }

    #[test]
    fn test_toggle_writes_through_to_settings() {
        let mut settings = Settings::default();
        let mut menu = Menu::settings_menu(&settings);
        menu.move_down();
        menu.adjust_right(&mut settings);
        assert!(!settings.visual.show_ids);
    }

    #[test]
    fn test_go_back_from_settings() {
        let settings = Settings::default();
        let mut menu = Menu::settings_menu(&settings);
        menu.go_back(&settings);
        assert_eq!(menu.screen, MenuScreen::Main);
    }
}
