//! Long-press menu for an app tile
//!
//! Which actions a tile offers depends on where it is shown and on whether
//! the PIN session is unlocked.

use crate::domain::entities::AppViewItem;
use crate::domain::value_objects::{MoveDirection, PreferenceChange};

/// Screen the menu was opened from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuContext {
    /// Home screen rows
    Home,
    /// The all-apps grid
    AllApps,
    /// Per-app settings screen
    Settings,
}

/// A single menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Info,
    MoveEarlier,
    MoveLater,
    AddFavorite,
    RemoveFavorite,
    Hide,
    Show,
    Lock,
    Unlock,
    Uninstall,
}

impl MenuAction {
    /// Menu label for `app_name`
    pub fn title(self, app_name: &str) -> String {
        match self {
            MenuAction::Open => format!("Open {}", app_name),
            MenuAction::Info => "Information".to_string(),
            MenuAction::MoveEarlier => "Move Left".to_string(),
            MenuAction::MoveLater => "Move Right".to_string(),
            MenuAction::AddFavorite => "Add to Favorites".to_string(),
            MenuAction::RemoveFavorite => "Remove from Favorites".to_string(),
            MenuAction::Hide => "Hide".to_string(),
            MenuAction::Show => "Show".to_string(),
            MenuAction::Lock => "Lock".to_string(),
            MenuAction::Unlock => "Unlock".to_string(),
            MenuAction::Uninstall => format!("Uninstall {}", app_name),
        }
    }

    /// The preference write this action performs, if any
    pub fn preference_change(self) -> Option<PreferenceChange> {
        match self {
            MenuAction::AddFavorite => Some(PreferenceChange::Favorite(true)),
            MenuAction::RemoveFavorite => Some(PreferenceChange::Favorite(false)),
            MenuAction::Hide => Some(PreferenceChange::Visible(false)),
            MenuAction::Show => Some(PreferenceChange::Visible(true)),
            MenuAction::Lock => Some(PreferenceChange::Locked(true)),
            MenuAction::Unlock => Some(PreferenceChange::Locked(false)),
            _ => None,
        }
    }

    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            MenuAction::MoveEarlier => Some(MoveDirection::Earlier),
            MenuAction::MoveLater => Some(MoveDirection::Later),
            _ => None,
        }
    }
}

fn favorite_toggle(item: &AppViewItem) -> MenuAction {
    if item.is_favorite {
        MenuAction::RemoveFavorite
    } else {
        MenuAction::AddFavorite
    }
}

/// Actions offered for `item` in `context`
pub fn menu_actions(item: &AppViewItem, context: MenuContext, session_unlocked: bool) -> Vec<MenuAction> {
    if context == MenuContext::Settings {
        if !session_unlocked {
            return Vec::new();
        }
        return vec![
            favorite_toggle(item),
            if item.is_visible { MenuAction::Hide } else { MenuAction::Show },
            if item.is_locked { MenuAction::Unlock } else { MenuAction::Lock },
            MenuAction::MoveEarlier,
            MenuAction::MoveLater,
        ];
    }

    if item.is_locked && !session_unlocked {
        return vec![MenuAction::Open, MenuAction::Info];
    }

    let mut actions = vec![
        MenuAction::Open,
        MenuAction::Info,
        MenuAction::MoveEarlier,
        MenuAction::MoveLater,
        favorite_toggle(item),
    ];
    if context == MenuContext::AllApps {
        actions.push(MenuAction::Hide);
        actions.push(MenuAction::Uninstall);
    }
    actions
}

/// Whether `action` may be performed on `item` from `context`
///
/// A toggle counts as offered when its counterpart is; the desired state may
/// already hold.
pub fn permits(item: &AppViewItem, action: MenuAction, context: MenuContext, session_unlocked: bool) -> bool {
    let counterpart = match action {
        MenuAction::AddFavorite => MenuAction::RemoveFavorite,
        MenuAction::RemoveFavorite => MenuAction::AddFavorite,
        MenuAction::Hide => MenuAction::Show,
        MenuAction::Show => MenuAction::Hide,
        MenuAction::Lock => MenuAction::Unlock,
        MenuAction::Unlock => MenuAction::Lock,
        other => other,
    };
    let offered = menu_actions(item, context, session_unlocked);
    offered.contains(&action) || offered.contains(&counterpart)
}
