use crate::shared::core::notice::Notice;
use serde::Serialize;

/// What a settings row does when the user interacts with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettingKind {
    Toggle { enabled: bool },
    /// Opens a follow-up screen; `None` means the row is informational only.
    Navigation { notice: Option<Notice> },
    /// Destructive action guarded by a confirmation prompt.
    Action { confirm: Notice, done: Notice },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingItem {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(flatten)]
    pub kind: SettingKind,
}

impl SettingItem {
    pub fn toggle(id: &str, title: &str, subtitle: &str, enabled: bool) -> Self {
        Self::new(id, title, subtitle, SettingKind::Toggle { enabled })
    }

    pub fn navigation(id: &str, title: &str, subtitle: &str, notice: Option<Notice>) -> Self {
        Self::new(id, title, subtitle, SettingKind::Navigation { notice })
    }

    pub fn action(id: &str, title: &str, subtitle: &str, confirm: Notice, done: Notice) -> Self {
        Self::new(id, title, subtitle, SettingKind::Action { confirm, done })
    }

    fn new(id: &str, title: &str, subtitle: &str, kind: SettingKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: (!subtitle.is_empty()).then(|| subtitle.to_string()),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingSection {
    pub title: String,
    pub items: Vec<SettingItem>,
}

impl SettingSection {
    pub fn new(title: &str, items: Vec<SettingItem>) -> Self {
        Self {
            title: title.to_string(),
            items,
        }
    }
}
