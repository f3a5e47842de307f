use crate::modules::settings::defaults::default_sections;
use crate::modules::settings::setting::{SettingItem, SettingKind, SettingSection};
use crate::shared::core::notice::Notice;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("setting {0} is not a toggle")]
    NotAToggle(String),

    #[error("setting {0} has nothing to confirm")]
    NotAnAction(String),
}

/// Result of tapping a settings row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Notice(Notice),
    ConfirmationRequired(Notice),
    Nothing,
}

#[derive(Debug, Clone)]
pub struct SettingsController {
    sections: Vec<SettingSection>,
}

impl Default for SettingsController {
    fn default() -> Self {
        Self::new(default_sections())
    }
}

impl SettingsController {
    pub fn new(sections: Vec<SettingSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[SettingSection] {
        &self.sections
    }

    fn item(&self, id: &str) -> Result<&SettingItem, SettingsError> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.id == id)
            .ok_or_else(|| SettingsError::UnknownSetting(id.to_string()))
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut SettingItem, SettingsError> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.items.iter_mut())
            .find(|item| item.id == id)
            .ok_or_else(|| SettingsError::UnknownSetting(id.to_string()))
    }

    pub fn is_enabled(&self, id: &str) -> Result<bool, SettingsError> {
        match self.item(id)?.kind {
            SettingKind::Toggle { enabled } => Ok(enabled),
            _ => Err(SettingsError::NotAToggle(id.to_string())),
        }
    }

    pub fn toggle(&mut self, id: &str, value: bool) -> Result<(), SettingsError> {
        let item = self.item_mut(id)?;
        match &mut item.kind {
            SettingKind::Toggle { enabled } => {
                *enabled = value;
                info!(setting = id, enabled = value, "setting toggled");
                Ok(())
            }
            _ => Err(SettingsError::NotAToggle(id.to_string())),
        }
    }

    /// Toggle rows are switched, not tapped, so activating one does nothing.
    pub fn activate(&self, id: &str) -> Result<Activation, SettingsError> {
        Ok(match &self.item(id)?.kind {
            SettingKind::Toggle { .. } => Activation::Nothing,
            SettingKind::Navigation { notice: Some(notice) } => Activation::Notice(notice.clone()),
            SettingKind::Navigation { notice: None } => Activation::Nothing,
            SettingKind::Action { confirm, .. } => {
                Activation::ConfirmationRequired(confirm.clone())
            }
        })
    }

    pub fn confirm(&self, id: &str) -> Result<Notice, SettingsError> {
        match &self.item(id)?.kind {
            SettingKind::Action { done, .. } => {
                info!(setting = id, "setting action confirmed");
                Ok(done.clone())
            }
            _ => Err(SettingsError::NotAnAction(id.to_string())),
        }
    }
}
