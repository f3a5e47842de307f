use crate::modules::profile::fields::ProfileField;
use crate::modules::profile::user_profile::UserProfile;
use crate::shared::core::draft::DraftBuffer;
use crate::shared::core::modal::ModalState;
use crate::shared::core::notice::Notice;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("the profile is not being edited")]
    NotEditing,
}

/// State behind the profile screen and its edit modal.
#[derive(Debug, Clone)]
pub struct ProfileController {
    profile: UserProfile,
    modal: ModalState<DraftBuffer<ProfileField>>,
}

impl ProfileController {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            modal: ModalState::Idle,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.modal.is_open()
    }

    /// Opens the edit modal pre-filled with the current profile.
    pub fn open_edit(&mut self) {
        let draft: DraftBuffer<ProfileField> = ProfileField::ALL
            .into_iter()
            .map(|field| (field, self.profile.field(field).to_string()))
            .collect();
        self.modal = ModalState::Composing(draft);
        debug!("profile edit opened");
    }

    pub fn update_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), ProfileError> {
        let draft = self.modal.draft_mut().ok_or(ProfileError::NotEditing)?;
        draft.set(field, value);
        Ok(())
    }

    pub fn draft_value(&self, field: ProfileField) -> Option<&str> {
        self.modal.draft().and_then(|draft| draft.get(&field))
    }

    /// Replaces the profile with the draft. Profile edits are not validated.
    pub fn save(&mut self) -> Result<Notice, ProfileError> {
        let draft = self.modal.close().ok_or(ProfileError::NotEditing)?;
        self.profile = self.profile.with_fields(draft.snapshot().iter());
        info!(name = %self.profile.name, "profile updated");
        Ok(Notice::new("Success", "Profile updated successfully"))
    }

    pub fn cancel(&mut self) {
        self.modal.close();
    }
}
