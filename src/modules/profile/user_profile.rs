use crate::modules::profile::fields::ProfileField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub location: String,
    pub join_date: String,
    pub avatar_url: String,
}

impl UserProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Position => &self.position,
            ProfileField::Location => &self.location,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Position => &mut self.position,
            ProfileField::Location => &mut self.location,
        }
    }

    /// Returns a copy with the given editable fields replaced.
    pub fn with_fields<'a, I>(&self, values: I) -> UserProfile
    where
        I: IntoIterator<Item = (&'a ProfileField, &'a String)>,
    {
        let mut next = self.clone();
        for (field, value) in values {
            *next.field_mut(*field) = value.clone();
        }
        next
    }
}
