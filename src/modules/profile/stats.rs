use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStat {
    pub label: String,
    pub value: String,
}

impl ProfileStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Summary card on the profile screen. Values are display text and are not
/// derived from the time card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    stats: Vec<ProfileStat>,
}

impl ProfileStats {
    pub fn new(stats: Vec<ProfileStat>) -> Self {
        Self { stats }
    }

    pub fn list(&self) -> &[ProfileStat] {
        &self.stats
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|stat| stat.label == label)
            .map(|stat| stat.value.as_str())
    }
}
