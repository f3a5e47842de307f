use crate::modules::settings::setting::{SettingItem, SettingSection};
use crate::shared::core::notice::Notice;

fn coming_soon(title: &str, what: &str) -> Option<Notice> {
    Some(Notice::new(title, format!("{what} coming soon")))
}

/// The settings screen as it ships.
pub fn default_sections() -> Vec<SettingSection> {
    vec![
        SettingSection::new(
            "Notifications",
            vec![
                SettingItem::toggle(
                    "push-notifications",
                    "Push Notifications",
                    "Receive alerts and updates",
                    true,
                ),
                SettingItem::toggle(
                    "email-notifications",
                    "Email Notifications",
                    "Get updates via email",
                    false,
                ),
            ],
        ),
        SettingSection::new(
            "Security & Privacy",
            vec![
                SettingItem::toggle(
                    "biometric",
                    "Biometric Login",
                    "Use fingerprint or face ID",
                    false,
                ),
                SettingItem::navigation(
                    "change-password",
                    "Change Password",
                    "Update your account password",
                    coming_soon("Feature", "Password change"),
                ),
                SettingItem::navigation(
                    "privacy-settings",
                    "Privacy Settings",
                    "Manage your data privacy",
                    coming_soon("Feature", "Privacy settings"),
                ),
            ],
        ),
        SettingSection::new(
            "App Preferences",
            vec![
                SettingItem::toggle("dark-mode", "Dark Mode", "Use dark theme", true),
                SettingItem::toggle("auto-sync", "Auto Sync", "Automatically sync data", true),
                SettingItem::navigation(
                    "time-format",
                    "Time Format",
                    "12-hour format",
                    coming_soon("Feature", "Time format settings"),
                ),
                SettingItem::navigation(
                    "language",
                    "Language",
                    "English (US)",
                    coming_soon("Feature", "Language settings"),
                ),
            ],
        ),
        SettingSection::new(
            "Support & About",
            vec![
                SettingItem::navigation(
                    "help",
                    "Help & Support",
                    "Get help and contact support",
                    Some(Notice::new(
                        "Support",
                        "Contact support at support@securetime.com",
                    )),
                ),
                SettingItem::navigation(
                    "terms",
                    "Terms of Service",
                    "Read our terms and conditions",
                    coming_soon("Terms", "Terms of service"),
                ),
                SettingItem::navigation(
                    "rate",
                    "Rate App",
                    "Rate us on the app store",
                    coming_soon("Thank you!", "Rating feature"),
                ),
                SettingItem::navigation(
                    "version",
                    "App Version",
                    concat!("v", env!("CARGO_PKG_VERSION")),
                    None,
                ),
            ],
        ),
        SettingSection::new(
            "Danger Zone",
            vec![SettingItem::action(
                "clear-data",
                "Clear Local Data",
                "Remove all local app data",
                Notice::new("Clear Data", "This will remove all local data. Are you sure?"),
                Notice::new("Success", "Local data cleared"),
            )],
        ),
    ]
}
