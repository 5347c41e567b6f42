use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stamped into every record written by this build of the setup flow.
pub const SETUP_VERSION: &str = "1.0";

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedApps {
    pub web_browser: bool,
    pub music_player: bool,
    pub dev_tools: bool,
    pub office_suite: bool,
}

/// The durable record of one completed setup run. Written once at the end of
/// onboarding and never mutated afterwards; the launcher only checks that it
/// exists and carries a few required keys.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub language: String,
    pub region: String,
    pub keyboard_layout: String,
    pub theme: Theme,
    pub username: String,
    /// Whether the user set a password. The password itself is never stored.
    pub has_password: bool,
    pub selected_network: String,
    pub developer_mode: bool,
    pub recommended_apps: RecommendedApps,
    pub setup_version: String,
    pub setup_date: DateTime<Utc>,
}

impl ConfigRecord {
    pub fn builder() -> ConfigRecordBuilder {
        ConfigRecordBuilder::default()
    }
}

/// Accumulates the setup pages' answers and finalizes them into an immutable
/// [`ConfigRecord`]. Defaults match the wizard's pre-selected widgets.
#[derive(Clone, Debug)]
pub struct ConfigRecordBuilder {
    language: String,
    region: String,
    keyboard_layout: String,
    theme: Theme,
    username: String,
    has_password: bool,
    selected_network: String,
    developer_mode: bool,
    recommended_apps: RecommendedApps,
}

impl Default for ConfigRecordBuilder {
    fn default() -> Self {
        Self {
            language: "English (US)".to_string(),
            region: "United States".to_string(),
            keyboard_layout: "US QWERTY".to_string(),
            theme: Theme::Light,
            username: String::new(),
            has_password: false,
            selected_network: "Skip for now".to_string(),
            developer_mode: false,
            recommended_apps: RecommendedApps::default(),
        }
    }
}

impl ConfigRecordBuilder {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn keyboard_layout(mut self, layout: impl Into<String>) -> Self {
        self.keyboard_layout = layout.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn has_password(mut self, has_password: bool) -> Self {
        self.has_password = has_password;
        self
    }

    pub fn selected_network(mut self, network: impl Into<String>) -> Self {
        self.selected_network = network.into();
        self
    }

    pub fn developer_mode(mut self, enabled: bool) -> Self {
        self.developer_mode = enabled;
        self
    }

    pub fn recommended_apps(mut self, apps: RecommendedApps) -> Self {
        self.recommended_apps = apps;
        self
    }

    /// Stamps the setup version and date and seals the record.
    pub fn finish(self) -> ConfigRecord {
        ConfigRecord {
            language: self.language,
            region: self.region,
            keyboard_layout: self.keyboard_layout,
            theme: self.theme,
            username: self.username,
            has_password: self.has_password,
            selected_network: self.selected_network,
            developer_mode: self.developer_mode,
            recommended_apps: self.recommended_apps,
            setup_version: SETUP_VERSION.to_string(),
            setup_date: Utc::now(),
        }
    }
}
