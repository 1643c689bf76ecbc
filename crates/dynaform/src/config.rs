// File: src/config.rs
// Purpose: Presentation settings parsed from dynaform.toml

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation settings. None of these affect validation or form state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub widgets: WidgetSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// Page and form chrome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    #[serde(default = "default_result_title")]
    pub result_title: String,

    /// Endpoint each input posts its own value to on change
    #[serde(default = "default_edit_action")]
    pub edit_action: String,

    /// Endpoint the whole form posts to on submit
    #[serde(default = "default_submit_action")]
    pub submit_action: String,

    /// htmx script included by full pages; empty disables it
    #[serde(default = "default_htmx_src")]
    pub htmx_src: String,
}

/// Labels and placeholders used by the built-in widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Placeholder for text and integer inputs without their own
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    #[serde(default = "default_currency_placeholder")]
    pub currency_placeholder: String,

    #[serde(default = "default_amount_label")]
    pub amount_label: String,

    #[serde(default = "default_amount_placeholder")]
    pub amount_placeholder: String,
}

/// Demo server binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

// Default values
fn default_title() -> String {
    "Dynamic Form".to_string()
}

fn default_submit_label() -> String {
    "Save Changes".to_string()
}

fn default_result_title() -> String {
    "Result".to_string()
}

fn default_edit_action() -> String {
    "/edit".to_string()
}

fn default_submit_action() -> String {
    "/submit".to_string()
}

fn default_htmx_src() -> String {
    "https://unpkg.com/htmx.org@2.0.3".to_string()
}

fn default_placeholder() -> String {
    "Enter value".to_string()
}

fn default_currency_label() -> String {
    "Currency".to_string()
}

fn default_currency_placeholder() -> String {
    "Select currency".to_string()
}

fn default_amount_label() -> String {
    "Amount".to_string()
}

fn default_amount_placeholder() -> String {
    "Enter amount".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit_label: default_submit_label(),
            result_title: default_result_title(),
            edit_action: default_edit_action(),
            submit_action: default_submit_action(),
            htmx_src: default_htmx_src(),
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            currency_label: default_currency_label(),
            currency_placeholder: default_currency_placeholder(),
            amount_label: default_amount_label(),
            amount_placeholder: default_amount_placeholder(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))?;
        settings
            .form
            .validate()
            .with_context(|| format!("Invalid settings file: {:?}", path))?;

        Ok(settings)
    }
}

impl FormSettings {
    /// Both actions become routes: each must be absolute and they must differ
    pub fn validate(&self) -> Result<()> {
        for (key, action) in [
            ("edit_action", &self.edit_action),
            ("submit_action", &self.submit_action),
        ] {
            ensure!(
                action.starts_with('/'),
                "form.{} must start with '/', got {:?}",
                key,
                action
            );
        }
        ensure!(
            self.edit_action != self.submit_action,
            "form.edit_action and form.submit_action are both {:?}",
            self.edit_action
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.form.title, "Dynamic Form");
        assert_eq!(settings.form.submit_label, "Save Changes");
        assert_eq!(settings.widgets.placeholder, "Enter value");
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_partial_settings() {
        let toml = r#"
            [form]
            title = "Edit profile"

            [widgets]
            amount_label = "Betrag"
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.form.title, "Edit profile");
        assert_eq!(settings.form.submit_label, "Save Changes");
        assert_eq!(settings.widgets.amount_label, "Betrag");
        assert_eq!(settings.widgets.currency_label, "Currency");
    }

    #[test]
    fn test_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(Settings::load(&missing).unwrap().server.host, "127.0.0.1");

        let empty = dir.path().join("empty.toml");
        std::fs::File::create(&empty).unwrap();
        assert_eq!(Settings::load(&empty).unwrap().form.title, "Dynamic Form");
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("dynaform.toml");
        let mut file = std::fs::File::create(&broken).unwrap();
        writeln!(file, "[server]\nport = \"not a number\"").unwrap();

        let err = Settings::load(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn test_relative_action_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("dynaform.toml");
        let mut file = std::fs::File::create(&file_path).unwrap();
        writeln!(file, "[form]\nedit_action = \"edit\"").unwrap();

        let err = Settings::load(&file_path).unwrap_err();
        assert!(err.to_string().contains("Invalid settings file"));
        assert!(format!("{:#}", err).contains("form.edit_action must start with '/'"));
    }

    #[test]
    fn test_equal_actions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("dynaform.toml");
        let mut file = std::fs::File::create(&file_path).unwrap();
        writeln!(file, "[form]\nedit_action = \"/form\"\nsubmit_action = \"/form\"").unwrap();

        let err = Settings::load(&file_path).unwrap_err();
        assert!(format!("{:#}", err).contains("are both \"/form\""));
    }

    #[test]
    fn test_default_actions_are_valid() {
        assert!(FormSettings::default().validate().is_ok());
    }
}
