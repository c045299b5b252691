//! Configuration for the task entry form.
//!
//! Controls the text of every notification and whether incomplete
//! submissions are surfaced to the user.
//!
//! # Examples
//!
//! ```
//! use taskform::form::config::{FormConfig, IncompletePolicy};
//!
//! let config = FormConfig::default();
//! assert_eq!(config.incomplete_policy, IncompletePolicy::Silent);
//! assert_eq!(config.messages.title_required, "Please enter a title");
//!
//! let strict = FormConfig::strict();
//! assert_eq!(strict.incomplete_policy, IncompletePolicy::Notify);
//! ```

use minijinja::Environment;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::form::domain::SessionMode;

/// How to treat a submission whose title is set but whose other fields are
/// not all filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompletePolicy {
    /// Do nothing: no command, no notification.
    #[default]
    Silent,
    /// Reject with [`Rejection::IncompleteForm`] and an error notification.
    ///
    /// [`Rejection::IncompleteForm`]: crate::form::domain::Rejection::IncompleteForm
    Notify,
}

/// Identifies one notification text in a [`MessageCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// The title is empty.
    TitleRequired,
    /// A create session dispatched its record.
    TaskAdded,
    /// A create session failed the date-order check.
    TaskAddFailed,
    /// An edit session dispatched its record.
    TaskUpdated,
    /// An edit session failed the date-order check.
    TaskUpdateFailed,
    /// An edit draft equals its original.
    NoChanges,
    /// Non-title fields are empty and the policy is
    /// [`IncompletePolicy::Notify`].
    IncompleteForm,
}

impl MessageKey {
    /// Every message key.
    pub const ALL: [Self; 7] = [
        Self::TitleRequired,
        Self::TaskAdded,
        Self::TaskAddFailed,
        Self::TaskUpdated,
        Self::TaskUpdateFailed,
        Self::NoChanges,
        Self::IncompleteForm,
    ];

    /// Returns the configuration key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleRequired => "title_required",
            Self::TaskAdded => "task_added",
            Self::TaskAddFailed => "task_add_failed",
            Self::TaskUpdated => "task_updated",
            Self::TaskUpdateFailed => "task_update_failed",
            Self::NoChanges => "no_changes",
            Self::IncompleteForm => "incomplete_form",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values available to message templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageContext<'a> {
    /// Session mode (`create` or `edit`).
    pub mode: SessionMode,
    /// Draft title.
    pub title: &'a str,
    /// Draft start date.
    pub start_date: &'a str,
    /// Draft end date.
    pub end_date: &'a str,
}

/// Notification texts.
///
/// Each text is a `minijinja` template rendered with a [`MessageContext`],
/// so `"Added {{ title }}"` is valid. Plain text renders unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    /// Sent when the title is empty.
    pub title_required: String,
    /// Sent when a create succeeds.
    pub task_added: String,
    /// Sent when a create fails the date-order check.
    pub task_add_failed: String,
    /// Sent when an edit succeeds.
    pub task_updated: String,
    /// Sent when an edit fails the date-order check.
    pub task_update_failed: String,
    /// Sent when an edit changes nothing.
    pub no_changes: String,
    /// Sent for incomplete drafts under [`IncompletePolicy::Notify`].
    pub incomplete_form: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            title_required: "Please enter a title".to_owned(),
            task_added: "Task added successfully".to_owned(),
            task_add_failed: "Task added unsuccessfully".to_owned(),
            task_updated: "Task Updated successfully".to_owned(),
            task_update_failed: "Cant Update".to_owned(),
            no_changes: "No changes made".to_owned(),
            incomplete_form: "Please fill in all fields".to_owned(),
        }
    }
}

impl MessageCatalog {
    /// Returns the raw template for `key`.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::TitleRequired => &self.title_required,
            MessageKey::TaskAdded => &self.task_added,
            MessageKey::TaskAddFailed => &self.task_add_failed,
            MessageKey::TaskUpdated => &self.task_updated,
            MessageKey::TaskUpdateFailed => &self.task_update_failed,
            MessageKey::NoChanges => &self.no_changes,
            MessageKey::IncompleteForm => &self.incomplete_form,
        }
    }

    /// Renders the text for `key`.
    ///
    /// A template that fails to render is returned verbatim and the failure
    /// is logged.
    #[must_use]
    pub fn render(&self, key: MessageKey, context: &MessageContext<'_>) -> String {
        let template = self.template(key);
        let environment = Environment::new();
        environment
            .render_str(template, context)
            .unwrap_or_else(|error| {
                tracing::warn!(key = %key, %error, "message template failed to render");
                template.to_owned()
            })
    }

    /// Checks that every template parses.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Template`] for the first template with a
    /// syntax error.
    pub fn check(&self) -> Result<(), ConfigError> {
        let environment = Environment::new();
        for key in MessageKey::ALL {
            environment
                .template_from_str(self.template(key))
                .map_err(|error| ConfigError::Template {
                    key,
                    reason: error.to_string(),
                })?;
        }
        Ok(())
    }
}

/// Form behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Notification texts.
    pub messages: MessageCatalog,
    /// Treatment of titled but incomplete submissions.
    pub incomplete_policy: IncompletePolicy,
}

impl FormConfig {
    /// Creates a configuration that reports incomplete submissions.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            incomplete_policy: IncompletePolicy::Notify,
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Template`] when a message template does not parse.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.messages.check()?;
        Ok(config)
    }
}

/// Errors returned while loading form configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is malformed.
    #[error("invalid form configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A message template has a syntax error.
    #[error("invalid template for message '{key}': {reason}")]
    Template {
        /// Offending message key.
        key: MessageKey,
        /// Parser diagnostic.
        reason: String,
    },
}
