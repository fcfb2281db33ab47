//! Settings-page form state and the API-key verification lifecycle.
//!
//! DESIGN
//! ======
//! Key verification is a small state machine:
//!
//! ```text
//! Idle -> Testing -> Shown(result) -> Closing(result) -> Idle
//! ```
//!
//! `Closing` keeps the result mounted while the overlay's exit transition
//! plays; the page moves it to `Idle` after the configured delay. None of the
//! transitions touch `form`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::types::{Settings, TestResult};

/// Phase of the weather API key check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum KeyCheck {
    #[default]
    Idle,
    Testing,
    Shown(TestResult),
    Closing(TestResult),
}

#[derive(Clone, Debug)]
pub struct SettingsState {
    pub form: Settings,
    pub loading: bool,
    pub saving: bool,
    pub key_check: KeyCheck,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self { form: Settings::default(), loading: true, saving: false, key_check: KeyCheck::Idle }
    }
}

impl SettingsState {
    pub fn loaded(&mut self, settings: Option<Settings>) {
        if let Some(settings) = settings {
            self.form = settings;
        }
        self.loading = false;
    }

    pub fn has_key(&self) -> bool {
        !self.form.weather_api_key.trim().is_empty()
    }

    /// Whether the "Test Key" control is enabled.
    pub fn can_test(&self) -> bool {
        self.has_key() && self.key_check == KeyCheck::Idle
    }

    pub fn is_testing(&self) -> bool {
        self.key_check == KeyCheck::Testing
    }

    /// `Idle -> Testing`. Returns `false` when the guard refuses.
    pub fn begin_test(&mut self) -> bool {
        if !self.can_test() {
            return false;
        }
        self.key_check = KeyCheck::Testing;
        true
    }

    /// `Testing -> Shown`. Ignored in any other phase.
    pub fn finish_test(&mut self, result: TestResult) {
        if self.key_check == KeyCheck::Testing {
            self.key_check = KeyCheck::Shown(result);
        }
    }

    /// `Shown -> Closing`. Returns `false` if no result is showing or a close
    /// is already underway.
    pub fn begin_close(&mut self) -> bool {
        match std::mem::take(&mut self.key_check) {
            KeyCheck::Shown(result) => {
                self.key_check = KeyCheck::Closing(result);
                true
            }
            other => {
                self.key_check = other;
                false
            }
        }
    }

    /// `Closing -> Idle`, after the exit delay.
    pub fn finish_close(&mut self) {
        if matches!(self.key_check, KeyCheck::Closing(_)) {
            self.key_check = KeyCheck::Idle;
        }
    }

    pub fn modal_result(&self) -> Option<&TestResult> {
        match &self.key_check {
            KeyCheck::Shown(result) | KeyCheck::Closing(result) => Some(result),
            KeyCheck::Idle | KeyCheck::Testing => None,
        }
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.key_check, KeyCheck::Closing(_))
    }

    /// Mark a save in flight. Returns `false` if one already is.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }
}
