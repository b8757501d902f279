//! Shared application state.
//!
//! `CoreState` holds what outlives a single screen: settings, the signed-in
//! role, the current route and the last user interaction. Uses `RwLock`
//! so readers (most screens) never block each other.

use std::sync::{Mutex, RwLock, RwLockReadGuard};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::chat::ChatSession;
use crate::config::Settings;
use crate::forms::LoginOutcome;
use crate::models::enums::{Language, UserRole};
use crate::navigation::Route;

/// Default inactivity timeout: 15 minutes.
const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 900;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}

/// Who is signed in, and since when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub role: UserRole,
    pub since: DateTime<Local>,
}

pub struct CoreState {
    settings: RwLock<Settings>,
    session: RwLock<Option<SignedIn>>,
    route: RwLock<Route>,
    /// Inactivity timeout threshold in seconds.
    pub inactivity_timeout_secs: u64,
    last_activity: Mutex<Instant>,
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            session: RwLock::new(None),
            route: RwLock::new(Route::Home),
            inactivity_timeout_secs: DEFAULT_INACTIVITY_TIMEOUT_SECS,
            last_activity: Mutex::new(Instant::now()),
        }
    }

    // ── Settings ────────────────────────────────────────────

    pub fn settings(&self) -> Result<RwLockReadGuard<'_, Settings>, CoreError> {
        self.settings.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn language(&self) -> Result<Language, CoreError> {
        Ok(self.settings()?.language)
    }

    pub fn set_language(&self, language: Language) -> Result<(), CoreError> {
        let mut settings = self.settings.write().map_err(|_| CoreError::LockPoisoned)?;
        settings.language = language;
        tracing::info!(language = %language, "Language changed");
        Ok(())
    }

    pub fn thinking_delay(&self) -> Result<Duration, CoreError> {
        Ok(Duration::from_millis(self.settings()?.thinking_delay_ms))
    }

    /// Symptom-checker chat in the current language and delay.
    pub fn new_symptom_chat(&self) -> Result<ChatSession, CoreError> {
        let settings = self.settings()?;
        Ok(ChatSession::symptom_checker(settings.language)
            .with_thinking_delay(Duration::from_millis(settings.thinking_delay_ms)))
    }

    // ── Sign-in ─────────────────────────────────────────────

    /// Record an accepted sign-in and move to its dashboard.
    pub fn sign_in(&self, outcome: &LoginOutcome) -> Result<(), CoreError> {
        {
            let mut session = self.session.write().map_err(|_| CoreError::LockPoisoned)?;
            *session = Some(SignedIn {
                role: outcome.role,
                since: Local::now(),
            });
        }
        self.navigate(outcome.route)?;
        self.update_activity();
        Ok(())
    }

    /// Forget the signed-in role and return to the home screen.
    pub fn sign_out(&self) -> Result<(), CoreError> {
        let previous = self
            .session
            .write()
            .map_err(|_| CoreError::LockPoisoned)?
            .take();
        if let Some(signed_in) = previous {
            tracing::info!(role = %signed_in.role, "Signed out");
        }
        self.navigate(Route::Home)
    }

    pub fn signed_in(&self) -> Result<Option<SignedIn>, CoreError> {
        Ok(self
            .session
            .read()
            .map_err(|_| CoreError::LockPoisoned)?
            .clone())
    }

    // ── Navigation ──────────────────────────────────────────

    pub fn navigate(&self, route: Route) -> Result<(), CoreError> {
        *self.route.write().map_err(|_| CoreError::LockPoisoned)? = route;
        tracing::debug!(route = %route, "Navigated");
        Ok(())
    }

    pub fn current_route(&self) -> Result<Route, CoreError> {
        Ok(*self.route.read().map_err(|_| CoreError::LockPoisoned)?)
    }

    // ── Inactivity ──────────────────────────────────────────

    pub fn update_activity(&self) {
        if let Ok(mut last) = self.last_activity.lock() {
            *last = Instant::now();
        }
    }

    /// True once the inactivity timeout has elapsed.
    pub fn check_timeout(&self) -> bool {
        self.last_activity
            .lock()
            .map(|last| last.elapsed().as_secs() >= self.inactivity_timeout_secs)
            .unwrap_or(false)
    }

    /// Sign out if the user has been idle past the timeout. Returns whether
    /// a sign-out happened.
    pub fn enforce_timeout(&self) -> Result<bool, CoreError> {
        if !self.check_timeout() || self.signed_in()?.is_none() {
            return Ok(false);
        }
        tracing::info!("Signing out after inactivity");
        self.sign_out()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_login() -> LoginOutcome {
        LoginOutcome {
            role: UserRole::Patient,
            route: Route::PatientDashboard,
            message: "Login successful!",
        }
    }

    #[test]
    fn new_state_starts_home_signed_out() {
        let state = CoreState::default();
        assert_eq!(state.current_route().unwrap(), Route::Home);
        assert_eq!(state.signed_in().unwrap(), None);
        assert_eq!(state.language().unwrap(), Language::English);
    }

    #[test]
    fn sign_in_moves_to_dashboard() {
        let state = CoreState::default();
        state.sign_in(&patient_login()).unwrap();
        assert_eq!(state.current_route().unwrap(), Route::PatientDashboard);
        assert_eq!(state.signed_in().unwrap().unwrap().role, UserRole::Patient);

        state.sign_out().unwrap();
        assert_eq!(state.current_route().unwrap(), Route::Home);
        assert!(state.signed_in().unwrap().is_none());
    }

    #[test]
    fn sign_out_when_signed_out_is_safe() {
        let state = CoreState::default();
        state.sign_out().unwrap();
        assert_eq!(state.current_route().unwrap(), Route::Home);
    }

    #[test]
    fn language_change_applies_to_new_chats() {
        let state = CoreState::new(Settings {
            language: Language::English,
            thinking_delay_ms: 10,
        });
        state.set_language(Language::Hindi).unwrap();
        let chat = state.new_symptom_chat().unwrap();
        assert_eq!(chat.language().unwrap(), Language::Hindi);
        assert_eq!(chat.thinking_delay(), Duration::from_millis(10));
    }

    #[test]
    fn update_activity_resets_timer() {
        let state = CoreState::default();
        state.update_activity();
        assert!(!state.check_timeout());
    }

    #[test]
    fn zero_timeout_signs_out() {
        let mut state = CoreState::default();
        state.inactivity_timeout_secs = 0;
        assert_eq!(state.enforce_timeout(), Ok(false));

        state.sign_in(&patient_login()).unwrap();
        assert_eq!(state.enforce_timeout(), Ok(true));
        assert!(state.signed_in().unwrap().is_none());
    }
}
