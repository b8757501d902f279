use super::DashboardError;
use crate::models::enums::str_enum;
use crate::navigation::Route;

pub const PROFILE_SAVED_MESSAGE: &str = "Profile updated successfully!";

str_enum!(ProfileTab {
    Personal => "personal",
    Health => "health",
    Activities => "activities",
    Settings => "settings",
});

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Activities => "Activities",
            Self::Settings => "Settings",
        }
    }
}

/// Editable text fields on the personal tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    HealthNotes,
}

/// Switches on the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Notifications,
    DarkMode,
    Biometric,
}

/// State behind the profile screen. Text fields only change in edit mode;
/// preference switches apply immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub active_tab: ProfileTab,
    name: String,
    email: String,
    phone: String,
    health_notes: String,
    notifications_enabled: bool,
    dark_mode_enabled: bool,
    biometric_enabled: bool,
    editing: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            active_tab: ProfileTab::Personal,
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 123-456-7890".into(),
            health_notes: "Allergic to penicillin, Asthmatic".into(),
            notifications_enabled: true,
            dark_mode_enabled: false,
            biometric_enabled: true,
            editing: false,
        }
    }
}

impl ProfileState {
    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::HealthNotes => &self.health_notes,
        }
    }

    pub fn set_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), DashboardError> {
        if !self.editing {
            return Err(DashboardError::NotEditing);
        }
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::HealthNotes => &mut self.health_notes,
        };
        *slot = value.into();
        Ok(())
    }

    /// Leave edit mode and confirm.
    pub fn save(&mut self) -> &'static str {
        self.editing = false;
        tracing::info!("Profile saved");
        PROFILE_SAVED_MESSAGE
    }

    pub fn preference(&self, preference: Preference) -> bool {
        match preference {
            Preference::Notifications => self.notifications_enabled,
            Preference::DarkMode => self.dark_mode_enabled,
            Preference::Biometric => self.biometric_enabled,
        }
    }

    pub fn set_preference(&mut self, preference: Preference, enabled: bool) {
        let slot = match preference {
            Preference::Notifications => &mut self.notifications_enabled,
            Preference::DarkMode => &mut self.dark_mode_enabled,
            Preference::Biometric => &mut self.biometric_enabled,
        };
        *slot = enabled;
    }

    /// Confirmed logout leaves edit mode and returns to the home screen.
    pub fn logout(&mut self) -> Route {
        self.editing = false;
        Route::Home
    }
}
