//! User profile and device flags.

use serde::{Deserialize, Serialize};

/// The user profile shown and edited on the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl UserProfile {
    /// Create a profile.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }

    /// Check whether every field is blank.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.avatar.is_empty()
    }

    /// Apply a partial update; `None` fields keep their current value.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = avatar;
        }
    }
}

/// A partial profile update.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Device-local boolean flags persisted across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceFlags {
    /// The user confirmed legal drinking age.
    pub age_verified: bool,
    /// The user granted the location permission.
    pub location_granted: bool,
    /// The welcome screen has been shown once.
    pub welcome_seen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_apply_partial_update() {
        let mut profile = UserProfile::new("John Doe", "john.doe@email.com", "");

        profile.apply(ProfileUpdate::default().name("Jane Doe"));

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "john.doe@email.com");
    }

    #[test]
    fn test_profile_is_blank() {
        assert!(UserProfile::default().is_blank());
        assert!(!UserProfile::new("a", "", "").is_blank());
    }

    #[test]
    fn test_flags_default_off() {
        let flags = DeviceFlags::default();
        assert!(!flags.age_verified);
        assert!(!flags.location_granted);
        assert!(!flags.welcome_seen);
    }
}
