//! The user/auth store.

use brew_storage::Storage;
use tracing::{debug, info, warn};

use crate::token::SessionToken;
use crate::user::{DeviceFlags, ProfileUpdate, UserProfile};
use crate::AuthError;

const KEY_TOKEN: &str = "auth:token";
const KEY_PROFILE: &str = "auth:profile";
const KEY_FLAGS: &str = "auth:flags";

/// The user/auth store.
///
/// Owns the session token, the profile, and the device flags, and
/// writes them through to device storage after every mutation. The
/// writes are fire-and-forget: a failed write is logged and the
/// in-memory state stays authoritative for the session, because none of
/// it is read back until the next process start.
pub struct UserStore {
    storage: Storage,
    token: Option<SessionToken>,
    profile: UserProfile,
    flags: DeviceFlags,
}

impl UserStore {
    /// Build the store from device storage, restoring any persisted
    /// session.
    ///
    /// Unreadable entries are treated as absent so a corrupt storage
    /// file degrades to a signed-out first run rather than an error.
    pub fn hydrate(storage: Storage) -> Self {
        let token = Self::read_or_default(&storage, KEY_TOKEN);
        let profile: Option<UserProfile> = Self::read_or_default(&storage, KEY_PROFILE);
        let flags: Option<DeviceFlags> = Self::read_or_default(&storage, KEY_FLAGS);

        debug!(
            authenticated = token.is_some(),
            "user store hydrated from device storage"
        );
        Self {
            storage,
            token,
            profile: profile.unwrap_or_default(),
            flags: flags.unwrap_or_default(),
        }
    }

    fn read_or_default<T: serde::de::DeserializeOwned>(storage: &Storage, key: &str) -> Option<T> {
        match storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable storage entry");
                None
            }
        }
    }

    /// Sign in, issuing a fresh session token.
    ///
    /// There is no server to verify credentials against; the check is
    /// shape-only (a plausible email and a non-empty password). The
    /// profile email is set from the login, and an empty display name is
    /// seeded from the email's local part.
    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        if self.profile.name.is_empty() {
            let local = email.split('@').next().unwrap_or_default();
            self.profile.name = local.to_string();
        }
        self.profile.email = email.to_string();
        let token = SessionToken::generate();
        self.token = Some(token.clone());

        info!(email, "user signed in");
        self.persist();
        Ok(token)
    }

    /// Sign out, clearing the token and the profile.
    ///
    /// Device flags survive logout; age verification is per device, not
    /// per account. The caller is responsible for clearing the cart.
    pub fn logout(&mut self) {
        self.token = None;
        self.profile = UserProfile::default();
        info!("user signed out");
        self.persist();
    }

    /// Check if a session token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The current session token, if signed in.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// The current session token, or `NotAuthenticated`.
    pub fn require_token(&self) -> Result<&SessionToken, AuthError> {
        self.token.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    /// The current profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace the whole profile.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.persist();
    }

    /// Apply a partial profile update.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.profile.apply(update);
        self.persist();
    }

    /// Blank out the profile without touching the session.
    pub fn clear_profile(&mut self) {
        self.profile = UserProfile::default();
        self.persist();
    }

    /// The device flags.
    pub fn flags(&self) -> DeviceFlags {
        self.flags
    }

    /// Record the age-verification answer.
    pub fn set_age_verified(&mut self, verified: bool) {
        self.flags.age_verified = verified;
        self.persist();
    }

    /// Record the location-permission answer.
    pub fn set_location_granted(&mut self, granted: bool) {
        self.flags.location_granted = granted;
        self.persist();
    }

    /// Record that the welcome screen has been shown.
    pub fn set_welcome_seen(&mut self) {
        self.flags.welcome_seen = true;
        self.persist();
    }

    fn persist(&self) {
        let writes = [
            match &self.token {
                Some(token) => self.storage.set(KEY_TOKEN, token),
                None => self.storage.delete(KEY_TOKEN),
            },
            self.storage.set(KEY_PROFILE, &self.profile),
            self.storage.set(KEY_FLAGS, &self.flags),
        ];
        for result in writes {
            if let Err(e) = result {
                warn!(error = %e, "dropping failed device-storage write");
            }
        }
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("authenticated", &self.is_authenticated())
            .field("profile", &self.profile)
            .field("flags", &self.flags)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> UserStore {
        UserStore::hydrate(Storage::in_memory())
    }

    #[test]
    fn test_starts_signed_out() {
        let store = fresh();
        assert!(!store.is_authenticated());
        assert!(store.profile().is_blank());
        assert_eq!(store.flags(), DeviceFlags::default());
    }

    #[test]
    fn test_login_issues_token_and_seeds_profile() {
        let mut store = fresh();

        store.login("jane@example.com", "hunter2").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.profile().email, "jane@example.com");
        assert_eq!(store.profile().name, "jane");
    }

    #[test]
    fn test_login_keeps_existing_name() {
        let mut store = fresh();
        store.set_profile(UserProfile::new("Jane Doe", "", ""));

        store.login("jane@example.com", "hunter2").unwrap();

        assert_eq!(store.profile().name, "Jane Doe");
    }

    #[test]
    fn test_login_rejects_malformed_input() {
        let mut store = fresh();

        assert!(matches!(
            store.login("", "pw"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            store.login("not-an-email", "pw"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            store.login("jane@example.com", ""),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session_but_keeps_flags() {
        let mut store = fresh();
        store.set_age_verified(true);
        store.login("jane@example.com", "hunter2").unwrap();

        store.logout();

        assert!(!store.is_authenticated());
        assert!(store.profile().is_blank());
        assert!(store.flags().age_verified);
        assert!(matches!(
            store.require_token(),
            Err(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_update_profile_is_partial() {
        let mut store = fresh();
        store.set_profile(UserProfile::new("Jane", "jane@example.com", ""));

        store.update_profile(ProfileUpdate::default().avatar("https://img/jane.png"));

        assert_eq!(store.profile().name, "Jane");
        assert_eq!(store.profile().avatar, "https://img/jane.png");
    }

    #[test]
    fn test_state_survives_rehydration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.json");

        {
            let mut store = UserStore::hydrate(Storage::open(&path).unwrap());
            store.login("jane@example.com", "hunter2").unwrap();
            store.set_age_verified(true);
            store.set_welcome_seen();
        }

        let store = UserStore::hydrate(Storage::open(&path).unwrap());
        assert!(store.is_authenticated());
        assert_eq!(store.profile().email, "jane@example.com");
        assert!(store.flags().age_verified);
        assert!(store.flags().welcome_seen);
        assert!(!store.flags().location_granted);
    }
}
