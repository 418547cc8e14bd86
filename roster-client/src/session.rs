//! Logged-in identity

use shared::LoginData;
use shared::util::parse_int;

use crate::{ClientResult, SessionStore};

/// Storage key for the login name
pub const USERNAME_KEY: &str = "username";
/// Storage key for the string-encoded role identifier
pub const STUDENT_ID_KEY: &str = "student_id";

/// Role identifier allowed to add employees
pub const ROOT_STUDENT_ID: i64 = 1;

/// Session read from storage at view entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    /// `None` when the stored value is missing or not a number
    pub student_id: Option<i64>,
}

impl Session {
    pub fn is_root(&self) -> bool {
        self.student_id == Some(ROOT_STUDENT_ID)
    }

    /// Read the session; `None` if no username is stored
    pub fn load(store: &dyn SessionStore) -> ClientResult<Option<Self>> {
        let Some(username) = store.get(USERNAME_KEY)?.filter(|u| !u.is_empty()) else {
            return Ok(None);
        };
        let student_id = store.get(STUDENT_ID_KEY)?.as_deref().and_then(parse_int);
        Ok(Some(Self {
            username,
            student_id,
        }))
    }

    /// Overwrite the stored session
    pub fn save(&self, store: &dyn SessionStore) -> ClientResult<()> {
        store.set(USERNAME_KEY, &self.username)?;
        match self.student_id {
            Some(id) => store.set(STUDENT_ID_KEY, &id.to_string())?,
            None => store.remove(STUDENT_ID_KEY)?,
        }
        tracing::debug!(username = %self.username, "Session saved");
        Ok(())
    }

    /// Remove the stored session
    pub fn clear(store: &dyn SessionStore) -> ClientResult<()> {
        store.clear()
    }
}

impl From<LoginData> for Session {
    fn from(data: LoginData) -> Self {
        Self {
            username: data.username,
            student_id: Some(data.student_id),
        }
    }
}
