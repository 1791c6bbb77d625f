//! Signed-in customer session, restored from browser storage.
//!
//! Sign-in itself happens elsewhere; this module only reads what the auth
//! flow left in `localStorage` so bookings can carry the user id and token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "showroom_session";

/// What the auth flow stores for the current customer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub token: Option<String>,
}

impl Session {
    /// Id sent with appointments; anonymous bookings use 0 and are left to
    /// the service to reject.
    #[must_use]
    pub fn user_id(&self) -> i64 {
        self.user_id.unwrap_or(0)
    }

    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {t}"))
    }
}

/// Session context plus whether storage has been read yet.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Session,
    pub restored: bool,
}

/// Parse the stored session JSON; malformed values count as signed out.
#[must_use]
pub fn parse_session(raw: &str) -> Session {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Read the stored session. Requires a browser environment.
pub fn restore() -> Session {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        stored.as_deref().map(parse_session).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Session::default()
    }
}
