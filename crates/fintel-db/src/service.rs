//! Service layer scoping every data operation to the current identity.
//!
//! `FintelService` wraps `FintelDb` and the optional signed-in identity. All
//! repo methods are implemented as `impl FintelService`. Catalog and insight
//! reads are public; collection and comparison operations require an
//! identity and only ever touch rows whose `user_id` matches it.

use fintel_core::identity::AuthIdentity;

use crate::FintelDb;
use crate::error::DatabaseError;

pub struct FintelService {
    db: FintelDb,
    identity: Option<AuthIdentity>,
}

impl FintelService {
    /// Create a service over a local database file (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = FintelDb::open_local(db_path).await?;
        Ok(Self { db, identity })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn new_remote(
        url: &str,
        auth_token: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = FintelDb::open_remote(url, auth_token).await?;
        Ok(Self { db, identity })
    }

    /// Create from an existing `FintelDb` (for testing).
    #[must_use]
    pub const fn from_db(db: FintelDb, identity: Option<AuthIdentity>) -> Self {
        Self { db, identity }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &FintelDb {
        &self.db
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    /// Replace the identity after sign-in, sign-out or a user switch.
    pub fn set_identity(&mut self, identity: Option<AuthIdentity>) {
        if self.identity != identity {
            tracing::debug!(
                user = identity.as_ref().map(|i| i.user_id.as_str()),
                "service identity changed"
            );
        }
        self.identity = identity;
    }

    /// The current user's id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotAuthenticated` without an identity.
    pub fn owner_id(&self) -> Result<&str, DatabaseError> {
        self.identity
            .as_ref()
            .map(|identity| identity.user_id.as_str())
            .ok_or(DatabaseError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn owner_id_requires_identity() {
        let mut svc = FintelService::new_local(":memory:", None).await.unwrap();
        assert!(matches!(
            svc.owner_id(),
            Err(DatabaseError::NotAuthenticated)
        ));

        svc.set_identity(Some(AuthIdentity::new("user-a")));
        assert_eq!(svc.owner_id().unwrap(), "user-a");

        svc.set_identity(None);
        assert!(svc.identity().is_none());
    }
}
