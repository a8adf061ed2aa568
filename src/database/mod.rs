//! Database abstraction and connection lifecycle
//!
//! A [`Database`] owns at most one physical connection at a time. While it
//! owns one, the connection's auto-commit mode matches the database's policy;
//! when it is released, the mode that was in effect before attachment is put
//! back. Mode changes are only issued when the current mode actually differs,
//! so a connection that already has the right mode sees no setter calls at
//! all.

mod kind;

pub use kind::{DatabaseKind, ProductNameMatch};

use crate::connection::DatabaseConnection;
use crate::error::{ConnectionError, ConnectionResult};
use chrono::{DateTime, Utc};
use std::mem;
use tracing::{debug, info, warn};

/// A connection owned by the lifecycle manager
struct Attachment {
    connection: Box<dyn DatabaseConnection>,
    attached_at: DateTime<Utc>,
}

/// Lifecycle state. The restore value only exists when attach changed the mode.
enum LifecycleState {
    Detached,
    AttachedUnadjusted(Attachment),
    AttachedAdjusted {
        attachment: Attachment,
        restore_auto_commit: bool,
    },
}

impl LifecycleState {
    fn attachment(&self) -> Option<&Attachment> {
        match self {
            LifecycleState::Detached => None,
            LifecycleState::AttachedUnadjusted(attachment)
            | LifecycleState::AttachedAdjusted { attachment, .. } => Some(attachment),
        }
    }

    fn attachment_mut(&mut self) -> Option<&mut Attachment> {
        match self {
            LifecycleState::Detached => None,
            LifecycleState::AttachedUnadjusted(attachment)
            | LifecycleState::AttachedAdjusted { attachment, .. } => Some(attachment),
        }
    }
}

/// A database abstraction managing a single connection.
///
/// Not synchronized: callers sharing a `Database` must serialize
/// `set_connection`/`close` pairs themselves.
pub struct Database {
    kind: DatabaseKind,
    auto_commit: bool,
    state: LifecycleState,
}

impl Database {
    /// Create a database using the product's default auto-commit policy
    pub fn new(kind: DatabaseKind) -> Self {
        Self::with_auto_commit(kind, kind.default_auto_commit())
    }

    /// Create a database with an explicit auto-commit policy
    pub fn with_auto_commit(kind: DatabaseKind, auto_commit: bool) -> Self {
        Self {
            kind,
            auto_commit,
            state: LifecycleState::Detached,
        }
    }

    pub fn kind(&self) -> DatabaseKind {
        self.kind
    }

    /// Auto-commit mode wanted while a connection is attached
    pub fn auto_commit_mode(&self) -> bool {
        self.auto_commit
    }

    /// Whether `connection` talks to the product this database represents
    pub fn is_correct_database_implementation(&self, connection: &dyn DatabaseConnection) -> bool {
        let reported = connection.database_product_name();
        self.kind
            .product_name_match()
            .matches(self.kind.product_name(), &reported)
    }

    /// Attach a connection, adjusting its auto-commit mode only if it differs
    /// from [`auto_commit_mode`](Self::auto_commit_mode).
    ///
    /// If reading or changing the mode fails, the connection is closed on a
    /// best-effort basis and the database stays detached.
    pub fn set_connection(&mut self, mut connection: Box<dyn DatabaseConnection>) -> ConnectionResult<()> {
        if !matches!(self.state, LifecycleState::Detached) {
            return Err(ConnectionError::AlreadyAttached);
        }

        let user = connection.connection_user_name();
        let url = connection.url();
        info!("Connected to {}@{}", user, url);

        let adjusted = match reconcile_auto_commit(connection.as_mut(), self.auto_commit) {
            Ok(adjusted) => adjusted,
            Err(e) => {
                if let Err(close_err) = connection.close() {
                    warn!("Failed to close connection after attach error: {}", close_err);
                }
                return Err(e);
            }
        };

        let attachment = Attachment {
            connection,
            attached_at: Utc::now(),
        };
        self.state = match adjusted {
            Some(original) => LifecycleState::AttachedAdjusted {
                attachment,
                restore_auto_commit: original,
            },
            None => LifecycleState::AttachedUnadjusted(attachment),
        };
        Ok(())
    }

    /// Restore the pre-attach auto-commit mode if attach changed it, then
    /// close the connection.
    ///
    /// The connection is always closed and the database always ends up
    /// detached. A close failure takes precedence over a restore failure.
    pub fn close(&mut self) -> ConnectionResult<()> {
        let (mut attachment, restore) = match mem::replace(&mut self.state, LifecycleState::Detached) {
            LifecycleState::Detached => return Err(ConnectionError::NotAttached),
            LifecycleState::AttachedUnadjusted(attachment) => (attachment, None),
            LifecycleState::AttachedAdjusted {
                attachment,
                restore_auto_commit,
            } => (attachment, Some(restore_auto_commit)),
        };

        let restore_result = match restore {
            Some(original) => {
                debug!("Restoring auto-commit to {}", original);
                attachment
                    .connection
                    .set_auto_commit(original)
                    .inspect_err(|e| warn!("Failed to restore auto-commit mode: {}", e))
            }
            None => Ok(()),
        };

        let close_result = attachment.connection.close();
        info!(
            "Closed connection attached since {}",
            attachment.attached_at.to_rfc3339()
        );

        close_result.and(restore_result)
    }

    pub fn commit(&mut self) -> ConnectionResult<()> {
        self.connection_mut()?.commit()
    }

    pub fn rollback(&mut self) -> ConnectionResult<()> {
        self.connection_mut()?.rollback()
    }

    /// The attached connection, if any
    pub fn connection(&self) -> Option<&dyn DatabaseConnection> {
        self.state
            .attachment()
            .map(|attachment| attachment.connection.as_ref())
    }

    pub fn is_attached(&self) -> bool {
        !matches!(self.state, LifecycleState::Detached)
    }

    /// Whether attach changed the connection's auto-commit mode
    pub fn is_auto_commit_adjusted(&self) -> bool {
        matches!(self.state, LifecycleState::AttachedAdjusted { .. })
    }

    pub fn attached_at(&self) -> Option<DateTime<Utc>> {
        self.state.attachment().map(|attachment| attachment.attached_at)
    }

    fn connection_mut(&mut self) -> ConnectionResult<&mut dyn DatabaseConnection> {
        let Some(attachment) = self.state.attachment_mut() else {
            return Err(ConnectionError::NotAttached);
        };
        let connection: &mut dyn DatabaseConnection = attachment.connection.as_mut();
        Ok(connection)
    }
}

/// Bring the connection to `desired`. Returns the original mode if it had to
/// be changed.
fn reconcile_auto_commit(
    connection: &mut dyn DatabaseConnection,
    desired: bool,
) -> ConnectionResult<Option<bool>> {
    let current = connection.get_auto_commit()?;
    if current == desired {
        debug!("Auto-commit already {}, leaving it", current);
        return Ok(None);
    }

    debug!("Switching auto-commit from {} to {}", current, desired);
    connection.set_auto_commit(desired)?;
    Ok(Some(current))
}
