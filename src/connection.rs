//! Database connection handle contract
//!
//! The lifecycle manager in [`crate::database`] talks to the physical
//! connection only through this trait, so any driver can be plugged in.

use crate::error::ConnectionResult;

/// A physical connection to a database, as seen by the lifecycle manager.
///
/// Auto-commit follows JDBC semantics: when it is on, each statement commits
/// implicitly; when it is off, work accumulates until [`commit`] or
/// [`rollback`].
///
/// [`commit`]: DatabaseConnection::commit
/// [`rollback`]: DatabaseConnection::rollback
pub trait DatabaseConnection: Send {
    /// User the connection is authenticated as
    fn connection_user_name(&self) -> String;

    /// Connection URL, safe for logging
    fn url(&self) -> String;

    /// Product name reported by the server (e.g. `PostgreSQL`)
    fn database_product_name(&self) -> String;

    /// Current auto-commit mode
    fn get_auto_commit(&self) -> ConnectionResult<bool>;

    /// Change the auto-commit mode
    fn set_auto_commit(&mut self, auto_commit: bool) -> ConnectionResult<()>;

    fn commit(&mut self) -> ConnectionResult<()>;

    fn rollback(&mut self) -> ConnectionResult<()>;

    /// Release the underlying resources
    fn close(&mut self) -> ConnectionResult<()>;
}
