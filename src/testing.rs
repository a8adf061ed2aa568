//! Recording connection double for lifecycle tests
//!
//! Clones share the same script and call log, so a test can hand one clone to
//! the lifecycle manager and inspect the calls through another.

use crate::connection::DatabaseConnection;
use crate::error::{driver_error, ConnectionResult};
use std::sync::{Arc, Mutex, MutexGuard};

/// One observed call on the connection handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ConnectionUserName,
    Url,
    DatabaseProductName,
    GetAutoCommit,
    SetAutoCommit(bool),
    Commit,
    Rollback,
    Close,
}

#[derive(Debug)]
struct Script {
    auto_commit: bool,
    product_name: String,
    fail_get: bool,
    fail_set: bool,
    fail_close: bool,
    calls: Vec<Call>,
}

#[derive(Debug, Clone)]
pub struct RecordingConnection {
    script: Arc<Mutex<Script>>,
}

impl RecordingConnection {
    pub fn new(auto_commit: bool) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                auto_commit,
                product_name: "PostgreSQL".to_string(),
                fail_get: false,
                fail_set: false,
                fail_close: false,
                calls: Vec::new(),
            })),
        }
    }

    pub fn with_product_name(self, name: &str) -> Self {
        self.lock().product_name = name.to_string();
        self
    }

    pub fn failing_get(self) -> Self {
        self.lock().fail_get = true;
        self
    }

    pub fn failing_set(self) -> Self {
        self.lock().fail_set = true;
        self
    }

    pub fn failing_close(self) -> Self {
        self.lock().fail_close = true;
        self
    }

    pub fn boxed(&self) -> Box<dyn DatabaseConnection> {
        Box::new(self.clone())
    }

    /// Calls recorded since creation or the last [`reset`](Self::reset)
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn reset(&self) {
        self.lock().calls.clear();
    }

    pub fn auto_commit(&self) -> bool {
        self.lock().auto_commit
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    fn record(&self, call: Call) -> MutexGuard<'_, Script> {
        let mut script = self.lock();
        script.calls.push(call);
        script
    }
}

impl DatabaseConnection for RecordingConnection {
    fn connection_user_name(&self) -> String {
        drop(self.record(Call::ConnectionUserName));
        "user".to_string()
    }

    fn url(&self) -> String {
        drop(self.record(Call::Url));
        "URL".to_string()
    }

    fn database_product_name(&self) -> String {
        self.record(Call::DatabaseProductName).product_name.clone()
    }

    fn get_auto_commit(&self) -> ConnectionResult<bool> {
        let script = self.record(Call::GetAutoCommit);
        if script.fail_get {
            return Err(driver_error("getAutoCommit failed"));
        }
        Ok(script.auto_commit)
    }

    fn set_auto_commit(&mut self, auto_commit: bool) -> ConnectionResult<()> {
        let mut script = self.record(Call::SetAutoCommit(auto_commit));
        if script.fail_set {
            return Err(driver_error("setAutoCommit failed"));
        }
        script.auto_commit = auto_commit;
        Ok(())
    }

    fn commit(&mut self) -> ConnectionResult<()> {
        drop(self.record(Call::Commit));
        Ok(())
    }

    fn rollback(&mut self) -> ConnectionResult<()> {
        drop(self.record(Call::Rollback));
        Ok(())
    }

    fn close(&mut self) -> ConnectionResult<()> {
        let script = self.record(Call::Close);
        if script.fail_close {
            return Err(driver_error("close failed"));
        }
        Ok(())
    }
}
