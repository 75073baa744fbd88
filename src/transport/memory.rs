//! In-memory transport that behaves like a cooperative API server

use async_trait::async_trait;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{RequestError, Transport};

#[derive(Default)]
pub(crate) struct MemoryTransport {
    collections: RefCell<HashMap<String, Value>>,
    next_id: Cell<u64>,
    read_failure: Cell<Option<u16>>,
    write_failure: RefCell<Option<(u16, String)>>,
    calls: RefCell<Vec<String>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a collection's stored body
    pub fn seed(&self, path: &str, body: Value) {
        self.collections.borrow_mut().insert(path.to_string(), body);
    }

    /// Make every GET fail with `status`
    pub fn fail_reads(&self, status: u16) {
        self.read_failure.set(Some(status));
    }

    /// Make every POST fail with `status` and response `body`
    pub fn fail_writes(&self, status: u16, body: &str) {
        *self.write_failure.borrow_mut() = Some((status, body.to_string()));
    }

    pub fn heal(&self) {
        self.read_failure.set(None);
        *self.write_failure.borrow_mut() = None;
    }

    /// Requests seen so far, e.g. `GET /feeds`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn find_by_id(&self, path: &str) -> Option<Value> {
        let (collection, id) = path.rsplit_once('/')?;
        let id: u64 = id.parse().ok()?;
        let collections = self.collections.borrow();
        collections
            .get(collection)?
            .as_array()?
            .iter()
            .find(|r| r.get("id").and_then(Value::as_u64) == Some(id))
            .cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MemoryTransport {
    async fn fetch_json(&self, path: &str) -> Result<Value, RequestError> {
        self.calls.borrow_mut().push(format!("GET {}", path));

        if let Some(status) = self.read_failure.get() {
            return Err(RequestError::read_failed(path, status));
        }

        if let Some(body) = self.collections.borrow().get(path) {
            return Ok(body.clone());
        }

        if path.matches('/').count() > 1 {
            return self
                .find_by_id(path)
                .ok_or_else(|| RequestError::read_failed(path, 404));
        }

        Ok(Value::Array(Vec::new()))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        self.calls.borrow_mut().push(format!("POST {}", path));

        if let Some((status, text)) = self.write_failure.borrow().as_ref() {
            return Err(RequestError::write_failed(path, *status, text));
        }

        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let mut created = body.clone();
        if let Some(obj) = created.as_object_mut() {
            obj.insert("id".to_string(), Value::from(id));
        }

        let mut collections = self.collections.borrow_mut();
        let stored = collections
            .entry(path.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Some(items) = stored.as_array_mut() {
            items.push(created.clone());
        }

        Ok(created)
    }
}
