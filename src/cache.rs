use crate::errors::*;
use crate::instrument::{CallHistory, CountCalls, Operation};
use crate::storeclient::StoreClient;
use crate::value::Value;
use tracing::debug;
use uuid::Uuid;

/// Qualified name under which the store operation is counted and logged.
pub const STORE_OP: &str = "Cache.store";

/// The bare store operation: generate a fresh key, persist the encoded
/// value under it, hand the key back.
struct StoreOp;

impl<S: StoreClient> Operation<S> for StoreOp {
    fn qualified_name(&self) -> &str {
        STORE_OP
    }

    fn call(&mut self, store: &mut S, input: Value) -> Result<Value> {
        let key = Uuid::new_v4().to_string();
        store.set(&key, &input.encode())?;
        debug!("Stored a value under {}", key);
        Ok(Value::Str(key))
    }
}

/// Main structure that holds our cache
/// A thin facade over one injected store client, with the store operation
/// wrapped in the counting and history decorators.
pub struct Cache<S: StoreClient> {
    client: S,
    store_op: CallHistory<CountCalls<StoreOp>>,
}

impl<S: StoreClient> Cache<S> {
    /// Take ownership of the store client and flush its database.
    /// Flushing only ever happens here.
    pub fn new(mut client: S) -> Result<Cache<S>> {
        client.flushdb()?;
        Ok(Cache {
            client,
            store_op: CallHistory::new(CountCalls::new(StoreOp)),
        })
    }

    /// Attach to a store without touching its contents, for a client
    /// joining a database someone else initialized.
    pub fn open(client: S) -> Cache<S> {
        Cache {
            client,
            store_op: CallHistory::new(CountCalls::new(StoreOp)),
        }
    }

    /// Persist `value` under a freshly generated uuid-v4 key and return
    /// that key. Counted and history-logged under "Cache.store".
    pub fn store(&mut self, value: Value) -> Result<String> {
        match self.store_op.call(&mut self.client, value)? {
            Value::Str(key) => Ok(key),
            other => Err(CacheError::UnexpectedReply(format!(
                "store produced {:?}",
                other
            ))),
        }
    }

    /// Raw bytes under `key`, Ok(None) when the key does not exist.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.client.get(key)
    }

    /// Like `get`, with a transform applied to the raw bytes when the key
    /// exists. A failing transform is an error, not an absent value.
    pub fn get_with<T, F>(&mut self, key: &str, transform: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        match self.client.get(key)? {
            Some(raw) => Ok(Some(transform(raw)?)),
            None => Ok(None),
        }
    }

    /// Text-decoded value under `key`.
    pub fn get_str(&mut self, key: &str) -> Result<Option<String>> {
        self.get_with(key, Value::decode_str)
    }

    /// Integer-parsed value under `key`.
    pub fn get_int(&mut self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, Value::decode_int)
    }

    /// Float-parsed value under `key`.
    pub fn get_float(&mut self, key: &str) -> Result<Option<f64>> {
        self.get_with(key, Value::decode_float)
    }

    /// The underlying client, for reading counters and history back.
    pub fn client_mut(&mut self) -> &mut S {
        &mut self.client
    }

    /// Give the client back, e.g. to shut a remote connexion down.
    pub fn into_client(self) -> S {
        self.client
    }
}
