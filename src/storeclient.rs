pub use crate::Result;
/// In-process store, also backing the server
pub mod memory;
/// TCP client to a running store server
pub mod remote;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

/// StoreClient trait used if we wanted to plug a different external store
/// behind the cache. The command set mirrors what the backing store offers:
/// plain get/set, an atomic counter increment and a list append.
pub trait StoreClient {
    /// set function prototype
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// get function prototype - Ok(None) when the key does not exist
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Increment the integer under `key`, creating it at 0 first.
    /// Returns the value after the increment.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// Append to the list under `key`, creating it empty first.
    /// Returns the list length after the push.
    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize>;

    /// Full contents of the list under `key`, empty when it does not exist.
    fn list(&mut self, key: &str) -> Result<Vec<Vec<u8>>>;

    /// Drop every key in the database.
    fn flushdb(&mut self) -> Result<()>;
}
