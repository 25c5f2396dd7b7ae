use crate::errors::*;
use crate::storeclient::StoreClient;
use crate::storemessage::{StoreReply, StoreRequest};
use std::io::prelude::*;
use std::net::{Shutdown, TcpStream};
use tracing::debug;

/// Client side of the store protocol. One bincode-encoded request goes out,
/// one bincode-encoded reply comes back, strictly in turn.
pub struct RemoteStore {
    stream: TcpStream,
}

impl RemoteStore {
    /// Connect to a running store server, for instance "127.0.0.1:48567".
    pub fn connect(addr: &str) -> Result<RemoteStore> {
        match TcpStream::connect(addr) {
            Ok(stream) => {
                debug!("Connected to the store server at {}", addr);
                Ok(RemoteStore { stream })
            }
            Err(err) => Err(CacheError::StoreUnavailable(format!(
                "could not connect to {}: {}",
                addr, err
            ))),
        }
    }

    fn request(&mut self, request: &StoreRequest) -> Result<StoreReply> {
        let encoded = bincode::serialize(request)?;
        self.stream.write_all(encoded.as_slice())?;

        // bincode reads exactly one reply off the stream
        let reply: StoreReply = bincode::deserialize_from(&mut self.stream)?;
        if let StoreReply::Err(message) = reply {
            return Err(CacheError::StoreUnavailable(message));
        }
        Ok(reply)
    }
}

impl Drop for RemoteStore {
    fn drop(&mut self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}

impl StoreClient for RemoteStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        match self.request(&StoreRequest::Set(key.to_string(), value.to_vec()))? {
            StoreReply::Ok => Ok(()),
            other => Err(CacheError::UnexpectedReply(format!("{:?}", other))),
        }
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.request(&StoreRequest::Get(key.to_string()))? {
            StoreReply::Value(value) => Ok(value),
            other => Err(CacheError::UnexpectedReply(format!("{:?}", other))),
        }
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        match self.request(&StoreRequest::Incr(key.to_string()))? {
            StoreReply::Int(count) => Ok(count),
            other => Err(CacheError::UnexpectedReply(format!("{:?}", other))),
        }
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        match self.request(&StoreRequest::RPush(key.to_string(), value.to_vec()))? {
            StoreReply::Len(len) => Ok(len as usize),
            other => Err(CacheError::UnexpectedReply(format!("{:?}", other))),
        }
    }

    fn list(&mut self, key: &str) -> Result<Vec<Vec<u8>>> {
        match self.request(&StoreRequest::List(key.to_string()))? {
            StoreReply::Entries(entries) => Ok(entries),
            other => Err(CacheError::UnexpectedReply(format!("{:?}", other))),
        }
    }

    fn flushdb(&mut self) -> Result<()> {
        match self.request(&StoreRequest::FlushDb)? {
            StoreReply::Ok => Ok(()),
            other => Err(CacheError::UnexpectedReply(format!("{:?}", other))),
        }
    }
}
