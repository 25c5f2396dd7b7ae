use serde::{Deserialize, Serialize};

/// Commands sent by a client to the store server
#[derive(Serialize, Deserialize, Debug)]
pub enum StoreRequest {
    /// To set a value in the data-store
    Set(String, Vec<u8>),
    /// To get a value from the data-store
    Get(String),
    /// To increment the counter under the key
    Incr(String),
    /// To append a value to the list under the key
    RPush(String, Vec<u8>),
    /// To read back a whole list
    List(String),
    /// To drop every key in the database
    FlushDb,
}

/// Responses sent by the server to a client
#[derive(Serialize, Deserialize, Debug)]
pub enum StoreReply {
    /// The command succeeded and carries no data
    Ok,
    /// Answer to Get - None when the key does not exist
    Value(Option<Vec<u8>>),
    /// Answer to Incr - the counter after the increment
    Int(i64),
    /// Answer to RPush - the list length after the push
    Len(u64),
    /// Answer to List
    Entries(Vec<Vec<u8>>),
    /// The command failed on the server side
    Err(String),
}
