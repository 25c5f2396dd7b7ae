use crate::errors::*;
use crate::storeclient::{MemoryStore, StoreClient};
use crate::storemessage::{StoreReply, StoreRequest};
use message_io::network::{NetEvent, Transport};
use message_io::node;
use std::net::Ipv4Addr;
use std::net::{SocketAddr, SocketAddrV4};
use tracing::{debug, info};

/// The networked store the cache talks to in remote mode. One event loop,
/// one in-memory database, commands answered in arrival order.
pub struct StoreServer {
    local_socketadr: SocketAddr,
}

fn dispatch(store: &mut MemoryStore, request: StoreRequest) -> StoreReply {
    match request {
        StoreRequest::Set(key, value) => match store.set(&key, &value) {
            Ok(()) => StoreReply::Ok,
            Err(err) => StoreReply::Err(format!("{:?}", err)),
        },
        StoreRequest::Get(key) => match store.get(&key) {
            Ok(value) => StoreReply::Value(value),
            Err(err) => StoreReply::Err(format!("{:?}", err)),
        },
        StoreRequest::Incr(key) => match store.incr(&key) {
            Ok(count) => StoreReply::Int(count),
            Err(err) => StoreReply::Err(format!("{:?}", err)),
        },
        StoreRequest::RPush(key, value) => match store.rpush(&key, &value) {
            Ok(len) => StoreReply::Len(len as u64),
            Err(err) => StoreReply::Err(format!("{:?}", err)),
        },
        StoreRequest::List(key) => match store.list(&key) {
            Ok(entries) => StoreReply::Entries(entries),
            Err(err) => StoreReply::Err(format!("{:?}", err)),
        },
        StoreRequest::FlushDb => match store.flushdb() {
            Ok(()) => StoreReply::Ok,
            Err(err) => StoreReply::Err(format!("{:?}", err)),
        },
    }
}

impl StoreServer {
    /// Initializer of the server struct
    pub fn new(local_addr: &str, local_port: u16) -> Result<StoreServer> {
        match local_addr.parse::<Ipv4Addr>() {
            Ok(addr) => Ok(StoreServer {
                local_socketadr: SocketAddr::V4(SocketAddrV4::new(addr, local_port)),
            }),
            Err(err) => Err(CacheError::StoreUnavailable(format!(
                "invalid listen address {:?}: {}",
                local_addr, err
            ))),
        }
    }

    pub fn run_server(&mut self) -> Result<()> {
        let mut store = MemoryStore::new();

        let (handler, listener) = node::split::<()>();
        handler
            .network()
            .listen(Transport::Tcp, self.local_socketadr)?;
        info!("Listening on {}", self.local_socketadr);
        listener.for_each(move |event| match event.network() {
            NetEvent::Connected(_, _) => (),
            NetEvent::Accepted(_endpoint, _listener) => {
                info!("New connexion from {}", _endpoint.addr())
            }
            NetEvent::Disconnected(endpoint) => {
                info!("{} just disconnected", endpoint.addr());
            }
            NetEvent::Message(endpoint, input_data) => {
                debug!("New command from {}", endpoint.addr());

                // 0 bytes long frames have been observed on this transport,
                // skip them rather than feeding bincode an empty buffer
                if !input_data.is_empty() {
                    let reply = match bincode::deserialize::<StoreRequest>(input_data) {
                        Ok(request) => dispatch(&mut store, request),
                        Err(err) => {
                            debug!("Undecodable command: {:?}", err);
                            StoreReply::Err(format!("bad request: {}", err))
                        }
                    };
                    match bincode::serialize(&reply) {
                        Ok(encoded) => {
                            handler.network().send(endpoint, &encoded);
                        }
                        Err(err) => {
                            debug!("Could not encode the reply: {:?}", err);
                        }
                    }
                }
            }
        });

        Ok(())
    }
}
