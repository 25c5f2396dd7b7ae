extern crate clap;
use clap::{App, Arg, SubCommand};
use kvcache::cache::{Cache, STORE_OP};
use kvcache::instrument;
use kvcache::storeclient::RemoteStore;
use kvcache::Value;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn connect(addr: &str) -> kvcache::Result<RemoteStore> {
    RemoteStore::connect(addr)
}

fn main() -> kvcache::Result<()> {
    setup()?;

    let m = App::new(env!("CARGO_PKG_NAME"))
        .arg(
            Arg::with_name("addr")
                .long("addr")
                .takes_value(true)
                .default_value("127.0.0.1:48567"),
        )
        .subcommand(
            SubCommand::with_name("store")
                .about("Store a value under a fresh key and print the key")
                .arg(Arg::with_name("value").takes_value(true).index(1).required(true))
                .arg(Arg::with_name("int").long("int"))
                .arg(Arg::with_name("float").long("float")),
        )
        .subcommand(
            SubCommand::with_name("get")
                .about("Get the value stored under a key")
                .help("kvcache get <key> -- Print the value stored under the key")
                .arg(Arg::with_name("key").takes_value(true).index(1).required(true))
                .arg(Arg::with_name("int").long("int")),
        )
        .subcommand(
            SubCommand::with_name("count")
                .about("How many times an operation was called")
                .arg(Arg::with_name("name").takes_value(true).index(1).required(true)),
        )
        .subcommand(
            SubCommand::with_name("replay")
                .about("Print the call history of an operation")
                .arg(Arg::with_name("name").takes_value(true).index(1).required(true))
                .arg(Arg::with_name("json").long("json")),
        )
        .get_matches();

    let addr = m.value_of("addr").unwrap_or("127.0.0.1:48567").to_string();

    if let Some(sub) = m.subcommand_matches("store") {
        debug!("Store command has been issued");
        let raw = sub.value_of("value").unwrap_or_default();
        let value = if sub.is_present("int") {
            Value::Int(raw.parse::<i64>().map_err(kvcache::CacheError::from)?)
        } else if sub.is_present("float") {
            Value::Float(raw.parse::<f64>().map_err(kvcache::CacheError::from)?)
        } else {
            Value::from(raw)
        };
        let mut cache = Cache::open(connect(&addr)?);
        let key = cache.store(value)?;
        println!("{}", key);
        process::exit(0);
    }

    if let Some(sub) = m.subcommand_matches("get") {
        let key = sub.value_of("key").unwrap_or_default();
        let mut cache = Cache::open(connect(&addr)?);
        if sub.is_present("int") {
            match cache.get_int(key)? {
                Some(value) => println!("{}", value),
                None => println!("Key not found"),
            }
        } else {
            match cache.get_str(key)? {
                Some(value) => println!("{}", value),
                None => println!("Key not found"),
            }
        }
        process::exit(0);
    }

    if let Some(sub) = m.subcommand_matches("count") {
        let name = sub.value_of("name").unwrap_or(STORE_OP);
        let mut client = connect(&addr)?;
        println!("{}", instrument::call_count(&mut client, name)?);
        process::exit(0);
    }

    if let Some(sub) = m.subcommand_matches("replay") {
        let name = sub.value_of("name").unwrap_or(STORE_OP);
        let mut client = connect(&addr)?;
        if sub.is_present("json") {
            let entries = instrument::history(&mut client, name)?;
            println!("{}", serde_json::to_string(&entries)?);
        } else {
            print!("{}", instrument::replay(&mut client, name)?);
        }
        process::exit(0);
    }

    eprintln!("No command given - try store, get, count or replay");
    process::exit(1)
}

fn setup() -> kvcache::Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1")
    }
    color_eyre::install()?;

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug")
    }
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Ok(())
}
