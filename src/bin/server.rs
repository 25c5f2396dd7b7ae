extern crate clap;
use clap::{App, Arg};
use kvcache::storeserver::StoreServer;
use tracing_subscriber::EnvFilter;

fn main() -> kvcache::Result<()> {
    setup()?;

    let m = App::new(env!("CARGO_PKG_NAME"))
        .arg(
            Arg::with_name("addr")
                .short("a")
                .long("addr")
                .takes_value(true)
                .default_value("0.0.0.0"),
        )
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .takes_value(true)
                .default_value("48567"),
        )
        .get_matches();

    let addr = m.value_of("addr").unwrap_or("0.0.0.0");
    let port = m
        .value_of("port")
        .unwrap_or("48567")
        .parse::<u16>()
        .map_err(kvcache::CacheError::from)?;

    let mut server = StoreServer::new(addr, port)?;
    server.run_server()?;
    Ok(())
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
