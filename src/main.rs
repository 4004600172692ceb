use crate::handler::HandlerConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::store::FsStore;
use astra::Server;
use std::net::SocketAddr;

mod csv;
mod errors;
mod event;
mod extract;
mod handler;
mod responses;
mod router;
mod store;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Logging, filtered via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 2️⃣ Containers and the directory backing them
    let cfg = HandlerConfig::from_env();
    let data_root = std::env::var("DATA_ROOT").unwrap_or_else(|_| "./data".to_string());
    let store = FsStore::new(&data_root);

    // 3️⃣ Start the server
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR {bind:?}: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Watching {} → {} under {data_root}, listening at http://{addr}",
        cfg.source_container, cfg.destination_container
    );

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the store and config into the closure
    let result = server.serve(move |req, _info| match handle(req, &store, &cfg) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
