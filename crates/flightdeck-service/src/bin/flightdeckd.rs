use std::io;

use flightdeck_service::FlightDeckServer;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let mode = std::env::var("FLIGHTDECKD_TRANSPORT").unwrap_or_else(|_| "stdio".to_string());
    let server = FlightDeckServer::new();
    match mode.as_str() {
        "stdio" => server.serve_stdio(),
        "http" => {
            let addr = std::env::var("FLIGHTDECK_HTTP_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8787".to_string());
            server.serve_http(&addr)
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "FLIGHTDECKD_TRANSPORT must be stdio or http",
        )),
    }
}
