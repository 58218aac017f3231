use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use url_store::config::{Args, LogFormat};
use url_store::{configure, UrlStore};

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match args.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(&args);

    let urls = web::Data::new(UrlStore::new());

    let mut http_server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(urls.clone())
            .configure(configure)
    });
    if let Some(workers) = args.workers {
        http_server = http_server.workers(workers);
    }

    info!("Listening on {}:{}", args.host, args.port);
    http_server.bind((args.host.as_str(), args.port))?.run().await
}
