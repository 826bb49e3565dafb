use std::{fs, io::{self, Read}, path::PathBuf};
use actix_web::{App, HttpServer, web};
use actix_cors::Cors;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::{info, error};

use form_normalizer_backend::config::ServerConfig;
use form_normalizer_backend::handlers::json_error_handler;
use form_normalizer_backend::routes;
use form_normalizer_backend::services::NormalizeService;

#[derive(Parser)]
#[command(name = "form-normalizer-backend", about = "Normalizes form submissions into canonical lead attributes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Normalize one bundle from a file or stdin and print the result
    Normalize {
        /// Bundle JSON file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    let cli = Cli::parse();
    let config = ServerConfig::load()?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log_level.as_str()));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Normalize { input, pretty } => normalize_once(input, pretty),
    }
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let normalize_service = web::Data::new(NormalizeService::default());
    let max_payload_bytes = config.max_payload_bytes;

    info!(
        "Loaded {} field mappings, payload limit {} bytes",
        normalize_service.mappings().len(),
        max_payload_bytes
    );
    info!("Starting server at http://{}", config.bind_address());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .expose_headers(vec!["content-type", "content-length", "accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(normalize_service.clone())
            .app_data(
                web::JsonConfig::default()
                    .limit(max_payload_bytes)
                    .error_handler(json_error_handler),
            )
            .configure(routes::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    info!("Server shutting down");
    Ok(())
}

fn normalize_once(input: Option<PathBuf>, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let output = NormalizeService::default()
        .normalize_document(&text, pretty)
        .map_err(|e| {
            error!("Could not normalize input: {}", e);
            e
        })?;
    println!("{}", output);
    Ok(())
}
