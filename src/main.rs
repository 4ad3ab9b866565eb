use std::{error::Error, fs, sync::Arc};

use async_graphql::{http::GraphiQLSource, EmptySubscription, SDLExportOptions, Schema};
use async_graphql_axum::GraphQL;
use axum::{
    response::{self, IntoResponse},
    routing::get,
    Router,
};
use clap::Parser;
use log::{info, LevelFilter};
use mongodb::{options::ClientOptions, Client, Database};
use simple_logger::SimpleLogger;
use tokio::net::TcpListener;

mod error;
mod graphql;
mod repository;

use graphql::{build_schema, mutation::Mutation, query::Query};
use repository::{mongo::MongoCartStore, CartRepository};

/// Path the GraphQL schema is written to with `--generate-schema`.
const SCHEMA_PATH: &str = "./schemas/cart.graphql";

/// Command line arguments, each falling back to an environment variable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generates GraphQL schema in `./schemas/cart.graphql`.
    #[arg(long)]
    generate_schema: bool,
    /// MongoDB connection string, required unless generating the schema.
    #[arg(long, env = "MONGODB_URI")]
    mongodb_uri: Option<String>,
    /// Name of the MongoDB database containing the cart collection.
    #[arg(long, env = "MONGODB_DATABASE", default_value = "cart-database")]
    database: String,
    /// Port the GraphQL endpoint listens on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    /// Maximum log level.
    #[arg(long, env = "LOG_LEVEL", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

/// Builds the GraphiQL frontend.
async fn graphiql() -> impl IntoResponse {
    response::Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Establishes database connection and returns the client.
///
/// * `uri` - MongoDB connection string.
async fn db_connection(uri: &str) -> mongodb::error::Result<Client> {
    // Parse a connection string into an options struct.
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.app_name = Some("CartStore".to_string());

    // Get a handle to the deployment.
    Client::with_options(client_options)
}

/// Activates logger and parses arguments for optional schema generation. Otherwise starts the GraphQL server.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;

    if args.generate_schema {
        generate_schema()?;
    } else {
        start_service(args).await?;
    }
    Ok(())
}

/// Writes the federated GraphQL schema to `SCHEMA_PATH`.
fn generate_schema() -> std::io::Result<()> {
    let schema = Schema::build(Query, Mutation, EmptySubscription)
        .enable_federation()
        .finish();
    let sdl_export_options = SDLExportOptions::new().federation();
    let schema_sdl = schema.sdl_with_options(sdl_export_options);
    fs::create_dir_all("./schemas")?;
    fs::write(SCHEMA_PATH, schema_sdl)?;
    info!("GraphQL schema: {} was successfully generated!", SCHEMA_PATH);
    Ok(())
}

/// Connects to MongoDB, ensures the cart indexes and serves GraphQL on the configured port.
async fn start_service(args: Args) -> Result<(), Box<dyn Error>> {
    let uri = args
        .mongodb_uri
        .ok_or("$MONGODB_URI is not set, pass it via --mongodb-uri or the environment.")?;
    let client = db_connection(&uri).await?;
    let db_client: Database = client.database(&args.database);

    let store = MongoCartStore::new(&db_client);
    store.ensure_indexes().await?;
    let repository = CartRepository::new(Arc::new(store));
    let schema = build_schema(repository);

    let app = Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)));

    let listener = TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("GraphiQL IDE: http://0.0.0.0:{}", args.port);
    axum::serve(listener, app).await?;
    Ok(())
}
