//! relation CLI binary: serve the HTTP API, run the wizard, or relate words once.
//!
//! Subcommands: `serve`, `wizard` (default), `relate`.

mod repl;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use cli::{LocalBackend, RelationBackend, RemoteBackend};
use config::{init_tracing, ClientSettings, LogTarget, ServeSettings};
use relation::{
    GeminiClient, RelationRequest, RelationResponse, RelationService, CLIENT_ERROR_MESSAGE,
};

#[derive(Parser, Debug)]
#[command(name = "relation")]
#[command(about = "Relation: ask Gemini how a list of words relate to each other")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the HTTP server (POST /relation)
    Serve(ServeArgs),
    /// Interactive three-step wizard (default)
    Wizard(ClientArgs),
    /// Relate the given words once and print the result
    Relate(RelateArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default: RELATION_ADDR or 0.0.0.0:$PORT, PORT defaults to 8080)
    #[arg(long, value_name = "ADDR", env = "RELATION_ADDR")]
    addr: Option<String>,
}

#[derive(clap::Args, Debug, Clone, Default)]
struct ClientArgs {
    /// Relation service URL (default: RELATION_URL or http://127.0.0.1:8080)
    #[arg(long, value_name = "URL", env = "RELATION_URL")]
    url: Option<String>,
    /// Call Gemini in-process instead of a running server (needs GEMINI_API_KEY)
    #[arg(long)]
    local: bool,
}

#[derive(clap::Args, Debug, Clone)]
struct RelateArgs {
    /// Words to relate; each argument may hold comma-separated words
    words: Vec<String>,
    #[command(flatten)]
    client: ClientArgs,
    /// Print the service response as JSON
    #[arg(long)]
    json: bool,
    /// With --json, pretty-print
    #[arg(long)]
    pretty: bool,
}

type MainResult = Result<(), Box<dyn std::error::Error>>;

/// Builds the service from GEMINI_* settings.
fn make_service(settings: &ServeSettings) -> Result<RelationService, String> {
    let key = settings
        .gemini_api_key
        .clone()
        .ok_or_else(|| "GEMINI_API_KEY is not set".to_string())?;
    let mut client = GeminiClient::new(key);
    if let Some(model) = &settings.gemini_model {
        client = client.with_model(model);
    }
    if let Some(base) = &settings.gemini_base_url {
        client = client.with_base_url(base);
    }
    tracing::info!(model = client.model(), "using Gemini");
    Ok(RelationService::new(Arc::new(client)))
}

fn make_backend(args: &ClientArgs) -> Result<Box<dyn RelationBackend>, String> {
    if args.local {
        let service = make_service(&ServeSettings::from_env())?;
        return Ok(Box::new(LocalBackend::new(service)));
    }
    let url = args
        .url
        .clone()
        .unwrap_or_else(|| ClientSettings::from_env().base_url);
    Ok(Box::new(RemoteBackend::new(url)))
}

async fn serve(args: ServeArgs) -> MainResult {
    let settings = ServeSettings::from_env();
    let service = make_service(&settings)?;
    let addr = args.addr.unwrap_or(settings.addr);
    serve::run_serve(&addr, service)
        .await
        .map_err(|e| format!("serve error: {}", e))?;
    Ok(())
}

async fn wizard(args: ClientArgs) -> MainResult {
    let backend = make_backend(&args)?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run_wizard(backend.as_ref(), stdin, &mut stdout).await?;
    Ok(())
}

/// Exits non-zero for a transport failure or an `{error}` body, in text and JSON mode alike.
async fn relate(args: RelateArgs) -> MainResult {
    let mut words = relation::WordSet::new();
    for arg in &args.words {
        words.add_comma_separated(arg);
    }
    if words.is_empty() {
        return Err("provide at least one word".into());
    }
    let backend = make_backend(&args.client)?;
    let req = RelationRequest {
        words: words.to_vec(),
    };
    let resp = backend.relate(&req).await.map_err(|e| {
        tracing::error!(error = %e, "relation request failed");
        CLIENT_ERROR_MESSAGE
    })?;

    if args.json {
        let s = if args.pretty {
            serde_json::to_string_pretty(&resp)?
        } else {
            serde_json::to_string(&resp)?
        };
        println!("{}", s);
        return match resp {
            RelationResponse::Error { error } => Err(error.into()),
            _ => Ok(()),
        };
    }
    match resp {
        RelationResponse::Success { summary, .. } => println!("{}", summary),
        RelationResponse::Unparsed { raw, error } => {
            eprintln!("{}", error);
            println!("{}", raw);
        }
        RelationResponse::Error { error } => return Err(error.into()),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> MainResult {
    if let Err(e) = config::load_and_apply("relation", None) {
        eprintln!("relation: config not loaded: {}", e);
    }

    let args = Args::parse();
    let cmd = args
        .cmd
        .unwrap_or_else(|| Command::Wizard(ClientArgs::default()));

    let target = match cmd {
        Command::Serve(_) => LogTarget::Stderr,
        _ => LogTarget::FileOrSink,
    };
    let guard = init_tracing(target)?;

    let outcome = match cmd {
        Command::Serve(a) => serve(a).await,
        Command::Wizard(a) => wizard(a).await,
        Command::Relate(a) => relate(a).await,
    };
    // Flush the file writer before exiting.
    drop(guard);
    if let Err(e) = outcome {
        eprintln!("relation: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
