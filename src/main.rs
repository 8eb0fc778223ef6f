use assessaid::api::{self, RecommendClient};
use assessaid::catalog::DemoCatalog;
use assessaid::chat::ChatTranscript;
use assessaid::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use assessaid::cli::{self, ChatCommand, ChatRepl, ReplEvent};
use assessaid::flow::FlowOutcome;
use assessaid::models::AppState;
use assessaid::routes::build_app;
use assessaid::terminal;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

fn build_client_from_env(env_file: Option<&str>) -> RecommendClient {
    config::load_env_file(env_file);
    let http = match api::build_http_client() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };
    RecommendClient::new(http, config::get_recommend_api_base_url())
}

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    let client = build_client_from_env(env_file);
    let api_base_url = client.base_url().to_string();
    AppState::new(
        Arc::new(client),
        Arc::new(DemoCatalog::new()),
        api_base_url,
        config::get_public_base_url(),
    )
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match tokio::fs::read_to_string(&path).await {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    let shutdown = state.shutdown.clone();
    let app = build_app(state);
    tracing::info!(%addr, "Starting AssessAid web server");
    println!("{} {}", Paint::new("Web server running on").green(), Paint::new(format!("http://{}", addr)).cyan());

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            let signal = async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Shutdown requested, cancelling in-flight requests");
                }
                shutdown.cancel();
            };
            if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(signal).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

async fn run_recommend(client: RecommendClient, query: &str, json: bool) {
    let spinner = (!json).then(|| terminal::spinner("Fetching recommendations..."));
    let outcome = cli::recommend_once(Arc::new(client), query, tokio::signal::ctrl_c()).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if json {
        if let Some(response) = outcome.response() {
            match serde_json::to_string_pretty(response) {
                Ok(s) => println!("{}", s),
                Err(e) => {
                    eprintln!("{}: {}", Paint::new("Failed to encode response").red(), e);
                    process::exit(1);
                }
            }
            return;
        }
    }

    terminal::print_outcome(&outcome);
    let code = cli::exit_code(&outcome);
    if code != 0 {
        process::exit(code);
    }
}

fn print_chat_help() {
    println!(
        "{}",
        Paint::new("Commands: /clear starts over, /export [file] saves the transcript, /quit leaves. Ctrl-C cancels a pending reply.").dim()
    );
}

fn print_last_reply(transcript: &ChatTranscript) {
    if let Some(msg) = transcript.messages().last().filter(|m| !m.role.is_user()) {
        println!("{} {}", Paint::new(format!("[{}] Assistant:", msg.time_label())).cyan().bold(), msg.content);
        if !msg.assessments().is_empty() {
            println!("{}", terminal::assessment_table(msg.assessments(), terminal::terminal_width()));
        }
    }
}

async fn run_chat(client: RecommendClient) {
    let mut repl = ChatRepl::new(Arc::new(client), CancellationToken::new());
    print_last_reply(repl.transcript());
    print_chat_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", Paint::new(">").green().bold());
        std::io::stdout().flush().ok();

        let line = match lines.next_line().await {
            Ok(Some(l)) => l,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(%e, "Failed to read from stdin");
                break;
            }
        };

        let command = ChatCommand::parse(&line);
        let pb = command.is_question().then(|| terminal::spinner("Thinking..."));
        let event = repl.handle(command, tokio::signal::ctrl_c()).await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        match event {
            Ok(ReplEvent::Skipped) => {}
            Ok(ReplEvent::Quit) => break,
            Ok(ReplEvent::Help) => print_chat_help(),
            Ok(ReplEvent::Cleared) => {
                println!("{}", Paint::new("Chat cleared").yellow());
                print_last_reply(repl.transcript());
            }
            Ok(ReplEvent::Exported(path)) => println!("{} {}", Paint::new("Chat exported to").green(), path),
            Ok(ReplEvent::Answered { outcome, appended }) => {
                if let FlowOutcome::Failed(e) = &outcome {
                    eprintln!("{}", Paint::new(e.to_string()).dim());
                }
                if appended {
                    print_last_reply(repl.transcript());
                } else {
                    terminal::print_outcome(&outcome);
                }
            }
            Err(e) => eprintln!("{}", Paint::new(e.to_string()).red()),
        }
    }
}

#[derive(Parser)]
#[command(
    name = "assessaid",
    author,
    version,
    about = "AssessAid assessment recommendation client",
    long_about = r#"AssessAid: find the right assessments for a role, from the browser or the terminal.

Every command talks to the recommendation service configured through RECOMMEND_API_BASE_URL (or an `--env-file`).

Examples:
  1) Run the web app (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) One-off recommendation:
      assessaid recommend java developer with collaboration skills
  3) Interactive assistant:
      assessaid chat
"#,
    after_help = "Use `assessaid <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Ask for recommendations once and print them
    #[command(about = "Get assessment recommendations for a query", long_about = "Send the query to the recommendation service and print the assessments as a table, or the raw response with --json.")]
    Recommend {
        /// Free-text description of the role or skills
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Print the service response as JSON
        #[arg(long)]
        json: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Chat with the assistant in the terminal
    Chat {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration and service reachability
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Print the resolved configuration and query the recommendation service's health endpoint.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // If no command provided, serve the web app by default
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file, stylesheet } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::Recommend { query, json, env_file } => {
            if json {
                // Keep stdout parseable
                api::set_silent(true);
            }
            let client = build_client_from_env(env_file.as_deref());
            run_recommend(client, &query.join(" "), json).await;
        }
        Commands::Chat { env_file } => {
            // The curl echo would interleave with the conversation
            api::set_silent(true);
            let client = build_client_from_env(env_file.as_deref());
            run_chat(client).await;
        }
        Commands::CheckConfig { env_file } => {
            let client = build_client_from_env(env_file.as_deref());
            println!("{} {}", Paint::new("Recommendation service:").bold(), client.base_url());
            if let Err(e) = reqwest::Url::parse(client.base_url()) {
                eprintln!("{}: {}", Paint::new("RECOMMEND_API_BASE_URL is not a valid URL").red(), e);
                process::exit(1);
            }
            println!("{} {}", Paint::new("Public base URL:").bold(), config::get_public_base_url());
            match client.health().await {
                Ok(report) if report.is_healthy() => {
                    println!("{}", Paint::new("Configuration looks valid (service is healthy)").green());
                }
                Ok(report) => {
                    eprintln!(
                        "{}: status '{}'",
                        Paint::new("Service is reachable but not ready").yellow(),
                        report.status
                    );
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("{}: {}", Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
