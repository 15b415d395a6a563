use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ticketbot")]
#[command(about = "WhatsApp support-ticketing gateway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Create the configuration directory and a default config file.
    Init {
        /// Config file path (default: TICKETBOT_CONFIG_PATH or ~/.ticketbot/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,
    },

    /// Run the gateway (Twilio WhatsApp webhook). Database and Trello settings come from the config file and environment.
    Gateway {
        /// Config file path (default: TICKETBOT_CONFIG_PATH or ~/.ticketbot/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,

        /// HTTP port (default from config or 5001)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Talk to a running gateway as a WhatsApp user would (interactive; posts to the webhook).
    Chat {
        /// Config file path (default: TICKETBOT_CONFIG_PATH or ~/.ticketbot/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,

        /// Sender number, e.g. +15551234567.
        #[arg(long, value_name = "NUMBER")]
        from: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("ticketbot {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Init { config }) => {
            if let Err(e) = run_init(config) {
                log::error!("init failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Gateway { config, port }) => {
            if let Err(e) = run_gateway(config, port).await {
                log::error!("gateway failed: {:#}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Chat { config, from }) => {
            if let Err(e) = run_chat(config, from).await {
                log::error!("chat failed: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Run with --help for usage");
        }
    }
}

fn run_init(config_path: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let path = config_path.unwrap_or_else(lib::config::default_config_path);
    let dir = lib::init::init_config_dir(&path)?;
    println!("initialized configuration at {}", dir.display());
    Ok(())
}

async fn run_gateway(
    config_path: Option<std::path::PathBuf>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let (mut config, path) = lib::config::load_config(config_path)?;
    if let Some(p) = port {
        config.gateway.port = p;
    }
    log::info!(
        "starting gateway on {}:{} (config {})",
        config.gateway.bind,
        config.gateway.port,
        path.display()
    );
    lib::gateway::run_gateway(config).await
}

async fn run_chat(config_path: Option<std::path::PathBuf>, from: String) -> anyhow::Result<()> {
    use std::io::{self, Write};

    let (config, _) = lib::config::load_config(config_path)?;
    let host = match config.gateway.bind.trim() {
        "0.0.0.0" | "::" => "127.0.0.1",
        other => other,
    };
    let path = config.gateway.webhook_path.trim().trim_start_matches('/');
    let url = format!("http://{}:{}/{}", host, config.gateway.port, path);
    let sender = format!("whatsapp:{}", from.trim());
    let client = reqwest::Client::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if input.eq_ignore_ascii_case("/exit") || input.eq_ignore_ascii_case("/quit") {
            break;
        }
        match webhook_turn(&client, &url, &sender, input).await {
            Ok(reply) => println!("< {}", reply.trim()),
            Err(e) => eprintln!("chat error: {:#}", e),
        }
    }
    Ok(())
}

/// POST one message as Twilio would and extract the reply text from the TwiML.
async fn webhook_turn(
    client: &reqwest::Client,
    url: &str,
    sender: &str,
    body: &str,
) -> anyhow::Result<String> {
    let res = client
        .post(url)
        .form(&[("Body", body), ("From", sender)])
        .send()
        .await?;
    if !res.status().is_success() {
        anyhow::bail!("webhook returned {}", res.status());
    }
    let xml = res.text().await?;
    Ok(twiml_message_text(&xml).unwrap_or(xml))
}

fn twiml_message_text(xml: &str) -> Option<String> {
    let start = xml.find("<Message>")? + "<Message>".len();
    let end = xml[start..].find("</Message>")? + start;
    htmlescape::decode_html(&xml[start..end]).ok()
}
