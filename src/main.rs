use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tgcall::config::Config;
use tgcall::extra::ExtraReplyMessage;
use tgcall::tg::{ChatId, ParseMode, Recipient};
use tgcall::{FileRef, Telegram};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tgcall", about = "Call the Telegram Bot API from the shell")]
struct Cli {
    /// Config file (default: ~/.config/tgcall/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bot account
    Me,
    /// Show the current webhook status
    WebhookInfo,
    /// Print the download URL of a stored file
    FileLink { file_id: String },
    /// Send a text message
    Send {
        /// Numeric chat id or @channelusername
        chat: String,
        text: String,
        #[arg(long, value_enum)]
        parse_mode: Option<ParseModeArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ParseModeArg {
    Html,
    Markdownv2,
}

impl From<ParseModeArg> for ParseMode {
    fn from(mode: ParseModeArg) -> Self {
        match mode {
            ParseModeArg::Html => Self::Html,
            ParseModeArg::Markdownv2 => Self::MarkdownV2,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_recipient(chat: &str) -> Recipient {
    match chat.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat.to_string()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(path) => Config::load_from_path(&path)?,
        None => Config::load()?,
    };
    let bot = Telegram::with_dispatcher(
        config.deployment_context(),
        Arc::new(config.dispatcher()?),
    );

    match cli.command {
        Commands::Me => print_json(&bot.get_me().await?),
        Commands::WebhookInfo => print_json(&bot.get_webhook_info().await?),
        Commands::FileLink { file_id } => {
            let url = bot.get_file_link(FileRef::from(file_id)).await?;
            println!("{url}");
            Ok(())
        }
        Commands::Send {
            chat,
            text,
            parse_mode,
        } => {
            let extra = parse_mode.map(|mode| ExtraReplyMessage {
                parse_mode: Some(mode.into()),
                ..ExtraReplyMessage::default()
            });
            let message = bot
                .send_message(parse_recipient(&chat), text, extra)
                .await?;
            tracing::info!(chat = %chat, message_id = message.id.0, "Message sent");
            print_json(&message)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(run(cli)) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
