//! lax CLI - main entry point
//!
//! `<command> | lax` or `lax --file <path>`: send the text to Slack as a
//! file upload or, with `--inline`, as a code-fenced message.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lax::delivery::{deliver, DeliveryMode, DeliveryReport, DeliveryRequest};
use lax::{input, Config, Error, SlackClient};

#[derive(Parser)]
#[command(name = "lax")]
#[command(about = "Pipe command output into a Slack channel", long_about = None)]
#[command(version)]
struct Cli {
    /// Message to accompany the snippet in the post
    #[arg(short, long, default_value = "")]
    message: String,

    /// Title for the uploaded file
    #[arg(short, long, default_value = "output")]
    title: String,

    /// Filetype for the upload (used for syntax highlighting)
    #[arg(long = "type", default_value = "auto")]
    filetype: String,

    /// Post the snippet inline. Syntax highlighting will not work with
    /// embedded code.
    #[arg(short, long, default_value_t = false)]
    inline: bool,

    /// File to send to Slack. Ignored if input is piped through stdin
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn print_usage() {
    println!("Usage:");
    println!("  $ <INPUT> | lax OR $ lax --file <FILEPATH>");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("lax=info".parse()?))
        .init();

    let cli = Cli::parse();

    // Config failure is the only non-zero exit: it aborts before any input
    // is read.
    let config = Config::load()?;

    let source = input::detect(io::stdin().is_terminal(), cli.file);
    let buffer = match input::acquire(source) {
        Ok(Some(buffer)) => buffer,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err @ Error::FileOpen(_)) => {
            println!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let client = SlackClient::new(&config.slack_token);
    let request = DeliveryRequest {
        channel: config.channel_id,
        message: cli.message,
        content: buffer,
        mode: DeliveryMode::from_flags(cli.inline, cli.title, cli.filetype),
    };

    match deliver(&client, request).await {
        Ok(DeliveryReport::Uploaded) => println!("message sent to slack"),
        Ok(DeliveryReport::Posted { channel }) => println!("message sent to channel {channel}"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use lax::InputSource;

    #[test]
    fn cli_defaults_match_the_original_flags() {
        let cli = Cli::parse_from(["lax"]);
        assert_eq!(cli.message, "");
        assert_eq!(cli.title, "output");
        assert_eq!(cli.filetype, "auto");
        assert!(!cli.inline);
        assert!(cli.file.is_none());
    }

    #[test]
    fn cli_parses_all_flags() {
        let cli = Cli::parse_from([
            "lax", "--message", "result", "--title", "t", "--type", "rust", "--inline",
            "--file", "/tmp/data.txt",
        ]);
        assert_eq!(cli.message, "result");
        assert_eq!(cli.title, "t");
        assert_eq!(cli.filetype, "rust");
        assert!(cli.inline);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/data.txt")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn detect_maps_cli_state_onto_sources() {
        // Terminal + file argument means the file is the source.
        let source = input::detect(true, Some(PathBuf::from("/tmp/x")));
        assert_eq!(source, InputSource::File(PathBuf::from("/tmp/x")));
    }
}
