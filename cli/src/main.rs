use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

mod backend;
mod session;

use backend::Backend;
use session::{ReplCommand, Session, format_line};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "askdoc-cli", about = "Ask questions about an uploaded PDF from the terminal")]
struct Cli {
    #[arg(long, env = "ASKDOC_BACKEND_URL", default_value = transcript::DEFAULT_BACKEND_BASE_URL)]
    backend_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one question and print the reply.
    Ask { question: String },
    /// Upload a PDF and print the outcome.
    Upload { path: PathBuf },
    /// Interactive chat; `/upload <path>` uploads, `/quit` exits.
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let backend = Backend::new(&cli.backend_url);
    let mut session = Session::default();

    match cli.command {
        Command::Ask { question } => {
            run_ask(&backend, &mut session, &question).await;
            print_bot_lines(&mut session);
            Ok(())
        }
        Command::Upload { path } => {
            run_upload(&backend, &mut session, &path).await?;
            print_bot_lines(&mut session);
            Ok(())
        }
        Command::Chat => run_chat(&backend, &mut session).await,
    }
}

async fn run_ask(backend: &Backend, session: &mut Session, text: &str) {
    let Some(question) = session.submit(text) else {
        return;
    };
    let outcome = backend.ask(&question).await;
    if let Err(e) = &outcome {
        eprintln!("warning: ask against {} failed: {e}", backend.base_url());
    }
    session.settle_ask(outcome);
}

async fn run_upload(backend: &Backend, session: &mut Session, path: &Path) -> Result<(), CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    let outcome = backend.upload(&file_name, bytes).await;
    if let Err(e) = &outcome {
        eprintln!("warning: upload against {} failed: {e}", backend.base_url());
    }
    session.settle_upload(&file_name, outcome);
    Ok(())
}

async fn run_chat(backend: &Backend, session: &mut Session) -> Result<(), CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Quit => return Ok(()),
            ReplCommand::Ignore => {}
            ReplCommand::Ask(text) => run_ask(backend, session, &text).await,
            ReplCommand::Upload(path) => {
                if let Err(e) = run_upload(backend, session, Path::new(&path)).await {
                    eprintln!("{e}");
                }
            }
        }

        print_bot_lines(session);
    }
}

/// Print newly appended bot lines; user lines were typed by the user.
fn print_bot_lines(session: &mut Session) {
    for message in session.drain() {
        if message.sender() == transcript::Sender::Bot {
            println!("{}", format_line(&message));
        }
    }
}
