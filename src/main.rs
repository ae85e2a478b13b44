use checkers_sync::cli::{parse_command, Command, HELP};
use checkers_sync::transport::tcp::TcpConnector;
use checkers_sync::{
    init_logging, Controller, Event, ForwardHints, GameId, RemoteChannel, TerminalRenderer,
    DEFAULT_SERVER,
};

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

#[derive(Parser)]
#[command(author, version, about = "Terminal client for networked checkers", long_about = None)]
struct Cli {
    /// Address of the game authority.
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new game and play red (the default).
    New,
    /// Join an existing game and play black.
    Join { game_id: String },
}

async fn read_input(events: UnboundedSender<Event>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Event(event)) => {
                if events.send(event).is_err() {
                    break;
                }
            }
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (push_tx, push_rx) = unbounded_channel();
    let (input_tx, input_rx) = unbounded_channel();

    let channel = RemoteChannel::new(TcpConnector::new(cli.server.clone()), push_tx);
    let mut controller = Controller::new(TerminalRenderer::new(), channel, ForwardHints);

    let first = match cli.command.unwrap_or(Commands::New) {
        Commands::New => Event::NewGame,
        Commands::Join { game_id } => Event::JoinGame(GameId::new(game_id)),
    };
    input_tx.send(first)?;

    println!("Connecting to {} (type `help` for commands)", cli.server);
    let input = tokio::spawn(read_input(input_tx));
    controller.run(input_rx, push_rx).await;
    controller.handle(Event::Reset).await;

    match input.await {
        Ok(result) => result,
        Err(e) => Err(anyhow::anyhow!("input task failed: {}", e)),
    }
}
