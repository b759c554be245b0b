mod config;
mod layout;
mod view;


use std::path::PathBuf;

use board::clients::{ClientBook, ClientDraft, ClientError};
use board::detail::RfpDetail;
use board::doc::{BoardError, CardId, Column};
use board::engine::{Action, BoardCore};
use board::geom::Point;
use board::hit::LayoutSource;
use board::metrics::PipelineSummary;
use board::seed::initial_clients;
use board::wizard::{RfpDraft, Wizard, WizardError};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, Viewport};
use crate::layout::{BoardLayout, LayoutError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("new RFP rejected: {0}")]
    Wizard(#[from] WizardError),
    #[error("new client rejected: {0}")]
    Client(#[from] ClientError),
    #[error("no card with id {0}")]
    UnknownCard(CardId),
    #[error("pass either --to or both --x and --y")]
    MissingReleasePoint,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "rfpdesk", about = "RFP pipeline board in the terminal")]
struct Cli {
    /// JSON array of cards to start from; the demo proposals when absent.
    #[arg(long, env = "RFPDESK_CARDS", global = true)]
    cards: Option<PathBuf>,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ViewportArgs {
    #[arg(long, env = "RFPDESK_VIEWPORT_WIDTH", default_value_t = config::DEFAULT_VIEWPORT_WIDTH, global = true)]
    width: f64,

    #[arg(long, env = "RFPDESK_VIEWPORT_HEIGHT", default_value_t = config::DEFAULT_VIEWPORT_HEIGHT, global = true)]
    height: f64,

    #[arg(long, env = "RFPDESK_GAP", default_value_t = board::consts::COLUMN_GAP_PX, global = true)]
    gap: f64,

    #[arg(long, env = "RFPDESK_PADDING", default_value_t = board::consts::BOARD_PADDING_PX, global = true)]
    padding: f64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the kanban columns.
    Board,
    /// Print the table view.
    Table,
    /// Print the dashboard summary.
    Metrics {
        #[arg(long)]
        json: bool,
    },
    /// Print the column regions of the current viewport.
    Regions,
    /// Drag a card and release it at a point (or over a column's center).
    Drag {
        card_id: String,
        #[arg(long, requires = "y", conflicts_with = "to")]
        x: Option<f64>,
        #[arg(long, requires = "x", conflicts_with = "to")]
        y: Option<f64>,
        /// Release over the center of this column instead of at a point.
        #[arg(long)]
        to: Option<Column>,
    },
    /// Print the detail page of one proposal.
    Show {
        card_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Create an RFP through the wizard and add it to the board.
    New(NewArgs),
    /// Print the client list.
    Clients,
    /// Manage clients.
    Client {
        #[command(subcommand)]
        command: ClientCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ClientCommand {
    /// Validate a new client and add it to the list.
    New(ClientArgs),
}

#[derive(Args, Debug)]
struct ClientArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    contact: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
}

#[derive(Args, Debug)]
struct NewArgs {
    #[arg(long)]
    client: String,
    #[arg(long, default_value = "")]
    contact: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    value: String,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let vp = &cli.viewport;
    let viewport = Viewport::new(vp.width, vp.height, vp.gap, vp.padding)?;
    let mut core = BoardCore::with_store(config::load_store(cli.cards.as_deref())?);

    match cli.command {
        Command::Board => print!("{}", view::render_board(&core.store)),
        Command::Table => print!("{}", view::render_table(&core.store)),
        Command::Metrics { json } => run_metrics(&core, json)?,
        Command::Regions => print!("{}", view::render_regions(&BoardLayout::new(viewport)?.column_regions())),
        Command::Drag { card_id, x, y, to } => {
            let release = match (x, y, to) {
                (Some(x), Some(y), _) => Point::new(x, y),
                (_, _, Some(column)) => BoardLayout::new(viewport)?.region(column).rect.center(),
                _ => return Err(CliError::MissingReleasePoint),
            };
            run_drag(&mut core, viewport, &CardId::new(card_id), release)?;
        }
        Command::Show { card_id, json } => run_show(&core, &initial_clients(), &CardId::new(card_id), json)?,
        Command::New(args) => run_new(&mut core, args)?,
        Command::Clients => print!("{}", view::render_clients(&initial_clients())),
        Command::Client { command: ClientCommand::New(args) } => run_client_new(&mut initial_clients(), args)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_metrics(core: &BoardCore, json: bool) -> Result<(), CliError> {
    let summary = PipelineSummary::from_cards(core.cards());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", view::render_metrics(&summary));
    }
    Ok(())
}

fn run_drag(core: &mut BoardCore, viewport: Viewport, card_id: &CardId, release: Point) -> Result<(), CliError> {
    if core.card(card_id).is_none() {
        return Err(CliError::UnknownCard(card_id.clone()));
    }

    core.on_drag_start(card_id);
    // Layout is measured at release, as a browser would on pointer-up.
    let layout = BoardLayout::new(viewport)?;
    let actions = core.on_drag_end(card_id, release, &layout);

    if actions.is_empty() {
        tracing::info!(card = %card_id, x = release.x, y = release.y, "drop changed nothing");
    }
    apply_actions(&actions);
    print!("{}", view::render_board(&core.store));
    Ok(())
}

fn run_show(core: &BoardCore, clients: &ClientBook, card_id: &CardId, json: bool) -> Result<(), CliError> {
    let card = core.card(card_id).ok_or_else(|| CliError::UnknownCard(card_id.clone()))?;
    let detail = RfpDetail::for_card(card, clients);
    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!("{}", view::render_detail(&detail));
    }
    Ok(())
}

fn run_client_new(clients: &mut ClientBook, args: ClientArgs) -> Result<(), CliError> {
    let draft = ClientDraft { name: args.name, contact_person: args.contact, email: args.email, phone: args.phone };
    let client = clients.add(&draft)?;
    println!("{}", serde_json::to_string_pretty(client)?);
    eprint!("{}", view::render_clients(clients));
    Ok(())
}

fn run_new(core: &mut BoardCore, args: NewArgs) -> Result<(), CliError> {
    let mut wizard = Wizard::new();
    wizard.draft =
        RfpDraft { client_name: args.client, contact_person: args.contact, title: args.title, value: args.value };
    while !wizard.is_last_step() {
        wizard.next()?;
    }
    eprint!("{}", view::render_wizard(&wizard));

    let card = wizard.finish()?;
    let actions = core.create_card(card.clone())?;
    apply_actions(&actions);
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}

/// Toasts go to stderr; change notifications only need a re-render, which the
/// caller does once after applying everything.
fn apply_actions(actions: &[Action]) {
    for action in actions {
        match action {
            Action::Toast(text) => eprintln!("{text}"),
            Action::BoardChanged { card_id, from, to } => {
                tracing::debug!(card = %card_id, %from, %to, "board changed");
            }
            Action::CardCreated { card_id } => tracing::debug!(card = %card_id, "card created"),
        }
    }
}
