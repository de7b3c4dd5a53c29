//! 5x5 chess in the terminal
//!
//! Reads one command per line from stdin. Play against the computer (you are
//! White) or, with `--friend`, pass the keyboard between two players.

mod commands;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use minichess_core::Color;
use minichess_game::{Game, GameConfig, GameEvent, Mode, OpponentKind, Status};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::{Command, HELP};

fn print_usage() {
    println!("minichess - 5x5 chess against the computer or a friend");
    println!();
    println!("Usage:");
    println!("  minichess [--config FILE] [--friend] [--opponent lookahead|random]");
    println!("            [--layout LAYOUT] [--seed N] [--verbose]");
    println!();
    println!("Layouts list rows from Black's home row down, e.g. nbkbn/ppppp/5/PPPPP/NBKBN");
    println!("Set RUST_LOG for finer log control.");
}

/// Command-line overrides on top of the config file
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    friend: bool,
    opponent: Option<OpponentKind>,
    layout: Option<String>,
    seed: Option<u64>,
    verbose: bool,
    help: bool,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = Args::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => parsed.config = Some(PathBuf::from(value(args, i)?)),
                "--layout" | "-l" => parsed.layout = Some(value(args, i)?.to_string()),
                "--seed" => {
                    let v = value(args, i)?;
                    parsed.seed = Some(v.parse().with_context(|| format!("bad seed {v:?}"))?);
                }
                "--opponent" | "-o" => {
                    parsed.opponent = Some(match value(args, i)? {
                        "lookahead" => OpponentKind::Lookahead,
                        "random" => OpponentKind::Random,
                        other => bail!("unknown opponent {other:?}"),
                    });
                }
                "--friend" | "-f" => {
                    parsed.friend = true;
                    i += 1;
                    continue;
                }
                "--verbose" | "-v" => {
                    parsed.verbose = true;
                    i += 1;
                    continue;
                }
                "--help" | "-h" => {
                    parsed.help = true;
                    i += 1;
                    continue;
                }
                other => bail!("unknown argument {other:?}"),
            }
            // Options with a value consume two slots
            i += 2;
        }
        Ok(parsed)
    }

    fn apply(&self, config: &mut GameConfig) {
        if self.friend {
            config.mode = Mode::VsFriend;
        }
        if let Some(opponent) = self.opponent {
            config.opponent = opponent;
        }
        if let Some(layout) = &self.layout {
            config.layout = layout.clone();
        }
        if self.seed.is_some() {
            config.search.seed = self.seed;
        }
    }
}

fn value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} needs a value", args[i]))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::Started => println!("Game started. WHITE to move."),
        GameEvent::Paused => println!("Paused."),
        GameEvent::Resumed => println!("Resumed."),
        GameEvent::Reset => println!("Board reset. Type `start` to play."),
        GameEvent::MoveApplied(record) => println!("{record}"),
        GameEvent::MoveRejected { reason, .. } => println!("Rejected: {reason}"),
        GameEvent::GameOver { winner } => println!("Game over: {winner} wins!"),
    }
}

fn print_status(game: &Game) {
    println!("Status: {}", game.status());
    if game.status() == Status::InProgress {
        let who = if game.computer_to_move() { "computer" } else { "you" };
        println!("{} to move ({who})", game.side_to_move());
    }
    for color in [Color::White, Color::Black] {
        let taken: String = game
            .captured_by(color)
            .iter()
            .map(|pc| pc.glyph())
            .collect();
        println!("Captured by {color}: {taken}");
    }
}

/// Runs one command. Returns false when the user wants to leave.
fn run(game: &mut Game, command: Command) -> Result<bool> {
    match command {
        Command::Start => {
            game.start()?;
            println!("{}", game.board());
        }
        Command::Pause => game.pause()?,
        Command::Resume => {
            game.resume()?;
        }
        Command::Reset => game.reset(),
        Command::Move(from, to) => {
            // Rejections are reported through the event printer
            if let Ok(outcome) = game.submit_move(from, to) {
                debug!(status = %outcome.status, "move accepted");
                println!("{}", game.board());
            }
        }
        Command::Select(at) => {
            let dests = game.destinations(at);
            if dests.is_empty() {
                println!("No moves from {at}");
            } else {
                let listed: Vec<String> = dests
                    .iter()
                    .map(|d| {
                        if d.is_capture {
                            format!("x{}", d.square)
                        } else {
                            d.square.to_string()
                        }
                    })
                    .collect();
                println!("{at} can go to: {}", listed.join("  "));
            }
        }
        Command::Board => println!("{}", game.board()),
        Command::Log { json: false } => {
            for (i, record) in game.move_log().iter().enumerate() {
                println!("{:>3}. {record}", i + 1);
            }
        }
        Command::Log { json: true } => {
            println!("{}", serde_json::to_string_pretty(game.move_log())?);
        }
        Command::Status => print_status(game),
        Command::Auto(on) => {
            game.set_auto_reply(on);
            println!("Instant replies {}", if on { "on" } else { "off" });
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Plays the computer's pending move after the cosmetic think delay.
fn reply_if_due(game: &mut Game, delay: Duration) -> Result<()> {
    if game.status() != Status::InProgress || !game.computer_to_move() {
        return Ok(());
    }
    println!("{} is thinking...", game.engine_name());
    thread::sleep(delay);
    if game.play_opponent_move()?.is_some() {
        println!("{}", game.board());
    }
    Ok(())
}

fn main() -> Result<()> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = Args::parse(&argv)?;
    if args.help {
        print_usage();
        return Ok(());
    }
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    args.apply(&mut config);
    // The reply is played here, after the think delay
    config.auto_reply = false;
    let delay = config.think_delay();

    let mut game = Game::new(config).context("invalid layout")?;
    game.subscribe(print_event);

    println!("5x5 chess. Opponent: {}", match game.config().mode {
        Mode::VsComputer => game.engine_name(),
        Mode::VsFriend => "a friend",
    });
    println!("{HELP}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e:#}");
                continue;
            }
        };

        match run(&mut game, command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                warn!(error = %e, "command failed");
                println!("{e}");
            }
        }
        reply_if_due(&mut game, delay)?;
        stdout.flush().ok();
    }
    Ok(())
}
