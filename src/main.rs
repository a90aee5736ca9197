use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use long_backgammon::{
    backgammon::{Board, Dice, Preset},
    command::Command,
    config::{Config, Locale},
    session::{Phase, RollOutcome, Selection, Session},
    simulate::simulate,
};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(name = "long-backgammon")]
struct Args {
    /// Starting layout: default | test-end | test-win
    #[arg(default_value = "default")]
    layout: String,

    /// Language of the messages: en | ru
    #[arg(long, default_value = "en")]
    locale: String,

    /// RNG seed for the dice (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many random games in parallel and print statistics
    #[arg(long)]
    simulate: Option<usize>,

    /// Turn limit of a single simulated game
    #[arg(long, default_value_t = 2000)]
    max_turns: u32,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        Ok(Config {
            locale: self.locale.parse::<Locale>()?,
            preset: self.layout.parse::<Preset>()?,
            seed: self.seed,
            simulate: self.simulate,
            max_turns: self.max_turns,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Args::parse().into_config()?;
    let layout = config.preset.layout();
    layout.validate().context("invalid starting layout")?;

    if let Some(games) = config.simulate {
        let seed = config.seed.unwrap_or(12345);
        log::info!("simulating {} games from {:?} (seed {})", games, config.preset, seed);
        println!("{}", simulate(&layout, games, seed, config.max_turns));
        return Ok(());
    }

    let session = Session::new(Board::from_layout(&layout));
    run_interactive(session, &config)
}

fn run_interactive(mut session: Session, config: &Config) -> Result<()> {
    let messages = config.locale.messages();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("{}", messages.title);
    println!("{}", messages.help);
    println!("{}", session.board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        match session.phase() {
            Phase::AwaitingRoll => {
                print!("{} {} ({}) > ", messages.turn_of, session.turn(), messages.roll_the_dice)
            }
            Phase::Moving => {
                print!("{} {} {:?} > ", messages.turn_of, session.turn(), session.remaining())
            }
            Phase::Finished(_) => return Ok(()),
        }
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Help => println!("{}", messages.help),
            Command::Board => println!("{}", session.board()),
            Command::Roll(dice) => {
                let dice = dice.unwrap_or_else(|| Dice::roll(&mut rng));
                match session.roll(dice) {
                    RollOutcome::Rolled => println!("{}: {}", messages.rolled, dice),
                    RollOutcome::NoMoves => {
                        println!("{}: {}", messages.rolled, dice);
                        println!("{}", messages.no_moves);
                    }
                    RollOutcome::Ignored => println!("{}", messages.help),
                }
            }
            Command::Select(point) => match session.select(point) {
                Selection::Origin { moves, .. } => {
                    let mut destinations: Vec<_> = moves.iter().collect();
                    destinations.sort_unstable_by_key(|&(to, _)| *to);
                    println!("{}: {:?}", messages.destinations, destinations);
                }
                Selection::Moved { turn_over, .. } => {
                    println!("{}", session.board());
                    if turn_over {
                        println!("{} {}", messages.turn_of, session.turn());
                    }
                }
                Selection::Won(turn) => {
                    println!("{}", session.board());
                    println!("{} ({})", messages.you_won, turn);
                }
                Selection::Ignored => println!("{}", messages.roll_the_dice),
            },
        }
    }
}
