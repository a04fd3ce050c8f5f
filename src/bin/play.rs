//! Single Game Binary
//!
//! Plays one game of grid pursuit in the terminal.
//! External players pick their step from a menu.
//! The final record is printed as JSON.

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use pursuit::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play one game of grid pursuit", long_about = None)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_SIZE, help = "Board edge length")]
    size: usize,
    #[arg(long, help = "Max's starting square as x,y [default: 0,0]")]
    max: Option<Square>,
    #[arg(long, help = "Min's starting square as x,y [default: opposite corner]")]
    min: Option<Square>,
    #[arg(long, default_value_t = Player::Max, help = "Who moves first (max or min)")]
    first: Player,
    #[arg(long, default_value_t = DEFAULT_DEPTH, help = "Minimax lookahead")]
    depth: Depth,
    #[arg(long, default_value_t = Policy::Random, help = "random, minimax or user")]
    max_policy: Policy,
    #[arg(long, default_value_t = Policy::Random, help = "random, minimax or user")]
    min_policy: Policy,
    #[arg(long, help = "Seed for reproducible games")]
    seed: Option<u64>,
    #[arg(short, long, help = "Only print the result")]
    quiet: bool,
    #[arg(short, long, help = "Log every move and search")]
    verbose: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            size: args.size,
            max: args.max,
            min: args.min,
            mover: args.first,
            depth: args.depth,
            max_policy: args.max_policy,
            min_policy: args.min_policy,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match (args.quiet, args.verbose) {
        (true, _) => log::LevelFilter::Warn,
        (_, true) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Info,
    });
    let ref mut game = Game::new(Config::from(&args))?;
    show(game, args.quiet);
    while !game.is_finished() {
        match game.make_move() {
            Ok(_) => {}
            Err(GameError::AwaitingInput(player)) => prompt(game, player)?,
            Err(e) => return Err(e.into()),
        }
        show(game, args.quiet);
    }
    if let Some(winner) = game.winner() {
        println!("And the winner is {}", winner.to_string().bold().green());
    }
    println!("{}", serde_json::to_string_pretty(&game.record())?);
    Ok(())
}

fn prompt(game: &mut Game, player: Player) -> anyhow::Result<()> {
    loop {
        let legal = game.legal();
        let labels = legal.iter().map(Direction::label).collect::<Vec<_>>();
        let choice = Select::new()
            .with_prompt(format!("{} to move", player))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        match game.make_external_move(legal[choice]) {
            Err(GameError::InvalidMove(d)) => log::warn!("nothing free to the {}, pick again", d),
            other => return other.map(|_| ()).map_err(Into::into),
        }
    }
}

fn show(game: &Game, quiet: bool) {
    if quiet {
        return;
    }
    let board = render(game.current(), 'a', 'b')
        .chars()
        .map(|c| match c {
            'A' | 'B' => c.to_string().bold().green().to_string(),
            'a' | 'b' => c.to_string().yellow().to_string(),
            '1' => c.to_string().dimmed().to_string(),
            c => c.to_string(),
        })
        .collect::<String>();
    println!("{}", board);
}
