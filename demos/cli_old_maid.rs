//! CLI Old Maid example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use oldmaid::{Card, Console, Draw, Game, GameOptions, Outcome, Owner, View};

/// Play Old Maid against the computer dealer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible game (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Terminal;

impl Console for Terminal {
    fn display(&mut self, _owner: Owner, view: View, cards: &[Card]) {
        let label = match view {
            View::Dealt => "Your current deck of cards is:",
            View::Current => "\nYour turn.\n\nYour current deck of cards is:",
            View::Drawn => "With that card added, your current deck of cards is:",
            View::Reduced => "And after discarding pairs and shuffling, your deck is:",
        };
        println!("{label}");
        println!("\n{}\n", format_cards(cards));
    }

    fn prompt_slot(&mut self, n: usize) -> usize {
        println!("I have {n} cards. If 1 stands for my first card and");
        println!("{n} for my last card, which of my cards would you like?");
        let mut prompt = format!("Give me an integer between 1 and {n}: ");
        loop {
            match prompt_line(&prompt).parse::<usize>() {
                Ok(slot) if (1..=n).contains(&slot) => return slot,
                _ => prompt = format!("Invalid number. Please enter integer between 1 and {n}: "),
            }
        }
    }

    fn acknowledge(&mut self) {
        prompt_line("\nPress enter to continue. ");
        println!();
    }

    fn drawn(&mut self, draw: &Draw) {
        match draw.taker {
            Owner::Challenger => {
                println!("You asked for my {} card.", ordinal(draw.slot));
                println!("Here it is. It is {}.\n", draw.card);
            }
            Owner::Dealer => {
                println!("\nMy turn.\n");
                println!("I took your {} card.", ordinal(draw.slot));
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("starting game with seed {seed}");

    let mut game = Game::new(GameOptions::default(), seed);
    let mut terminal = Terminal;

    println!(
        "Hello. My name is {} and I am the dealer.",
        game.options().dealer_name
    );
    println!("Welcome to my card game!");
    terminal.display(Owner::Challenger, View::Dealt, game.dealt_hand().cards());
    println!("Do not worry. I cannot see the order of your cards");
    println!("Now discard all the pairs from your deck. I will do the same.");
    terminal.acknowledge();

    let outcome = match game.play(&mut terminal) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Game error: {err}");
            std::process::exit(1);
        }
    };

    match outcome {
        Outcome::ChallengerWins => {
            println!("\nYou don't have any more cards.");
            println!("Congratulations! You win!");
        }
        Outcome::DealerWins => {
            println!("\nI don't have any more cards.");
            println!("You lost! I win!");
        }
        Outcome::InProgress => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!("\nGoodbye.");
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_string(),
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
