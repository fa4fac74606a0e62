use std::env;

use crate::combat::roll_critical;
use crate::dice::{roll_sum, skill_check, Rng};
use crate::server;
use crate::ships::ShipRegistry;
use crate::store::FileStore;
use crate::turn::TurnTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Roll,
    Check,
    Crit,
    Turn,
    Reset,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("roll") => Some(Command::Roll),
        Some("check") => Some(Command::Check),
        Some("crit") => Some(Command::Crit),
        Some("turn") => Some(Command::Turn),
        Some("reset") => Some(Command::Reset),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Roll) => handle_roll(args),
        Some(Command::Check) => handle_check(args),
        Some(Command::Crit) => handle_crit(args),
        Some(Command::Turn) => handle_turn(args),
        Some(Command::Reset) => handle_reset(),
        None => {
            eprintln!("usage: broadsword <serve|roll|check|crit|turn|reset>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("BROADSWORD_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_roll(args: &[String]) -> i32 {
    let count = parse_u32_arg(args.get(2), "count", 2);
    let sides = parse_u32_arg(args.get(3), "sides", 6);
    let mut rng = rng_from_arg(args.get(4));
    print_json(&roll_sum(&mut rng, count, sides))
}

fn handle_check(args: &[String]) -> i32 {
    let target = parse_i32_arg(args.get(2), "target", 8);
    let dm = parse_i32_arg(args.get(3), "dm", 0);
    let mut rng = rng_from_arg(args.get(4));
    print_json(&skill_check(&mut rng, target, dm))
}

fn handle_crit(args: &[String]) -> i32 {
    let effect = parse_i32_arg(args.get(2), "effect", 6);
    let mut rng = rng_from_arg(args.get(3));
    print_json(&roll_critical(&mut rng, effect))
}

fn handle_turn(args: &[String]) -> i32 {
    let store = FileStore::from_env();
    let mut tracker = TurnTracker::load(&store);
    match args.get(2).map(String::as_str) {
        Some("show") | None => {}
        Some("advance") => {
            tracker.advance();
            tracker.save(&store);
        }
        Some("new") => {
            tracker.new_turn();
            tracker.save(&store);
        }
        Some("reset") => {
            tracker.reset();
            tracker.save(&store);
        }
        Some(other) => {
            eprintln!("unknown turn action '{other}'");
            eprintln!("usage: broadsword turn [show|advance|new|reset]");
            return 2;
        }
    }
    println!(
        "turn {} / {} / {}",
        tracker.turn(),
        tracker.current_phase().name,
        tracker.current_step().name
    );
    0
}

fn handle_reset() -> i32 {
    let store = FileStore::from_env();
    ShipRegistry::load(Box::new(FileStore::from_env())).clear();
    TurnTracker::new().save(&store);
    println!("encounter reset");
    0
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize result: {err}");
            1
        }
    }
}

fn rng_from_arg(raw: Option<&String>) -> Rng {
    match raw.and_then(|value| value.parse::<u64>().ok()) {
        Some(seed) => Rng::new(seed),
        None => Rng::from_entropy(),
    }
}

fn parse_u32_arg(raw: Option<&String>, name: &str, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_i32_arg(raw: Option<&String>, name: &str, default: i32) -> i32 {
    raw.and_then(|value| value.parse::<i32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_parse() {
        let args: Vec<String> = ["broadsword", "roll"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(parse_command(&args), Some(Command::Roll));
    }

    #[test]
    fn unknown_command_is_none() {
        let args: Vec<String> = ["broadsword", "frobnicate"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(parse_command(&args), None);
    }

    #[test]
    fn missing_command_exits_with_usage() {
        let args: Vec<String> = vec!["broadsword".to_string()];
        assert_eq!(run_with_args(&args), 2);
    }
}
