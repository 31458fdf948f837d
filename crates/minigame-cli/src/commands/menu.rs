use std::io::{self, BufRead, Write};

use anyhow::Result;
use minigame::GameKey;
use strum::IntoEnumIterator;

use crate::commands::play;
use crate::settings::Settings;

/// Numbered game picker; loops until `q` or end of input.
pub fn run(settings: &Settings) -> Result<()> {
    let games: Vec<GameKey> = GameKey::iter().collect();
    let stdin = io::stdin();

    loop {
        println!();
        println!("=== Mini Games ===");
        for (i, key) in games.iter().enumerate() {
            println!("{:>2}. {}", i + 1, key.title());
        }
        println!(" q. Quit");
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        match pick(&games, choice) {
            Some(key) => {
                if let Err(e) = play::run(key, settings) {
                    eprintln!("Error: {:#}", e);
                }
            }
            None => println!("Unknown choice: {}", choice),
        }
    }
}

/// A 1-based number, an alias or a server key.
fn pick(games: &[GameKey], choice: &str) -> Option<GameKey> {
    match choice.parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| games.get(i)).copied(),
        Err(_) => choice.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_by_number_alias_or_key() {
        let games: Vec<GameKey> = GameKey::iter().collect();
        assert_eq!(pick(&games, "1"), Some(GameKey::ClickRush));
        assert_eq!(pick(&games, "12"), Some(GameKey::ColorMatch));
        assert_eq!(pick(&games, "0"), None);
        assert_eq!(pick(&games, "13"), None);
        assert_eq!(pick(&games, "quiz"), Some(GameKey::Quiz));
        assert_eq!(pick(&games, "molayman_memory"), Some(GameKey::Memory));
        assert_eq!(pick(&games, "chess"), None);
    }
}
