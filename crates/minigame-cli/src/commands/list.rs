use minigame::GameKey;
use strum::IntoEnumIterator;

pub fn run() {
    println!("Available games:");
    for key in GameKey::iter() {
        println!("  {:<14} {:<28} {}", key.alias(), key.as_str(), key.title());
    }
}
