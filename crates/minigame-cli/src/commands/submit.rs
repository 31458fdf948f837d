use anyhow::{Result, bail};
use minigame::{GameKey, ScoreReport};

use crate::commands::build_reporter;
use crate::settings::Settings;

pub fn run(game: GameKey, score: u32, settings: &Settings) -> Result<()> {
    let application_id = settings.application_id()?;
    let reporter = build_reporter(settings);

    let settlement = reporter.submit(&ScoreReport::new(application_id, game, score));
    println!("{} score {}: {}", game, score, settlement);
    if !settlement.is_accepted() {
        bail!("Score was not accepted");
    }
    Ok(())
}
