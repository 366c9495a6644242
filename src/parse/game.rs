// src/parse/game.rs
use crate::bundle::RawBoxscoreBundle;
use crate::core::{Side, parse_game_id};
use crate::error::Result;
use crate::records::ParsedGame;
use crate::specs::{SideContext, build_batters, build_pitchers};

/// One bundle → one game's records: away batters, home batters, then away
/// pitchers, home pitchers. Pure; the same bundle always gives the same game.
pub fn parse_game(bundle: &RawBoxscoreBundle) -> Result<ParsedGame> {
    let id = parse_game_id(&bundle.game_id)?;
    bundle.validate()?;
    let date = id.date_str();

    let mut batters = Vec::new();
    let mut pitchers = Vec::new();
    for side in Side::BOTH {
        let ctx = SideContext { team: side.pick(&id.teams).as_str(), date: &date };
        batters.extend(build_batters(
            bundle.batting(side),
            side,
            ctx,
            &bundle.sb_info,
            &bundle.sb_headers,
        )?);
    }
    for side in Side::BOTH {
        let ctx = SideContext { team: side.pick(&id.teams).as_str(), date: &date };
        pitchers.extend(build_pitchers(bundle.pitching(side), ctx)?);
    }

    logd!(
        "{}: {} batters, {} pitchers",
        bundle.game_id,
        batters.len(),
        pitchers.len()
    );
    Ok(ParsedGame { date, teams: id.teams, batters, pitchers })
}
