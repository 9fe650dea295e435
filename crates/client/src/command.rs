//! Line commands typed into the console.

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use tracker_core::Position;
use tracker_runtime::TrackerAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// A bound tracker key, e.g. `cycle_object_down` or `favorite_3`.
    Action(TrackerAction),
    /// Move the player by one step and face that way.
    Step { dx: i32, dy: i32 },
    /// Remove whatever sits on a tile.
    Harvest(Position),
    Place {
        position: Position,
        name: String,
        category: Option<String>,
    },
    /// Aim reads and moves at a raw tile.
    Point(Position),
    /// Load another layout and enter it.
    Warp(String),
    Metrics,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or_else(|| anyhow!("empty command"))?;

        let command = match head {
            "quit" | "exit" => Self::Quit,
            "metrics" => Self::Metrics,
            "step" => {
                let (dx, dy) = parse_pair(&mut words)?;
                if dx.abs() > 1 || dy.abs() > 1 {
                    bail!("step takes offsets between -1 and 1");
                }
                Self::Step { dx, dy }
            }
            "harvest" => {
                let (x, y) = parse_pair(&mut words)?;
                Self::Harvest(Position::new(x, y))
            }
            "point" => {
                let (x, y) = parse_pair(&mut words)?;
                Self::Point(Position::new(x, y))
            }
            "place" => {
                let (x, y) = parse_pair(&mut words)?;
                let name = words.next().context("place needs a name")?.replace('_', " ");
                Self::Place {
                    position: Position::new(x, y),
                    name,
                    category: words.next().map(str::to_owned),
                }
            }
            "warp" => Self::Warp(words.next().context("warp needs a location")?.to_owned()),
            action => Self::Action(
                TrackerAction::from_str(action)
                    .map_err(|_| anyhow!("unknown command '{action}'"))?,
            ),
        };
        Ok(command)
    }
}

fn parse_pair<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<(i32, i32)> {
    let mut next = || -> anyhow::Result<i32> {
        let word = words.next().context("expected two coordinates")?;
        word.parse()
            .with_context(|| format!("'{word}' is not a coordinate"))
    };
    Ok((next()?, next()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_and_world_commands() {
        assert_eq!(
            "cycle_object_down".parse::<Command>().unwrap(),
            Command::Action(TrackerAction::CycleObjectDown)
        );
        assert_eq!(
            "harvest 12 10".parse::<Command>().unwrap(),
            Command::Harvest(Position::new(12, 10))
        );
        assert_eq!(
            "place 3 4 Copper_Ore mineral".parse::<Command>().unwrap(),
            Command::Place {
                position: Position::new(3, 4),
                name: "Copper Ore".to_owned(),
                category: Some("mineral".to_owned()),
            }
        );
        assert_eq!(
            "point 4 9".parse::<Command>().unwrap(),
            Command::Point(Position::new(4, 9))
        );
        assert_eq!(
            "step -1 0".parse::<Command>().unwrap(),
            Command::Step { dx: -1, dy: 0 }
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("harvest 1".parse::<Command>().is_err());
        assert!("step 2 0".parse::<Command>().is_err());
    }
}
