//! Scenario file parser
//!
//! Line-oriented: an UPPER_SNAKE keyword followed by unsigned decimal
//! arguments, whitespace-separated. Blank lines and `#` comments are
//! skipped. Parse failures carry the 1-based line number.

use std::io::BufRead;

use crate::core::error::{Result, SkirmishError};
use crate::io::commands::Command;

pub fn parse_scenario(reader: impl BufRead) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();
        commands.push(parse_command(line_no, keyword, &args)?);
    }
    Ok(commands)
}

fn parse_command(line: usize, keyword: &str, args: &[&str]) -> Result<Command> {
    match keyword {
        "CREATE_MAP" => {
            let [width, height] = parse_args::<2>(line, keyword, args)?;
            Ok(Command::CreateMap { width, height })
        }
        "SPAWN_SWORDSMAN" => {
            let [unit_id, x, y, hp, strength] = parse_args::<5>(line, keyword, args)?;
            Ok(Command::SpawnSwordsman {
                unit_id,
                x,
                y,
                hp,
                strength,
            })
        }
        "SPAWN_HUNTER" => {
            let [unit_id, x, y, hp, agility, strength, range] =
                parse_args::<7>(line, keyword, args)?;
            Ok(Command::SpawnHunter {
                unit_id,
                x,
                y,
                hp,
                agility,
                strength,
                range,
            })
        }
        "MARCH" => {
            let [unit_id, target_x, target_y] = parse_args::<3>(line, keyword, args)?;
            Ok(Command::March {
                unit_id,
                target_x,
                target_y,
            })
        }
        _ => Err(SkirmishError::UnknownCommand {
            line,
            keyword: keyword.to_string(),
        }),
    }
}

fn parse_args<const N: usize>(line: usize, command: &str, args: &[&str]) -> Result<[u32; N]> {
    if args.len() != N {
        return Err(SkirmishError::WrongArgumentCount {
            line,
            command: command.to_string(),
            expected: N,
            got: args.len(),
        });
    }
    let mut values = [0u32; N];
    for (value, token) in values.iter_mut().zip(args) {
        *value = token.parse().map_err(|_| SkirmishError::InvalidArgument {
            line,
            token: (*token).to_string(),
        })?;
    }
    Ok(values)
}
