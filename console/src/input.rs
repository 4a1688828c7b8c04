use mnk_engine::Position;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Quit,
}

/// Parses `row col` (space or comma separated) or `q`/`quit`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Invalid row: {}", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Invalid column: {}", col))?;
            Ok(Command::Place(Position::new(row, col)))
        }
        _ => Err("Enter a move as `row col`, or `q` to quit".to_string()),
    }
}

pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated_move() {
        assert_eq!(parse_command("1 2"), Ok(Command::Place(Position::new(1, 2))));
        assert_eq!(parse_command("  0   3 \n"), Ok(Command::Place(Position::new(0, 3))));
    }

    #[test]
    fn test_parse_comma_separated_move() {
        assert_eq!(parse_command("2,1"), Ok(Command::Place(Position::new(2, 1))));
        assert_eq!(parse_command("2, 1"), Ok(Command::Place(Position::new(2, 1))));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT\n"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_command("").is_err());
        assert!(parse_command("1").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("a 2").is_err());
        assert!(parse_command("-1 2").is_err());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("Yes"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}
