//! Algebraic move notation.
//!
//! A move token is `<file><rank><sep><file><rank>`, e.g. `a2-a3` or `b2xc3`.
//! The separator is `-` for a quiet move and `x` for a capture, but it is
//! informational only: both parse to the same from/to pair and legality is
//! decided by the game state. A transcript is a list of tokens joined by `;`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::square::Square;

/// Separator between moves in a transcript.
pub const MOVE_SEPARATOR: &str = ";";

/// A from/to coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl fmt::Display for Move {
    /// Formats the move with the quiet separator, e.g. `a2-a3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | 'x')
}

/// Parses a single move token such as `"a2-a3"` or `"b2xc3"`.
pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    let token = token.trim();
    let chars: Vec<char> = token.chars().collect();

    if !chars.iter().any(|&c| is_separator(c)) {
        return Err(ParseError::MissingSeparator(token.to_string()));
    }
    if chars.len() != 5 {
        return Err(ParseError::InvalidLength(token.to_string()));
    }
    if !is_separator(chars[2]) {
        return Err(ParseError::MissingSeparator(token.to_string()));
    }

    let from = chars[..2].iter().collect::<String>().parse::<Square>()?;
    let to = chars[3..].iter().collect::<String>().parse::<Square>()?;
    Ok(Move::new(from, to))
}

/// Parses a `;`-separated transcript into the moves to replay.
///
/// Whitespace around the line and around each token is ignored, and a blank
/// line yields no moves. Every other token must be a move, so `;;` or a
/// trailing `;` is an error. The first malformed token aborts the whole parse.
pub fn parse_transcript(line: &str) -> Result<Vec<Move>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    line.split(MOVE_SEPARATOR)
        .map(str::trim)
        .enumerate()
        .map(|(index, token)| {
            parse_move(token).map_err(|e| ParseError::Token {
                index,
                token: token.to_string(),
                source: Box::new(e),
            })
        })
        .collect()
}

/// Formats a move token, using `x` as the separator when `capture` is set.
pub fn format_move(mv: Move, capture: bool) -> String {
    let sep = if capture { 'x' } else { '-' };
    format!("{}{sep}{}", mv.from, mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quiet_move() {
        let mv = parse_move("a2-a3").unwrap();
        assert_eq!(mv.from, Square::new(0, 6));
        assert_eq!(mv.to, Square::new(0, 5));
    }

    #[test]
    fn test_separator_does_not_affect_result() {
        assert_eq!(parse_move("b2xc3").unwrap(), parse_move("b2-c3").unwrap());
        assert_eq!(
            parse_move("b2xc3").unwrap(),
            Move::new(Square::new(1, 6), Square::new(2, 5))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_move("a2a3"),
            Err(ParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            parse_move("a2--a3"),
            Err(ParseError::InvalidLength(_))
        ));
        assert!(matches!(parse_move("i2-a3"), Err(ParseError::InvalidFile('i'))));
        assert!(matches!(parse_move("a9-a3"), Err(ParseError::InvalidRank('9'))));
        assert!(matches!(parse_move("a2-a0"), Err(ParseError::InvalidRank('0'))));
        assert!(parse_move("").is_err());
        assert!(parse_move("a-2a3").is_err());
    }

    #[test]
    fn test_from_str() {
        let mv: Move = " h7-h6 ".parse().unwrap();
        assert_eq!(mv, Move::new(Square::new(7, 1), Square::new(7, 2)));
        assert_eq!(mv.to_string(), "h7-h6");
    }

    #[test]
    fn test_parse_transcript() {
        let moves = parse_transcript("a2-a3;b7-b6;a3xb4").unwrap();
        assert_eq!(
            moves,
            vec![
                Move::new(Square::new(0, 6), Square::new(0, 5)),
                Move::new(Square::new(1, 1), Square::new(1, 2)),
                Move::new(Square::new(0, 5), Square::new(1, 4)),
            ]
        );
    }

    #[test]
    fn test_rejects_upper_case() {
        assert!(matches!(parse_move("A2-A3"), Err(ParseError::InvalidFile('A'))));
        assert!(matches!(parse_move("a2-H3"), Err(ParseError::InvalidFile('H'))));
        assert!(matches!(
            parse_move("a2Xa3"),
            Err(ParseError::MissingSeparator(_))
        ));
    }

    #[test]
    fn test_parse_transcript_whitespace() {
        assert!(parse_transcript("").unwrap().is_empty());
        assert!(parse_transcript(" \n").unwrap().is_empty());
        assert_eq!(parse_transcript("  a2-a3 ; b7-b6\n").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_transcript_rejects_empty_token() {
        match parse_transcript("a2-a3;;b7-b6").unwrap_err() {
            ParseError::Token { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "");
            }
            e => panic!("Expected Token error, got {e:?}"),
        }
        match parse_transcript("a2-a3;b7-b6;").unwrap_err() {
            ParseError::Token { index, .. } => assert_eq!(index, 2),
            e => panic!("Expected Token error, got {e:?}"),
        }
    }

    #[test]
    fn test_parse_transcript_reports_token() {
        match parse_transcript("a2-a3;b7b6;a3xb4").unwrap_err() {
            ParseError::Token { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "b7b6");
            }
            e => panic!("Expected Token error, got {e:?}"),
        }
    }

    #[test]
    fn test_format_move() {
        let mv = Move::new(Square::new(1, 6), Square::new(2, 5));
        assert_eq!(format_move(mv, false), "b2-c3");
        assert_eq!(format_move(mv, true), "b2xc3");
    }
}
