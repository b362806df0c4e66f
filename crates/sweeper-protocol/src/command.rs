//! The client command grammar.
//!
//! Commands are short text lines. The first character picks the verb;
//! arguments, where a verb takes any, follow the first space or comma:
//!
//! ```text
//! ! (3,4)      reveal the cell at x=3, y=4
//! ?,3,4        toggle a flag on the same cell
//! %            toggle the full-board debug view
//! s 16,16,40   restart on a 16x16 board with 40 mines
//! s            restart with the server's default board
//! u            undo the last change
//! ```
//!
//! Parsing is kept apart from execution: a line either becomes a
//! [`Command`] or a [`ProtocolError`], and only a `Command` ever reaches
//! the game.

use crate::ProtocolError;

/// A cell reference as typed by the client.
///
/// Signed, because nothing stops a client from sending `-1`; the board
/// turns that into an out-of-bounds error rather than a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Parameters of an `s` command, unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartParams {
    pub width: i64,
    pub height: i64,
    pub mines: i64,
}

/// A parsed client command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `!`: reveal a cell.
    Reveal(Point),
    /// `?`: add or remove a flag.
    Flag(Point),
    /// `%`: flip the reveal-all debug view.
    ToggleRevealAll,
    /// `s`: start a new game. `None` means the default board.
    Restart(Option<RestartParams>),
    /// `u`: restore the previous undo point.
    Undo,
}

impl Command {
    /// Parses one line of client input.
    ///
    /// Returns `Ok(None)` for the empty string, which the session ignores.
    /// Verbs are case-sensitive; `%` and `u` ignore anything after them.
    pub fn parse(input: &str) -> Result<Option<Self>, ProtocolError> {
        let mut chars = input.chars();
        let Some(verb) = chars.next() else {
            return Ok(None);
        };
        let rest = chars.as_str();

        let command = match verb {
            '!' => Self::Reveal(parse_point(input, rest)?),
            '?' => Self::Flag(parse_point(input, rest)?),
            '%' => Self::ToggleRevealAll,
            'u' => Self::Undo,
            's' if rest.trim().is_empty() => Self::Restart(None),
            's' => {
                let [width, height, mines] = parse_numbers(input, arguments(input, rest)?)?;
                Self::Restart(Some(RestartParams {
                    width,
                    height,
                    mines,
                }))
            }
            _ => return Err(ProtocolError::malformed(input, "unknown command")),
        };
        Ok(Some(command))
    }

    /// `true` for commands that may change the game and therefore save an
    /// undo point before running.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Undo)
    }
}

/// Text after the first space or comma following the verb.
fn arguments<'a>(input: &str, rest: &'a str) -> Result<&'a str, ProtocolError> {
    rest.split_once([' ', ','])
        .map(|(_, args)| args)
        .ok_or_else(|| ProtocolError::malformed(input, "missing arguments"))
}

fn parse_point(input: &str, rest: &str) -> Result<Point, ProtocolError> {
    let [x, y] = parse_numbers(input, arguments(input, rest)?)?;
    Ok(Point { x, y })
}

/// Parses `"(a, b, ...)"`-style text into exactly `N` integers.
/// Parentheses and whitespace are ignored.
fn parse_numbers<const N: usize>(input: &str, args: &str) -> Result<[i64; N], ProtocolError> {
    let cleaned: String = args.chars().filter(|c| !matches!(c, '(' | ')')).collect();

    let values = cleaned
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ProtocolError::malformed(input, "arguments must be integers"))?;

    values
        .try_into()
        .map_err(|_| ProtocolError::malformed(input, "wrong number of arguments"))
}
