use std::{fmt, str::FromStr};

use crate::BoardError;

/// A rectangular ASCII-art pattern, `X` for alive and anything else for dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let mut rows: Vec<Vec<bool>> = vec![];
        for (index, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let row: Vec<bool> = line.chars().map(|c| c == 'X').collect();
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(BoardError::Format {
                        line: index + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }
        let width = rows.first().map(Vec::len).unwrap_or_default();
        Ok(Self { width, rows })
    }

    pub fn named(name: &str) -> Result<Self, BoardError> {
        let text = LIBRARY
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, text)| *text)
            .ok_or_else(|| BoardError::UnknownPattern(name.to_string()))?;
        Self::parse(text)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        LIBRARY.iter().map(|(name, _)| *name)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// iterates over every cell as `(x, y, alive)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &alive)| (x, y, alive))
        })
    }
}

impl FromStr for Pattern {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                write!(f, "{}", if alive { 'X' } else { '-' })?;
            }
        }
        Ok(())
    }
}

const LIBRARY: &[(&str, &str)] = &[
    ("block", "----\n-XX-\n-XX-\n----"),
    ("blinker", "---\nXXX\n---"),
    ("toad", "------\n------\n--XXX-\n-XXX--\n------\n------"),
    ("glider", "-X-\n--X\nXXX"),
    ("spaceship", "--XX-\n-XXXX\nXX-XX\n-XX--"),
    (
        "glider-gun",
        "-------------------------X----------\n\
         ----------------------XXXX----X-----\n\
         -------------X-------XXXX-----X-----\n\
         ------------X-X------X--X---------XX\n\
         -----------X---XX----XXXX---------XX\n\
         XX---------X---XX-----XXXX----------\n\
         XX---------X---XX--------X----------\n\
         ------------X-X---------------------\n\
         -------------X----------------------",
    ),
];
