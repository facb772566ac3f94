//! Plain-text body descriptors
//!
//! The text format is a stream of whitespace-separated tokens, five per body:
//!
//! ```text
//! S Sun   0 0 0
//! P Earth 3 0 0
//! ```
//!
//! The kind token is read by its first character (`P` planet, `S` star), so
//! `Planet` and `Star` work too. Line breaks carry no meaning. Coordinates
//! are integers of magnitude at most [`MAX_COORDINATE`].

use crate::error::{SimError, SimResult};
use crate::simulation::body::{Body, BodyKind};
use crate::simulation::space_point::{SpacePoint, MAX_COORDINATE};

const FIELDS_PER_RECORD: usize = 5;

/// One `(kind, name, x, y, z)` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyDescriptor {
    pub kind: BodyKind,
    pub name: String,
    pub position: SpacePoint,
}

impl BodyDescriptor {
    /// Validates the descriptor into a [`Body`]
    pub fn into_body(self) -> SimResult<Body> {
        Body::new(self.kind, self.name, self.position)
    }
}

fn parse_kind(record: usize, token: &str) -> SimResult<BodyKind> {
    match token.chars().next() {
        Some('P') => Ok(BodyKind::Planet),
        Some('S') => Ok(BodyKind::Star),
        _ => Err(SimError::UnknownKind {
            record,
            token: token.to_string(),
        }),
    }
}

// Out-of-range values are as invalid as non-numbers
fn parse_coordinate(record: usize, axis: char, token: &str) -> SimResult<i64> {
    match token.parse::<i64>() {
        Ok(c) if c.unsigned_abs() <= MAX_COORDINATE as u64 => Ok(c),
        _ => Err(SimError::InvalidCoordinate {
            record,
            axis,
            token: token.to_string(),
        }),
    }
}

/// Parses every record of `text`
///
/// Records are numbered from 1 in error messages.
pub fn parse_descriptors(text: &str) -> SimResult<Vec<BodyDescriptor>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out = Vec::with_capacity(tokens.len() / FIELDS_PER_RECORD);

    for (i, chunk) in tokens.chunks(FIELDS_PER_RECORD).enumerate() {
        let record = i + 1;
        let [kind, name, x, y, z] = chunk else {
            return Err(SimError::TruncatedRecord {
                record,
                found: chunk.len(),
            });
        };

        out.push(BodyDescriptor {
            kind: parse_kind(record, kind)?,
            name: name.to_string(),
            position: SpacePoint::new(
                parse_coordinate(record, 'x', x)?,
                parse_coordinate(record, 'y', y)?,
                parse_coordinate(record, 'z', z)?,
            ),
        });
    }

    Ok(out)
}
