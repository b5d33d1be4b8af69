//! IdShort path string → tokens.

use smol_str::SmolStr;

use super::PathError;

/// One addressing step of an idShort path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathToken {
    /// Select a child by idShort (top level or keyed container).
    IdShort(SmolStr),
    /// Select a child by position (ordered container).
    Index(usize),
}

/// Split an idShort path into tokens.
///
/// The path is a `.`-separated list of segments; each segment is an idShort
/// followed by zero or more `[n]` index runs, so `A.B[2][0].C` yields
/// `IdShort(A), IdShort(B), Index(2), Index(0), IdShort(C)`.
pub fn parse_id_short_path(path: &str) -> Result<Vec<PathToken>, PathError> {
    if path.is_empty() {
        return Err(PathError::malformed(path, "path is empty"));
    }

    let mut tokens = Vec::new();

    for segment in path.split('.') {
        let (id_short, mut rest) = match segment.find('[') {
            Some(open) => segment.split_at(open),
            None => (segment, ""),
        };

        if id_short.is_empty() {
            return Err(PathError::malformed(path, "segment without idShort"));
        }
        if id_short.contains(']') {
            return Err(PathError::malformed(path, "closing bracket without opening bracket"));
        }
        tokens.push(PathToken::IdShort(SmolStr::new(id_short)));

        while !rest.is_empty() {
            let close = rest
                .find(']')
                .ok_or_else(|| PathError::malformed(path, "missing closing bracket"))?;
            let inner = &rest[1..close];
            if inner.contains('[') {
                return Err(PathError::malformed(path, "opening bracket inside brackets"));
            }
            if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PathError::malformed(path, "index is not a non-negative integer"));
            }
            let index = inner
                .parse::<usize>()
                .map_err(|_| PathError::malformed(path, "index is out of range"))?;
            tokens.push(PathToken::Index(index));

            rest = &rest[close + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return Err(PathError::malformed(path, "unexpected character after closing bracket"));
            }
        }
    }

    Ok(tokens)
}
