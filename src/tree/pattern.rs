use crate::error::BuildError;

use smallvec::SmallVec;

const STAR: char = '*';
const COLON: char = ':';
const SLASH: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
    Wildcard(&'a str),
}

pub(super) type Segments<'a> = SmallVec<[Segment<'a>; 8]>;

/// Splits a pattern such as `/u/:uid/file/*path` into segments.
pub(super) fn parse(pattern: &str) -> Result<Segments<'_>, BuildError> {
    if !pattern.starts_with(SLASH) {
        return Err(BuildError::invalid(pattern, "pattern must start with '/'"));
    }

    let parts: SmallVec<[&str; 8]> = pattern[1..].split(SLASH).collect();
    let last = parts.len() - 1;
    let mut segments = Segments::new();

    for (i, &part) in parts.iter().enumerate() {
        let seg = if let Some(name) = part.strip_prefix(STAR) {
            if i != last {
                return Err(BuildError::invalid(
                    pattern,
                    "wildcard pattern can only appear at end",
                ));
            }
            Segment::Wildcard(name)
        } else if let Some(name) = part.strip_prefix(COLON) {
            Segment::Param(name)
        } else {
            Segment::Literal(part)
        };

        if let Segment::Param(name) | Segment::Wildcard(name) = seg {
            if name.is_empty() {
                return Err(BuildError::invalid(pattern, "capture name can not be empty"));
            }
            if capture_names(&segments).any(|n| n == name) {
                return Err(BuildError::invalid(pattern, "capture name is duplicated"));
            }
        }

        segments.push(seg);
    }

    Ok(segments)
}

fn capture_names<'a>(segments: &'a [Segment<'a>]) -> impl Iterator<Item = &'a str> + 'a {
    segments.iter().filter_map(|seg| match *seg {
        Segment::Param(name) | Segment::Wildcard(name) => Some(name),
        Segment::Literal(_) => None,
    })
}

/// Splits a path whose leading slash was already trimmed.
/// `""` (the root path) is one empty segment.
pub(super) fn split_path(path: &str) -> SmallVec<[&str; 8]> {
    path.split(SLASH).collect()
}
