use std::fmt;

use crate::tree::tree_model::Bounds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundsParseError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for BoundsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bounds '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for BoundsParseError {}

/// Strict parse of `"[x1,y1][x2,y2]"`.
pub fn try_parse_bounds(s: &str) -> Result<Bounds, BoundsParseError> {
    let fail = |reason| BoundsParseError {
        input: s.to_string(),
        reason,
    };

    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| fail("missing brackets"))?;

    let corners: Vec<&str> = inner.split("][").collect();
    if corners.len() != 2 {
        return Err(fail("expected two corners"));
    }

    let mut coords = [0i32; 4];
    let mut slot = 0;
    for corner in corners {
        let parts: Vec<&str> = corner.split(',').collect();
        if parts.len() != 2 {
            return Err(fail("expected two coordinates per corner"));
        }
        for part in parts {
            coords[slot] = part
                .trim()
                .parse::<i32>()
                .map_err(|_| fail("non-numeric coordinate"))?;
            slot += 1;
        }
    }

    Ok(Bounds::from(coords))
}

/// Lenient parse: malformed input becomes a zero rectangle, which geometry filters drop.
pub fn parse_bounds(s: &str) -> Bounds {
    if s.trim().is_empty() {
        log::debug!("node has no bounds, treating as zero-area");
        return Bounds::ZERO;
    }

    match try_parse_bounds(s) {
        Ok(bounds) => bounds,
        Err(e) => {
            log::warn!("{}", e);
            Bounds::ZERO
        }
    }
}

pub fn format_bounds(b: &Bounds) -> String {
    format!("[{},{}][{},{}]", b.x1, b.y1, b.x2, b.y2)
}
