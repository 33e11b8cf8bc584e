//! Heading depth normalization.
//!
//! reStructuredText infers section nesting from the order in which underline
//! symbols first appear, so a heading may never skip a level. Requests that
//! jump more than one level deeper are pulled back to the next level.

/// Underline symbols by depth; index 0 is depth 1.
pub const HEADING_SYMBOLS: [char; 7] = ['=', '-', '\'', '.', '*', '+', '^'];

/// Deepest heading depth that has a symbol.
pub const MAX_DEPTH: u8 = HEADING_SYMBOLS.len() as u8;

/// Symbol for a depth, clamped to `1..=MAX_DEPTH`.
pub fn symbol_for(depth: u8) -> char {
    let depth = depth.clamp(1, MAX_DEPTH);
    HEADING_SYMBOLS[depth as usize - 1]
}

/// `symbol` repeated to the character length of `text`.
pub fn underline(text: &str, symbol: char) -> String {
    std::iter::repeat(symbol).take(text.chars().count()).collect()
}

/// Outcome of one heading request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLevel {
    /// Depth actually used
    pub depth: u8,
    /// Underline symbol for that depth
    pub symbol: char,
    /// Whether the requested level was honored as given
    pub honored: bool,
}

/// Current heading depth for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingState {
    current: u8,
}

impl HeadingState {
    /// Create a state with no heading emitted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current depth (0 before the first heading).
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Resolve the depth for a requested level and advance the state.
    ///
    /// Any level up to one deeper than the current depth is honored; deeper
    /// requests advance by exactly one level. Level 0 is read as 1. A level
    /// clamped to [`MAX_DEPTH`] is reported as not honored.
    pub fn next(&mut self, requested: u8) -> HeadingLevel {
        let requested = requested.max(1);
        let honored = requested <= self.current.saturating_add(1);
        let depth = if honored {
            requested
        } else {
            self.current + 1
        };

        if depth > MAX_DEPTH {
            log::debug!("Heading depth {} clamped to {}", depth, MAX_DEPTH);
        }
        self.current = depth.min(MAX_DEPTH);

        HeadingLevel {
            depth: self.current,
            symbol: symbol_for(self.current),
            honored: honored && depth <= MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn realize(requests: &[u8]) -> (Vec<u8>, Vec<char>) {
        let mut state = HeadingState::new();
        requests
            .iter()
            .map(|&r| {
                let level = state.next(r);
                (level.depth, level.symbol)
            })
            .unzip()
    }

    #[test]
    fn test_skipped_level_is_pulled_back() {
        let (depths, symbols) = realize(&[1, 3, 2]);
        assert_eq!(depths, vec![1, 2, 2]);
        assert_eq!(symbols, vec!['=', '-', '-']);
    }

    #[test]
    fn test_sequential_levels_are_honored() {
        let (depths, symbols) = realize(&[1, 2, 3, 4]);
        assert_eq!(depths, vec![1, 2, 3, 4]);
        assert_eq!(symbols, vec!['=', '-', '\'', '.']);
    }

    #[test]
    fn test_shallower_level_always_allowed() {
        let (depths, _) = realize(&[1, 2, 3, 1, 2]);
        assert_eq!(depths, vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_first_heading_deep_request() {
        let mut state = HeadingState::new();
        let level = state.next(5);
        assert_eq!(level.depth, 1);
        assert!(!level.honored);
    }

    #[test]
    fn test_depth_never_exceeds_ceiling() {
        let mut state = HeadingState::new();
        for _ in 0..50 {
            let level = state.next(u8::MAX);
            assert!(level.depth <= MAX_DEPTH);
            assert!(HEADING_SYMBOLS.contains(&level.symbol));
        }
        assert_eq!(state.current(), MAX_DEPTH);

        // Stepping one deeper from the ceiling stays at the ceiling
        let level = state.next(MAX_DEPTH + 1);
        assert_eq!(level.depth, MAX_DEPTH);
        assert_eq!(level.symbol, '^');
        assert!(!level.honored);

        // The ceiling itself is still honored
        assert!(state.next(MAX_DEPTH).honored);
    }

    #[test]
    fn test_level_zero_reads_as_one() {
        let mut state = HeadingState::new();
        assert_eq!(state.next(0).depth, 1);
    }

    #[test]
    fn test_underline_counts_chars() {
        assert_eq!(underline("Intro", '='), "=====");
        assert_eq!(underline("Über", '-'), "----");
        assert_eq!(underline("", '-'), "");
    }
}
