use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell state of the one-dimensional automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Symbol {
    #[default]
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::Zero, Symbol::One, Symbol::Two];

    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Symbol::Zero),
            1 => Some(Symbol::One),
            2 => Some(Symbol::Two),
            _ => None,
        }
    }

    #[inline]
    pub fn digit(self) -> u8 {
        self as u8
    }

    /// Next symbol in 0 → 1 → 2 → 0 order. Used by the rule editor.
    pub fn cycle(self) -> Self {
        match self {
            Symbol::Zero => Symbol::One,
            Symbol::One => Symbol::Two,
            Symbol::Two => Symbol::Zero,
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Symbol::from_digit(value).ok_or_else(|| format!("symbol out of range: {value}"))
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.digit()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// The `(left, self, right)` window used as a rule table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighborhood {
    pub left: Symbol,
    pub center: Symbol,
    pub right: Symbol,
}

impl Neighborhood {
    /// Number of distinct neighborhoods over a three-symbol alphabet.
    pub const COUNT: usize = 27;

    pub fn new(left: Symbol, center: Symbol, right: Symbol) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Position in lexicographic order of the digit label ("000" is 0, "222" is 26).
    #[inline]
    pub fn ordinal(&self) -> usize {
        9 * self.left as usize + 3 * self.center as usize + self.right as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal >= Self::COUNT {
            return None;
        }
        let digit = |d: usize| Symbol::ALL[d];
        Some(Self::new(
            digit(ordinal / 9),
            digit((ordinal / 3) % 3),
            digit(ordinal % 3),
        ))
    }

    /// Parses a three-digit label such as `"201"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let bytes = label.as_bytes();
        if bytes.len() != 3 {
            return None;
        }
        let sym = |b: u8| b.checked_sub(b'0').and_then(Symbol::from_digit);
        Some(Self::new(sym(bytes[0])?, sym(bytes[1])?, sym(bytes[2])?))
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// All 27 neighborhoods in canonical order.
    pub fn all() -> impl Iterator<Item = Neighborhood> {
        (0..Self::COUNT).filter_map(Self::from_ordinal)
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.center, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_matches_label_order() {
        let labels: Vec<String> = Neighborhood::all().map(|n| n.label()).collect();
        assert_eq!(labels.len(), 27);
        assert_eq!(labels[0], "000");
        assert_eq!(labels[5], "012");
        assert_eq!(labels[26], "222");
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_label_parsing() {
        let n = Neighborhood::from_label("201").unwrap();
        assert_eq!(n.left, Symbol::Two);
        assert_eq!(n.center, Symbol::Zero);
        assert_eq!(n.right, Symbol::One);
        assert_eq!(n.ordinal(), 19);
        assert!(Neighborhood::from_label("203").is_none());
        assert!(Neighborhood::from_label("20").is_none());
    }

    #[test]
    fn test_symbol_serde_as_digit() {
        let json = serde_json::to_string(&vec![Symbol::Two, Symbol::Zero]).unwrap();
        assert_eq!(json, "[2,0]");
        assert!(serde_json::from_str::<Symbol>("3").is_err());
    }

    #[test]
    fn test_symbol_cycle() {
        assert_eq!(Symbol::Zero.cycle(), Symbol::One);
        assert_eq!(Symbol::Two.cycle(), Symbol::Zero);
    }
}
