use std::fmt;

/// Precondition violations the validating `try_*` entry points can
/// report. The unchecked entry points skip this check entirely and are
/// undefined on the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewError {
    /// A symbol inside `[0, n)` was zero; the alphabet must be `[1, n]`.
    ZeroSymbol {
        /// Position of the offending symbol.
        position: usize,
    },
    /// A symbol inside `[0, n)` exceeded `n`, the largest name the
    /// recursive construction can assign.
    SymbolTooLarge {
        /// Position of the offending symbol.
        position: usize,
        /// The offending symbol's value.
        symbol: u32,
        /// The input length `n`, the largest permitted symbol value.
        bound: usize,
    },
}

impl fmt::Display for SkewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkewError::ZeroSymbol { position } => {
                write!(f, "symbol at position {position} is zero; alphabet must be [1, n]")
            }
            SkewError::SymbolTooLarge {
                position,
                symbol,
                bound,
            } => write!(
                f,
                "symbol {symbol} at position {position} exceeds the alphabet bound {bound}"
            ),
        }
    }
}

impl std::error::Error for SkewError {}

/// Checks that every symbol in `s` lies in `[1, s.len()]`.
pub fn validate_alphabet(s: &[u32]) -> Result<(), SkewError> {
    let bound = s.len();
    for (position, &symbol) in s.iter().enumerate() {
        if symbol == 0 {
            return Err(SkewError::ZeroSymbol { position });
        }
        if symbol as usize > bound {
            return Err(SkewError::SymbolTooLarge {
                position,
                symbol,
                bound,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_alphabet() {
        assert_eq!(validate_alphabet(&[1, 2, 3]), Ok(()));
        assert_eq!(validate_alphabet(&[]), Ok(()));
    }

    #[test]
    fn rejects_zero_symbol() {
        assert_eq!(
            validate_alphabet(&[1, 0, 2]),
            Err(SkewError::ZeroSymbol { position: 1 })
        );
    }

    #[test]
    fn rejects_symbol_above_bound() {
        assert_eq!(
            validate_alphabet(&[1, 2, 4]),
            Err(SkewError::SymbolTooLarge {
                position: 2,
                symbol: 4,
                bound: 3
            })
        );
    }
}
