pub mod matrix;
pub mod rank;

/// Canonical heatmap column axis: the 20 standard amino acids.
pub const AMINO_ACIDS: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y',
];

/// A parsed point-mutation token: `<wild type><position><substitution>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationCode {
    pub wild_type: char,
    pub position: u32,
    pub substitution: char,
}

impl MutationCode {
    /// Parse a mutation token such as `M1A`.
    ///
    /// Returns `None` unless the token has an alphabetic first and last
    /// character, an all-digit middle parsing to a positive integer, and a
    /// substitution that differs from the wild type. Residue letters are
    /// normalized to uppercase.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.len() < 3 || !token.is_ascii() {
            return None;
        }
        let bytes = token.as_bytes();
        let wild_type = bytes[0] as char;
        let substitution = bytes[token.len() - 1] as char;
        if !wild_type.is_ascii_alphabetic() || !substitution.is_ascii_alphabetic() {
            return None;
        }
        let middle = &token[1..token.len() - 1];
        if !middle.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let position: u32 = middle.parse().ok()?;
        if position == 0 {
            return None;
        }
        let wild_type = wild_type.to_ascii_uppercase();
        let substitution = substitution.to_ascii_uppercase();
        if wild_type == substitution {
            return None;
        }
        Some(Self {
            wild_type,
            position,
            substitution,
        })
    }
}

/// A scored mutation annotated with its competition rank and decile bin.
#[derive(Debug, Clone)]
pub struct RankedRow {
    pub code: MutationCode,
    /// The mutation token exactly as it appeared in the results table.
    pub raw: String,
    pub score: f64,
    /// 1 = most favorable; ties share the minimum rank of the tie group.
    pub rank: u32,
    /// Decile bin in [1, 10]; 10 = most favorable.
    pub bin: u8,
}
