/*!
# Vertex Labels

Input tokens are free text. If *every* label across both edge blocks is a
non-negative integer literal, the whole key space is promoted to integers and
sorted numerically; otherwise all labels stay text and sort lexicographically.
The two kinds never coexist within one graph instance.
*/

use std::fmt::{Debug, Display};

/// Parses `token` as a promotable integer literal.
///
/// A token qualifies iff it consists only of decimal digits and carries no
/// leading zero (`"0"` itself is allowed). Signed, decimal, empty, or
/// overlong (not fitting `u64`) tokens do not qualify.
pub fn parse_numeric(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token != "0" && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

/// A vertex label, either promoted to an integer or kept as text.
///
/// The derived `Ord` compares `Int` numerically and `Text` lexicographically;
/// since any one graph is homogeneous in kind, the cross-kind ordering is
/// never observed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexLabel {
    Int(u64),
    Text(String),
}

impl VertexLabel {
    /// Interns a raw token, promoting it to `Int` only when the surrounding
    /// graph was classified as all-numeric.
    pub fn of_token(token: &str, numeric: bool) -> Self {
        if numeric {
            if let Some(value) = parse_numeric(token) {
                return VertexLabel::Int(value);
            }
        }
        VertexLabel::Text(token.to_owned())
    }
}

impl Display for VertexLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexLabel::Int(value) => write!(f, "{value}"),
            VertexLabel::Text(token) => f.write_str(token),
        }
    }
}

impl Debug for VertexLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numeric_literals() {
        assert_eq!(parse_numeric("0"), Some(0));
        assert_eq!(parse_numeric("7"), Some(7));
        assert_eq!(parse_numeric("123"), Some(123));

        // leading zeros, signs, decimals and empty tokens all stay text
        assert_eq!(parse_numeric("01"), None);
        assert_eq!(parse_numeric("007"), None);
        assert_eq!(parse_numeric("-1"), None);
        assert_eq!(parse_numeric("1.5"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("a1"), None);
    }

    #[test]
    fn label_ordering() {
        let mut ints = vec![
            VertexLabel::Int(10),
            VertexLabel::Int(2),
            VertexLabel::Int(1),
        ];
        ints.sort();
        assert_eq!(ints, vec![
            VertexLabel::Int(1),
            VertexLabel::Int(2),
            VertexLabel::Int(10),
        ]);

        let mut texts = vec![
            VertexLabel::Text("10".into()),
            VertexLabel::Text("2".into()),
            VertexLabel::Text("b".into()),
        ];
        texts.sort();
        assert_eq!(texts, vec![
            VertexLabel::Text("10".into()),
            VertexLabel::Text("2".into()),
            VertexLabel::Text("b".into()),
        ]);
    }
}
