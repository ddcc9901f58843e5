/// A field annotation split into its binding key and modifiers.
///
/// `"symbol,omitempty"` has the key `symbol` and one modifier, `omitempty`.
/// Modifiers are carried for inspection; binding ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagValue<'a> {
    raw: &'a str,
    key: &'a str,
    rest: &'a str,
    separator: char,
}

impl<'a> TagValue<'a> {
    /// Splits `raw` at the first `separator`.
    pub fn parse(raw: &'a str, separator: char) -> Self {
        let (key, rest) = raw.split_once(separator).unwrap_or((raw, ""));
        Self {
            raw,
            key,
            rest,
            separator,
        }
    }

    /// The annotation as written.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Text before the first separator; may be empty.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Non-empty modifiers after the key, in order.
    pub fn modifiers(self) -> impl Iterator<Item = &'a str> {
        self.rest.split(self.separator).filter(|m| !m.is_empty())
    }

    /// Returns true if `modifier` follows the key.
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers().any(|m| m == modifier)
    }

    /// Returns true if the whole annotation equals `sentinel`.
    pub fn is_excluded(&self, sentinel: &str) -> bool {
        self.raw == sentinel
    }
}
