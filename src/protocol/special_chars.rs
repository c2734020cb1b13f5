//! # Special Characters
//!
//! Placeholder names usable in text content as `{name}`, mapped to the raw
//! bytes the printer needs for glyphs outside plain ASCII.
//!
//! Byte values are for code page PC858 (PC850 with the euro sign at 0xD5),
//! the factory default on most 80mm ESC/POS printers sold in Europe.
//!
//! ```
//! use posprint::protocol::special_chars;
//!
//! assert_eq!(special_chars::lookup("euro"), Some(&[0xD5][..]));
//! assert_eq!(special_chars::lookup("nope"), None);
//! ```

/// Every recognised placeholder name with its substitute bytes.
const TABLE: &[(&str, &[u8])] = &[
    // Currency
    ("euro", &[0xD5]),
    ("pound", &[0x9C]),
    ("yen", &[0x9D]),
    ("cent", &[0x9B]),
    // Symbols
    ("degree", &[0xF8]),
    ("plusminus", &[0xF1]),
    ("half", &[0xAB]),
    ("quarter", &[0xAC]),
    ("section", &[0xF5]),
    ("copyright", &[0xB8]),
    ("registered", &[0xA9]),
    ("micro", &[0xE6]),
    // Accented letters
    ("ntilde", &[0xA4]),
    ("Ntilde", &[0xA5]),
    ("eacute", &[0x82]),
    ("Eacute", &[0x90]),
    ("aacute", &[0xA0]),
    ("iacute", &[0xA1]),
    ("oacute", &[0xA2]),
    ("uacute", &[0xA3]),
    ("uuml", &[0x81]),
    ("Uuml", &[0x9A]),
    ("ouml", &[0x94]),
    ("Ouml", &[0x99]),
    ("auml", &[0x84]),
    ("Auml", &[0x8E]),
    ("szlig", &[0xE1]),
    ("ccedil", &[0x87]),
    ("Ccedil", &[0x80]),
    // Punctuation
    ("iexcl", &[0xAD]),
    ("iquest", &[0xA8]),
    // Blocks
    ("block", &[0xDB]),
    ("shade", &[0xB1]),
];

/// Look up the substitute bytes for a placeholder name.
///
/// Names are case-sensitive (`ntilde` and `Ntilde` differ).
pub fn lookup(name: &str) -> Option<&'static [u8]> {
    TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, bytes)| *bytes)
}

/// All recognised placeholder names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_currency() {
        assert_eq!(lookup("euro"), Some(&[0xD5][..]));
        assert_eq!(lookup("pound"), Some(&[0x9C][..]));
        assert_eq!(lookup("yen"), Some(&[0x9D][..]));
    }

    #[test]
    fn test_lookup_case_sensitive() {
        assert_eq!(lookup("ntilde"), Some(&[0xA4][..]));
        assert_eq!(lookup("Ntilde"), Some(&[0xA5][..]));
        assert_eq!(lookup("EURO"), None);
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("unknown"), None);
    }

    #[test]
    fn test_names_unique() {
        let all: Vec<_> = names().collect();
        for (i, name) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(name), "duplicate name {}", name);
        }
    }

    #[test]
    fn test_every_name_resolves() {
        for name in names() {
            let bytes = lookup(name).unwrap();
            assert!(!bytes.is_empty());
            // Substitutes live in the upper half of the code page
            assert!(bytes.iter().all(|&b| b >= 0x80), "{} maps into ASCII", name);
        }
    }
}
