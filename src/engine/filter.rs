//! Acceptance Filter - decides whether a candidate character may occupy a cell.
//!
//! Candidates pass through, in order:
//! 1. case fold (optional uppercase)
//! 2. numeric sanitize (`InputKind::Number` drops non-digits)
//! 3. the acceptance rule (single-character pattern, or a char list)
//!
//! Key events can additionally be blocked by raw key code before any
//! character is produced.

use regex::Regex;

use crate::error::ConfigError;
use crate::state::{key_codes, KeyboardEvent};
use crate::types::InputKind;

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "[0-9]";

/// Characters denied by the char-list rule when none are configured.
pub const DEFAULT_FILTER_CHARS: [char; 2] = ['-', '.'];

/// Key codes blocked when none are configured (`-` and `.`).
pub const DEFAULT_FILTER_KEY_CODES: [u16; 2] = [key_codes::MINUS, key_codes::PERIOD];

/// Acceptance rule as configured by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance {
    /// Accept iff the pattern matches the single candidate character.
    Pattern(String),
    /// Accept iff the candidate is absent from `chars` (deny-list) or,
    /// with `allow_list`, present in it.
    Chars { chars: Vec<char>, allow_list: bool },
}

impl Default for Acceptance {
    fn default() -> Self {
        Self::Pattern(DEFAULT_PATTERN.to_string())
    }
}

impl Acceptance {
    /// Deny-list rule with the default `-` and `.` characters.
    pub fn default_deny_list() -> Self {
        Self::Chars {
            chars: DEFAULT_FILTER_CHARS.to_vec(),
            allow_list: false,
        }
    }
}

#[derive(Debug, Clone)]
enum Rule {
    Pattern(Regex),
    Chars { chars: Vec<char>, allow_list: bool },
}

/// Compiled acceptance filter.
#[derive(Debug, Clone)]
pub struct AcceptanceFilter {
    rule: Rule,
    key_codes: Vec<u16>,
    kind: InputKind,
    case_fold: bool,
}

impl AcceptanceFilter {
    /// Compile the rule. Fails on a malformed pattern or an empty allow-list.
    pub fn new(
        acceptance: &Acceptance,
        key_codes: &[u16],
        kind: InputKind,
        case_fold: bool,
    ) -> Result<Self, ConfigError> {
        let rule = match acceptance {
            Acceptance::Pattern(pattern) => {
                let anchored = format!("^(?:{pattern})$");
                let regex = Regex::new(&anchored).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                Rule::Pattern(regex)
            }
            Acceptance::Chars { chars, allow_list } => {
                if *allow_list && chars.is_empty() {
                    return Err(ConfigError::EmptyAllowList);
                }
                Rule::Chars {
                    chars: chars.clone(),
                    allow_list: *allow_list,
                }
            }
        };

        Ok(Self {
            rule,
            key_codes: key_codes.to_vec(),
            kind,
            case_fold,
        })
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Apply the case fold. Characters whose uppercase form is not a
    /// single character (e.g. `ß`) are left alone.
    pub fn fold(&self, c: char) -> char {
        if !self.case_fold {
            return c;
        }
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => c,
        }
    }

    fn passes_rule(&self, c: char) -> bool {
        match &self.rule {
            Rule::Pattern(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(c.encode_utf8(&mut buf))
            }
            Rule::Chars { chars, allow_list } => chars.contains(&c) == *allow_list,
        }
    }

    /// Fold and check one candidate. Returns the character to store.
    pub fn admit(&self, candidate: char) -> Option<char> {
        let c = self.fold(candidate);
        if self.kind == InputKind::Number && !c.is_ascii_digit() {
            return None;
        }
        self.passes_rule(c).then_some(c)
    }

    pub fn accepts(&self, candidate: char) -> bool {
        self.admit(candidate).is_some()
    }

    /// Every admitted character of `text`, in order.
    pub fn sanitize(&self, text: &str) -> Vec<char> {
        text.chars().filter_map(|c| self.admit(c)).collect()
    }

    /// Whether a key event is suppressed before it produces a character.
    pub fn blocks_key(&self, event: &KeyboardEvent) -> bool {
        let Some(code) = event.key_code() else {
            return false;
        };
        if self.key_codes.contains(&code) {
            return true;
        }
        self.kind == InputKind::Number && code == key_codes::E_KEY
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn digits() -> AcceptanceFilter {
        AcceptanceFilter::new(&Acceptance::default(), &DEFAULT_FILTER_KEY_CODES, InputKind::Text, false)
            .unwrap()
    }

    #[test_case('0', true)]
    #[test_case('9', true)]
    #[test_case('A', false)]
    #[test_case('-', false)]
    #[test_case(' ', false)]
    fn test_default_pattern(c: char, accepted: bool) {
        assert_eq!(digits().accepts(c), accepted);
    }

    #[test]
    fn test_pattern_is_anchored_to_one_char() {
        let f = AcceptanceFilter::new(
            &Acceptance::Pattern("[A-Z0-9]".into()),
            &[],
            InputKind::Text,
            false,
        )
        .unwrap();
        assert!(f.accepts('Q'));
        assert!(!f.accepts('q'));
    }

    #[test]
    fn test_case_fold_runs_before_rule() {
        let f = AcceptanceFilter::new(
            &Acceptance::Pattern("[A-Z]".into()),
            &[],
            InputKind::Text,
            true,
        )
        .unwrap();
        assert_eq!(f.admit('q'), Some('Q'));
        assert_eq!(f.fold('ß'), 'ß');
    }

    #[test]
    fn test_deny_list() {
        let f = AcceptanceFilter::new(&Acceptance::default_deny_list(), &[], InputKind::Text, false)
            .unwrap();
        assert!(f.accepts('x'));
        assert!(f.accepts('4'));
        assert!(!f.accepts('-'));
        assert!(!f.accepts('.'));
    }

    #[test]
    fn test_allow_list() {
        let f = AcceptanceFilter::new(
            &Acceptance::Chars {
                chars: vec!['a', 'b'],
                allow_list: true,
            },
            &[],
            InputKind::Text,
            false,
        )
        .unwrap();
        assert!(f.accepts('a'));
        assert!(!f.accepts('c'));
    }

    #[test]
    fn test_number_kind_strips_before_rule() {
        let f = AcceptanceFilter::new(&Acceptance::default_deny_list(), &[], InputKind::Number, false)
            .unwrap();
        assert_eq!(f.sanitize("5a6-7.8e"), vec!['5', '6', '7', '8']);
    }

    #[test]
    fn test_sanitize_with_pattern() {
        assert_eq!(digits().sanitize("56-78"), vec!['5', '6', '7', '8']);
        assert!(digits().sanitize("abc").is_empty());
    }

    #[test]
    fn test_blocks_key_codes() {
        let f = digits();
        assert!(f.blocks_key(&KeyboardEvent::new("-")));
        assert!(f.blocks_key(&KeyboardEvent::new(".")));
        assert!(!f.blocks_key(&KeyboardEvent::new("1")));
        assert!(!f.blocks_key(&KeyboardEvent::new("e")));

        let number = AcceptanceFilter::new(&Acceptance::default(), &[], InputKind::Number, false)
            .unwrap();
        assert!(number.blocks_key(&KeyboardEvent::new("e")));
        assert!(!number.blocks_key(&KeyboardEvent::new("-")));
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = AcceptanceFilter::new(&Acceptance::Pattern("[0-9".into()), &[], InputKind::Text, false)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_allow_list_rejected() {
        let err = AcceptanceFilter::new(
            &Acceptance::Chars {
                chars: vec![],
                allow_list: true,
            },
            &[],
            InputKind::Text,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAllowList));
    }
}
