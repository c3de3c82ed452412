//! Which characters get elided, and which way the transform runs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the compressing transform removes from the text.
///
/// Compression and decompression must use the same policy; a blob carries no
/// record of the policy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Drop the final letter of each word.
    Letter,
    /// Drop the whitespace between adjacent words.
    Space,
    /// Both removals in one pass.
    Combined,
}

impl RetentionPolicy {
    pub const ALL: [RetentionPolicy; 3] = [
        RetentionPolicy::Letter,
        RetentionPolicy::Space,
        RetentionPolicy::Combined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionPolicy::Letter => "letter",
            RetentionPolicy::Space => "space",
            RetentionPolicy::Combined => "combined",
        }
    }
}

impl fmt::Display for RetentionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy '{0}' (expected letter, space, or combined)")]
pub struct ParsePolicyError(String);

impl FromStr for RetentionPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "letter" => Ok(RetentionPolicy::Letter),
            "space" => Ok(RetentionPolicy::Space),
            "combined" => Ok(RetentionPolicy::Combined),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

/// Transform direction: strip on the compression side, restore on the
/// decompression side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Strip,
    Restore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("letter".parse(), Ok(RetentionPolicy::Letter));
        assert_eq!("space".parse(), Ok(RetentionPolicy::Space));
        assert_eq!("combined".parse(), Ok(RetentionPolicy::Combined));
    }

    #[test]
    fn test_policy_parse_unknown() {
        let err = "vowels".parse::<RetentionPolicy>().unwrap_err();
        assert!(err.to_string().contains("vowels"));
    }

    #[test]
    fn test_policy_display_roundtrip() {
        for policy in RetentionPolicy::ALL {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
    }
}
