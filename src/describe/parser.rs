use std::sync::OnceLock;

use log::warn;
use regex::Regex;

/// `-<count>-g<7 hex>` at the very end of a describe label.
const COMMIT_COUNT_PATTERN: &str = r"-(\d+)-g[0-9a-fA-F]{7}$";

fn commit_count_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COMMIT_COUNT_PATTERN).expect("valid commit count pattern"))
}

pub fn compose_label(prefix: &str, raw: &str, suffix: &str) -> String {
    format!("{prefix}{raw}{suffix}")
}

/// Number of commits since the tag, as the digit string found in `label`.
/// Falls back to `fail_output` when the label carries no count.
pub fn commit_count(label: &str, fail_output: &str) -> String {
    match commit_count_regex().captures(label).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().to_string(),
        None => {
            warn!("No commit count in '{label}', using '{fail_output}'");
            fail_output.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_count() {
        assert_eq!(commit_count("git-1.2.3-14-gabc1234", "unknown"), "14");
        assert_eq!(commit_count("git-v2-0-g0000000", "unknown"), "0");
    }

    #[test]
    fn count_is_opaque_digits() {
        let label = "git-v1-000123456789012345678901234567890-gdeadbee";
        assert_eq!(commit_count(label, "unknown"), "000123456789012345678901234567890");
    }

    #[test]
    fn no_count_gives_fail_output() {
        assert_eq!(commit_count("git-unknown", "unknown"), "unknown");
        assert_eq!(commit_count("git-v1.0", "n/a"), "n/a");
        assert_eq!(commit_count("git-\"abc1234\"", "unknown"), "unknown");
    }

    #[test]
    fn must_be_anchored_at_end() {
        assert_eq!(commit_count("git-1.0-3-gabc1234-dirty", "unknown"), "unknown");
        assert_eq!(commit_count("git-1.0-3-gabc1234-SNAPSHOT", "x"), "x");
    }

    #[test]
    fn hash_must_be_seven_hex() {
        assert_eq!(commit_count("git-1.0-3-gabc123", "x"), "x");
        assert_eq!(commit_count("git-1.0-3-gabc12345", "x"), "x");
        assert_eq!(commit_count("git-1.0-3-gxyz1234", "x"), "x");
    }

    #[test]
    fn compose() {
        assert_eq!(compose_label("git-", "v1.0", "-b"), "git-v1.0-b");
        assert_eq!(compose_label("", "v1.0", ""), "v1.0");
    }
}
