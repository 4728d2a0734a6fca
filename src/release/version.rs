//! Release version grammar and dev-build normalization
//!
//! A release version string takes one of three shapes:
//! - final: dot-separated unsigned integers (`9`, `2.1`)
//! - old dev build: `<release>.<build>-dev` (`9.1-dev`)
//! - new dev build: `<release>+dev.<build>` (`9+dev.1`)
//!
//! `9.1-dev` and `9+dev.1` name the same build of release `9`.
//!
//! Numbers keep the digits they were written with, so rendering a parsed
//! version reproduces its input and arbitrarily long numbers are accepted.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static FINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)*)$").unwrap());

static OLD_DEV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)*)\.([0-9]+)-dev$").unwrap());

static NEW_DEV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)*)\+dev\.([0-9]+)$").unwrap());

/// Unsigned number as written in a version string
///
/// Equality and ordering are numeric (`01 == 1`, `9 < 10`); `Display` keeps
/// the original digits.
#[derive(Debug, Clone)]
pub struct Segment(String);

impl Segment {
    fn new(digits: &str) -> Self {
        Self(digits.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits without leading zeros; zero is the empty string
    fn significant(&self) -> &str {
        self.0.trim_start_matches('0')
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right) = (self.significant(), other.significant());
        left.len().cmp(&right.len()).then_with(|| left.cmp(right))
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Textual encoding of a dev build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DevNotation {
    /// `9.1-dev`
    Old,
    /// `9+dev.1`
    New,
}

impl DevNotation {
    pub fn flip(self) -> Self {
        match self {
            DevNotation::Old => DevNotation::New,
            DevNotation::New => DevNotation::Old,
        }
    }
}

/// A parsed release version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionForm {
    Final {
        release: Vec<Segment>,
    },
    DevBuild {
        release: Vec<Segment>,
        build: Segment,
        notation: DevNotation,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid release version: {0}")]
pub struct InvalidVersion(pub String);

impl VersionForm {
    /// Classify a version string, or `None` if it matches none of the shapes.
    pub fn parse(version: &str) -> Option<Self> {
        if let Some(caps) = FINAL_RE.captures(version) {
            return Some(VersionForm::Final {
                release: parse_segments(&caps[1]),
            });
        }

        let (caps, notation) = if let Some(caps) = OLD_DEV_RE.captures(version) {
            (caps, DevNotation::Old)
        } else if let Some(caps) = NEW_DEV_RE.captures(version) {
            (caps, DevNotation::New)
        } else {
            return None;
        };

        Some(VersionForm::DevBuild {
            release: parse_segments(&caps[1]),
            build: Segment::new(&caps[2]),
            notation,
        })
    }

    pub fn release(&self) -> &[Segment] {
        match self {
            VersionForm::Final { release } | VersionForm::DevBuild { release, .. } => release,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, VersionForm::DevBuild { .. })
    }

    /// The same dev build in the other notation. Final versions have none.
    pub fn alternate(&self) -> Option<Self> {
        match self {
            VersionForm::Final { .. } => None,
            VersionForm::DevBuild {
                release,
                build,
                notation,
            } => Some(VersionForm::DevBuild {
                release: release.clone(),
                build: build.clone(),
                notation: notation.flip(),
            }),
        }
    }

    /// Whether both are dev builds naming the same build of the same release,
    /// in any notation and with any leading zeros.
    pub fn same_build(&self, other: &VersionForm) -> bool {
        match (self, other) {
            (
                VersionForm::DevBuild {
                    release: left_release,
                    build: left_build,
                    ..
                },
                VersionForm::DevBuild {
                    release: right_release,
                    build: right_build,
                    ..
                },
            ) => left_release == right_release && left_build == right_build,
            _ => false,
        }
    }
}

impl FromStr for VersionForm {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionForm::parse(s).ok_or_else(|| InvalidVersion(s.to_string()))
    }
}

impl fmt::Display for VersionForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionForm::Final { release } => write!(f, "{}", join_segments(release)),
            VersionForm::DevBuild {
                release,
                build,
                notation: DevNotation::Old,
            } => write!(f, "{}.{}-dev", join_segments(release), build),
            VersionForm::DevBuild {
                release,
                build,
                notation: DevNotation::New,
            } => write!(f, "{}+dev.{}", join_segments(release), build),
        }
    }
}

/// Rewrite a dev version in its other notation.
///
/// Returns `None` for final versions and for strings that are not versions.
pub fn normalize(version: &str) -> Option<String> {
    VersionForm::parse(version)?
        .alternate()
        .map(|alt| alt.to_string())
}

fn parse_segments(release: &str) -> Vec<Segment> {
    release.split('.').map(Segment::new).collect()
}

fn join_segments(release: &[Segment]) -> String {
    release
        .iter()
        .map(Segment::as_str)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn segments(digits: &[&str]) -> Vec<Segment> {
        digits.iter().map(|d| Segment::new(d)).collect()
    }

    #[rstest]
    #[case("9", VersionForm::Final { release: segments(&["9"]) })]
    #[case("2.1", VersionForm::Final { release: segments(&["2", "1"]) })]
    #[case("18446744073709551616", VersionForm::Final { release: segments(&["18446744073709551616"]) })]
    #[case("9.1-dev", VersionForm::DevBuild { release: segments(&["9"]), build: Segment::new("1"), notation: DevNotation::Old })]
    #[case("9.1.3-dev", VersionForm::DevBuild { release: segments(&["9", "1"]), build: Segment::new("3"), notation: DevNotation::Old })]
    #[case("9+dev.2", VersionForm::DevBuild { release: segments(&["9"]), build: Segment::new("2"), notation: DevNotation::New })]
    #[case("9.1+dev.4", VersionForm::DevBuild { release: segments(&["9", "1"]), build: Segment::new("4"), notation: DevNotation::New })]
    fn parse_recognizes_valid_shapes(#[case] input: &str, #[case] expected: VersionForm) {
        assert_eq!(VersionForm::parse(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("1+2+3")]
    #[case("9-dev")]
    #[case("9+dev")]
    #[case("9+dev.1+dev.2")]
    #[case("v9")]
    #[case("9.")]
    #[case(".9")]
    #[case("-1")]
    #[case(" 9")]
    #[case("9.1-DEV")]
    #[case("٩")] // non-ASCII digit
    fn parse_rejects_invalid_strings(#[case] input: &str) {
        assert_eq!(VersionForm::parse(input), None);
        assert!(input.parse::<VersionForm>().is_err());
    }

    #[rstest]
    #[case("9.1-dev", "9+dev.1")]
    #[case("9+dev.2", "9.2-dev")]
    #[case("9.1.3-dev", "9.1+dev.3")]
    #[case("1.2+dev.10", "1.2.10-dev")]
    #[case("9.01-dev", "9+dev.01")]
    #[case("007+dev.0", "007.0-dev")]
    fn normalize_switches_dev_notation(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), Some(expected.to_string()));
    }

    #[rstest]
    #[case("9.1-dev")]
    #[case("9+dev.2")]
    #[case("3.14.15+dev.92")]
    #[case("9.01-dev")]
    #[case("18446744073709551616+dev.18446744073709551617")]
    fn normalize_is_an_involution_on_dev_versions(#[case] input: &str) {
        let once = normalize(input).unwrap();
        assert_ne!(once, input);
        assert_eq!(normalize(&once), Some(input.to_string()));
    }

    #[rstest]
    #[case("9")]
    #[case("2.1")]
    #[case("18446744073709551616")]
    #[case("1+2+3")]
    #[case("garbage")]
    fn normalize_returns_none_without_dev_counterpart(#[case] input: &str) {
        assert_eq!(normalize(input), None);
    }

    #[rstest]
    #[case("9")]
    #[case("2.1")]
    #[case("9.1-dev")]
    #[case("9+dev.2")]
    #[case("09.010-dev")]
    fn display_renders_original_text(#[case] input: &str) {
        assert_eq!(VersionForm::parse(input).unwrap().to_string(), input);
    }

    #[rstest]
    #[case("1", "01", Ordering::Equal)]
    #[case("0", "000", Ordering::Equal)]
    #[case("9", "10", Ordering::Less)]
    #[case("010", "9", Ordering::Greater)]
    #[case("18446744073709551615", "18446744073709551616", Ordering::Less)]
    fn segments_compare_numerically(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(Segment::new(a).cmp(&Segment::new(b)), expected);
        assert_eq!(Segment::new(a) == Segment::new(b), expected == Ordering::Equal);
    }

    #[rstest]
    #[case("9.1-dev", "9+dev.1", true)]
    #[case("9.01-dev", "9+dev.1", true)]
    #[case("09.1-dev", "9.1-dev", true)]
    #[case("9.1-dev", "9+dev.2", false)]
    #[case("9.1-dev", "9.1", false)]
    #[case("9", "9", false)]
    fn same_build_ignores_notation_and_leading_zeros(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: bool,
    ) {
        let (a, b) = (VersionForm::parse(a).unwrap(), VersionForm::parse(b).unwrap());
        assert_eq!(a.same_build(&b), expected);
    }

    #[test]
    fn alternate_keeps_release_and_build() {
        let form = VersionForm::parse("4.2-dev").unwrap();
        let alt = form.alternate().unwrap();

        assert_eq!(alt.release(), form.release());
        assert!(alt.is_dev());
        assert_eq!(alt.alternate(), Some(form));
    }
}
