//! Ordering of release versions and release names

use std::cmp::Ordering;

use crate::release::version::VersionForm;

/// Compare two release version strings.
///
/// Release segments compare numerically, so `3` sorts before `10`. At equal
/// release a final version sorts before its dev builds, and dev builds sort by
/// build number. Both dev notations of the same build compare equal on these
/// keys and fall back to the raw string. Strings that are not versions sort
/// after all versions.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (VersionForm::parse(a), VersionForm::parse(b)) {
        (Some(left), Some(right)) => compare_forms(&left, &right).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn compare_forms(left: &VersionForm, right: &VersionForm) -> Ordering {
    left.release()
        .cmp(right.release())
        .then_with(|| match (left, right) {
            (VersionForm::Final { .. }, VersionForm::Final { .. }) => Ordering::Equal,
            (VersionForm::Final { .. }, VersionForm::DevBuild { .. }) => Ordering::Less,
            (VersionForm::DevBuild { .. }, VersionForm::Final { .. }) => Ordering::Greater,
            (
                VersionForm::DevBuild { build: left, .. },
                VersionForm::DevBuild { build: right, .. },
            ) => left.cmp(right),
        })
}

/// Sort items ascending by the version string `key` extracts.
pub fn sort_versions<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_versions(key(a), key(b)));
}

/// Literal character prefix match. `"1"` matches `"10.2"` as well as `"1.2"`.
pub fn matches_prefix(version: &str, prefix: &str) -> bool {
    version.starts_with(prefix)
}

/// Ordinal comparison of release names: digits before letters, case-sensitive.
pub fn compare_release_names(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", "10", Ordering::Less)]
    #[case("10", "3", Ordering::Greater)]
    #[case("9", "9", Ordering::Equal)]
    #[case("2", "2.1", Ordering::Less)]
    #[case("2.2", "2.10", Ordering::Less)]
    #[case("9", "9+dev.1", Ordering::Less)] // final before dev of same release
    #[case("9", "9.1-dev", Ordering::Less)]
    #[case("9+dev.2", "9.1-dev", Ordering::Greater)] // dev builds by build number
    #[case("9+dev.9", "10", Ordering::Less)]
    #[case("9.2-dev", "9.10-dev", Ordering::Less)]
    #[case("9", "not-a-version", Ordering::Less)]
    #[case("b-invalid", "a-invalid", Ordering::Greater)]
    fn compare_versions_returns_expected(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b), expected);
        assert_eq!(compare_versions(b, a), expected.reverse());
    }

    #[test]
    fn aliases_are_adjacent_and_ordered_deterministically() {
        let mut versions = vec!["9+dev.1", "10", "9.1-dev", "9"];
        sort_versions(&mut versions, |v| *v);

        assert_eq!(versions, vec!["9", "9+dev.1", "9.1-dev", "10"]);
    }

    #[rstest]
    #[case(vec!["3", "10", "1"], vec!["1", "3", "10"])]
    #[case(vec!["2.3", "1", "2.1", "2.2"], vec!["1", "2.1", "2.2", "2.3"])]
    #[case(vec!["oops", "1", "2+dev.1"], vec!["1", "2+dev.1", "oops"])]
    #[case(vec![], vec![])]
    fn sort_versions_orders_numerically(#[case] input: Vec<&str>, #[case] expected: Vec<&str>) {
        let mut versions: Vec<String> = input.into_iter().map(String::from).collect();
        sort_versions(&mut versions, |v| v.as_str());

        assert_eq!(versions, expected);
    }

    #[rstest]
    #[case("2.1", "2", true)]
    #[case("2.2", "2.2", true)]
    #[case("2.3", "2.2", false)]
    #[case("10.1", "1", true)] // literal prefix, not a major match
    #[case("1", "", true)]
    #[case("1", "3", false)]
    fn matches_prefix_is_literal(#[case] version: &str, #[case] prefix: &str, #[case] expected: bool) {
        assert_eq!(matches_prefix(version, prefix), expected);
    }

    #[test]
    fn release_names_sort_by_code_point() {
        let mut names = vec!["b", "1c", "a", "B"];
        names.sort_by(|a, b| compare_release_names(a, b));

        assert_eq!(names, vec!["1c", "B", "a", "b"]);
    }
}
