use crate::types::version::VersionTriple;

/// Parses raw `git tag --list` output, one tag per line.
///
/// ### Parameters
/// - `lines`: The unfiltered tag listing.
///
/// Blank lines and tags that are not strictly `vMAJOR.MINOR.PATCH` are dropped.
pub fn parse_tags<I>(lines: I) -> Vec<VersionTriple>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let tag = line.as_ref().trim();
            if tag.is_empty() {
                return None;
            }
            tag.parse::<VersionTriple>().ok()
        })
        .collect()
}

/// Returns the highest version among `tags`, or `v0.0.0` when there are none.
pub fn select_latest(tags: &[VersionTriple]) -> VersionTriple {
    tags.iter().copied().max().unwrap_or(VersionTriple::BASELINE)
}
