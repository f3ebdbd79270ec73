use crate::core::policy::MatchPolicy;

/// Filter `candidates` down to the ones matching `query` under `policy`.
///
/// Candidate order is preserved and duplicates are kept. In case-insensitive
/// mode the returned strings are lower-cased as well, not only the
/// comparison; callers that need the original casing must match
/// case-sensitively. An empty query matches every candidate under all three
/// policies.
pub fn find_matches(
    candidates: &[String],
    query: &str,
    policy: MatchPolicy,
    case_sensitive: bool,
) -> Vec<String> {
    let mut out = Vec::new();

    if case_sensitive {
        for candidate in candidates {
            if policy_matches(policy, candidate, query) {
                out.push(candidate.clone());
            }
        }
        return out;
    }

    let needle = query.to_lowercase();
    for candidate in candidates {
        let folded = candidate.to_lowercase();
        if policy_matches(policy, &folded, &needle) {
            out.push(folded);
        }
    }
    out
}

fn policy_matches(policy: MatchPolicy, candidate: &str, query: &str) -> bool {
    match policy {
        MatchPolicy::StartsWith => candidate.starts_with(query),
        MatchPolicy::EndsWith => candidate.ends_with(query),
        MatchPolicy::Contains => candidate.contains(query),
    }
}
