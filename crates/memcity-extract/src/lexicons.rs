use std::collections::HashSet;

use regex::Regex;

/// Configured lexicons the extractor's closed-set rules match against: the
/// ticker whitelist/stoplist, the tool/technology list, and the project
/// name patterns (spec §4.1). Callers that own a [`memcity_config::Config`]
/// should build one of these from its tables rather than relying on
/// [`Lexicons::defaults`].
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub ticker_whitelist: HashSet<String>,
    pub ticker_stoplist: HashSet<String>,
    pub tools: HashSet<String>,
    pub project_patterns: Vec<Regex>,
}

impl Lexicons {
    /// A reasonable built-in lexicon set, used by [`crate::extract`] when no
    /// configuration-derived set is supplied.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            ticker_whitelist: HashSet::new(),
            ticker_stoplist: default_ticker_stoplist(),
            tools: default_tools(),
            project_patterns: default_project_patterns(),
        }
    }

    /// Overlays a configured ticker whitelist/stoplist onto the built-in
    /// tool and project-pattern lexicons (spec §6's `ticker_whitelist` /
    /// `ticker_stoplist` config keys — the only two lexicon tables the spec
    /// makes externally configurable). Entries are uppercased so callers can
    /// pass either case straight from a config file or environment
    /// variable.
    #[must_use]
    pub fn from_ticker_lists<W, S>(whitelist: W, stoplist: S) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            ticker_whitelist: whitelist.into_iter().map(|s| s.as_ref().to_uppercase()).collect(),
            ticker_stoplist: stoplist.into_iter().map(|s| s.as_ref().to_uppercase()).collect(),
            ..Self::defaults()
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::defaults()
    }
}

fn default_ticker_stoplist() -> HashSet<String> {
    memcity_model::DEFAULT_TICKER_STOPLIST.iter().map(|s| (*s).to_string()).collect()
}

/// Container runtimes, CI systems, cloud providers, and common internal
/// tool names (spec §4.1's "Tool / technology" rule); matched
/// case-insensitively against this set.
fn default_tools() -> HashSet<String> {
    [
        "docker", "kubernetes", "podman", "containerd", "github actions", "circleci", "jenkins",
        "travis", "gitlab ci", "aws", "gcp", "azure", "terraform", "ansible", "pulumi", "rust",
        "python", "typescript", "postgres", "postgresql", "redis", "kafka", "grafana",
        "prometheus", "datadog", "sentry", "cloudflare", "vercel", "netlify", "nginx", "nomad",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Small set of multi-word project names recognized verbatim (spec §4.1's
/// "Project name" rule gives `Asymmetry Scanner` and `Knowledge Engine` as
/// examples of this pattern shape).
fn default_project_patterns() -> Vec<Regex> {
    [
        r"\bAsymmetry Scanner\b",
        r"\bKnowledge Engine\b",
        r"\bIngestion Supervisor\b",
        r"\bLayout Projector\b",
        r"\bCity Layout\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("built-in project pattern {p:?}: {e}")))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stoplist_is_all_uppercase_ascii() {
        for word in &default_ticker_stoplist() {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn default_project_patterns_match_their_own_examples() {
        let patterns = default_project_patterns();
        assert!(patterns.iter().any(|r| r.is_match("the Asymmetry Scanner project")));
        assert!(patterns.iter().any(|r| r.is_match("using the Knowledge Engine")));
    }
}
