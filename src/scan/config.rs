//! Configuration types for directory scanning

use glob::Pattern;

use crate::error::{Error, Result};

/// Configuration for scanning behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Names to skip, either exact or as glob patterns. Applies at every depth.
    pub ignore_patterns: Vec<String>,
}

impl ScanConfig {
    /// Compile the ignore patterns, failing on the first invalid one.
    pub(crate) fn compile(&self) -> Result<IgnoreSet> {
        let patterns = self
            .ignore_patterns
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .map(|compiled| (p.clone(), compiled))
                    .map_err(|source| Error::Pattern {
                        pattern: p.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(IgnoreSet { patterns })
    }
}

/// Compiled ignore patterns, matched against a file name.
#[derive(Debug, Clone, Default)]
pub(crate) struct IgnoreSet {
    patterns: Vec<(String, Pattern)>,
}

impl IgnoreSet {
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|(raw, pattern)| name == raw || pattern.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> IgnoreSet {
        ScanConfig {
            ignore_patterns: patterns.iter().map(|s| s.to_string()).collect(),
        }
        .compile()
        .unwrap()
    }

    #[test]
    fn test_ignore_matching() {
        let ignore = set(&["*.log", "target", "cache?"]);
        assert!(ignore.matches("debug.log"));
        assert!(ignore.matches("target"));
        assert!(ignore.matches("cache1"));
        assert!(!ignore.matches("cache12"));
        assert!(!ignore.matches("main.rs"));
        assert!(!ignore.matches("targets"));
    }

    #[test]
    fn test_default_ignores_nothing() {
        let ignore = ScanConfig::default().compile().unwrap();
        assert!(ignore.is_empty());
        assert!(!ignore.matches("anything"));
    }

    #[test]
    fn test_invalid_pattern() {
        let config = ScanConfig {
            ignore_patterns: vec!["[unclosed".to_string()],
        };
        match config.compile() {
            Err(Error::Pattern { pattern, .. }) => assert_eq!(pattern, "[unclosed"),
            other => panic!("expected pattern error, got {:?}", other),
        }
    }
}
