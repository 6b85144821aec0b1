pub mod splice {
    /// Literal text the edit anchors on. Matching is exact; there is no
    /// pattern syntax.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Anchor(pub String);

    /// Text substituted for each occurrence of the anchor.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Replacement(pub String);

    /// A single anchor/replacement pair.
    #[derive(Debug, Clone)]
    pub struct SpliceRule {
        pub anchor: Anchor,
        pub replacement: Replacement,
    }

    impl SpliceRule {
        pub fn new(anchor: impl Into<String>, replacement: impl Into<String>) -> Self {
            Self {
                anchor: Anchor(anchor.into()),
                replacement: Replacement(replacement.into()),
            }
        }
    }

    /// Result of applying a rule to a file's contents.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Spliced {
        pub content: String,
        /// How many occurrences of the anchor were replaced. Zero means the
        /// content came back unchanged.
        pub occurrences: usize,
    }

    /// Replace every literal occurrence of the anchor with the replacement.
    ///
    /// An absent anchor is not an error: the content is returned as-is with
    /// `occurrences == 0`.
    pub fn apply(content: &str, rule: &SpliceRule) -> Spliced {
        let occurrences = content.matches(rule.anchor.0.as_str()).count();
        if occurrences == 0 {
            return Spliced {
                content: content.to_owned(),
                occurrences: 0,
            };
        }
        Spliced {
            content: content.replace(&rule.anchor.0, &rule.replacement.0),
            occurrences,
        }
    }

    #[cfg(test)]
    mod tests {
        use pretty_assertions::assert_eq;

        use super::{SpliceRule, apply};

        #[test]
        fn replaces_a_single_occurrence() {
            let rule = SpliceRule::new(
                "import A from 'x'",
                "import A from 'x'\nimport C from 'z'",
            );
            let spliced = apply("import A from 'x'\nimport B from 'y'", &rule);
            assert_eq!(
                spliced.content,
                "import A from 'x'\nimport C from 'z'\nimport B from 'y'"
            );
            assert_eq!(spliced.occurrences, 1);
        }

        #[test]
        fn missing_anchor_leaves_content_unchanged() {
            let rule = SpliceRule::new(
                "import A from 'x'",
                "import A from 'x'\nimport C from 'z'",
            );
            let spliced = apply("import D from 'w'", &rule);
            assert_eq!(spliced.content, "import D from 'w'");
            assert_eq!(spliced.occurrences, 0);
        }

        #[test]
        fn replaces_every_occurrence() {
            let rule = SpliceRule::new("use foo;", "use bar;");
            let spliced = apply("use foo;\nmod a;\nuse foo;\n", &rule);
            assert_eq!(spliced.content, "use bar;\nmod a;\nuse bar;\n");
            assert_eq!(spliced.occurrences, 2);
        }

        #[test]
        fn second_application_is_a_no_op() {
            let rule = SpliceRule::new("use foo;", "use bar;");
            let first = apply("use foo;\nmod a;\n", &rule);
            assert_eq!(first.content, "use bar;\nmod a;\n");
            let second = apply(&first.content, &rule);
            assert_eq!(second.content, first.content);
            assert_eq!(second.occurrences, 0);
        }

        #[test]
        fn empty_content_is_returned_untouched() {
            let rule = SpliceRule::new("use foo;", "use bar;");
            let spliced = apply("", &rule);
            assert_eq!(spliced.content, "");
            assert_eq!(spliced.occurrences, 0);
        }
    }
}

pub mod rewrite {
    use std::{
        fs, io,
        path::{Path, PathBuf},
    };

    use thiserror::Error;
    use tracing::{debug, instrument, warn};

    use crate::splice::{self, SpliceRule};

    /// Read or write failure on the target file. The file is only touched
    /// after a successful read.
    #[derive(Debug, Error)]
    pub enum RewriteError {
        #[error("failed to read {}", .path.display())]
        Read {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
        #[error("failed to write {}", .path.display())]
        Write {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
    }

    /// What a completed rewrite did to the file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcome {
        pub occurrences: usize,
    }

    impl Outcome {
        pub fn matched(&self) -> bool {
            self.occurrences > 0
        }
    }

    /// Rewrite the file at `path` in place, replacing every occurrence of the
    /// rule's anchor.
    ///
    /// The contents are written back even when the anchor is absent, so a
    /// no-match run truncates and rewrites the file with identical bytes.
    /// UTF-8 is enforced on read; a file that doesn't decode is a
    /// [`RewriteError::Read`].
    #[instrument(skip(rule), err)]
    pub fn rewrite_file(path: &Path, rule: &SpliceRule) -> Result<Outcome, RewriteError> {
        let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
            path: path.to_owned(),
            source,
        })?;
        debug!(bytes = content.len(), "read target file");

        let spliced = splice::apply(&content, rule);
        match spliced.occurrences {
            0 => warn!("anchor not found, writing contents back unchanged"),
            n => debug!(occurrences = n, "anchor replaced"),
        }

        fs::write(path, spliced.content).map_err(|source| RewriteError::Write {
            path: path.to_owned(),
            source,
        })?;

        Ok(Outcome {
            occurrences: spliced.occurrences,
        })
    }
}
