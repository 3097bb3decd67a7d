use std::collections::HashSet;

/// Recognises the configuration fields treediff understands
pub struct ConfigValidator {
    /// Set of valid configuration fields
    known_fields: HashSet<&'static str>,
}

impl ConfigValidator {
    /// Create a new validator with known configuration fields
    #[must_use]
    pub fn new() -> Self {
        let known_fields = [
            // Sections
            "roots",
            "scan",
            "compare",
            "diff",
            // Roots
            "roots.dir_a",
            "roots.dir_b",
            "roots.diffs",
            // Scan
            "scan.follow_symlinks",
            // Compare
            "compare.fingerprint",
            "compare.mode",
            // Diff
            "diff.extensions",
            "diff.match_mode",
            "diff.algorithm",
            "diff.context_lines",
            "diff.create_parent_dirs",
        ]
        .into_iter()
        .collect();

        Self { known_fields }
    }

    /// Collect the dotted names of every field the parsed document carries
    /// that is not a known configuration field.
    #[must_use]
    pub fn unknown_fields(&self, document: &toml::Value) -> Vec<String> {
        let mut unknown = Vec::new();
        self.check_table(document, "", &mut unknown);
        unknown
    }

    /// Recursively checks a TOML table for unknown fields
    fn check_table(&self, table: &toml::Value, prefix: &str, unknown: &mut Vec<String>) {
        let toml::Value::Table(map) = table else {
            return;
        };

        for (key, value) in map {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            if !self.known_fields.contains(full_key.as_str()) {
                unknown.push(full_key);
            } else if let toml::Value::Table(_) = value {
                self.check_table(value, &full_key, unknown);
            }
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
