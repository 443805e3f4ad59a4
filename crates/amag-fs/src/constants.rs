//! Well-known names inside a target project.

use std::path::Path;

/// Paths the installer manages inside a target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmagPath {
    /// The `.agent` directory (rules, workflows and skills live below it)
    AgentDir,
    /// The `.amag` directory (installer state)
    StateDir,
    /// The `config.json` file inside `.amag`
    ConfigFile,
    /// The `GEMINI.md` root context file
    RootContext,
    /// The manifest file every skill directory carries
    SkillManifest,
}

impl AmagPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgentDir => ".agent",
            Self::StateDir => ".amag",
            Self::ConfigFile => "config.json",
            Self::RootContext => "GEMINI.md",
            Self::SkillManifest => "SKILL.md",
        }
    }
}

impl AsRef<Path> for AmagPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for AmagPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for AmagPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_joins_under_state_dir() {
        let joined = Path::new("/proj")
            .join(AmagPath::StateDir)
            .join(AmagPath::ConfigFile);
        assert_eq!(joined, Path::new("/proj/.amag/config.json"));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(AmagPath::RootContext.to_string(), "GEMINI.md");
        assert_eq!(AmagPath::SkillManifest.to_string(), "SKILL.md");
    }
}
