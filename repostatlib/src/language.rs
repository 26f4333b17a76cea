//! File-type registry: maps extensions to languages and languages to
//! classification grammars.

use crate::classify::Grammar;
use serde::{Deserialize, Serialize};

/// A recognized file type.
///
/// The set is closed: extensions outside it are out of scope and their
/// files are skipped entirely by the tree walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    Swift,
    Kotlin,
    #[serde(rename = "Gradle KTS")]
    GradleKts,
    Python,
    #[serde(rename = "XML")]
    Xml,
    Markdown,
    #[serde(rename = "YAML")]
    Yaml,
    #[serde(rename = "TOML")]
    Toml,
    Properties,
    #[serde(rename = "JSON")]
    Json,
}

impl Language {
    /// Look up a language from a file extension (without the dot).
    ///
    /// Returns `None` for extensions that are out of scope.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "swift" => Some(Language::Swift),
            "kt" => Some(Language::Kotlin),
            "kts" => Some(Language::GradleKts),
            "py" => Some(Language::Python),
            "xml" => Some(Language::Xml),
            "md" => Some(Language::Markdown),
            "yml" | "yaml" => Some(Language::Yaml),
            "toml" => Some(Language::Toml),
            "properties" => Some(Language::Properties),
            "json" => Some(Language::Json),
            _ => None,
        }
    }

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::GradleKts => "Gradle KTS",
            Language::Python => "Python",
            Language::Xml => "XML",
            Language::Markdown => "Markdown",
            Language::Yaml => "YAML",
            Language::Toml => "TOML",
            Language::Properties => "Properties",
            Language::Json => "JSON",
        }
    }

    /// The classification grammar for this language.
    pub fn grammar(&self) -> Grammar {
        match self {
            Language::Swift | Language::Kotlin | Language::GradleKts => Grammar::Brace,
            Language::Python => Grammar::Python,
            Language::Xml => Grammar::Markup,
            Language::Markdown => Grammar::Prose,
            Language::Yaml => Grammar::HashLine,
            Language::Toml | Language::Properties | Language::Json => Grammar::Generic,
        }
    }

    /// Source-code languages, as opposed to documentation or config.
    /// Most report sections cover only these.
    pub fn is_source(&self) -> bool {
        matches!(
            self,
            Language::Swift | Language::Kotlin | Language::GradleKts | Language::Python
        )
    }

    /// Documentation files (Markdown).
    pub fn is_doc(&self) -> bool {
        matches!(self, Language::Markdown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
