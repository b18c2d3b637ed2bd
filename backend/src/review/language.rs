//! Supported source languages
//!
//! The fixed set of languages a user can declare for a snippet. The tag is
//! what labels the fenced code block inside the prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the reviewer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C++
    Cpp,
    /// Java
    Java,
    /// JavaScript
    JavaScript,
    /// TypeScript
    TypeScript,
    /// HTML
    Html,
    /// CSS
    Css,
    /// C#
    CSharp,
    /// Go
    Go,
    /// Python
    Python,
    /// SQL
    Sql,
}

impl Language {
    /// Every supported language, in picker order
    pub const ALL: [Language; 10] = [
        Language::Cpp,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
        Language::Html,
        Language::Css,
        Language::CSharp,
        Language::Go,
        Language::Python,
        Language::Sql,
    ];

    /// Lowercase tag used in prompts and code fences
    pub fn tag(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Html => "html",
            Language::Css => "css",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Python => "python",
            Language::Sql => "sql",
        }
    }

    /// Human-readable name for pickers
    pub fn label(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Python => "Python",
            Language::Sql => "SQL",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a tag is not in the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag() == wanted)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("python".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("CSharp".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!(" cpp ".parse::<Language>().unwrap(), Language::Cpp);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language: cobol");
    }

    #[test]
    fn test_every_tag_round_trips() {
        for lang in Language::ALL {
            assert_eq!(lang.tag().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, r#""javascript""#);
        let lang: Language = serde_json::from_str(r#""csharp""#).unwrap();
        assert_eq!(lang, Language::CSharp);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::Cpp.label(), "C++");
        assert_eq!(Language::CSharp.label(), "C#");
        assert_eq!(Language::Sql.to_string(), "sql");
    }
}
