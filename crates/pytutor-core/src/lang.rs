//! Language tags accepted by the visualizer and their site codes.
//!
//! The remote site selects its interpreter from a short `py=` URL
//! parameter; the mapping from user-facing tag to site code is fixed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the visualizer can step through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python2,
    #[default]
    Python3,
    Java,
    JavaScript,
    TypeScript,
    Ruby,
    C,
    Cpp,
}

/// Unrecognized language tag, with the accepted spellings in the message
/// so the user can fix the flag without consulting the docs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{given:?} is not a supported language; expected one of: \
     python2, python3, java, javascript, typescript, ruby, c, cpp"
)]
pub struct UnknownLanguage {
    pub given: String,
}

impl Language {
    /// All accepted tags, in the order they are reported to the user.
    pub const ALL: [Language; 8] = [
        Language::Python2,
        Language::Python3,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
        Language::Ruby,
        Language::C,
        Language::Cpp,
    ];

    /// Canonical lowercase tag, as written on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Python2 => "python2",
            Language::Python3 => "python3",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Ruby => "ruby",
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    /// Value of the site's `py=` URL parameter for this language.
    pub fn site_code(self) -> &'static str {
        match self {
            Language::Python2 => "2",
            Language::Python3 => "3",
            Language::Java => "java",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Ruby => "ruby",
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Case-insensitive; `c++` is accepted as an alias of `cpp`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        let lang = match tag.as_str() {
            "python2" => Language::Python2,
            "python3" => Language::Python3,
            "java" => Language::Java,
            "javascript" => Language::JavaScript,
            "typescript" => Language::TypeScript,
            "ruby" => Language::Ruby,
            "c" => Language::C,
            "cpp" | "c++" => Language::Cpp,
            _ => {
                return Err(UnknownLanguage {
                    given: s.to_string(),
                })
            }
        };
        Ok(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_canonical_tags() {
        for lang in Language::ALL {
            assert_eq!(lang.tag().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Python3".parse::<Language>().unwrap(), Language::Python3);
        assert_eq!("JAVA".parse::<Language>().unwrap(), Language::Java);
        assert_eq!("TypeScript".parse::<Language>().unwrap(), Language::TypeScript);
    }

    #[test]
    fn parse_cpp_alias() {
        assert_eq!("c++".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!("C++".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!("cpp".parse::<Language>().unwrap(), Language::Cpp);
    }

    #[test]
    fn parse_unknown_tag_lists_accepted_values() {
        let err = "pascal".parse::<Language>().unwrap_err();
        assert_eq!(err.given, "pascal");
        let msg = err.to_string();
        for lang in Language::ALL {
            assert!(msg.contains(lang.tag()), "message missing {}", lang.tag());
        }
    }

    #[test]
    fn site_codes_match_fixed_table() {
        assert_eq!(Language::Python3.site_code(), "3");
        assert_eq!(Language::Python2.site_code(), "2");
        assert_eq!(Language::Java.site_code(), "java");
        assert_eq!(Language::JavaScript.site_code(), "js");
        assert_eq!(Language::TypeScript.site_code(), "ts");
        assert_eq!(Language::Ruby.site_code(), "ruby");
        assert_eq!(Language::C.site_code(), "c");
        assert_eq!(Language::Cpp.site_code(), "cpp");
    }

    #[test]
    fn default_is_python3() {
        assert_eq!(Language::default(), Language::Python3);
    }

    #[test]
    fn toml_roundtrip_via_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            language: Language,
        }
        let w: Wrap = toml::from_str("language = \"javascript\"").unwrap();
        assert_eq!(w.language, Language::JavaScript);
        let s = toml::to_string(&Wrap {
            language: Language::Cpp,
        })
        .unwrap();
        assert!(s.contains("\"cpp\""));
    }
}
