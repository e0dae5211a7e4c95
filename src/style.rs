//! Doc-comment convention per programming language

/// Style used when the language is not in the table
pub const DEFAULT_STYLE: &str = "block";

/// Lower-cased language name to doc-comment convention
pub const COMMENT_STYLES: &[(&str, &str)] = &[
  ("java", "JavaDoc")
, ("python", "Docstring")
, ("c#", "XMLDoc")
, ("javascript", "JSDoc")
, ("typescript", "JSDoc")
, ("php", "PHPDoc")
, ("go", "Godoc")
, ("swift", "SwiftDoc")
];

/// Look up the convention for a language, case-insensitively
pub fn comment_style(code_language: &str) -> &'static str
{   let key = code_language.to_lowercase();
    COMMENT_STYLES
      .iter()
      .find(|(language, _)| *language == key)
      .map(|(_, style)| *style)
      .unwrap_or(DEFAULT_STYLE)
}
