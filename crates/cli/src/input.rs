//! Source acquisition and language hint inference

use polyrun_core::{Error, Result, SourceUnit};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Where the source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    Stdin,
    File(PathBuf),
}

impl SourceInput {
    /// `None` and `-` mean standard input
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => SourceInput::File(path.to_path_buf()),
            _ => SourceInput::Stdin,
        }
    }
}

/// Read a source unit. An explicit `lang` wins over the file extension.
pub async fn read_source(input: &SourceInput, lang: Option<&str>) -> Result<SourceUnit> {
    let explicit = lang.and_then(normalize_language);

    match input {
        SourceInput::Stdin => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| Error::file_system("<stdin>", "read standard input", e))?;
            Ok(SourceUnit::from_stdin(text, explicit))
        }
        SourceInput::File(path) => {
            let resolved = tokio::fs::canonicalize(path)
                .await
                .map_err(|e| Error::file_system(path.clone(), "resolve source path", e))?;
            let text = tokio::fs::read_to_string(&resolved)
                .await
                .map_err(|e| Error::file_system(resolved.clone(), "read source file", e))?;
            let hint = explicit.or_else(|| infer_language(&resolved));
            Ok(SourceUnit::new(
                text,
                hint,
                resolved.to_string_lossy().into_owned(),
            ))
        }
    }
}

/// Language hint derived from a file extension
pub fn infer_language(path: &Path) -> Option<String> {
    normalize_language(path.extension()?.to_str()?)
}

/// Canonical language name for a hint or extension.
///
/// Short forms map to full names (`py` to `python`, `mjs` to `javascript`);
/// anything else is lowercased. Blank input has no language.
pub fn normalize_language(name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();
    let language = match name.as_str() {
        "" => return None,
        "py" => "python",
        "rb" => "ruby",
        "ts" => "typescript",
        "js" | "mjs" | "cjs" => "javascript",
        "pseudo" => "pseudocode",
        other => other,
    };
    Some(language.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_infer_language_table() {
        let cases = [
            ("a.py", Some("python")),
            ("a.rb", Some("ruby")),
            ("a.ts", Some("typescript")),
            ("a.js", Some("javascript")),
            ("a.MJS", Some("javascript")),
            ("a.cjs", Some("javascript")),
            ("notes.pseudo", Some("pseudocode")),
            ("main.GO", Some("go")),
            ("Makefile", None),
            ("dir.d/file", None),
        ];
        for (name, expected) in cases {
            assert_eq!(
                infer_language(Path::new(name)).as_deref(),
                expected,
                "{name}"
            );
        }
    }

    #[test]
    fn test_normalize_language_aliases() {
        assert_eq!(normalize_language("js").as_deref(), Some("javascript"));
        assert_eq!(normalize_language(" MJS ").as_deref(), Some("javascript"));
        assert_eq!(normalize_language("Py").as_deref(), Some("python"));
        assert_eq!(normalize_language("Kotlin").as_deref(), Some("kotlin"));
        assert_eq!(normalize_language("  "), None);
    }

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(SourceInput::from_arg(None), SourceInput::Stdin);
        assert_eq!(SourceInput::from_arg(Some(Path::new("-"))), SourceInput::Stdin);
        assert_eq!(
            SourceInput::from_arg(Some(Path::new("x.py"))),
            SourceInput::File(PathBuf::from("x.py"))
        );
    }

    #[tokio::test]
    async fn test_file_source_uses_canonical_path_and_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.rb");
        std::fs::write(&path, "puts 'hi'").unwrap();

        let unit = read_source(&SourceInput::File(path.clone()), None)
            .await
            .unwrap();
        let canonical = std::fs::canonicalize(&path).unwrap();
        assert_eq!(unit.id(), canonical.to_string_lossy());
        assert_eq!(unit.language_hint(), Some("ruby"));
        assert_eq!(unit.text(), "puts 'hi'");
    }

    #[tokio::test]
    async fn test_explicit_lang_overrides_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script.txt");
        std::fs::write(&path, "print 1").unwrap();

        let unit = read_source(&SourceInput::File(path), Some("Python"))
            .await
            .unwrap();
        assert_eq!(unit.language_hint(), Some("python"));
    }

    #[tokio::test]
    async fn test_explicit_short_lang_is_aliased() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script.txt");
        std::fs::write(&path, "console.log(1)").unwrap();

        let unit = read_source(&SourceInput::File(path), Some("js"))
            .await
            .unwrap();
        assert_eq!(unit.language_hint(), Some("javascript"));
    }

    #[tokio::test]
    async fn test_missing_file_is_file_system_error() {
        let dir = TempDir::new().unwrap();
        let err = read_source(&SourceInput::File(dir.path().join("nope.py")), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
