//! `.env` loading.

use std::path::{Path, PathBuf};

/// Load `KEY=VALUE` lines from the first `.env` found into the environment.
///
/// Variables that are already set win over the file.
pub fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/tutor-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if load_file(path) {
            return;
        }
    }
}

fn load_file(path: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return false;
    };
    for (key, value) in parse(&contents) {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
    true
}

/// Parse `.env` contents, skipping blanks and `#` comments and stripping quotes.
fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.to_string(), value.to_string())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_strips_quotes() {
        let pairs = parse(
            "# model keys\n\nOPENAI_API_KEY=\"sk-test\"\nOLLAMA_HOST = 'http://gpu:11434'\nexport TUTOR_X=1\nnot a pair\n=orphan\n",
        );
        assert_eq!(
            pairs,
            vec![
                ("OPENAI_API_KEY".to_string(), "sk-test".to_string()),
                ("OLLAMA_HOST".to_string(), "http://gpu:11434".to_string()),
                ("TUTOR_X".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn existing_variables_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "TUTOR_DOTENV_TEST_KEEP=file\nTUTOR_DOTENV_TEST_NEW=file\n",
        )
        .unwrap();
        std::env::set_var("TUTOR_DOTENV_TEST_KEEP", "shell");

        assert!(load_file(&path));
        assert_eq!(std::env::var("TUTOR_DOTENV_TEST_KEEP").unwrap(), "shell");
        assert_eq!(std::env::var("TUTOR_DOTENV_TEST_NEW").unwrap(), "file");
    }

    #[test]
    fn missing_file_is_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_file(&dir.path().join(".env")));
    }
}
