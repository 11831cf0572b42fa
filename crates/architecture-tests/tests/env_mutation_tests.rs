//! Architecture tests confining process environment writes.
//!
//! Library code must write variables through `ProcessEnv` so every write is
//! validated first. Only `environment.rs` may call `std::env::set_var` or
//! `std::env::remove_var` outside of tests.
//!
//! Non-scope: test code (`tests/` directories and `#[cfg(test)]` modules)
//! is not checked. The scan stops at the first `#[cfg(test)]` line.

use std::fs;
use std::path::Path;

const ALLOWED_FILES: &[&str] = &["envfile/src/environment.rs"];

const FORBIDDEN_CALLS: &[&str] = &["env::set_var(", "env::remove_var("];

#[test]
fn test_env_writes_confined_to_environment_module() {
    let crates_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../crates");
    let mut violations = Vec::new();
    let mut scanned = 0;

    for entry in walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let path = entry.path();
        let path_str = path.to_string_lossy().replace('\\', "/");

        if !path_str.contains("/src/")
            || ALLOWED_FILES.iter().any(|allowed| path_str.ends_with(allowed))
        {
            continue;
        }

        scanned += 1;
        let content = fs::read_to_string(path).unwrap_or_default();
        violations.extend(find_violations(&content).into_iter().map(|(line, call)| {
            format!("{}:{}: calls {}", path.display(), line, call)
        }));
    }

    assert!(scanned > 0, "no library sources found under {:?}", crates_dir);
    assert!(
        violations.is_empty(),
        "Process environment written outside environment.rs:\n{}",
        violations.join("\n")
    );
}

/// Return `(line_number, call)` for each forbidden call before `#[cfg(test)]`.
fn find_violations(content: &str) -> Vec<(usize, &'static str)> {
    let mut found = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        for call in FORBIDDEN_CALLS {
            if trimmed.contains(call) {
                found.push((index + 1, *call));
            }
        }
    }

    found
}

#[test]
fn test_find_violations_ignores_comments_and_test_modules() {
    let source = "\
fn apply() {
    // std::env::set_var(\"A\", \"1\");
    unsafe { std::env::set_var(\"B\", \"2\") };
}

#[cfg(test)]
mod tests {
    fn reset() { unsafe { std::env::remove_var(\"B\") } }
}
";
    assert_eq!(find_violations(source), vec![(3, "env::set_var(")]);
}
