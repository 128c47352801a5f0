use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn rel(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let rel = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();
    rel.replace('\\', "/")
}

fn read(rel_path: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(rel_path);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", rel(&path)))
}

#[test]
fn card_logic_is_pure() {
    let mut violations = Vec::new();

    for rel_path in ["src/usage.rs", "src/presentation.rs"] {
        let content = read(rel_path);
        for forbidden in ["crate::ui", "crate::app", "ratatui", "crossterm", "std::fs"] {
            if content.contains(forbidden) {
                violations.push(format!(
                    "{rel_path} imports forbidden dependency `{forbidden}`"
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Card logic layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn stats_module_does_not_import_ui() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/stats");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for forbidden in ["crate::ui", "crate::app", "ratatui"] {
            if content.contains(forbidden) {
                violations.push(format!(
                    "{} imports forbidden dependency `{}`",
                    rel(&file),
                    forbidden
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Stats layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn only_app_and_main_handle_terminal_input() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        if !content.contains("crossterm::event") {
            continue;
        }

        let rel_path = rel(&file);
        let allowed = matches!(
            rel_path.as_str(),
            "src/app.rs" | "src/config.rs" | "src/event.rs" | "src/main.rs"
        );
        if !allowed {
            violations.push(format!(
                "{} reads terminal input outside the app shell",
                rel_path
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Unexpected terminal input handling:\n{}",
        violations.join("\n")
    );
}
