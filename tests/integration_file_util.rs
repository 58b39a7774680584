use opsrun::application::load_jobs;
use opsrun::commands::run_jobs;
use opsrun::file_util::{self, Outcome};
use opsrun::job::{Job, ReplaceText};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn glob_job(glob: &str, find: &str, replace: &str) -> Job {
    Job::ReplaceText(ReplaceText {
        files: vec![],
        glob: glob.to_string(),
        find: find.to_string(),
        replace: replace.to_string(),
    })
}

#[test]
fn test_untouched_files_are_byte_identical() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "a.html", "<p>keep</p>\r\n");
    write(root, "b.html", "<p>OLD</p>");
    let before = fs::read(root.join("a.html")).unwrap();

    let summary = run_jobs(&[glob_job("*.html", "OLD", "NEW")], root).unwrap();
    assert_eq!(summary.changed_files, 1);
    assert_eq!(fs::read(root.join("a.html")).unwrap(), before);
    assert_eq!(read(root, "b.html"), "<p>NEW</p>");
}

#[test]
fn test_full_substitution_counts_each_file_once() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "x/one.md", "OLD OLD OLD");
    write(root, "x/y/two.md", "OLDOLD");
    write(root, "three.md", "nothing");

    let summary = run_jobs(&[glob_job("**/*.md", "OLD", "NEW")], root).unwrap();
    assert_eq!(summary.changed_files, 2);
    assert!(!read(root, "x/one.md").contains("OLD"));
    assert!(!read(root, "x/y/two.md").contains("OLD"));
    assert_eq!(read(root, "three.md"), "nothing");
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "site/index.html", "<a href=\"http://old\">old</a>");
    let jobs = [glob_job("**/*.html", "http://old", "https://new")];

    assert_eq!(run_jobs(&jobs, root).unwrap().changed_files, 1);
    let once = read(root, "site/index.html");
    assert_eq!(run_jobs(&jobs, root).unwrap().changed_files, 0);
    assert_eq!(read(root, "site/index.html"), once);
    assert_eq!(once, "<a href=\"https://new\">old</a>");
}

#[test]
fn test_loaded_jobs_run_end_to_end() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "ops/commands.yml",
        r#"
jobs:
  - type: replace_text
    glob: "docs/**/*.txt"
    find: "2023"
    replace: "2024"
  - type: replace_text
    files: ["README", "ops/commands.yml"]
    find: "2023"
    replace: "2024"
"#,
    );
    write(root, "docs/a.txt", "(c) 2023");
    write(root, "docs/deep/b.txt", "(c) 2023");
    write(root, "README", "since 2023");

    let jobs = load_jobs(&root.join("ops/commands.yml")).unwrap();
    let summary = run_jobs(&jobs, root).unwrap();
    assert_eq!(summary.changed_files, 3);
    assert_eq!(read(root, "docs/a.txt"), "(c) 2024");
    assert_eq!(read(root, "docs/deep/b.txt"), "(c) 2024");
    assert_eq!(read(root, "README"), "since 2024");
    assert!(read(root, "ops/commands.yml").contains("2023"));
}

#[test]
fn test_replace_in_file_outcomes() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "f.txt", "alpha beta");
    let path = root.join("f.txt");

    assert_eq!(
        file_util::replace_in_file(&path, "gamma", "delta").unwrap(),
        Outcome::Unchanged
    );
    assert_eq!(
        file_util::replace_in_file(&path, "beta", "").unwrap(),
        Outcome::Rewritten
    );
    assert_eq!(read(root, "f.txt"), "alpha ");
}
