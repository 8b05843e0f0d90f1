use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;

const CATEGORIES: [&str; 8] = [
    "Systems", "Web", "Go", "Systems", "Web", "Go", "Systems", "Web",
];

/// Eight posts, "Article 1" to "Article 8". Systems posts are tagged "rust".
fn write_posts(dir: &Path) -> PathBuf {
    let posts: Vec<String> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let id = i + 1;
            let tags = if *category == "Systems" { "rust" } else { "misc" };
            format!(
                r#"{{"id":{id},"title":"Article {id}","snippet":"Snippet {id}","author":"Ada Brook","category":"{category}","date":"2024-01-{id:02}","tags":["{tags}"],"image":"a{id}.jpg"}}"#
            )
        })
        .collect();

    let path = dir.join("posts.json");
    std::fs::write(&path, format!("[{}]", posts.join(","))).unwrap();
    path
}

fn blogdeck(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blogdeck").unwrap();
    cmd.current_dir(home.path())
        .env("BLOGDECK_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_list_first_page() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 6 of 8 posts"))
        .stdout(predicate::str::contains("[1] Article 1"))
        .stdout(predicate::str::contains("[6] Article 6"))
        .stdout(predicate::str::contains("[7]").not())
        .stdout(predicate::str::contains("More posts available: use --pages 2"));
}

#[test]
fn test_list_two_pages_appends_rest() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .args(["list", "--pages", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[8] Article 8"))
        .stdout(predicate::str::contains("More posts").not());
}

#[test]
fn test_list_search_by_tag() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .args(["list", "-s", "RUST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 3 of 3 posts"))
        .stdout(predicate::str::contains("[1] Article 1"))
        .stdout(predicate::str::contains("[4] Article 4"))
        .stdout(predicate::str::contains("[7] Article 7"));
}

#[test]
fn test_list_category_and_search_can_be_empty() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .args(["list", "-c", "Go", "-s", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."));
}

#[test]
fn test_show_and_missing_show() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article 2"))
        .stdout(predicate::str::contains("By Ada Brook · January 2, 2024 · Web"))
        .stdout(predicate::str::contains("Image: images/a2.jpg"));

    blogdeck(&home)
        .args(["show", "999"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_share_prints_triple() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .args(["config", "site-url", "https://blog.example.com/"])
        .assert()
        .success();

    blogdeck(&home)
        .args(["share", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article 3\nSnippet 3\nhttps://blog.example.com/"));
}

#[test]
fn test_share_platform_link() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .args(["share", "3", "--platform", "twitter"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Share on Twitter: https://twitter.com/intent/tweet?text=Article%203&url=http%3A%2F%2Flocalhost%2F",
        ));
}

#[test]
fn test_categories_in_first_seen_order() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout("Systems\nWeb\nGo\n");
}

#[test]
fn test_theme_persists() {
    let home = tempfile::tempdir().unwrap();

    blogdeck(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    blogdeck(&home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark."));

    blogdeck(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    let prefs = std::fs::read_to_string(home.path().join("preferences.json")).unwrap();
    assert!(prefs.contains(r#""theme": "dark""#));
}

#[test]
fn test_config_page_size() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .args(["config", "page-size", "3"])
        .assert()
        .success();

    blogdeck(&home)
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 3"));

    blogdeck(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 3 of 8 posts"));

    blogdeck(&home)
        .args(["config", "page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_missing_source_fails() {
    let home = tempfile::tempdir().unwrap();

    blogdeck(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not reach posts.json"));
}

#[test]
fn test_invalid_payload_fails() {
    let home = tempfile::tempdir().unwrap();
    let bad = home.path().join("bad.json");
    std::fs::write(&bad, "[{\"id\": 1}]").unwrap();

    blogdeck(&home)
        .args(["list", "--source"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid post data"));
}

#[test]
fn test_browse_with_closed_stdin_prints_feed() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .arg("browse")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loading posts"))
        .stdout(predicate::str::contains("Showing 6 of 8 posts"))
        .stdout(predicate::str::contains("Type `more` to see more posts."));
}

#[test]
fn test_browse_reports_load_failure() {
    let home = tempfile::tempdir().unwrap();

    blogdeck(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load posts."))
        .stdout(predicate::str::contains("Type `retry` to try again."));
}

#[test]
fn test_browse_quit() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    blogdeck(&home)
        .arg("browse")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loading posts"));
}

fn browse_output(home: &TempDir, input: &str) -> String {
    let output = blogdeck(home)
        .arg("browse")
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_browse_debounced_search() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    let out = browse_output(&home, "/rust\n");
    assert!(out.contains("Showing 3 of 3 posts"));
    assert!(out.contains("[4] Article 4"));
}

#[test]
fn test_browse_more_appends_last_page() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    let out = browse_output(&home, "more\nmore\n");
    assert!(out.contains("Showing 6 of 8 posts"));
    assert!(out.contains("[8] Article 8"));
    assert!(out.contains("No more posts."));
}

#[test]
fn test_browse_category_typed_while_loading_is_applied() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    let out = browse_output(&home, "cat Web\n");
    assert!(out.contains("Showing 3 of 3 posts"));
    assert!(out.contains("[5] Article 5"));
}

#[test]
fn test_browse_empty_result_then_clear() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    let out = browse_output(&home, "cat Nope\nclear\n");
    assert!(out.contains("No posts found."));
    assert!(out.contains("Type `clear` to reset the filters."));
    assert_eq!(out.matches("Showing 6 of 8 posts").count(), 2);
}

#[test]
fn test_browse_open_and_close_preview() {
    let home = tempfile::tempdir().unwrap();
    write_posts(home.path());

    let out = browse_output(&home, "open 2\nclose\n");
    assert!(out.contains("By Ada Brook · January 2, 2024 · Web"));
    assert!(out.contains("Type `close` to return to the feed."));
    assert!(out.contains("Preview closed."));
}

#[test]
fn test_browse_retry_after_posts_appear() {
    let home = tempfile::tempdir().unwrap();
    let mut child = std::process::Command::cargo_bin("blogdeck")
        .unwrap()
        .current_dir(home.path())
        .env("BLOGDECK_HOME", home.path())
        .env_remove("RUST_LOG")
        .args(["--no-color", "browse"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    loop {
        line.clear();
        let read = stdout.read_line(&mut line).unwrap();
        assert!(read > 0, "session ended before reporting the load failure");
        if line.contains("Type `retry` to try again.") {
            break;
        }
    }

    write_posts(home.path());
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"retry\n").unwrap();
    drop(stdin);

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    assert!(child.wait().unwrap().success());
    assert!(rest.contains("Loading posts"));
    assert!(rest.contains("Showing 6 of 8 posts"));
}
