use assert_cmd::prelude::*;
use insta::assert_snapshot;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A content tree with two pages and an isolated config home.
fn site() -> TempDir {
    let tmp = tempdir().unwrap();
    let blog = tmp.path().join("content/blog");
    write(
        &blog.join("page1.md"),
        "---\ntitle: page1\nslug: first\ndate: 2006-01-02\nlastmod: 2008-01-05\ntags: [rust, hugo]\nkeywords: [k1]\n---\nbody one\n",
    );
    write(
        &blog.join("nested/page2.md"),
        "---\ntitle: page2\ndate: 2007-03-04\nlastmod: 2007-03-04\ntags: [rust]\ndraft: true\n---\nbody two\n",
    );
    write(&blog.join("notes.txt"), "not content\n");
    tmp
}

fn hugo_utils(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hugo-utils"));
    cmd.env("XDG_CONFIG_HOME", home.join("xdg")).env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_default_table() {
    let tmp = site();
    let blog = tmp.path().join("content/blog");

    let out = hugo_utils(tmp.path())
        .args(["list", "--sort", "title", "--directory"])
        .arg(&blog)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();

    assert_snapshot!(stdout.trim_end(), @r"
    title       page1
    file        page1.md
    slug        first
    date        Jan 2, 2006
    last-mod    Jan 5, 2008
    keywords    [k1]
    tags        [rust hugo]
    draft       false

    title       page2
    file        page2.md
    slug
    date        Mar 4, 2007
    last-mod    Mar 4, 2007
    keywords    []
    tags        [rust]
    draft       true
    ");
}

#[test]
fn list_with_template() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "--sort", "date", "-d"])
        .arg(tmp.path().join("content/blog"))
        .arg("{{ title }} - {{ tags | join(',') }}")
        .assert()
        .success()
        .stdout("page1 - rust,hugo\npage2 - rust\n");
}

#[test]
fn list_sorts_by_lastmod_by_default() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "-d"])
        .arg(tmp.path().join("content/blog"))
        .arg("{{ title }}")
        .assert()
        .success()
        .stdout("page2\npage1\n");
}

#[test]
fn list_template_sees_all_pages() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "--sort", "title", "-d"])
        .arg(tmp.path().join("content/blog"))
        .arg("{{ title }}/{{ pages | length }}")
        .assert()
        .success()
        .stdout("page1/2\npage2/2\n");
}

#[test]
fn list_drafts_only() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "--draft", "-d"])
        .arg(tmp.path().join("content/blog"))
        .arg("{{ title }}")
        .assert()
        .success()
        .stdout("page2\n");
}

#[test]
fn list_by_tags() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "--type", "tags", "--sort", "title", "-d"])
        .arg(tmp.path().join("content/blog"))
        .assert()
        .success()
        .stdout("hugo\n    page1    (page1.md)\n\nrust\n    page1    (page1.md)\n    page2    (page2.md)\n\n");
}

#[test]
fn list_bad_sort_fails() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "--sort", "size", "-d"])
        .arg(tmp.path().join("content/blog"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("size"));
}

#[test]
fn list_bad_type_fails() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "--type", "authors", "-d"])
        .arg(tmp.path().join("content/blog"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("authors"));
}

#[test]
fn list_without_root_fails() {
    let tmp = tempdir().unwrap();

    hugo_utils(tmp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("a root path must be specified"));
}

#[test]
fn list_root_from_config() {
    let tmp = site();
    let cfg = tmp.path().join("config.toml");
    write(
        &cfg,
        &format!(
            "[content]\nroot = \"{}\"\n\n[list]\nsort = \"title\"\n",
            tmp.path().join("content/blog").display()
        ),
    );

    hugo_utils(tmp.path())
        .arg("--config")
        .arg(&cfg)
        .args(["list", "{{ file }}"])
        .assert()
        .success()
        .stdout("page1.md\npage2.md\n");
}

#[test]
fn list_missing_directory_fails() {
    let tmp = tempdir().unwrap();

    hugo_utils(tmp.path())
        .args(["list", "-d"])
        .arg(tmp.path().join("nope"))
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn list_invalid_page_fails() {
    let tmp = site();
    write(&tmp.path().join("content/blog/broken.md"), "no front matter here\n");

    hugo_utils(tmp.path())
        .args(["list", "-d"])
        .arg(tmp.path().join("content/blog"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("broken.md"));
}

#[test]
fn list_bad_template_fails_before_output() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "-d"])
        .arg(tmp.path().join("content/blog"))
        .arg("{{ title")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn list_undefined_variable_is_reported() {
    let tmp = site();

    hugo_utils(tmp.path())
        .args(["list", "--sort", "title", "-d"])
        .arg(tmp.path().join("content/blog"))
        .arg("{{ title }} {{ nonexistent }}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("page1.md").and(predicate::str::contains("page2.md")));
}
