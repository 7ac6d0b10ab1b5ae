use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(home: &Path, contacts: &Path, args: &[&str], stdin: &str) -> Output {
    cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG")
        .args(["--contacts", contacts.to_str().expect("contacts path")])
        .args(["--no-color"])
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("run command")
}

fn run_cmd(home: &Path, contacts: &Path, args: &[&str]) -> String {
    let output = run_raw(home, contacts, args, "");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(home: &Path, contacts: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let stdout = run_cmd(home, contacts, &full);
    serde_json::from_str(&stdout).expect("parse json")
}

#[test]
fn cli_add_list_search_delete_flow() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("contacts.txt");

    let added = run_cmd(
        temp.path(),
        &contacts,
        &["add", "--name", "Ada Lovelace", "--phone", "(555) 123-4567"],
    );
    assert_eq!(added.trim(), "added Ada Lovelace 555-123-4567");
    assert_eq!(
        fs::read_to_string(&contacts).expect("read contacts"),
        "Ada Lovelace | 555-123-4567\n"
    );

    let list = run_cmd_json(temp.path(), &contacts, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Ada Lovelace");
    assert_eq!(items[0]["phone"], "555-123-4567");

    let found = run_cmd_json(temp.path(), &contacts, &["search", "ada lovelace"]);
    assert_eq!(found["name"], "Ada Lovelace");

    run_cmd(temp.path(), &contacts, &["delete", "ADA LOVELACE"]);
    let list = run_cmd(temp.path(), &contacts, &["list"]);
    assert_eq!(list.trim(), "no contacts");
}

#[test]
fn cli_add_duplicate_requires_overwrite() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("contacts.txt");
    fs::write(&contacts, "Bob | 5551234567\n").expect("write contacts");

    let output = run_raw(
        temp.path(),
        &contacts,
        &["add", "--name", "bob", "--phone", "5550000"],
        "",
    );
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        fs::read_to_string(&contacts).expect("read contacts"),
        "Bob | 5551234567\n"
    );

    let report = run_cmd_json(
        temp.path(),
        &contacts,
        &["add", "--name", "bob", "--phone", "5550000", "--overwrite"],
    );
    assert_eq!(report["status"], "updated");
    assert_eq!(report["contact"]["name"], "Bob");
    assert_eq!(report["contact"]["phone"], "555-0000");
    assert_eq!(report["previous_phone"], "555-123-4567");
}

#[test]
fn cli_rejects_invalid_phone() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("contacts.txt");

    let output = run_raw(
        temp.path(),
        &contacts,
        &["add", "--name", "Bob", "--phone", "12345"],
        "",
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invalid phone number"));
    assert!(!contacts.exists());
}

#[test]
fn cli_missing_contact_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("contacts.txt");
    fs::write(&contacts, "Bob | 5551234567\n").expect("write contacts");

    let search = run_raw(temp.path(), &contacts, &["search", "Charlie"], "");
    assert_eq!(search.status.code(), Some(2));

    let delete = run_raw(temp.path(), &contacts, &["delete", "Charlie"], "");
    assert_eq!(delete.status.code(), Some(2));
    assert_eq!(
        fs::read_to_string(&contacts).expect("read contacts"),
        "Bob | 5551234567\n"
    );
}

#[test]
fn cli_skips_malformed_lines_with_warning() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("contacts.txt");
    fs::write(&contacts, "Bob | 5551234567\ngarbage\n").expect("write contacts");

    let output = run_raw(temp.path(), &contacts, &["--json", "list"], "");
    assert!(output.status.success(), "command failed: {:?}", output);
    let list: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(list.as_array().expect("array").len(), 1);
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("garbage"));
}

#[test]
fn cli_menu_session_over_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("contacts.txt");
    let banner = temp.path().join("banner.txt");
    fs::write(&banner, "=== CONTACTS ===\n").expect("write banner");

    let output = run_raw(
        temp.path(),
        &contacts,
        &["--banner", banner.to_str().expect("banner path")],
        "2\nGrace\n555-867-5309\n1\n5\n",
    );
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with("=== CONTACTS ==="));
    assert!(stdout.contains("Contact added."));
    assert!(stdout.contains("Grace      | 555-867-5309"));
    assert_eq!(
        fs::read_to_string(&contacts).expect("read contacts"),
        "Grace | 555-867-5309\n"
    );
}

#[test]
fn cli_reads_contacts_path_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("config").join("rolodex");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(config_dir.join("config.toml"), "contacts_path = \"book.txt\"\n")
        .expect("write config");

    let output = cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .args(["add", "--name", "Bob", "--phone", "5551234"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    assert_eq!(
        fs::read_to_string(config_dir.join("book.txt")).expect("read contacts"),
        "Bob | 555-1234\n"
    );
}

#[test]
fn cli_rejects_name_with_line_break() {
    let temp = TempDir::new().expect("temp dir");
    let contacts = temp.path().join("contacts.txt");

    let output = run_raw(
        temp.path(),
        &contacts,
        &["add", "--name", "Line\nBreak", "--phone", "5559999"],
        "",
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(!contacts.exists());
}
