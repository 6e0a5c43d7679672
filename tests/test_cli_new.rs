// Contract tests for the `tpg new` command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SERVLET_TEMPLATE: &str = include_str!("../templates/MyServlet.java");
const JSP_TEMPLATE: &str = include_str!("../templates/index.jsp");
const HTML_TEMPLATE: &str = include_str!("../templates/index.html");

#[test]
fn test_tpg_new_end_to_end_declining_renames() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("tpg").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("new")
        .write_stdin("demo\nno\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Creating project folder 'demo'..."))
        .stdout(predicate::str::contains(
            "Folder structure created successfully:",
        ))
        .stdout(predicate::str::contains("Default files created:"))
        .stdout(predicate::str::contains(
            "Project setup complete! You can now open the new folder in IntelliJ.",
        ));

    let root = temp_dir.path().join("demo");
    let servlet = root.join("src/main/java/com/example/MyServlet.java");
    let jsp = root.join("src/main/webapp/index.jsp");
    let html = root.join("src/main/webapp/index.html");

    assert_eq!(fs::read_to_string(&servlet).unwrap(), SERVLET_TEMPLATE);
    assert_eq!(fs::read_to_string(&jsp).unwrap(), JSP_TEMPLATE);
    assert_eq!(fs::read_to_string(&html).unwrap(), HTML_TEMPLATE);

    // WEB-INF and resources exist and stay empty.
    let web_inf = root.join("src/main/webapp/WEB-INF");
    let resources = root.join("src/main/resources");
    assert!(web_inf.is_dir());
    assert!(resources.is_dir());
    assert_eq!(fs::read_dir(&web_inf).unwrap().count(), 0);
    assert_eq!(fs::read_dir(&resources).unwrap().count(), 0);
}

#[test]
fn test_tpg_new_with_name_flag() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("tpg").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["new", "--name", "my-webapp"])
        .write_stdin("no\n");

    cmd.assert().success();

    let root = temp_dir.path().join("my-webapp");
    assert!(root.join("src/main/webapp/index.jsp").is_file());
}

#[test]
fn test_tpg_new_empty_name_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("tpg").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("new")
        .write_stdin("\n");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Project name cannot be empty"));

    // Nothing was created in the working directory.
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_tpg_new_is_rerunnable_on_existing_project() {
    let temp_dir = TempDir::new().unwrap();

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("tpg").unwrap();
        cmd.current_dir(temp_dir.path())
            .args(["new", "--name", "demo"])
            .write_stdin("no\n");
        cmd.assert().success();
    }

    let root = temp_dir.path().join("demo");
    assert!(root.join("src/main/java/com/example/MyServlet.java").is_file());
}

#[test]
fn test_tpg_new_rename_flow() {
    let temp_dir = TempDir::new().unwrap();

    // Rename the servlet to MainServlet (extension appended), keep the JSP,
    // and rename the HTML page to home.txt (mismatched extension appended).
    let mut cmd = Command::cargo_bin("tpg").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["new", "--name", "demo"])
        .write_stdin("yes\nyes\nMainServlet\nno\nyes\nhome.txt\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "File successfully renamed from 'MyServlet.java' to 'MainServlet.java'.",
        ))
        .stdout(predicate::str::contains(
            "New filename must end with '.html'. Appending extension...",
        ));

    let root = temp_dir.path().join("demo");
    let package_dir = root.join("src/main/java/com/example");
    let webapp_dir = root.join("src/main/webapp");

    assert!(package_dir.join("MainServlet.java").is_file());
    assert!(!package_dir.join("MyServlet.java").exists());
    assert!(webapp_dir.join("index.jsp").is_file());
    assert!(webapp_dir.join("home.txt.html").is_file());
    assert!(!webapp_dir.join("index.html").exists());

    // Renaming never touches the content.
    assert_eq!(
        fs::read_to_string(package_dir.join("MainServlet.java")).unwrap(),
        SERVLET_TEMPLATE
    );
}

#[test]
fn test_tpg_new_only_exact_yes_triggers_renaming() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("tpg").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["new", "--name", "demo"])
        .write_stdin("y\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Okay, keeping the default filenames."));

    let root = temp_dir.path().join("demo");
    assert!(root.join("src/main/java/com/example/MyServlet.java").is_file());
    assert!(root.join("src/main/webapp/index.jsp").is_file());
    assert!(root.join("src/main/webapp/index.html").is_file());
}

#[test]
fn test_tpg_new_with_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("tpg").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["new", "--name", "demo", "--json"]);

    let assert = cmd.assert().success();

    let output = assert.get_output();
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["project_name"], "demo");
    assert_eq!(json["directories"].as_array().unwrap().len(), 4);

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert_eq!(files[0]["default_name"], "MyServlet.java");
    assert_eq!(files[1]["default_name"], "index.jsp");
    assert_eq!(files[2]["default_name"], "index.html");

    // JSON mode is non-interactive; the project is still fully seeded.
    let root = temp_dir.path().join("demo");
    assert!(root.join("src/main/webapp/index.html").is_file());
}
