use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds `<tmp>/jd/10-19 Admin/11 Finance/11.01 Invoices` and friends, and
/// returns the temp dir plus the tree root.
fn sample_tree() -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("jd");
    for dir in [
        "10-19 Admin/11 Finance/11.01 Invoices",
        "10-19 Admin/11 Finance/11.02 Receipts",
        "10-19 Admin/12 Legal",
        "20-29 Work/21 Clients",
    ] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    fs::write(root.join("10-19 Admin/11 Finance/11.03 not a folder.txt"), "").unwrap();
    (temp, root)
}

/// A jdnav command isolated from the user's real config and environment.
fn jdnav(temp: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jdnav").unwrap();
    cmd.env("JDNAV_CONFIG_DIR", temp.join("config"))
        .env_remove("JDNAV_ROOT")
        .env_remove("JDNAV_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_find_id_with_root_flag() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .arg("--root")
        .arg(&root)
        .args(["find", "1101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11.01 Invoices"))
        .stdout(predicate::str::contains("11.02 Receipts").not());
}

#[test]
fn test_naked_query_with_separator_words() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .args(["11", "02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11.02 Receipts"));
}

#[test]
fn test_category_query_lists_categories() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .arg("11")
        .assert()
        .success()
        .stdout(predicate::str::contains("11 Finance"))
        .stdout(predicate::str::contains("12 Legal").not());
}

#[test]
fn test_path_only_prints_bare_path() {
    let (temp, root) = sample_tree();
    let expected = root.join("10-19 Admin/11 Finance/11.01 Invoices");

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .args(["-p", "11.01 Invoices"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn test_json_output() {
    let (temp, root) = sample_tree();

    let output = jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .args(["find", "--json", "12"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["folders"][0]["name"], "12 Legal");
    assert_eq!(value["identifier"]["area"], "1");
}

#[test]
fn test_root_not_configured() {
    let temp = tempfile::tempdir().unwrap();

    jdnav(temp.path())
        .arg("1101")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Root folder is not configured"));
}

#[test]
fn test_root_does_not_exist() {
    let temp = tempfile::tempdir().unwrap();

    jdnav(temp.path())
        .env("JDNAV_ROOT", temp.path().join("missing"))
        .arg("1101")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_area_names_pattern() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .arg("3101")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Area '30-39' is empty"));
}

#[test]
fn test_missing_id() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .arg("11.03")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ID '11.03' is empty"));
}

#[test]
fn test_invalid_query() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .args(["find", "invoices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid Johnny.Decimal id"));
}

#[test]
fn test_config_root_is_used_by_find() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .arg("config")
        .arg("root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("root set to"));

    jdnav(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("root = {}", root.display())))
        .stdout(predicate::str::contains("opener = (not set)"));

    jdnav(temp.path())
        .args(["-p", "21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("21 Clients"));
}

#[test]
fn test_flag_overrides_config_root() {
    let (temp, root) = sample_tree();
    let other = temp.path().join("elsewhere");
    fs::create_dir_all(&other).unwrap();

    jdnav(temp.path())
        .args(["config", "root"])
        .arg(&other)
        .assert()
        .success();

    jdnav(temp.path())
        .arg("--root")
        .arg(&root)
        .arg("12")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 Legal"));
}

#[test]
fn test_parse_command() {
    let temp = tempfile::tempdir().unwrap();

    jdnav(temp.path())
        .args(["parse", "11.01 Invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11.01"))
        .stdout(predicate::str::contains("11.01*"));
}

#[test]
fn test_no_args_prints_help() {
    let temp = tempfile::tempdir().unwrap();

    jdnav(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_root_flag_before_parse() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .arg("--root")
        .arg(&root)
        .args(["parse", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category  11    11*"));
}

#[test]
fn test_root_flag_before_config() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .arg("-r")
        .arg(&root)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("root = (not set)"))
        .stdout(predicate::str::contains(format!("using root {}", root.display())));
}

#[test]
fn test_parse_rejects_text() {
    let temp = tempfile::tempdir().unwrap();

    jdnav(temp.path())
        .args(["parse", "Invoices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Invoices' is not a Johnny.Decimal id"));
}

#[test]
fn test_quiet_by_default() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .arg("1101")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_verbose_logs_to_stderr_in_either_position() {
    let (temp, root) = sample_tree();

    for args in [["-v", "find", "1101"], ["find", "1101", "-v"]] {
        jdnav(temp.path())
            .env("JDNAV_ROOT", &root)
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("11.01 Invoices"))
            .stdout(predicate::str::contains("listed folder").not())
            .stderr(predicate::str::contains("listed folder"));
    }
}

#[test]
fn test_log_filter_from_env() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .env("JDNAV_ROOT", &root)
        .env("JDNAV_LOG", "debug")
        .args(["-p", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("listed folder"))
        .stderr(predicate::str::contains("Area '30-39' is empty"));
}

#[test]
fn test_relative_config_root_survives_cwd_change() {
    let (temp, _root) = sample_tree();
    let elsewhere = temp.path().join("elsewhere");
    fs::create_dir_all(&elsewhere).unwrap();

    jdnav(temp.path())
        .current_dir(temp.path())
        .args(["config", "root", "jd"])
        .assert()
        .success();

    jdnav(temp.path())
        .current_dir(&elsewhere)
        .args(["-p", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12 Legal"));
}

#[test]
fn test_config_unset_root() {
    let (temp, root) = sample_tree();

    jdnav(temp.path())
        .args(["config", "root"])
        .arg(&root)
        .assert()
        .success();

    jdnav(temp.path())
        .args(["config", "root", "--unset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root unset"));

    jdnav(temp.path())
        .arg("12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root folder is not configured"));
}
