//! End-to-end tests for the notify-migrate binary.

mod common;

use assert_cmd::Command;
use common::{create_test_project, read, IMPORT_LINE};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn notify_migrate() -> Command {
    let mut cmd = Command::cargo_bin("notify-migrate").expect("binary should build");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = notify_migrate().output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn test_migrates_component_on_disk() {
    let source = indoc! {"
        import React from 'react';
        import { apiPost } from '../../utils/ajax';

        const Form = () => {
          const handleSubmit = async () => {
            const ok = window.confirm('Submit?');
            if (!ok) return;
            await apiPost('/api/form', {});
            alert('Submitted');
          };
        };
    "};
    let expected = indoc! {"
        import React from 'react';
        import { apiPost } from '../../utils/ajax';
        import notificationManager from '../../utils/notification';

        const Form = () => {
          const handleSubmit = async () => {
            const ok = await new Promise((resolve) => {
              notificationManager.confirm('Submit?', resolve);
            });
            if (!ok) return;
            await apiPost('/api/form', {});
            notificationManager.show('Submitted', 'info');
          };
        };
    "};
    let (_temp_dir, paths) = create_test_project(&[("src/Form.js", source)]);

    let output = notify_migrate().arg(&paths[0]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(read(&paths[0]), expected);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("updated (2 call site(s) rewritten, import added)"));
    assert!(stdout.contains("1 updated, 0 unchanged, 0 skipped, 0 failed"));
}

#[test]
fn test_batch_reports_every_file_and_skips_missing() {
    let (temp_dir, paths) = create_test_project(&[
        ("a.js", "alert('first');\n"),
        ("c.js", "if (!confirm('Third?')) return;\n"),
    ]);
    let missing = temp_dir.path().join("b.js");

    let output = notify_migrate()
        .arg(&paths[0])
        .arg(&missing)
        .arg(&paths[1])
        .output()
        .unwrap();

    assert!(output.status.success(), "per-file failures keep exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("a.js: updated"), "{}", stdout);
    assert!(lines[1].contains("b.js: file not found, skipped"), "{}", stdout);
    assert!(lines[2].contains("c.js: updated"), "{}", stdout);
    assert!(stdout.contains("Processed 3 file(s): 2 updated, 0 unchanged, 1 skipped, 0 failed"));

    assert!(read(&paths[1]).contains("if (!confirmed) return;"));
    assert!(!missing.exists());
}

#[test]
fn test_file_without_dialogs_is_byte_identical() {
    let source = "import x from 'x';\r\nexport const showAlert = (m) => x.alert(m);\r\n";
    let (_temp_dir, paths) = create_test_project(&[("plain.js", source)]);

    let output = notify_migrate().arg(&paths[0]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(read(&paths[0]), source);
    assert!(String::from_utf8_lossy(&output.stdout).contains("no dialog calls found"));
}

#[test]
fn test_second_run_reports_no_changes() {
    let (_temp_dir, paths) = create_test_project(&[("twice.js", "alert('Saved!');\n")]);

    notify_migrate().arg(&paths[0]).assert().success();
    let after_first = read(&paths[0]);
    notify_migrate().arg(&paths[0]).assert().success();

    assert_eq!(read(&paths[0]), after_first);
    assert_eq!(after_first.matches(IMPORT_LINE).count(), 1);
}

#[test]
fn test_unreadable_file_does_not_stop_batch() {
    let (temp_dir, paths) = create_test_project(&[("ok.js", "alert('fine');\n")]);
    // Latin-1 bytes are not valid UTF-8
    let latin1 = temp_dir.path().join("latin1.js");
    std::fs::write(&latin1, b"alert('caf\xe9');\n").unwrap();

    let output = notify_migrate().arg(&latin1).arg(&paths[0]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("latin1.js: error: read failed"), "{}", stdout);
    assert!(stdout.contains("ok.js: updated"), "{}", stdout);
    assert!(stdout.contains("1 updated, 0 unchanged, 0 skipped, 1 failed"));
    assert_eq!(std::fs::read(&latin1).unwrap(), b"alert('caf\xe9');\n");
}
