use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn cli_renders_sample_svg_to_stdout() {
    let exe = assert_cmd::cargo_bin!("steambadge-cli");
    let assert = Command::new(exe).arg("sample").assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(out.starts_with("<svg"));
    assert!(out.contains("TEST USER"));
    assert!(out.contains("Remnant: From the Ashes"));
}

#[test]
fn cli_renders_fields_json_to_a_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let fields = tmp.path().join("fields.json");
    fs::write(
        &fields,
        r#"{"playerName":"gabe","steamLevel":10,"lastPlayedGame":"Half-Life 3"}"#,
    )
    .expect("write fields");
    let out = tmp.path().join("badge.svg");

    let exe = assert_cmd::cargo_bin!("steambadge-cli");
    Command::new(exe)
        .args([
            "render",
            "--lang",
            "ru",
            "--out",
            out.to_string_lossy().as_ref(),
            fields.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read badge");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("gabe"));
    assert!(svg.contains("Последняя игра:"));
}

#[test]
fn cli_sample_html_variant_embeds_fields() {
    let exe = assert_cmd::cargo_bin!("steambadge-cli");
    let assert = Command::new(exe)
        .args(["sample", "--html"])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(out.starts_with(r#"<div class="steam-badge"#));
    assert!(out.contains("TEST USER"));
}

#[test]
fn cli_rejects_unknown_flags() {
    let exe = assert_cmd::cargo_bin!("steambadge-cli");
    Command::new(exe)
        .args(["render", "--bogus"])
        .assert()
        .code(2);
}
