use std::path::Path;
use std::process::{Command, Output};

fn genicon(assets: &Path, size: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genicon"))
        .env("CRABCHAT_ASSETS_DIR", assets)
        .env("CRABCHAT_ICON_SIZE", size)
        .env("CRABCHAT_ICONUTIL", "crabchat-no-such-iconutil")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_packaging_tool_still_exits_successfully() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("assets");

    let out = genicon(&assets, "64");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(assets.join("icon.png").is_file());
    assert!(assets.join("icon.ico").is_file());
    assert!(!assets.join("icon.icns").exists());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "{stdout}");
    assert!(lines[0].ends_with("icon.png (64x64)"));
    assert!(lines[1].contains("icon.ico (sizes: [16, 32, 48, 64, 128, 256])"));
    assert_eq!(lines[2], "crabchat-no-such-iconutil not found, skipping .icns generation (macOS only)");
    assert!(lines[3].starts_with("Done! All icons generated in "));
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn invalid_size_exits_with_failure_and_one_error() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("assets");

    let out = genicon(&assets, "0");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr.matches("Error:").count(), 1, "{stderr}");
    assert!(!assets.exists());
}
