use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use shayari_cli::{Args, CliError, Format, ModeArg, run};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Collects all .toml card files from a directory
fn collect_card_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_dir() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Writes a config that renders headless and reproducibly
fn write_headless_config(dir: &Path) -> String {
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "[text]\nmeasurement = \"monospace\"\n\n[fonts]\nload_system_fonts = false\n",
    )
    .expect("Failed to write config");
    path.to_string_lossy().to_string()
}

fn args(input: &Path, output: &Path, config: String) -> Args {
    Args {
        input: Some(input.to_string_lossy().to_string()),
        output: output.to_string_lossy().to_string(),
        mode: ModeArg::Both,
        format: Format::Png,
        card: None,
        plain_text: false,
        list_backgrounds: false,
        config: Some(config),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_card_files() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = write_headless_config(temp_dir.path());

    let card_files = collect_card_files(demos_dir());
    assert!(!card_files.is_empty(), "No card files found in demos/");

    let mut failed = Vec::new();

    for card_file in &card_files {
        let output_dir = temp_dir
            .path()
            .join(card_file.file_stem().unwrap().to_string_lossy().to_string());

        match run(&args(card_file, &output_dir, config.clone())) {
            Ok(()) => {
                let outputs = fs::read_dir(&output_dir)
                    .map(|entries| entries.count())
                    .unwrap_or(0);
                if outputs == 0 {
                    failed.push(format!("{}: no images written", card_file.display()));
                }
            }
            Err(err) => failed.push(format!("{}: {err}", card_file.display())),
        }
    }

    assert!(failed.is_empty(), "Failed card files:\n{}", failed.join("\n"));
}

#[test]
fn e2e_writes_suggested_filenames() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = write_headless_config(temp_dir.path());
    let output_dir = temp_dir.path().join("out");

    run(&args(
        &demos_dir().join("anonymous.toml"),
        &output_dir,
        config,
    ))
    .expect("Failed to render anonymous.toml");

    for name in ["shayari-10.png", "shayari-screenshot-10.png"] {
        let bytes = fs::read(output_dir.join(name)).expect(name);
        assert_eq!(bytes[..8], PNG_SIGNATURE, "{name}");
    }
}

#[test]
fn e2e_svg_format_and_single_card() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = write_headless_config(temp_dir.path());
    let output_dir = temp_dir.path().join("svg");

    let mut args = args(&demos_dir().join("ghalib.toml"), &output_dir, config);
    args.mode = ModeArg::Document;
    args.format = Format::Svg;
    args.card = Some(2);
    run(&args).expect("Failed to render ghalib.toml");

    let written: Vec<_> = fs::read_dir(&output_dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(written, ["shayari-screenshot-2.svg"]);

    let svg = fs::read_to_string(output_dir.join("shayari-screenshot-2.svg")).unwrap();
    assert!(svg.contains("Dil hi to hai na sang-o-khisht"));
    assert!(svg.contains("- Mirza Ghalib"));
}

#[test]
fn e2e_unknown_card_id_fails_without_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = write_headless_config(temp_dir.path());
    let output_dir = temp_dir.path().join("none");

    let mut args = args(&demos_dir().join("ghalib.toml"), &output_dir, config);
    args.card = Some(999);

    let err = run(&args).unwrap_err();
    assert!(matches!(err, CliError::Shayari(_)), "{err:?}");
    assert!(!output_dir.exists());
}

#[test]
fn e2e_malformed_card_file_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = write_headless_config(temp_dir.path());
    let input = temp_dir.path().join("broken.toml");
    fs::write(&input, "[[cards]]\nid = 1\n").unwrap();

    let err = run(&args(&input, &temp_dir.path().join("out"), config)).unwrap_err();
    assert!(matches!(err, CliError::CardFile(_)), "{err:?}");
}
