use std::fs;
use std::path::{Path, PathBuf};

use leafmark_core::{RenderOptions, render};

#[test]
fn golden_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let fixtures_dir = root.join("tests/fixtures");
    let expect_dir = root.join("tests/expect");

    let mut fixtures: Vec<PathBuf> = fs::read_dir(&fixtures_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("md"))
        .collect();
    fixtures.sort();
    assert!(!fixtures.is_empty(), "no fixtures in {:?}", fixtures_dir);

    for fixture in fixtures {
        let name = fixture
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or("fixture name")?
            .to_string();
        let source = fs::read_to_string(&fixture)?;
        let html = render(&source, &RenderOptions::chat());

        let expected = fs::read_to_string(expect_dir.join(format!("{}.html", name)))?;
        assert_eq!(
            html.trim_end(),
            expected.trim_end(),
            "HTML mismatch for fixture {}",
            name
        );
    }

    Ok(())
}
