use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn get_fixture_dir() -> PathBuf {
    env::var("YQL_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Writes `body` to `<fixture dir>/<key>.<ext>`, creating the directory if needed.
pub(crate) fn record_fixture(key: &str, ext: &str, body: &str) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(format!("{key}.{ext}"));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    if env::var("YQL_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("YQL_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
