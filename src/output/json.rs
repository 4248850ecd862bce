//! JSON output writer.
//!
//! Serializes dashboard artifacts as ASCII-only JSON and writes them
//! atomically: content goes to a temporary file next to the target,
//! which is then renamed over it.

use super::schema::{Dashboard, LiteRecord};
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Render the dashboard as 2-space indented ASCII JSON
pub fn render_dashboard(dashboard: &Dashboard) -> Result<String, OutputError> {
    to_ascii_json(dashboard, true)
}

/// Render lean records as a single-line ASCII JSON array
pub fn render_records(records: &[LiteRecord]) -> Result<String, OutputError> {
    to_ascii_json(records, false)
}

/// Write the dashboard document to a JSON file
///
/// **Public** - main entry point for dashboard output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_dashboard(
    dashboard: &Dashboard,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let contents = render_dashboard(dashboard)?;
    write_atomic(&contents, output_path)
}

/// Write lean records to a JSON file
///
/// **Public** - returns the number of records written
pub fn write_records(
    records: &[LiteRecord],
    output_path: impl AsRef<Path>,
) -> Result<usize, OutputError> {
    let contents = render_records(records)?;
    write_atomic(&contents, output_path)?;
    Ok(records.len())
}

/// Serialize any value, escaping non-ASCII characters
fn to_ascii_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        value.serialize(&mut serializer)?;
        String::from_utf8(buf)
            .map_err(|e| OutputError::WriteFailed(io::Error::new(io::ErrorKind::InvalidData, e)))?
    };
    Ok(escape_non_ascii(&json))
}

/// Single-line output with `", "` between items and `": "` after keys
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Replace every non-ASCII character with `\uXXXX` escapes
///
/// Characters outside the BMP become a UTF-16 surrogate pair. In valid
/// JSON non-ASCII text only occurs inside strings, so this is safe to
/// apply to a whole document.
pub fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0u16; 2];

    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }

    escaped
}

/// Write `contents` to `output_path` via a temporary sibling file
///
/// **Public** - used by the build command after all rendering succeeds
pub fn write_atomic(contents: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {}", output_path.display());

    validate_output_path(output_path)?;

    let parent = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!(
                "Cannot create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp = create_temp_in(parent)?;
    temp.write_all(contents.as_bytes())?;
    temp.flush()?;

    // Keep the mode of a file being replaced
    if let Ok(existing) = std::fs::metadata(output_path) {
        temp.as_file().set_permissions(existing.permissions())?;
    }

    temp.persist(output_path)
        .map_err(|e| OutputError::WriteFailed(e.error))?;

    debug!("Wrote {} bytes to {}", contents.len(), output_path.display());

    Ok(())
}

/// Temporary file that gets the same default mode as a plain `File::create`
///
/// **Private** - `NamedTempFile::new_in` alone yields an owner-only file
#[cfg(unix)]
fn create_temp_in(dir: &Path) -> Result<NamedTempFile, OutputError> {
    use std::os::unix::fs::PermissionsExt;

    // Passed at creation, so the process umask still applies
    Ok(tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?)
}

#[cfg(not(unix))]
fn create_temp_in(dir: &Path) -> Result<NamedTempFile, OutputError> {
    Ok(NamedTempFile::new_in(dir)?)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a dashboard document from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_dashboard(input_path: impl AsRef<Path>) -> Result<Dashboard, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading dashboard from: {}", input_path.display());

    let file = File::open(input_path)?;
    let dashboard: Dashboard = serde_json::from_reader(BufReader::new(file))?;

    Ok(dashboard)
}

/// Read lean records from a JSON file
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<LiteRecord>, OutputError> {
    let file = File::open(input_path.as_ref())?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::WorkMode;
    use pretty_assertions::assert_eq;

    fn record(province: &str) -> LiteRecord {
        LiteRecord {
            p: province.to_string(),
            e: "1-3".to_string(),
            ed: "Bachelor".to_string(),
            s: 6000.0,
            wm: WorkMode::Fixed,
            st: "monthly".to_string(),
            ct: "Private".to_string(),
        }
    }

    #[test]
    fn test_escape_non_ascii() {
        assert_eq!(escape_non_ascii("\"北京\""), "\"\\u5317\\u4eac\"");
        assert_eq!(escape_non_ascii("plain"), "plain");
        assert_eq!(escape_non_ascii("😀"), "\\ud83d\\ude00");
    }

    #[test]
    fn test_render_records_single_line_ascii() {
        let json = render_records(&[record("北京")]).unwrap();

        assert_eq!(
            json,
            r#"[{"p": "\u5317\u4eac", "e": "1-3", "ed": "Bachelor", "s": 6000.0, "wm": "fixed", "st": "monthly", "ct": "Private"}]"#
        );
        assert!(json.is_ascii());
    }

    #[test]
    fn test_write_and_read_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("records-lite.json");
        let records = vec![record("北京"), record("Hubei")];

        let written = write_records(&records, &path).unwrap();
        let loaded = read_records(&path).unwrap();

        assert_eq!(written, 2);
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/records-lite.json");

        write_records(&[record("Hubei")], &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("records-lite.json");
        std::fs::write(&path, "stale").unwrap();

        write_records(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_render_records_separators() {
        let json = render_records(&[record("Hubei"), record("Hubei")]).unwrap();

        assert!(json.starts_with(r#"[{"p": "Hubei", "e": "1-3""#));
        assert!(json.contains(r#""Private"}, {"p": "Hubei""#));
        assert_eq!(render_records(&[]).unwrap(), "[]");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let plain = temp_dir.path().join("plain.json");
        let path = temp_dir.path().join("dashboard-data.json");
        std::fs::write(&plain, "{}").unwrap();

        write_atomic("{}", &path).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(path.as_path()), mode(plain.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_replaced_file_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("records-lite.json");
        std::fs::write(&path, "stale").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic("[]", &path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }
}
