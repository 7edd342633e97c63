use std::path::Path;

use crate::project::LoadError;

/// Extract the file extension as a string.
pub fn get_extension(path: &Path) -> Result<&str, LoadError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| LoadError::NoExtension(path.to_path_buf()))
}

/// Check that `ext` is one of the recognised source extensions.
pub fn validate_extension(ext: &str, extensions: &[String]) -> Result<(), LoadError> {
    if extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)) {
        Ok(())
    } else {
        Err(LoadError::UnsupportedExtension(ext.to_string()))
    }
}

/// Read a source file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; only a
/// failed read is an error.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|err| LoadError::io(path, err))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}
