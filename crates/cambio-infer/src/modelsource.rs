use std::path::PathBuf;

/// Where a serialized model comes from.
#[derive(Debug, Clone)]
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}

impl ModelSource {
    /// Read the whole asset into memory.
    pub fn into_bytes(self) -> std::io::Result<Vec<u8>> {
        match self {
            ModelSource::File(path) => std::fs::read(path),
            ModelSource::Memory(bytes) => Ok(bytes),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ModelSource::File(path) => path.display().to_string(),
            ModelSource::Memory(bytes) => format!("<{} bytes in memory>", bytes.len()),
        }
    }
}
