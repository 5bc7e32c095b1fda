use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

pub enum ReadError {
    Open(PathBuf, std::io::Error),

    /// An xz compressed file, without support for xz compression.
    #[cfg_attr(feature = "xz", allow(dead_code))]
    Xz(PathBuf),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(path, e) => write!(f, "Could not open {}: {e}", path.display()),
            Self::Xz(path) => write!(f, "Could not read {}: built without the xz feature", path.display()),
        }
    }
}

/// A buffered reader for the file at `path`, decompressed if the file has an `xz` extension.
pub fn file_reader(path: &Path) -> Result<Box<dyn BufRead>, ReadError> {
    let file = match File::open(path) {
        Err(e) => return Err(ReadError::Open(path.to_path_buf(), e)),
        Ok(f) => f,
    };

    match path.extension() {
        Some(extension) if extension == "xz" => xz_reader(path, file),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

#[cfg(feature = "xz")]
fn xz_reader(_: &Path, file: File) -> Result<Box<dyn BufRead>, ReadError> {
    Ok(Box::new(BufReader::new(xz2::read::XzDecoder::new(file))))
}

#[cfg(not(feature = "xz"))]
fn xz_reader(path: &Path, _: File) -> Result<Box<dyn BufRead>, ReadError> {
    Err(ReadError::Xz(path.to_path_buf()))
}
