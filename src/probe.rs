//! The file probe: open a file, report its size and pull it into memory.

use std::{
    ffi::OsString,
    fs::File,
    io::{self, BufRead, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is {size} bytes, too large to hold in memory", path.display())]
    TooLarge { path: PathBuf, size: u64 },
    #[error("Short read on {}: expected {expected} bytes, got {actual}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
    #[error("Could not read the file name")]
    Input(#[source] io::Error),
    #[error("Could not write status output")]
    Output(#[from] io::Error),
}

/// Everything learned about a probed file.
#[derive(Debug)]
pub struct ProbeReport {
    pub path: PathBuf,
    pub size: u64,
    pub data: Vec<u8>,
}

/// Returns the first whitespace-delimited token of `reader` as a path, or an
/// empty path when the input holds none. The token is taken as raw bytes, so
/// names that are not UTF-8 survive.
pub fn read_file_name<R: BufRead>(reader: &mut R) -> Result<PathBuf, ProbeError> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(ProbeError::Input)?;
        if n == 0 {
            return Ok(PathBuf::new());
        }
        if let Some(token) = line
            .split(|b| b.is_ascii_whitespace())
            .find(|t| !t.is_empty())
        {
            return Ok(PathBuf::from(bytes_to_os_string(token.to_vec())));
        }
    }
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

/// Opens `path` for binary reading. Directories count as an open failure.
pub fn open_file(path: &Path) -> Result<File, ProbeError> {
    let open_err = |source| ProbeError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;
    let meta = file.metadata().map_err(open_err)?;
    if meta.is_dir() {
        return Err(open_err(io::Error::from(io::ErrorKind::IsADirectory)));
    }
    Ok(file)
}

/// Seeks to the end of `file` and returns the position, i.e. its length.
pub fn measure(
    file: &mut File,
    path: &Path,
) -> Result<u64, ProbeError> {
    file.seek(SeekFrom::End(0))
        .map_err(|source| ProbeError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Rewinds `file` and reads exactly `size` bytes into a fresh buffer.
pub fn read_all(
    file: &mut File,
    path: &Path,
    size: u64,
) -> Result<Vec<u8>, ProbeError> {
    let read_err = |source| ProbeError::Read {
        path: path.to_path_buf(),
        source,
    };
    let too_large = || ProbeError::TooLarge {
        path: path.to_path_buf(),
        size,
    };

    let capacity = usize::try_from(size).map_err(|_| too_large())?;
    let mut data = Vec::new();
    data.try_reserve_exact(capacity).map_err(|_| too_large())?;

    file.seek(SeekFrom::Start(0)).map_err(read_err)?;
    Read::by_ref(file).take(size).read_to_end(&mut data).map_err(read_err)?;

    let actual = data.len() as u64;
    if actual != size {
        return Err(ProbeError::ShortRead {
            path: path.to_path_buf(),
            expected: size,
            actual,
        });
    }
    Ok(data)
}

/// Opens, measures and reads `path` without printing anything.
pub fn probe_file(path: &Path) -> Result<ProbeReport, ProbeError> {
    let mut file = open_file(path)?;
    let size = measure(&mut file, path)?;
    let data = read_all(&mut file, path, size)?;
    Ok(ProbeReport {
        path: path.to_path_buf(),
        size,
        data,
    })
}

/// Runs the full probe for `path`, writing status lines to `out`.
///
/// An open failure is reported on `out` before the error is returned, so
/// callers only need to turn it into an exit status.
pub fn run_probe<W: Write>(
    path: &Path,
    out: &mut W,
) -> Result<ProbeReport, ProbeError> {
    let name = path.display();
    let mut file = match open_file(path) {
        Ok(f) => f,
        Err(e) => {
            debug!("open failed: {e:?}");
            writeln!(out, "Failed to open file {name}")?;
            return Err(e);
        }
    };
    writeln!(out, "Opened {name}")?;

    let size = measure(&mut file, path)?;
    writeln!(out, "File is size {size}")?;

    let data = read_all(&mut file, path, size)?;
    debug!(bytes = data.len(), "file read into memory");
    writeln!(out, "Done.")?;

    Ok(ProbeReport {
        path: path.to_path_buf(),
        size,
        data,
    })
}
