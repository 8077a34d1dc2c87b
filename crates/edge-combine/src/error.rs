use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures raised while reading, combining or writing `.edge` matrices.
#[derive(Debug)]
pub enum EdgeError {
    /// The matrix is not square.
    Shape {
        path: PathBuf,
        rows: usize,
        cols: usize,
    },
    /// A row has a different number of values than the first row.
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token could not be parsed as a number.
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },
    /// The file contains no rows at all.
    EmptyMatrix(PathBuf),
    /// The folder holds no eligible `.edge` files.
    EmptyInput(PathBuf),
    /// The output name is not a bare file name.
    InvalidOutputName(String),
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl EdgeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EdgeError::Io {
            path: path.into(),
            source,
        }
    }

    /// The file or folder the error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            EdgeError::Shape { path, .. }
            | EdgeError::Ragged { path, .. }
            | EdgeError::Parse { path, .. }
            | EdgeError::Io { path, .. }
            | EdgeError::EmptyMatrix(path)
            | EdgeError::EmptyInput(path) => Some(path),
            EdgeError::InvalidOutputName(_) => None,
        }
    }
}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EdgeError::Shape { path, rows, cols } => write!(
                f,
                "{} is not square: found {} rows and {} columns",
                path.display(),
                rows,
                cols
            ),
            EdgeError::Ragged {
                path,
                line,
                expected,
                found,
            } => write!(
                f,
                "{} has ragged rows: line {} has {} values, expected {}",
                path.display(),
                line,
                found,
                expected
            ),
            EdgeError::Parse { path, line, token } => write!(
                f,
                "{}: invalid number '{}' on line {}",
                path.display(),
                token,
                line
            ),
            EdgeError::EmptyMatrix(path) => {
                write!(f, "{} does not contain any matrix rows", path.display())
            }
            EdgeError::EmptyInput(folder) => {
                write!(f, "No .edge files found in {}", folder.display())
            }
            EdgeError::InvalidOutputName(name) => {
                write!(f, "Output name must be a plain file name, got '{}'", name)
            }
            EdgeError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl Error for EdgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EdgeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
