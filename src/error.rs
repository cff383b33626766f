use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("no global window is available")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("missing #{0} mount point")]
    MissingMountPoint(&'static str),
}
