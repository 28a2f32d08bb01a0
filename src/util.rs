/// Shared filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;

    use camino::Utf8Path;

    /// Ensure a directory exists, creating it and any missing ancestors.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<()> {
        if !path.is_dir() {
            tracing::debug!(%path, "creating directory");
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

}
