pub mod cpp;

use std::fmt;

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};

use crate::templates;

/// Which branch a scaffold check took.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScaffoldOutcome {
    /// The file was missing and has been written; holds the path relative to the root.
    Created(Utf8PathBuf),
    AlreadyExists,
}

impl fmt::Display for ScaffoldOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldOutcome::Created(path) => {
                write!(f, "[SELF-HEAL] Created missing test: {path}")
            }
            ScaffoldOutcome::AlreadyExists => f.write_str("[SELF-HEAL] Test file already exists."),
        }
    }
}

/// Write `template` to `root/relative` unless something already exists there.
///
/// Anything at the path counts as present, including a directory. Existing
/// content is never read or modified.
pub fn ensure_file(
    root: &Utf8Path,
    relative: &Utf8Path,
    template: &str,
) -> Result<ScaffoldOutcome> {
    let destination = root.join(relative);
    tracing::debug!(path = %destination, "checking scaffold target");
    if destination.exists() {
        return Ok(ScaffoldOutcome::AlreadyExists);
    }

    templates::write_template(&destination, template)?;
    Ok(ScaffoldOutcome::Created(relative.to_owned()))
}
