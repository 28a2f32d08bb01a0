use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::Cli;
use crate::scaffold;

pub fn run(cli: Cli) -> Result<()> {
    let _ = cli;

    let cwd = std::env::current_dir().context("determining current directory")?;
    let root = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|path| anyhow!("current directory {} is not valid UTF-8", path.display()))?;

    let outcome = scaffold::cpp::ensure_test_file(&root)?;
    println!("{outcome}");
    Ok(())
}
