//! Test-only helpers for staging startup scripts.

#[cfg(unix)]
use std::path::Path;

/// Write an executable `run.sh` with `body` into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, body: &str) -> anyhow::Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use anyhow::Context;

    let path = dir.join("run.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .with_context(|| format!("write {}", path.display()))?;

    let mut perms = fs::metadata(&path)
        .with_context(|| format!("stat {}", path.display()))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).with_context(|| format!("chmod {}", path.display()))?;
    Ok(())
}
