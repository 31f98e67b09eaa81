use crate::errors::AppResult;
use std::io::{Write, stdin, stdout};
use std::path::Path;

/// Ask before overwriting an existing file unless `force` is set.
/// Returns false when the user declines.
pub fn confirm_overwrite(path: &Path, force: bool) -> AppResult<bool> {
    if force || !path.exists() {
        return Ok(true);
    }

    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        path.display()
    );

    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
