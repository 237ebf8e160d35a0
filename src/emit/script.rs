use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use crate::config::OutputSettings;
use crate::plan::{PlanEntry, UnitPlan, sanitize};

/// Quote `s` for a POSIX shell, single quotes and all.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Text safe to place after `#`: control characters are written as escapes so
/// a line break in a title or file name cannot end the comment.
pub fn comment_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

fn unit_path(location: &Path, name: &str) -> String {
    location.join(name).display().to_string()
}

/// Shell script rendering of a list of unit plans.
pub struct Script<'a> {
    plans: &'a [UnitPlan],
    settings: &'a OutputSettings,
}

impl<'a> Script<'a> {
    pub fn new(plans: &'a [UnitPlan], settings: &'a OutputSettings) -> Self {
        Self { plans, settings }
    }

    fn fmt_unit(&self, f: &mut fmt::Formatter<'_>, plan: &UnitPlan) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "# === {} ===",
            comment_text(&plan.location.display().to_string())
        )?;
        writeln!(f, "#   - {} audio files", plan.file_count)?;
        writeln!(f, "#   - {} tracks", plan.track_count)?;
        if plan.count_mismatch() {
            writeln!(
                f,
                "#   ! file count {} does not match track count {}",
                plan.file_count, plan.track_count
            )?;
        }

        for entry in &plan.entries {
            match entry {
                PlanEntry::Move { from, to } => writeln!(
                    f,
                    "mv -- {} {}",
                    shell_quote(&unit_path(&plan.location, from)),
                    shell_quote(&unit_path(&plan.location, to))
                )?,
                PlanEntry::Skip { path } => {
                    writeln!(
                    f,
                    "# skipped: {}",
                    comment_text(&unit_path(&plan.location, path))
                )?
                }
                PlanEntry::Unmatched { track } if self.settings.list_unmatched => writeln!(
                    f,
                    "# unmatched: {} {}",
                    track.padded_number(plan.number_width),
                    comment_text(&track.title)
                )?,
                PlanEntry::Unmatched { .. } => {}
            }
        }

        if self.settings.list_residual {
            for name in &plan.residual {
                writeln!(f, "# residual: {}", comment_text(name))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Script<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.settings.interpreter.trim_end())?;
        for plan in self.plans {
            self.fmt_unit(f, plan)?;
        }
        Ok(())
    }
}

/// Render all unit plans as one shell script.
pub fn render_script(plans: &[UnitPlan], settings: &OutputSettings) -> String {
    Script::new(plans, settings).to_string()
}

/// `rename_<tag>_<timestamp>.sh`, with the tag part sanitized.
pub fn script_file_name(tag: &str, timestamp: &str) -> String {
    let stem = if tag.is_empty() {
        "rename".to_string()
    } else {
        sanitize(&format!("rename_{tag}"))
    };
    format!("{stem}_{timestamp}.sh")
}

/// Local time formatted for the script name.
pub fn timestamp(format: &str) -> String {
    chrono::Local::now().format(format).to_string()
}

/// Write `contents` to `dir/name`; never overwrites an existing file.
pub fn write_script(dir: &Path, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    drop(file);
    make_executable(&path)?;
    Ok(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
