//! External pager adapter.
//!
//! Resolves a pager program (`less`, `more`, or anything the user names),
//! spawns it with its stdin wired to a pipe, and hands the write end back
//! as the output sink. Teardown closes the pipe and then waits for the
//! child, in that order, exactly once, whether the render finished
//! normally or bailed early.
//!
//! Pager resolution is best-effort: an empty name, the literal `"stdout"`,
//! the no-pager flags, or a program that cannot be found all resolve to
//! plain stdout. Pagination is a convenience, never a hard dependency.
//!
//! While a pager session is active the process ignores SIGPIPE, so a user
//! quitting the pager early cannot kill us mid-write; the previous signal
//! disposition is restored when the session ends.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::cli::OutputFlags;
use crate::error::{OutputError, Result};
use crate::output::{OutputOption, PrintOptions};

/// Sentinel pager name that resolves to the direct output stream.
pub const STDOUT_PAGER: &str = "stdout";

/// Suggests a pager for the output format. Table and card views page
/// through `less`; JSON tends to be larger and pages through `more`.
pub fn suggest_pager(output: Option<OutputOption>) -> &'static str {
    match output {
        Some(OutputOption::Table) | Some(OutputOption::Card) => "less",
        Some(OutputOption::Json) => "more",
        None => STDOUT_PAGER,
    }
}

/// Restores the previous SIGPIPE disposition when dropped.
#[cfg(unix)]
struct SigpipeGuard {
    previous: libc::sighandler_t,
}

#[cfg(unix)]
impl SigpipeGuard {
    fn ignore() -> Self {
        let previous = unsafe { libc::signal(libc::SIGPIPE, libc::SIG_IGN) };
        SigpipeGuard { previous }
    }
}

#[cfg(unix)]
impl Drop for SigpipeGuard {
    fn drop(&mut self) {
        unsafe {
            libc::signal(libc::SIGPIPE, self.previous);
        }
    }
}

/// The output sink for one render session: either stdout or a pipe into a
/// spawned pager process.
///
/// Renderers write through the `Write` impl; only [`Pager::close`] (or
/// `Drop`) ever closes the underlying pipe.
pub struct Pager {
    stdin: Option<ChildStdin>,
    child: Option<Child>,
    #[cfg(unix)]
    sigpipe: Option<SigpipeGuard>,
}

impl Pager {
    /// A pager that writes directly to stdout, with a no-op teardown.
    pub fn stdout() -> Self {
        Pager {
            stdin: None,
            child: None,
            #[cfg(unix)]
            sigpipe: None,
        }
    }

    /// Resolves and spawns the pager for a render session.
    ///
    /// Resolution order: the no-pager switches win, then an explicit
    /// `--pager`, then the `PAGER` environment variable, then the pager
    /// configured in the options, then `suggested` (see
    /// [`suggest_pager`]). Any failure to locate or start the program
    /// falls back to stdout silently.
    pub fn new(flags: &OutputFlags, opts: &PrintOptions, suggested: &str) -> Self {
        if opts.no_pager || flags.no_pager {
            return Pager::stdout();
        }

        let name = flags
            .pager
            .clone()
            .or_else(|| env::var("PAGER").ok().filter(|p| !p.is_empty()))
            .or_else(|| opts.pager.clone())
            .unwrap_or_else(|| suggested.to_string());

        if name.is_empty() || name == STDOUT_PAGER {
            return Pager::stdout();
        }

        let Some(exe) = lookup_pager(&name) else {
            return Pager::stdout();
        };

        Pager::spawn(&exe).unwrap_or_else(|_| Pager::stdout())
    }

    /// Starts `exe` with stdin piped and stdout/stderr inherited, ignoring
    /// SIGPIPE for the lifetime of the session.
    fn spawn(exe: &Path) -> io::Result<Self> {
        let mut cmd = Command::new(exe);
        cmd.stdin(Stdio::piped());

        // Raw control chars, no screen init, quit at EOF: predictable
        // behavior for streamed, possibly ANSI-laden output
        if exe.file_name().is_some_and(|n| n == "less") {
            cmd.env("LESS", "FRX");
        }

        #[cfg(unix)]
        let sigpipe = SigpipeGuard::ignore();

        let mut child = cmd.spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("pager stdin was not piped"))?;

        Ok(Pager {
            stdin: Some(stdin),
            child: Some(child),
            #[cfg(unix)]
            sigpipe: Some(sigpipe),
        })
    }

    /// Whether output is flowing through a spawned pager process.
    pub fn is_paged(&self) -> bool {
        self.child.is_some()
    }

    /// Tears the session down: flush and close the pipe write end (EOF to
    /// the child), then block until the child exits.
    ///
    /// Safe to call more than once; later calls are no-ops. `Drop` runs
    /// the same teardown, so early error exits cannot leak the child.
    ///
    /// # Errors
    /// Returns [`OutputError::PagerProcess`] if the child exited
    /// abnormally after launch. Output may already be partially
    /// delivered, so this is fatal rather than silently retried.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut stdin) = self.stdin.take() {
            let _ = stdin.flush();
        }

        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        let waited = child.wait();

        // Child has exited; the broken-pipe policy no longer applies
        #[cfg(unix)]
        {
            self.sigpipe = None;
        }

        let status = waited.map_err(OutputError::PagerProcess)?;
        if !status.success() {
            return Err(OutputError::PagerProcess(io::Error::other(format!(
                "pager exited abnormally: {}",
                status
            ))));
        }
        Ok(())
    }
}

impl Write for Pager {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.stdin {
            Some(stdin) => stdin.write(buf),
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.stdin {
            Some(stdin) => stdin.flush(),
            None => io::stdout().flush(),
        }
    }
}

impl Drop for Pager {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Looks a pager program up on the search path.
///
/// A name containing a path separator is used as-is when it points at a
/// file; a bare name is searched through every `PATH` entry.
fn lookup_pager(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.components().count() > 1 {
        return direct.is_file().then(|| direct.to_path_buf());
    }

    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
