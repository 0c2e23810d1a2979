// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scoped export session.
//!
//! A session owns the output location of one plan. Files are written to
//! uniquely named staging files next to their targets and only renamed into
//! place by [`ExportSession::commit`]. Dropping an uncommitted session
//! removes its staging files, so a failed export leaves whatever was
//! already on disk untouched and never leaves a PNG without its PDF.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Distinguishes staging files of concurrent sessions within one process
static NEXT_SESSION: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
struct Staged {
    temp: PathBuf,
    target: PathBuf,
}

#[derive(Debug)]
pub struct ExportSession {
    dir: PathBuf,
    stem: String,
    tag: String,
    staged: Vec<Staged>,
}

impl ExportSession {
    /// Open a session writing `<dir>/<stem>.*`, creating `dir` if needed
    pub fn open(dir: &Path, stem: &str) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let tag = format!(
            "{}-{}",
            std::process::id(),
            NEXT_SESSION.fetch_add(1, Ordering::Relaxed)
        );
        tracing::debug!(dir = %dir.display(), stem, tag = %tag, "Opened export session");
        Ok(Self {
            dir: dir.to_path_buf(),
            stem: stem.to_string(),
            tag,
            staged: Vec::new(),
        })
    }

    /// Final path for the given extension
    pub fn path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", self.stem, extension))
    }

    /// Staging path for `<stem>.<extension>`; the caller writes it, commit
    /// moves it into place
    pub fn stage(&mut self, extension: &str) -> PathBuf {
        let temp = self
            .dir
            .join(format!(".{}.{}.{}.part", self.stem, self.tag, extension));
        self.staged.push(Staged {
            temp: temp.clone(),
            target: self.path(extension),
        });
        temp
    }

    /// Stage `bytes` for `<stem>.<extension>`
    pub fn write(&mut self, extension: &str, bytes: &[u8]) -> Result<()> {
        let temp = self.stage(extension);
        fs::write(&temp, bytes)?;
        Ok(())
    }

    /// Move every staged file into place, returning the final paths in
    /// staging order.
    ///
    /// If a rename fails, files already moved by this commit are removed
    /// again so the set stays all-or-nothing.
    pub fn commit(mut self) -> Result<Vec<PathBuf>> {
        let staged = std::mem::take(&mut self.staged);
        let mut placed: Vec<PathBuf> = Vec::with_capacity(staged.len());

        for (i, file) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(&file.temp, &file.target) {
                for target in &placed {
                    remove_quietly(target);
                }
                for rest in &staged[i..] {
                    remove_quietly(&rest.temp);
                }
                return Err(e.into());
            }
            placed.push(file.target.clone());
        }
        Ok(placed)
    }
}

fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::warn!(path = %path.display(), "Removed partial export"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            error = %e,
            path = %path.display(),
            "Failed to remove partial export"
        ),
    }
}

impl Drop for ExportSession {
    fn drop(&mut self) {
        for file in &self.staged {
            remove_quietly(&file.temp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_dropped_session_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");

        {
            let mut session = ExportSession::open(&out, "plano").unwrap();
            session.write("png", b"partial").unwrap();
            assert_eq!(entries(&out).len(), 1);
        }

        assert!(out.is_dir());
        assert!(entries(&out).is_empty());
    }

    #[test]
    fn test_committed_session_places_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = ExportSession::open(dir.path(), "plano").unwrap();
        session.write("png", b"a").unwrap();
        session.write("pdf", b"b").unwrap();

        let files = session.commit().unwrap();
        assert_eq!(files, vec![dir.path().join("plano.png"), dir.path().join("plano.pdf")]);
        assert_eq!(entries(dir.path()), vec!["plano.pdf", "plano.png"]);
        assert_eq!(fs::read(&files[1]).unwrap(), b"b");
    }

    #[test]
    fn test_failed_reexport_keeps_previous_pair() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = ExportSession::open(dir.path(), "plano").unwrap();
        first.write("png", b"old png").unwrap();
        first.write("pdf", b"old pdf").unwrap();
        first.commit().unwrap();

        {
            // PNG written, PDF step never reached
            let mut second = ExportSession::open(dir.path(), "plano").unwrap();
            second.write("png", b"new png").unwrap();
        }

        assert_eq!(entries(dir.path()), vec!["plano.pdf", "plano.png"]);
        assert_eq!(fs::read(dir.path().join("plano.png")).unwrap(), b"old png");
        assert_eq!(fs::read(dir.path().join("plano.pdf")).unwrap(), b"old pdf");
    }

    #[test]
    fn test_concurrent_sessions_do_not_share_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = ExportSession::open(dir.path(), "plano").unwrap();
        let mut b = ExportSession::open(dir.path(), "plano").unwrap();
        let a_png = a.stage("png");
        let b_png = b.stage("png");
        assert_ne!(a_png, b_png);
        fs::write(&a_png, b"a").unwrap();
        fs::write(&b_png, b"b").unwrap();

        // Abandoning one session never touches the other's files
        drop(b);
        assert!(a_png.exists());
        assert_eq!(a.commit().unwrap(), vec![dir.path().join("plano.png")]);
        assert_eq!(fs::read(dir.path().join("plano.png")).unwrap(), b"a");
    }
}
