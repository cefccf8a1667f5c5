use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::concordance::ConcordanceRecord;
use crate::error::{CustomError, Result};
use crate::model::SampleCalls;

/// Temp file beside `path`; only renamed over `path` once fully written, so
/// a failed run never leaves a truncated output behind.
fn staging_file(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Requested mode goes through the umask, as for `File::create`.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(&dir).map_err(|e| CustomError::Write {
        source: e,
        path: dir,
    })
}

/// Rename the staged file over `path`, keeping the permissions of any file
/// already there.
fn commit(staged: NamedTempFile, path: &Path) -> Result<()> {
    if let Ok(existing) = fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| CustomError::Write {
                source: e,
                path: path.to_path_buf(),
            })?;
    }
    staged.persist(path).map_err(|e| CustomError::Write {
        source: e.error,
        path: path.to_path_buf(),
    })?;
    Ok(())
}

/// Single tab-delimited column headed by the sample id, no index column.
pub fn write_sample_calls(calls: &SampleCalls, path: &Path) -> Result<()> {
    let mut staged = staging_file(path)?;
    {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(staged.as_file_mut());
        wtr.write_record([calls.sample_id.as_str()])?;
        for call in &calls.calls {
            wtr.write_record([call.as_str()])?;
        }
        wtr.flush().map_err(|e| CustomError::Write {
            source: e,
            path: path.to_path_buf(),
        })?;
    }
    commit(staged, path)
}

/// One `"<a> vs <b> similarity=<pct>%"` line per record.
pub fn write_concordance_report(records: &[ConcordanceRecord], path: &Path) -> Result<()> {
    let mut staged = staging_file(path)?;
    {
        let mut out = BufWriter::new(staged.as_file_mut());
        let write_err = |e| CustomError::Write {
            source: e,
            path: path.to_path_buf(),
        };
        for record in records {
            writeln!(out, "{record}").map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;
    }
    commit(staged, path)
}
