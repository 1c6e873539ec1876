use crate::error::CopyError;
use crate::sequence::PlannedCopy;
use crate::summary::Summary;
use indicatif::ProgressBar;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

const BUFFER_SIZE: usize = 256 * 1024; // 256 KB

/// Copy every planned file into `dest_dir`, in plan order.
///
/// An existing file at the destination name is skipped, never overwritten.
/// In dry-run mode the mapping is printed and counted as skipped.
/// Copy failures are recorded in `summary` and do not stop the loop.
pub fn execute(
    plan: &[PlannedCopy],
    dest_dir: &Path,
    dry_run: bool,
    summary: &mut Summary,
    pb: &ProgressBar,
) {
    for item in plan {
        let dest = dest_dir.join(&item.file_name);
        pb.set_message(item.file_name.clone());

        if fs::symlink_metadata(&dest).is_ok() {
            log::debug!("{} already exists, skipping", dest.display());
            summary.skipped += 1;
        } else if dry_run {
            pb.suspend(|| {
                println!("[dry-run] {} -> {}", item.source.display(), dest.display());
            });
            summary.skipped += 1;
        } else {
            match copy_file(&item.source, &dest) {
                Ok(()) => summary.copied += 1,
                Err(cause) => {
                    let error = CopyError {
                        source_path: item.source.clone(),
                        cause,
                    };
                    log::warn!("{}", error);
                    summary.record_failure(error);
                }
            }
        }
        pb.inc(1);
    }
}

/// Stream `src` into a freshly created `dest`.
///
/// Both handles are closed before returning. A partially written
/// destination is removed so a rerun does not mistake it for a collision.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<()> {
    let mut source = fs::File::open(src)?;
    let mut destination = fs::File::create(dest)?;

    let result = stream(&mut source, &mut destination);
    drop(destination);
    if result.is_err() {
        if let Err(e) = fs::remove_file(dest) {
            log::warn!("could not remove partial copy {}: {}", dest.display(), e);
        }
    }
    result
}

fn stream(source: &mut fs::File, destination: &mut fs::File) -> io::Result<()> {
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        destination.write_all(&buffer[..bytes_read])?;
    }
    destination.flush()
}
