//! Minimal consumer: declare two files on a struct, initialize, use them.
//!
//! Run with `cargo run --example app_files`. Creates `demo/app.log` relative
//! to the working directory and `tagfile_demo/scratch.txt` under the system
//! temp directory.

use tagfile::{init_file_handles, tag_fields, FileHandle, MODE_ALL};

#[derive(Default)]
struct AppFiles {
    log: FileHandle,
    scratch: FileHandle,
}

tag_fields!(AppFiles: FileHandle {
    log: "path:demo/app.log;cnt:started;prem:0644",
    scratch: "path:tagfile_demo/scratch.txt;tmp",
});

fn main() -> Result<(), tagfile::FileError> {
    let mut files = AppFiles::default();
    init_file_handles(&mut files)?;

    println!(
        "log:     {} (contains {:?})",
        files.log.full_path().display(),
        files.log.read()?
    );

    files.scratch.write("some random text", MODE_ALL)?;
    println!(
        "scratch: {} (contains {:?})",
        files.scratch.full_path().display(),
        files.scratch.read()?
    );

    Ok(())
}
