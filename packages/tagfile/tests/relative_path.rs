//! Relative-path end-to-end, isolated in its own test binary because it
//! changes the process working directory.

use std::env;
use std::fs;
use std::path::Path;

use tagfile::{init_file_handles, tag_fields, FileHandle};
use tempfile::tempdir;

#[derive(Default)]
struct MyFiles {
    out: FileHandle,
}

tag_fields!(MyFiles: FileHandle {
    out: "path:sub/dir/out.txt;cnt:hello",
});

#[test]
fn relative_path_is_used_verbatim_against_the_working_directory() {
    let root = tempdir().unwrap();
    env::set_current_dir(root.path()).unwrap();

    let mut files = MyFiles::default();
    init_file_handles(&mut files).unwrap();

    // The handle records the path exactly as declared.
    assert_eq!(files.out.full_path(), Path::new("sub/dir/out.txt"));
    assert_eq!(files.out.dir(), Path::new("sub/dir"));
    assert_eq!(files.out.name(), "out.txt");

    // And the file landed relative to the working directory.
    assert_eq!(
        fs::read_to_string(root.path().join("sub/dir/out.txt")).unwrap(),
        "hello"
    );
}
