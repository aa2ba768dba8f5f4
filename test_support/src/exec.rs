//! Create fake executables for process tests.
//!
//! The scripts are plain `#!/bin/sh` files; tests that actually execute them
//! are Unix-only.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create a fake tool at `dir/name` that exits with `exit_code`.
pub fn fake_tool(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    write_script(dir, name, &format!("#!/bin/sh\nexit {exit_code}\n"))
}

/// Create a fake tool that appends its arguments to a capture file.
///
/// Returns the tool path and the capture file path.
pub fn fake_tool_capture(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
    let capture = dir.join(format!("{name}.args"));
    let script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n", capture.display());
    (write_script(dir, name, &script), capture)
}

/// Create a fake `virtualenv` that materialises `$1/bin/python` relative to
/// its working directory, mimicking the real tool's layout.
pub fn fake_virtualenv(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "virtualenv",
        "#!/bin/sh\nmkdir -p \"$1/bin\"\n: > \"$1/bin/python\"\n",
    )
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).expect("script");
    file.write_all(body.as_bytes()).expect("write script");
    drop(file);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("meta").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("perms");
    }
    path
}
