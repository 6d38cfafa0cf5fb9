//! Fake `ssh` and `rsync` executables placed first on PATH.
//!
//! `ssh` appends every remote command to a log and answers the handful of
//! commands a pull issues. `rsync` records its arguments and writes a small
//! file (or tree) at the destination.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const FAKE_SSH: &str = r#"#!/bin/sh
cmd="$2"
echo "ssh $1 $cmd" >> "$SITEPULL_FAKE_LOG"
case "$cmd" in
  "ps aux"*)
    if [ -n "$SITEPULL_FAKE_BUSY" ]; then echo "jenkins 1 drush sql-dump"; exit 0; fi
    exit 1 ;;
  "stat -c"*) echo 2048 ;;
  "du -sh"*) printf '12M\t%s\n' "$cmd" ;;
  *" sa | grep"*) exit 0 ;;
  "echo \$("*"dd files)") echo /var/www/acme/sites/acmesite/files ;;
  "stat "*) exit 0 ;;
  *) exit 0 ;;
esac
"#;

const FAKE_RSYNC: &str = r#"#!/bin/sh
[ "$1" = "--version" ] && exit 0
echo "rsync $*" >> "$SITEPULL_FAKE_LOG"
for last; do :; done
case "$last" in
  */)
    mkdir -p "${last}styles"
    echo png > "${last}logo.png"
    echo jpg > "${last}styles/photo.jpg" ;;
  *) echo dump > "$last" ;;
esac
"#;

pub struct FakeRemote {
    pub dir: TempDir,
}

impl FakeRemote {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        write_script(&bin.join("ssh"), FAKE_SSH);
        write_script(&bin.join("rsync"), FAKE_RSYNC);
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        Self { dir }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("builder.ini")
    }

    pub fn base_dir(&self) -> PathBuf {
        self.dir.path().join("vagrant")
    }

    pub fn log(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("remote.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// `sitepull` with PATH, home and settings pointed into the sandbox
    pub fn sitepull(&self) -> Command {
        let path = format!(
            "{}:{}",
            self.dir.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sitepull"));
        cmd.env("PATH", path)
            .env("SITEPULL_TEST_HOME", self.home())
            .env("SITEPULL_FAKE_LOG", self.dir.path().join("remote.log"))
            .env_remove("SITEPULL_CONFIG")
            .env_remove("SITEPULL_FAKE_BUSY")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config());
        cmd
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}
