//! End-to-end tests of the `domaincloud` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn domaincloud() -> Command {
    let mut cmd = Command::cargo_bin("domaincloud").expect("binary");
    cmd.env_remove("RUST_LOG").env_remove("DOMAINCLOUD_GENERATOR");
    cmd
}

fn fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn substitute_only_prints_stripped_text() {
    let dir = TempDir::new().expect("tempdir");
    let file = fixture(&dir, "a.c", "int x; // note\nchar *s = \"str\";\n");

    domaincloud()
        .args(["-S", &file])
        .assert()
        .success()
        .stdout("int x; char *s = ; ");
}

#[test]
fn dash_reads_standard_input() {
    domaincloud()
        .args(["--substitute-only", "-"])
        .write_stdin("a /* b */ c")
        .assert()
        .success()
        .stdout("a c");
}

#[test]
fn list_freq_aggregates_all_inputs() {
    let dir = TempDir::new().expect("tempdir");
    let first = fixture(&dir, "first.c", "alpha beta");
    let second = fixture(&dir, "second.c", "beta /* alpha */ gamma");

    domaincloud()
        .args(["--list", "freq", &first, &second])
        .assert()
        .success()
        .stdout("alpha [1]\nbeta [2]\ngamma [1]\n");
}

#[test]
fn list_writes_to_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = fixture(&dir, "in.c", "b a b");
    let output = dir.path().join("words.txt");

    domaincloud()
        .args(["-l", "raw", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).expect("read"), "a\nb\nb\n");
}

#[test]
fn missing_input_is_reported_and_others_still_count() {
    let dir = TempDir::new().expect("tempdir");
    let good = fixture(&dir, "good.c", "kept");
    let missing = dir.path().join("missing.c");

    domaincloud()
        .args(["-l", "alpha"])
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure()
        .stdout("kept\n")
        .stderr(predicate::str::contains("can't open").and(predicate::str::contains("missing.c")));
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let input = fixture(&dir, "in.c", "x");
    let output = dir.path().join("no-such-dir").join("out.txt");

    domaincloud()
        .args(["-S", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("for writing"));
}

#[test]
fn no_inputs_is_a_usage_error() {
    domaincloud()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    domaincloud()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("domaincloud "));
}

#[test]
fn missing_generator_fails() {
    let dir = TempDir::new().expect("tempdir");
    let input = fixture(&dir, "in.c", "x");

    domaincloud()
        .args(["--generator", "domaincloud-no-such-generator", "-o"])
        .arg(dir.path().join("cloud.png"))
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("domaincloud-no-such-generator"));
}

#[cfg(unix)]
mod generator {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// A generator that copies its `--text` file to its `--imagefile`.
    fn copying_generator(dir: &TempDir) -> String {
        let script = fixture(
            dir,
            "gen.sh",
            "#!/bin/sh\n\
             while [ $# -gt 0 ]; do\n\
               case \"$1\" in\n\
                 --text) text=\"$2\"; shift ;;\n\
                 --imagefile) image=\"$2\"; shift ;;\n\
               esac\n\
               shift\n\
             done\n\
             cp \"$text\" \"$image\"\n",
        );
        let mut perms = fs::metadata(&script).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("chmod");
        script
    }

    fn temp_entries(dir: &Path) -> usize {
        fs::read_dir(dir).expect("read_dir").count()
    }

    #[test]
    fn generator_receives_raw_word_list() {
        let dir = TempDir::new().expect("tempdir");
        let generator = copying_generator(&dir);
        let input = fixture(&dir, "in.c", "b a b // c\n");
        let image = dir.path().join("cloud.txt");

        domaincloud()
            .args(["--generator", &generator, "-o"])
            .arg(&image)
            .arg(&input)
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&image).expect("read"), "a\nb\nb\n");
    }

    #[test]
    fn word_list_is_removed_after_run() {
        let dir = TempDir::new().expect("tempdir");
        let scratch = TempDir::new().expect("tempdir");
        let generator = copying_generator(&dir);
        let input = fixture(&dir, "in.c", "word");

        domaincloud()
            .env("TMPDIR", scratch.path())
            .args(["--generator", &generator, "-o"])
            .arg(dir.path().join("cloud.txt"))
            .arg(&input)
            .assert()
            .success();

        assert_eq!(temp_entries(scratch.path()), 0);
    }

    #[test]
    fn failing_generator_is_reported() {
        let dir = TempDir::new().expect("tempdir");
        let input = fixture(&dir, "in.c", "x");

        domaincloud()
            .args(["--generator", "false", "-o"])
            .arg(dir.path().join("cloud.png"))
            .arg(&input)
            .assert()
            .failure()
            .stderr(predicate::str::contains("'false' failed"));
    }
}
