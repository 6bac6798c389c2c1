//! End-to-end CLI tests for mir-build and mir-gen-csproj.

use assert_cmd::Command;
use predicates::prelude::*;

fn mir_build() -> Command {
    Command::cargo_bin("mir-build").unwrap()
}

fn mir_gen_csproj() -> Command {
    Command::cargo_bin("mir-gen-csproj").unwrap()
}

#[test]
fn build_without_arguments_exits_one_with_usage() {
    mir_build()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn build_wrong_arg_count_lists_valid_options() {
    mir_build()
        .arg("win-x64")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "runtime options: win-x64, win-arm64, linux-musl-x64, \
             linux-musl-arm64, osx-x64, osx-arm64",
        ))
        .stderr(predicate::str::contains(
            "lib_type options: all, static, shared",
        ));
}

#[test]
fn build_rejects_unknown_runtime() {
    mir_build()
        .args(["win-x86", "static"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported runtime"))
        .stderr(predicate::str::contains("linux-musl-arm64"));
}

#[test]
fn build_rejects_unknown_lib_type() {
    mir_build()
        .args(["win-x64", "header-only"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported lib_type"))
        .stderr(predicate::str::contains("all, static, shared"));
}

#[test]
fn build_dry_run_echoes_native_configure_and_compile() {
    mir_build()
        .args(["win-x64", "static", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "meson -Db_vscrt=static_from_buildtype --native-file ../scripts/project.ini \
             -Ddefault_library=static ../build/win-x64-static",
        ))
        .stdout(predicate::str::contains(
            "meson compile -C ../build/win-x64-static",
        ))
        .stdout(predicate::str::contains("--cross-file").not());
}

#[test]
fn build_dry_run_cross_runtime_uses_cross_files() {
    mir_build()
        .args(["OSX-X64", "shared", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "meson --cross-file ../scripts/project.ini --cross-file ../scripts/osx-x64.ini \
             ../build/osx-x64-shared",
        ));
}

#[test]
fn build_all_runs_static_then_shared() {
    let output = mir_build()
        .args(["linux-musl-arm64", "all", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let static_at = stdout.find("linux-musl-arm64-static").unwrap();
    let shared_at = stdout.find("linux-musl-arm64-shared").unwrap();
    assert!(static_at < shared_at);

    // Two full configure + compile sequences.
    assert_eq!(stdout.matches("meson compile -C").count(), 2);
}

#[test]
fn gen_csproj_without_arguments_exits_one_with_usage() {
    mir_gen_csproj()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains(
            "platform options: all, win, linux, mac",
        ));
}

#[test]
fn gen_csproj_rejects_unknown_platform_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    mir_gen_csproj()
        .args(["freebsd", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported platform"))
        .stderr(predicate::str::contains("all, win, linux, mac"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn gen_csproj_all_writes_six_manifests() {
    let dir = tempfile::tempdir().unwrap();

    mir_gen_csproj()
        .args(["all", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated 'MIR.NativeLib.Harfbuzz.Static.Win.csproj'",
        ));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 6);

    let win_static = std::fs::read_to_string(
        dir.path().join("MIR.NativeLib.Harfbuzz.Static.Win.csproj"),
    )
    .unwrap();
    assert!(win_static.contains("<PackageId>MIR.NativeLib.Harfbuzz.Static.Win</PackageId>"));
    assert_eq!(win_static.matches("<None Include=").count(), 4);
    assert!(win_static.contains("win-x64-static\\src\\harfbuzz.a"));
    assert!(win_static.contains("PackagePath=\"runtimes\\win-arm64\\native\""));
}

#[test]
fn gen_csproj_platform_selector_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();

    mir_gen_csproj()
        .args(["MAC", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir
        .path()
        .join("MIR.NativeLib.Harfbuzz.Shared.Mac.csproj")
        .exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}
