use std::process::Command;

fn main() {
    let build_date = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_DATE={build_date}");

    // CI images often build from a source tarball without `.git`; they pass
    // the values in instead.
    let commit = std::env::var("ROSTER_BUILD_COMMIT")
        .ok()
        .or_else(|| git_output(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=BUILD_COMMIT={commit}");

    let branch = std::env::var("ROSTER_BUILD_BRANCH")
        .ok()
        .or_else(|| git_output(&["rev-parse", "--abbrev-ref", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=BUILD_BRANCH={branch}");

    println!("cargo:rerun-if-env-changed=ROSTER_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=ROSTER_BUILD_BRANCH");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}
