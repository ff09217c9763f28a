use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

fn main() {
    // Rebuild when HEAD moves so the embedded version stays accurate.
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let git_path = std::path::Path::new(&git_dir);
        for name in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(name).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{name}");
            }
        }
    }

    if let Some(info) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={info}");
    }
}
