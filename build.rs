use cargo_lock::Lockfile;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

#[derive(Serialize)]
struct DepInfo {
    name: String,
    version: String,
    checksum: Option<String>,
    source: Option<String>,
}

fn git_commit_hash() -> String {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output();
    match output {
        Ok(o) if o.status.success() => String::from_utf8_lossy(&o.stdout).trim().to_string(),
        _ => "unknown".to_string(),
    }
}

fn collect_deps(lock_path: &Path) -> Vec<DepInfo> {
    let lockfile = Lockfile::load(lock_path).expect("Could not load Cargo.lock");
    let mut deps: Vec<DepInfo> = lockfile
        .packages
        .into_iter()
        .map(|pkg| DepInfo {
            name: pkg.name.as_str().to_string(),
            version: pkg.version.to_string(),
            checksum: pkg.checksum.map(|c| c.to_string()),
            source: pkg.source.map(|s| s.to_string()),
        })
        .collect();
    deps.sort_by(|a, b| a.name.cmp(&b.name));
    deps
}

fn main() {
    println!("cargo:rustc-env=BUILD_GIT_HASH={}", git_commit_hash());
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.lock");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let deps = collect_deps(&Path::new(&manifest_dir).join("Cargo.lock"));
    let json = serde_json::to_string(&deps).expect("Failed to serialize deps");

    let dest = Path::new(&env::var("OUT_DIR").unwrap()).join("deps_info.json");
    fs::write(&dest, json).expect("Failed to write deps info");
    println!("cargo:rustc-env=BUILD_DEPS_PATH={}", dest.display());
}
