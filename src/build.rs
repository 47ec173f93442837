use std::process::Command;

use time::OffsetDateTime;

fn main() {
    match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(x) => {
            let git_hash = String::from_utf8_lossy(&x.stdout);
            println!("cargo:rustc-env=GIT_HASH={}", git_hash.trim());
        }
        Err(e) => {
            println!("cargo:rustc-env=GIT_HASH={:?}", e);
        }
    }
    let now = match OffsetDateTime::now_local() {
        Ok(dt) => dt,
        Err(_) => OffsetDateTime::now_utc(),
    };
    println!("cargo:rustc-env=BUILD_DATE={}", now.date());
}
