//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time, and bakes the build machine's local time
//! into the firmware as the initial clock reference.

use chrono::Local;
use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    // Put memory layout in the output directory and ensure it's on the linker search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    // Local wall clock expressed as seconds since the epoch, so the firmware needs no
    // timezone handling
    let local = Local::now().naive_local().and_utc().timestamp();
    File::create(out.join("local_time.rs"))
        .unwrap()
        .write_fmt(format_args!("const LOCAL_EPOCH: i64 = {:?};", local))
        .unwrap();

    // No `rerun-if-changed` here: the script re-runs whenever the package changes, which
    // keeps the baked time close to the flashing time.
}
