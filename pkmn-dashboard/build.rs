//! Build script for pkmn-dashboard.
//!
//! Copies the battle statistics CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. A missing fixture becomes an empty
//! placeholder, which the app reports as a dataset error at startup.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src_path = "../fixtures/pkmn6v6smogon.csv";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("pkmn6v6smogon.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }

    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
