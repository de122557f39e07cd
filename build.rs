use std::{env, fs, path::Path};

const DETECTOR_CONFIG: &str = "config/detector.toml";
const GENERATED_FILE: &str = "detector_config.rs";

fn main() {
    println!("cargo:rerun-if-changed={DETECTOR_CONFIG}");
    println!("cargo:rerun-if-changed=build.rs");

    // Cargo runs build scripts from the package root.
    let generated = beep_config_compiler::generate_from_path(Path::new(DETECTOR_CONFIG))
        .unwrap_or_else(|e| panic!("{DETECTOR_CONFIG}: {e}"));

    let Some(out_dir) = env::var_os("OUT_DIR") else {
        panic!("OUT_DIR is not set; build.rs must run under cargo");
    };
    let target = Path::new(&out_dir).join(GENERATED_FILE);
    if let Err(e) = fs::write(&target, generated) {
        panic!("failed to write {}: {e}", target.display());
    }
}
