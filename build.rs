use chrono::Datelike;

fn main() {
    // Capture the build timestamp; the footer copyright reads the year from it
    let build_time = chrono::Utc::now();

    println!("cargo:rustc-env=BUILD_TIME={}", build_time.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", build_time.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
