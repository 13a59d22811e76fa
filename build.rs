fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Exposed to the footer through env!
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // content is embedded, so edits must rebuild
    println!("cargo:rerun-if-changed=content");
}
