// File: crates/plot-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU pull in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW from the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
