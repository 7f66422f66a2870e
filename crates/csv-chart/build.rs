// File: crates/csv-chart/build.rs
// Summary: Links the Windows system library Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used when Skia enumerates system fonts.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
