// File: crates/curve-path-skia/build.rs
// Summary: Links the Windows system library skia-safe's ICU/font code needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
