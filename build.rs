use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only run the unit and integration tests
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    println!("cargo:rustc-link-arg-bins=-mmcu=atmega328p");

    if env::var("PROFILE").map(|p| p == "debug").unwrap_or(false) {
        println!("cargo:warning=Debug build for ATmega328P, consider --release for size");
    }
}
