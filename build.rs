use std::env;
use std::fs;
use std::path::Path;

/// Only these keys are forwarded from `.env` into the compile-time environment.
const FORWARDED_PREFIX: &str = "SAFETRAVEL_";

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !key.starts_with(FORWARDED_PREFIX) {
                    continue;
                }

                // Real environment variables win over .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (API at http://127.0.0.1:8000).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SAFETRAVEL_API_URL");
}
