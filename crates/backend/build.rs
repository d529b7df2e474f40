use std::env;
use std::fs;
use std::path::Path;

/// Файлы рядом с исполняемым файлом: конфигурация и каталог деталей
const RUNTIME_FILES: [&str; 2] = ["config.toml", "parts_data.json"];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR: target/<profile>/build/kitteo-backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, runtime files not copied");
        return;
    };

    let Some(workspace_root) = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
    else {
        return;
    };

    for name in RUNTIME_FILES {
        let source = workspace_root.join(name);
        println!("cargo:rerun-if-changed={}", source.display());

        if !source.exists() {
            println!("cargo:warning={} not found at {:?}, using defaults", name, source);
            continue;
        }
        if let Err(e) = fs::copy(&source, target_dir.join(name)) {
            println!("cargo:warning=Failed to copy {}: {}", name, e);
        }
    }
}
