//! Host-side helper: `cargo run` compiles the wasm bundle into
//! `static/pkg` and serves the page locally so the painting can be opened
//! in a browser.

use std::process::{exit, Command, Stdio};
use std::{thread, time::Duration};

fn main() {
    build_wasm();
    serve();
}

fn build_wasm() {
    println!("Building WASM pkg …");
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status();

    match status {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack failed; see output above.");
            exit(1);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/). \
                 Serving whatever artifacts are already in static/pkg."
            );
        }
    }
}

fn serve() {
    println!("Serving http://127.0.0.1:8000; open it and click the canvas.");
    let _server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
