//! # Bookshop Entry Point
//!
//! ```bash
//! bookshop list
//! bookshop details 1912bbf7-3f26-4196-b062-071b81b855e9
//! RUST_LOG=debug bookshop buy 1912bbf7-3f26-4196-b062-071b81b855e9
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    bookshop_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match bookshop_cli::run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
