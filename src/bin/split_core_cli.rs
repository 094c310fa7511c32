use std::{env, process};

use split_core::{cli::run_cli, init};

fn main() {
    init();

    match run_cli(env::args().skip(1)) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
