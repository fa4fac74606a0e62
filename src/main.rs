use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let code = broadsword::cli::run_with_args(&args);
    if code != 0 {
        process::exit(code);
    }
}
