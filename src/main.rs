use rsha1::{cli, utils::logger};

use cli::{commands, output::Output, parser};
use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let ctx = match parser::parse_args(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            Output::error(&e);
            std::process::exit(2);
        }
    };

    // Enable verbose logging if --verbose flag is present
    if ctx.has_flag("verbose") || ctx.has_flag("v") {
        logger::enable_verbose();
    }

    if ctx.has_flag("version") {
        println!("rsha1 {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if ctx.has_flag("h") || ctx.has_flag("help") {
        commands::print_help();
        return;
    }

    if let Err(e) = commands::dispatch(&ctx) {
        Output::error(&e.to_string());
        std::process::exit(1);
    }
}
