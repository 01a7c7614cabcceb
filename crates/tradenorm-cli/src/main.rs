mod app;
mod cli;
mod error;
mod logging;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tradenorm_core::Pipeline;

fn main() -> ExitCode {
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    ExitCode::from(app::execute(
        std::env::args_os(),
        &Pipeline::default(),
        stdin,
        stdout,
        io::stderr().lock(),
    ))
}
