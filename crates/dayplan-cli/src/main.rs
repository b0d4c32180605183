use std::process::ExitCode;

use clap::Parser;
use dayplan::{Cli, run};

fn main() -> ExitCode {
    // `dayplan export | head` closes stdout early; die quietly on SIGPIPE
    // instead of panicking inside println!
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
