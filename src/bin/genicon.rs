use std::error::Error;
use std::process::ExitCode;

use crabchat_icons::{Config, generate_all, logger};

fn main() -> ExitCode {
    logger::init();

    let result = Config::from_env().and_then(|cfg| generate_all(&cfg));
    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
