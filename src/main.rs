use std::process::ExitCode;

use anyhow::Result;
use human_panic::setup_panic;
use log::info;

use invoice_rename::constants::NO_ARGUMENTS_EXIT_CODE;
use invoice_rename::prelude::*;

fn main() -> Result<ExitCode> {
    setup_panic!();

    let invocation = Invocation::from_matches(&get_matches());
    init_logger(
        invocation.verbosity,
        invocation.log_file.as_deref().unwrap_or_default(),
    )?;

    match process_files(&ProcessingOptions::from(&invocation)) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(Error::NoArguments) => {
            info!("{}", Error::NoArguments);
            info!("Exiting -1");
            Ok(ExitCode::from(NO_ARGUMENTS_EXIT_CODE))
        }
        Err(e) => Err(e.into()),
    }
}
