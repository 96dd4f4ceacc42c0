use std::{error::Error, io};

use calc::{
    cli::Args,
    logger::init_logger,
    session::{self, Outcome},
};
use clap::Parser;
use rustyline::DefaultEditor;
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut editor = DefaultEditor::new()?;
    let outcome = session::run(&mut editor, &mut io::stdout())?;

    match outcome {
        Outcome::Computed { result, .. } => debug!(result, "calculation finished"),
        Outcome::InvalidOperation(symbol) => debug!(symbol = symbol.as_str(), "invalid operation"),
        Outcome::Failed(err) => debug!(error = %err, "calculation failed"),
        Outcome::Terminated => debug!("terminated by user"),
    }

    Ok(())
}
