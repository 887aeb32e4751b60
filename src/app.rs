use std::io::{BufWriter, stdout};

use crate::{
    common::error::AppError,
    domain::bank::Bank,
    io::{reader, writer},
    worker::processor::Processor,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut bank = Bank::new();
    let stdout = stdout();
    let mut processor = Processor::new(BufWriter::new(stdout.lock()));

    for command in reader::read_commands(&mut reader) {
        let command = command.map_err(AppError::Parse)?;
        processor.process(&mut bank, command)?;
    }

    // After processing all commands, write a statement for every open account
    let out = processor.into_inner();
    writer::write_statements(out, &bank)?;

    Ok(())
}
