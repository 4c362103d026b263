//! Reads text on stdin and prints one `<word> <count>` line per distinct word.
use std::io::{self, BufWriter, Write};

use freq::{logging, FreqConfig, WordCounter};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn try_main() -> freq::Result<()> {
    logging::init(logging::default_level());

    let mut counter = WordCounter::with_config(FreqConfig::default())?;
    counter.count_reader(io::stdin().lock())?;

    let mut out = BufWriter::new(io::stdout().lock());
    counter.write_counts(&mut out)?;
    out.flush()?;
    Ok(())
}
