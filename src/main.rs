//! rltail - print the last N lines of a text file.

use anyhow::Result;
use clap::{Arg, Command};
use rltail::{ReaderConfig, TailReader, DEFAULT_LINE_COUNT};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("rltail")
        .version(rltail::VERSION)
        .about("Print the last N lines of a text file")
        .long_about(
            "rltail prints the tail of a text file with absolute line numbers. \
             Small files are read whole; large files are scanned backward from \
             the end so memory stays bounded regardless of file size.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the file to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("lines")
                .short('n')
                .long("lines")
                .help("Number of lines to print from the end of the file [default: 10]")
                .value_parser(clap::value_parser!(usize)),
        )
        .get_matches();

    let file_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .expect("file argument is required"),
    );
    let count = matches
        .get_one::<usize>("lines")
        .copied()
        .unwrap_or(DEFAULT_LINE_COUNT);

    let reader = Arc::new(TailReader::new(ReaderConfig::default())?);
    let lines = reader.read_last_lines_async(file_path, count).await?;

    for line in &lines {
        println!("{:>6}  {}", line.number(), line.content());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        assert!(!rltail::VERSION.is_empty());
    }
}
