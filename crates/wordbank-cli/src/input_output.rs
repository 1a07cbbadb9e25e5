use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// A file path, or `None` for standard io (`-` or absent).
fn file_path(arg: &Option<String>) -> Option<&str> {
    arg.as_deref().filter(|path| *path != "-")
}

/// Text input arg group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; stdin when absent or "-".
    #[arg(long)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a buffered reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }

    /// Read the input as lines; each line is one sample.
    pub fn read_lines(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        Ok(self.open_reader()?.lines().collect::<Result<_, _>>()?)
    }
}

/// Text output arg group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file, truncated if it exists; stdout when absent or "-".
    #[arg(long)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a buffered writer for the output.
    ///
    /// Callers flush before returning.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
