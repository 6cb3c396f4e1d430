use clap::Args;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// The solving subcommands read one JSON problem and write one JSON answer.
// This struct standardizes their implementation.
#[derive(Args)]
pub struct IOArgs {
    /// The problem JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        self.input.reader()
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        self.output.writer()
    }
}

/// Pretty-print `value` as JSON and flush, so that a failed write to a buffered
/// file is reported rather than lost when the writer is dropped.
pub fn write_json<T: serde::Serialize>(
    mut output: Box<dyn Write>,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Either a filesystem path or the process's standard stream
#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    pub fn reader(&self) -> anyhow::Result<Box<dyn Read>> {
        match self {
            PathOrStd::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        match self {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Accepts every byte but cannot persist them
    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn flush_errors_are_reported() {
        let result = write_json(Box::new(FailingFlush), &vec![1, 2, 3]);
        assert!(result.is_err());
    }

    #[test]
    fn file_output_is_complete() {
        let path = std::env::temp_dir().join(format!("masolve-out-{}.json", std::process::id()));
        let output = PathOrStd::Path(path.clone());

        write_json(output.writer().unwrap(), &vec![1.5, 2.5]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let parsed: Vec<f64> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec![1.5, 2.5]);
    }

    #[test]
    fn dash_is_a_standard_stream() {
        assert_eq!("-".parse::<PathOrStd>().unwrap(), PathOrStd::Std);
        assert_eq!(
            "problem.json".parse::<PathOrStd>().unwrap(),
            PathOrStd::Path(PathBuf::from("problem.json"))
        );
    }
}
