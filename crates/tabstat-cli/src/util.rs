use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use tabstat_table::{Matrix, Record};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn save_report<F>(output_path: Option<PathBuf>, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Output) -> io::Result<()>,
    {
        let mut output = Output::from_output_path(output_path)?;
        write(&mut output)
            .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
        output
            .flush()
            .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;
        Ok(())
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// On-disk dataset layouts: a matrix (array of rows, header first) or an
/// array of records keyed by column name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Matrix(Matrix),
    Records(Vec<Record>),
}

impl DatasetFile {
    fn into_matrix(self) -> anyhow::Result<Matrix> {
        match self {
            DatasetFile::Matrix(matrix) => Ok(matrix),
            DatasetFile::Records(records) => {
                Matrix::from_records(&records).context("Failed to convert records to a matrix")
            }
        }
    }
}

/// Read a dataset from a JSON file in either matrix or records layout
pub fn read_dataset_file<P>(path: P) -> anyhow::Result<Matrix>
where
    P: AsRef<Path>,
{
    let file: DatasetFile = read_json_file("dataset", &path)?;
    let matrix = file.into_matrix()?;
    tracing::info!(
        path = %path.as_ref().display(),
        rows = matrix.len(),
        "loaded dataset"
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use tabstat_table::CellValue;

    use super::*;

    fn parse(json: &str) -> Matrix {
        serde_json::from_str::<DatasetFile>(json)
            .unwrap()
            .into_matrix()
            .unwrap()
    }

    #[test]
    fn test_matrix_layout() {
        let matrix = parse(r#"[["a", "b"], [1, "x"]]"#);
        assert_eq!(matrix.column_names(), vec!["a", "b"]);
        assert_eq!(matrix.data_rows()[0][1], CellValue::from("x"));
    }

    #[test]
    fn test_records_layout() {
        let matrix = parse(r#"[{"b": 1, "a": true}, {"b": 2}]"#);
        assert_eq!(matrix.column_names(), vec!["b", "a"]);
        assert_eq!(matrix.data_rows()[1][1], CellValue::Null);
    }

    #[test]
    fn test_nested_records_are_rejected() {
        let file = serde_json::from_str::<DatasetFile>(r#"[{"a": {"b": 1}}]"#).unwrap();
        assert!(file.into_matrix().is_err());
    }
}
