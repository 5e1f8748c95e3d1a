use super::backend::StorageBackend;
use crate::error::{ClientesError, Result};
use crate::model::{CustomerRecord, CSV_HEADER};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Comma-delimited data file, one row per customer.
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory holding the data file; `.` for a bare file name.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ClientesError::Io)?;
        }
        Ok(())
    }

    fn encode(records: &[&CustomerRecord]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer
            .into_inner()
            .map_err(|e| ClientesError::Store(format!("Failed to encode rows: {}", e)))
    }
}

impl StorageBackend for CsvBackend {
    fn load_records(&self) -> Result<Option<Vec<CustomerRecord>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClientesError::Io(e)),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: CustomerRecord = row?;
            records.push(record);
        }
        Ok(Some(records))
    }

    fn save_records(&self, records: &[&CustomerRecord]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(dir)?;

        let content = Self::encode(records)?;

        // Atomic write
        let tmp_path = dir.join(format!(".clientes-{}.tmp", Uuid::new_v4()));
        let written = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(ClientesError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::maria;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::new(dir.path().join("clientes.csv"));
        assert!(backend.load_records().unwrap().is_none());
    }

    #[test]
    fn empty_store_still_writes_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clientes.csv");
        CsvBackend::new(&path).save_records(&[]).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(
            on_disk,
            "Nome,CPF,Email,Endereço,Número,Complemento,Telefone\n"
        );
    }

    #[test]
    fn rows_follow_fixed_column_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clientes.csv");
        CsvBackend::new(&path).save_records(&[&maria()]).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        let second_line = on_disk.lines().nth(1).unwrap();
        assert_eq!(
            second_line,
            "Maria Oliveira,529.982.247-25,maria@example.com,Rua A,10,,11999999999"
        );
    }

    #[test]
    fn embedded_delimiters_are_quoted_and_restored() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::new(dir.path().join("clientes.csv"));
        let mut record = maria();
        record.address = "Rua A, Bloco \"B\"".to_string();
        backend.save_records(&[&record]).unwrap();

        let loaded = backend.load_records().unwrap().unwrap();
        assert_eq!(loaded, vec![record]);
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("clientes.csv");
        CsvBackend::new(&path).save_records(&[&maria()]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn no_tmp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let backend = CsvBackend::new(dir.path().join("clientes.csv"));
        backend.save_records(&[&maria()]).unwrap();
        backend.save_records(&[]).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path makes the rename fail.
        let path = dir.path().join("clientes.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let result = CsvBackend::new(&path).save_records(&[&maria()]);
        assert!(matches!(result, Err(ClientesError::Io(_))));
        assert!(path.join("keep").exists());

        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clientes.csv");
        fs::write(&path, "Nome,CPF\nMaria Oliveira,52998224725\n").unwrap();

        let result = CsvBackend::new(&path).load_records();
        assert!(matches!(result, Err(ClientesError::Csv(_))));
    }
}
