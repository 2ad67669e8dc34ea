use crate::{
    codegen::{GeneratorConfig, emit, naming},
    error::{Error, Result},
    schema::TableSchema,
};

use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct Report {
    /// Generated source units, in processing order.
    pub generated: Vec<PathBuf>,
    /// Schema files that were skipped, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
}

impl Report {
    /// Whether every schema file was generated.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Where the source unit of `schema` is written inside `out_dir`.
pub fn output_path(out_dir: &Path, schema: &TableSchema) -> PathBuf {
    out_dir.join(format!("{}.rs", naming::to_snake_case(&schema.name)))
}

// the previous file stays in place until the new content is complete
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

fn render(schema_path: &Path, out_dir: &Path, config: &GeneratorConfig) -> Result<(PathBuf, String)> {
    let json = fs::read_to_string(schema_path)?;
    let schema = TableSchema::from_json(&json)?;
    let source = emit::generate(&schema, config)?;
    Ok((output_path(out_dir, &schema), source))
}

/// Generate the source unit of one schema file into `out_dir`.
pub fn generate_file(schema_path: &Path, out_dir: &Path, config: &GeneratorConfig) -> Result<PathBuf> {
    let (path, source) = render(schema_path, out_dir, config)?;
    write_atomic(&path, &source)?;
    Ok(path)
}

/// Generate every `*.json` schema of `schema_dir`, in file name order.
///
/// A failing schema is recorded in the report and does not stop the batch. A schema
/// whose output path was already produced earlier in the batch fails instead of
/// replacing that output.
pub fn generate_dir(schema_dir: &Path, out_dir: &Path, config: &GeneratorConfig) -> Result<Report> {
    let mut schema_paths = Vec::new();
    for entry in fs::read_dir(schema_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|extension| extension == "json") {
            schema_paths.push(path);
        }
    }
    schema_paths.sort();
    let mut report = Report::default();
    let mut owners: HashMap<PathBuf, PathBuf> = HashMap::new();
    for schema_path in schema_paths {
        let outcome = render(&schema_path, out_dir, config).and_then(|(path, source)| {
            if let Some(owner) = owners.get(&path) {
                return Err(Error::schema(format!(
                    "output '{}' is already generated from '{}'",
                    path.display(),
                    owner.display()
                )));
            }
            write_atomic(&path, &source)?;
            owners.insert(path.clone(), schema_path.clone());
            Ok(path)
        });
        match outcome {
            Ok(path) => {
                tracing::info!(schema = %schema_path.display(), output = %path.display(), "generated");
                report.generated.push(path);
            }
            Err(err) => {
                tracing::error!(schema = %schema_path.display(), error = %err, "skipped schema");
                report.failed.push((schema_path, err));
            }
        }
    }
    Ok(report)
}
