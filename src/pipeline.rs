//! Ties config, generation and rendering into a single document run.

use std::path::{Path, PathBuf};

use log::{debug, info};
use mathsheets_render::{KeyEntry, WorksheetDocument, answer_key_page, geometry, worksheet_page};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{self, Config};
use crate::error::PipelineError;

/// Generates the practice document described by the config at `config_path`.
///
/// The output filename from the config is resolved relative to the config
/// file's directory. With a `seed` the document is reproducible; without one
/// the RNG is seeded from the OS. Returns the path of the written PDF.
pub fn generate_document(
    config_path: &Path,
    seed: Option<u64>,
) -> Result<PathBuf, PipelineError> {
    let config = config::load_config(config_path)?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let out_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let output_path = out_dir.join(&config.output_filename);
    generate_into(&config, rng, &output_path)?;
    Ok(output_path)
}

/// Renders `config` into a document at `output_path`. Every worksheet is
/// generated and capacity-checked before any page content exists, so a
/// failing run leaves no partial output behind.
pub fn generate_into(
    config: &Config,
    mut rng: StdRng,
    output_path: &Path,
) -> Result<(), PipelineError> {
    info!(
        "generating {} worksheet(s) into {}",
        config.worksheets.len(),
        output_path.display()
    );

    for ws in &config.worksheets {
        let ops = ws.operations(&mut rng)?;
        geometry::check_capacity(ops.len())?;
        debug!(
            "worksheet {}/{}: {} operations in {} row(s)",
            ws.student_name(),
            ws.id(),
            ops.len(),
            geometry::rows_required(ops.len())
        );
    }

    let mut document = WorksheetDocument::new();

    let entries = config
        .worksheets
        .iter()
        .map(|ws| -> Result<KeyEntry<'_>, PipelineError> {
            Ok(KeyEntry {
                student_name: ws.student_name(),
                sheet_id: ws.id(),
                operations: ws.operations(&mut rng)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    document.add_page(answer_key_page(&entries))?;

    for ws in &config.worksheets {
        let page = worksheet_page(ws.student_name(), ws.id(), ws.operations(&mut rng)?)?;
        document.add_page(page)?;
    }

    info!("document complete: {} page(s)", document.page_count());
    document.save(output_path)?;
    Ok(())
}
