//! The sequential fetch → decode → parse → render → write loop.

use crate::ExportError;
use crate::decode;
use crate::fetch::Fetch;
use crate::puzzle;
use crate::render::RenderEngine;
use log::{info, warn};
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// One puzzle source: where to fetch from and how to name the output.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// URL prefix; `<url_base>/<id>.puz` is fetched per identifier.
    pub url_base: String,
    /// Directory the PDFs are written into, created on demand.
    pub out_dir: PathBuf,
    /// Output file name prefix, as in `<prefix>-<id>.pdf`.
    pub prefix: String,
    /// Source text encoding; see [`decode::recode`].
    pub encoding: String,
}

impl ExportJob {
    /// The Private Eye crossword archive.
    pub fn private_eye() -> Self {
        Self {
            url_base: "https://www.private-eye.co.uk/pictures/crossword/download".to_string(),
            out_dir: PathBuf::from("./out"),
            prefix: "eye".to_string(),
            encoding: "Windows-1252".to_string(),
        }
    }

    pub fn puzzle_url(&self, id: u32) -> String {
        format!("{}/{}.puz", self.url_base, id)
    }

    pub fn output_path(&self, id: u32) -> PathBuf {
        self.out_dir.join(format!("{}-{}.pdf", self.prefix, id))
    }
}

/// Per-identifier result consumed by the range loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Written { id: u32, path: PathBuf },
    Skipped { id: u32, reason: String },
}

/// Run the pipeline over an identifier range, one puzzle at a time.
///
/// Each identifier runs to completion before the next one starts. Fetch and
/// parse failures skip the identifier with a warning; any other error aborts
/// the run. A fresh render engine is taken per identifier via `make_engine`
/// and dropped before the next identifier, success or not.
pub async fn run_range<F, E, M>(
    job: &ExportJob,
    ids: RangeInclusive<u32>,
    fetcher: &F,
    mut make_engine: M,
) -> Result<Vec<ItemOutcome>, ExportError>
where
    F: Fetch,
    E: RenderEngine,
    M: FnMut() -> Result<E, ExportError>,
{
    let mut outcomes = Vec::with_capacity(ids.size_hint().0);
    for id in ids {
        match export_one(job, id, fetcher, &mut make_engine).await {
            Ok(path) => {
                info!("wrote {}", path.display());
                outcomes.push(ItemOutcome::Written { id, path });
            }
            Err(err) if err.is_per_item() => {
                warn!("skipping puzzle {id}: {err}");
                outcomes.push(ItemOutcome::Skipped {
                    id,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }
    Ok(outcomes)
}

async fn export_one<F, E, M>(
    job: &ExportJob,
    id: u32,
    fetcher: &F,
    make_engine: &mut M,
) -> Result<PathBuf, ExportError>
where
    F: Fetch,
    E: RenderEngine,
    M: FnMut() -> Result<E, ExportError>,
{
    let bytes = fetcher.fetch(&job.puzzle_url(id)).await?;
    let bytes = decode::recode(bytes, &job.encoding)?;
    let parsed = puz_parse::parse_bytes(&bytes)?;
    let html = puzzle::compose_html(&parsed)?;

    let mut engine = make_engine()?;
    let doc = engine.render(&html)?;

    let path = job.output_path(id);
    fs::create_dir_all(&job.out_dir)?;
    fs::write(&path, &doc)?;
    Ok(path)
}
