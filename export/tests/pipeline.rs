//! End-to-end pipeline runs over a stub fetcher and a stub render engine.

use puzpress_export::ExportError;
use puzpress_export::fetch::Fetch;
use puzpress_export::pipeline::{ExportJob, ItemOutcome, run_range};
use puzpress_export::render::RenderEngine;
use std::collections::HashMap;
use std::path::Path;

/// `.puz` checksum: rotate right with carry into the high bit, then add.
fn cksum(data: &[u8], mut sum: u16) -> u16 {
    for &byte in data {
        sum = if sum & 1 != 0 {
            (sum >> 1).wrapping_add(0x8000)
        } else {
            sum >> 1
        };
        sum = sum.wrapping_add(byte as u16);
    }
    sum
}

/// Build a well-formed `.puz` file, checksums included.
fn write_puz(width: u8, height: u8, solution: &str, state: &str, title: &str, clues: &[&str]) -> Vec<u8> {
    let author = "";
    let copyright = "";
    let notes = "";

    // Board info block, offsets 0x2C..0x34.
    let mut cib = vec![width, height];
    cib.extend_from_slice(&(clues.len() as u16).to_le_bytes());
    cib.extend_from_slice(&1u16.to_le_bytes());
    cib.extend_from_slice(&0u16.to_le_bytes());

    let c_cib = cksum(&cib, 0);
    let c_sol = cksum(solution.as_bytes(), 0);
    let c_grid = cksum(state.as_bytes(), 0);

    // Title/author/copyright/notes are checksummed with their terminating
    // NUL when non-empty; clues without it.
    let text_parts = |mut sum: u16| -> u16 {
        for meta in [title, author, copyright] {
            if !meta.is_empty() {
                sum = cksum(meta.as_bytes(), sum);
                sum = cksum(&[0], sum);
            }
        }
        for clue in clues {
            sum = cksum(clue.as_bytes(), sum);
        }
        if !notes.is_empty() {
            sum = cksum(notes.as_bytes(), sum);
            sum = cksum(&[0], sum);
        }
        sum
    };
    let c_part = text_parts(0);

    let mut c_global = c_cib;
    c_global = cksum(solution.as_bytes(), c_global);
    c_global = cksum(state.as_bytes(), c_global);
    c_global = text_parts(c_global);

    let mut out = Vec::new();
    out.extend_from_slice(&c_global.to_le_bytes());
    out.extend_from_slice(b"ACROSS&DOWN\0");
    out.extend_from_slice(&c_cib.to_le_bytes());
    // Masked checksums, low then high bytes, XORed against "ICHEATED".
    out.push(b'I' ^ (c_cib & 0xff) as u8);
    out.push(b'C' ^ (c_sol & 0xff) as u8);
    out.push(b'H' ^ (c_grid & 0xff) as u8);
    out.push(b'E' ^ (c_part & 0xff) as u8);
    out.push(b'A' ^ (c_cib >> 8) as u8);
    out.push(b'T' ^ (c_sol >> 8) as u8);
    out.push(b'E' ^ (c_grid >> 8) as u8);
    out.push(b'D' ^ (c_part >> 8) as u8);
    out.extend_from_slice(b"1.3\0");
    out.extend_from_slice(&[0u8; 2]);
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&[0u8; 12]);
    out.extend_from_slice(&cib);
    out.extend_from_slice(solution.as_bytes());
    out.extend_from_slice(state.as_bytes());
    for meta in [title, author, copyright] {
        out.extend_from_slice(meta.as_bytes());
        out.push(0);
    }
    for clue in clues {
        out.extend_from_slice(clue.as_bytes());
        out.push(0);
    }
    out.extend_from_slice(notes.as_bytes());
    out.push(0);
    out
}

/// Minimal 2x2 puzzle: top row fillable, bottom row blocked, one across clue.
fn minimal_puz() -> Vec<u8> {
    write_puz(2, 2, "AB..", "--..", "Eye 500", &["A1 ACROSS"])
}

struct StubFetcher {
    responses: HashMap<u32, Result<Vec<u8>, u16>>,
}

impl StubFetcher {
    fn new(responses: impl IntoIterator<Item = (u32, Result<Vec<u8>, u16>)>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
        }
    }
}

impl Fetch for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError> {
        let id: u32 = url
            .rsplit('/')
            .next()
            .and_then(|name| name.strip_suffix(".puz"))
            .and_then(|num| num.parse().ok())
            .expect("unexpected url shape");
        match self.responses.get(&id).expect("unexpected identifier") {
            Ok(bytes) => Ok(bytes.clone()),
            Err(status) => Err(ExportError::Download {
                url: url.to_string(),
                status: *status,
            }),
        }
    }
}

struct StubEngine;

impl RenderEngine for StubEngine {
    fn render(&mut self, html: &str) -> Result<Vec<u8>, ExportError> {
        Ok(format!("%PDF-stub\n{html}").into_bytes())
    }
}

fn job(out_dir: &Path) -> ExportJob {
    ExportJob {
        url_base: "http://puzzles.test/download".to_string(),
        out_dir: out_dir.to_path_buf(),
        prefix: "eye".to_string(),
        encoding: "UTF-8".to_string(),
    }
}

#[tokio::test]
async fn exports_a_single_puzzle() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = StubFetcher::new([(500, Ok(minimal_puz()))]);

    let outcomes = run_range(&job(dir.path()), 500..=500, &fetcher, || Ok(StubEngine))
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 1);
    match &outcomes[0] {
        ItemOutcome::Written { id, path } => {
            assert_eq!(*id, 500);
            assert_eq!(path.file_name().unwrap(), "eye-500.pdf");
            let bytes = std::fs::read(path).unwrap();
            assert!(!bytes.is_empty());
            let doc = String::from_utf8(bytes).unwrap();
            assert!(doc.contains("<p>1. A1 ACROSS</p>"));
            assert!(doc.contains("<h1>Eye 500</h1>"));
        }
        other => panic!("expected a written outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn skips_failed_downloads_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = StubFetcher::new([
        (500, Ok(minimal_puz())),
        (501, Err(404)),
        (502, Ok(minimal_puz())),
    ]);

    let outcomes = run_range(&job(dir.path()), 500..=502, &fetcher, || Ok(StubEngine))
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(&outcomes[0], ItemOutcome::Written { id: 500, .. }));
    match &outcomes[1] {
        ItemOutcome::Skipped { id, reason } => {
            assert_eq!(*id, 501);
            assert!(reason.contains("404"), "reason was: {reason}");
        }
        other => panic!("expected a skipped outcome, got {other:?}"),
    }
    assert!(matches!(&outcomes[2], ItemOutcome::Written { id: 502, .. }));

    assert!(dir.path().join("eye-500.pdf").exists());
    assert!(!dir.path().join("eye-501.pdf").exists());
    assert!(dir.path().join("eye-502.pdf").exists());
}

#[tokio::test]
async fn skips_malformed_puzzle_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = StubFetcher::new([
        (500, Ok(b"this is not a puz file".to_vec())),
        (501, Ok(minimal_puz())),
    ]);

    let outcomes = run_range(&job(dir.path()), 500..=501, &fetcher, || Ok(StubEngine))
        .await
        .unwrap();

    assert!(matches!(&outcomes[0], ItemOutcome::Skipped { id: 500, .. }));
    assert!(matches!(&outcomes[1], ItemOutcome::Written { id: 501, .. }));
}

#[tokio::test]
async fn unknown_encoding_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = StubFetcher::new([(500, Ok(minimal_puz()))]);
    let mut bad_job = job(dir.path());
    bad_job.encoding = "no-such-codepage".to_string();

    let result = run_range(&bad_job, 500..=500, &fetcher, || Ok(StubEngine)).await;
    assert!(matches!(result, Err(ExportError::UnknownEncoding(_))));
}
