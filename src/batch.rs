//! Batch conversion of a whole institute list into one graph.
//!
//! Records are folded in file order: inactive ones are passed over on their
//! status alone, every active one is parsed, assembled into its own sub-graph
//! and unioned into the accumulator. Nothing is shared between institutes
//! besides that accumulator.

use serde::Deserialize;

use crate::error::{Grid2VivoError, Result};
use crate::grid::InstituteRecord;
use crate::mapping::{assemble_institute, UriMinter};
use crate::rdf::Graph;

/// What to do with an institute whose relationship kind is not recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipPolicy {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Leave the institute out, log it and carry on.
    SkipRecord,
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub progress_interval: usize,
    pub unknown_relationship: RelationshipPolicy,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            progress_interval: 100,
            unknown_relationship: RelationshipPolicy::default(),
        }
    }
}

/// Counters for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Institutes read, whatever their status.
    pub read: usize,
    pub converted: usize,
    pub skipped_inactive: usize,
    /// GRID ids left out under [`RelationshipPolicy::SkipRecord`].
    pub skipped_failed: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub graph: Graph,
    pub stats: BatchStats,
}

/// Convert every active institute and union the results.
pub fn convert_institutes(
    minter: &UriMinter,
    records: &[InstituteRecord],
    options: &BatchOptions,
) -> Result<BatchOutcome> {
    let interval = options.progress_interval.max(1);

    let (graph, stats) = records.iter().try_fold(
        (Graph::new(), BatchStats::default()),
        |(graph, mut stats), record| -> Result<(Graph, BatchStats)> {
            stats.read += 1;
            if stats.read % interval == 0 {
                log::info!("{} institutes read", stats.read);
            }

            if !record.is_active() {
                log::debug!(
                    "Skipping {} (status: {})",
                    record.id(),
                    record.status().unwrap_or("none")
                );
                stats.skipped_inactive += 1;
                return Ok((graph, stats));
            }

            let inst = record.parse()?;
            match assemble_institute(minter, &inst) {
                Ok(sub_graph) => {
                    stats.converted += 1;
                    Ok((graph.merged(sub_graph), stats))
                }
                Err(err @ Grid2VivoError::UnrecognizedRelationshipKind { .. })
                    if options.unknown_relationship == RelationshipPolicy::SkipRecord =>
                {
                    log::warn!("Skipping {}: {}", inst.id, err);
                    stats.skipped_failed.push(inst.id.clone());
                    Ok((graph, stats))
                }
                Err(err) => Err(err),
            }
        },
    )?;

    log::info!(
        "Converted {} of {} institutes ({} inactive, {} failed) into {} triples",
        stats.converted,
        stats.read,
        stats.skipped_inactive,
        stats.skipped_failed.len(),
        graph.len()
    );

    Ok(BatchOutcome { graph, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::vocab::vivo;
    use crate::rdf::{Term, Triple};
    use serde_json::json;
    use std::sync::Mutex;

    fn institute(id: &str, status: &str) -> InstituteRecord {
        json!({"id": id, "name": format!("Institute {}", id), "status": status}).into()
    }

    fn related(id: &str, status: &str, target: &str, kind: &str) -> InstituteRecord {
        json!({
            "id": id,
            "name": format!("Institute {}", id),
            "status": status,
            "relationships": [{"id": target, "type": kind}]
        })
        .into()
    }

    #[test]
    fn test_inactive_records_never_reach_graph() {
        let minter = UriMinter::default();
        let institutes = vec![
            institute("grid.1.1", "active"),
            institute("grid.2.2", "redirected"),
            institute("grid.3.3", "obsolete"),
        ];
        let outcome = convert_institutes(&minter, &institutes, &BatchOptions::default()).unwrap();

        assert_eq!(outcome.stats.read, 3);
        assert_eq!(outcome.stats.converted, 1);
        assert_eq!(outcome.stats.skipped_inactive, 2);
        for id in ["grid.2.2", "grid.3.3"] {
            let uri = minter.institute(id);
            assert!(outcome.graph.iter().all(|t| t.subject != uri));
        }
        assert_eq!(outcome.graph.about(&minter.institute("grid.1.1")).count(), 4);
    }

    #[test]
    fn test_sparse_inactive_records_are_skipped() {
        let institutes: Vec<InstituteRecord> = vec![
            institute("grid.1.1", "active"),
            json!({"id": "grid.3.3", "status": "redirected", "redirect": "grid.1.1"}).into(),
            json!({"id": "grid.4.4", "status": "obsolete", "relationships": [{"id": "grid.1.1"}]})
                .into(),
            json!({"id": "grid.5.5"}).into(),
        ];
        let outcome =
            convert_institutes(&UriMinter::default(), &institutes, &BatchOptions::default())
                .unwrap();
        assert_eq!(outcome.stats.converted, 1);
        assert_eq!(outcome.stats.skipped_inactive, 3);
    }

    #[test]
    fn test_malformed_active_record_fails() {
        let institutes: Vec<InstituteRecord> =
            vec![json!({"id": "grid.1.1", "status": "active"}).into()];
        let result =
            convert_institutes(&UriMinter::default(), &institutes, &BatchOptions::default());
        assert!(matches!(result, Err(Grid2VivoError::InvalidInput(_))));
    }

    #[test]
    fn test_affiliation_both_directions() {
        let minter = UriMinter::default();
        let institutes = vec![related("grid.1.1", "active", "grid.2.2", "Affiliated")];
        let outcome = convert_institutes(&minter, &institutes, &BatchOptions::default()).unwrap();

        let a = minter.institute("grid.1.1");
        let b = minter.institute("grid.2.2");
        assert!(outcome.graph.contains(&Triple::new(
            a.as_str(),
            vivo::HAS_AFFILIATED_ORGANIZATION,
            Term::iri(b.as_str())
        )));
        assert!(outcome.graph.contains(&Triple::new(
            b.as_str(),
            vivo::HAS_AFFILIATED_ORGANIZATION,
            Term::iri(a.as_str())
        )));
    }

    #[test]
    fn test_mutual_affiliation_deduplicated() {
        let minter = UriMinter::default();
        let institutes = vec![
            related("grid.1.1", "active", "grid.2.2", "Affiliated"),
            related("grid.2.2", "active", "grid.1.1", "Affiliated"),
        ];
        let outcome = convert_institutes(&minter, &institutes, &BatchOptions::default()).unwrap();
        // 4 core triples each + one affiliation pair
        assert_eq!(outcome.graph.len(), 10);
    }

    #[test]
    fn test_unknown_kind_aborts_by_default() {
        let institutes = vec![
            institute("grid.1.1", "active"),
            related("grid.2.2", "active", "grid.1.1", "Sibling"),
        ];
        let result = convert_institutes(&UriMinter::default(), &institutes, &BatchOptions::default());
        assert!(matches!(
            result,
            Err(Grid2VivoError::UnrecognizedRelationshipKind { .. })
        ));
    }

    #[test]
    fn test_unknown_kind_on_inactive_record_is_ignored() {
        let institutes = vec![related("grid.2.2", "redirected", "grid.1.1", "Sibling")];
        let outcome =
            convert_institutes(&UriMinter::default(), &institutes, &BatchOptions::default()).unwrap();
        assert!(outcome.graph.is_empty());
    }

    #[test]
    fn test_unknown_kind_skipped_by_policy() {
        let options = BatchOptions {
            unknown_relationship: RelationshipPolicy::SkipRecord,
            ..Default::default()
        };
        let minter = UriMinter::default();
        let institutes = vec![
            institute("grid.1.1", "active"),
            related("grid.2.2", "active", "grid.1.1", "Sibling"),
        ];
        let outcome = convert_institutes(&minter, &institutes, &options).unwrap();
        assert_eq!(outcome.stats.converted, 1);
        assert_eq!(outcome.stats.skipped_failed, vec!["grid.2.2".to_string()]);
        let skipped = minter.institute("grid.2.2");
        assert!(outcome.graph.iter().all(|t| t.subject != skipped));
    }

    #[test]
    fn test_empty_input() {
        let outcome = convert_institutes(&UriMinter::default(), &[], &BatchOptions::default()).unwrap();
        assert!(outcome.graph.is_empty());
        assert_eq!(outcome.stats, BatchStats::default());
    }

    /// Collects the messages this module logs.
    struct CaptureLogger;

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static LOGGER: CaptureLogger = CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if record.target() == "grid2vivo::batch" {
                CAPTURED.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_progress_logged_every_interval() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Info);

        let options = BatchOptions {
            progress_interval: 3,
            ..Default::default()
        };
        let institutes: Vec<_> = (1..=7)
            .map(|n| institute(&format!("grid.{}.{}", n, n), "redirected"))
            .collect();
        convert_institutes(&UriMinter::default(), &institutes, &options).unwrap();

        // Other tests use the default interval and never reach it.
        let progress: Vec<String> = CAPTURED
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.ends_with(" institutes read"))
            .cloned()
            .collect();
        assert_eq!(progress, vec!["3 institutes read", "6 institutes read"]);
    }
}
