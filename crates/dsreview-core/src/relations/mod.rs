//! Relationship derivation over flat question records
//!
//! - [`versions`]: version chains reconstructed from `previous_version_id`
//! - [`bulk_delete`]: clusters of records sharing an exact deletion timestamp
//!
//! Both walk a [`QuestionIndex`] built once per dataset load.

pub mod bulk_delete;
pub mod index;
pub mod versions;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

pub use bulk_delete::{BulkDeleteCluster, BulkDeleteInfo, BulkDeleteMember, ClusterLimits};
pub use index::QuestionIndex;
pub use versions::{VersionChain, VersionCycle, VersionDirection, VersionEdge};

use crate::model::QuestionRecord;
use crate::{log_op_end, log_op_start};

/// Everything derived for one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationships {
    /// Ancestors (nearest first), then descendants (depth-first)
    pub versions: Vec<VersionEdge>,
    pub bulk_delete: Option<BulkDeleteInfo>,
    pub cycle: Option<VersionCycle>,
}

impl Relationships {
    pub fn is_bulk_deleted(&self) -> bool {
        self.bulk_delete.is_some()
    }
}

/// Relationships of one record in an already-built index
pub fn relationships_for(index: &QuestionIndex, id: &str, limits: ClusterLimits) -> Relationships {
    let chain = versions::version_chain(index, id);
    Relationships {
        versions: chain.edges,
        bulk_delete: bulk_delete::bulk_delete_info(index, id, limits),
        cycle: chain.cycle,
    }
}

/// Derive relationships for every record of an index, keyed by id
pub fn derive_all(index: &QuestionIndex, limits: ClusterLimits) -> BTreeMap<String, Relationships> {
    let started = Instant::now();
    log_op_start!("derive_relationships", question_count = index.len());

    let derived: BTreeMap<String, Relationships> = index
        .questions()
        .iter()
        .map(|q| (q.id.clone(), relationships_for(index, &q.id, limits)))
        .collect();

    log_op_end!(
        "derive_relationships",
        duration_ms = started.elapsed().as_millis() as u64,
        bulk_deleted = derived.values().filter(|r| r.is_bulk_deleted()).count(),
    );
    derived
}

/// Derive relationships for a flat set of records (order irrelevant)
pub fn derive_relationships(questions: &[QuestionRecord]) -> BTreeMap<String, Relationships> {
    let index = QuestionIndex::build(questions.to_vec());
    derive_all(&index, ClusterLimits::default())
}
