//! Pipeline execution: load → resample → rebuild mesh → write.

use crate::error::RemapError;
use crate::request::RemapRequest;
use regrid_checkpoint::{load_checkpoint, write_checkpoint, Checkpoint, CheckpointPaths};
use regrid_core::{NodeCounts, Timestep};
use regrid_mesh::MeshGeometry;
use regrid_resample::resample;

/// What a successful [`remap`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemapSummary {
    /// Paths of the written checkpoint pair.
    pub paths: CheckpointPaths,
    /// Timestep of the written checkpoint (source + 1).
    pub timestep: Timestep,
    /// Node counts of the written checkpoint.
    pub node_counts: NodeCounts,
}

/// Resample one checkpoint onto a new resolution.
///
/// Runs the four pipeline steps strictly in sequence:
///
/// 1. validate the target resolution (no I/O yet),
/// 2. load the source field and mesh,
/// 3. resample the field and regenerate the mesh over the source extents,
/// 4. write the pair at the source timestep plus one.
///
/// The source checkpoint is never modified. Either a complete new
/// checkpoint lands in `dest_dir` or nothing does.
///
/// # Errors
///
/// [`RemapError::InvalidTarget`] before any I/O for unusable counts;
/// [`RemapError::DimensionalityMismatch`] when the target rank differs
/// from the source's; [`RemapError::Store`] and [`RemapError::Resample`]
/// for failures in the underlying steps.
pub fn remap(request: &RemapRequest) -> Result<RemapSummary, RemapError> {
    let target_counts = request.target.node_counts()?;

    let source = load_checkpoint(
        &request.source_dir,
        request.source_timestep,
        &request.field_name,
    )?;

    if target_counts.len() != source.field.spec().ndim() {
        return Err(RemapError::DimensionalityMismatch {
            source: source.field.spec().ndim(),
            target: target_counts.len(),
        });
    }

    let field = resample(&source.field, &target_counts)?;
    let mesh = MeshGeometry::regenerate(field.spec());

    let next = Checkpoint {
        field,
        mesh,
        timestep: source.timestep.next(),
        version: source.version,
    };
    let paths = write_checkpoint(&request.dest_dir, &request.field_name, &next)?;

    Ok(RemapSummary {
        paths,
        timestep: next.timestep,
        node_counts: target_counts,
    })
}
