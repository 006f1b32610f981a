//! Attack target filtering

use crate::core::types::UnitId;
use crate::core::world::WorldView;

/// Drop self and non-alive candidates, preserving candidate order.
pub fn filter_valid_targets(
    self_id: UnitId,
    candidate_ids: &[UnitId],
    world: &WorldView<'_>,
) -> Vec<UnitId> {
    candidate_ids
        .iter()
        .copied()
        .filter(|&id| id != self_id)
        .filter(|&id| world.unit_hp(id).map_or(false, |hp| hp > 0))
        .collect()
}
