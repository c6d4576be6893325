// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Table rendering for a finished frame.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use quadlab_scene::{FrameReport, GameWorld};

/// One-line summary of a frame.
pub fn summary(report: &FrameReport) -> String {
    format!(
        "frame {}: {} candidate(s), {} comparison(s), {} prune(s)",
        report.frame,
        report.candidates.len(),
        report.stats.comparisons,
        report.stats.prunes
    )
}

/// Per-object table: edges plus the candidate flag.
pub fn object_table(world: &GameWorld) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["id", "name", "left", "right", "bottom", "top", "candidate"]);
    for obj in world.game_objects() {
        table.add_row(vec![
            obj.id().to_string(),
            obj.name().to_owned(),
            format!("{:.1}", obj.left()),
            format!("{:.1}", obj.right()),
            format!("{:.1}", obj.bottom()),
            format!("{:.1}", obj.top()),
            if obj.is_collision_candidate() { "yes" } else { "no" }.to_owned(),
        ]);
    }
    table
}
