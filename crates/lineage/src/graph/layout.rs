//! Hierarchical layout.

use std::collections::BTreeMap;

use crate::domain::{LineageNode, Position};

/// Horizontal distance between nodes on the same level
pub const HORIZONTAL_SPACING: f64 = 200.0;

/// Vertical distance between levels
pub const VERTICAL_SPACING: f64 = 150.0;

/// Assign each node a position from its depth.
///
/// Nodes are grouped into levels by depth. Each level is centered on x = 0
/// with [`HORIZONTAL_SPACING`] between neighbors, in node-list order, and
/// sits at y = depth × [`VERTICAL_SPACING`]. Returns new nodes; the input is
/// left untouched.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn assign_positions(nodes: &[LineageNode]) -> Vec<LineageNode> {
    let mut levels: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, node) in nodes.iter().enumerate() {
        levels.entry(node.depth).or_default().push(idx);
    }

    let mut positioned = nodes.to_vec();
    for (depth, members) in &levels {
        let center = (members.len() - 1) as f64 / 2.0;
        for (slot, &idx) in members.iter().enumerate() {
            positioned[idx].position = Position {
                x: (slot as f64 - center) * HORIZONTAL_SPACING,
                y: *depth as f64 * VERTICAL_SPACING,
            };
        }
    }

    positioned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetRef;

    fn node(id: &str, depth: usize) -> LineageNode {
        LineageNode::from_asset(&AssetRef::new(id, id, "table"), depth, depth == 0)
    }

    #[test]
    fn single_node_sits_at_origin() {
        let laid_out = assign_positions(&[node("root", 0)]);
        assert_eq!(laid_out[0].position, Position { x: 0.0, y: 0.0 });
    }

    #[test]
    fn levels_are_centered_in_list_order() {
        let nodes = vec![node("r", 0), node("a", 1), node("b", 1), node("c", 1)];
        let laid_out = assign_positions(&nodes);

        assert_eq!(laid_out[1].position, Position { x: -200.0, y: 150.0 });
        assert_eq!(laid_out[2].position, Position { x: 0.0, y: 150.0 });
        assert_eq!(laid_out[3].position, Position { x: 200.0, y: 150.0 });
    }

    #[test]
    fn even_levels_straddle_zero() {
        let nodes = vec![node("a", 2), node("b", 2)];
        let laid_out = assign_positions(&nodes);
        assert_eq!(laid_out[0].position.x, -100.0);
        assert_eq!(laid_out[1].position.x, 100.0);
        assert_eq!(laid_out[0].position.y, 300.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let nodes = vec![node("r", 0), node("a", 1), node("b", 1)];
        let _ = assign_positions(&nodes);
        assert!(nodes.iter().all(|n| n.position == Position::default()));
    }
}
