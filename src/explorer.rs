//! View-layer state for the movie graph: collections, expansion and active filters.

use std::collections::HashSet;

use log::info;

use crate::components::force_graph::{GraphData, GraphNode, GraphRelationship};
use crate::filters::{Filter, FilterPreset, apply_filters};

const ACTOR: u32 = 0;
const MOVIE: u32 = 1;
const DIRECTOR: u32 = 2;

/// Caption of the node whose cast can be expanded.
pub const EXPANDABLE_CAPTION: &str = "Titanic";

fn seed_nodes() -> Vec<GraphNode> {
	vec![
		GraphNode::new("0", "Leonardo DiCaprio").with_group(ACTOR),
		GraphNode::new("1", "Kate Winslet").with_group(ACTOR),
		GraphNode::new("2", "Titanic").with_group(MOVIE),
		GraphNode::new("3", "Christopher Nolan").with_group(DIRECTOR),
		GraphNode::new("4", "Inception").with_group(MOVIE),
	]
}

fn seed_relationships() -> Vec<GraphRelationship> {
	vec![
		GraphRelationship::new("02", "0", "2", "ATUOU EM"),
		GraphRelationship::new("12", "1", "2", "ATUOU EM"),
		GraphRelationship::new("04", "0", "4", "ATUOU EM"),
		GraphRelationship::new("11", "3", "4", "DIRIGIU"),
	]
}

fn titanic_cast() -> (Vec<GraphNode>, Vec<GraphRelationship>) {
	(
		vec![
			GraphNode::new("5", "Billy Zane").with_group(ACTOR),
			GraphNode::new("6", "Kathy Bates").with_group(ACTOR),
			GraphNode::new("7", "Frances Fisher").with_group(ACTOR),
		],
		vec![
			GraphRelationship::new("25", "5", "2", "ATUOU EM"),
			GraphRelationship::new("26", "6", "2", "ATUOU EM"),
			GraphRelationship::new("27", "7", "2", "ATUOU EM"),
		],
	)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplorerState {
	pub nodes: Vec<GraphNode>,
	pub relationships: Vec<GraphRelationship>,
	pub expanded: HashSet<String>,
	pub filters: Vec<Filter>,
}

impl ExplorerState {
	/// Five seed nodes and four relationships, nothing expanded, no filters.
	pub fn seeded() -> Self {
		Self {
			nodes: seed_nodes(),
			relationships: seed_relationships(),
			..Default::default()
		}
	}

	/// Expand or retract the sub-graph hanging off `node_id`.
	///
	/// Returns `false` when the node is unknown or has nothing to expand.
	pub fn toggle_expansion(&mut self, node_id: &str) -> bool {
		let Some(node) = self.nodes.iter().find(|n| n.id == node_id) else {
			return false;
		};
		if node.caption != EXPANDABLE_CAPTION {
			return false;
		}

		let (cast, cast_rels) = titanic_cast();
		if self.expanded.remove(node_id) {
			let ids: HashSet<String> = cast.into_iter().map(|n| n.id).collect();
			let rel_ids: HashSet<String> = cast_rels.into_iter().map(|r| r.id).collect();
			self.nodes.retain(|n| !ids.contains(&n.id));
			self.relationships.retain(|r| !rel_ids.contains(&r.id));
			info!("retracted {} nodes from {}", ids.len(), node_id);
		} else {
			self.expanded.insert(node_id.to_owned());
			for node in cast {
				if !self.nodes.iter().any(|n| n.id == node.id) {
					self.nodes.push(node);
				}
			}
			for rel in cast_rels {
				if !self.relationships.iter().any(|r| r.id == rel.id) {
					self.relationships.push(rel);
				}
			}
			info!("expanded {} to {} nodes", node_id, self.nodes.len());
		}
		true
	}

	/// Replace the active filters with the preset's.
	pub fn apply_preset(&mut self, preset: &FilterPreset) {
		self.filters = preset.filters();
		info!("applied preset {} ({} filters)", preset.id, self.filters.len());
	}

	pub fn set_filter_enabled(&mut self, filter_id: &str, enabled: bool) {
		if let Some(filter) = self.filters.iter_mut().find(|f| f.id() == filter_id) {
			filter.set_enabled(enabled);
		}
	}

	pub fn clear_filters(&mut self) {
		self.filters.clear();
	}

	/// The graph handed to the canvas.
	pub fn visible(&self) -> GraphData {
		apply_filters(&self.nodes, &self.relationships, &self.filters).into()
	}
}
