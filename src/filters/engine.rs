use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::{Filter, NodeField, NodeFilter, Operator, RelationshipField, RelationshipFilter};
use crate::components::force_graph::{GraphData, GraphNode, GraphRelationship};

/// Nodes and relationships that survived [`apply_filters`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilteredGraph {
	pub nodes: Vec<GraphNode>,
	pub relationships: Vec<GraphRelationship>,
}

impl From<FilteredGraph> for GraphData {
	fn from(filtered: FilteredGraph) -> Self {
		GraphData {
			nodes: filtered.nodes,
			relationships: filtered.relationships,
		}
	}
}

/// Case-insensitive comparison of `field_value` against `filter_value`.
pub fn matches(field_value: &str, operator: Operator, filter_value: &str) -> bool {
	let (field_value, filter_value) = (field_value.to_lowercase(), filter_value.to_lowercase());
	match operator {
		Operator::Contains => field_value.contains(&filter_value),
		Operator::Equals => field_value == filter_value,
		Operator::StartsWith => field_value.starts_with(&filter_value),
		Operator::EndsWith => field_value.ends_with(&filter_value),
	}
}

/// Narrow a graph to the nodes and relationships selected by the active filters.
///
/// Filters of the same kind are OR-ed. Node and relationship filters select
/// independently, then relationships whose endpoints did not both survive are
/// dropped. Relationships pointing at unknown node ids never survive, even
/// when no filter is active.
pub fn apply_filters(
	nodes: &[GraphNode],
	relationships: &[GraphRelationship],
	filters: &[Filter],
) -> FilteredGraph {
	let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	let valid: Vec<&GraphRelationship> = relationships
		.iter()
		.filter(|rel| connects(&node_ids, rel))
		.collect();

	let (mut node_filters, mut rel_filters) = (Vec::new(), Vec::new());
	for filter in filters.iter().filter(|f| f.is_active()) {
		match filter {
			Filter::Node(f) => node_filters.push(f),
			Filter::Relationship(f) => rel_filters.push(f),
		}
	}

	if node_filters.is_empty() && rel_filters.is_empty() {
		return FilteredGraph {
			nodes: nodes.to_vec(),
			relationships: valid.into_iter().cloned().collect(),
		};
	}

	let filtered_nodes: Vec<GraphNode> = nodes
		.iter()
		.filter(|node| node_filters.is_empty() || node_filters.iter().any(|f| node_matches(node, f)))
		.cloned()
		.collect();

	// First node wins when ids repeat.
	let mut captions: HashMap<&str, &str> = HashMap::with_capacity(nodes.len());
	for node in nodes {
		captions.entry(node.id.as_str()).or_insert(node.caption.as_str());
	}
	let surviving: HashSet<&str> = filtered_nodes.iter().map(|n| n.id.as_str()).collect();
	let filtered_relationships: Vec<GraphRelationship> = valid
		.into_iter()
		.filter(|rel| {
			rel_filters.is_empty()
				|| rel_filters
					.iter()
					.any(|f| relationship_matches(rel, f, &captions))
		})
		.filter(|rel| connects(&surviving, rel))
		.cloned()
		.collect();

	debug!(
		"filters: {} node / {} relationship active, kept {}/{} nodes and {}/{} relationships",
		node_filters.len(),
		rel_filters.len(),
		filtered_nodes.len(),
		nodes.len(),
		filtered_relationships.len(),
		relationships.len()
	);

	FilteredGraph {
		nodes: filtered_nodes,
		relationships: filtered_relationships,
	}
}

fn connects(ids: &HashSet<&str>, rel: &GraphRelationship) -> bool {
	ids.contains(rel.from.as_str()) && ids.contains(rel.to.as_str())
}

fn node_matches(node: &GraphNode, filter: &NodeFilter) -> bool {
	let field_value = match filter.field {
		NodeField::Caption => &node.caption,
		NodeField::Id => &node.id,
	};
	matches(field_value, filter.operator, &filter.value)
}

fn relationship_matches(
	rel: &GraphRelationship,
	filter: &RelationshipFilter,
	captions: &HashMap<&str, &str>,
) -> bool {
	let field_value = match filter.field {
		RelationshipField::From => endpoint_caption(captions, &rel.from),
		RelationshipField::To => endpoint_caption(captions, &rel.to),
		RelationshipField::Caption => rel.caption.as_str(),
	};
	matches(field_value, filter.operator, &filter.value)
}

/// Caption of the node `id`, or the raw id when the node is absent or uncaptioned.
fn endpoint_caption<'a>(captions: &HashMap<&str, &'a str>, id: &'a str) -> &'a str {
	captions
		.get(id)
		.copied()
		.filter(|caption| !caption.is_empty())
		.unwrap_or(id)
}
