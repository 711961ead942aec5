use super::engine::{FilteredGraph, apply_filters, matches};
use super::presets::create_filter_presets;
use super::types::*;
use crate::components::force_graph::{GraphNode, GraphRelationship};

fn seed() -> (Vec<GraphNode>, Vec<GraphRelationship>) {
	(
		vec![
			GraphNode::new("0", "Leonardo DiCaprio"),
			GraphNode::new("1", "Kate Winslet"),
			GraphNode::new("2", "Titanic"),
			GraphNode::new("3", "Christopher Nolan"),
			GraphNode::new("4", "Inception"),
		],
		vec![
			GraphRelationship::new("02", "0", "2", "ATUOU EM"),
			GraphRelationship::new("12", "1", "2", "ATUOU EM"),
			GraphRelationship::new("04", "0", "4", "ATUOU EM"),
			GraphRelationship::new("11", "3", "4", "DIRIGIU"),
		],
	)
}

fn node(id: &str, field: NodeField, operator: Operator, value: &str) -> Filter {
	Filter::Node(NodeFilter {
		id: id.to_owned(),
		field,
		operator,
		value: value.to_owned(),
		enabled: true,
	})
}

fn rel(id: &str, field: RelationshipField, operator: Operator, value: &str) -> Filter {
	Filter::Relationship(RelationshipFilter {
		id: id.to_owned(),
		field,
		operator,
		value: value.to_owned(),
		enabled: true,
	})
}

fn captions(graph: &FilteredGraph) -> Vec<&str> {
	graph.nodes.iter().map(|n| n.caption.as_str()).collect()
}

fn rel_ids(graph: &FilteredGraph) -> Vec<&str> {
	graph.relationships.iter().map(|r| r.id.as_str()).collect()
}

fn assert_consistent(graph: &FilteredGraph, nodes: &[GraphNode], rels: &[GraphRelationship]) {
	for n in &graph.nodes {
		assert!(nodes.contains(n), "node {} not in input", n.id);
	}
	for r in &graph.relationships {
		assert!(rels.contains(r), "relationship {} not in input", r.id);
		assert!(graph.nodes.iter().any(|n| n.id == r.from), "dangling from on {}", r.id);
		assert!(graph.nodes.iter().any(|n| n.id == r.to), "dangling to on {}", r.id);
	}
}

// -------------------------------------------------------------------------
// Matcher
// -------------------------------------------------------------------------

#[test]
fn test_matches_operators() {
	assert!(matches("Leonardo DiCaprio", Operator::Contains, "LEO"));
	assert!(matches("Leonardo DiCaprio", Operator::Contains, ""));
	assert!(!matches("Kate Winslet", Operator::Contains, "leo"));

	assert!(matches("Titanic", Operator::Equals, "titanic"));
	assert!(!matches("Titanic 2", Operator::Equals, "titanic"));

	assert!(matches("Christopher Nolan", Operator::StartsWith, "chris"));
	assert!(!matches("Christopher Nolan", Operator::StartsWith, "nolan"));

	assert!(matches("Christopher Nolan", Operator::EndsWith, "NOLAN"));
	assert!(!matches("Christopher Nolan", Operator::EndsWith, "chris"));
}

#[test]
fn test_matches_folds_non_ascii() {
	assert!(matches("ÉDITH PIAF", Operator::StartsWith, "édith"));
	assert!(matches("São Paulo", Operator::Equals, "SÃO PAULO"));
}

// -------------------------------------------------------------------------
// apply_filters
// -------------------------------------------------------------------------

#[test]
fn test_no_filters_is_identity() {
	let (nodes, rels) = seed();
	let out = apply_filters(&nodes, &rels, &[]);
	assert_eq!(out.nodes, nodes);
	assert_eq!(out.relationships, rels);
}

#[test]
fn test_disabled_and_blank_filters_are_noops() {
	let (nodes, rels) = seed();
	let mut disabled = node("a", NodeField::Caption, Operator::Equals, "Titanic");
	disabled.set_enabled(false);
	let blank = node("b", NodeField::Caption, Operator::Equals, "   ");
	let empty = rel("c", RelationshipField::Caption, Operator::Equals, "");

	let out = apply_filters(&nodes, &rels, &[disabled, blank, empty]);
	assert_eq!(out, apply_filters(&nodes, &rels, &[]));
}

#[test]
fn test_disabled_filter_is_ignored_alongside_active_one() {
	let (nodes, rels) = seed();
	let active = node("a", NodeField::Caption, Operator::Contains, "Kate");
	let mut disabled = node("b", NodeField::Caption, Operator::Contains, "Leo");
	disabled.set_enabled(false);

	let with_disabled = apply_filters(&nodes, &rels, &[active.clone(), disabled]);
	let without = apply_filters(&nodes, &rels, &[active]);
	assert_eq!(with_disabled, without);
	assert_eq!(captions(&without), vec!["Kate Winslet"]);
}

#[test]
fn test_case_insensitive_contains() {
	let (nodes, rels) = seed();
	let out = apply_filters(
		&nodes,
		&rels,
		&[node("f", NodeField::Caption, Operator::Contains, "LEO")],
	);
	assert_eq!(captions(&out), vec!["Leonardo DiCaprio"]);
	assert!(out.relationships.is_empty());
}

#[test]
fn test_node_filters_are_ored() {
	let (nodes, rels) = seed();
	let out = apply_filters(
		&nodes,
		&rels,
		&[
			node("a", NodeField::Caption, Operator::Contains, "Kate"),
			node("b", NodeField::Caption, Operator::Equals, "Titanic"),
			node("c", NodeField::Caption, Operator::Equals, "nobody"),
		],
	);
	assert_eq!(captions(&out), vec!["Kate Winslet", "Titanic"]);
	assert_eq!(rel_ids(&out), vec!["12"]);
}

#[test]
fn test_node_id_field() {
	let (nodes, rels) = seed();
	let out = apply_filters(
		&nodes,
		&rels,
		&[
			node("a", NodeField::Id, Operator::Equals, "3"),
			node("b", NodeField::Id, Operator::Equals, "4"),
		],
	);
	assert_eq!(captions(&out), vec!["Christopher Nolan", "Inception"]);
	assert_eq!(rel_ids(&out), vec!["11"]);
}

#[test]
fn test_movies_only_scenario() {
	let (nodes, rels) = seed();
	let out = apply_filters(
		&nodes,
		&rels,
		&[
			node("m1", NodeField::Caption, Operator::Equals, "Titanic"),
			node("m2", NodeField::Caption, Operator::Equals, "Inception"),
		],
	);
	assert_eq!(captions(&out), vec!["Titanic", "Inception"]);
	assert!(out.relationships.is_empty());
}

#[test]
fn test_titanic_related_scenario() {
	let (nodes, rels) = seed();
	let out = apply_filters(
		&nodes,
		&rels,
		&[
			node("t", NodeField::Caption, Operator::Contains, "Titanic"),
			rel("r", RelationshipField::Caption, Operator::Equals, "ATUOU EM"),
		],
	);
	assert_eq!(captions(&out), vec!["Titanic"]);
	assert!(out.relationships.is_empty());
}

#[test]
fn test_relationship_filter_alone_keeps_all_nodes() {
	let (nodes, rels) = seed();
	let out = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::Caption, Operator::Equals, "dirigiu")],
	);
	assert_eq!(out.nodes, nodes);
	assert_eq!(rel_ids(&out), vec!["11"]);
}

#[test]
fn test_relationship_endpoint_fields_use_captions() {
	let (nodes, rels) = seed();
	let from = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::From, Operator::StartsWith, "leonardo")],
	);
	assert_eq!(rel_ids(&from), vec!["02", "04"]);

	let to = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::To, Operator::Equals, "Inception")],
	);
	assert_eq!(rel_ids(&to), vec!["04", "11"]);

	// Raw ids only match when the caption is missing.
	let by_id = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::To, Operator::Equals, "4")],
	);
	assert!(by_id.relationships.is_empty());
}

#[test]
fn test_relationship_filters_are_ored() {
	let (nodes, rels) = seed();
	let out = apply_filters(
		&nodes,
		&rels,
		&[
			rel("a", RelationshipField::Caption, Operator::Equals, "DIRIGIU"),
			rel("b", RelationshipField::From, Operator::Equals, "Kate Winslet"),
		],
	);
	assert_eq!(out.nodes, nodes);
	assert_eq!(rel_ids(&out), vec!["12", "11"]);
}

#[test]
fn test_duplicate_node_ids_resolve_to_first_caption() {
	let nodes = vec![
		GraphNode::new("a", "First"),
		GraphNode::new("a", "Second"),
		GraphNode::new("b", "B"),
	];
	let rels = vec![GraphRelationship::new("ab", "a", "b", "LINKS")];

	let first = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::From, Operator::Equals, "First")],
	);
	assert_eq!(rel_ids(&first), vec!["ab"]);

	let second = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::From, Operator::Equals, "Second")],
	);
	assert!(second.relationships.is_empty());
}

#[test]
fn test_endpoint_without_caption_falls_back_to_id() {
	let nodes = vec![GraphNode::new("a", ""), GraphNode::new("b", "Beta")];
	let rels = vec![GraphRelationship::new("ab", "a", "b", "LINKS")];
	let out = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::From, Operator::Equals, "a")],
	);
	assert_eq!(rel_ids(&out), vec!["ab"]);
}

#[test]
fn test_invalid_relationships_never_survive() {
	let (nodes, mut rels) = seed();
	rels.push(GraphRelationship::new("92", "9", "2", "ATUOU EM"));
	rels.push(GraphRelationship::new("29", "2", "9", "ATUOU EM"));

	let unfiltered = apply_filters(&nodes, &rels, &[]);
	assert_eq!(rel_ids(&unfiltered), vec!["02", "12", "04", "11"]);

	let filtered = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::Caption, Operator::Equals, "ATUOU EM")],
	);
	assert_eq!(rel_ids(&filtered), vec!["02", "12", "04"]);

	let by_from = apply_filters(
		&nodes,
		&rels,
		&[rel("r", RelationshipField::From, Operator::Equals, "9")],
	);
	assert!(by_from.relationships.is_empty());
}

#[test]
fn test_extra_node_fields_are_ignored() {
	let (nodes, rels) = seed();
	let decorated: Vec<GraphNode> = nodes
		.iter()
		.cloned()
		.map(|n| GraphNode {
			color: Some("#ff0000".into()),
			..n.with_group(7)
		})
		.collect();
	let filters = [node("a", NodeField::Caption, Operator::Contains, "o")];

	let plain = apply_filters(&nodes, &rels, &filters);
	let rich = apply_filters(&decorated, &rels, &filters);
	assert_eq!(captions(&plain), captions(&rich));
	assert_eq!(rel_ids(&plain), rel_ids(&rich));
}

#[test]
fn test_every_preset_yields_consistent_subgraph() {
	let (nodes, rels) = seed();
	for preset in create_filter_presets() {
		let out = apply_filters(&nodes, &rels, &preset.filters());
		assert_consistent(&out, &nodes, &rels);
	}
}

#[test]
fn test_inputs_are_untouched() {
	let (nodes, rels) = seed();
	let filters = create_filter_presets()[1].filters();
	let first = apply_filters(&nodes, &rels, &filters);
	let second = apply_filters(&nodes, &rels, &filters);
	assert_eq!(first, second);
	assert_eq!((nodes, rels), seed());
}

// -------------------------------------------------------------------------
// Presets
// -------------------------------------------------------------------------

#[test]
fn test_preset_catalog_order() {
	let ids: Vec<String> = create_filter_presets().into_iter().map(|p| p.id).collect();
	assert_eq!(
		ids,
		vec!["actors-only", "titanic-related", "directors-only", "movies-only"]
	);
	assert_eq!(create_filter_presets(), create_filter_presets());
}

#[test]
fn test_preset_filters_concatenate_node_then_relationship() {
	let titanic = &create_filter_presets()[1];
	assert_eq!(titanic.name, "Relacionado ao Titanic");
	let filters = titanic.filters();
	let ids: Vec<&str> = filters.iter().map(Filter::id).collect();
	assert_eq!(ids, vec!["titanic-filter", "titanic-rel-filter"]);
	assert!(matches!(filters[0], Filter::Node(_)));
	assert!(matches!(filters[1], Filter::Relationship(_)));
	assert!(filters.iter().all(Filter::is_active));
}

#[test]
fn test_directors_preset() {
	let (nodes, rels) = seed();
	let out = apply_filters(&nodes, &rels, &create_filter_presets()[2].filters());
	assert_eq!(captions(&out), vec!["Christopher Nolan"]);
	assert!(out.relationships.is_empty());
}

// -------------------------------------------------------------------------
// Parsing and serialization
// -------------------------------------------------------------------------

#[test]
fn test_parse_operator() {
	assert_eq!("startsWith".parse::<Operator>(), Ok(Operator::StartsWith));
	assert_eq!(
		"startswith".parse::<Operator>(),
		Err(FilterParseError::UnknownOperator("startswith".into()))
	);
	for op in Operator::ALL {
		assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
	}
}

#[test]
fn test_parse_fields_reject_unknown_names() {
	assert_eq!("caption".parse::<NodeField>(), Ok(NodeField::Caption));
	assert_eq!("to".parse::<RelationshipField>(), Ok(RelationshipField::To));

	assert_eq!(
		"from".parse::<NodeField>(),
		Err(FilterParseError::UnknownNodeField("from".into()))
	);
	assert_eq!(
		"label".parse::<RelationshipField>(),
		Err(FilterParseError::UnknownRelationshipField("label".into()))
	);
	assert_eq!(
		FilterParseError::UnknownOperator("like".into()).to_string(),
		"unknown filter operator `like`"
	);
}

#[test]
fn test_filter_wire_shape() {
	let filter = rel("r", RelationshipField::From, Operator::StartsWith, "Kate");
	let json = serde_json::to_value(&filter).unwrap();
	assert_eq!(
		json,
		serde_json::json!({
			"type": "relationship",
			"id": "r",
			"field": "from",
			"operator": "startsWith",
			"value": "Kate",
			"enabled": true,
		})
	);

	let back: Filter = serde_json::from_value(json).unwrap();
	assert_eq!(back, filter);

	let unknown = serde_json::json!({
		"type": "node",
		"id": "n",
		"field": "caption",
		"operator": "fuzzy",
		"value": "x",
		"enabled": true,
	});
	assert!(serde_json::from_value::<Filter>(unknown).is_err());
}

#[test]
fn test_preset_wire_shape_uses_camel_case() {
	let json = serde_json::to_value(&create_filter_presets()[3]).unwrap();
	assert_eq!(json["name"], "Apenas Filmes");
	assert_eq!(json["nodeFilters"].as_array().map(Vec::len), Some(2));
	assert_eq!(json["relationshipFilters"], serde_json::json!([]));
}

#[test]
fn test_describe() {
	let filter = node("a", NodeField::Caption, Operator::Contains, "Kate");
	assert_eq!(filter.describe(), "node caption contains \"Kate\"");
}
