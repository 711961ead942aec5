use super::types::{
	FilterPreset, NodeField, NodeFilter, Operator, RelationshipField, RelationshipFilter,
};

fn node_caption(id: &str, operator: Operator, value: &str) -> NodeFilter {
	NodeFilter {
		id: id.to_owned(),
		field: NodeField::Caption,
		operator,
		value: value.to_owned(),
		enabled: true,
	}
}

fn relationship_caption(id: &str, operator: Operator, value: &str) -> RelationshipFilter {
	RelationshipFilter {
		id: id.to_owned(),
		field: RelationshipField::Caption,
		operator,
		value: value.to_owned(),
		enabled: true,
	}
}

fn preset(
	id: &str,
	name: &str,
	node_filters: Vec<NodeFilter>,
	relationship_filters: Vec<RelationshipFilter>,
) -> FilterPreset {
	FilterPreset {
		id: id.to_owned(),
		name: name.to_owned(),
		node_filters,
		relationship_filters,
	}
}

/// The preset catalog, in menu display order.
pub fn create_filter_presets() -> Vec<FilterPreset> {
	use Operator::{Contains, Equals};

	vec![
		preset(
			"actors-only",
			"Apenas Atores",
			vec![
				node_caption("actor-filter-1", Contains, "Leonardo"),
				node_caption("actor-filter-2", Contains, "Kate"),
				node_caption("actor-filter-3", Contains, "Billy"),
				node_caption("actor-filter-4", Contains, "Kathy"),
				node_caption("actor-filter-5", Contains, "Frances"),
			],
			vec![],
		),
		preset(
			"titanic-related",
			"Relacionado ao Titanic",
			vec![node_caption("titanic-filter", Contains, "Titanic")],
			vec![relationship_caption("titanic-rel-filter", Equals, "ATUOU EM")],
		),
		preset(
			"directors-only",
			"Apenas Diretores",
			vec![node_caption("director-filter", Contains, "Christopher")],
			vec![relationship_caption("director-rel-filter", Equals, "DIRIGIU")],
		),
		preset(
			"movies-only",
			"Apenas Filmes",
			vec![
				node_caption("movie-filter-1", Equals, "Titanic"),
				node_caption("movie-filter-2", Equals, "Inception"),
			],
			vec![],
		),
	]
}
