#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub caption: String,
	pub color: Option<String>,
	pub group: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphRelationship {
	pub id: String,
	pub from: String,
	pub to: String,
	pub caption: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub relationships: Vec<GraphRelationship>,
}

impl GraphNode {
	pub fn new(id: impl Into<String>, caption: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			caption: caption.into(),
			color: None,
			group: None,
		}
	}

	pub fn with_group(mut self, group: u32) -> Self {
		self.group = Some(group);
		self
	}
}

impl GraphRelationship {
	pub fn new(
		id: impl Into<String>,
		from: impl Into<String>,
		to: impl Into<String>,
		caption: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			from: from.into(),
			to: to.into(),
			caption: caption.into(),
		}
	}
}
