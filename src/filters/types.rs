use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Case-insensitive string predicate applied by a filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
	Contains,
	Equals,
	StartsWith,
	EndsWith,
}

/// Node field a [`NodeFilter`] compares against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeField {
	Caption,
	Id,
}

/// Relationship field a [`RelationshipFilter`] compares against.
///
/// `From` and `To` resolve to the caption of the endpoint node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipField {
	Caption,
	From,
	To,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
	#[error("unknown filter operator `{0}`")]
	UnknownOperator(String),
	#[error("unknown node field `{0}`")]
	UnknownNodeField(String),
	#[error("unknown relationship field `{0}`")]
	UnknownRelationshipField(String),
}

impl Operator {
	pub const ALL: [Operator; 4] = [
		Operator::Contains,
		Operator::Equals,
		Operator::StartsWith,
		Operator::EndsWith,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::Contains => "contains",
			Operator::Equals => "equals",
			Operator::StartsWith => "startsWith",
			Operator::EndsWith => "endsWith",
		}
	}
}

impl FromStr for Operator {
	type Err = FilterParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Operator::ALL
			.into_iter()
			.find(|op| op.as_str() == s)
			.ok_or_else(|| FilterParseError::UnknownOperator(s.to_owned()))
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl NodeField {
	pub fn as_str(&self) -> &'static str {
		match self {
			NodeField::Caption => "caption",
			NodeField::Id => "id",
		}
	}
}

impl FromStr for NodeField {
	type Err = FilterParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"caption" => Ok(NodeField::Caption),
			"id" => Ok(NodeField::Id),
			other => Err(FilterParseError::UnknownNodeField(other.to_owned())),
		}
	}
}

impl RelationshipField {
	pub fn as_str(&self) -> &'static str {
		match self {
			RelationshipField::Caption => "caption",
			RelationshipField::From => "from",
			RelationshipField::To => "to",
		}
	}
}

impl FromStr for RelationshipField {
	type Err = FilterParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"caption" => Ok(RelationshipField::Caption),
			"from" => Ok(RelationshipField::From),
			"to" => Ok(RelationshipField::To),
			other => Err(FilterParseError::UnknownRelationshipField(other.to_owned())),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFilter {
	pub id: String,
	pub field: NodeField,
	pub operator: Operator,
	pub value: String,
	pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipFilter {
	pub id: String,
	pub field: RelationshipField,
	pub operator: Operator,
	pub value: String,
	pub enabled: bool,
}

/// A node or relationship filter, tagged by `type` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Filter {
	Node(NodeFilter),
	Relationship(RelationshipFilter),
}

impl Filter {
	pub fn id(&self) -> &str {
		match self {
			Filter::Node(f) => &f.id,
			Filter::Relationship(f) => &f.id,
		}
	}

	pub fn value(&self) -> &str {
		match self {
			Filter::Node(f) => &f.value,
			Filter::Relationship(f) => &f.value,
		}
	}

	pub fn enabled(&self) -> bool {
		match self {
			Filter::Node(f) => f.enabled,
			Filter::Relationship(f) => f.enabled,
		}
	}

	pub fn set_enabled(&mut self, enabled: bool) {
		match self {
			Filter::Node(f) => f.enabled = enabled,
			Filter::Relationship(f) => f.enabled = enabled,
		}
	}

	/// Enabled with a non-blank value. Inactive filters have no effect.
	pub fn is_active(&self) -> bool {
		self.enabled() && !self.value().trim().is_empty()
	}

	/// Short human-readable form, e.g. `node caption contains "Kate"`.
	pub fn describe(&self) -> String {
		match self {
			Filter::Node(f) => format!("node {} {} \"{}\"", f.field.as_str(), f.operator, f.value),
			Filter::Relationship(f) => {
				format!("relationship {} {} \"{}\"", f.field.as_str(), f.operator, f.value)
			}
		}
	}
}

impl From<NodeFilter> for Filter {
	fn from(filter: NodeFilter) -> Self {
		Filter::Node(filter)
	}
}

impl From<RelationshipFilter> for Filter {
	fn from(filter: RelationshipFilter) -> Self {
		Filter::Relationship(filter)
	}
}

/// Named, immutable bundle of filters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreset {
	pub id: String,
	pub name: String,
	pub node_filters: Vec<NodeFilter>,
	pub relationship_filters: Vec<RelationshipFilter>,
}

impl FilterPreset {
	/// Node filters followed by relationship filters.
	pub fn filters(&self) -> Vec<Filter> {
		self.node_filters
			.iter()
			.cloned()
			.map(Filter::Node)
			.chain(self.relationship_filters.iter().cloned().map(Filter::Relationship))
			.collect()
	}
}
