use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::{GraphData, NodeCategory};
use crate::content::RelationRecord;
use crate::error::{Result, SiteError};

/// Validated mapping from graph node id to its detail record.
///
/// Built once when the relations page mounts. Construction fails unless the
/// graph is a star around exactly one center node and every other node
/// resolves to a record.
#[derive(Clone, Debug)]
pub struct RelationIndex {
	records: HashMap<String, &'static RelationRecord>,
}

impl RelationIndex {
	pub fn build(data: &GraphData, relations: &'static [RelationRecord]) -> Result<Self> {
		let mut seen = HashSet::new();
		let mut center: Option<&str> = None;
		let mut records = HashMap::new();

		for node in &data.nodes {
			if !seen.insert(node.id.as_str()) {
				return Err(SiteError::DuplicateNode(node.id.clone()));
			}
			if node.category == NodeCategory::Center {
				if let Some(first) = center {
					return Err(SiteError::MultipleCenters(first.to_string(), node.id.clone()));
				}
				center = Some(node.id.as_str());
				continue;
			}
			let relation_id = node
				.relation_id
				.ok_or_else(|| SiteError::UnmappedNode(node.id.clone()))?;
			let record = relations
				.iter()
				.find(|r| r.id == relation_id)
				.ok_or_else(|| SiteError::UnknownRelation {
					node: node.id.clone(),
					relation_id,
				})?;
			records.insert(node.id.clone(), record);
		}
		let center = center.ok_or(SiteError::MissingCenter)?;

		let mut connected = HashSet::new();
		for edge in &data.edges {
			for end in [&edge.source, &edge.target] {
				if !seen.contains(end.as_str()) {
					return Err(SiteError::DanglingEdge {
						edge: edge.id.clone(),
						node: end.clone(),
					});
				}
			}
			if edge.source != center || edge.target == center {
				return Err(SiteError::NotStar(edge.id.clone()));
			}
			if !connected.insert(edge.target.as_str()) {
				return Err(SiteError::DuplicateEdge(edge.target.clone()));
			}
		}
		if let Some(orphan) = records.keys().find(|id| !connected.contains(id.as_str())) {
			return Err(SiteError::DisconnectedNode(orphan.clone()));
		}

		debug!("relation index: {} nodes around `{}`", records.len(), center);
		Ok(Self { records })
	}

	/// Detail record for a node; `None` for the center node.
	pub fn record(&self, node_id: &str) -> Option<&'static RelationRecord> {
		self.records.get(node_id).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::types::{GraphEdge, GraphNode, Point};
	use crate::content::graph::CENTER_NODE_ID;
	use crate::content::{RELATIONS, relation_graph};

	fn node(id: &str, category: NodeCategory, relation_id: Option<u32>) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			position: Point::default(),
			category,
			label: id.to_string(),
			relation_id,
		}
	}

	fn edge(source: &str, target: &str) -> GraphEdge {
		GraphEdge {
			id: format!("e-{target}"),
			source: source.to_string(),
			target: target.to_string(),
			animated: false,
		}
	}

	fn small_graph() -> GraphData {
		GraphData {
			nodes: vec![
				node("c", NodeCategory::Center, None),
				node("a", NodeCategory::Family, Some(1)),
				node("b", NodeCategory::Friend, Some(7)),
			],
			edges: vec![edge("c", "a"), edge("c", "b")],
		}
	}

	#[test]
	fn static_graph_is_consistent() {
		let index = RelationIndex::build(&relation_graph(), RELATIONS).unwrap();
		assert!(index.record(CENTER_NODE_ID).is_none());
		assert_eq!(index.record("foyin").unwrap().name, "佛印禅师");
		assert_eq!(index.record("suguo").unwrap().relation_label, "长子");
	}

	#[test]
	fn accepts_small_star() {
		let index = RelationIndex::build(&small_graph(), RELATIONS).unwrap();
		assert_eq!(index.record("a").unwrap().id, 1);
		assert!(index.record("missing").is_none());
	}

	#[test]
	fn rejects_unmapped_and_unknown_records() {
		let mut data = small_graph();
		data.nodes[1].relation_id = None;
		assert_eq!(
			RelationIndex::build(&data, RELATIONS).unwrap_err(),
			SiteError::UnmappedNode("a".into())
		);

		data.nodes[1].relation_id = Some(99);
		assert!(matches!(
			RelationIndex::build(&data, RELATIONS),
			Err(SiteError::UnknownRelation { relation_id: 99, .. })
		));
	}

	#[test]
	fn rejects_center_problems() {
		let mut data = small_graph();
		data.nodes.remove(0);
		data.edges.clear();
		assert_eq!(RelationIndex::build(&data, RELATIONS).unwrap_err(), SiteError::MissingCenter);

		let mut data = small_graph();
		data.nodes.push(node("d", NodeCategory::Center, None));
		assert!(matches!(
			RelationIndex::build(&data, RELATIONS),
			Err(SiteError::MultipleCenters(..))
		));
	}

	#[test]
	fn rejects_non_star_edges() {
		let mut data = small_graph();
		data.edges.push(edge("a", "b"));
		assert!(matches!(RelationIndex::build(&data, RELATIONS), Err(SiteError::NotStar(_))));

		let mut data = small_graph();
		data.edges.push(edge("c", "ghost"));
		assert!(matches!(
			RelationIndex::build(&data, RELATIONS),
			Err(SiteError::DanglingEdge { .. })
		));

		let mut data = small_graph();
		data.edges.push(edge("c", "a"));
		assert_eq!(
			RelationIndex::build(&data, RELATIONS).unwrap_err(),
			SiteError::DuplicateEdge("a".into())
		);

		let mut data = small_graph();
		data.edges.pop();
		assert_eq!(
			RelationIndex::build(&data, RELATIONS).unwrap_err(),
			SiteError::DisconnectedNode("b".into())
		);
	}

	#[test]
	fn rejects_duplicate_node_ids() {
		let mut data = small_graph();
		data.nodes.push(node("a", NodeCategory::Family, Some(2)));
		assert_eq!(
			RelationIndex::build(&data, RELATIONS).unwrap_err(),
			SiteError::DuplicateNode("a".into())
		);
	}
}
