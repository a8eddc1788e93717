use crate::components::relation_graph::{GraphData, GraphEdge, GraphNode, NodeCategory, Point};

pub const CENTER_NODE_ID: &str = "sudongpo";

/// (id, x, y, category, label, relation record id)
type NodeDef = (&'static str, f64, f64, NodeCategory, &'static str, Option<u32>);

const NODES: &[NodeDef] = &[
	(CENTER_NODE_ID, 600.0, 400.0, NodeCategory::Center, "苏东坡\n(苏轼)", None),
	("suxun", 300.0, 200.0, NodeCategory::Family, "苏洵\n(父亲)", Some(1)),
	("chengshi", 600.0, 150.0, NodeCategory::Family, "程氏\n(母亲)", Some(2)),
	("suzhe", 900.0, 200.0, NodeCategory::Family, "苏辙\n(弟弟)", Some(3)),
	("wangfu", 300.0, 600.0, NodeCategory::Family, "王弗\n(发妻)", Some(4)),
	("wangrunzhi", 600.0, 650.0, NodeCategory::Family, "王闰之\n(继室)", Some(5)),
	("chaoyun", 900.0, 600.0, NodeCategory::Family, "朝云\n(侍妾)", Some(6)),
	("suguo", 1050.0, 400.0, NodeCategory::Family, "苏过\n(长子)", Some(12)),
	("huangtingjian", 150.0, 300.0, NodeCategory::Friend, "黄庭坚\n(挚友)", Some(7)),
	("mifu", 150.0, 400.0, NodeCategory::Friend, "米芾\n(挚友)", Some(8)),
	("foyin", 150.0, 500.0, NodeCategory::Friend, "佛印\n(知交)", Some(9)),
	("wenyuke", 1050.0, 300.0, NodeCategory::Friend, "文与可\n(挚友)", Some(10)),
	("ouyangxiu", 600.0, 50.0, NodeCategory::Mentor, "欧阳修\n(座师)", Some(11)),
];

/// The static relation graph: one edge from the center to every relation,
/// animated for family members.
pub fn relation_graph() -> GraphData {
	let nodes = NODES
		.iter()
		.map(|&(id, x, y, category, label, relation_id)| GraphNode {
			id: id.to_string(),
			position: Point { x, y },
			category,
			label: label.to_string(),
			relation_id,
		})
		.collect::<Vec<_>>();

	let edges = NODES
		.iter()
		.filter(|(_, _, _, category, _, _)| *category != NodeCategory::Center)
		.map(|&(id, _, _, category, _, _)| GraphEdge {
			id: format!("e-{id}"),
			source: CENTER_NODE_ID.to_string(),
			target: id.to_string(),
			animated: category == NodeCategory::Family,
		})
		.collect();

	GraphData { nodes, edges }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn edges_form_a_star_around_the_center() {
		let graph = relation_graph();
		let mut targets = HashSet::new();
		for edge in &graph.edges {
			assert_eq!(edge.source, CENTER_NODE_ID);
			assert_ne!(edge.target, CENTER_NODE_ID);
			assert!(targets.insert(edge.target.clone()), "{} repeated", edge.target);
		}
		assert_eq!(targets.len(), graph.nodes.len() - 1);
	}

	#[test]
	fn only_family_edges_are_animated() {
		let graph = relation_graph();
		let animated: Vec<_> = graph.edges.iter().filter(|e| e.animated).map(|e| e.id.as_str()).collect();
		assert_eq!(animated.len(), 7);
		assert!(animated.contains(&"e-suguo"));
		assert!(!animated.contains(&"e-ouyangxiu"));
	}
}
