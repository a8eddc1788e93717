use leptos::prelude::*;
use log::error;
use wasm_bindgen::JsValue;

use crate::components::chrome::{Backdrop, PageHeader};
use crate::components::relation_graph::{
	DEFAULT_POPUP_SIZE, GraphData, GraphSelection, NodeCategory, Rect, RelationGraphCanvas,
	RelationIndex, Size,
};
use crate::content::{RELATIONS, relation_graph};

const CLOSE_ICON: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";

fn viewport_size() -> Size {
	let win = window();
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Size::new(dim(win.inner_width()), dim(win.inner_height()))
}

/// Rendered size of the popup, or a default before it has been laid out.
fn popup_size(popup_ref: NodeRef<leptos::html::Div>) -> Size {
	popup_ref
		.get_untracked()
		.map(|el| {
			let rect = el.get_bounding_client_rect();
			Size::new(rect.width(), rect.height())
		})
		.filter(|size| size.width > 0.0 && size.height > 0.0)
		.unwrap_or(DEFAULT_POPUP_SIZE)
}

/// Relationship diagram page
#[component]
pub fn Relations() -> impl IntoView {
	let graph = relation_graph();
	let index = RelationIndex::build(&graph, RELATIONS)
		.inspect_err(|err| error!("relation graph rejected: {err}"));

	view! {
		<div class="page relations">
			<Backdrop />
			<div class="relations-header">
				<PageHeader title="亲朋关系图" />
			</div>
			<ErrorBoundary fallback=|errors| {
				view! {
					<div class="error-panel">
						<h1>"关系图数据有误"</h1>
						<p>"Errors: "</p>
						<ul>
							{move || {
								errors
									.get()
									.into_iter()
									.map(|(_, e)| view! { <li>{e.to_string()}</li> })
									.collect_view()
							}}
						</ul>
					</div>
				}
			}>
				{index.map(|index| view! { <RelationBoard graph=graph index=index /> })}
			</ErrorBoundary>
		</div>
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<aside class="legend">
			<h3>"图例"</h3>
			<ul>
				{NodeCategory::ALL
					.into_iter()
					.map(|category| {
						view! {
							<li>
								<span
									class="swatch"
									class:round={category == NodeCategory::Center}
									style=format!("background-color: {}", category.swatch())
								></span>
								<span>{category.legend_label()}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
			<p class="hint">"点击节点查看详情"</p>
		</aside>
	}
}

/// Legend, graph canvas and the detail popup of the selected node.
#[component]
fn RelationBoard(graph: GraphData, index: RelationIndex) -> impl IntoView {
	let selection = RwSignal::new(GraphSelection::new(index));
	let popup_ref = NodeRef::<leptos::html::Div>::new();
	let data = Signal::derive(move || graph.clone());
	let selected = Signal::derive(move || selection.with(|s| s.selected_node().map(str::to_string)));

	let on_node_click = Callback::new(move |(node_id, anchor): (String, Rect)| {
		selection.update(|s| {
			s.select_node(&node_id, anchor, popup_size(popup_ref), viewport_size());
		});
		// The first placement may use a stale or default size.
		request_animation_frame(move || {
			selection.update(|s| s.remeasure(popup_size(popup_ref), viewport_size()));
		});
	});
	let on_pane_click = Callback::new(move |()| selection.update(GraphSelection::deselect));
	let on_anchor_moved = Callback::new(move |(node_id, anchor): (String, Rect)| {
		selection.update(|s| {
			if s.selected_node() == Some(node_id.as_str()) {
				s.on_viewport_resize(anchor, popup_size(popup_ref), viewport_size());
			}
		});
	});

	let active = Memo::new(move |_| selection.with(|s| s.active().cloned()));
	let relation = Memo::new(move |_| active.with(|a| a.as_ref().map(|a| a.relation)));
	let popup_style = move || {
		active.with(|a| {
			a.as_ref()
				.map(|a| {
					format!(
						"left: {}px; top: {}px; transform: {};",
						a.position.x,
						a.position.y,
						a.position.align.css_transform()
					)
				})
				.unwrap_or_default()
		})
	};

	view! {
		<Legend />
		<Show when=move || relation.with(Option::is_some)>
			<div node_ref=popup_ref class="detail-box" style=popup_style>
				{move || {
					relation
						.get()
						.map(|relation| {
							view! {
								<header class="card-header">
									<h2>{relation.name}</h2>
									<span class="badge">{relation.relation_label}</span>
								</header>
								<p>{relation.description}</p>
								{relation
									.achievements
									.map(|text| {
										view! {
											<p>
												<span class="field">"主要成就："</span>
												{text}
											</p>
										}
									})}
								{relation
									.interaction
									.map(|text| {
										view! {
											<p>
												<span class="field">"与东坡交往："</span>
												{text}
											</p>
										}
									})}
							}
						})
				}}
				<button class="close-button" on:click=move |_| selection.update(GraphSelection::deselect)>
					<svg xmlns="http://www.w3.org/2000/svg" class="icon" viewBox="0 0 20 20" fill="currentColor">
						<path fill-rule="evenodd" clip-rule="evenodd" d=CLOSE_ICON />
					</svg>
				</button>
			</div>
		</Show>
		<div class="graph-area">
			<RelationGraphCanvas
				data=data
				selected=selected
				on_node_click=on_node_click
				on_pane_click=on_pane_click
				on_anchor_moved=on_anchor_moved
			/>
		</div>
	}
}
