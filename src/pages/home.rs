use leptos::prelude::*;
use log::info;

use crate::components::filter_menu::FilterMenu;
use crate::components::force_graph::ForceGraphCanvas;
use crate::explorer::ExplorerState;
use crate::filters::{FilterPreset, create_filter_presets};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let explorer = RwSignal::new(ExplorerState::seeded());
	let presets = StoredValue::new(create_filter_presets());

	let graph_data = Signal::derive(move || explorer.with(ExplorerState::visible));
	let active_filters = Signal::derive(move || explorer.with(|e| e.filters.clone()));

	let on_node_dblclick = Callback::new(move |node_id: String| {
		explorer.update(|e| {
			if !e.toggle_expansion(&node_id) {
				info!("node {} has nothing to expand", node_id);
			}
		});
	});
	let on_preset_apply =
		Callback::new(move |preset: FilterPreset| explorer.update(|e| e.apply_preset(&preset)));
	let on_filter_toggle = Callback::new(move |(id, enabled): (String, bool)| {
		explorer.update(|e| e.set_filter_enabled(&id, enabled))
	});
	let on_clear = Callback::new(move |_: ()| explorer.update(ExplorerState::clear_filters));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

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
			}
		}>

			<div class="fullscreen-graph" style="position: relative;">
				<ForceGraphCanvas data=graph_data fullscreen=true on_node_dblclick=on_node_dblclick />
				<FilterMenu
					presets=Signal::derive(move || presets.get_value())
					filters=active_filters
					on_preset_apply=on_preset_apply
					on_filter_toggle=on_filter_toggle
					on_clear=on_clear
				/>
			</div>
		</ErrorBoundary>
	}
}
