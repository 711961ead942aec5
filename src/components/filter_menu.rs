use leptos::prelude::*;

use crate::filters::{Filter, FilterPreset};

const TOGGLE_STYLE: &str = "position: absolute; top: 10px; left: 10px; z-index: 1000; \
	padding: 10px 15px; background-color: #007bff; color: white; border: none; \
	border-radius: 5px; cursor: pointer; font-size: 14px; font-weight: bold;";

const PANEL_STYLE: &str = "position: absolute; top: 60px; left: 10px; width: 350px; \
	background-color: white; border: 1px solid #ddd; border-radius: 8px; \
	box-shadow: 0 4px 12px rgba(0,0,0,0.15); z-index: 1000; padding: 20px;";

const PRESET_CARD_STYLE: &str = "border: 1px solid #ddd; border-radius: 6px; padding: 15px; \
	margin-bottom: 15px; background-color: #f8f9fa;";

const PRESET_BUTTON_STYLE: &str = "width: 100%; padding: 10px; background-color: #007bff; \
	color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 14px; \
	font-weight: bold;";

const CLEAR_BUTTON_STYLE: &str = "width: 100%; padding: 8px; background-color: #6c757d; \
	color: white; border: none; border-radius: 6px; cursor: pointer; margin-top: 10px;";

/// Side-panel menu: preset buttons plus the active filters with enable toggles.
#[component]
pub fn FilterMenu(
	#[prop(into)] presets: Signal<Vec<FilterPreset>>,
	#[prop(into)] filters: Signal<Vec<Filter>>,
	on_preset_apply: Callback<FilterPreset>,
	on_filter_toggle: Callback<(String, bool)>,
	on_clear: Callback<()>,
) -> impl IntoView {
	let (is_open, set_is_open) = signal(false);

	view! {
		<div class="filter-menu">
			<button
				class="filter-toggle-btn"
				style=TOGGLE_STYLE
				on:click=move |_| set_is_open.update(|open| *open = !*open)
			>
				"menu de filtros"
			</button>

			<Show when=move || is_open.get()>
				<div class="filter-panel" style=PANEL_STYLE>
					<div class="presets-list">
						<For
							each=move || presets.get()
							key=|preset| preset.id.clone()
							children=move |preset| {
								let name = preset.name.clone();
								view! {
									<div style=PRESET_CARD_STYLE>
										<button
											style=PRESET_BUTTON_STYLE
											on:click=move |_| on_preset_apply.run(preset.clone())
										>
											{name}
										</button>
									</div>
								}
							}
						/>
					</div>

					<Show
						when=move || filters.with(|f| !f.is_empty())
						fallback=|| view! { <p class="no-filters">"Nenhum filtro ativo"</p> }
					>
						<ul class="active-filters" style="list-style: none; padding: 0;">
							<For
								each=move || filters.get()
								key=|filter| filter.id().to_owned()
								children=move |filter| {
									let id = filter.id().to_owned();
									let checked_id = id.clone();
									let checked = move || {
										filters
											.with(|fs| fs.iter().any(|f| f.id() == checked_id && f.enabled()))
									};
									view! {
										<li>
											<label>
												<input
													type="checkbox"
													prop:checked=checked
													on:change=move |ev| {
														on_filter_toggle.run((id.clone(), event_target_checked(&ev)))
													}
												/>
												" "
												{filter.describe()}
											</label>
										</li>
									}
								}
							/>
						</ul>
						<button style=CLEAR_BUTTON_STYLE on:click=move |_| on_clear.run(())>
							"limpar filtros"
						</button>
					</Show>
				</div>
			</Show>
		</div>
	}
}
