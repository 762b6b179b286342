//! The four-step KYC wizard page.
//!
//! All form state lives in one [`KycWizard`] signal; this page is the
//! presentation wrapper around the state machine in `lib-farm`. The single
//! network submit (create vs update, fixed when the existing record was
//! looked up on mount) happens from the review step; on failure the wizard
//! stays on review with everything intact.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use lib_farm::kyc::{KycWizard, Step, SubmissionMode};
use lib_farm::cropdb;
use lib_utils::format::format_area;
use lib_utils::time::now_epoch_ms;

use crate::services::api;
use crate::state::session::use_session;
use crate::utils::scope::PageScope;

const CONTACT_METHODS: &[&str] = &["sms", "whatsapp", "call"];
const WATER_SOURCES: &[&str] = &["borewell", "open well", "canal", "river", "rain-fed"];
const IRRIGATION_METHODS: &[&str] = &["drip", "sprinkler", "flood", "furrow"];
const SEASONS: &[&str] = &["kharif", "rabi", "summer", "annual"];
const OWNERSHIP_TYPES: &[&str] = &["owned", "leased", "shared"];
const SOIL_TYPES: &[&str] = &["black", "red", "alluvial", "loam", "sandy loam", "clay"];

#[component]
pub fn KycUpdatePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let scope = PageScope::new();

    let wizard = RwSignal::new(KycWizard::new());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    // Hydrate from an existing record, which also fixes the submission mode.
    {
        let scope = scope.clone();
        spawn_local(async move {
            let result = api::kyc::get_mine().await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(Some(record)) => {
                    wizard.set(KycWizard::from_existing(record));
                    set_loaded.set(true);
                }
                Ok(None) => set_loaded.set(true),
                Err(e) => {
                    log::error!("failed to load KYC record: {}", e);
                    set_error.set(Some(e.to_string()));
                    set_loaded.set(true);
                }
            }
        });
    }

    let on_next = move |_| {
        set_error.set(None);
        if wizard.with_untracked(|w| w.step()) == Step::Address {
            let pin = wizard.with_untracked(|w| w.data.address.pin_code.clone());
            if !pin.is_empty() {
                if let Err(e) = lib_utils::validation::validate_pin_code(&pin) {
                    set_error.set(Some(e));
                    return;
                }
            }
        }
        wizard.update(|w| {
            if !w.next() && w.step() == Step::FarmPlots {
                set_error.set(Some("Add at least one farm plot before review".into()));
            }
        });
    };

    let on_back = move |_| {
        set_error.set(None);
        wizard.update(|w| {
            w.back();
        });
    };

    let on_submit = {
        let scope = scope.clone();
        let navigate = navigate.clone();
        move |_| {
            if !wizard.with_untracked(|w| w.can_submit()) {
                return;
            }
            set_error.set(None);
            set_submitting.set(true);
            let (mode, payload) =
                wizard.with_untracked(|w| (w.mode().clone(), w.payload().clone()));
            let scope = scope.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = match &mode {
                    SubmissionMode::Create => api::kyc::submit(&payload).await,
                    SubmissionMode::Update { kyc_id } => api::kyc::update(kyc_id, &payload).await,
                };
                if !scope.is_alive() {
                    return;
                }
                set_submitting.set(false);
                match result {
                    Ok(_) => navigate("/profile", Default::default()),
                    // Stay on review, state intact, no retry.
                    Err(e) => set_error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="page">
            <div class="card" style="max-width: 760px; margin: 0 auto;">
                <h1>"Farmer KYC"</h1>
                {move || (!session.is_logged_in()).then(|| view! {
                    <p class="form-error">"Please log in to complete your KYC."</p>
                })}

                <div class="step-indicator">
                    {move || {
                        let current = wizard.with(|w| w.step());
                        [Step::Identity, Step::Address, Step::FarmPlots, Step::Review]
                            .into_iter()
                            .map(|step| view! {
                                <span class=("step-active", move || step == current)>
                                    {format!("{}. {}", step.number(), step.title())}
                                </span>
                            })
                            .collect_view()
                    }}
                </div>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || notice.get().map(|n| view! { <p class="form-warning">{n}</p> })}

                {move || if !loaded.get() {
                    view! { <p class="text-muted">"Loading your record..."</p> }.into_any()
                } else {
                    match wizard.with(|w| w.step()) {
                        Step::Identity => view! { <StepIdentity wizard/> }.into_any(),
                        Step::Address => view! { <StepAddress wizard/> }.into_any(),
                        Step::FarmPlots => view! {
                            <StepFarmPlots wizard set_error set_notice/>
                        }.into_any(),
                        Step::Review => view! { <StepReview wizard/> }.into_any(),
                    }
                }}

                <div class="wizard-nav">
                    <button
                        class="btn"
                        disabled=move || wizard.with(|w| w.step() == Step::Identity)
                        on:click=on_back
                    >"Previous"</button>
                    {move || if wizard.with(|w| w.step() == Step::Review) {
                        view! {
                            <button
                                class="btn btn-primary"
                                disabled=move || submitting.get()
                                    || !wizard.with(|w| w.can_submit())
                                on:click=on_submit.clone()
                            >
                                {move || match wizard.with(|w| w.mode().clone()) {
                                    SubmissionMode::Create => "Submit KYC",
                                    SubmissionMode::Update { .. } => "Update KYC",
                                }}
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button class="btn btn-primary" on:click=on_next>"Next"</button>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

/// Step 1: identity and contact details.
#[component]
fn StepIdentity(wizard: RwSignal<KycWizard>) -> impl IntoView {
    view! {
        <div>
            <h3>"Identity"</h3>
            <label>"Full name"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.identity.full_name.clone())
                on:input=move |ev| wizard.update(|w| w.data.identity.full_name = event_target_value(&ev))
            />
            <label>"Gender"</label>
            <select
                prop:value=move || wizard.with(|w| w.data.identity.gender.clone())
                on:change=move |ev| wizard.update(|w| w.data.identity.gender = event_target_value(&ev))
            >
                <option value="">"Select"</option>
                <option value="female">"Female"</option>
                <option value="male">"Male"</option>
                <option value="other">"Other"</option>
            </select>

            <h3>"Contact"</h3>
            <label>"Alternate mobile"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.contact.alternate_mobile.clone())
                on:input=move |ev| wizard.update(|w| w.data.contact.alternate_mobile = event_target_value(&ev))
            />
            <label>"WhatsApp number"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.contact.whatsapp_number.clone())
                on:input=move |ev| wizard.update(|w| w.data.contact.whatsapp_number = event_target_value(&ev))
            />
            <label>"Email"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.contact.email.clone())
                on:input=move |ev| wizard.update(|w| w.data.contact.email = event_target_value(&ev))
            />
            <label>"Preferred language"</label>
            <select
                prop:value=move || wizard.with(|w| w.data.contact.preferred_language.clone())
                on:change=move |ev| wizard.update(|w| w.data.contact.preferred_language = event_target_value(&ev))
            >
                <option value="">"Select"</option>
                <option value="hi">"Hindi"</option>
                <option value="mr">"Marathi"</option>
                <option value="kn">"Kannada"</option>
                <option value="en">"English"</option>
            </select>
            <label>"Contact preferences"</label>
            <div class="checkbox-row">
                {CONTACT_METHODS.iter().map(|method| {
                    let method = *method;
                    view! {
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || wizard.with(|w| {
                                    w.data.contact.contact_methods.iter().any(|m| m == method)
                                })
                                on:change=move |_| wizard.update(|w| {
                                    toggle(&mut w.data.contact.contact_methods, method)
                                })
                            />
                            {method}
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Step 2: address.
#[component]
fn StepAddress(wizard: RwSignal<KycWizard>) -> impl IntoView {
    view! {
        <div>
            <h3>"Farm Address"</h3>
            <label>"State"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.address.state.clone())
                on:input=move |ev| wizard.update(|w| w.data.address.state = event_target_value(&ev))
            />
            <label>"District"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.address.district.clone())
                on:input=move |ev| wizard.update(|w| w.data.address.district = event_target_value(&ev))
            />
            <label>"Taluk"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.address.taluk.clone())
                on:input=move |ev| wizard.update(|w| w.data.address.taluk = event_target_value(&ev))
            />
            <label>"Village"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.address.village.clone())
                on:input=move |ev| wizard.update(|w| w.data.address.village = event_target_value(&ev))
            />
            <label>"Full address"</label>
            <textarea
                prop:value=move || wizard.with(|w| w.data.address.full_address.clone())
                on:input=move |ev| wizard.update(|w| w.data.address.full_address = event_target_value(&ev))
            ></textarea>
            <label>"PIN code"</label>
            <input
                prop:value=move || wizard.with(|w| w.data.address.pin_code.clone())
                on:input=move |ev| wizard.update(|w| w.data.address.pin_code = event_target_value(&ev))
            />
        </div>
    }
}

/// Step 3: plot assembly. The scratch plot and scratch crop are edited
/// independently; guards surface as blocking messages without mutating.
#[component]
fn StepFarmPlots(
    wizard: RwSignal<KycWizard>,
    set_error: WriteSignal<Option<String>>,
    set_notice: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (problems_text, set_problems_text) = signal(String::new());

    let on_add_crops = move |_| {
        set_error.set(None);
        set_notice.set(None);
        wizard.update(|w| {
            w.draft_crop.major_problems = split_list(&problems_text.get_untracked());
            match w.add_crop_to_plot() {
                Ok(added) => {
                    set_problems_text.set(String::new());
                    set_notice.set(Some(format!("Added {} crop(s) to this plot", added)));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_save_plot = move |_| {
        set_error.set(None);
        set_notice.set(None);
        wizard.update(|w| match w.add_farm_plot(now_epoch_ms()) {
            Ok(saved) if saved.without_crops => {
                set_notice.set(Some("Plot saved without any crops".into()));
            }
            Ok(_) => set_notice.set(Some("Plot saved".into())),
            Err(e) => set_error.set(Some(e.to_string())),
        });
    };

    view! {
        <div>
            <h3>"Saved plots"</h3>
            {move || {
                let plots = wizard.with(|w| w.data.farm_plots.clone());
                if plots.is_empty() {
                    view! { <p class="text-muted">"No plots added yet."</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Plot"</th><th>"Ownership"</th><th>"Area"</th>
                                    <th>"Crops"</th><th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {plots.into_iter().map(|plot| {
                                    let plot_id = plot.plot_id.clone();
                                    view! {
                                        <tr>
                                            <td>{plot.plot_id.clone()}</td>
                                            <td>{plot.ownership_type.clone()}</td>
                                            <td>{format_area(plot.total_area, &plot.area_unit)}</td>
                                            <td>{plot.crops.len()}</td>
                                            <td>
                                                <button class="btn btn-small" on:click=move |_| {
                                                    let confirmed = web_sys::window()
                                                        .map(|w| {
                                                            w.confirm_with_message("Remove this plot?")
                                                                .unwrap_or(false)
                                                        })
                                                        .unwrap_or(false);
                                                    if confirmed {
                                                        wizard.update(|w| w.remove_farm_plot(&plot_id));
                                                    }
                                                }>"Remove"</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}

            <h3>"New plot"</h3>
            <label>"Ownership type"</label>
            <select
                prop:value=move || wizard.with(|w| w.draft_plot.ownership_type.clone())
                on:change=move |ev| wizard.update(|w| w.draft_plot.ownership_type = event_target_value(&ev))
            >
                <option value="">"Select"</option>
                {OWNERSHIP_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
            </select>
            <div class="field-row">
                <span>
                    <label>"Total area"</label>
                    <input
                        type="number"
                        prop:value=move || wizard.with(|w| w.draft_plot.total_area.to_string())
                        on:input=move |ev| wizard.update(|w| {
                            w.draft_plot.total_area = event_target_value(&ev).parse().unwrap_or(0.0)
                        })
                    />
                </span>
                <span>
                    <label>"Irrigated"</label>
                    <input
                        type="number"
                        prop:value=move || wizard.with(|w| w.draft_plot.irrigated_area.to_string())
                        on:input=move |ev| wizard.update(|w| {
                            w.draft_plot.irrigated_area = event_target_value(&ev).parse().unwrap_or(0.0)
                        })
                    />
                </span>
                <span>
                    <label>"Rain-fed"</label>
                    <input
                        type="number"
                        prop:value=move || wizard.with(|w| w.draft_plot.rainfed_area.to_string())
                        on:input=move |ev| wizard.update(|w| {
                            w.draft_plot.rainfed_area = event_target_value(&ev).parse().unwrap_or(0.0)
                        })
                    />
                </span>
                <span>
                    <label>"Unit"</label>
                    <select
                        prop:value=move || wizard.with(|w| w.draft_plot.area_unit.clone())
                        on:change=move |ev| wizard.update(|w| w.draft_plot.area_unit = event_target_value(&ev))
                    >
                        <option value="acre">"acre"</option>
                        <option value="hectare">"hectare"</option>
                        <option value="guntha">"guntha"</option>
                    </select>
                </span>
            </div>

            <label>"Water sources"</label>
            <div class="checkbox-row">
                {WATER_SOURCES.iter().map(|source| {
                    let source = *source;
                    view! {
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || wizard.with(|w| {
                                    w.draft_plot.water_sources.iter().any(|s| s == source)
                                })
                                on:change=move |_| wizard.update(|w| {
                                    toggle(&mut w.draft_plot.water_sources, source)
                                })
                            />
                            {source}
                        </label>
                    }
                }).collect_view()}
            </div>

            <label>"Irrigation methods"</label>
            <div class="checkbox-row">
                {IRRIGATION_METHODS.iter().map(|method| {
                    let method = *method;
                    view! {
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || wizard.with(|w| {
                                    w.draft_plot.irrigation_methods.iter().any(|m| m == method)
                                })
                                on:change=move |_| wizard.update(|w| {
                                    toggle(&mut w.draft_plot.irrigation_methods, method)
                                })
                            />
                            {method}
                        </label>
                    }
                }).collect_view()}
            </div>

            <label>"Soil type"</label>
            <select
                prop:value=move || wizard.with(|w| w.draft_plot.soil_type.clone())
                on:change=move |ev| wizard.update(|w| w.draft_plot.soil_type = event_target_value(&ev))
            >
                <option value="">"Select"</option>
                {SOIL_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
            </select>

            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.draft_plot.soil_tested)
                    on:change=move |_| wizard.update(|w| w.draft_plot.soil_tested = !w.draft_plot.soil_tested)
                />
                "Soil tested"
            </label>
            {move || wizard.with(|w| w.draft_plot.soil_tested).then(|| view! {
                <span>
                    <label>"Test date"</label>
                    <input
                        type="date"
                        prop:value=move || wizard.with(|w| w.draft_plot.soil_test_date.clone().unwrap_or_default())
                        on:input=move |ev| wizard.update(|w| {
                            let value = event_target_value(&ev);
                            w.draft_plot.soil_test_date = (!value.is_empty()).then_some(value);
                        })
                    />
                    <label>"Report reference"</label>
                    <input
                        prop:value=move || wizard.with(|w| w.draft_plot.soil_report_ref.clone().unwrap_or_default())
                        on:input=move |ev| wizard.update(|w| {
                            let value = event_target_value(&ev);
                            w.draft_plot.soil_report_ref = (!value.is_empty()).then_some(value);
                        })
                    />
                </span>
            })}

            <h4>"Crops on this plot"</h4>
            {move || {
                let crops = wizard.with(|w| w.draft_plot.crops.clone());
                if crops.is_empty() {
                    view! { <p class="text-muted">"No crops added to this plot yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="crop-list">
                            {crops.into_iter().enumerate().map(|(index, crop)| view! {
                                <li>
                                    {format!(
                                        "{} ({}, {}){}",
                                        crop.crop_name,
                                        crop.variety,
                                        crop.season,
                                        if crop.is_primary { " - primary" } else { "" },
                                    )}
                                    <button class="btn btn-small" on:click=move |_| {
                                        wizard.update(|w| w.remove_crop_from_draft(index));
                                    }>"Remove"</button>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}

            <label>"Select crops"</label>
            <div class="checkbox-row">
                {cropdb::all().iter().map(|entry| {
                    let name = entry.name;
                    view! {
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || wizard.with(|w| w.draft_crop.is_selected(name))
                                on:change=move |_| wizard.update(|w| w.draft_crop.toggle_name(name))
                            />
                            {name}
                        </label>
                    }
                }).collect_view()}
            </div>
            <div class="field-row">
                <span>
                    <label>"Season"</label>
                    <select
                        prop:value=move || wizard.with(|w| w.draft_crop.season.clone())
                        on:change=move |ev| wizard.update(|w| w.draft_crop.season = event_target_value(&ev))
                    >
                        <option value="">"Select"</option>
                        {SEASONS.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                    </select>
                </span>
                <span>
                    <label>"Variety"</label>
                    <input
                        prop:value=move || wizard.with(|w| w.draft_crop.variety.clone())
                        on:input=move |ev| wizard.update(|w| w.draft_crop.variety = event_target_value(&ev))
                    />
                </span>
                <span>
                    <label>"Harvest window"</label>
                    <input
                        prop:value=move || wizard.with(|w| w.draft_crop.harvest_window.clone())
                        on:input=move |ev| wizard.update(|w| w.draft_crop.harvest_window = event_target_value(&ev))
                    />
                </span>
            </div>
            <label>"Major problems (comma separated)"</label>
            <input
                prop:value=problems_text
                on:input=move |ev| set_problems_text.set(event_target_value(&ev))
            />
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.draft_crop.is_primary)
                    on:change=move |_| wizard.update(|w| w.draft_crop.is_primary = !w.draft_crop.is_primary)
                />
                "Primary crop"
            </label>

            <div class="wizard-actions">
                <button class="btn" on:click=on_add_crops>"Add crops to plot"</button>
                <button class="btn btn-primary" on:click=on_save_plot>"Save plot"</button>
            </div>
        </div>
    }
}

/// Step 4: field-for-field review of exactly the payload that submit posts.
#[component]
fn StepReview(wizard: RwSignal<KycWizard>) -> impl IntoView {
    view! {
        <div>
            {move || {
                let data = wizard.with(|w| w.payload().clone());
                view! {
                    <div>
                        <h3>"Identity & Contact"</h3>
                        <p>{format!("{} ({})", data.identity.full_name, data.identity.gender)}</p>
                        <p class="text-muted">{format!(
                            "Alt: {} · WhatsApp: {} · Email: {} · Language: {} · Via: {}",
                            data.contact.alternate_mobile,
                            data.contact.whatsapp_number,
                            data.contact.email,
                            data.contact.preferred_language,
                            data.contact.contact_methods.join(", "),
                        )}</p>

                        <h3>"Address"</h3>
                        <p>{format!(
                            "{}, {}, {}, {} - {}",
                            data.address.village,
                            data.address.taluk,
                            data.address.district,
                            data.address.state,
                            data.address.pin_code,
                        )}</p>
                        <p class="text-muted">{data.address.full_address.clone()}</p>

                        <h3>{format!("Farm plots ({})", data.farm_plots.len())}</h3>
                        {data.farm_plots.iter().map(|plot| view! {
                            <div class="review-plot">
                                <p>
                                    <strong>{plot.plot_id.clone()}</strong>
                                    {format!(
                                        " · {} · {} total ({} irrigated, {} rain-fed) · soil: {}",
                                        plot.ownership_type,
                                        format_area(plot.total_area, &plot.area_unit),
                                        plot.irrigated_area,
                                        plot.rainfed_area,
                                        plot.soil_type,
                                    )}
                                </p>
                                <p class="text-muted">{format!(
                                    "Water: {} · Irrigation: {}",
                                    plot.water_sources.join(", "),
                                    plot.irrigation_methods.join(", "),
                                )}</p>
                                <ul>
                                    {plot.crops.iter().map(|crop| view! {
                                        <li>{format!(
                                            "{} - {} ({}, harvest {}){} problems: {}",
                                            crop.crop_name,
                                            crop.variety,
                                            crop.season,
                                            crop.harvest_window,
                                            if crop.is_primary { " [primary]" } else { "" },
                                            if crop.major_problems.is_empty() {
                                                "none".to_string()
                                            } else {
                                                crop.major_problems.join(", ")
                                            },
                                        )}</li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view()}
                    </div>
                }
            }}
        </div>
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
