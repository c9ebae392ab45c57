use shared::{AnalysisReport, BasicReport, ConfidenceTier, ExtendedReport, Source};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::AnalysisState;
use crate::{Model, Msg};

fn trigger_input_click(element_id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
    {
        if let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() {
            html_element.click();
        }
    }
}

impl Model {
    pub(crate) fn render_header() -> Html {
        html! {
            <header class="app-header">
                <h1>{"Is It Venomous?"}</h1>
                <p class="subtitle">{"Upload a photo of a snake and identify it instantly"}</p>
            </header>
        }
    }

    pub(crate) fn render_upload_section(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let handle_change = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FileChosen(input)
        });

        html! {
            <div class="upload-section">
                <input
                    type="file"
                    id="image-input"
                    accept="image/*"
                    style="display: none;"
                    onchange={handle_change.clone()}
                />
                <input
                    type="file"
                    id="camera-input"
                    accept="image/*"
                    capture="environment"
                    style="display: none;"
                    onchange={handle_change}
                />
                { self.render_preview() }
                { self.render_controls(ctx) }
            </div>
        }
    }

    fn render_preview(&self) -> Html {
        let open_picker = Callback::from(|_: MouseEvent| trigger_input_click("image-input"));

        match self.state.image() {
            Some(image) => html! {
                <div class="preview-area" onclick={open_picker}>
                    <img src={image.to_string()} alt="Selected Image" class="image-preview" />
                </div>
            },
            None => html! {
                <div class="preview-area placeholder" onclick={open_picker}>
                    <p>{"Upload an image of a snake and detect instantly"}</p>
                </div>
            },
        }
    }

    fn render_controls(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let analyzing = self.state.is_analyzing();

        let change_image = Callback::from(|_: MouseEvent| trigger_input_click("image-input"));
        let take_photo = Callback::from(|_: MouseEvent| trigger_input_click("camera-input"));

        html! {
            <div class="button-container">
                <button class="upload-btn" onclick={change_image} disabled={analyzing}>
                    { if self.state.image().is_some() { "Change Image" } else { "Select Image" } }
                </button>

                { if self.is_mobile {
                    html! {
                        <button class="upload-btn" onclick={take_photo} disabled={analyzing}>
                            {"Take Photo"}
                        </button>
                    }
                } else {
                    html! {}
                }}

                { if self.state.image().is_some() {
                    html! {
                        <button
                            class="analyze-btn"
                            onclick={link.callback(|_| Msg::Analyze)}
                            disabled={analyzing}
                        >
                            { if analyzing { "Analyzing..." } else { "Analyze Snake" } }
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        }
    }

    pub(crate) fn render_alert(&self) -> Html {
        match &self.state {
            AnalysisState::Error { message, .. } => html! {
                <div class="error-message">
                    <p>{ message }</p>
                </div>
            },
            AnalysisState::NotSnake { message, .. } => html! {
                <div class="notice-message">
                    <p>{ message }</p>
                </div>
            },
            _ => html! {},
        }
    }

    pub(crate) fn render_report(&self) -> Html {
        let AnalysisState::Result { report, .. } = &self.state else {
            return html! {};
        };

        html! {
            <div class="results-container">
                <div class="result-header">
                    <h2>{"Analysis Results"}</h2>
                    { render_confidence_badge(report.confidence()) }
                </div>
                {
                    match report {
                        AnalysisReport::Basic(basic) => render_basic_report(basic),
                        AnalysisReport::Extended(extended) => render_extended_report(extended),
                    }
                }
            </div>
        }
    }
}

fn render_confidence_badge(confidence: Option<f64>) -> Html {
    let Some(value) = confidence else {
        return html! {};
    };
    let tier = ConfidenceTier::from_confidence(value);

    html! {
        <div class={classes!("confidence-badge", tier.to_string())}>
            { format!("Confidence: {:.0}%", value) }
        </div>
    }
}

fn render_venom_banner(venomous: bool) -> Html {
    html! {
        <div class={classes!("venom-banner", if venomous { "venomous" } else { "harmless" })}>
            { if venomous { "Poisonous" } else { "Not Poisonous" } }
        </div>
    }
}

fn render_field(label: &str, value: &str) -> Html {
    if value.is_empty() {
        return html! {};
    }
    html! {
        <div class="result-field">
            <div class="field-label">{ label }</div>
            <div class="field-value">{ value }</div>
        </div>
    }
}

fn render_numbered_list(label: &str, items: &[String]) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="result-field">
            <div class="field-label">{ label }</div>
            <div class="field-value">
                { for items.iter().enumerate().map(|(i, item)| html! {
                    <div class="list-row">
                        <span class="list-index">{ format!("{}.", i + 1) }</span>
                        <span>{ item }</span>
                    </div>
                })}
            </div>
        </div>
    }
}

fn render_sources(sources: &[Source]) -> Html {
    if sources.is_empty() {
        return html! {};
    }
    html! {
        <div class="source-links">
            { for sources.iter().enumerate().map(|(i, source)| html! {
                <div class="source-row">
                    <span class="list-index">{ format!("{}.", i + 1) }</span>
                    <a href={source.url.clone()} target="_blank" rel="noopener noreferrer">
                        { &source.name }
                    </a>
                </div>
            })}
        </div>
    }
}

fn render_basic_report(report: &BasicReport) -> Html {
    html! {
        <div class="result-body">
            { render_venom_banner(report.venomous) }
            { render_field("Species:", &report.species) }
            { render_field("Features:", &report.features) }
            { render_field("Safety Concerns:", &report.safety_concerns) }
        </div>
    }
}

fn render_extended_report(report: &ExtendedReport) -> Html {
    html! {
        <div class="result-body">
            { render_venom_banner(report.venomous) }
            { render_field("Species:", &report.species) }
            { render_field("Features:", &report.features) }
            { render_field("Safety Concerns:", &report.safety_concerns) }
            { render_field("Usually Found:", &report.habitat) }
            { render_numbered_list("What to do if bitten?", &report.first_aid_steps) }
            { render_numbered_list("More Information", &report.interesting_facts) }
            { render_sources(&report.sources) }
        </div>
    }
}
