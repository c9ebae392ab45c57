mod api;
mod capture;
mod state;
mod view;

use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use state::{AnalysisOutcome, AnalysisState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum Msg {
    // Capture
    FileChosen(HtmlInputElement),
    ImageRead(Result<String, String>),

    // Analysis round trip
    Analyze,
    AnalysisSettled(u64, AnalysisOutcome),
}

pub struct Model {
    state: AnalysisState,
    next_seq: u64,
    reader: Option<FileReader>,
    is_mobile: bool,
}

fn is_mobile_device() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(user_agent) = window.navigator().user_agent() else {
        return false;
    };
    ["Android", "webOS", "iPhone", "iPad", "iPod", "BlackBerry", "IEMobile", "Opera Mini"]
        .iter()
        .any(|needle| user_agent.contains(needle))
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: AnalysisState::Idle,
            next_seq: 0,
            reader: None,
            is_mobile: is_mobile_device(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(input) => match capture::image_from_input(&input) {
                Ok(Some(file)) => {
                    self.start_read(ctx, file);
                    false
                }
                Ok(None) => false,
                Err(message) => {
                    log::warn!("Rejected capture: {}", message);
                    self.reader = None;
                    self.state.capture_failed(message);
                    true
                }
            },

            Msg::ImageRead(result) => {
                self.reader = None;
                match result {
                    Ok(image) => self.state.select_image(image),
                    Err(message) => self.state.capture_failed(message),
                }
                true
            }

            Msg::Analyze => {
                let seq = self.next_seq;
                if !self.state.begin_analysis(seq) {
                    return false;
                }
                self.next_seq += 1;

                let image = self.state.image().unwrap_or_default().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = api::request_analysis(image).await;
                    link.send_message(Msg::AnalysisSettled(seq, outcome));
                });
                true
            }

            Msg::AnalysisSettled(seq, outcome) => self.state.settle(seq, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { Self::render_header() }

                <main class="main-content">
                    { self.render_upload_section(ctx) }
                    { self.render_alert() }
                    { self.render_report() }
                </main>

                <footer class="app-footer">
                    <p>{"Snake Identification Demo | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

impl Model {
    fn start_read(&mut self, ctx: &Context<Self>, file: GlooFile) {
        let link = ctx.link().clone();
        // Replacing the reader drops any read still in progress.
        self.reader = Some(capture::read_to_data_uri(&file, move |result| {
            link.send_message(Msg::ImageRead(result));
        }));
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
