use super::results::ResultView;
use super::utils::history_stamp;
use crate::api;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::{FileReader, read_as_bytes};
use shared::intake::validate_media_type;
use shared::species::resolve_species;
use shared::{
    AppConfig, AppRoute, BuiltinCatalog, Completion, DetectionError, DetectionFlow, DetectionMode,
    DetectionRequest, DiseaseCatalog, FlowPhase, Notice, PredictionResponse, SessionIdentity, SpeciesRoute, UploadedImage,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetectionUploadProps {
    pub species_key: String,
    pub session: Option<SessionIdentity>,
    pub config: AppConfig,
    pub on_navigate: Callback<AppRoute>,
    pub on_notify: Callback<Notice>,
}

pub enum Msg {
    // Image intake
    FileChosen(GlooFile),
    ImageRead(Result<UploadedImage, DetectionError>),
    ChangeImage,

    // Detection
    Detect,
    DetectionFinished(DetectionRequest, Result<PredictionResponse, DetectionError>),

    // Navigation within the flow
    UploadAnother,
    ChangeAnimal,
}

pub struct DetectionUpload {
    catalog: Box<dyn DiseaseCatalog>,
    route: Option<SpeciesRoute>,
    flow: DetectionFlow,
    file: Option<GlooFile>,
    reader: Option<FileReader>,
    file_input: NodeRef,
}

impl Component for DetectionUpload {
    type Message = Msg;
    type Properties = DetectionUploadProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            catalog: Box::new(BuiltinCatalog),
            route: None,
            flow: DetectionFlow::new(),
            file: None,
            reader: None,
            file_input: NodeRef::default(),
        };
        page.start_attempt(&ctx.props().species_key);
        page
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().species_key != old_props.species_key {
            self.start_attempt(&ctx.props().species_key);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => self.handle_file_chosen(ctx, file),
            Msg::ImageRead(image) => self.handle_image_read(ctx, image),
            Msg::ChangeImage => {
                self.flow.clear_image();
                self.file = None;
                self.reader = None;
                true
            }

            Msg::Detect => self.handle_detect(ctx),
            Msg::DetectionFinished(request, outcome) => self.handle_detection_finished(ctx, request, outcome),

            Msg::UploadAnother => {
                let key = ctx.props().species_key.clone();
                self.start_attempt(&key);
                true
            }
            Msg::ChangeAnimal => {
                self.flow.reset();
                self.file = None;
                self.reader = None;
                ctx.props().on_navigate.emit(AppRoute::Detection);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(route) = &self.route else {
            return self.render_invalid_species(ctx);
        };

        html! {
            <main class="upload-page">
                { self.render_header(ctx, route) }
                {
                    match self.flow.result() {
                        Some(result) => html! {
                            <>
                                <ResultView
                                    result={result.clone()}
                                    image={self.flow.image().map(|image| image.data_url.clone())}
                                />
                                { self.render_result_actions(ctx) }
                            </>
                        },
                        None => self.render_upload_card(ctx, route),
                    }
                }
            </main>
        }
    }
}

// Handler methods
impl DetectionUpload {
    /// Drops any previous attempt and starts a fresh one for `key`.
    fn start_attempt(&mut self, key: &str) {
        self.flow.reset();
        self.file = None;
        self.reader = None;

        self.route = match resolve_species(key, self.catalog.as_ref()) {
            Ok(route) => {
                if let Err(e) = self.flow.choose_species(key) {
                    log::error!("Species {} resolved but was refused by the flow: {}", key, e);
                }
                Some(route)
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
    }

    fn handle_file_chosen(&mut self, ctx: &Context<Self>, file: GlooFile) -> bool {
        let mime = file.raw_mime_type();
        if let Err(e) = validate_media_type(&mime) {
            log::warn!("Rejected {}: {}", file.name(), e);
            ctx.props().on_notify.emit(e.notice());
            return false;
        }

        let name = file.name();
        let link = ctx.link().clone();
        let reader = read_as_bytes(&file, move |bytes| {
            let image = bytes
                .map_err(|e| DetectionError::Decode(format!("Could not read {}: {}", name, e)))
                .and_then(|bytes| UploadedImage::from_bytes(name.clone(), mime, &bytes));
            link.send_message(Msg::ImageRead(image));
        });

        self.reader = Some(reader);
        self.file = Some(file);
        false
    }

    fn handle_image_read(&mut self, ctx: &Context<Self>, image: Result<UploadedImage, DetectionError>) -> bool {
        self.reader = None;

        let staged = image.and_then(|image| {
            log::info!("Staged {} ({} bytes)", image.name, image.size);
            self.flow.stage_image(image)
        });

        if let Err(e) = staged {
            log::warn!("Could not stage image: {}", e);
            self.file = None;
            ctx.props().on_notify.emit(e.notice());
        }
        true
    }

    fn handle_detect(&mut self, ctx: &Context<Self>) -> bool {
        let request = match self.flow.begin_detection() {
            Ok(request) => request,
            Err(DetectionError::Busy) => return false,
            Err(e) => {
                ctx.props().on_notify.emit(e.notice());
                return false;
            }
        };

        let props = ctx.props();
        let link = ctx.link().clone();

        match props.config.mode {
            DetectionMode::Catalog => {
                let outcome = self
                    .route
                    .as_ref()
                    .and_then(|route| route.fallback.clone())
                    .map(PredictionResponse::from)
                    .ok_or_else(|| DetectionError::Service("No reference result for this animal".into()));
                link.send_message(Msg::DetectionFinished(request, outcome));
            }
            DetectionMode::Remote => {
                let Some(file) = self.file.clone() else {
                    link.send_message(Msg::DetectionFinished(request, Err(DetectionError::NoImage)));
                    return true;
                };
                let url = request.url(&props.config.detection_url);
                spawn_local(async move {
                    let outcome = api::predict(url, file).await;
                    link.send_message(Msg::DetectionFinished(request, outcome));
                });
            }
        }

        true
    }

    fn handle_detection_finished(
        &mut self,
        ctx: &Context<Self>,
        request: DetectionRequest,
        outcome: Result<PredictionResponse, DetectionError>,
    ) -> bool {
        let props = ctx.props();

        match self.flow.complete(&request, outcome, props.session.as_ref(), history_stamp) {
            Completion::Resulted { result, history } => {
                log::info!("Detected {}", result.disease_name);
                if let Some(record) = history {
                    api::record_history(props.config.history_url(), record);
                }
                props.on_notify.emit(Notice::info(
                    "Detection Complete",
                    format!("Disease detected: {}", result.disease_name),
                ));
                true
            }
            Completion::Failed(e) => {
                if e.is_validation() {
                    log::warn!("Detection refused: {}", e);
                } else {
                    log::error!("Detection failed: {}", e);
                }
                self.file = None;
                props.on_notify.emit(e.notice());
                true
            }
            Completion::Stale => false,
        }
    }
}

// Rendering methods
impl DetectionUpload {
    fn render_invalid_species(&self, ctx: &Context<Self>) -> Html {
        html! {
            <main class="upload-page invalid-species">
                <h2>{"Invalid animal"}</h2>
                <button class="btn btn-outline" onclick={ctx.link().callback(|_| Msg::ChangeAnimal)}>
                    <i class="fa-solid fa-arrow-left"></i>{" Back to Detection"}
                </button>
            </main>
        }
    }

    fn render_header(&self, ctx: &Context<Self>, route: &SpeciesRoute) -> Html {
        html! {
            <div class="upload-header">
                <button class="btn btn-icon" title="Back" onclick={ctx.link().callback(|_| Msg::ChangeAnimal)}>
                    <i class="fa-solid fa-arrow-left"></i>
                </button>
                <img class="species-avatar" src={route.species.image_asset()} alt={route.display_name} />
                <div>
                    <h1>{ format!("{} Disease Detection", route.display_name) }</h1>
                    <p class="subtitle">{"Upload an image to diagnose"}</p>
                </div>
            </div>
        }
    }

    fn render_upload_card(&self, ctx: &Context<Self>, route: &SpeciesRoute) -> Html {
        let link = ctx.link();

        let handle_change = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.item(0));
            input.set_value("");
            file.map(|file| Msg::FileChosen(GlooFile::from(file)))
        });

        let open_picker = {
            let file_input = self.file_input.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(input) = file_input.cast::<HtmlInputElement>() {
                    input.click();
                }
            })
        };

        let detecting = self.flow.phase() == FlowPhase::Detecting;

        html! {
            <div class="upload-card">
                <h3>{ format!("Upload {} Image", route.display_name) }</h3>
                <input
                    ref={self.file_input.clone()}
                    type="file"
                    accept="image/*"
                    style="display: none;"
                    onchange={handle_change}
                />
                {
                    match self.flow.image() {
                        None => html! {
                            <button class="upload-area" onclick={open_picker}>
                                <i class="fa-solid fa-cloud-arrow-up"></i>
                                <span>{"Click to upload image"}</span>
                            </button>
                        },
                        Some(image) => html! {
                            <div class="staged-image">
                                <div class="image-circle">
                                    <img src={image.data_url.clone()} alt="Uploaded" />
                                </div>
                                <div class="button-container">
                                    <button
                                        class="analyze-btn"
                                        disabled={detecting}
                                        onclick={link.callback(|_| Msg::Detect)}
                                    >
                                        if detecting {
                                            <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</>
                                        } else {
                                            {"Detect Now"}
                                        }
                                    </button>
                                    <button
                                        class="analyze-btn secondary"
                                        disabled={detecting}
                                        onclick={link.callback(|_| Msg::ChangeImage)}
                                    >
                                        {"Change Image"}
                                    </button>
                                </div>
                            </div>
                        },
                    }
                }
            </div>
        }
    }

    fn render_result_actions(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="button-container">
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::UploadAnother)}>
                    {"Upload Another"}
                </button>
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::ChangeAnimal)}>
                    {"Change Animal"}
                </button>
            </div>
        }
    }
}
