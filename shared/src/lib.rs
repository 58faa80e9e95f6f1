pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod history;
pub mod intake;
pub mod notify;
pub mod picker;
pub mod prediction;
pub mod presenter;
pub mod result;
pub mod route;
pub mod session;
pub mod species;

pub use catalog::{BuiltinCatalog, DiseaseCatalog};
pub use config::{AppConfig, DetectionMode};
pub use error::DetectionError;
pub use flow::{Completion, DetectionFlow, DetectionRequest, FlowPhase};
pub use history::{HistoryEntry, HistoryRecord, HistoryStamp};
pub use intake::UploadedImage;
pub use notify::{Notice, NoticeVariant};
pub use prediction::PredictionResponse;
pub use result::DetectionResult;
pub use route::AppRoute;
pub use session::{AuthError, LoginRequest, LoginResponse, SessionIdentity, UserId};
pub use species::{Species, SpeciesRoute};
