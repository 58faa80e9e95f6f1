//! State machine behind the upload page.
//!
//! The flow never performs I/O itself. `begin_detection` hands back the
//! request to send, and `complete` takes whatever the transport produced and
//! tells the caller what to show and whether to write history.

use crate::error::DetectionError;
use crate::history::{HistoryEntry, HistoryRecord, HistoryStamp};
use crate::intake::UploadedImage;
use crate::prediction::PredictionResponse;
use crate::result::DetectionResult;
use crate::session::SessionIdentity;
use crate::species::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    SpeciesChosen,
    ImageStaged,
    Detecting,
    Resulted,
}

/// The single request a detection attempt is allowed to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRequest {
    pub species: Species,
    pub segment: &'static str,
    /// Attempt that issued the request; outcomes for older attempts are stale.
    pub attempt: u64,
}

impl DetectionRequest {
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}/predict", base.trim_end_matches('/'), self.segment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Resulted {
        result: DetectionResult,
        history: Option<HistoryRecord>,
    },
    Failed(DetectionError),
    /// The attempt that sent the request has since been reset or replaced.
    Stale,
}

#[derive(Debug, Clone)]
pub struct DetectionFlow {
    phase: FlowPhase,
    species: Option<Species>,
    image: Option<UploadedImage>,
    result: Option<DetectionResult>,
    attempt: u64,
}

impl Default for DetectionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionFlow {
    pub fn new() -> Self {
        Self {
            phase: FlowPhase::Idle,
            species: None,
            image: None,
            result: None,
            attempt: 0,
        }
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    pub fn species(&self) -> Option<Species> {
        self.species
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }

    pub fn is_detecting(&self) -> bool {
        self.phase == FlowPhase::Detecting
    }

    /// Picks (or changes) the species. An unknown key leaves the flow as it was.
    pub fn choose_species(&mut self, key: &str) -> Result<Species, DetectionError> {
        if self.is_detecting() {
            return Err(DetectionError::Busy);
        }
        let species = Species::parse(key)?;

        self.species = Some(species);
        self.image = None;
        self.result = None;
        self.attempt += 1;
        self.transition(FlowPhase::SpeciesChosen);
        Ok(species)
    }

    /// Stages or replaces the image for the current attempt.
    pub fn stage_image(&mut self, image: UploadedImage) -> Result<(), DetectionError> {
        match self.phase {
            FlowPhase::Idle => Err(DetectionError::NoSpecies),
            FlowPhase::Detecting => Err(DetectionError::Busy),
            FlowPhase::Resulted => Err(DetectionError::AttemptFinished),
            FlowPhase::SpeciesChosen | FlowPhase::ImageStaged => {
                self.image = Some(image);
                self.transition(FlowPhase::ImageStaged);
                Ok(())
            }
        }
    }

    pub fn clear_image(&mut self) {
        if self.phase == FlowPhase::ImageStaged {
            self.image = None;
            self.transition(FlowPhase::SpeciesChosen);
        }
    }

    /// Moves to `Detecting` and returns the request to send. While a request
    /// is outstanding every further call fails with `Busy`.
    pub fn begin_detection(&mut self) -> Result<DetectionRequest, DetectionError> {
        match self.phase {
            FlowPhase::Detecting => return Err(DetectionError::Busy),
            FlowPhase::Resulted => return Err(DetectionError::AttemptFinished),
            FlowPhase::Idle => return Err(DetectionError::NoSpecies),
            FlowPhase::SpeciesChosen | FlowPhase::ImageStaged => {}
        }
        let species = self.species.ok_or(DetectionError::NoSpecies)?;
        if self.image.is_none() {
            return Err(DetectionError::NoImage);
        }

        self.transition(FlowPhase::Detecting);
        Ok(DetectionRequest {
            species,
            segment: species.route_segment(),
            attempt: self.attempt,
        })
    }

    /// Applies the transport outcome of `request`. On success the history
    /// record is built only when a session is present; on any failure the
    /// image is dropped and the flow goes back to `SpeciesChosen`.
    pub fn complete<F>(
        &mut self,
        request: &DetectionRequest,
        outcome: Result<PredictionResponse, DetectionError>,
        session: Option<&SessionIdentity>,
        stamp: F,
    ) -> Completion
    where
        F: FnOnce() -> HistoryStamp,
    {
        if !self.is_detecting() || request.attempt != self.attempt {
            log::debug!(
                "Dropping outcome of attempt {} received in {:?} (current attempt {})",
                request.attempt,
                self.phase,
                self.attempt
            );
            return Completion::Stale;
        }

        match outcome.and_then(PredictionResponse::into_result) {
            Ok(result) => {
                let history = match (session, self.species, self.image.as_ref()) {
                    (Some(identity), Some(species), Some(image)) => Some(HistoryRecord::new(
                        identity,
                        HistoryEntry::new(species, &result, &image.data_url, stamp()),
                    )),
                    _ => None,
                };
                self.result = Some(result.clone());
                self.transition(FlowPhase::Resulted);
                Completion::Resulted { result, history }
            }
            Err(error) => {
                self.image = None;
                self.result = None;
                self.transition(FlowPhase::SpeciesChosen);
                Completion::Failed(error)
            }
        }
    }

    pub fn reset(&mut self) {
        self.species = None;
        self.image = None;
        self.result = None;
        self.attempt += 1;
        self.transition(FlowPhase::Idle);
    }

    fn transition(&mut self, next: FlowPhase) {
        log::debug!("Detection flow {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserId;

    fn jpeg() -> UploadedImage {
        UploadedImage::from_bytes("rex.jpg", "image/jpeg", &[0xff, 0xd8, 0xff]).unwrap()
    }

    fn identity() -> SessionIdentity {
        SessionIdentity {
            id: UserId::Text("u-1".into()),
            name: "Asha".into(),
            email: "asha@farm.io".into(),
        }
    }

    fn stamp() -> HistoryStamp {
        HistoryStamp {
            id: "1760600100000".into(),
            date: "10/16/2026, 9:15:00 AM".into(),
        }
    }

    fn staged(key: &str) -> DetectionFlow {
        let mut flow = DetectionFlow::new();
        flow.choose_species(key).unwrap();
        flow.stage_image(jpeg()).unwrap();
        flow
    }

    fn label_only(label: &str) -> Result<PredictionResponse, DetectionError> {
        Ok(PredictionResponse {
            prediction: Some(label.into()),
            ..Default::default()
        })
    }

    #[test]
    fn happy_path_walks_every_phase() {
        let mut flow = DetectionFlow::new();
        assert_eq!(flow.phase(), FlowPhase::Idle);

        flow.choose_species("dog").unwrap();
        assert_eq!(flow.phase(), FlowPhase::SpeciesChosen);

        flow.stage_image(jpeg()).unwrap();
        assert_eq!(flow.phase(), FlowPhase::ImageStaged);

        let request = flow.begin_detection().unwrap();
        assert_eq!(request.url("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/dogs/predict");
        assert_eq!(flow.phase(), FlowPhase::Detecting);

        let completion = flow.complete(&request, label_only("Canine Dermatitis"), None, stamp);
        assert!(matches!(completion, Completion::Resulted { history: None, .. }));
        assert_eq!(flow.phase(), FlowPhase::Resulted);
        assert_eq!(flow.result().unwrap().medications, vec!["Consult your vet"]);
    }

    #[test]
    fn invalid_species_changes_nothing() {
        let mut flow = DetectionFlow::new();
        assert!(matches!(flow.choose_species("horse"), Err(DetectionError::InvalidSpecies(_))));
        assert_eq!(flow.phase(), FlowPhase::Idle);
        assert!(flow.begin_detection().is_err());
    }

    #[test]
    fn second_detect_while_pending_is_refused() {
        let mut flow = staged("cow");
        let first = flow.begin_detection();
        let second = flow.begin_detection();

        assert!(first.is_ok());
        assert_eq!(second, Err(DetectionError::Busy));
        assert_eq!(flow.stage_image(jpeg()), Err(DetectionError::Busy));
        assert_eq!(flow.choose_species("dog"), Err(DetectionError::Busy));
    }

    #[test]
    fn detect_without_image_is_refused() {
        let mut flow = DetectionFlow::new();
        flow.choose_species("chicken").unwrap();
        assert_eq!(flow.begin_detection(), Err(DetectionError::NoImage));
        assert_eq!(flow.phase(), FlowPhase::SpeciesChosen);
    }

    #[test]
    fn no_session_means_no_history() {
        let mut flow = staged("dog");
        let request = flow.begin_detection().unwrap();
        let mut stamped = false;
        let completion = flow.complete(&request, label_only("Canine Dermatitis"), None, || {
            stamped = true;
            stamp()
        });

        assert!(matches!(completion, Completion::Resulted { history: None, .. }));
        assert!(!stamped);
    }

    #[test]
    fn session_yields_exactly_one_matching_history_record() {
        let mut flow = staged("dog");
        let request = flow.begin_detection().unwrap();
        let identity = identity();

        match flow.complete(&request, label_only("Canine Dermatitis"), Some(&identity), stamp) {
            Completion::Resulted {
                result,
                history: Some(record),
            } => {
                assert_eq!(record.user_id, identity.id);
                assert_eq!(record.history_item.disease, result.disease_name);
                assert_eq!(record.history_item.animal, "Dog");
                assert_eq!(record.history_item.image, jpeg().data_url);
                assert_eq!(record.history_item.medications, result.medications);
            }
            other => panic!("unexpected completion: {other:?}"),
        }
    }

    #[test]
    fn server_error_rolls_back_to_species_chosen() {
        let mut flow = staged("cat");
        let request = flow.begin_detection().unwrap();
        assert_eq!(request.segment, "goats");

        let completion = flow.complete(
            &request,
            Err(DetectionError::Status {
                status: 500,
                body: "Internal Server Error".into(),
            }),
            Some(&identity()),
            stamp,
        );

        assert!(matches!(completion, Completion::Failed(DetectionError::Status { status: 500, .. })));
        assert_eq!(flow.phase(), FlowPhase::SpeciesChosen);
        assert_eq!(flow.species(), Some(Species::Cat));
        assert!(flow.image().is_none());
        assert!(flow.result().is_none());
    }

    #[test]
    fn unreachable_server_shows_generic_notice() {
        let mut flow = staged("dog");
        let request = flow.begin_detection().unwrap();
        let completion = flow.complete(&request, Err(DetectionError::Unreachable("connection refused".into())), None, stamp);

        let Completion::Failed(error) = completion else {
            panic!("expected failure");
        };
        assert_eq!(
            error.notice().description,
            "Could not reach the detection server. Is it running?"
        );
        assert_eq!(flow.phase(), FlowPhase::SpeciesChosen);
    }

    #[test]
    fn service_error_field_never_produces_a_result() {
        let mut flow = staged("chicken");
        let request = flow.begin_detection().unwrap();
        let outcome = Ok(PredictionResponse {
            error: Some("Invalid image".into()),
            ..Default::default()
        });

        let completion = flow.complete(&request, outcome, Some(&identity()), stamp);
        assert_eq!(completion, Completion::Failed(DetectionError::Service("Invalid image".into())));
        assert!(flow.result().is_none());
    }

    #[test]
    fn late_outcome_after_reset_is_stale() {
        let mut flow = staged("dog");
        let request = flow.begin_detection().unwrap();
        flow.reset();

        let completion = flow.complete(&request, label_only("Canine Dermatitis"), Some(&identity()), stamp);
        assert_eq!(completion, Completion::Stale);
        assert_eq!(flow.phase(), FlowPhase::Idle);
    }

    #[test]
    fn outcome_of_a_replaced_attempt_is_stale() {
        let mut flow = staged("dog");
        let dog_request = flow.begin_detection().unwrap();

        flow.reset();
        flow.choose_species("cat").unwrap();
        flow.stage_image(jpeg()).unwrap();
        let cat_request = flow.begin_detection().unwrap();
        assert_ne!(dog_request.attempt, cat_request.attempt);

        let late = flow.complete(&dog_request, label_only("Canine Dermatitis"), Some(&identity()), stamp);
        assert_eq!(late, Completion::Stale);
        assert_eq!(flow.phase(), FlowPhase::Detecting);
        assert!(flow.result().is_none());

        match flow.complete(&cat_request, label_only("Feline Ringworm"), Some(&identity()), stamp) {
            Completion::Resulted {
                result,
                history: Some(record),
            } => {
                assert_eq!(result.disease_name, "Feline Ringworm");
                assert_eq!(record.history_item.animal, "Cat");
            }
            other => panic!("unexpected completion: {other:?}"),
        }
    }

    #[test]
    fn resulted_only_leaves_through_reset_or_species_change() {
        let mut flow = staged("dog");
        let request = flow.begin_detection().unwrap();
        flow.complete(&request, label_only("Canine Dermatitis"), None, stamp);

        assert_eq!(flow.stage_image(jpeg()), Err(DetectionError::AttemptFinished));
        assert_eq!(flow.begin_detection(), Err(DetectionError::AttemptFinished));

        flow.choose_species("cow").unwrap();
        assert_eq!(flow.phase(), FlowPhase::SpeciesChosen);
        assert!(flow.result().is_none());

        flow.reset();
        assert_eq!(flow.phase(), FlowPhase::Idle);
        assert!(flow.species().is_none());
    }

    #[test]
    fn clearing_the_image_steps_back() {
        let mut flow = staged("cow");
        flow.clear_image();
        assert_eq!(flow.phase(), FlowPhase::SpeciesChosen);
        assert!(flow.image().is_none());
    }
}
