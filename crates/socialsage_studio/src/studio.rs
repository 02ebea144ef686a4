//! The run lifecycle: text phase, then three independent image phases.

use std::sync::Arc;

use socialsage_core::{Platform, RunState, Tone};
use socialsage_error::SocialSageResult;
use socialsage_interface::ContentService;
use strum::IntoEnumIterator;
use tokio::sync::watch;
use tracing::{Instrument, debug, info, info_span, instrument, warn};

use crate::StudioState;

/// Orchestrates generation runs and publishes their state.
///
/// Cloning a `Studio` yields another handle to the same state.
///
/// # Example
///
/// ```no_run
/// use socialsage_core::{Idea, Tone};
/// use socialsage_models::GeminiClient;
/// use socialsage_studio::Studio;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let studio = Studio::new(GeminiClient::new()?);
/// let idea = Idea::new("Launching eco cup line")?;
///
/// studio.generate(idea.as_str(), Tone::Professional).await;
/// let state = studio.wait_for_images().await;
/// for (platform, slot) in state.results().iter() {
///     println!("{}: {:?}", platform.label(), slot.image().status());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Studio {
    service: Arc<dyn ContentService>,
    state: Arc<watch::Sender<StudioState>>,
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("provider", &self.service.provider_name())
            .field("run_id", self.state.borrow().run_id())
            .finish_non_exhaustive()
    }
}

impl Studio {
    /// Creates a studio backed by `service`.
    pub fn new(service: impl ContentService + 'static) -> Self {
        Self::from_arc(Arc::new(service))
    }

    /// Creates a studio backed by a shared service.
    pub fn from_arc(service: Arc<dyn ContentService>) -> Self {
        let (state, _) = watch::channel(StudioState::default());
        Self {
            service,
            state: Arc::new(state),
        }
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<StudioState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> StudioState {
        self.state.borrow().clone()
    }

    /// Runs the text phase for `idea` and dispatches the image phase.
    ///
    /// Callers are expected to pass a non-blank idea (see
    /// [`Idea`](socialsage_core::Idea)); it is forwarded as is.
    ///
    /// Returns once the text phase has settled and the three image requests
    /// are in flight. Image results arrive later through the published state.
    /// A text-phase failure is reported as the run-level error with every
    /// slot cleared.
    #[instrument(skip(self, idea), fields(run_id))]
    pub async fn generate(&self, idea: impl Into<String>, tone: Tone) {
        let idea = idea.into();

        let mut run_id = 0;
        self.state.send_modify(|state| run_id = state.begin_run());
        tracing::Span::current().record("run_id", run_id);
        info!(%tone, provider = self.service.provider_name(), "Starting text phase");

        match self.service.generate_text(&idea, tone).await {
            Ok(posts) => {
                let mut attempts = Vec::new();
                self.state.send_if_modified(|state| {
                    if *state.run_id() != run_id {
                        return false;
                    }
                    state.finish_text(RunState::from_posts(&posts));
                    attempts = Platform::iter()
                        .map(|platform| (platform, state.next_attempt(platform)))
                        .collect();
                    true
                });

                if attempts.is_empty() {
                    debug!("Run superseded during text phase, discarding posts");
                    return;
                }

                info!("Text phase complete, dispatching image phase");
                for (platform, attempt) in attempts {
                    let prompt = posts.for_platform(platform).image_prompt().clone();
                    self.dispatch_image(run_id, attempt, platform, prompt);
                }
            }
            Err(e) => {
                warn!(error = %e, "Text phase failed");
                self.state.send_if_modified(|state| {
                    if *state.run_id() != run_id {
                        return false;
                    }
                    state.fail_text(e.user_message());
                    true
                });
            }
        }
    }

    /// Retries the image for one platform using its stored prompt.
    ///
    /// Does nothing and returns `false` when the platform has no post yet.
    /// Otherwise the slot goes back to loading and a new request is
    /// dispatched. A request still in flight for the slot is superseded: its
    /// result is dropped when it lands. Must be called from within a Tokio
    /// runtime.
    #[instrument(skip(self))]
    pub fn regenerate_image(&self, platform: Platform) -> bool {
        let mut dispatch = None;
        self.state.send_if_modified(|state| {
            let Some(content) = state.results().get(platform).content() else {
                return false;
            };
            let prompt = content.image_prompt().clone();
            state.results_mut().get_mut(platform).image_mut().begin();
            let attempt = state.next_attempt(platform);
            dispatch = Some((*state.run_id(), attempt, prompt));
            true
        });

        match dispatch {
            Some((run_id, attempt, prompt)) => {
                info!(run_id, attempt, "Regenerating image");
                self.dispatch_image(run_id, attempt, platform, prompt);
                true
            }
            None => {
                debug!("No post for platform yet, nothing to regenerate");
                false
            }
        }
    }

    /// Resolves once the current run has nothing in flight.
    pub async fn wait_for_images(&self) -> StudioState {
        let mut receiver = self.state.subscribe();
        match receiver.wait_for(StudioState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.snapshot(),
        }
    }

    /// Spawns one image request whose outcome lands only in `platform`'s slot.
    fn dispatch_image(&self, run_id: u64, attempt: u64, platform: Platform, prompt: String) {
        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        let span = info_span!("image_phase", run_id, attempt, %platform);

        tokio::spawn(
            async move {
                debug!(aspect_ratio = %platform.aspect_ratio(), "Requesting image");
                let outcome = service
                    .generate_image(&prompt, platform.aspect_ratio())
                    .await;
                apply_image_outcome(&state, run_id, attempt, platform, outcome);
            }
            .instrument(span),
        );
    }
}

/// Writes an image outcome into its slot unless the run or the slot has
/// moved on to a newer request.
fn apply_image_outcome(
    state: &watch::Sender<StudioState>,
    run_id: u64,
    attempt: u64,
    platform: Platform,
    outcome: SocialSageResult<String>,
) {
    let applied = state.send_if_modified(|state| {
        if !state.accepts(run_id, platform, attempt) {
            return false;
        }
        let image = state.results_mut().get_mut(platform).image_mut();
        match &outcome {
            Ok(url) => image.succeed(url.clone()),
            Err(e) => image.fail(e.user_message()),
        }
        true
    });

    match (&outcome, applied) {
        (_, false) => debug!("Discarding image from superseded request"),
        (Ok(_), true) => info!("Image ready"),
        (Err(e), true) => warn!(error = %e, "Image generation failed"),
    }
}
