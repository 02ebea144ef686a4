//! Mock content service for testing.

use async_trait::async_trait;
use socialsage_core::{AspectRatio, SocialPosts, Tone};
use socialsage_error::{GeminiError, GeminiErrorKind, SocialSageResult};
use socialsage_interface::ContentService;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// A scripted text-phase outcome.
#[derive(Debug, Clone)]
pub enum MockText {
    Posts(SocialPosts),
    Error(GeminiErrorKind),
}

/// A scripted image outcome.
#[derive(Debug, Clone)]
pub enum MockImage {
    Url(String),
    Error(GeminiErrorKind),
}

/// Mock content service.
///
/// Text calls pop the next scripted [`MockText`]; once the script runs out
/// they return the last posts seen. Image calls pop the next [`MockImage`]
/// scripted for their prompt and otherwise succeed with a url derived from
/// the prompt. When gated, every call blocks until the test releases it.
///
/// Tests keep an `Arc` to the mock and hand a clone to the studio.
pub struct MockContentService {
    text_script: Mutex<VecDeque<MockText>>,
    fallback_posts: SocialPosts,
    image_scripts: Mutex<HashMap<String, VecDeque<MockImage>>>,
    text_gate: Option<Arc<Semaphore>>,
    image_gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    gate_images: bool,
    text_calls: Mutex<usize>,
    image_calls: Mutex<Vec<(String, AspectRatio)>>,
}

impl MockContentService {
    /// Create a mock whose text phase always returns `posts`.
    pub fn new(posts: SocialPosts) -> Self {
        Self {
            text_script: Mutex::new(VecDeque::new()),
            fallback_posts: posts,
            image_scripts: Mutex::new(HashMap::new()),
            text_gate: None,
            image_gates: Mutex::new(HashMap::new()),
            gate_images: false,
            text_calls: Mutex::new(0),
            image_calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue text-phase outcomes, consumed one per call.
    pub fn with_text_script(self, script: Vec<MockText>) -> Self {
        *self.text_script.lock().unwrap() = script.into();
        self
    }

    /// Queue image outcomes for one prompt, consumed one per call.
    pub fn with_image_script(self, prompt: impl Into<String>, script: Vec<MockImage>) -> Self {
        self.image_scripts
            .lock()
            .unwrap()
            .insert(prompt.into(), script.into());
        self
    }

    /// Block text calls until [`MockContentService::release_text`].
    pub fn gate_text(mut self) -> Self {
        self.text_gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Block image calls until released per prompt.
    pub fn gate_images(mut self) -> Self {
        self.gate_images = true;
        self
    }

    /// Number of text calls made.
    pub fn text_calls(&self) -> usize {
        *self.text_calls.lock().unwrap()
    }

    /// Let one gated text call through.
    pub fn release_text(&self) {
        if let Some(gate) = &self.text_gate {
            gate.add_permits(1);
        }
    }

    fn image_gate(&self, prompt: &str) -> Option<Arc<Semaphore>> {
        if !self.gate_images {
            return None;
        }
        let mut gates = self.image_gates.lock().unwrap();
        Some(Arc::clone(
            gates
                .entry(prompt.to_string())
                .or_insert_with(|| Arc::new(Semaphore::new(0))),
        ))
    }

    /// Let one gated image call for `prompt` through.
    pub fn release_image(&self, prompt: &str) {
        let mut gates = self.image_gates.lock().unwrap();
        gates
            .entry(prompt.to_string())
            .or_insert_with(|| Arc::new(Semaphore::new(0)))
            .add_permits(1);
    }

    /// Prompts and aspect ratios of every image call so far.
    pub fn image_calls(&self) -> Vec<(String, AspectRatio)> {
        self.image_calls.lock().unwrap().clone()
    }

    fn next_text(&self) -> SocialSageResult<SocialPosts> {
        *self.text_calls.lock().unwrap() += 1;
        match self.text_script.lock().unwrap().pop_front() {
            Some(MockText::Posts(posts)) => Ok(posts),
            Some(MockText::Error(kind)) => Err(GeminiError::new(kind).into()),
            None => Ok(self.fallback_posts.clone()),
        }
    }

    fn next_image(&self, prompt: &str) -> SocialSageResult<String> {
        let scripted = self
            .image_scripts
            .lock()
            .unwrap()
            .get_mut(prompt)
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(MockImage::Url(url)) => Ok(url),
            Some(MockImage::Error(kind)) => Err(GeminiError::new(kind).into()),
            None => Ok(format!(
                "data:image/png;base64,{}",
                prompt.replace(' ', "_")
            )),
        }
    }
}

#[async_trait]
impl ContentService for MockContentService {
    async fn generate_text(&self, _idea: &str, _tone: Tone) -> SocialSageResult<SocialPosts> {
        if let Some(gate) = &self.text_gate {
            gate.acquire().await.expect("text gate closed").forget();
        }
        self.next_text()
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> SocialSageResult<String> {
        self.image_calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), aspect_ratio));
        if let Some(gate) = self.image_gate(prompt) {
            gate.acquire().await.expect("image gate closed").forget();
        }
        self.next_image(prompt)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn text_model(&self) -> &str {
        "mock-text"
    }

    fn image_model(&self) -> &str {
        "mock-image"
    }
}
