//! Flavor text for floors and events.

use crate::core::error::ServiceError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// How long a source may take before the canned pool is used instead.
pub const DEFAULT_FLAVOR_TIMEOUT: Duration = Duration::from_secs(2);

pub const FALLBACK_DESCRIPTIONS: [&str; 10] = [
    "The details are lost to the shadows.",
    "The air grows heavy, thick with untold stories and forgotten echoes.",
    "A strange silence falls over the room, the details blurring into indistinct shapes.",
    "Your senses are dulled, as if a magical veil obscures the true nature of this place.",
    "Flickering torchlight casts dancing shadows that hide as much as they reveal.",
    "An ancient, indecipherable script covers the walls, its meaning lost to time.",
    "The path forward is clear, but the history of this chamber remains shrouded in mystery.",
    "A cold draft whispers secrets you can't quite understand.",
    "Dust motes dance in a single beam of light, illuminating nothing of consequence.",
    "You find yourself in a place of great significance, but the details are lost to the shadows.",
];

/// Something that can write a line of prose for a context tag.
///
/// Calls run on a worker thread so a slow source cannot hold up play.
pub trait FlavorSource: Send + Sync {
    fn describe(&self, context: &str) -> Result<String, ServiceError>;
}

/// Always produces a line: the source's when it answers in time, a canned one
/// otherwise.
pub struct Narrator {
    source: Option<Arc<dyn FlavorSource>>,
    timeout: Duration,
}

impl Default for Narrator {
    fn default() -> Self {
        Self {
            source: None,
            timeout: DEFAULT_FLAVOR_TIMEOUT,
        }
    }
}

impl Narrator {
    /// A narrator that only uses the canned pool.
    pub fn fallback() -> Self {
        Self::default()
    }

    pub fn with_source(source: Box<dyn FlavorSource>) -> Self {
        Self {
            source: Some(Arc::from(source)),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn ask(&self, source: &Arc<dyn FlavorSource>, context: &str) -> Result<String, ServiceError> {
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(source);
        let tag = context.to_string();
        thread::spawn(move || {
            // The receiver may have given up already
            let _ = tx.send(source.describe(&tag));
        });
        match rx.recv_timeout(self.timeout) {
            Ok(answer) => answer,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(ServiceError::Unavailable(format!(
                "no answer within {} ms",
                self.timeout.as_millis()
            ))),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(ServiceError::Unavailable("flavor source stopped".to_string()))
            }
        }
    }

    pub fn describe(&self, context: &str, rng: &mut impl Rng) -> String {
        if let Some(source) = &self.source {
            match self.ask(source, context) {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => warn!(context, "flavor source returned empty text"),
                Err(e) => warn!(context, error = %e, "flavor source failed"),
            }
        }
        FALLBACK_DESCRIPTIONS
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_DESCRIPTIONS[0])
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Fixed(&'static str);

    impl FlavorSource for Fixed {
        fn describe(&self, context: &str) -> Result<String, ServiceError> {
            Ok(format!("{} {}", self.0, context))
        }
    }

    struct Broken;

    impl FlavorSource for Broken {
        fn describe(&self, _context: &str) -> Result<String, ServiceError> {
            Err(ServiceError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_source_text_is_used() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let narrator = Narrator::with_source(Box::new(Fixed("Deep in")));
        assert_eq!(narrator.describe("floor 3", &mut rng), "Deep in floor 3");
    }

    #[test]
    fn test_failures_fall_back_to_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let narrator = Narrator::with_source(Box::new(Broken));
        let text = narrator.describe("floor 1", &mut rng);
        assert!(FALLBACK_DESCRIPTIONS.contains(&text.as_str()));

        let text = Narrator::fallback().describe("floor 2", &mut rng);
        assert!(FALLBACK_DESCRIPTIONS.contains(&text.as_str()));
    }

    struct Sluggish;

    impl FlavorSource for Sluggish {
        fn describe(&self, _context: &str) -> Result<String, ServiceError> {
            thread::sleep(Duration::from_millis(500));
            Ok("Too late to matter.".to_string())
        }
    }

    #[test]
    fn test_slow_source_times_out_to_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let narrator =
            Narrator::with_source(Box::new(Sluggish)).with_timeout(Duration::from_millis(20));
        let started = std::time::Instant::now();
        let text = narrator.describe("floor 4", &mut rng);
        assert!(FALLBACK_DESCRIPTIONS.contains(&text.as_str()));
        assert!(started.elapsed() < Duration::from_millis(400));
    }
}
