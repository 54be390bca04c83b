use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use edgescan::domain::Market;
use edgescan::error::{Error, Result};
use edgescan::port::MarketFetcher;

/// Fetcher that replays a script of snapshots, one per call.
///
/// `None` entries fail the fetch. Once the script runs out the last
/// successful snapshot is repeated.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Option<Vec<Market>>>>,
    last: Mutex<Vec<Market>>,
    delay: Duration,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Option<Vec<Market>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    /// Make every fetch take `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn repeating(markets: Vec<Market>) -> Self {
        Self::new(vec![Some(markets)])
    }
}

#[async_trait]
impl MarketFetcher for ScriptedFetcher {
    async fn get_markets(&self, limit: usize) -> Result<Vec<Market>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.script.lock().expect("lock script").pop_front();
        let mut last = self.last.lock().expect("lock last snapshot");
        match next {
            Some(Some(markets)) => *last = markets,
            Some(None) => return Err(Error::Fetch("scripted failure".into())),
            None => {}
        }
        Ok(last.iter().take(limit).cloned().collect())
    }

    fn exchange_name(&self) -> &'static str {
        "scripted"
    }
}
