//! In-process gateway used by tests in place of a real Discord connection.

use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use crate::server::{
    bot::gateway::{GatewayConnector, GatewayLink},
    error::bot::BotError,
    model::{bot::BotInfo, guild::BotGuild},
};

#[derive(Default)]
pub struct FakeConnector {
    guilds: Vec<BotGuild>,
    fail: bool,
    fail_info: bool,
    connects: AtomicUsize,
    live: Arc<AtomicUsize>,
    links: Mutex<Vec<Arc<FakeLink>>>,
}

impl FakeConnector {
    /// Connector whose links report the given guilds.
    pub fn with_guilds(guilds: Vec<BotGuild>) -> Self {
        Self {
            guilds,
            ..Default::default()
        }
    }

    /// Connector whose client stops before becoming ready.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Connector whose links connect but fail to report bot info.
    pub fn with_failing_info() -> Self {
        Self {
            fail_info: true,
            ..Default::default()
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Links that have connected and not yet shut down.
    pub fn live_links(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Simulates the gateway dropping every open link.
    pub fn drop_connection(&self) {
        for link in self.links.lock().unwrap().iter() {
            link.connected.store(false, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl GatewayConnector for FakeConnector {
    async fn connect(&self, _token: &str) -> Result<Arc<dyn GatewayLink>, BotError> {
        self.connects.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(BotError::ClosedBeforeReady);
        }

        // Yield so concurrent connects would interleave without the handle's lock.
        tokio::task::yield_now().await;

        self.live.fetch_add(1, Ordering::SeqCst);
        let link = Arc::new(FakeLink {
            guilds: self.guilds.clone(),
            fail_info: self.fail_info,
            connected: AtomicBool::new(true),
            closed: AtomicBool::new(false),
            live: self.live.clone(),
        });
        self.links.lock().unwrap().push(link.clone());

        Ok(link)
    }
}

pub struct FakeLink {
    guilds: Vec<BotGuild>,
    fail_info: bool,
    connected: AtomicBool,
    closed: AtomicBool,
    live: Arc<AtomicUsize>,
}

#[async_trait]
impl GatewayLink for FakeLink {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn guilds(&self) -> Result<Vec<BotGuild>, BotError> {
        Ok(self.guilds.clone())
    }

    async fn info(&self) -> Result<BotInfo, BotError> {
        if self.fail_info {
            return Err(::serenity::Error::Other("shard runners unavailable").into());
        }

        Ok(BotInfo {
            tag: "FakeBot#0001".to_string(),
            ping: 42,
            server_count: self.guilds.len(),
            user_count: self.guilds.iter().map(|g| g.member_count).sum(),
            uptime_days: 0.0,
        })
    }

    async fn shutdown(&self) {
        self.connected.store(false, Ordering::SeqCst);
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
