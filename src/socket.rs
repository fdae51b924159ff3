// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Live block height and station status
//!
//! The pub/sub transport lives outside this crate. Whatever receives
//! messages on the [`HEIGHT_CHANNEL`] and [`STATUS_CHANNEL`] channels pushes
//! them into a [`LiveFeed`]; readers take snapshots ([`LiveFeed::view`]) or
//! hold a [`BlockWatcher`] that re-formats the block only when the height
//! changes.
//!
//! # Example
//!
//! ```rust
//! use terra_display::LiveFeed;
//!
//! let feed = LiveFeed::new("mainnet");
//! assert!(feed.view().block.is_none());
//!
//! feed.publish("latestBlockHeight", "1234567");
//! let block = feed.view().block.unwrap();
//! assert_eq!(block.formatted, "#1,234,567");
//! assert_eq!(block.link, "/mainnet/blocks/1234567");
//! assert_eq!(feed.request_params(), Some(("height", "1234567".to_string())));
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::finder::{Finder, LinkKind};
use crate::format::decimal;
use crate::memo::Memo;
use crate::spans;

/// Channel carrying the latest block height
pub const HEIGHT_CHANNEL: &str = "latestBlockHeight";

/// Channel carrying the station status message
pub const STATUS_CHANNEL: &str = "stationStatus";

/// Query parameter the fetch layer attaches once a height is known
pub const HEIGHT_PARAM: &str = "height";

/// Latest block, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDisplay {
    /// Grouped height with a `#` prefix (`#1,234,567`)
    pub formatted: String,
    /// Finder link to the block
    pub link: String,
}

impl BlockDisplay {
    /// Format a block height
    pub fn new(height: &str, finder: &Finder) -> Self {
        Self {
            formatted: format!("#{}", decimal(height, 0)),
            link: finder.link(LinkKind::Blocks, height),
        }
    }
}

/// Snapshot of the live feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketView {
    /// Latest block, once a height has arrived
    pub block: Option<BlockDisplay>,
    /// Latest station status message
    pub status: Option<String>,
}

/// Latest values received from the live transport
///
/// Values are held in [`watch`] channels: publishing never blocks, readers
/// always see the most recent value and can await changes.
#[derive(Debug)]
pub struct LiveFeed {
    finder: Finder,
    height: watch::Sender<Option<String>>,
    status: watch::Sender<Option<String>>,
}

impl LiveFeed {
    /// Create an empty feed for a chain
    pub fn new(chain: impl Into<String>) -> Self {
        Self::with_finder(Finder::new(chain))
    }

    /// Create an empty feed that links through `finder`
    pub fn with_finder(finder: Finder) -> Self {
        let (height, _) = watch::channel(None);
        let (status, _) = watch::channel(None);
        Self {
            finder,
            height,
            status,
        }
    }

    /// Chain the feed currently follows
    pub fn chain(&self) -> &str {
        self.finder.chain()
    }

    /// Route a transport message by channel name
    ///
    /// Messages on unknown channels are ignored.
    pub fn publish(&self, channel: &str, value: impl Into<String>) {
        match channel {
            HEIGHT_CHANNEL => self.publish_height(value),
            STATUS_CHANNEL => self.publish_status(value),
            other => tracing::debug!(channel = other, "Ignoring message on unknown channel"),
        }
    }

    /// Record a new latest block height
    pub fn publish_height(&self, height: impl Into<String>) {
        let height = height.into();
        tracing::trace!(height = %height, "Latest block height");
        self.height.send_replace(Some(height));
    }

    /// Record a new station status
    pub fn publish_status(&self, status: impl Into<String>) {
        self.status.send_replace(Some(status.into()));
    }

    /// Follow another chain
    ///
    /// Values received for the previous chain are dropped, the same as
    /// unsubscribing and subscribing again.
    pub fn switch_chain(&mut self, chain: impl Into<String>) {
        let chain = chain.into();
        if chain == self.finder.chain() {
            return;
        }

        let _guard = spans::switch_chain(self.finder.chain(), &chain).entered();
        tracing::info!("Switching live feed chain");
        self.finder = Finder::new(chain);
        self.height.send_replace(None);
        self.status.send_replace(None);
    }

    /// Latest height, if any
    pub fn height(&self) -> Option<String> {
        self.height.borrow().clone()
    }

    /// Latest status, if any
    pub fn status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    /// Receiver notified whenever the height changes
    pub fn subscribe_height(&self) -> watch::Receiver<Option<String>> {
        self.height.subscribe()
    }

    /// Receiver notified whenever the status changes
    pub fn subscribe_status(&self) -> watch::Receiver<Option<String>> {
        self.status.subscribe()
    }

    /// Current block and status, formatted
    pub fn view(&self) -> SocketView {
        SocketView {
            block: self
                .height()
                .map(|height| BlockDisplay::new(&height, &self.finder)),
            status: self.status(),
        }
    }

    /// Parameter the fetch layer should attach to requests so responses
    /// are consistent with the displayed block
    pub fn request_params(&self) -> Option<(&'static str, String)> {
        self.height().map(|height| (HEIGHT_PARAM, height))
    }

    /// Watcher that formats the block for this feed's current chain
    pub fn watcher(&self) -> BlockWatcher {
        BlockWatcher {
            finder: self.finder.clone(),
            height: self.subscribe_height(),
            memo: Memo::new(),
        }
    }
}

/// Reader side of the height channel that caches the formatted block
///
/// [`latest`](Self::latest) returns the same `Arc` until the height changes.
#[derive(Debug)]
pub struct BlockWatcher {
    finder: Finder,
    height: watch::Receiver<Option<String>>,
    memo: Memo<String, BlockDisplay>,
}

impl BlockWatcher {
    /// Latest block display, if a height has arrived
    pub fn latest(&mut self) -> Option<Arc<BlockDisplay>> {
        let height = self.height.borrow_and_update().clone()?;
        let finder = &self.finder;
        Some(
            self.memo
                .get_or_compute(height, |height| BlockDisplay::new(height, finder)),
        )
    }

    /// Wait for the next height change
    ///
    /// Returns `false` once the feed has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.height.changed().await.is_ok()
    }
}
