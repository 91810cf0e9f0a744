// Copyright (c) 2025 - Cowboy AI, Inc.
//! Showcase Service
//!
//! Loads the event feed once and logs the rotating carousel.
//!
//! Run with: cargo run --bin showcase --features http
//!
//! Environment:
//! - SHOWCASE_FEED_URL: feed location (default http://localhost:3000/events.json)
//! - SHOWCASE_FEED_TIMEOUT_SECS: request timeout (default 30)
//! - SHOWCASE_ADVANCE_MS: delay between slides (default 5000)
//! - SHOWCASE_ROTATIONS: stop after this many full rotations (default: run until Ctrl-C)

use anyhow::{Context, Result};
use event_showcase::carousel::{Carousel, CarouselView};
use event_showcase::config::ShowcaseConfig;
use event_showcase::source::HttpFeedSource;
use event_showcase::store::DataStore;
use std::sync::Arc;
use tracing::{info, warn};

fn rotations_from_env() -> Result<Option<u64>> {
    match std::env::var("SHOWCASE_ROTATIONS") {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("SHOWCASE_ROTATIONS={:?} is not a number", raw)),
        Err(_) => Ok(None),
    }
}

fn marker_row(view: &CarouselView) -> String {
    view.pagination()
        .iter()
        .map(|marker| if marker.selected { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn log_view(view: &CarouselView) {
    match view.active_event() {
        Some(event) => info!(
            index = view.active_index().unwrap_or_default(),
            month = view.active_month().unwrap_or_default(),
            "{} [{}]",
            event.title,
            marker_row(view)
        ),
        None => info!("Carousel empty"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ShowcaseConfig::from_env().context("Failed to load configuration")?;
    let rotations = rotations_from_env()?;
    info!("Feed URL: {}", config.feed.url);
    info!("Advance interval: {:?}", config.carousel.advance_interval);

    let source = HttpFeedSource::new(config.feed.clone()).context("Failed to build feed source")?;
    let store = DataStore::new(Arc::new(source));
    let carousel = Carousel::mount(&store, config.carousel.clone());

    let snapshot = store.load().await;
    if let Some(error) = &snapshot.error {
        warn!("Feed unavailable: {}", error);
    }
    if let Some(last) = &snapshot.last {
        info!("Latest listed event: {}", last.title);
    }

    // A bounded run cannot complete a rotation without slides
    if rotations.is_some() {
        if snapshot.is_failed() {
            carousel.unmount().await;
            let cause = snapshot
                .error
                .as_ref()
                .map(|error| error.to_string())
                .unwrap_or_default();
            anyhow::bail!("Feed {} could not be loaded: {}", config.feed.url, cause);
        }
        if snapshot.focus().is_empty() {
            info!("No focus events to rotate");
            carousel.unmount().await;
            return Ok(());
        }
    }

    let mut views = carousel.watch();
    let mut wraps = 0u64;
    let mut previous = views.borrow_and_update().active_index();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
            changed = views.changed() => {
                if changed.is_err() {
                    warn!("Carousel stopped unexpectedly");
                    break;
                }
                let view = views.borrow_and_update().clone();
                if view.active_index() == previous {
                    continue;
                }
                if previous.is_some() && view.active_index() == Some(0) {
                    wraps += 1;
                }
                previous = view.active_index();
                log_view(&view);

                if rotations.is_some_and(|limit| wraps >= limit) {
                    info!("Completed {} rotations", wraps);
                    break;
                }
            }
        }
    }

    carousel.unmount().await;
    Ok(())
}
