// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A fully wired assistant for end-to-end tests.
//!
//! The harness uses the real booking client and tools, pointed at whatever
//! base URL the test provides (usually a wiremock server), and a
//! [`MockProvider`] in place of the model.

use std::sync::Arc;

use easeentry_agent::{DispatchLoop, DispatchSettings, Session, TurnOutcome, load_system_prompt};
use easeentry_booking::BookingClient;
use easeentry_config::EaseEntryConfig;
use easeentry_core::EaseEntryError;
use easeentry_tools::{ToolRegistry, register_builtins};

use crate::mock_provider::{MockProvider, MockReply};

pub struct TestHarness {
    pub provider: MockProvider,
    pub session: Session,
    pub dispatch: DispatchLoop,
    pub config: EaseEntryConfig,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::default()
    }

    /// Run one turn through the dispatch loop.
    pub async fn send(&mut self, input: &str) -> Result<TurnOutcome, EaseEntryError> {
        self.dispatch.handle_turn(&mut self.session, input).await
    }
}

#[derive(Default)]
pub struct TestHarnessBuilder {
    config: EaseEntryConfig,
    replies: Vec<MockReply>,
}

impl TestHarnessBuilder {
    pub fn with_config(mut self, config: EaseEntryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.config.booking.base_url = url.into();
        self
    }

    pub fn with_replies(mut self, replies: Vec<MockReply>) -> Self {
        self.replies = replies;
        self
    }

    pub async fn build(self) -> Result<TestHarness, EaseEntryError> {
        let provider = MockProvider::with_replies(self.replies);
        let client = Arc::new(BookingClient::new(&self.config.booking)?);
        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry, client)?;

        let system_prompt = load_system_prompt(&self.config).await;
        let dispatch = DispatchLoop::new(
            Arc::new(provider.clone()),
            Arc::new(registry),
            DispatchSettings::from_config(&self.config, system_prompt),
        )?;

        Ok(TestHarness {
            provider,
            session: Session::new(),
            dispatch,
            config: self.config,
        })
    }
}
