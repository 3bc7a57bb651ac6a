// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use crate::error::ExecuteError;
use gb_adapters::{
    Adapters, ChatAdapter, CommandAdapter, MapAdapter, SequenceAdapter, TeleportAdapter,
};
use gb_core::{Effect, Message, TracedEffect};

/// Executes effects using the configured adapters
pub struct Executor<A: Adapters> {
    adapters: A,
}

impl<A: Adapters> Executor<A> {
    pub fn new(adapters: A) -> Self {
        Self { adapters }
    }

    pub fn adapters(&self) -> &A {
        &self.adapters
    }

    /// Execute a single effect with tracing
    pub fn execute(&self, effect: Effect) -> Result<(), ExecuteError> {
        let span = tracing::info_span!("effect", effect = effect.name());
        let _guard = span.enter();

        tracing::debug!(fields = ?effect.fields(), "executing");

        let result = self.execute_inner(effect);
        if let Err(e) = &result {
            tracing::error!(error = %e, "failed");
        }
        result
    }

    /// Execute effects in order, reporting failures to the player
    ///
    /// A failed effect does not stop the ones after it. Chat failures are
    /// only logged since there is nowhere left to report them.
    pub fn execute_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            let action = action(&effect);
            match self.execute(effect) {
                Ok(()) | Err(ExecuteError::Chat(_)) => {}
                Err(e) => self.report(action, &e),
            }
        }
    }

    fn report(&self, action: &str, error: &ExecuteError) {
        let message = Message::error().text(format!("Could not {}: {}.", action, error));
        if let Err(e) = self.adapters.chat().print(&message) {
            tracing::warn!(error = %e, "failure report not shown");
        }
    }

    fn execute_inner(&self, effect: Effect) -> Result<(), ExecuteError> {
        match effect {
            Effect::Print(message) => self.adapters.chat().print(&message)?,
            Effect::ExecuteCommand { command } => self.adapters.commands().execute(&command)?,
            Effect::Teleport { aetheryte } => self.adapters.teleport().teleport(aetheryte)?,
            Effect::TeleportUnchecked { aetheryte } => {
                self.adapters.teleport().teleport_unchecked(aetheryte)?
            }
            Effect::SetMapFlag { link } => self.adapters.map().set_flag(&link)?,
            Effect::StartSequence => self.adapters.sequence().start()?,
        }
        Ok(())
    }
}

/// What the player is told could not be done
fn action(effect: &Effect) -> &'static str {
    match effect {
        Effect::Print(_) => "print message",
        Effect::ExecuteCommand { .. } => "execute command",
        Effect::Teleport { .. } | Effect::TeleportUnchecked { .. } => "teleport",
        Effect::SetMapFlag { .. } => "set map flag",
        Effect::StartSequence => "start gather sequence",
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
