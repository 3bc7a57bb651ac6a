// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public surface: registration, stage dispatch and teleport helpers

use crate::availability;
use crate::context::StageContext;
use crate::executor::Executor;
use crate::request::GatherRequest;
use crate::stages;
use chrono::{DateTime, Utc};
use gb_adapters::{
    Adapters, DistanceMetric, GameState, Identificator, MapDistance, NoOpIdentificator,
    NoOpUptimeRanker, OfflineGameState, UptimeRanker,
};
use gb_core::{Aetheryte, Clock, Config, Effect, Gatherable, GatheringType, Location, Territory};

/// Read-only collaborators the stages consult
struct Services {
    config: Config,
    identificator: Box<dyn Identificator>,
    uptime: Box<dyn UptimeRanker>,
    game: Box<dyn GameState>,
    distance: Box<dyn DistanceMetric>,
}

impl Services {
    fn context(&self, now: DateTime<Utc>) -> StageContext<'_> {
        StageContext {
            config: &self.config,
            now,
            identificator: self.identificator.as_ref(),
            uptime: self.uptime.as_ref(),
            game: self.game.as_ref(),
            distance: self.distance.as_ref(),
        }
    }
}

/// Owns the single live gather request
///
/// Every registration replaces the request and fires the host's action
/// sequence, which then calls back into [`Gatherer::dispatch`] once per
/// stage.
pub struct Gatherer<A: Adapters, C: Clock> {
    executor: Executor<A>,
    clock: C,
    services: Services,
    request: GatherRequest,
    sequence: u64,
}

impl<A: Adapters, C: Clock> Gatherer<A, C> {
    /// Create a gatherer that knows no names, uptimes or game state yet
    pub fn new(adapters: A, clock: C, config: Config) -> Self {
        Self {
            executor: Executor::new(adapters),
            clock,
            services: Services {
                config,
                identificator: Box::new(NoOpIdentificator),
                uptime: Box::new(NoOpUptimeRanker),
                game: Box::new(OfflineGameState),
                distance: Box::new(MapDistance),
            },
            request: GatherRequest::default(),
            sequence: 0,
        }
    }

    pub fn with_identificator(mut self, identificator: impl Identificator + 'static) -> Self {
        self.services.identificator = Box::new(identificator);
        self
    }

    pub fn with_uptime(mut self, uptime: impl UptimeRanker + 'static) -> Self {
        self.services.uptime = Box::new(uptime);
        self
    }

    pub fn with_game(mut self, game: impl GameState + 'static) -> Self {
        self.services.game = Box::new(game);
        self
    }

    pub fn with_distance(mut self, distance: impl DistanceMetric + 'static) -> Self {
        self.services.distance = Box::new(distance);
        self
    }

    pub fn request(&self) -> &GatherRequest {
        &self.request
    }

    pub fn config(&self) -> &Config {
        &self.services.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.services.config = config;
    }

    pub fn executor(&self) -> &Executor<A> {
        &self.executor
    }

    /// Gather at a specific location
    pub fn register_location(&mut self, location: Location) -> bool {
        let request = GatherRequest::for_location(location, self.clock.now());
        self.start(request, Vec::new())
    }

    /// Gather a resolved item or fish, optionally within one job category
    ///
    /// The location is looked up right away since the target is known.
    pub fn register_item(&mut self, item: Option<Gatherable>, kind: Option<GatheringType>) -> bool {
        let Some(item) = item else {
            return false;
        };
        let mut request = GatherRequest::for_item(item, kind);
        let ctx = self.services.context(self.clock.now());
        let effects = availability::resolve(&mut request, &ctx);
        self.start(request, effects)
    }

    /// Gather an item by name, resolved by the identify stage
    pub fn register_item_name(&mut self, name: &str, kind: Option<GatheringType>) -> bool {
        match GatherRequest::for_item_name(name, kind) {
            Some(request) => self.start(request, Vec::new()),
            None => false,
        }
    }

    /// Gather a fish by name, resolved by the identify stage
    pub fn register_fish_name(&mut self, name: &str) -> bool {
        match GatherRequest::for_fish_name(name) {
            Some(request) => self.start(request, Vec::new()),
            None => false,
        }
    }

    /// Run one stage of the action sequence
    ///
    /// Returns false for tokens that are not stages, leaving the request
    /// untouched.
    pub fn dispatch(&mut self, token: &str) -> bool {
        let ctx = self.services.context(self.clock.now());
        let Some(effects) = stages::dispatch(token, &mut self.request, &ctx) else {
            return false;
        };
        self.executor.execute_all(effects);
        true
    }

    /// Teleport straight to an aetheryte, ignoring the current request
    pub fn teleport_to_aetheryte(&self, aetheryte: &Aetheryte) {
        if let Some(effect) = stages::teleport_to_aetheryte(aetheryte) {
            self.executor.execute_all(vec![effect]);
        }
    }

    /// Teleport to the first attuned aetheryte of a territory
    pub fn teleport_to_territory(&self, territory: &Territory) {
        let effect = stages::teleport_to_territory(
            territory,
            self.services.game.as_ref(),
            self.services.config.argument_color,
        );
        self.executor.execute_all(vec![effect]);
    }

    fn start(&mut self, mut request: GatherRequest, mut effects: Vec<Effect>) -> bool {
        self.sequence += 1;
        request.sequence = self.sequence;
        tracing::info!(
            sequence = request.sequence,
            kind = request.kind(),
            name = %request.pending_name,
            "gather request registered"
        );

        self.request = request;
        effects.push(Effect::StartSequence);
        self.executor.execute_all(effects);
        true
    }
}

#[cfg(test)]
#[path = "gatherer_tests.rs"]
mod tests;
