//! Up-front validation of the adventure tables.
//!
//! Produces the resolved transition map the manager dispatches on, so a
//! successful validation is also the only way to obtain one.

use std::collections::{HashMap, HashSet};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::ids::{KeySymbol, PropId, RoomId, StateId};
use crate::room::RoomRegistry;
use crate::tables::{AdventureTables, Effect, RegionScope, StateTable, Trigger};

/// `(state, trigger) → target` for every `Goto`-style rule.
pub(crate) type TransitionMap = HashMap<(StateId, Trigger), StateId>;

pub(crate) struct Validated {
    pub start: StateId,
    pub transitions: TransitionMap,
}

pub(crate) fn validate(
    tables: &AdventureTables,
    rooms: &RoomRegistry,
    config: &GameConfig,
) -> Result<Validated, ConfigError> {
    let states = &tables.states;
    let first = states.first().ok_or(ConfigError::EmptyStateTable)?;

    let mut seen = HashSet::new();
    for state in states.iter() {
        if !seen.insert(&state.id) {
            return Err(ConfigError::DuplicateState(state.id.clone()));
        }
    }

    let start = config.start_state.clone().unwrap_or_else(|| first.id.clone());
    if !states.contains(&start) {
        return Err(ConfigError::UnknownStartState(start));
    }

    let mut transitions = TransitionMap::new();

    for state in states.iter() {
        if !rooms.contains(&state.room) {
            return Err(ConfigError::UnknownRoom {
                state: state.id.clone(),
                room: state.room.clone(),
            });
        }

        for (key, target) in &state.transitions {
            check_key(&state.id, key, config)?;
            require_state(states, target, || {
                format!("state '{}' transition on '{}'", state.id, key)
            })?;
            insert_unique(
                &mut transitions,
                state.id.clone(),
                Trigger::Key(key.clone()),
                target.clone(),
            )?;
        }

        for (edge, target) in state.exits.iter() {
            require_state(states, target, || {
                format!("state '{}' {} exit", state.id, edge)
            })?;
        }
    }

    let mut regions = HashSet::new();
    for region in tables.clickables.iter() {
        if !regions.insert(&region.id) {
            return Err(ConfigError::DuplicateRegion(region.id.clone()));
        }
        if let RegionScope::State(scope) = &region.scope {
            require_state(states, scope, || format!("clickable '{}' scope", region.id))?;
        }
        if let Some(target) = &region.target {
            require_state(states, target, || format!("clickable '{}' target", region.id))?;
        }
    }

    let mut narrations = HashSet::new();
    for rule in tables.interactions.iter() {
        let context = || format!("interaction on {} in '{}'", rule.trigger, rule.state);
        let state = states
            .get(&rule.state)
            .ok_or_else(|| ConfigError::UnknownState {
                context: context(),
                target: rule.state.clone(),
            })?;

        match &rule.trigger {
            Trigger::Key(key) => check_key(&rule.state, key, config)?,
            Trigger::Click(region) => {
                if !regions.contains(region) {
                    return Err(ConfigError::UnknownRegion {
                        context: context(),
                        region: region.clone(),
                    });
                }
            }
            Trigger::Overlap(prop) => check_prop(rooms, &state.room, prop, context)?,
        }

        match &rule.effect {
            Effect::Goto(target) => {
                require_state(states, target, context)?;
                insert_unique(
                    &mut transitions,
                    rule.state.clone(),
                    rule.trigger.clone(),
                    target.clone(),
                )?;
            }
            Effect::Narrate(_) => {
                if !matches!(rule.trigger, Trigger::Overlap(_)) {
                    return Err(ConfigError::NarrateWithoutOverlap {
                        state: rule.state.clone(),
                        trigger: rule.trigger.to_string(),
                    });
                }
                if !narrations.insert((&rule.state, &rule.trigger)) {
                    return Err(ConfigError::AmbiguousTransition {
                        state: rule.state.clone(),
                        trigger: rule.trigger.to_string(),
                    });
                }
            }
        }
    }

    Ok(Validated { start, transitions })
}

fn check_key(state: &StateId, key: &KeySymbol, config: &GameConfig) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::EmptyInputSymbol {
            state: state.clone(),
        });
    }
    if config.is_reserved(key) {
        return Err(ConfigError::ReservedSymbol {
            state: state.clone(),
            key: key.clone(),
        });
    }
    Ok(())
}

fn check_prop(
    rooms: &RoomRegistry,
    room: &RoomId,
    prop: &PropId,
    context: impl FnOnce() -> String,
) -> Result<(), ConfigError> {
    let known = rooms
        .get(room)
        .is_some_and(|r| r.trigger_props().contains(prop));
    if known {
        Ok(())
    } else {
        Err(ConfigError::UnknownProp {
            context: context(),
            room: room.clone(),
            prop: prop.clone(),
        })
    }
}

fn require_state(
    states: &StateTable,
    target: &StateId,
    context: impl FnOnce() -> String,
) -> Result<(), ConfigError> {
    if states.contains(target) {
        Ok(())
    } else {
        Err(ConfigError::UnknownState {
            context: context(),
            target: target.clone(),
        })
    }
}

fn insert_unique(
    map: &mut TransitionMap,
    state: StateId,
    trigger: Trigger,
    target: StateId,
) -> Result<(), ConfigError> {
    let key = (state, trigger);
    if map.contains_key(&key) {
        let (state, trigger) = key;
        return Err(ConfigError::AmbiguousTransition {
            state,
            trigger: trigger.to_string(),
        });
    }
    map.insert(key, target);
    Ok(())
}
