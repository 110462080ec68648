//! Shared test doubles for the bootstrap integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use bathy_mapper::error::LoadError;
use bathy_mapper::names::{NodeIdentity, PrivateParams, RemapTable};
use bathy_mapper::runtime::{Dispatcher, UnitHandle, UnitLoader};
use uuid::Uuid;

/// Build an argv vector from string literals.
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// One recorded `load` call.
#[derive(Debug, Clone)]
pub struct LoadCall {
    pub identity: NodeIdentity,
    pub unit_type: String,
    pub remaps: RemapTable,
    pub params: PrivateParams,
    pub extra_args: Vec<String>,
}

/// Loader that records its calls and accepts a fixed set of unit types.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    known: Vec<String>,
    pub calls: Mutex<Vec<LoadCall>>,
    pub unloads: AtomicU32,
}

impl RecordingLoader {
    pub fn accepting(types: &[&str]) -> Self {
        Self {
            known: types.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<LoadCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl UnitLoader for RecordingLoader {
    fn load(
        &self,
        identity: &NodeIdentity,
        unit_type: &str,
        remaps: &RemapTable,
        params: &PrivateParams,
        extra_args: &[String],
    ) -> Result<UnitHandle, LoadError> {
        self.calls.lock().unwrap().push(LoadCall {
            identity: identity.clone(),
            unit_type: unit_type.to_string(),
            remaps: remaps.clone(),
            params: params.clone(),
            extra_args: extra_args.to_vec(),
        });
        if !self.known.iter().any(|t| t == unit_type) {
            return Err(LoadError::UnknownType {
                unit_type: unit_type.to_string(),
                available: self.known.clone(),
            });
        }
        Ok(UnitHandle {
            name: identity.fully_qualified(),
            unit_type: unit_type.to_string(),
            bond_id: Uuid::new_v4(),
        })
    }

    fn unload_all(&self) {
        self.unloads.fetch_add(1, Ordering::SeqCst);
    }
}

/// Dispatcher that returns immediately, counting how often it was entered.
#[derive(Debug, Clone, Default)]
pub struct InstantDispatcher {
    pub spins: Arc<AtomicU32>,
}

impl InstantDispatcher {
    pub fn spins(&self) -> u32 {
        self.spins.load(Ordering::SeqCst)
    }
}

impl Dispatcher for InstantDispatcher {
    async fn spin(&mut self) -> u64 {
        self.spins.fetch_add(1, Ordering::SeqCst);
        0
    }
}
