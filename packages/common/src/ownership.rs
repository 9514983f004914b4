//! Owner capability for privileged entry points.
//!
//! Whoever is stored as owner may call the restricted handlers of a
//! contract. The capability says nothing about what the owner is: an
//! externally owned account during setup, the multisig admin contract in
//! production.

use cosmwasm_std::{Addr, StdError, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not the owner")]
    NotOwner,
}

/// Storage-backed owner slot.
pub struct Owner<'a>(Item<'a, Addr>);

impl<'a> Owner<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Owner(Item::new(namespace))
    }

    pub fn initialize(&self, storage: &mut dyn Storage, owner: &Addr) -> Result<(), OwnershipError> {
        self.0.save(storage, owner)?;
        Ok(())
    }

    pub fn get(&self, storage: &dyn Storage) -> Result<Addr, OwnershipError> {
        Ok(self.0.load(storage)?)
    }

    pub fn is_owner(&self, storage: &dyn Storage, caller: &Addr) -> Result<bool, OwnershipError> {
        Ok(self.get(storage)? == *caller)
    }

    /// Fails with `NotOwner` unless `caller` holds the capability.
    pub fn assert_owner(&self, storage: &dyn Storage, caller: &Addr) -> Result<(), OwnershipError> {
        if !self.is_owner(storage, caller)? {
            return Err(OwnershipError::NotOwner);
        }
        Ok(())
    }

    /// Hand the capability to `new_owner`; only the current owner may do so.
    /// Returns the previous owner.
    pub fn transfer(
        &self,
        storage: &mut dyn Storage,
        caller: &Addr,
        new_owner: &Addr,
    ) -> Result<Addr, OwnershipError> {
        self.assert_owner(storage, caller)?;
        let previous = self.get(storage)?;
        self.0.save(storage, new_owner)?;
        Ok(previous)
    }
}
