//! Balance and supply bookkeeping.
//!
//! These primitives only check amounts and arithmetic. Who may reach them is decided by the
//! calls in `lib.rs`, which is why they are crate-private.

use frame_support::{dispatch::DispatchResult, ensure};
use sp_runtime::ArithmeticError;

use crate::{Balances, Config, Error, Event, Pallet, TotalSupply, LOG_TARGET};

impl<T: Config> Pallet<T> {
    /// Create `amount` tokens in `beneficiary`'s balance.
    pub(crate) fn mint(beneficiary: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(amount > 0, Error::<T>::InvalidAmount);
        ensure!(!Self::is_null_account(beneficiary), Error::<T>::InvalidBeneficiary);

        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance =
            Balances::<T>::get(beneficiary).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(beneficiary, balance);

        log::debug!(target: LOG_TARGET, "minted {amount} to {beneficiary:?}");
        Self::deposit_event(Event::Transfer {
            from: None,
            to: Some(beneficiary.clone()),
            value: amount,
        });
        Ok(())
    }

    /// Destroy `amount` tokens from `holder`'s balance.
    pub(crate) fn burn(holder: &T::AccountId, amount: u128) -> DispatchResult {
        let remaining =
            Balances::<T>::get(holder).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        // Supply is the sum of balances, so this only fails on corrupted storage.
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(ArithmeticError::Underflow)?;

        TotalSupply::<T>::put(supply);
        if remaining == 0 {
            Balances::<T>::remove(holder);
        } else {
            Balances::<T>::insert(holder, remaining);
        }

        log::debug!(target: LOG_TARGET, "burned {amount} from {holder:?}");
        Self::deposit_event(Event::Transfer {
            from: Some(holder.clone()),
            to: None,
            value: amount,
        });
        Ok(())
    }
}
