//! Weights for pallet-master-minter.
//!
//! Placeholder figures sized from the storage accesses of each call. Replace with the output
//! of the benchmarks in `benchmarking.rs` once they are run on reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-master-minter.
pub trait WeightInfo {
    fn setup() -> Weight;
    fn register_minter() -> Weight;
    fn request_mint() -> Weight;
    fn approve_mint_tokens() -> Weight;
    fn reject_mint_tokens() -> Weight;
    fn mint_tokens() -> Weight;
    fn burn_tokens() -> Weight;
}

/// Weights for pallet-master-minter using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `MasterMinter::Owner` (r:1 w:1)
    /// Storage: `MasterMinter::TokenName` (r:0 w:1)
    /// Storage: `MasterMinter::TokenSymbol` (r:0 w:1)
    /// Storage: `MasterMinter::Decimals` (r:0 w:1)
    fn setup() -> Weight {
        Weight::from_parts(14_000_000, 1_600)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(4_u64))
    }
    /// Storage: `MasterMinter::Owner` (r:1 w:0)
    /// Storage: `MasterMinter::RegisteredMinters` (r:1 w:1)
    fn register_minter() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `MasterMinter::RegisteredMinters` (r:1 w:0)
    /// Storage: `MasterMinter::RequestedTokenAmount` (r:1 w:1)
    fn request_mint() -> Weight {
        Weight::from_parts(13_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `MasterMinter::Owner` (r:1 w:0)
    /// Storage: `MasterMinter::RegisteredMinters` (r:1 w:0)
    /// Storage: `MasterMinter::RequestedTokenAmount` (r:1 w:1)
    /// Storage: `MasterMinter::TotalSupply` (r:1 w:1)
    /// Storage: `MasterMinter::Balances` (r:1 w:1)
    fn approve_mint_tokens() -> Weight {
        Weight::from_parts(22_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `MasterMinter::Owner` (r:1 w:0)
    /// Storage: `MasterMinter::RegisteredMinters` (r:1 w:0)
    /// Storage: `MasterMinter::RequestedTokenAmount` (r:1 w:1)
    fn reject_mint_tokens() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `MasterMinter::Owner` (r:1 w:0)
    /// Storage: `MasterMinter::TotalSupply` (r:1 w:1)
    /// Storage: `MasterMinter::Balances` (r:1 w:1)
    fn mint_tokens() -> Weight {
        Weight::from_parts(15_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `MasterMinter::TotalSupply` (r:1 w:1)
    /// Storage: `MasterMinter::Balances` (r:1 w:1)
    fn burn_tokens() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn setup() -> Weight {
        Weight::from_parts(14_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(4_u64))
    }
    fn register_minter() -> Weight {
        Weight::from_parts(11_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn request_mint() -> Weight {
        Weight::from_parts(13_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn approve_mint_tokens() -> Weight {
        Weight::from_parts(22_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn reject_mint_tokens() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn mint_tokens() -> Weight {
        Weight::from_parts(15_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn_tokens() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
