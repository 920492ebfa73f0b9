//! Benchmarking setup for pallet-master-minter

use super::*;

#[allow(unused)]
use crate::Pallet as MasterMinter;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const AMOUNT: u128 = 1_000_000;

/// Install a fresh owner and return it.
fn set_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    Owner::<T>::put(&owner);
    owner
}

/// Register a minter with `amount` outstanding for a beneficiary.
fn pending_request<T: Config>(amount: u128) -> (T::AccountId, T::AccountId) {
    let minter: T::AccountId = account("minter", 0, 0);
    let beneficiary: T::AccountId = account("beneficiary", 0, 0);
    RegisteredMinters::<T>::insert(&minter, true);
    RequestedTokenAmount::<T>::insert(&minter, &beneficiary, amount);
    (minter, beneficiary)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn setup() {
        Owner::<T>::kill();
        let origin = T::DeployerOrigin::try_successful_origin().expect("Deployer origin");
        let name = sp_std::vec![b'n'; 64];
        let symbol = sp_std::vec![b's'; 16];

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, name, symbol, 18u8);

        assert!(Owner::<T>::get().is_some());
    }

    #[benchmark]
    fn register_minter() {
        let owner = set_owner::<T>();
        let minter: T::AccountId = account("minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), minter.clone());

        assert!(RegisteredMinters::<T>::get(&minter));
    }

    #[benchmark]
    fn request_mint() {
        let minter: T::AccountId = whitelisted_caller();
        let beneficiary: T::AccountId = account("beneficiary", 0, 0);
        RegisteredMinters::<T>::insert(&minter, true);
        // Worst case: accumulate onto an existing entry
        RequestedTokenAmount::<T>::insert(&minter, &beneficiary, AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter.clone()), beneficiary.clone(), AMOUNT);

        assert_eq!(RequestedTokenAmount::<T>::get(&minter, &beneficiary), AMOUNT * 2);
    }

    #[benchmark]
    fn approve_mint_tokens() {
        let owner = set_owner::<T>();
        let (minter, beneficiary) = pending_request::<T>(AMOUNT * 2);
        let supply_before = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), minter.clone(), beneficiary.clone(), AMOUNT);

        assert_eq!(RequestedTokenAmount::<T>::get(&minter, &beneficiary), AMOUNT);
        assert_eq!(Balances::<T>::get(&beneficiary), AMOUNT);
        assert_eq!(TotalSupply::<T>::get(), supply_before + AMOUNT);
    }

    #[benchmark]
    fn reject_mint_tokens() {
        let owner = set_owner::<T>();
        let (minter, beneficiary) = pending_request::<T>(AMOUNT * 2);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), minter.clone(), beneficiary.clone(), AMOUNT);

        assert_eq!(RequestedTokenAmount::<T>::get(&minter, &beneficiary), AMOUNT);
    }

    #[benchmark]
    fn mint_tokens() {
        let owner = set_owner::<T>();
        let beneficiary: T::AccountId = account("beneficiary", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), beneficiary.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&beneficiary), AMOUNT);
    }

    #[benchmark]
    fn burn_tokens() {
        let holder: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&holder, AMOUNT * 2);
        TotalSupply::<T>::mutate(|supply| *supply += AMOUNT * 2);

        #[extrinsic_call]
        _(RawOrigin::Signed(holder.clone()), AMOUNT);

        assert_eq!(Balances::<T>::get(&holder), AMOUNT);
    }

    impl_benchmark_test_suite!(MasterMinter, crate::mock::new_test_ext(), crate::mock::Test);
}
