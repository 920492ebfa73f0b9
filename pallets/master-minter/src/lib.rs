#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` and `RuntimeEvent` in `Config` are deprecated upstream
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Master Minter Pallet
//!
//! A fungible token ledger whose supply only grows through an owner-approved workflow.
//!
//! The owner registers minters. A registered minter cannot mint; it files a request for a
//! beneficiary and an amount, and the owner then approves the request (minting the tokens) or
//! rejects it. Outstanding requests are tracked per `(minter, beneficiary)` pair and accumulate
//! across repeated requests. Independently of that workflow the owner can mint directly, and
//! every holder can burn from their own balance.
//!
//! Each call is executed inside a storage layer, so a failing call leaves no writes and no
//! events behind.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

mod ledger;
pub mod weights;



#[cfg(test)]
mod proptests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-master-minter";

/// Maximum length of the token name in bytes.
pub type MaxNameLength = ConstU32<64>;

/// Maximum length of the token symbol in bytes.
pub type MaxSymbolLength = ConstU32<16>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to run `setup`. The account it resolves to becomes the owner.
        type DeployerOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Account allowed to register minters, settle requests and mint directly.
    ///
    /// Unset until genesis or `setup` provides one; never changes afterwards.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Token name (e.g., "MasterMinter")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, MaxNameLength>, ValueQuery>;

    /// Token symbol (e.g., "MM")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, MaxSymbolLength>, ValueQuery>;

    /// Token decimals (e.g., 18 for ETH-style)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, always the sum of `Balances`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Minters registered by the owner.
    #[pallet::storage]
    #[pallet::getter(fn registered_minter)]
    pub type RegisteredMinters<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Outstanding requested amount per (minter, beneficiary).
    ///
    /// Entries are removed once fully approved or rejected, so a stored value is never zero.
    #[pallet::storage]
    #[pallet::getter(fn requested_token_amount)]
    pub type RequestedTokenAmount<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Token metadata stored and owner assigned
        Initialized { owner: T::AccountId },
        /// Owner registered a new minter
        MinterRegistered { minter: T::AccountId },
        /// A minter asked for tokens to be minted to a beneficiary
        MintTokenRequested { minter: T::AccountId, beneficiary: T::AccountId, amount: u128 },
        /// Owner cancelled (part of) an outstanding request
        MintTokenRejected { minter: T::AccountId, beneficiary: T::AccountId, amount: u128 },
        /// Balance movement. `from: None` is a mint, `to: None` is a burn.
        Transfer { from: Option<T::AccountId>, to: Option<T::AccountId>, value: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner, or not a registered minter.
        AccessDenied,
        /// Minter is already registered.
        AlreadyRegistered,
        /// The minter named in an approval or rejection is not registered.
        MinterNotRegistered,
        /// Beneficiary is the null account.
        InvalidBeneficiary,
        /// Amount must be greater than zero.
        InvalidAmount,
        /// Amount exceeds what is outstanding for this minter and beneficiary.
        RequestExhausted,
        /// Burn amount exceeds the caller's balance.
        InsufficientBalance,
        /// A balance, the total supply or an outstanding request would exceed `u128::MAX`.
        Overflow,
        /// An owner is already set.
        AlreadyInitialized,
        /// Token name or symbol exceeds its length bound.
        MetadataTooLong,
        /// Minter is the null account.
        InvalidMinter,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Store token metadata and make the deployer the owner. Runs at most once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::setup())]
        pub fn setup(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
            decimals: u8,
        ) -> DispatchResult {
            let deployer = T::DeployerOrigin::ensure_origin(origin)?;
            ensure!(Owner::<T>::get().is_none(), Error::<T>::AlreadyInitialized);

            let name: BoundedVec<u8, MaxNameLength> =
                name.try_into().map_err(|_| Error::<T>::MetadataTooLong)?;
            let symbol: BoundedVec<u8, MaxSymbolLength> =
                symbol.try_into().map_err(|_| Error::<T>::MetadataTooLong)?;

            TokenName::<T>::put(name);
            TokenSymbol::<T>::put(symbol);
            Decimals::<T>::put(decimals);
            Owner::<T>::put(&deployer);

            log::info!(target: LOG_TARGET, "token initialized, owner {deployer:?}");
            Self::deposit_event(Event::Initialized { owner: deployer });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::register_minter())]
        pub fn register_minter(origin: OriginFor<T>, minter: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Self::is_null_account(&minter), Error::<T>::InvalidMinter);
            ensure!(!RegisteredMinters::<T>::get(&minter), Error::<T>::AlreadyRegistered);

            RegisteredMinters::<T>::insert(&minter, true);
            log::debug!(target: LOG_TARGET, "registered minter {minter:?}");
            Self::deposit_event(Event::MinterRegistered { minter });
            Ok(())
        }

        /// Ask the owner to mint `amount` to `beneficiary`.
        ///
        /// Adds to whatever the caller already has outstanding for that beneficiary.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::request_mint())]
        pub fn request_mint(
            origin: OriginFor<T>,
            beneficiary: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            ensure!(RegisteredMinters::<T>::get(&minter), Error::<T>::AccessDenied);
            ensure!(!Self::is_null_account(&beneficiary), Error::<T>::InvalidBeneficiary);
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            RequestedTokenAmount::<T>::try_mutate(&minter, &beneficiary, |outstanding| {
                *outstanding = outstanding.checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Ok::<(), Error<T>>(())
            })?;

            log::debug!(
                target: LOG_TARGET,
                "minter {minter:?} requested {amount} for {beneficiary:?}"
            );
            Self::deposit_event(Event::MintTokenRequested { minter, beneficiary, amount });
            Ok(())
        }

        /// Consume `amount` of an outstanding request and mint it to the beneficiary.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve_mint_tokens())]
        pub fn approve_mint_tokens(
            origin: OriginFor<T>,
            minter: T::AccountId,
            beneficiary: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::consume_request(&minter, &beneficiary, amount)?;
            // A failing mint discards the decrement above together with the rest of the call.
            Self::mint(&beneficiary, amount)?;

            log::debug!(
                target: LOG_TARGET,
                "approved {amount} requested by {minter:?} for {beneficiary:?}"
            );
            Ok(())
        }

        /// Consume `amount` of an outstanding request without minting.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::reject_mint_tokens())]
        pub fn reject_mint_tokens(
            origin: OriginFor<T>,
            minter: T::AccountId,
            beneficiary: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::consume_request(&minter, &beneficiary, amount)?;

            log::debug!(
                target: LOG_TARGET,
                "rejected {amount} requested by {minter:?} for {beneficiary:?}"
            );
            Self::deposit_event(Event::MintTokenRejected { minter, beneficiary, amount });
            Ok(())
        }

        /// Owner mint that bypasses the request workflow.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::mint_tokens())]
        pub fn mint_tokens(
            origin: OriginFor<T>,
            beneficiary: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::mint(&beneficiary, amount)
        }

        /// Burn `amount` from the caller's own balance.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn_tokens())]
        pub fn burn_tokens(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let holder = ensure_signed(origin)?;
            Self::burn(&holder, amount)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Owner account. `None` leaves the token waiting for `setup`.
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Minters registered at genesis
        pub registered_minters: Vec<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, MaxNameLength> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, MaxSymbolLength> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                assert!(!Pallet::<T>::is_null_account(owner), "Owner cannot be the null account");
                Owner::<T>::put(owner);
            }

            for minter in &self.registered_minters {
                assert!(!Pallet::<T>::is_null_account(minter), "Minter cannot be the null account");
                RegisteredMinters::<T>::insert(minter, true);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                assert!(
                    !Pallet::<T>::is_null_account(account),
                    "Initial balance cannot go to the null account"
                );
                Balances::<T>::mutate(account, |bal| {
                    *bal = bal.checked_add(*amount).expect("Initial balance overflow")
                });
                total = total.checked_add(*amount).expect("Initial supply overflow");
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Whether `who` is the null account, the account decoded from all-zero bytes.
    pub fn is_null_account(who: &T::AccountId) -> bool {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes()).is_ok_and(|null| &null == who)
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::AccessDenied);
        Ok(who)
    }

    /// Take `amount` off the outstanding request of `minter` for `beneficiary`.
    fn consume_request(
        minter: &T::AccountId,
        beneficiary: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(RegisteredMinters::<T>::get(minter), Error::<T>::MinterNotRegistered);
        ensure!(!Self::is_null_account(beneficiary), Error::<T>::InvalidBeneficiary);
        ensure!(amount > 0, Error::<T>::InvalidAmount);

        RequestedTokenAmount::<T>::try_mutate_exists(minter, beneficiary, |outstanding| {
            let remaining = outstanding
                .unwrap_or_default()
                .checked_sub(amount)
                .ok_or(Error::<T>::RequestExhausted)?;
            *outstanding = (remaining > 0).then_some(remaining);
            Ok::<(), Error<T>>(())
        })?;
        Ok(())
    }

    /// Check the ledger and request-table invariants.
    ///
    /// * `TotalSupply` equals the sum of all balances.
    /// * Every stored request is non-zero, filed by a registered minter, for a real beneficiary.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, bal| acc.checked_add(bal))
            .ok_or(DispatchError::Other("balance sum overflows"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("total supply differs from the sum of balances")
        );

        for (minter, beneficiary, amount) in RequestedTokenAmount::<T>::iter() {
            ensure!(amount > 0, DispatchError::Other("zero request left in storage"));
            ensure!(
                RegisteredMinters::<T>::get(&minter),
                DispatchError::Other("request filed by an unregistered minter")
            );
            ensure!(
                !Self::is_null_account(&beneficiary),
                DispatchError::Other("request for the null account")
            );
        }
        Ok(())
    }
}
