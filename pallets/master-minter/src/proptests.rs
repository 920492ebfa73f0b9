//! Random operation sequences checked against a plain model of the ledger.

use std::collections::BTreeMap;

use proptest::prelude::*;
use sp_runtime::{DispatchResult, StateVersion};

use crate::{mock::*, Balances, RequestedTokenAmount};

#[derive(Clone, Debug)]
enum Op {
    Register { caller: u64, minter: u64 },
    Request { caller: u64, beneficiary: u64, amount: u128 },
    Approve { caller: u64, minter: u64, beneficiary: u64, amount: u128 },
    Reject { caller: u64, minter: u64, beneficiary: u64, amount: u128 },
    Mint { caller: u64, beneficiary: u64, amount: u128 },
    Burn { caller: u64, amount: u128 },
}

/// Mostly the owner, sometimes anyone else including the null account.
fn caller() -> impl Strategy<Value = u64> {
    prop_oneof![3 => Just(OWNER), 2 => 0u64..6]
}

fn account() -> impl Strategy<Value = u64> {
    0u64..6
}

fn amount() -> impl Strategy<Value = u128> {
    prop_oneof![1 => Just(0u128), 8 => 1u128..1_000]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (caller(), account()).prop_map(|(caller, minter)| Op::Register { caller, minter }),
        (account(), account(), amount())
            .prop_map(|(caller, beneficiary, amount)| Op::Request { caller, beneficiary, amount }),
        (caller(), account(), account(), amount()).prop_map(
            |(caller, minter, beneficiary, amount)| Op::Approve { caller, minter, beneficiary, amount }
        ),
        (caller(), account(), account(), amount()).prop_map(
            |(caller, minter, beneficiary, amount)| Op::Reject { caller, minter, beneficiary, amount }
        ),
        (caller(), account(), amount())
            .prop_map(|(caller, beneficiary, amount)| Op::Mint { caller, beneficiary, amount }),
        (account(), amount()).prop_map(|(caller, amount)| Op::Burn { caller, amount }),
    ]
}

/// Expected balances and outstanding requests, updated only for calls that succeeded.
#[derive(Default)]
struct Model {
    balances: BTreeMap<u64, u128>,
    requests: BTreeMap<(u64, u64), u128>,
}

impl Model {
    fn from_genesis() -> Self {
        let mut model = Self::default();
        model.balances.insert(HOLDER, HOLDER_BALANCE);
        model
    }

    fn credit(&mut self, who: u64, amount: u128) {
        *self.balances.entry(who).or_default() += amount;
    }

    fn debit(&mut self, who: u64, amount: u128) {
        *self.balances.entry(who).or_default() -= amount;
    }

    fn request(&mut self, minter: u64, beneficiary: u64, amount: u128) {
        *self.requests.entry((minter, beneficiary)).or_default() += amount;
    }

    fn consume(&mut self, minter: u64, beneficiary: u64, amount: u128) {
        let outstanding = self.requests.entry((minter, beneficiary)).or_default();
        assert!(amount <= *outstanding, "consumed more than was outstanding");
        *outstanding -= amount;
    }

    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Register { .. } => {}
            Op::Request { caller, beneficiary, amount } => self.request(caller, beneficiary, amount),
            Op::Approve { minter, beneficiary, amount, .. } => {
                self.consume(minter, beneficiary, amount);
                self.credit(beneficiary, amount);
            }
            Op::Reject { minter, beneficiary, amount, .. } => {
                self.consume(minter, beneficiary, amount)
            }
            Op::Mint { beneficiary, amount, .. } => self.credit(beneficiary, amount),
            Op::Burn { caller, amount } => self.debit(caller, amount),
        }
    }

    fn assert_matches_storage(&self) {
        for (who, balance) in &self.balances {
            assert_eq!(MasterMinter::balance_of(who), *balance, "balance of {who}");
        }
        for ((minter, beneficiary), amount) in &self.requests {
            assert_eq!(
                MasterMinter::requested_token_amount(minter, beneficiary),
                *amount,
                "request of {minter} for {beneficiary}"
            );
        }
        assert!(Balances::<Test>::iter_keys().all(|who| self.balances.contains_key(&who)));
        assert!(RequestedTokenAmount::<Test>::iter_keys()
            .all(|(minter, beneficiary)| self.requests.contains_key(&(minter, beneficiary))));
    }
}

fn dispatch(op: &Op) -> DispatchResult {
    match *op {
        Op::Register { caller, minter } => {
            MasterMinter::register_minter(RuntimeOrigin::signed(caller), minter)
        }
        Op::Request { caller, beneficiary, amount } => {
            MasterMinter::request_mint(RuntimeOrigin::signed(caller), beneficiary, amount)
        }
        Op::Approve { caller, minter, beneficiary, amount } => MasterMinter::approve_mint_tokens(
            RuntimeOrigin::signed(caller),
            minter,
            beneficiary,
            amount,
        ),
        Op::Reject { caller, minter, beneficiary, amount } => MasterMinter::reject_mint_tokens(
            RuntimeOrigin::signed(caller),
            minter,
            beneficiary,
            amount,
        ),
        Op::Mint { caller, beneficiary, amount } => {
            MasterMinter::mint_tokens(RuntimeOrigin::signed(caller), beneficiary, amount)
        }
        Op::Burn { caller, amount } => MasterMinter::burn_tokens(RuntimeOrigin::signed(caller), amount),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ledger_invariants_hold_for_any_call_sequence(ops in prop::collection::vec(op(), 1..48)) {
        new_test_ext().execute_with(|| {
            let mut model = Model::from_genesis();

            for op in &ops {
                let root_before = sp_io::storage::root(StateVersion::V1);
                match dispatch(op) {
                    Ok(()) => model.apply(op),
                    Err(_) => assert_eq!(
                        sp_io::storage::root(StateVersion::V1),
                        root_before,
                        "failed call {op:?} changed storage"
                    ),
                }

                model.assert_matches_storage();
                assert!(MasterMinter::do_try_state().is_ok(), "invariants broken after {op:?}");
            }
        });
    }

    #[test]
    fn reads_never_mutate(minter in account(), beneficiary in account()) {
        new_test_ext().execute_with(|| {
            let root_before = sp_io::storage::root(StateVersion::V1);

            let _ = MasterMinter::owner();
            let _ = MasterMinter::total_supply();
            let _ = MasterMinter::balance_of(beneficiary);
            let _ = MasterMinter::registered_minter(minter);
            let _ = MasterMinter::requested_token_amount(minter, beneficiary);

            assert_eq!(sp_io::storage::root(StateVersion::V1), root_before);
        });
    }

    #[test]
    fn requests_accumulate(first in 1u128..1_000_000, second in 1u128..1_000_000) {
        new_test_ext().execute_with(|| {
            frame_support::assert_ok!(
                MasterMinter::request_mint(RuntimeOrigin::signed(GENESIS_MINTER), INVESTOR, first)
            );
            frame_support::assert_ok!(
                MasterMinter::request_mint(RuntimeOrigin::signed(GENESIS_MINTER), INVESTOR, second)
            );
            assert_eq!(
                MasterMinter::requested_token_amount(GENESIS_MINTER, INVESTOR),
                first + second
            );
        });
    }
}
